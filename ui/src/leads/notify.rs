//! Fire-and-forget webhook alert for fresh leads. Delivery is best-effort:
//! the outcome is logged and never surfaces to the visitor.

use serde::Serialize;

use crate::core::platform;

fn default_endpoint() -> &'static str {
    option_env!("ESTHIRAE_LEAD_WEBHOOK_URL")
        .unwrap_or("https://hooks.esthirae.com/webhook/lead-alert")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadKind {
    Contact,
    Roi,
}

impl LeadKind {
    fn wire_name(self) -> &'static str {
        match self {
            LeadKind::Contact => "contact",
            LeadKind::Roi => "roi",
        }
    }
}

/// Wire payload of the alert webhook.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadAlert {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub internal_message: String,
    pub user_phone: String,
    pub user_message: String,
}

impl LeadAlert {
    pub fn new(
        kind: LeadKind,
        internal_message: String,
        raw_phone: &str,
        user_message: String,
    ) -> Self {
        Self {
            kind: kind.wire_name(),
            internal_message,
            user_phone: normalize_whatsapp(raw_phone),
            user_message,
        }
    }
}

/// Replace a single leading "0" with Indonesia's country code. Numbers that
/// already carry a country code pass through unchanged.
pub fn normalize_whatsapp(raw: &str) -> String {
    match raw.strip_prefix('0') {
        Some(rest) => format!("62{rest}"),
        None => raw.to_string(),
    }
}

/// Sender for the lead alert webhook.
#[derive(Debug, Clone)]
pub struct Notifier {
    http: reqwest::Client,
    endpoint: String,
}

impl Notifier {
    pub fn new() -> Self {
        Self::with_endpoint(default_endpoint())
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Detach the delivery from the caller. The spawned task owns its whole
    /// error boundary; nothing is awaited and nothing is returned.
    pub fn send_detached(&self, alert: LeadAlert) {
        let http = self.http.clone();
        let endpoint = self.endpoint.clone();
        platform::spawn_future(async move {
            deliver(http, endpoint, alert).await;
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

async fn deliver(http: reqwest::Client, endpoint: String, alert: LeadAlert) {
    match http.post(&endpoint).json(&alert).send().await {
        Ok(response) => {
            let status = response.status();
            if !status.is_success() {
                tracing::warn!(%status, "lead alert webhook rejected");
            }
            // Response body (if any) is JSON and only logged.
            match response.json::<serde_json::Value>().await {
                Ok(body) => tracing::debug!(%body, "lead alert webhook response"),
                Err(err) => tracing::debug!(%err, "lead alert webhook response unreadable"),
            }
        }
        Err(err) => tracing::warn!(%err, "lead alert webhook unreachable"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_zero_becomes_country_code() {
        assert_eq!(normalize_whatsapp("0898096611"), "62898096611");
    }

    #[test]
    fn only_the_first_zero_is_replaced() {
        assert_eq!(normalize_whatsapp("0081234"), "62081234");
    }

    #[test]
    fn numbers_without_leading_zero_pass_through() {
        assert_eq!(normalize_whatsapp("62898096611"), "62898096611");
        assert_eq!(normalize_whatsapp("+62 898"), "+62 898");
        assert_eq!(normalize_whatsapp(""), "");
    }

    #[test]
    fn alert_serializes_with_the_webhook_field_names() {
        let alert = LeadAlert::new(
            LeadKind::Roi,
            "New ROI report request".into(),
            "0812111222",
            "Projected Rp 76.200.000 per month".into(),
        );
        let value = serde_json::to_value(&alert).expect("alert serializes");

        assert_eq!(value["type"], "roi");
        assert_eq!(value["internalMessage"], "New ROI report request");
        assert_eq!(value["userPhone"], "62812111222");
        assert_eq!(value["userMessage"], "Projected Rp 76.200.000 per month");
        assert_eq!(value.as_object().map(|o| o.len()), Some(4));
    }
}
