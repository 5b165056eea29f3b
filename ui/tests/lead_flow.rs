//! End-to-end checks of the lead submission sequence against mock servers:
//! persist first, alert after, and the alert never changes the outcome.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ui::calculator::{project, RoiInputs};
use ui::leads::{submit_contact, submit_roi, ContactLead, LeadsClient, Notifier, RoiLead};

const ANON_KEY: &str = "test-anon-key";

fn sample_contact_lead() -> ContactLead {
    ContactLead {
        clinic_name: "Luminique Aesthetic".into(),
        owner_name: "Dr. Adeline".into(),
        email: "adeline@luminique.id".into(),
        whatsapp: "0812000111".into(),
        location: "Yogyakarta".into(),
        monthly_patient_volume: 450,
        message: "Interested in the EMR module.".into(),
    }
}

fn sample_roi_lead() -> RoiLead {
    let inputs = RoiInputs {
        monthly_visits: 400.0,
        avg_treatment_value: 750_000.0,
        no_show_rate_pct: 12.0,
        avg_repeat_visits: 1.2,
    };
    RoiLead::new(
        "Luminique Aesthetic".into(),
        "Dr. Adeline".into(),
        "adeline@luminique.id".into(),
        "0812000111".into(),
        &inputs,
        &project(&inputs),
    )
}

// The alert is a detached task; give it a moment to land before the mock
// servers verify their expectations on drop.
async fn wait_for_detached_alert() {
    tokio::time::sleep(std::time::Duration::from_millis(250)).await;
}

#[tokio::test]
async fn contact_lead_persists_then_alerts() {
    let backend = MockServer::start().await;
    let hooks = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/leads_contact"))
        .and(header("apikey", ANON_KEY))
        .and(header("Prefer", "return=minimal"))
        .and(body_partial_json(json!({
            "clinic_name": "Luminique Aesthetic",
            "monthly_patient_volume": 450,
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&backend)
        .await;

    Mock::given(method("POST"))
        .and(path("/lead-alert"))
        .and(body_partial_json(json!({
            "type": "contact",
            "userPhone": "62812000111",
            "userMessage": "Interested in the EMR module.",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&hooks)
        .await;

    let client = LeadsClient::with_base(backend.uri(), ANON_KEY);
    let notifier = Notifier::with_endpoint(format!("{}/lead-alert", hooks.uri()));

    submit_contact(&client, &notifier, &sample_contact_lead())
        .await
        .expect("persistence succeeded, so the submission succeeds");

    wait_for_detached_alert().await;
}

#[tokio::test]
async fn roi_lead_persists_then_alerts() {
    let backend = MockServer::start().await;
    let hooks = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/leads_roi"))
        .and(header("apikey", ANON_KEY))
        .and(body_partial_json(json!({
            "monthly_patients": 400.0,
            "repeat_visit": 1.2,
            "roi_multiplier": 61.0,
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&backend)
        .await;

    Mock::given(method("POST"))
        .and(path("/lead-alert"))
        .and(body_partial_json(json!({ "type": "roi" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&hooks)
        .await;

    let client = LeadsClient::with_base(backend.uri(), ANON_KEY);
    let notifier = Notifier::with_endpoint(format!("{}/lead-alert", hooks.uri()));

    submit_roi(&client, &notifier, &sample_roi_lead())
        .await
        .expect("persistence succeeded, so the submission succeeds");

    wait_for_detached_alert().await;
}

#[tokio::test]
async fn failed_persistence_skips_the_alert() {
    let backend = MockServer::start().await;
    let hooks = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/leads_contact"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&backend)
        .await;

    // The webhook must never be touched on a failed insert.
    Mock::given(method("POST"))
        .and(path("/lead-alert"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&hooks)
        .await;

    let client = LeadsClient::with_base(backend.uri(), ANON_KEY);
    let notifier = Notifier::with_endpoint(format!("{}/lead-alert", hooks.uri()));

    let outcome = submit_contact(&client, &notifier, &sample_contact_lead()).await;
    assert!(outcome.is_err(), "a rejected insert fails the submission");

    wait_for_detached_alert().await;
    assert!(
        hooks.received_requests().await.unwrap_or_default().is_empty(),
        "no alert may be attempted when persistence fails"
    );
}

#[tokio::test]
async fn alert_failure_does_not_fail_the_submission() {
    let backend = MockServer::start().await;
    let hooks = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/leads_roi"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&backend)
        .await;

    Mock::given(method("POST"))
        .and(path("/lead-alert"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&hooks)
        .await;

    let client = LeadsClient::with_base(backend.uri(), ANON_KEY);
    let notifier = Notifier::with_endpoint(format!("{}/lead-alert", hooks.uri()));

    submit_roi(&client, &notifier, &sample_roi_lead())
        .await
        .expect("a rejected alert never surfaces to the visitor");

    wait_for_detached_alert().await;
}

#[tokio::test]
async fn unreachable_webhook_is_swallowed() {
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/leads_contact"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&backend)
        .await;

    let client = LeadsClient::with_base(backend.uri(), ANON_KEY);
    // Port 9 is discard; nothing listens there.
    let notifier = Notifier::with_endpoint("http://127.0.0.1:9/lead-alert");

    submit_contact(&client, &notifier, &sample_contact_lead())
        .await
        .expect("a dead webhook endpoint never surfaces to the visitor");

    wait_for_detached_alert().await;
}
