//! Submission orchestration shared by the contact form and the ROI form.
//!
//! The sequence is fixed: persist first, then (and only then) fire the alert
//! webhook as a detached task. The alert's outcome never reaches the caller;
//! a failed insert is the only failure a visitor ever sees.

use crate::core::format;

use super::notify::{LeadAlert, LeadKind, Notifier};
use super::records::{ContactLead, RoiLead};
use super::supabase::{LeadError, LeadsClient};

/// UI-facing submission state. Failure is not a phase: the form returns to
/// an editable `Idle` with an error flag alongside.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

/// Persist a contact lead and, on success, alert the sales channel.
pub async fn submit_contact(
    client: &LeadsClient,
    notifier: &Notifier,
    lead: &ContactLead,
) -> Result<(), LeadError> {
    client.insert_contact(lead).await?;
    notifier.send_detached(contact_alert(lead));
    Ok(())
}

/// Persist an ROI lead and, on success, alert the sales channel.
pub async fn submit_roi(
    client: &LeadsClient,
    notifier: &Notifier,
    lead: &RoiLead,
) -> Result<(), LeadError> {
    client.insert_roi(lead).await?;
    notifier.send_detached(roi_alert(lead));
    Ok(())
}

fn contact_alert(lead: &ContactLead) -> LeadAlert {
    LeadAlert::new(
        LeadKind::Contact,
        format!(
            "New consultation request: {} ({}), {}, ~{} patients/month, {}",
            lead.clinic_name, lead.owner_name, lead.location, lead.monthly_patient_volume, lead.email
        ),
        &lead.whatsapp,
        lead.message.clone(),
    )
}

fn roi_alert(lead: &RoiLead) -> LeadAlert {
    LeadAlert::new(
        LeadKind::Roi,
        format!(
            "New ROI report request: {} ({}), {}",
            lead.clinic_name, lead.owner_name, lead.email
        ),
        &lead.whatsapp,
        format!(
            "Projected {} per month ({} the subscription)",
            format::format_rupiah(lead.projected_revenue),
            format::format_multiplier(lead.roi_multiplier)
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{project, RoiInputs};

    #[test]
    fn contact_alert_summarizes_the_lead_for_sales() {
        let lead = ContactLead {
            clinic_name: "Luminique Aesthetic".into(),
            owner_name: "Dr. Adeline".into(),
            email: "adeline@luminique.id".into(),
            whatsapp: "0812000111".into(),
            location: "Yogyakarta".into(),
            monthly_patient_volume: 450,
            message: "Interested in the EMR module.".into(),
        };

        let alert = contact_alert(&lead);
        assert_eq!(alert.kind, "contact");
        assert_eq!(alert.user_phone, "62812000111");
        assert_eq!(alert.user_message, "Interested in the EMR module.");
        assert!(alert.internal_message.contains("Luminique Aesthetic"));
        assert!(alert.internal_message.contains("~450 patients/month"));
    }

    #[test]
    fn roi_alert_carries_the_formatted_projection() {
        let inputs = RoiInputs {
            monthly_visits: 400.0,
            avg_treatment_value: 750_000.0,
            no_show_rate_pct: 12.0,
            avg_repeat_visits: 1.2,
        };
        let lead = RoiLead::new(
            "Luminique Aesthetic".into(),
            "Dr. Adeline".into(),
            "adeline@luminique.id".into(),
            "62812000111".into(),
            &inputs,
            &project(&inputs),
        );

        let alert = roi_alert(&lead);
        assert_eq!(alert.kind, "roi");
        assert_eq!(
            alert.user_message,
            "Projected Rp 76.200.000 per month (61x the subscription)"
        );
    }
}
