//! Lead capture: record shapes, the hosted persistence client, the alert
//! webhook and the submission orchestration shared by both forms.

pub mod contact_form;
pub mod notify;
pub mod records;
pub mod submit;
pub mod supabase;

pub use contact_form::ContactForm;
pub use notify::{normalize_whatsapp, LeadAlert, LeadKind, Notifier};
pub use records::{ContactLead, RoiLead, VolumeBucket};
pub use submit::{submit_contact, submit_roi, SubmitPhase};
pub use supabase::{LeadError, LeadsClient};
