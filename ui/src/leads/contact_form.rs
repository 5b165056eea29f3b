use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::t;

use super::records::{ContactLead, VolumeBucket};
use super::submit::{self, SubmitPhase};
use super::supabase::LeadsClient;
use super::notify::Notifier;

#[derive(Debug, Clone)]
enum ContactEvent {
    Submit,
}

/// Consultation-request form on the contact page. Required-field presence is
/// enforced by the inputs themselves; a failed submission keeps every field
/// as typed.
#[component]
pub fn ContactForm() -> Element {
    let mut clinic_name = use_signal(String::new);
    let mut owner_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut whatsapp = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut volume = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut phase = use_signal(SubmitPhase::default);
    let mut failed = use_signal(|| false);

    let coroutine = {
        let clinic_ref = clinic_name.clone();
        let owner_ref = owner_name.clone();
        let email_ref = email.clone();
        let whatsapp_ref = whatsapp.clone();
        let location_ref = location.clone();
        let volume_ref = volume.clone();
        let message_ref = message.clone();
        let phase_ref = phase.clone();
        let failed_ref = failed.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<ContactEvent>| {
            let clinic_signal = clinic_ref.clone();
            let owner_signal = owner_ref.clone();
            let email_signal = email_ref.clone();
            let whatsapp_signal = whatsapp_ref.clone();
            let location_signal = location_ref.clone();
            let volume_signal = volume_ref.clone();
            let message_signal = message_ref.clone();
            let mut phase_signal = phase_ref.clone();
            let mut failed_signal = failed_ref.clone();

            async move {
                let client = LeadsClient::new();
                let notifier = Notifier::new();

                while let Some(event) = rx.next().await {
                    match event {
                        ContactEvent::Submit => {
                            // The submit control is disabled while in flight;
                            // this guard covers queued duplicates as well.
                            if phase_signal() == SubmitPhase::Submitting {
                                continue;
                            }
                            failed_signal.set(false);
                            phase_signal.set(SubmitPhase::Submitting);

                            let lead = ContactLead {
                                clinic_name: clinic_signal().trim().to_string(),
                                owner_name: owner_signal().trim().to_string(),
                                email: email_signal().trim().to_string(),
                                whatsapp: whatsapp_signal().trim().to_string(),
                                location: location_signal().trim().to_string(),
                                monthly_patient_volume: VolumeBucket::representative_for(
                                    &volume_signal(),
                                ),
                                message: message_signal().trim().to_string(),
                            };

                            match submit::submit_contact(&client, &notifier, &lead).await {
                                Ok(()) => phase_signal.set(SubmitPhase::Succeeded),
                                Err(err) => {
                                    tracing::error!(%err, "contact lead submission failed");
                                    failed_signal.set(true);
                                    phase_signal.set(SubmitPhase::Idle);
                                }
                            }
                        }
                    }
                }
            }
        })
    };

    let submitting = phase() == SubmitPhase::Submitting;

    if phase() == SubmitPhase::Succeeded {
        return rsx! {
            div { class: "contact-form contact-form--thanks",
                h3 { {t!("contact-thanks-title")} }
                p { {t!("contact-thanks-body")} }
                button {
                    r#type: "button",
                    class: "contact-form__again",
                    onclick: move |_| {
                        clinic_name.set(String::new());
                        owner_name.set(String::new());
                        email.set(String::new());
                        whatsapp.set(String::new());
                        location.set(String::new());
                        volume.set(String::new());
                        message.set(String::new());
                        failed.set(false);
                        phase.set(SubmitPhase::Idle);
                    },
                    {t!("contact-thanks-again")}
                }
            }
        };
    }

    rsx! {
        form {
            class: "contact-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                coroutine.send(ContactEvent::Submit);
            },

            div { class: "form-grid",
                div { class: "form-field",
                    label { r#for: "contact-clinic", {t!("contact-form-clinic")} }
                    input {
                        id: "contact-clinic",
                        r#type: "text",
                        required: true,
                        placeholder: "e.g. Luminique Aesthetic",
                        value: "{clinic_name}",
                        oninput: move |evt| clinic_name.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { r#for: "contact-owner", {t!("contact-form-owner")} }
                    input {
                        id: "contact-owner",
                        r#type: "text",
                        required: true,
                        placeholder: "Dr. Adeline Smith",
                        value: "{owner_name}",
                        oninput: move |evt| owner_name.set(evt.value()),
                    }
                }
            }

            div { class: "form-grid",
                div { class: "form-field",
                    label { r#for: "contact-email", {t!("form-email")} }
                    input {
                        id: "contact-email",
                        r#type: "email",
                        required: true,
                        placeholder: "you@clinic.com",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { r#for: "contact-whatsapp", {t!("form-whatsapp")} }
                    input {
                        id: "contact-whatsapp",
                        r#type: "tel",
                        required: true,
                        placeholder: "08xx xxxx xxxx",
                        value: "{whatsapp}",
                        oninput: move |evt| whatsapp.set(evt.value()),
                    }
                }
            }

            div { class: "form-grid",
                div { class: "form-field",
                    label { r#for: "contact-location", {t!("contact-form-location")} }
                    input {
                        id: "contact-location",
                        r#type: "text",
                        required: true,
                        placeholder: "Yogyakarta",
                        value: "{location}",
                        oninput: move |evt| location.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { r#for: "contact-volume", {t!("contact-form-volume")} }
                    select {
                        id: "contact-volume",
                        value: "{volume}",
                        oninput: move |evt| volume.set(evt.value()),
                        option { value: "", {t!("contact-form-volume-placeholder")} }
                        { VolumeBucket::ALL.iter().map(|bucket| {
                            let label = bucket.label();
                            rsx! {
                                option { key: "{label}", value: "{label}", "{label}" }
                            }
                        })}
                    }
                }
            }

            div { class: "form-field",
                label { r#for: "contact-message", {t!("contact-form-message")} }
                textarea {
                    id: "contact-message",
                    required: true,
                    placeholder: t!("contact-form-message-placeholder"),
                    value: "{message}",
                    oninput: move |evt| message.set(evt.value()),
                }
            }

            if failed() {
                div { class: "form-error", role: "alert", {t!("form-error-generic")} }
            }

            button {
                r#type: "submit",
                class: "button button--primary contact-form__submit",
                disabled: submitting,
                if submitting {
                    {t!("form-submitting")}
                } else {
                    {t!("contact-form-cta")}
                }
            }
        }
    }
}
