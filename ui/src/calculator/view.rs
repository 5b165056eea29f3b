use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::{format, platform, timing};
use crate::leads::{submit, LeadsClient, Notifier, RoiLead, SubmitPhase};
use crate::t;

use super::model::{self, RoiInputs, RoiProjection};

/// Minimum pause between computing a projection and revealing it. The
/// numbers land too fast otherwise and the panel flashes.
const REVEAL_DELAY_MS: u64 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum CalcPhase {
    #[default]
    Idle,
    Computing,
    Revealed,
}

#[derive(Debug, Clone)]
enum CalcEvent {
    Calculate,
    Reveal { calc_id: u64 },
    SubmitLead,
}

#[component]
pub fn RoiCalculator() -> Element {
    // Raw field text; parsing happens at calculation time.
    let mut visits = use_signal(String::new);
    let mut avg_value = use_signal(String::new);
    let mut no_show = use_signal(String::new);
    let mut repeat_visits = use_signal(String::new);

    let phase = use_signal(CalcPhase::default);
    let computed = use_signal(|| Option::<(RoiInputs, RoiProjection)>::None);
    let calc_id = use_signal(|| 0u64);

    // Report-request form shown under the revealed projection.
    let mut clinic_name = use_signal(String::new);
    let mut owner_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut whatsapp = use_signal(String::new);
    let submit_phase = use_signal(SubmitPhase::default);
    let mut failed = use_signal(|| false);

    let sender_slot: Rc<RefCell<Option<UnboundedSender<CalcEvent>>>> = Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = {
        let visits_ref = visits.clone();
        let avg_value_ref = avg_value.clone();
        let no_show_ref = no_show.clone();
        let repeat_ref = repeat_visits.clone();
        let phase_ref = phase.clone();
        let computed_ref = computed.clone();
        let calc_id_ref = calc_id.clone();
        let clinic_ref = clinic_name.clone();
        let owner_ref = owner_name.clone();
        let email_ref = email.clone();
        let whatsapp_ref = whatsapp.clone();
        let submit_phase_ref = submit_phase.clone();
        let failed_ref = failed.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<CalcEvent>| {
            let sender_slot = sender_slot_for_loop.clone();
            let visits_signal = visits_ref.clone();
            let avg_value_signal = avg_value_ref.clone();
            let no_show_signal = no_show_ref.clone();
            let repeat_signal = repeat_ref.clone();
            let mut phase_signal = phase_ref.clone();
            let mut computed_signal = computed_ref.clone();
            let mut calc_id_signal = calc_id_ref.clone();
            let clinic_signal = clinic_ref.clone();
            let owner_signal = owner_ref.clone();
            let email_signal = email_ref.clone();
            let whatsapp_signal = whatsapp_ref.clone();
            let mut submit_phase_signal = submit_phase_ref.clone();
            let mut failed_signal = failed_ref.clone();

            async move {
                let client = LeadsClient::new();
                let notifier = Notifier::new();

                while let Some(event) = rx.next().await {
                    match event {
                        CalcEvent::Calculate => {
                            let inputs = RoiInputs {
                                monthly_visits: parse_field(&visits_signal()),
                                avg_treatment_value: parse_field(&avg_value_signal()),
                                no_show_rate_pct: parse_field(&no_show_signal()),
                                avg_repeat_visits: parse_field(&repeat_signal()),
                            };
                            let projection = model::project(&inputs);
                            computed_signal.set(Some((inputs, projection)));
                            phase_signal.set(CalcPhase::Computing);

                            let id = calc_id_signal() + 1;
                            calc_id_signal.set(id);
                            queue_reveal(sender_slot.clone(), id);
                        }
                        CalcEvent::Reveal { calc_id: id } => {
                            // A newer calculation supersedes this reveal.
                            if calc_id_signal() == id {
                                phase_signal.set(CalcPhase::Revealed);
                            }
                        }
                        CalcEvent::SubmitLead => {
                            if submit_phase_signal() == SubmitPhase::Submitting {
                                continue;
                            }
                            let Some((inputs, projection)) = computed_signal() else {
                                continue;
                            };
                            failed_signal.set(false);
                            submit_phase_signal.set(SubmitPhase::Submitting);

                            let lead = RoiLead::new(
                                clinic_signal().trim().to_string(),
                                owner_signal().trim().to_string(),
                                email_signal().trim().to_string(),
                                whatsapp_signal().trim().to_string(),
                                &inputs,
                                &projection,
                            );

                            match submit::submit_roi(&client, &notifier, &lead).await {
                                Ok(()) => submit_phase_signal.set(SubmitPhase::Succeeded),
                                Err(err) => {
                                    tracing::error!(%err, "roi lead submission failed");
                                    failed_signal.set(true);
                                    submit_phase_signal.set(SubmitPhase::Idle);
                                }
                            }
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    let send_event = {
        let coroutine = coroutine.clone();
        move |event: CalcEvent| {
            coroutine.send(event);
        }
    };
    let send_calculate = send_event.clone();
    let send_submit = send_event.clone();

    let computing = phase() == CalcPhase::Computing;
    let revealed = phase() == CalcPhase::Revealed;
    let submitting = submit_phase() == SubmitPhase::Submitting;
    let projection = computed().map(|(_, projection)| projection);

    rsx! {
        section { class: "roi-calculator", id: "roi",
            div { class: "roi-calculator__header",
                h2 { {t!("roi-title")} }
                p { {t!("roi-intro")} }
            }

            div { class: "roi-calculator__inputs",
                div { class: "form-field",
                    label { r#for: "roi-visits", {t!("roi-field-visits")} }
                    input {
                        id: "roi-visits",
                        r#type: "number",
                        placeholder: "400",
                        value: "{visits}",
                        oninput: move |evt| visits.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { r#for: "roi-avg-value", {t!("roi-field-avg-value")} }
                    input {
                        id: "roi-avg-value",
                        r#type: "number",
                        placeholder: "750000",
                        value: "{avg_value}",
                        oninput: move |evt| avg_value.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { r#for: "roi-no-show", {t!("roi-field-no-show")} }
                    input {
                        id: "roi-no-show",
                        r#type: "number",
                        placeholder: "12",
                        value: "{no_show}",
                        oninput: move |evt| no_show.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { r#for: "roi-repeat", {t!("roi-field-repeat")} }
                    input {
                        id: "roi-repeat",
                        r#type: "number",
                        placeholder: "1.2",
                        value: "{repeat_visits}",
                        oninput: move |evt| repeat_visits.set(evt.value()),
                    }
                }
            }

            button {
                r#type: "button",
                class: "button button--primary roi-calculator__run",
                disabled: computing,
                onclick: move |_| send_calculate(CalcEvent::Calculate),
                if computing {
                    {t!("roi-computing")}
                } else {
                    {t!("roi-cta")}
                }
            }

            if computing {
                div { class: "roi-calculator__pending", {t!("roi-pending")} }
            }

            if revealed {
                if let Some(projection) = projection {
                    div { class: "roi-calculator__results",
                        div { class: "roi-stat",
                            span { class: "roi-stat__label", {t!("roi-result-monthly")} }
                            span { class: "roi-stat__value",
                                {format::format_rupiah(projection.monthly_increase)}
                            }
                        }
                        div { class: "roi-stat",
                            span { class: "roi-stat__label", {t!("roi-result-annual")} }
                            span { class: "roi-stat__value",
                                {format::format_rupiah(projection.annual_impact)}
                            }
                        }
                        div { class: "roi-stat",
                            span { class: "roi-stat__label", {t!("roi-result-multiplier")} }
                            span { class: "roi-stat__value",
                                {format::format_multiplier(projection.roi_multiplier)}
                            }
                        }
                        p { class: "roi-calculator__disclaimer", {t!("roi-disclaimer")} }
                    }

                    if submit_phase() == SubmitPhase::Succeeded {
                        div { class: "roi-calculator__thanks",
                            h3 { {t!("roi-thanks-title")} }
                            p { {t!("roi-thanks-body")} }
                        }
                    } else {
                        form {
                            class: "roi-calculator__lead-form",
                            onsubmit: move |evt: FormEvent| {
                                evt.prevent_default();
                                send_submit(CalcEvent::SubmitLead);
                            },

                            h3 { {t!("roi-report-title")} }
                            p { {t!("roi-report-intro")} }

                            div { class: "form-grid",
                                div { class: "form-field",
                                    label { r#for: "roi-clinic", {t!("contact-form-clinic")} }
                                    input {
                                        id: "roi-clinic",
                                        r#type: "text",
                                        required: true,
                                        value: "{clinic_name}",
                                        oninput: move |evt| clinic_name.set(evt.value()),
                                    }
                                }
                                div { class: "form-field",
                                    label { r#for: "roi-owner", {t!("contact-form-owner")} }
                                    input {
                                        id: "roi-owner",
                                        r#type: "text",
                                        required: true,
                                        value: "{owner_name}",
                                        oninput: move |evt| owner_name.set(evt.value()),
                                    }
                                }
                            }
                            div { class: "form-grid",
                                div { class: "form-field",
                                    label { r#for: "roi-email", {t!("form-email")} }
                                    input {
                                        id: "roi-email",
                                        r#type: "email",
                                        required: true,
                                        value: "{email}",
                                        oninput: move |evt| email.set(evt.value()),
                                    }
                                }
                                div { class: "form-field",
                                    label { r#for: "roi-whatsapp", {t!("form-whatsapp")} }
                                    input {
                                        id: "roi-whatsapp",
                                        r#type: "tel",
                                        required: true,
                                        value: "{whatsapp}",
                                        oninput: move |evt| whatsapp.set(evt.value()),
                                    }
                                }
                            }

                            if failed() {
                                div { class: "form-error", role: "alert", {t!("form-error-generic")} }
                            }

                            button {
                                r#type: "submit",
                                class: "button button--ghost",
                                disabled: submitting,
                                if submitting {
                                    {t!("form-submitting")}
                                } else {
                                    {t!("roi-report-cta")}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Field text to number; anything unparseable counts as zero.
fn parse_field(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or_default()
}

fn queue_reveal(sender_slot: Rc<RefCell<Option<UnboundedSender<CalcEvent>>>>, calc_id: u64) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(REVEAL_DELAY_MS).await;
            let _ = sender.unbounded_send(CalcEvent::Reveal { calc_id });
        });
    }
}
