use dioxus::prelude::*;

use crate::components::app_navbar::routed_link;
use crate::t;

struct ModuleCopy {
    id: &'static str,
    title: String,
    bullets: Vec<String>,
    impact: String,
}

fn module_copy() -> Vec<ModuleCopy> {
    vec![
        ModuleCopy {
            id: "appointment",
            title: t!("features-appointment-title"),
            bullets: vec![
                t!("features-appointment-f1"),
                t!("features-appointment-f2"),
                t!("features-appointment-f3"),
                t!("features-appointment-f4"),
            ],
            impact: t!("features-appointment-impact"),
        },
        ModuleCopy {
            id: "emr",
            title: t!("features-emr-title"),
            bullets: vec![
                t!("features-emr-f1"),
                t!("features-emr-f2"),
                t!("features-emr-f3"),
                t!("features-emr-f4"),
                t!("features-emr-f5"),
            ],
            impact: t!("features-emr-impact"),
        },
        ModuleCopy {
            id: "pos",
            title: t!("features-pos-title"),
            bullets: vec![
                t!("features-pos-f1"),
                t!("features-pos-f2"),
                t!("features-pos-f3"),
                t!("features-pos-f4"),
            ],
            impact: t!("features-pos-impact"),
        },
        ModuleCopy {
            id: "crm",
            title: t!("features-crm-title"),
            bullets: vec![
                t!("features-crm-f1"),
                t!("features-crm-f2"),
                t!("features-crm-f3"),
                t!("features-crm-f4"),
                t!("features-crm-f5"),
            ],
            impact: t!("features-crm-impact"),
        },
        ModuleCopy {
            id: "inventory",
            title: t!("features-inventory-title"),
            bullets: vec![
                t!("features-inventory-f1"),
                t!("features-inventory-f2"),
                t!("features-inventory-f3"),
                t!("features-inventory-f4"),
                t!("features-inventory-f5"),
            ],
            impact: t!("features-inventory-impact"),
        },
        ModuleCopy {
            id: "bi",
            title: t!("features-bi-title"),
            bullets: vec![
                t!("features-bi-f1"),
                t!("features-bi-f2"),
                t!("features-bi-f3"),
                t!("features-bi-f4"),
                t!("features-bi-f5"),
            ],
            impact: t!("features-bi-impact"),
        },
    ]
}

#[component]
pub fn Features() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut active = use_signal(|| 0usize);

    let modules = module_copy();
    let selected = active().min(modules.len() - 1);
    let detail = &modules[selected];

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        div { class: "page page-features",
            header { class: "page-header",
                h1 { {t!("features-title")} }
                p { {t!("features-sub")} }
            }

            div { class: "features__layout",
                div { class: "features__selector",
                    { modules.iter().enumerate().map(|(idx, module)| {
                        let class = if idx == selected {
                            "features__tab features__tab--active"
                        } else {
                            "features__tab"
                        };
                        let title = module.title.clone();
                        rsx! {
                            button {
                                key: "{module.id}",
                                r#type: "button",
                                class: "{class}",
                                onclick: move |_| active.set(idx),
                                span { class: "features__tab-dot" }
                                span { "{title}" }
                            }
                        }
                    })}
                }

                div { class: "features__detail",
                    h2 { "{detail.title}" }
                    div { class: "features__columns",
                        div { class: "features__capabilities",
                            h3 { {t!("features-capabilities-label")} }
                            ul {
                                { detail.bullets.iter().enumerate().map(|(idx, bullet)| rsx! {
                                    li { key: "{idx}", "{bullet}" }
                                })}
                            }
                        }
                        div { class: "features__impact",
                            h3 { {t!("features-impact-label")} }
                            p { "\"{detail.impact}\"" }
                        }
                    }
                    div { class: "features__preview",
                        span { {t!("features-preview-label")} }
                    }
                }
            }

            section { class: "features__closing",
                h2 { {t!("features-cta-title")} }
                p { {t!("features-cta-sub")} }
                {routed_link(|b| b.contact, &t!("features-cta-button"), "button button--accent")}
            }
        }
    }
}
