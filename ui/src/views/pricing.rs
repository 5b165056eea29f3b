use dioxus::prelude::*;

use crate::calculator::RoiCalculator;
use crate::components::app_navbar::routed_link;
use crate::t;

#[component]
pub fn Pricing() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let unified_features = [
        t!("pricing-unified-f1"),
        t!("pricing-unified-f2"),
        t!("pricing-unified-f3"),
        t!("pricing-unified-f4"),
        t!("pricing-unified-f5"),
        t!("pricing-unified-f6"),
        t!("pricing-unified-f7"),
    ];
    let enterprise_features = [
        t!("pricing-enterprise-f1"),
        t!("pricing-enterprise-f2"),
        t!("pricing-enterprise-f3"),
        t!("pricing-enterprise-f4"),
        t!("pricing-enterprise-f5"),
        t!("pricing-enterprise-f6"),
        t!("pricing-enterprise-f7"),
    ];

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        div { class: "page page-pricing",
            header { class: "page-header page-header--centered",
                h1 { {t!("pricing-title")} }
                p { {t!("pricing-sub")} }
            }

            div { class: "pricing__plans",
                div { class: "pricing__plan pricing__plan--unified",
                    span { class: "pricing__badge", {t!("pricing-offer-badge")} }
                    h2 { {t!("pricing-unified-title")} }
                    p { class: "pricing__plan-sub", {t!("pricing-unified-sub")} }

                    div { class: "pricing__price",
                        span { class: "pricing__amount", "Rp 250.000" }
                        span { class: "pricing__period", {t!("pricing-per-month")} }
                    }
                    p { class: "pricing__strike", {t!("pricing-regular-price")} }

                    h4 { {t!("pricing-included-label")} }
                    ul { class: "pricing__features",
                        { unified_features.iter().enumerate().map(|(idx, item)| rsx! {
                            li { key: "{idx}", "{item}" }
                        })}
                    }

                    {routed_link(|b| b.contact, &t!("pricing-cta-demo"), "button button--primary pricing__cta")}
                }

                div { class: "pricing__plan pricing__plan--enterprise",
                    span { class: "pricing__badge pricing__badge--accent", {t!("pricing-enterprise-badge")} }
                    h2 { {t!("pricing-enterprise-title")} }
                    p { class: "pricing__plan-sub", {t!("pricing-enterprise-sub")} }

                    div { class: "pricing__price",
                        span { class: "pricing__amount pricing__amount--contact", {t!("pricing-enterprise-price")} }
                    }
                    p { class: "pricing__strike", {t!("pricing-enterprise-price-sub")} }

                    h4 { {t!("pricing-enterprise-caps-label")} }
                    ul { class: "pricing__features",
                        { enterprise_features.iter().enumerate().map(|(idx, item)| rsx! {
                            li { key: "{idx}", "{item}" }
                        })}
                    }

                    {routed_link(|b| b.contact, &t!("pricing-cta-consult"), "button button--ghost pricing__cta")}
                }
            }

            p { class: "pricing__footnote", {t!("pricing-footnote")} }

            RoiCalculator {}
        }
    }
}
