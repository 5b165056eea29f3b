use dioxus::prelude::*;

use crate::components::app_navbar::routed_link;
use crate::t;

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    // Lightweight render trace for diagnosing i18n refresh issues.
    println!("[i18n] Home render (lang_marker={lang})");
}

// Relative bar heights of the revenue sparkline in the dashboard mock.
const REVENUE_BARS: [u32; 10] = [25, 40, 30, 65, 55, 85, 45, 70, 60, 95];

#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "id-ID".to_string());

    #[cfg(debug_assertions)]
    {
        log_home_render(&_lang_current);
    }

    let problems = [
        (t!("home-problem-1-title"), t!("home-problem-1-desc")),
        (t!("home-problem-2-title"), t!("home-problem-2-desc")),
        (t!("home-problem-3-title"), t!("home-problem-3-desc")),
        (t!("home-problem-4-title"), t!("home-problem-4-desc")),
        (t!("home-problem-5-title"), t!("home-problem-5-desc")),
    ];

    let modules = [
        (t!("home-module-1-title"), t!("home-module-1-desc")),
        (t!("home-module-2-title"), t!("home-module-2-desc")),
        (t!("home-module-3-title"), t!("home-module-3-desc")),
        (t!("home-module-4-title"), t!("home-module-4-desc")),
        (t!("home-module-5-title"), t!("home-module-5-desc")),
        (t!("home-module-6-title"), t!("home-module-6-desc")),
    ];

    rsx! {
        div { class: "page page-home",
            section { class: "hero",
                div { class: "hero__copy",
                    h1 { {t!("home-hero-title")} }
                    p { class: "hero__sub", {t!("home-hero-sub")} }
                    div { class: "hero__actions",
                        {routed_link(|b| b.contact, &t!("home-hero-cta-demo"), "button button--primary")}
                        {routed_link(|b| b.features, &t!("home-hero-cta-features"), "button button--ghost")}
                    }
                }

                // Stylised executive-dashboard mock; the figures are set
                // dressing, not live data.
                div { class: "hero__visual",
                    div { class: "dashboard-mock",
                        div { class: "dashboard-mock__titlebar",
                            span { class: "dashboard-mock__dot" }
                            span { class: "dashboard-mock__title", {t!("home-dashboard-title")} }
                        }
                        div { class: "dashboard-mock__grid",
                            div { class: "dashboard-mock__card dashboard-mock__card--wide",
                                span { class: "dashboard-mock__label", {t!("home-dashboard-revenue")} }
                                span { class: "dashboard-mock__figure", "Rp 1.485.500.000" }
                                div { class: "dashboard-mock__bars",
                                    { REVENUE_BARS.iter().enumerate().map(|(i, height)| rsx! {
                                        div {
                                            key: "{i}",
                                            class: "dashboard-mock__bar",
                                            style: "height: {height}%",
                                        }
                                    })}
                                }
                            }
                            div { class: "dashboard-mock__card",
                                span { class: "dashboard-mock__label", {t!("home-dashboard-schedule")} }
                                span { class: "dashboard-mock__figure", "18 Appointments" }
                            }
                            div { class: "dashboard-mock__card",
                                span { class: "dashboard-mock__label", {t!("home-dashboard-inventory")} }
                                span { class: "dashboard-mock__figure", "Audit Clear" }
                            }
                        }
                    }
                }
            }

            section { class: "problems",
                div { class: "problems__intro",
                    h2 { {t!("home-problems-title")} }
                    p { {t!("home-problems-sub")} }
                }
                div { class: "problems__list",
                    { problems.iter().enumerate().map(|(idx, (title, desc))| {
                        let number = idx + 1;
                        rsx! {
                            div { key: "{idx}", class: "problems__item",
                                span { class: "problems__index", "0{number}" }
                                div {
                                    h3 { "{title}" }
                                    p { "{desc}" }
                                }
                            }
                        }
                    })}
                }
            }

            section { class: "ecosystem",
                div { class: "ecosystem__intro",
                    h2 { {t!("home-eco-title")} }
                    p { {t!("home-eco-sub")} }
                }
                div { class: "ecosystem__grid",
                    { modules.iter().enumerate().map(|(idx, (title, desc))| rsx! {
                        div { key: "{idx}", class: "ecosystem__card",
                            h3 { "{title}" }
                            p { "{desc}" }
                        }
                    })}
                }
            }

            section { class: "closing",
                h2 { {t!("home-closing")} }
                {routed_link(|b| b.contact, &t!("home-closing-cta"), "button button--accent")}
            }
        }
    }
}
