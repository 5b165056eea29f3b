use dioxus::prelude::*;

use crate::t;

#[component]
pub fn About() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let values = [
        (t!("about-value-1-title"), t!("about-value-1-desc")),
        (t!("about-value-2-title"), t!("about-value-2-desc")),
        (t!("about-value-3-title"), t!("about-value-3-desc")),
        (t!("about-value-4-title"), t!("about-value-4-desc")),
    ];

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        div { class: "page page-about",
            header { class: "page-header",
                h1 { {t!("about-title")} }
                p { {t!("about-sub")} }
            }

            div { class: "about__statements",
                div { class: "about__statement",
                    h2 { {t!("about-mission-label")} }
                    p { {t!("about-mission")} }
                }
                div { class: "about__statement",
                    h2 { {t!("about-vision-label")} }
                    p { {t!("about-vision")} }
                }
            }

            section { class: "about__values",
                h2 { {t!("about-values-title")} }
                div { class: "about__values-grid",
                    { values.iter().enumerate().map(|(idx, (title, desc))| {
                        let initial = title.chars().next().unwrap_or('E');
                        rsx! {
                            div { key: "{idx}", class: "about__value",
                                span { class: "about__value-initial", "{initial}" }
                                h3 { "{title}" }
                                p { "{desc}" }
                            }
                        }
                    })}
                }
            }
        }
    }
}
