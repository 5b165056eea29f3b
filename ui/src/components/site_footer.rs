use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::components::app_navbar::routed_link;
use crate::t;

const WHATSAPP_URL: &str =
    "https://wa.me/628980966611?text=Halo%20Esthirae%2C%20saya%20ingin%20tahu%20lebih%20lanjut";

#[component]
pub fn SiteFooter() -> Element {
    // Subscribe to the global language code (if provided) so the footer
    // re-renders on switch.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let year = OffsetDateTime::now_utc().year().to_string();

    rsx! {
        footer { class: "footer",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "footer__inner",
                div { class: "footer__brand",
                    span { class: "footer__brand-mark", "Esthirae" }
                    p { class: "footer__blurb", {t!("footer-blurb")} }
                    crate::components::LangToggle {}
                }

                div { class: "footer__column",
                    h4 { {t!("footer-links-title")} }
                    nav { class: "footer__links",
                        {routed_link(|b| b.home, &t!("nav-home"), "footer__link")}
                        {routed_link(|b| b.features, &t!("nav-features"), "footer__link")}
                        {routed_link(|b| b.pricing, &t!("nav-pricing"), "footer__link")}
                        {routed_link(|b| b.contact, &t!("nav-contact"), "footer__link")}
                    }
                }

                div { class: "footer__column",
                    h4 { {t!("footer-connect-title")} }
                    ul { class: "footer__contact",
                        li {
                            "Email: "
                            a { href: "mailto:hello@esthirae.com", "hello@esthirae.com" }
                        }
                        li {
                            "WhatsApp: "
                            a {
                                href: WHATSAPP_URL,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "+62 898-0966-611"
                            }
                        }
                        li { "Yogyakarta, Indonesia" }
                    }
                }
            }

            div { class: "footer__legal",
                span { {t!("footer-copyright", year = year)} }
                span { class: "footer__tagline", "Refined. Structured. Premium. Scalable." }
            }
        }
    }
}
