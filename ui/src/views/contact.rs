use dioxus::prelude::*;

use crate::leads::ContactForm;
use crate::t;

const WHATSAPP_URL: &str =
    "https://wa.me/628980966611?text=Halo%20Esthirae%2C%20saya%20ingin%20tahu%20lebih%20lanjut";

#[component]
pub fn Contact() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        div { class: "page page-contact",
            div { class: "contact__layout",
                div { class: "contact__intro",
                    h1 { {t!("contact-title")} }
                    p { {t!("contact-sub")} }

                    div { class: "contact__channels",
                        div { class: "contact__channel",
                            h4 { {t!("contact-email-title")} }
                            a { href: "mailto:hello@esthirae.com", "hello@esthirae.com" }
                        }
                        div { class: "contact__channel",
                            h4 { "WhatsApp / Phone" }
                            a {
                                href: WHATSAPP_URL,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "+62 898-0966-611"
                            }
                        }
                    }
                }

                div { class: "contact__form-panel",
                    ContactForm {}
                }
            }
        }
    }
}
