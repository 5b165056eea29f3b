use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet (shared across every page through the layout)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Signature of a platform-supplied link builder: the navbar (and any view
/// with a routed CTA) passes the localized label and the CSS class, the
/// platform crate constructs the `Link` against its own `Route` enum.
pub type LinkFn = fn(label: &str, class: &str) -> Element;

/// Platforms register a `NavBuilder` providing link constructors so `ui`
/// never needs to know the platform's `Route` enum.
///
/// Registration happens once, at the top of the platform `App()`:
/// ```ignore
/// use ui::components::app_navbar::{register_nav, NavBuilder};
/// register_nav(NavBuilder {
///     home: |label, class| rsx!( Link { class: "{class}", to: Route::Home {}, "{label}" } ),
///     ...
/// });
/// ```
///
/// The language toggle triggers a re-render via the global language signal;
/// every render pulls fresh localized strings via `fl!`.
pub struct NavBuilder {
    pub home: LinkFn,
    pub features: LinkFn,
    pub pricing: LinkFn,
    pub about: LinkFn,
    pub contact: LinkFn,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Build a routed link through the registered builder, or a plain span when
/// no platform has registered one (keeps `ui` renderable in isolation).
pub fn routed_link(pick: fn(&NavBuilder) -> LinkFn, label: &str, class: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => pick(builder)(label, class),
        None => rsx! { span { class: "{class}", "{label}" } },
    }
}

/// Two-button ID / ENG switch used in the navbar and again in the footer.
/// Writes the fluent loader and mirrors the choice into the global language
/// signal (if the platform provided one) so every subscribed view re-renders.
#[component]
pub fn LangToggle() -> Element {
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let current = lang_code_ctx
        .as_ref()
        .map(|code| code())
        .unwrap_or_else(|| i18n::DEFAULT_LANGUAGE.to_string());

    let select = move |tag: &'static str| {
        if i18n::set_language(tag).is_ok() {
            if let Some(mut code) = lang_code_ctx {
                code.set(tag.to_string());
            }
        }
    };

    let id_class = if current == "id-ID" {
        "lang-toggle__option lang-toggle__option--active"
    } else {
        "lang-toggle__option"
    };
    let en_class = if current == "en-US" {
        "lang-toggle__option lang-toggle__option--active"
    } else {
        "lang-toggle__option"
    };

    rsx! {
        div { class: "lang-toggle", role: "group", aria_label: "Language",
            button {
                r#type: "button",
                class: "{id_class}",
                onclick: move |_| select("id-ID"),
                "ID"
            }
            button {
                r#type: "button",
                class: "{en_class}",
                onclick: move |_| select("en-US"),
                "ENG"
            }
        }
    }
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    // Obtain global language code signal if the platform (web crate) provided it.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Establish a reactive dependency on the global language code (if provided)
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    #[cfg(debug_assertions)]
    {
        if let Some(code) = lang_code_ctx.as_ref() {
            println!("[i18n] AppNavbar render lang={}", code());
        } else {
            println!("[i18n] AppNavbar render lang=<none>");
        }
    }

    // Build the localized nav if a NavBuilder is registered.
    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|b| {
        let home = (b.home)(&t!("nav-home"), "navbar__link");
        let features = (b.features)(&t!("nav-features"), "navbar__link");
        let pricing = (b.pricing)(&t!("nav-pricing"), "navbar__link");
        let about = (b.about)(&t!("nav-about"), "navbar__link");
        let contact = (b.contact)(&t!("nav-contact"), "navbar__link");

        rsx! {
            nav { class: "navbar__links",
                {home}
                {features}
                {pricing}
                {about}
                {contact}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures AppNavbar re-renders when the global language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                // Brand
                {routed_link(|b| b.home, "Esthirae", "navbar__brand-link")}

                // Navigation (internal builder or legacy children)
                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                div { class: "navbar__actions",
                    LangToggle {}
                    {routed_link(|b| b.contact, &t!("nav-request-demo"), "navbar__cta")}
                }
            }
        }
    }
}
