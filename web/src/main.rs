use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, SiteFooter};
use ui::i18n;
use ui::views::{About, Contact, Features, Home, Pricing};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebFrame)]
    #[route("/")]
    Home {},
    #[route("/features")]
    Features {},
    #[route("/pricing")]
    Pricing {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(label: &str, class: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Home {}, "{label}" })
}
fn nav_features(label: &str, class: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Features {}, "{label}" })
}
fn nav_pricing(label: &str, class: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Pricing {}, "{label}" })
}
fn nav_about(label: &str, class: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::About {}, "{label}" })
}
fn nav_contact(label: &str, class: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Contact {}, "{label}" })
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        // Register the localized navigation builder so `ui` never sees Route.
        register_nav(NavBuilder {
            home: nav_home,
            features: nav_features,
            pricing: nav_pricing,
            about: nav_about,
            contact: nav_contact,
        });
    }

    // Global reactive language code; the navbar/footer toggles update it and
    // every subscribed view re-renders.
    let lang_code = use_signal(|| i18n::DEFAULT_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Shared frame around every routed page: navbar on top, footer below.
#[component]
fn WebFrame() -> Element {
    rsx! {
        AppNavbar { }
        main { class: "site-main", Outlet::<Route> {} }
        SiteFooter { }
    }
}
