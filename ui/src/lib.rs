//! Shared UI crate for the Esthirae marketing site. Views, localization and
//! the lead-capture logic live here; platform crates only supply routing.

pub mod calculator;
pub mod core;
pub mod i18n;
pub mod leads;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::LangToggle;
    pub use app_navbar::NavBuilder;

    // Site-wide footer (components/site_footer.rs)
    pub mod site_footer;
    pub use site_footer::SiteFooter;
}
