//! Internationalization (i18n) support for `esthirae-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile-checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/esthirae-ui.ftl   (fallback/reference)
//!   id-ID/esthirae-ui.ftl   (site default)
//! ```
//!
//! The site boots in Indonesian (`id-ID`), matching the audience it serves;
//! `en-US` is the fallback/reference locale. The navbar and footer toggles
//! call [`set_language`] and mirror the choice into a global
//! `Signal<String>` provided by the platform crate, so views re-render.
//!
//! Public API surface:
//! - `init()` - load localization bundles (safe to call multiple times).
//! - `set_language(tag: &str)` - switch language at runtime.
//! - `available_languages()` - discover embedded language tags.
//! - `DEFAULT_LANGUAGE` - the tag the site boots in.
//! - `fl` macro re-export plus the crate-local `t!` wrapper.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("footer-copyright", year = year)
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "esthirae-ui";

/// Language the site boots in.
pub const DEFAULT_LANGUAGE: &str = "id-ID";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent). Selects the site default language.
pub fn init() {
    INIT.call_once(|| {
        let requested: LanguageIdentifier = DEFAULT_LANGUAGE
            .parse()
            .expect("valid default language identifier");
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &[requested]) {
            eprintln!("[i18n] Failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn both_site_locales_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "id-ID"));
    }

    // Language selection mutates the shared loader, so every switching
    // assertion lives in this single test.
    #[test]
    fn language_switching_round_trips() {
        init();

        let _ = set_language("id-ID");
        assert_eq!(fl!(&*LOADER, "nav-features"), "Fitur");

        let _ = set_language("en-US");
        assert_eq!(fl!(&*LOADER, "nav-features"), "Features");

        // An unknown tag leaves the selection untouched.
        let before = fl!(&*LOADER, "nav-features");
        let _ = set_language("zz-ZZ");
        assert_eq!(fl!(&*LOADER, "nav-features"), before);

        let _ = set_language(DEFAULT_LANGUAGE);
    }
}
