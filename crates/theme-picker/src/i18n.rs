//! Locale selection for picker labels.

/// Locale used when nothing else is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// Locales with a translation file compiled into the binary.
pub fn available_locales() -> Vec<&'static str> {
    let mut locales = rust_i18n::available_locales!();
    locales.sort_unstable();
    locales
}

pub fn is_supported(locale: &str) -> bool {
    available_locales().contains(&locale)
}

/// Switch the process-wide locale.
///
/// Unsupported locales fall back to [`DEFAULT_LOCALE`]. Returns the locale
/// that is active afterwards.
pub fn set_locale(locale: &str) -> &str {
    if is_supported(locale) {
        rust_i18n::set_locale(locale);
        locale
    } else {
        tracing::warn!(
            "Unsupported locale '{}', falling back to '{}'",
            locale,
            DEFAULT_LOCALE
        );
        rust_i18n::set_locale(DEFAULT_LOCALE);
        DEFAULT_LOCALE
    }
}

pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}
