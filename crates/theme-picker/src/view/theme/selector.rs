//! Theme classification and picker ordering.
//!
//! Everything here is a pure function of its inputs. The only observable side
//! effect is the warning logged by [`compatible_builtin`] for theme types it
//! cannot map.

use rust_i18n::t;
use serde::Serialize;
use theme_picker_core::Theme;

use super::provider::ThemeProvider;
use super::types::{canonical_label, is_official_id, official_theme_for, BUILTIN_LIGHT};

/// Anything that identifies a theme: a [`Theme`] or a bare id.
pub trait ThemeRef {
    fn theme_id(&self) -> &str;
}

impl ThemeRef for Theme {
    fn theme_id(&self) -> &str {
        &self.id
    }
}

impl ThemeRef for str {
    fn theme_id(&self) -> &str {
        self
    }
}

impl ThemeRef for String {
    fn theme_id(&self) -> &str {
        self
    }
}

impl<T: ThemeRef + ?Sized> ThemeRef for &T {
    fn theme_id(&self) -> &str {
        (**self).theme_id()
    }
}

/// Check whether a theme (or theme id) is one of the official themes.
///
/// Membership is decided by id alone; an unofficial theme with the same type
/// or label as an official one is still unofficial.
pub fn is_official<T: ThemeRef + ?Sized>(theme: &T) -> bool {
    is_official_id(theme.theme_id())
}

/// Name to show for `theme` in the picker, in the current locale.
pub fn display_label(theme: &Theme) -> String {
    display_label_in(theme, &crate::i18n::current_locale())
}

/// Name to show for `theme` in the picker, in `locale`.
///
/// Official themes get their canonical name ("Light", "Dark",
/// "High Contrast"); any other theme is marked unofficial and keeps its own
/// label.
pub fn display_label_in(theme: &Theme, locale: &str) -> String {
    canonical_label(&theme.id, locale).unwrap_or_else(|| {
        t!("theme.unofficial", locale = locale, label = theme.label).into_owned()
    })
}

/// The official theme to fall back to for `theme`, chosen by its type.
///
/// Themes of an unrecognized type fall back to the official light theme.
pub fn compatible_builtin(theme: &Theme) -> Theme {
    match official_theme_for(&theme.kind) {
        Some(builtin) => builtin.to_theme(),
        None => {
            tracing::warn!(
                "Unhandled theme type: {}. Theme ID: {}, label: {}",
                theme.kind,
                theme.id,
                theme.label
            );
            BUILTIN_LIGHT.to_theme()
        }
    }
}

/// Themes the user may choose from in the picker.
///
/// Returns every official theme plus the current theme, official ones first
/// in light, dark, high-contrast order. A contributed current theme comes
/// last; other contributed themes are left out. Themes that compare equal
/// keep the provider's order.
pub fn user_configurable_themes<P: ThemeProvider + ?Sized>(provider: &P) -> Vec<Theme> {
    let current = provider.current_theme();
    let mut themes: Vec<Theme> = provider
        .themes()
        .into_iter()
        .filter(|theme| is_official(theme) || theme.id == current.id)
        .collect();
    // sort_by_key is stable
    themes.sort_by_key(|theme| (!is_official(theme), theme.kind.rank()));
    themes
}

/// A row of the theme picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeChoice {
    pub theme: Theme,
    pub label: String,
    pub active: bool,
}

/// [`user_configurable_themes`] paired with picker labels and the active flag.
pub fn picker_entries<P: ThemeProvider + ?Sized>(provider: &P) -> Vec<ThemeChoice> {
    picker_entries_in(provider, &crate::i18n::current_locale())
}

/// [`picker_entries`] with labels resolved in `locale`.
pub fn picker_entries_in<P: ThemeProvider + ?Sized>(provider: &P, locale: &str) -> Vec<ThemeChoice> {
    let current_id = provider.current_theme().id;
    user_configurable_themes(provider)
        .into_iter()
        .map(|theme| ThemeChoice {
            label: display_label_in(&theme, locale),
            active: theme.id == current_id,
            theme,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use theme_picker_core::ThemeType;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    use super::*;
    use crate::view::theme::provider::StaticThemeProvider;
    use crate::view::theme::types::{
        BUILTIN_DARK, BUILTIN_HIGH_CONTRAST, THEME_DARK, THEME_HIGH_CONTRAST, THEME_LIGHT,
    };

    fn light() -> Theme {
        BUILTIN_LIGHT.to_theme()
    }

    fn dark() -> Theme {
        BUILTIN_DARK.to_theme()
    }

    fn high_contrast() -> Theme {
        BUILTIN_HIGH_CONTRAST.to_theme()
    }

    fn test_theme() -> Theme {
        Theme::new("testTheme", ThemeType::Light, "Test Theme")
    }

    fn another_test_theme() -> Theme {
        Theme::new("anotherTestTheme", ThemeType::Dark, "Another Test Theme")
    }

    fn ids(themes: &[Theme]) -> Vec<&str> {
        themes.iter().map(|theme| theme.id.as_str()).collect()
    }

    /// Counts WARN events emitted while it is the active subscriber.
    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn test_builtin_current_theme_hides_contributed_themes() {
        let provider = StaticThemeProvider::new(
            vec![
                dark(),
                light(),
                test_theme(),
                high_contrast(),
                another_test_theme(),
            ],
            high_contrast(),
        );

        let actual = user_configurable_themes(&provider);
        assert_eq!(
            ids(&actual),
            vec![THEME_LIGHT, THEME_DARK, THEME_HIGH_CONTRAST]
        );
    }

    #[test]
    fn test_contributed_current_theme_is_last() {
        let provider = StaticThemeProvider::new(
            vec![
                high_contrast(),
                dark(),
                light(),
                test_theme(),
                another_test_theme(),
            ],
            test_theme(),
        );

        let actual = user_configurable_themes(&provider);
        assert_eq!(
            ids(&actual),
            vec![THEME_LIGHT, THEME_DARK, THEME_HIGH_CONTRAST, "testTheme"]
        );
    }

    #[test]
    fn test_empty_theme_list() {
        let provider = StaticThemeProvider::new(Vec::new(), test_theme());
        assert!(user_configurable_themes(&provider).is_empty());
    }

    #[test]
    fn test_current_theme_missing_from_list_adds_nothing() {
        let provider = StaticThemeProvider::new(vec![dark(), another_test_theme()], test_theme());
        assert_eq!(ids(&user_configurable_themes(&provider)), vec![THEME_DARK]);
    }

    #[test]
    fn test_is_official() {
        let cases = [
            (Theme::new("light", ThemeType::Light, "Light"), false),
            (Theme::new("dark", ThemeType::Dark, "Dark"), false),
            (high_contrast(), true),
            (light(), true),
            (dark(), true),
            (test_theme(), false),
        ];
        for (theme, expected) in cases {
            assert_eq!(is_official(&theme), expected, "theme '{}'", theme.id);
        }
    }

    #[test]
    fn test_is_official_accepts_ids() {
        assert!(is_official(THEME_LIGHT));
        assert!(is_official(&THEME_DARK.to_string()));
        assert!(!is_official("no-such-theme"));
        assert!(!is_official(""));
    }

    #[test]
    fn test_display_label_for_official_themes() {
        assert_eq!(display_label_in(&light(), "en"), "Light");
        assert_eq!(display_label_in(&dark(), "en"), "Dark");
        assert_eq!(display_label_in(&high_contrast(), "en"), "High Contrast");
    }

    #[test]
    fn test_display_label_keys_on_id_not_type() {
        let impostor = Theme::new("midnight", ThemeType::Dark, "Midnight");
        assert_eq!(display_label_in(&impostor, "en"), "Unofficial - Midnight");
    }

    #[test]
    fn test_display_label_localized() {
        assert_eq!(display_label_in(&high_contrast(), "de"), "Hoher Kontrast");
        assert_eq!(
            display_label_in(&test_theme(), "de"),
            "Inoffiziell - Test Theme"
        );
    }

    #[test]
    fn test_compatible_builtin_maps_type() {
        let midnight = Theme::new("midnight", ThemeType::Dark, "Midnight").with_editor_theme("x");
        assert_eq!(compatible_builtin(&midnight), dark());
        assert_eq!(compatible_builtin(&test_theme()), light());
        let contrast = Theme::new("contrast", ThemeType::HighContrast, "Contrast");
        assert_eq!(compatible_builtin(&contrast), high_contrast());
    }

    #[test]
    fn test_compatible_builtin_unknown_type_falls_back_to_light() {
        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(warnings.clone()));
        let sepia = Theme::new("sepia", ThemeType::from("hcLight"), "Sepia");

        let fallback = tracing::subscriber::with_default(subscriber, || compatible_builtin(&sepia));

        assert_eq!(fallback, light());
        assert_eq!(warnings.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_picker_entries_mark_active_theme() {
        let provider = StaticThemeProvider::new(
            vec![another_test_theme(), dark(), light(), high_contrast()],
            another_test_theme(),
        );

        let entries = picker_entries_in(&provider, "en");
        let rows: Vec<(&str, bool)> = entries
            .iter()
            .map(|entry| (entry.label.as_str(), entry.active))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Light", false),
                ("Dark", false),
                ("High Contrast", false),
                ("Unofficial - Another Test Theme", true),
            ]
        );
    }
}
