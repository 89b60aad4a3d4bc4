//! Official theme registry.
//!
//! The official set is fixed at build time. The canonical picker name of each
//! entry is resolved here too, next to the table, so membership and labels
//! cannot drift apart.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use rust_i18n::t;
use theme_picker_core::{Theme, ThemeType};

pub const THEME_LIGHT: &str = "default-light";
pub const THEME_DARK: &str = "default-dark";
pub const THEME_HIGH_CONTRAST: &str = "default-hc";

/// A theme bundled with the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinTheme {
    pub id: &'static str,
    pub kind: BuiltinKind,
    pub label: &'static str,
    pub editor_theme: &'static str,
}

/// Theme type of a bundled theme. Always one of the known types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinKind {
    Light,
    Dark,
    HighContrast,
}

impl From<BuiltinKind> for ThemeType {
    fn from(kind: BuiltinKind) -> Self {
        match kind {
            BuiltinKind::Light => ThemeType::Light,
            BuiltinKind::Dark => ThemeType::Dark,
            BuiltinKind::HighContrast => ThemeType::HighContrast,
        }
    }
}

impl BuiltinTheme {
    pub fn to_theme(&self) -> Theme {
        Theme::new(self.id, self.kind.into(), self.label).with_editor_theme(self.editor_theme)
    }
}

pub const BUILTIN_LIGHT: BuiltinTheme = BuiltinTheme {
    id: THEME_LIGHT,
    kind: BuiltinKind::Light,
    label: "Light (Default)",
    editor_theme: THEME_LIGHT,
};

pub const BUILTIN_DARK: BuiltinTheme = BuiltinTheme {
    id: THEME_DARK,
    kind: BuiltinKind::Dark,
    label: "Dark (Default)",
    editor_theme: THEME_DARK,
};

pub const BUILTIN_HIGH_CONTRAST: BuiltinTheme = BuiltinTheme {
    id: THEME_HIGH_CONTRAST,
    kind: BuiltinKind::HighContrast,
    label: "High Contrast",
    editor_theme: THEME_HIGH_CONTRAST,
};

// A high-contrast light variant would go here once the renderer supports it.
pub const OFFICIAL_THEMES: &[BuiltinTheme] = &[BUILTIN_LIGHT, BUILTIN_DARK, BUILTIN_HIGH_CONTRAST];

static OFFICIAL_THEME_IDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| OFFICIAL_THEMES.iter().map(|builtin| builtin.id).collect());

/// Check whether `id` names an official theme.
pub fn is_official_id(id: &str) -> bool {
    OFFICIAL_THEME_IDS.contains(id)
}

/// Canonical, localized picker name of an official theme.
///
/// Returns `None` for ids outside the registry.
pub fn canonical_label(id: &str, locale: &str) -> Option<String> {
    let label = match id {
        THEME_LIGHT => t!("theme.light", locale = locale),
        THEME_DARK => t!("theme.dark", locale = locale),
        THEME_HIGH_CONTRAST => t!("theme.hc", locale = locale),
        _ => return None,
    };
    Some(label.into_owned())
}

/// Registry entry for each known theme type.
pub fn official_theme_for(kind: &ThemeType) -> Option<&'static BuiltinTheme> {
    let builtin = match kind {
        ThemeType::Light => &BUILTIN_LIGHT,
        ThemeType::Dark => &BUILTIN_DARK,
        ThemeType::HighContrast => &BUILTIN_HIGH_CONTRAST,
        ThemeType::Other(_) => return None,
    };
    Some(builtin)
}
