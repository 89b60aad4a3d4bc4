//! Live theme management.
//!
//! `ThemeService` owns the themes registered by the application and by
//! extensions, and tracks which one is applied. It is the collaborator the
//! picker reads through [`crate::view::theme::ServiceThemeProvider`].

use std::collections::HashMap;

use theme_picker_core::Theme;
use thiserror::Error;

use crate::view::theme::{BUILTIN_LIGHT, OFFICIAL_THEMES};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeServiceError {
    #[error("theme '{0}' is not registered")]
    UnknownTheme(String),
}

/// Outcome of a [`ThemeService::register`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeRegistrationReport {
    /// Ids that were not registered before
    pub inserted: Vec<String>,
    /// Ids whose previous theme was replaced
    pub replaced: Vec<String>,
}

impl ThemeRegistrationReport {
    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty() && self.replaced.is_empty()
    }
}

/// Registered themes plus the currently applied one.
#[derive(Debug, Clone)]
pub struct ThemeService {
    /// Themes in registration order
    themes: Vec<Theme>,
    /// Position of each theme in `themes`, keyed by id
    index: HashMap<String, usize>,
    current: String,
}

impl ThemeService {
    /// Create a service holding the official themes, with the official light
    /// theme applied.
    pub fn new() -> Self {
        let mut service = Self::empty(BUILTIN_LIGHT.to_theme());
        let _ = service.register(OFFICIAL_THEMES.iter().map(|builtin| builtin.to_theme()));
        service
    }

    /// Create a service holding only `default_theme`, which is also applied.
    pub fn empty(default_theme: Theme) -> Self {
        let current = default_theme.id.clone();
        let mut service = Self {
            themes: Vec::new(),
            index: HashMap::new(),
            current,
        };
        let _ = service.register([default_theme]);
        service
    }

    /// Register themes. A theme whose id is already known replaces the old
    /// one in place, keeping its position.
    #[must_use]
    pub fn register<I>(&mut self, themes: I) -> ThemeRegistrationReport
    where
        I: IntoIterator<Item = Theme>,
    {
        let mut report = ThemeRegistrationReport::default();
        for theme in themes {
            match self.index.get(&theme.id) {
                Some(&position) => {
                    report.replaced.push(theme.id.clone());
                    self.themes[position] = theme;
                }
                None => {
                    report.inserted.push(theme.id.clone());
                    self.index.insert(theme.id.clone(), self.themes.len());
                    self.themes.push(theme);
                }
            }
        }
        if !report.is_empty() {
            tracing::debug!(
                "Registered themes: {} new, {} replaced",
                report.inserted.len(),
                report.replaced.len()
            );
        }
        report
    }

    /// Get a theme by id.
    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.index.get(id).map(|&position| &self.themes[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All registered themes, in registration order.
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// The theme currently applied.
    pub fn current_theme(&self) -> &Theme {
        // `current` always names a registered theme and themes are never removed
        &self.themes[self.index[&self.current]]
    }

    /// Apply the theme with the given id.
    ///
    /// The current theme is left unchanged when `id` is not registered.
    pub fn set_current_theme(&mut self, id: &str) -> Result<(), ThemeServiceError> {
        if !self.contains(id) {
            return Err(ThemeServiceError::UnknownTheme(id.to_string()));
        }
        if self.current != id {
            tracing::debug!("Switching theme from '{}' to '{}'", self.current, id);
            self.current = id.to_string();
        }
        Ok(())
    }
}

impl Default for ThemeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::theme::{THEME_DARK, THEME_HIGH_CONTRAST, THEME_LIGHT};
    use theme_picker_core::ThemeType;

    #[test]
    fn test_new_service_holds_official_themes() {
        let service = ThemeService::new();
        let ids: Vec<&str> = service.themes().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec![THEME_LIGHT, THEME_DARK, THEME_HIGH_CONTRAST]);
        assert_eq!(service.current_theme().id, THEME_LIGHT);
    }

    #[test]
    fn test_register_reports_inserted_and_replaced() {
        let mut service = ThemeService::new();
        let report = service.register([
            Theme::new("night", ThemeType::Dark, "Night"),
            Theme::new(THEME_DARK, ThemeType::Dark, "Patched Dark"),
        ]);

        assert_eq!(report.inserted, vec!["night".to_string()]);
        assert_eq!(report.replaced, vec![THEME_DARK.to_string()]);
        assert_eq!(service.len(), 4);
        assert_eq!(service.get(THEME_DARK).unwrap().label, "Patched Dark");
        // Replacement keeps the original position
        assert_eq!(service.themes()[1].id, THEME_DARK);
    }

    #[test]
    fn test_set_current_theme() {
        let mut service = ThemeService::new();
        service.set_current_theme(THEME_HIGH_CONTRAST).unwrap();
        assert_eq!(service.current_theme().id, THEME_HIGH_CONTRAST);
    }

    #[test]
    fn test_set_unknown_theme_keeps_current() {
        let mut service = ThemeService::new();
        let err = service.set_current_theme("nonexistent").unwrap_err();
        assert_eq!(err, ThemeServiceError::UnknownTheme("nonexistent".into()));
        assert_eq!(err.to_string(), "theme 'nonexistent' is not registered");
        assert_eq!(service.current_theme().id, THEME_LIGHT);
    }

    #[test]
    fn test_empty_service_applies_default() {
        let sepia = Theme::new("sepia", ThemeType::Light, "Sepia");
        let service = ThemeService::empty(sepia.clone());
        assert_eq!(service.len(), 1);
        assert!(!service.is_empty());
        assert_eq!(service.current_theme(), &sepia);
        assert!(!service.contains(THEME_LIGHT));
    }
}
