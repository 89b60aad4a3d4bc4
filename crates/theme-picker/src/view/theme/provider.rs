//! Sources of themes for the picker.
//!
//! The selector only ever talks to a [`ThemeProvider`]. Callers choose the
//! implementation: [`ServiceThemeProvider`] reads a live [`ThemeService`],
//! [`StaticThemeProvider`] holds a fixed list (tests, embedding).

use theme_picker_core::Theme;

use crate::services::theme_service::ThemeService;

/// Read-only view of the themes known to the application.
pub trait ThemeProvider {
    /// All known themes, in the provider's own order.
    fn themes(&self) -> Vec<Theme>;

    /// The theme currently applied.
    fn current_theme(&self) -> Theme;
}

/// In-memory provider with a fixed theme list and current theme.
///
/// The current theme does not have to be part of the list.
#[derive(Debug, Clone)]
pub struct StaticThemeProvider {
    themes: Vec<Theme>,
    current: Theme,
}

impl StaticThemeProvider {
    pub fn new(themes: Vec<Theme>, current: Theme) -> Self {
        Self { themes, current }
    }
}

impl ThemeProvider for StaticThemeProvider {
    fn themes(&self) -> Vec<Theme> {
        self.themes.clone()
    }

    fn current_theme(&self) -> Theme {
        self.current.clone()
    }
}

/// Adapter exposing a [`ThemeService`] as a [`ThemeProvider`].
#[derive(Debug, Clone, Copy)]
pub struct ServiceThemeProvider<'a> {
    service: &'a ThemeService,
}

impl<'a> ServiceThemeProvider<'a> {
    pub fn new(service: &'a ThemeService) -> Self {
        Self { service }
    }
}

impl<'a> From<&'a ThemeService> for ServiceThemeProvider<'a> {
    fn from(service: &'a ThemeService) -> Self {
        Self::new(service)
    }
}

impl ThemeProvider for ServiceThemeProvider<'_> {
    fn themes(&self) -> Vec<Theme> {
        self.service.themes().to_vec()
    }

    fn current_theme(&self) -> Theme {
        self.service.current_theme().clone()
    }
}
