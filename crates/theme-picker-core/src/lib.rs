use serde::{Deserialize, Serialize};

/// Visual category of a theme.
///
/// The known categories are closed, but themes come from manifests and
/// extension packages we don't control, so anything else is kept verbatim
/// in [`ThemeType::Other`] instead of failing deserialization.
///
/// `Other` can only be built through `From<String>`/`From<&str>`, so it never
/// holds a known name and every value survives a serialize/deserialize trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThemeType {
    Light,
    Dark,
    HighContrast,
    Other(UnknownThemeType),
}

impl ThemeType {
    /// Sort rank used when ordering themes for presentation.
    ///
    /// Unknown types rank after every known one.
    pub fn rank(&self) -> u8 {
        match self {
            ThemeType::Light => 0,
            ThemeType::Dark => 1,
            ThemeType::HighContrast => 2,
            ThemeType::Other(_) => u8::MAX,
        }
    }

    /// Wire name of this type.
    pub fn as_str(&self) -> &str {
        match self {
            ThemeType::Light => "light",
            ThemeType::Dark => "dark",
            ThemeType::HighContrast => "high-contrast",
            ThemeType::Other(name) => name.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ThemeType::Other(_))
    }
}

impl From<String> for ThemeType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "light" => ThemeType::Light,
            "dark" => ThemeType::Dark,
            // "hc" is the short form used by older manifests
            "high-contrast" | "hc" => ThemeType::HighContrast,
            _ => ThemeType::Other(UnknownThemeType(name)),
        }
    }
}

impl From<&str> for ThemeType {
    fn from(name: &str) -> Self {
        ThemeType::from(name.to_string())
    }
}

impl From<ThemeType> for String {
    fn from(kind: ThemeType) -> Self {
        match kind {
            ThemeType::Other(name) => name.0,
            known => known.as_str().to_string(),
        }
    }
}

/// Name of a theme type outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownThemeType(String);

impl UnknownThemeType {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UnknownThemeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for ThemeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A UI theme as reported by a theme provider.
///
/// Only identity and presentation metadata live here; color tables belong to
/// whoever applies the theme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Unique identifier within one provider's theme list
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ThemeType,
    pub label: String,
    /// Editor (syntax) theme paired with this UI theme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_theme: Option<String>,
}

impl Theme {
    pub fn new(id: impl Into<String>, kind: ThemeType, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            editor_theme: None,
        }
    }

    pub fn with_editor_theme(mut self, editor_theme: impl Into<String>) -> Self {
        self.editor_theme = Some(editor_theme.into());
        self
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label, self.id)
    }
}
