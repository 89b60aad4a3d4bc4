//! Picker configuration file.
//!
//! Read from `<config dir>/theme-picker/config.json`. Every field is
//! optional; command-line flags take precedence over the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::DEFAULT_LOCALE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PickerConfig {
    /// Directory holding user theme manifests and packages
    pub themes_dir: Option<PathBuf>,
    /// Id of the theme to apply
    pub current_theme: Option<String>,
    /// Locale used for picker labels
    pub locale: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            themes_dir: None,
            current_theme: None,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl PickerConfig {
    /// Directory holding `config.json` and the default `themes/` directory.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("theme-picker"))
    }

    /// Default location of the config file.
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Themes directory to scan: the configured one, else `<config dir>/themes`.
    pub fn resolved_themes_dir(&self) -> Option<PathBuf> {
        self.themes_dir
            .clone()
            .or_else(|| Self::config_dir().map(|dir| dir.join("themes")))
    }
}
