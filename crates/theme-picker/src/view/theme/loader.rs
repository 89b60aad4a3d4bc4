//! Theme discovery.
//!
//! This module provides:
//! - `ThemeLoader`: Scans the user themes directory and builds a `ThemeService`
//! - `load_theme_file`: Reads a single theme manifest
//!
//! Only theme metadata (id, type, label, editor theme) is read here. Color
//! tables stay with whatever renders the theme.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use theme_picker_core::{Theme, ThemeType};
use thiserror::Error;

use crate::services::ThemeService;

#[derive(Debug, Error)]
pub enum ThemeLoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read a theme manifest (`{"id", "type", "label", "editorTheme"}`) from disk.
pub fn load_theme_file(path: &Path) -> Result<Theme, ThemeLoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| ThemeLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ThemeLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// `package.json` of an extension package.
#[derive(Debug, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    contributes: Option<Contributions>,
}

#[derive(Debug, Default, Deserialize)]
struct Contributions {
    #[serde(default)]
    themes: Option<Vec<ContributedTheme>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributedTheme {
    id: Option<String>,
    label: String,
    ui_theme: String,
}

impl From<ContributedTheme> for Theme {
    fn from(contributed: ContributedTheme) -> Self {
        let id = contributed
            .id
            .unwrap_or_else(|| contributed.label.clone());
        Theme::new(
            id.clone(),
            theme_type_for_ui_theme(&contributed.ui_theme),
            contributed.label,
        )
        .with_editor_theme(id)
    }
}

/// Map an extension's `uiTheme` base to a theme type.
fn theme_type_for_ui_theme(ui_theme: &str) -> ThemeType {
    match ui_theme {
        "vs" => ThemeType::Light,
        "vs-dark" => ThemeType::Dark,
        "hc-black" => ThemeType::HighContrast,
        other => ThemeType::from(other),
    }
}

/// Loads themes and creates a ThemeService.
pub struct ThemeLoader {
    user_themes_dir: Option<PathBuf>,
}

impl ThemeLoader {
    /// Create a ThemeLoader with the given user themes directory.
    pub fn new(user_themes_dir: PathBuf) -> Self {
        Self {
            user_themes_dir: Some(user_themes_dir),
        }
    }

    /// Create a ThemeLoader for embedded themes only (no user themes).
    pub fn embedded_only() -> Self {
        Self {
            user_themes_dir: None,
        }
    }

    /// Get the user themes directory path.
    pub fn user_themes_dir(&self) -> Option<&Path> {
        self.user_themes_dir.as_deref()
    }

    /// Load all themes (official + user + packages) into a service.
    ///
    /// Official themes come first and cannot be overridden. The official
    /// light theme is applied.
    pub fn load_all(&self) -> ThemeService {
        let mut service = ThemeService::new();
        let Some(user_dir) = self.user_themes_dir.as_deref() else {
            return service;
        };

        let mut seen: HashSet<String> = service.themes().iter().map(|t| t.id.clone()).collect();
        let mut themes = Vec::new();

        // Load user themes from the themes directory (recursively)
        self.scan_directory(user_dir, true, &mut seen, &mut themes);

        // Load extension packages from <themes>/packages/*/
        let packages_dir = user_dir.join("packages");
        for path in sorted_entries(&packages_dir) {
            if !path.is_dir() || is_hidden(&path) {
                continue;
            }
            if path.join("package.json").exists() {
                self.load_package_themes(&path, &mut seen, &mut themes);
            } else {
                self.scan_directory(&path, false, &mut seen, &mut themes);
            }
        }

        let report = service.register(themes);
        tracing::info!(
            "Loaded {} user themes from {:?}",
            report.inserted.len(),
            user_dir
        );
        service
    }

    /// Load themes listed under `contributes.themes` in a package manifest.
    fn load_package_themes(
        &self,
        pkg_dir: &Path,
        seen: &mut HashSet<String>,
        themes: &mut Vec<Theme>,
    ) {
        let manifest_path = pkg_dir.join("package.json");
        let manifest = match std::fs::read_to_string(&manifest_path)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                serde_json::from_str::<PackageManifest>(&content).map_err(|e| e.to_string())
            }) {
            Ok(manifest) => manifest,
            Err(e) => {
                tracing::warn!("Skipping theme package {:?}: {}", manifest_path, e);
                return;
            }
        };

        match manifest.contributes.and_then(|c| c.themes) {
            Some(contributed) => {
                for entry in contributed {
                    add_theme(entry.into(), &manifest_path, seen, themes);
                }
            }
            // Fallback: no contributed themes listed, scan for manifests
            None => self.scan_directory(pkg_dir, false, seen, themes),
        }
    }

    /// Recursively scan a directory for theme manifests.
    fn scan_directory(
        &self,
        dir: &Path,
        top_level: bool,
        seen: &mut HashSet<String>,
        themes: &mut Vec<Theme>,
    ) {
        for path in sorted_entries(dir) {
            if path.is_dir() {
                // "packages" is handled separately by load_all
                if top_level && path.file_name().is_some_and(|name| name == "packages") {
                    continue;
                }
                if !is_hidden(&path) {
                    self.scan_directory(&path, false, seen, themes);
                }
            } else if path.extension().is_some_and(|ext| ext == "json")
                && path.file_name().is_some_and(|name| name != "package.json")
            {
                match load_theme_file(&path) {
                    Ok(theme) => add_theme(theme, &path, seen, themes),
                    Err(e) => tracing::warn!("Skipping theme: {}", e),
                }
            }
        }
    }
}

fn add_theme(theme: Theme, source: &Path, seen: &mut HashSet<String>, themes: &mut Vec<Theme>) {
    if seen.insert(theme.id.clone()) {
        tracing::debug!("Found theme '{}' in {:?}", theme.id, source);
        themes.push(theme);
    } else {
        tracing::warn!(
            "Ignoring theme '{}' from {:?}: id already registered",
            theme.id,
            source
        );
    }
}

/// Directory entries sorted by path, so discovery order is stable.
fn sorted_entries(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            if dir.exists() {
                tracing::warn!("Failed to read themes directory {:?}: {}", dir, e);
            }
            return Vec::new();
        }
    };
    let mut paths: Vec<PathBuf> = entries.flatten().map(|entry| entry.path()).collect();
    paths.sort();
    paths
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}
