//! Theme picker module with separated pure policy and I/O operations.
//!
//! This module is split into:
//! - `types`: The official theme registry (no I/O)
//! - `provider`: The `ThemeProvider` abstraction and its two implementations
//! - `selector`: Classification, labels and picker ordering (pure functions)
//! - `loader`: ThemeLoader builds a ThemeService from embedded + user themes (runtime only)
//!
//! # Example
//!
//! ```ignore
//! use theme_picker::view::theme::{picker_entries, ServiceThemeProvider, ThemeLoader};
//! use std::path::PathBuf;
//!
//! // Load all themes once at startup
//! let loader = ThemeLoader::new(PathBuf::from("/home/user/.config/theme-picker/themes"));
//! let mut service = loader.load_all();
//! service.set_current_theme("solarized-dark")?;
//!
//! // Official themes first, then the active contributed theme
//! for choice in picker_entries(&ServiceThemeProvider::new(&service)) {
//!     println!("{}", choice.label);
//! }
//! ```

// Loader requires filesystem access - runtime only
#[cfg(feature = "runtime")]
mod loader;
mod provider;
mod selector;
mod types;

#[cfg(feature = "runtime")]
pub use loader::*;
pub use provider::*;
pub use selector::*;
pub use types::*;
