//! Theme classification and ordering for theme pickers.
//!
//! Given every theme a provider knows about and the one currently active,
//! [`view::theme::user_configurable_themes`] returns the short, stable list a
//! user should pick from: the official themes in light, dark, high-contrast
//! order, followed by the active theme when it is a contributed one.

rust_i18n::i18n!("locales", fallback = "en");

#[cfg(feature = "runtime")]
pub mod config;
pub mod i18n;
pub mod services;
pub mod view;

pub use theme_picker_core::{Theme, ThemeType};
