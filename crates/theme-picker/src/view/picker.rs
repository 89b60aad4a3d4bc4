//! Plain-text rendering of the theme picker.

use rust_i18n::t;

use crate::view::theme::ThemeChoice;

/// Render picker rows as text, one theme per line, `* ` marking the active one.
pub fn render_text(entries: &[ThemeChoice], locale: &str) -> String {
    let mut out = String::new();
    out.push_str(&t!("picker.title", locale = locale));
    out.push('\n');

    if entries.is_empty() {
        out.push_str("  ");
        out.push_str(&t!("picker.empty", locale = locale));
        out.push('\n');
        return out;
    }

    for entry in entries {
        let marker = if entry.active { "* " } else { "  " };
        out.push_str(marker);
        out.push_str(&entry.label);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::theme::{picker_entries_in, StaticThemeProvider, BUILTIN_DARK, BUILTIN_LIGHT};
    use theme_picker_core::{Theme, ThemeType};

    #[test]
    fn test_render_marks_active_row() {
        let night = Theme::new("night", ThemeType::Dark, "Night");
        let provider = StaticThemeProvider::new(
            vec![night.clone(), BUILTIN_DARK.to_theme(), BUILTIN_LIGHT.to_theme()],
            night,
        );
        let rendered = render_text(&picker_entries_in(&provider, "en"), "en");
        assert_eq!(
            rendered,
            "Select Theme\n  Light\n  Dark\n* Unofficial - Night\n"
        );
    }

    #[test]
    fn test_render_empty_picker() {
        assert_eq!(
            render_text(&[], "de"),
            "Design auswählen\n  Keine Designs verfügbar\n"
        );
    }
}
