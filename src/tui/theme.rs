use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub accent: Color,
    pub dim: Color,
    pub completed: Color,
    pub note_marker: Color,
    pub selection_bg: Color,
    pub selection_border: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x1A, 0x12, 0x08),
            text: Color::Rgb(0xE8, 0xD9, 0xB0),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            accent: Color::Rgb(0xF0, 0xA5, 0x2E),
            dim: Color::Rgb(0x8A, 0x7A, 0x5A),
            completed: Color::Rgb(0x6B, 0xD9, 0x6B),
            note_marker: Color::Rgb(0xFF, 0xD7, 0x00),
            selection_bg: Color::Rgb(0x3A, 0x2A, 0x12),
            selection_border: Color::Rgb(0xF0, 0xA5, 0x2E),
            search_match_bg: Color::Rgb(0x40, 0xE0, 0xD0),
            search_match_fg: Color::Rgb(0x1A, 0x12, 0x08),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "accent" => theme.accent = color,
                    "dim" => theme.dim = color,
                    "completed" => theme.completed = color,
                    "note_marker" => theme.note_marker = color,
                    "selection_bg" => theme.selection_bg = color,
                    "selection_border" => theme.selection_border = color,
                    "search_match_bg" => theme.search_match_bg = color,
                    "search_match_fg" => theme.search_match_fg = color,
                    _ => {}
                }
            }
        }

        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("completed".into(), "#50fa7b".into());
        ui.colors.insert("bogus_key".into(), "#000000".into());
        ui.colors.insert("accent".into(), "not-a-color".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.completed, Color::Rgb(0x50, 0xFA, 0x7B));
        // Invalid value leaves the default
        assert_eq!(theme.accent, Theme::default().accent);
    }
}
