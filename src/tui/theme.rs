use ratatui::style::Color;

use crate::model::{ProjectType, SkillCategory, ThemeMode, UiConfig};

/// Parsed color palette for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub cyan: Color,
    pub purple: Color,
    pub blue: Color,
    pub selection_bg: Color,
    pub selection_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
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
    pub fn dark() -> Self {
        Theme {
            mode: ThemeMode::Dark,
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            cyan: Color::Rgb(0x44, 0xDD, 0xFF),
            purple: Color::Rgb(0xCC, 0x66, 0xFF),
            blue: Color::Rgb(0x44, 0x88, 0xFF),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            selection_border: Color::Rgb(0xFB, 0x41, 0x96),
        }
    }

    pub fn light() -> Self {
        Theme {
            mode: ThemeMode::Light,
            background: Color::Rgb(0xFA, 0xF7, 0xFF),
            text: Color::Rgb(0x3B, 0x35, 0x61),
            text_bright: Color::Rgb(0x0C, 0x00, 0x1B),
            highlight: Color::Rgb(0xC2, 0x18, 0x5B),
            dim: Color::Rgb(0x8A, 0x84, 0xB8),
            red: Color::Rgb(0xC6, 0x28, 0x28),
            yellow: Color::Rgb(0xB2, 0x8A, 0x00),
            green: Color::Rgb(0x1B, 0x8A, 0x4B),
            cyan: Color::Rgb(0x00, 0x83, 0x9E),
            purple: Color::Rgb(0x7B, 0x2F, 0xBF),
            blue: Color::Rgb(0x1E, 0x5B, 0xC6),
            selection_bg: Color::Rgb(0xF3, 0xD9, 0xE8),
            selection_border: Color::Rgb(0xC2, 0x18, 0x5B),
        }
    }

    /// Build the palette for a mode, applying `[ui.colors]` overrides
    pub fn for_mode(mode: ThemeMode, ui: &UiConfig) -> Self {
        let mut theme = match mode {
            ThemeMode::Dark => Theme::dark(),
            ThemeMode::Light => Theme::light(),
        };

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "green" => theme.green = color,
                    "cyan" => theme.cyan = color,
                    "purple" => theme.purple = color,
                    "blue" => theme.blue = color,
                    "selection_bg" => theme.selection_bg = color,
                    "selection_border" => theme.selection_border = color,
                    _ => log::warn!("event=theme_override module=theme status=unknown_key key={}", key),
                }
            }
        }

        theme
    }

    /// Color used for a project type badge
    pub fn project_type_color(&self, kind: ProjectType) -> Color {
        match kind {
            ProjectType::Frontend => self.cyan,
            ProjectType::Fullstack => self.purple,
            ProjectType::Practice => self.yellow,
        }
    }

    /// Color used for a skill category label
    pub fn category_color(&self, category: SkillCategory) -> Color {
        match category {
            SkillCategory::Frontend => self.cyan,
            SkillCategory::Backend => self.purple,
            SkillCategory::Tooling => self.yellow,
        }
    }

    /// Heat color for a 1..=5 skill strength
    pub fn strength_color(&self, strength: u8) -> Color {
        match strength {
            0 | 1 => self.dim,
            2 => self.blue,
            3 => self.cyan,
            4 => self.green,
            _ => self.highlight,
        }
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
    fn test_mode_selects_palette() {
        let ui = UiConfig::default();
        assert_eq!(Theme::for_mode(ThemeMode::Dark, &ui), Theme::dark());
        assert_eq!(Theme::for_mode(ThemeMode::Light, &ui), Theme::light());
        assert_ne!(Theme::dark().background, Theme::light().background);
    }

    #[test]
    fn test_overrides_apply_to_either_mode() {
        let mut ui = UiConfig::default();
        ui.colors.insert("highlight".into(), "#112233".into());
        ui.colors.insert("bogus".into(), "#000000".into());
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            let theme = Theme::for_mode(mode, &ui);
            assert_eq!(theme.highlight, Color::Rgb(0x11, 0x22, 0x33));
            assert_eq!(theme.mode, mode);
        }
    }

    #[test]
    fn test_strength_colors_rise() {
        let theme = Theme::dark();
        assert_eq!(theme.strength_color(1), theme.dim);
        assert_eq!(theme.strength_color(5), theme.highlight);
    }
}
