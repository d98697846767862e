use ratatui::style::Color;

/// Color theme for the demo UI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    /// Ghost text, placeholder, hints
    pub dim: Color,
    pub highlight: Color,
    /// Palette cycled across selected-tag chips
    pub chip_colors: Vec<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x0E, 0x17),
            text: Color::Rgb(0xC8, 0xC2, 0xDE),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6E, 0x68, 0x8A),
            highlight: Color::Rgb(0x5C, 0xCF, 0xE6),
            chip_colors: vec![
                Color::Rgb(0x5C, 0xCF, 0xE6),
                Color::Rgb(0x87, 0xE5, 0x8E),
                Color::Rgb(0xE6, 0xB4, 0x55),
                Color::Rgb(0xD0, 0x8F, 0xF0),
                Color::Rgb(0xF0, 0x71, 0x78),
            ],
        }
    }
}

impl Theme {
    /// Default theme with the accent color overridden by a "#RRGGBB" string.
    /// Unparseable values fall back to the default accent.
    pub fn with_accent(accent: Option<&str>) -> Self {
        let mut theme = Theme::default();
        if let Some(color) = accent.and_then(parse_hex_color) {
            theme.highlight = color;
        }
        theme
    }

    /// Chip color for the n-th selected tag.
    pub fn chip_color(&self, index: usize) -> Color {
        self.chip_colors[index % self.chip_colors.len()]
    }
}

/// Parse a hex color string like "#5CCFE6" into an RGB Color
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
