use ratatui::style::Color;

use crate::host::Palette;

pub const STATUS_ERROR: Color = Color::Rgb(0xff, 0x3b, 0x30);
pub const DISABLED: Color = Color::Rgb(0x6b, 0x72, 0x80);

/// Palette resolved to terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuiColors {
    pub bg: Color,
    pub text: Color,
    pub hint: Color,
    pub link: Color,
    pub button: Color,
    pub button_text: Color,
    pub secondary_bg: Color,
}

impl TuiColors {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            bg: parse_hex(&palette.bg).unwrap_or(Color::Reset),
            text: parse_hex(&palette.text).unwrap_or(Color::Reset),
            hint: parse_hex(&palette.hint).unwrap_or(Color::Gray),
            link: parse_hex(&palette.link).unwrap_or(Color::Blue),
            button: parse_hex(&palette.button).unwrap_or(Color::Blue),
            button_text: parse_hex(&palette.button_text).unwrap_or(Color::White),
            secondary_bg: parse_hex(&palette.secondary_bg).unwrap_or(Color::Reset),
        }
    }
}

/// `#rrggbb` or `#rgb` to an RGB color.
pub fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some(Color::Rgb(expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(parse_hex("#2481cc"), Some(Color::Rgb(0x24, 0x81, 0xcc)));
        assert_eq!(parse_hex("#fff"), Some(Color::Rgb(0xff, 0xff, 0xff)));
    }

    #[test]
    fn rejects_non_hex() {
        assert_eq!(parse_hex("red"), None);
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn default_palette_resolves_fully() {
        let colors = TuiColors::from_palette(&Palette::default());
        assert_eq!(colors.bg, Color::Rgb(0xff, 0xff, 0xff));
        assert_eq!(colors.secondary_bg, Color::Rgb(0xf0, 0xf0, 0xf0));
    }
}
