// AsciiCanvas
// copyright zipxing@hotmail.com 2022～2025

//! Defines colors and the fg/bg style pair used when blitting strings
//! into a buffer. `Color::Reset` stands for "use the canvas default";
//! scene cells are normalized to concrete colors before storage, so
//! Reset only survives where a caller asks for it explicitly.

#[cfg(feature = "crossterm")]
use crossterm::style::Color as CColor;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
    Rgb(u8, u8, u8),
    Indexed(u8),
}

impl Color {
    /// Parse `#rgb` or `#rrggbb` into an rgb color. Anything else is None.
    pub fn from_hex(s: &str) -> Option<Color> {
        let c = s.strip_prefix('#').unwrap_or(s);
        if !c.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let expand = |h: &str| -> String {
            let b: Vec<char> = h.chars().collect();
            format!("{0}{0}{1}{1}{2}{2}", b[0], b[1], b[2])
        };
        let full = match c.len() {
            3 => expand(c),
            6 => c.to_string(),
            _ => return None,
        };
        let r = u8::from_str_radix(&full[0..2], 16).ok()?;
        let g = u8::from_str_radix(&full[2..4], 16).ok()?;
        let b = u8::from_str_radix(&full[4..6], 16).ok()?;
        Some(Color::Rgb(r, g, b))
    }
}

#[cfg(feature = "crossterm")]
impl From<Color> for CColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Reset => CColor::Reset,
            Color::Black => CColor::Black,
            Color::Red => CColor::DarkRed,
            Color::Green => CColor::DarkGreen,
            Color::Yellow => CColor::DarkYellow,
            Color::Blue => CColor::DarkBlue,
            Color::Magenta => CColor::DarkMagenta,
            Color::Cyan => CColor::DarkCyan,
            Color::Gray => CColor::Grey,
            Color::DarkGray => CColor::DarkGrey,
            Color::LightRed => CColor::Red,
            Color::LightGreen => CColor::Green,
            Color::LightBlue => CColor::Blue,
            Color::LightYellow => CColor::Yellow,
            Color::LightMagenta => CColor::Magenta,
            Color::LightCyan => CColor::Cyan,
            Color::White => CColor::White,
            Color::Indexed(i) => CColor::AnsiValue(i),
            Color::Rgb(r, g, b) => CColor::Rgb { r, g, b },
        }
    }
}

/// optional fg/bg pair for string blitting, None leaves the cell color
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl Style {
    pub fn fg(mut self, color: Color) -> Style {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Style {
        self.bg = Some(color);
        self
    }

    pub fn patch(mut self, other: Style) -> Style {
        self.fg = other.fg.or(self.fg);
        self.bg = other.bg.or(self.bg);
        self
    }
}
