// AsciiCanvas
// copyright zipxing@hotmail.com 2022～2025

//! Cell is the basic rendering unit: one display symbol plus foreground
//! and background colors. Many cells form a Buffer.
//!
//! Scene functions do not build cells directly; they return a
//! [`CellValue`] (a bare character or a character with optional colors)
//! which the render loop normalizes into the stored cell using the
//! canvas defaults. The stored symbol is a string so buffer helpers can
//! blit multi-byte graphemes; `set_char` reuses the allocation, keeping
//! the per-frame hot loop allocation-free after warmup.

use crate::render::style::{Color, Style};
use serde::{Deserialize, Serialize};

/// Scene function output: a character and optional colors.
/// `From<char>` provides the bare form, builder methods the styled one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellValue {
    pub ch: char,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl CellValue {
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            fg: None,
            bg: None,
        }
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }
}

impl From<char> for CellValue {
    fn from(ch: char) -> Self {
        CellValue::new(ch)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub symbol: String,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    pub fn set_symbol(&mut self, symbol: &str) -> &mut Cell {
        self.symbol.clear();
        self.symbol.push_str(symbol);
        self
    }

    pub fn set_char(&mut self, ch: char) -> &mut Cell {
        self.symbol.clear();
        self.symbol.push(ch);
        self
    }

    pub fn set_fg(&mut self, color: Color) -> &mut Cell {
        self.fg = color;
        self
    }

    pub fn set_bg(&mut self, color: Color) -> &mut Cell {
        self.bg = color;
        self
    }

    pub fn set_style(&mut self, style: Style) -> &mut Cell {
        if let Some(c) = style.fg {
            self.fg = c;
        }
        if let Some(c) = style.bg {
            self.bg = c;
        }
        self
    }

    /// Overwrite this cell from a scene result, resolving missing colors
    /// against the canvas defaults.
    pub fn apply(&mut self, value: CellValue, default_fg: Color, default_bg: Color) -> &mut Cell {
        self.set_char(value.ch)
            .set_fg(value.fg.unwrap_or(default_fg))
            .set_bg(value.bg.unwrap_or(default_bg))
    }

    /// a space draws nothing, regardless of its colors
    pub fn is_blank(&self) -> bool {
        self.symbol == " "
    }

    pub fn reset(&mut self) {
        self.symbol.clear();
        self.symbol.push(' ');
        self.fg = Color::Reset;
        self.bg = Color::Reset;
    }
}

impl Default for Cell {
    fn default() -> Cell {
        Cell {
            symbol: " ".into(),
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_char_normalizes_to_defaults() {
        let mut cell = Cell::default();
        cell.apply('#'.into(), Color::White, Color::Black);
        assert_eq!(cell.symbol, "#");
        assert_eq!(cell.fg, Color::White);
        assert_eq!(cell.bg, Color::Black);
    }

    #[test]
    fn styled_value_keeps_explicit_colors() {
        let mut cell = Cell::default();
        cell.apply(
            CellValue::new('x').fg(Color::Red),
            Color::White,
            Color::Black,
        );
        assert_eq!(cell.fg, Color::Red);
        assert_eq!(cell.bg, Color::Black);
    }

    #[test]
    fn blank_is_space_only() {
        let mut cell = Cell::default();
        assert!(cell.is_blank());
        cell.apply(CellValue::new(' ').bg(Color::Blue), Color::White, Color::Black);
        assert!(cell.is_blank());
        cell.set_char('.');
        assert!(!cell.is_blank());
    }
}
