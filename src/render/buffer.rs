// AsciiCanvas
// copyright zipxing@hotmail.com 2022～2025

//! Buffer is the frame grid: a cell vector with cols * rows elements
//! indexed row-major. It is owned by the canvas and reused in place
//! across frames; only a dimension change reallocates it, so the
//! per-cell loop never touches the allocator.
//!
//! Scene functions receive the buffer by reference and may read cells
//! already computed earlier in the same frame; the post-process hook
//! receives it mutably after the per-cell pass completes.

use crate::render::cell::{Cell, CellValue};
use crate::render::style::{Color, Style};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Buffer {
    cols: u16,
    rows: u16,
    content: Vec<Cell>,
}

impl Buffer {
    pub fn new(cols: u16, rows: u16) -> Buffer {
        Buffer {
            cols,
            rows,
            content: vec![Cell::default(); cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn content(&self) -> &[Cell] {
        &self.content
    }

    pub fn index_of(&self, x: u16, y: u16) -> usize {
        debug_assert!(
            x < self.cols && y < self.rows,
            "position outside the buffer: x={}, y={}, cols={}, rows={}",
            x,
            y,
            self.cols,
            self.rows
        );
        y as usize * self.cols as usize + x as usize
    }

    pub fn pos_of(&self, i: usize) -> (u16, u16) {
        debug_assert!(
            i < self.content.len(),
            "index outside the buffer: i={} len={}",
            i,
            self.content.len()
        );
        (
            (i % self.cols as usize) as u16,
            (i / self.cols as usize) as u16,
        )
    }

    pub fn get(&self, x: u16, y: u16) -> &Cell {
        let i = self.index_of(x, y);
        &self.content[i]
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> &mut Cell {
        let i = self.index_of(x, y);
        &mut self.content[i]
    }

    /// Store a scene result at (x, y), resolving missing colors against
    /// the supplied defaults.
    pub fn put(&mut self, x: u16, y: u16, value: CellValue, default_fg: Color, default_bg: Color) {
        let i = self.index_of(x, y);
        self.content[i].apply(value, default_fg, default_bg);
    }

    /// Reallocate to the new dimensions, discarding previous contents.
    /// A call with unchanged dimensions is an exact no-op.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if cols == self.cols && rows == self.rows {
            return;
        }
        self.cols = cols;
        self.rows = rows;
        self.content.clear();
        self.content
            .resize(cols as usize * rows as usize, Cell::default());
    }

    pub fn reset(&mut self) {
        for c in &mut self.content {
            c.reset();
        }
    }

    /// Write a string starting at (x, y), one grapheme per cell, wide
    /// graphemes clearing the cells they cover. Returns the x position
    /// after the last written cell. Text past the right edge is clipped.
    pub fn set_str<S>(&mut self, x: u16, y: u16, string: S, style: Style) -> u16
    where
        S: AsRef<str>,
    {
        if y >= self.rows || x >= self.cols {
            return x;
        }
        let mut index = self.index_of(x, y);
        let mut x_offset = x as usize;
        let max_offset = self.cols as usize;
        for s in UnicodeSegmentation::graphemes(string.as_ref(), true) {
            let width = s.width();
            if width == 0 {
                continue;
            }
            if width > max_offset.saturating_sub(x_offset) {
                break;
            }
            self.content[index].set_symbol(s);
            self.content[index].set_style(style);
            for i in index + 1..index + width {
                self.content[i].reset();
            }
            index += width;
            x_offset += width;
        }
        x_offset as u16
    }

    /// plain-text dump of the grid, one line per row (headless snapshots)
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.len() + self.rows as usize);
        for y in 0..self.rows {
            for x in 0..self.cols {
                out.push_str(&self.get(x, y).symbol);
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_translates_to_and_from_coordinates() {
        let buf = Buffer::new(50, 80);

        // First cell is at the upper left corner.
        assert_eq!(buf.pos_of(0), (0, 0));
        assert_eq!(buf.index_of(0, 0), 0);

        // Last cell is in the lower right.
        assert_eq!(buf.pos_of(buf.len() - 1), (49, 79));
        assert_eq!(buf.index_of(49, 79), buf.len() - 1);
    }

    #[test]
    fn resize_reallocates_only_on_change() {
        let mut buf = Buffer::new(10, 5);
        buf.get_mut(3, 2).set_char('x');
        let ptr = buf.content().as_ptr();

        buf.resize(10, 5);
        assert_eq!(buf.content().as_ptr(), ptr);
        assert_eq!(buf.get(3, 2).symbol, "x");

        buf.resize(7, 3);
        assert_eq!(buf.len(), 21);
        // contents are discarded on a real resize
        assert!(buf.content().iter().all(|c| c.symbol == " "));
    }

    #[test]
    fn set_str_writes_and_clips() {
        let mut buf = Buffer::new(8, 2);
        let end = buf.set_str(1, 0, "hello", Style::default().fg(Color::Red));
        assert_eq!(end, 6);
        assert_eq!(buf.get(1, 0).symbol, "h");
        assert_eq!(buf.get(5, 0).symbol, "o");
        assert_eq!(buf.get(1, 0).fg, Color::Red);
        // clipped at the right edge
        buf.set_str(6, 1, "world", Style::default());
        assert_eq!(buf.get(6, 1).symbol, "w");
        assert_eq!(buf.get(7, 1).symbol, "o");
    }

    #[test]
    fn set_str_handles_wide_chars() {
        let mut buf = Buffer::new(6, 1);
        buf.set_str(0, 0, "a中b", Style::default());
        assert_eq!(buf.get(0, 0).symbol, "a");
        assert_eq!(buf.get(1, 0).symbol, "中");
        // the cell shadowed by the wide char is blank
        assert_eq!(buf.get(2, 0).symbol, " ");
        assert_eq!(buf.get(3, 0).symbol, "b");
    }

    #[test]
    fn to_text_snapshot() {
        let mut buf = Buffer::new(3, 2);
        buf.set_str(0, 0, "ab", Style::default());
        assert_eq!(buf.to_text(), "ab \n   \n");
    }
}
