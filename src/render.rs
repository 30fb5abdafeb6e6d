// AsciiCanvas
// copyright zipxing@hotmail.com 2022～2025

//! Render module.
//! adapter: drawing surface interface (crossterm terminal, headless).
//! cell: a base drawing unit i.e. a character with fg/bg colors.
//! buffer: a vector comprised of cells, managing the frame grid.
//! canvas: the render loop, sampling a scene function per cell per frame
//! and compositing the buffer onto the adapter.
//! style: colors and the fg/bg style pair.

pub mod adapter;
pub mod buffer;
pub mod canvas;
pub mod cell;
pub mod style;

pub use buffer::Buffer;
pub use canvas::{AsciiCanvas, Scene};
pub use cell::{Cell, CellValue};
pub use style::{Color, Style};
