// AsciiCanvas
// copyright zipxing@hotmail.com 2022～2025

//! Per-frame context handed to scene functions. A fresh snapshot is built
//! for every rendered frame and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// one character cell position, produced by the render loop's iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: u16,
    pub y: u16,
}

impl Coord {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Read-only frame snapshot.
///
/// `frame` starts at 0 on the first rendered frame and increases by one
/// per rendered frame. `time` is milliseconds since the first rendered
/// frame scaled by the canvas speed, so it is 0 on frame 0, frozen for
/// speed 0 and decreasing for negative speeds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameContext {
    pub cols: u16,
    pub rows: u16,
    pub width: f32,
    pub height: f32,
    pub frame: u64,
    pub time: f64,
}
