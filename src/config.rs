// AsciiCanvas
// copyright zipxing@hotmail.com 2022～2025

//! Canvas configuration: default colors, cell height in surface pixels
//! and the time-scale multiplier. A config is fixed for the lifetime of
//! one canvas; changing it means building a new canvas.

use crate::render::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// background color, also the default cell background
    pub bg: Color,
    /// default foreground color for cells that omit one
    pub fg: Color,
    /// character cell height in surface pixels (1.0 on a terminal where
    /// the cell itself is the pixel)
    pub cell_height: f32,
    /// time-scale multiplier; 0 freezes time, negative runs it backward
    pub speed: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            cell_height: 12.0,
            speed: 1.0,
        }
    }
}

impl CanvasConfig {
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    pub fn cell_height(mut self, h: f32) -> Self {
        self.cell_height = h;
        self
    }

    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// terminal preset: one cell per "pixel", light on dark
    pub fn terminal() -> Self {
        Self::default()
            .bg(Color::Black)
            .fg(Color::White)
            .cell_height(1.0)
    }

    /// load a config from a json file
    pub fn load(path: &str) -> Result<Self, String> {
        let data =
            fs::read_to_string(path).map_err(|e| format!("config read {}: {}", path, e))?;
        serde_json::from_str(&data).map_err(|e| format!("config parse {}: {}", path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let c = CanvasConfig::default();
        assert_eq!(c.bg, Color::White);
        assert_eq!(c.fg, Color::Black);
        assert_eq!(c.cell_height, 12.0);
        assert_eq!(c.speed, 1.0);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c: CanvasConfig = serde_json::from_str(r#"{"speed": 0.5}"#).unwrap();
        assert_eq!(c.speed, 0.5);
        assert_eq!(c.cell_height, 12.0);
        let c: CanvasConfig =
            serde_json::from_str(r#"{"bg": "Black", "fg": {"Rgb": [255, 0, 0]}}"#).unwrap();
        assert_eq!(c.bg, Color::Black);
        assert_eq!(c.fg, Color::Rgb(255, 0, 0));
    }
}
