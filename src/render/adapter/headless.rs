// AsciiCanvas
// copyright zipxing@hotmail.com 2022～2025

//! Headless adapter: an in-memory surface recording every draw call.
//! Used by the test suite to assert compositing behavior (fill counts,
//! draw order, skipped cells) and usable for snapshot rendering where
//! no terminal is attached. Size, cell width, pixel ratio and input
//! events are all scripted by the caller.

use crate::event::Event;
use crate::render::adapter::Adapter;
use crate::render::style::Color;
use std::any::Any;
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    SetFill(Color),
    FillRect(f32, f32, f32, f32),
    Glyph(String, f32, f32),
    Present,
}

pub struct HeadlessAdapter {
    width: f32,
    height: f32,
    dpr: f32,
    /// measured width of one reference character
    char_width: f32,
    pub ops: Vec<DrawOp>,
    queue: VecDeque<Event>,
    quit: bool,
    initialized: bool,
}

impl HeadlessAdapter {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            dpr: 1.0,
            char_width: 1.0,
            ops: vec![],
            queue: VecDeque::new(),
            quit: false,
            initialized: false,
        }
    }

    pub fn char_width(mut self, w: f32) -> Self {
        self.char_width = w;
        self
    }

    pub fn pixel_ratio_of(mut self, dpr: f32) -> Self {
        self.dpr = dpr;
        self
    }

    /// change the scripted viewport (takes effect on the next resize)
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// queue an input event for the next poll
    pub fn push_event(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// make the next poll report a quit request
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    pub fn fill_changes(&self) -> Vec<Color> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::SetFill(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    pub fn glyph_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Glyph(..)))
            .count()
    }

    pub fn rect_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillRect(..)))
            .count()
    }
}

impl Adapter for HeadlessAdapter {
    fn init(&mut self) -> Result<(), String> {
        self.initialized = true;
        Ok(())
    }

    fn reset(&mut self) {
        self.initialized = false;
        self.queue.clear();
    }

    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn pixel_ratio(&self) -> f32 {
        self.dpr
    }

    fn measure_text(&mut self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }

    fn poll_event(&mut self, _timeout: Duration, events: &mut Vec<Event>) -> bool {
        while let Some(e) = self.queue.pop_front() {
            events.push(e);
        }
        std::mem::take(&mut self.quit)
    }

    fn set_fill(&mut self, color: Color) {
        self.ops.push(DrawOp::SetFill(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<(), String> {
        self.ops.push(DrawOp::FillRect(x, y, w, h));
        Ok(())
    }

    fn draw_glyph(&mut self, symbol: &str, x: f32, y: f32) -> Result<(), String> {
        self.ops.push(DrawOp::Glyph(symbol.to_string(), x, y));
        Ok(())
    }

    fn present(&mut self) -> Result<(), String> {
        self.ops.push(DrawOp::Present);
        Ok(())
    }

    fn as_any(&mut self) -> &mut dyn Any {
        self
    }
}
