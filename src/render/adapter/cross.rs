// AsciiCanvas
// copyright zipxing@hotmail.com 2022～2025

//! Crossterm terminal adapter. The terminal cell is the surface pixel:
//! the viewport is (cols, rows), text measures to its display width and
//! the canvas ends up with a 1.0 x 1.0 cell. Color attributes are only
//! reissued when they actually change, mirroring the canvas-side fill
//! latch, so a steady frame degenerates to cursor moves and prints.

use crate::{
    event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    render::adapter::{to_error, Adapter},
    render::style::Color,
};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    event::{Event as CEvent, KeyCode as CKeyCode, MouseButton as CMouseButton},
    execute, queue,
    style::{Color as CColor, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use log::info;
use std::any::Any;
use std::io::{self, Write};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

pub struct CrosstermAdapter {
    writer: Box<dyn Write>,
    fill: Color,
    last_fg: Option<Color>,
    last_bg: Option<Color>,
    /// background of the last full clear, restored under bare glyphs
    clear_bg: Color,
    /// cell covered by the most recent single-cell fill
    filled_cell: Option<(u16, u16)>,
    active: bool,
}

impl CrosstermAdapter {
    pub fn new() -> Self {
        Self {
            writer: Box::new(io::stdout()),
            fill: Color::Reset,
            last_fg: None,
            last_bg: None,
            clear_bg: Color::Reset,
            filled_cell: None,
            active: false,
        }
    }

    fn ensure_fg(&mut self, color: Color) -> Result<(), String> {
        if self.last_fg != Some(color) {
            to_error(queue!(self.writer, SetForegroundColor(CColor::from(color))))?;
            self.last_fg = Some(color);
        }
        Ok(())
    }

    fn ensure_bg(&mut self, color: Color) -> Result<(), String> {
        if self.last_bg != Some(color) {
            to_error(queue!(self.writer, SetBackgroundColor(CColor::from(color))))?;
            self.last_bg = Some(color);
        }
        Ok(())
    }
}

impl Default for CrosstermAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Adapter for CrosstermAdapter {
    fn init(&mut self) -> Result<(), String> {
        to_error(enable_raw_mode())?;
        let mut stdout = io::stdout();
        to_error(execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            Hide
        ))?;
        self.active = true;
        info!("crossterm adapter up, size {:?}", terminal::size());
        Ok(())
    }

    fn reset(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let _ = disable_raw_mode();
        let _ = execute!(self.writer, LeaveAlternateScreen, DisableMouseCapture, Show);
    }

    fn size(&self) -> (f32, f32) {
        match terminal::size() {
            Ok((w, h)) => (w as f32, h as f32),
            Err(_) => (0.0, 0.0),
        }
    }

    fn measure_text(&mut self, text: &str) -> f32 {
        text.width() as f32
    }

    fn poll_event(&mut self, timeout: Duration, events: &mut Vec<Event>) -> bool {
        if !crossterm::event::poll(timeout).unwrap_or(false) {
            return false;
        }
        let Ok(e) = crossterm::event::read() else {
            return false;
        };
        if let Some(et) = convert_event(&e) {
            events.push(et);
        }
        if let CEvent::Key(key) = e {
            if matches!(key.code, CKeyCode::Char('q') | CKeyCode::Esc) {
                return true;
            }
        }
        false
    }

    fn set_fill(&mut self, color: Color) {
        self.fill = color;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<(), String> {
        let (vw, vh) = self.size();
        let cx = x.max(0.0) as u16;
        let cy = y.max(0.0) as u16;
        if x <= 0.0 && y <= 0.0 && w >= vw && h >= vh {
            // whole-viewport fill is a clear in terminal terms
            let fill = self.fill;
            self.ensure_bg(fill)?;
            to_error(queue!(self.writer, Clear(ClearType::All)))?;
            self.clear_bg = fill;
            self.filled_cell = None;
            return Ok(());
        }
        let fill = self.fill;
        self.ensure_bg(fill)?;
        let cols = (w.ceil() as u16).max(1) as usize;
        for row in 0..(h.ceil() as u16).max(1) {
            to_error(queue!(self.writer, MoveTo(cx, cy + row)))?;
            to_error(queue!(self.writer, Print(" ".repeat(cols))))?;
        }
        self.filled_cell = Some((cx, cy));
        Ok(())
    }

    fn draw_glyph(&mut self, symbol: &str, x: f32, y: f32) -> Result<(), String> {
        let cx = x.max(0.0) as u16;
        let cy = y.max(0.0) as u16;
        // keep the backdrop of a just-filled cell, default it otherwise
        if self.filled_cell != Some((cx, cy)) {
            let bg = self.clear_bg;
            self.ensure_bg(bg)?;
        }
        self.filled_cell = None;
        let fill = self.fill;
        self.ensure_fg(fill)?;
        to_error(queue!(self.writer, MoveTo(cx, cy)))?;
        to_error(queue!(self.writer, Print(symbol)))?;
        Ok(())
    }

    fn present(&mut self) -> Result<(), String> {
        to_error(self.writer.flush())
    }

    fn as_any(&mut self) -> &mut dyn Any {
        self
    }
}

impl Drop for CrosstermAdapter {
    fn drop(&mut self) {
        self.reset();
    }
}

/// Convert crossterm I/O events to unified events. FocusLost stands in
/// for the pointer leaving the surface (a terminal has no leave event).
pub fn convert_event(e: &CEvent) -> Option<Event> {
    match e {
        CEvent::Key(key) => {
            let kc = match key.code {
                CKeyCode::Char(cc) => KeyCode::Char(cc),
                CKeyCode::Backspace => KeyCode::Backspace,
                CKeyCode::Enter => KeyCode::Enter,
                CKeyCode::Up => KeyCode::Up,
                CKeyCode::Down => KeyCode::Down,
                CKeyCode::Left => KeyCode::Left,
                CKeyCode::Right => KeyCode::Right,
                CKeyCode::Tab => KeyCode::Tab,
                CKeyCode::Delete => KeyCode::Delete,
                CKeyCode::Esc => KeyCode::Esc,
                _ => {
                    return None;
                }
            };
            Some(Event::Key(KeyEvent::new(kc, convert_modifiers(key.modifiers))))
        }
        CEvent::Mouse(mouse) => {
            let mk = match mouse.kind {
                crossterm::event::MouseEventKind::Down(b) => {
                    MouseEventKind::Down(convert_button(b))
                }
                crossterm::event::MouseEventKind::Up(b) => MouseEventKind::Up(convert_button(b)),
                crossterm::event::MouseEventKind::Drag(b) => {
                    MouseEventKind::Drag(convert_button(b))
                }
                crossterm::event::MouseEventKind::Moved => MouseEventKind::Moved,
                _ => MouseEventKind::Moved,
            };
            Some(Event::Mouse(MouseEvent {
                kind: mk,
                column: mouse.column,
                row: mouse.row,
                modifiers: convert_modifiers(mouse.modifiers),
            }))
        }
        CEvent::Resize(w, h) => Some(Event::Resize(*w, *h)),
        CEvent::FocusLost => Some(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Exited,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })),
        _ => None,
    }
}

fn convert_button(b: CMouseButton) -> MouseButton {
    match b {
        CMouseButton::Left => MouseButton::Left,
        CMouseButton::Right => MouseButton::Right,
        CMouseButton::Middle => MouseButton::Middle,
    }
}

fn convert_modifiers(m: crossterm::event::KeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::NONE;
    if m.contains(crossterm::event::KeyModifiers::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    if m.contains(crossterm::event::KeyModifiers::CONTROL) {
        out |= KeyModifiers::CONTROL;
    }
    if m.contains(crossterm::event::KeyModifiers::ALT) {
        out |= KeyModifiers::ALT;
    }
    out
}
