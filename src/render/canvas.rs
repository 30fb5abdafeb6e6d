// AsciiCanvas
// copyright zipxing@hotmail.com 2022～2025

//! AsciiCanvas integrates a scene and a render adapter and encapsulates
//! the frame loop: size a character grid to the viewport, sample the
//! scene once per cell per frame, run the optional post pass over the
//! whole buffer, then composite onto the adapter with as few redundant
//! color changes as possible.
//!
//! There is one pipeline only. A scene without a post pass inherits the
//! default empty hook, so both kinds of scene share the exact same
//! compositing and skip logic.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> Result<(), String> {
//!     init_log(log::LevelFilter::Info, "log/scene.log");
//!     let adapter = CrosstermAdapter::new();
//!     let mut canvas = AsciiCanvas::new(
//!         CanvasConfig::terminal(),
//!         MyScene::new(params),
//!         Box::new(adapter),
//!     )?;
//!     canvas.run()
//! }
//! ```

use crate::{
    config::CanvasConfig,
    context::{Coord, FrameContext},
    event::{Event, MouseEventKind, Pointer},
    render::adapter::Adapter,
    render::buffer::Buffer,
    render::cell::CellValue,
    FRAME_RATE, MIN_FRAME_MS,
};
use itertools::iproduct;
use log::info;
use std::time::{Duration, Instant};

/// length of the reference run used to measure the cell width
const CELL_MEASURE_RUN: usize = 16;

/// A scene drives one visualization. `cell` is called for every grid
/// cell of every frame and must be a pure function of its inputs plus
/// whatever configuration the scene was built with; `post` may rewrite
/// any cell after the whole grid is populated. `handle_event` and
/// `update` run between frames and are the only places a scene mutates
/// itself (orbit stepping, parameter changes).
pub trait Scene {
    fn handle_event(&mut self, _event: &Event) {}

    fn update(&mut self, _ctx: &FrameContext) {}

    fn cell(
        &self,
        coord: Coord,
        ctx: &FrameContext,
        pointer: &Pointer,
        buffer: &Buffer,
    ) -> CellValue;

    fn post(&self, _ctx: &FrameContext, _pointer: &Pointer, _buffer: &mut Buffer) {}
}

/// plain closures are scenes without events or post pass
impl<F> Scene for F
where
    F: Fn(Coord, &FrameContext, &Pointer, &Buffer) -> CellValue,
{
    fn cell(
        &self,
        coord: Coord,
        ctx: &FrameContext,
        pointer: &Pointer,
        buffer: &Buffer,
    ) -> CellValue {
        self(coord, ctx, pointer, buffer)
    }
}

pub struct AsciiCanvas<S: Scene> {
    config: CanvasConfig,
    scene: S,
    adapter: Box<dyn Adapter>,
    buffer: Buffer,
    pointer: Pointer,
    col_x: Vec<f32>,
    row_y: Vec<f32>,
    cell_w: f32,
    view_w: f32,
    view_h: f32,
    prev_dpr: f32,
    frame: u64,
    t0: Option<f64>,
    last_render: Option<f64>,
    disposed: bool,
}

impl<S: Scene> AsciiCanvas<S> {
    /// Acquire the adapter surface and size the grid to it. An adapter
    /// init failure is fatal: the canvas is never constructed and no
    /// frame can be scheduled against it.
    pub fn new(
        config: CanvasConfig,
        scene: S,
        mut adapter: Box<dyn Adapter>,
    ) -> Result<Self, String> {
        adapter.init()?;
        let mut canvas = Self {
            config,
            scene,
            adapter,
            buffer: Buffer::default(),
            pointer: Pointer::new(),
            col_x: vec![],
            row_y: vec![],
            cell_w: 0.0,
            view_w: 0.0,
            view_h: 0.0,
            prev_dpr: 0.0,
            frame: 0,
            t0: None,
            last_render: None,
            disposed: false,
        };
        let (w, h) = canvas.adapter.size();
        let dpr = canvas.adapter.pixel_ratio();
        canvas.resize(w, h, dpr);
        Ok(canvas)
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn adapter_mut(&mut self) -> &mut dyn Adapter {
        &mut *self.adapter
    }

    /// (cols, rows) of the current grid
    pub fn grid(&self) -> (u16, u16) {
        (self.buffer.cols(), self.buffer.rows())
    }

    /// measured cell size in surface pixels
    pub fn cell_size(&self) -> (f32, f32) {
        (self.cell_w, self.config.cell_height)
    }

    /// per-column / per-row pixel offset caches
    pub fn offsets(&self) -> (&[f32], &[f32]) {
        (&self.col_x, &self.row_y)
    }

    /// Apply a viewport change. A notification carrying the same width,
    /// height and pixel ratio as the current state is a no-op: no
    /// re-measure, no reallocation. A real change re-measures the cell
    /// width and rebuilds the buffer and the pixel offset caches; a
    /// degenerate viewport empties the grid so the frame body skips
    /// until dimensions become valid again.
    pub fn resize(&mut self, w: f32, h: f32, dpr: f32) {
        if w == self.view_w && h == self.view_h && dpr == self.prev_dpr {
            return;
        }
        self.view_w = w;
        self.view_h = h;
        self.prev_dpr = dpr;

        let run = "M".repeat(CELL_MEASURE_RUN);
        self.cell_w = self.adapter.measure_text(&run) / CELL_MEASURE_RUN as f32;

        if w <= 0.0 || h <= 0.0 || self.cell_w <= 0.0 || self.config.cell_height <= 0.0 {
            self.buffer.resize(0, 0);
            self.col_x.clear();
            self.row_y.clear();
            info!("canvas viewport degenerate ({} x {})", w, h);
            return;
        }

        let cols = ((w / self.cell_w).ceil() as u16).max(1);
        let rows = ((h / self.config.cell_height).ceil() as u16).max(1);
        self.buffer.resize(cols, rows);
        self.col_x.clear();
        self.col_x.extend((0..cols).map(|x| x as f32 * self.cell_w));
        self.row_y.clear();
        self.row_y
            .extend((0..rows).map(|y| y as f32 * self.config.cell_height));
        info!(
            "canvas sized {} x {} cells over {} x {} px (cell {} x {})",
            cols, rows, w, h, self.cell_w, self.config.cell_height
        );
    }

    /// Fold adapter events into pointer state and scene, resize on
    /// notification. Runs between frames, so a frame body always sees a
    /// consistent snapshot.
    pub fn handle_events(&mut self, events: &[Event]) {
        for e in events {
            self.scene.handle_event(e);
            match e {
                Event::Mouse(m) => match m.kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        self.set_pointer_pos(m.column, m.row);
                    }
                    MouseEventKind::Down(_) => {
                        self.set_pointer_pos(m.column, m.row);
                        self.pointer.pressed = true;
                    }
                    MouseEventKind::Up(_) => {
                        self.set_pointer_pos(m.column, m.row);
                        self.pointer.pressed = false;
                    }
                    MouseEventKind::Exited => self.pointer.clear(),
                },
                Event::Resize(_, _) => {
                    let (w, h) = self.adapter.size();
                    let dpr = self.adapter.pixel_ratio();
                    self.resize(w, h, dpr);
                }
                Event::Key(_) => {}
            }
        }
    }

    fn set_pointer_pos(&mut self, column: u16, row: u16) {
        if self.cell_w > 0.0 && self.config.cell_height > 0.0 {
            self.pointer.x = column as f32 / self.cell_w;
            self.pointer.y = row as f32 / self.config.cell_height;
        } else {
            self.pointer.clear();
        }
    }

    /// One animation callback. `now_ms` comes from the host's monotonic
    /// clock. The body is skipped (while scheduling continues) when the
    /// frame-rate throttle has not elapsed or the grid is degenerate;
    /// the first rendered frame anchors t0 so its context reads
    /// frame 0, time 0.
    pub fn render_frame(&mut self, now_ms: f64) -> Result<(), String> {
        if self.disposed {
            return Ok(());
        }
        if let Some(last) = self.last_render {
            if now_ms - last < MIN_FRAME_MS {
                return Ok(());
            }
        }
        if self.buffer.cols() == 0 || self.buffer.rows() == 0 {
            return Ok(());
        }

        let t0 = *self.t0.get_or_insert(now_ms);
        let ctx = FrameContext {
            cols: self.buffer.cols(),
            rows: self.buffer.rows(),
            width: self.view_w,
            height: self.view_h,
            frame: self.frame,
            time: (now_ms - t0) * self.config.speed as f64,
        };
        self.frame += 1;
        self.last_render = Some(now_ms);

        self.scene.update(&ctx);

        let default_fg = self.config.fg;
        let default_bg = self.config.bg;
        for (y, x) in iproduct!(0..ctx.rows, 0..ctx.cols) {
            let value = self
                .scene
                .cell(Coord::new(x, y), &ctx, &self.pointer, &self.buffer);
            self.buffer.put(x, y, value, default_fg, default_bg);
        }

        self.scene.post(&ctx, &self.pointer, &mut self.buffer);

        self.composite()
    }

    /// Draw the buffer: one background clear, then per cell a rect only
    /// for non-default backgrounds and a glyph only for non-spaces. The
    /// fill latch reissues a color to the adapter only when it differs
    /// from the previous one in row-major draw order.
    fn composite(&mut self) -> Result<(), String> {
        let bg = self.config.bg;
        let (cell_w, cell_h) = (self.cell_w, self.config.cell_height);

        self.adapter.set_fill(bg);
        self.adapter.fill_rect(0.0, 0.0, self.view_w, self.view_h)?;
        let mut last_fill = bg;

        for (y, x) in iproduct!(0..self.buffer.rows(), 0..self.buffer.cols()) {
            let cell = self.buffer.get(x, y);
            let px = self.col_x[x as usize];
            let py = self.row_y[y as usize];
            if cell.bg != bg {
                if cell.bg != last_fill {
                    last_fill = cell.bg;
                    self.adapter.set_fill(last_fill);
                }
                self.adapter.fill_rect(px, py, cell_w, cell_h)?;
            }
            if !cell.is_blank() {
                if cell.fg != last_fill {
                    last_fill = cell.fg;
                    self.adapter.set_fill(last_fill);
                }
                self.adapter.draw_glyph(&cell.symbol, px, py)?;
            }
        }
        self.adapter.present()
    }

    /// Blocking main loop: poll input with the remaining tick budget,
    /// pump events, render on the tick. Returns after a quit request
    /// ('q' or Esc on the terminal adapter) and releases the adapter.
    pub fn run(&mut self) -> Result<(), String> {
        info!("canvas run...");
        let tick = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);
        let clock = Instant::now();
        let mut last_tick = Instant::now();
        let mut events: Vec<Event> = vec![];

        loop {
            let timeout = tick
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_nanos(100));
            let quit = self.adapter.poll_event(timeout, &mut events);
            if !events.is_empty() {
                let drained = std::mem::take(&mut events);
                self.handle_events(&drained);
                events = drained;
                events.clear();
            }
            if quit {
                break;
            }
            if last_tick.elapsed() >= tick {
                let now = clock.elapsed().as_secs_f64() * 1000.0;
                self.render_frame(now)?;
                last_tick = Instant::now();
            }
        }
        self.dispose();
        Ok(())
    }

    /// Release the adapter and its event subscriptions together. No
    /// frame is produced afterwards; calling again is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.adapter.reset();
        info!("canvas disposed");
    }
}

impl<S: Scene> Drop for AsciiCanvas<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}
