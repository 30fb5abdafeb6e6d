// AsciiCanvas
// copyright zipxing@hotmail.com 2022～2025

//! End-to-end canvas loop tests against the headless adapter.

use ascii_canvas::config::CanvasConfig;
use ascii_canvas::context::{Coord, FrameContext};
use ascii_canvas::event::{
    Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind, Pointer,
};
use ascii_canvas::render::adapter::headless::HeadlessAdapter;
use ascii_canvas::render::{AsciiCanvas, Buffer, CellValue, Color, Scene};
use ascii_canvas::MIN_FRAME_MS;

/// base fixture: 100x100 px viewport, 8 px cells, 12 px rows
fn base_config() -> CanvasConfig {
    CanvasConfig::default()
        .bg(Color::from_hex("#000000").unwrap())
        .fg(Color::from_hex("#ffffff").unwrap())
        .cell_height(12.0)
}

fn base_adapter() -> Box<HeadlessAdapter> {
    Box::new(HeadlessAdapter::new(100.0, 100.0).char_width(8.0))
}

fn hash_scene(ch: char) -> impl Scene {
    move |_c: Coord, _ctx: &FrameContext, _p: &Pointer, _b: &Buffer| CellValue::from(ch)
}

/// records every frame context it sees
#[derive(Default)]
struct Recorder {
    seen: Vec<(u64, f64)>,
}

impl Scene for Recorder {
    fn update(&mut self, ctx: &FrameContext) {
        self.seen.push((ctx.frame, ctx.time));
    }

    fn cell(&self, _c: Coord, _ctx: &FrameContext, _p: &Pointer, _b: &Buffer) -> CellValue {
        CellValue::from('.')
    }
}

fn headless(canvas: &mut AsciiCanvas<impl Scene>) -> &mut HeadlessAdapter {
    canvas
        .adapter_mut()
        .as_any()
        .downcast_mut::<HeadlessAdapter>()
        .unwrap()
}

#[test]
fn grid_sizing_matches_ceil() {
    let canvas =
        AsciiCanvas::new(base_config(), hash_scene('#'), base_adapter()).unwrap();
    assert_eq!(canvas.grid(), (13, 9));
    assert_eq!(canvas.buffer().len(), 117);
    assert_eq!(canvas.cell_size(), (8.0, 12.0));
    let (col_x, row_y) = canvas.offsets();
    assert_eq!(col_x.len(), 13);
    assert_eq!(row_y.len(), 9);
    assert_eq!(col_x[1], 8.0);
    assert_eq!(row_y[1], 12.0);
}

#[test]
fn spurious_resize_is_identity_stable() {
    let mut canvas =
        AsciiCanvas::new(base_config(), hash_scene('#'), base_adapter()).unwrap();
    let buf_ptr = canvas.buffer().content().as_ptr();
    let (col_ptr, row_ptr) = {
        let (c, r) = canvas.offsets();
        (c.as_ptr(), r.as_ptr())
    };

    canvas.resize(100.0, 100.0, 1.0);
    assert_eq!(canvas.buffer().content().as_ptr(), buf_ptr);
    let (c, r) = canvas.offsets();
    assert_eq!(c.as_ptr(), col_ptr);
    assert_eq!(r.as_ptr(), row_ptr);

    // a real change does rebuild
    canvas.resize(160.0, 100.0, 1.0);
    assert_eq!(canvas.grid(), (20, 9));
}

#[test]
fn frame_index_and_time_are_monotonic() {
    let mut canvas =
        AsciiCanvas::new(base_config(), Recorder::default(), base_adapter()).unwrap();
    for i in 0..5 {
        canvas.render_frame(i as f64 * 100.0).unwrap();
    }
    let seen = &canvas.scene().seen;
    assert_eq!(seen.len(), 5);
    for (i, &(frame, time)) in seen.iter().enumerate() {
        assert_eq!(frame, i as u64);
        assert_eq!(time, i as f64 * 100.0);
    }
    assert_eq!(seen[0], (0, 0.0));
}

#[test]
fn bare_char_normalizes_against_canvas_defaults() {
    let mut canvas =
        AsciiCanvas::new(base_config(), hash_scene('#'), base_adapter()).unwrap();
    canvas.render_frame(0.0).unwrap();
    for cell in canvas.buffer().content() {
        assert_eq!(cell.symbol, "#");
        assert_eq!(cell.fg, Color::Rgb(255, 255, 255));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 0));
    }
}

struct Overwriting;

impl Scene for Overwriting {
    fn cell(&self, _c: Coord, _ctx: &FrameContext, _p: &Pointer, _b: &Buffer) -> CellValue {
        CellValue::from('A')
    }

    fn post(&self, _ctx: &FrameContext, _p: &Pointer, buffer: &mut Buffer) {
        buffer.get_mut(0, 0).set_char('B');
    }
}

#[test]
fn post_pass_sees_and_overwrites_the_whole_grid() {
    let mut canvas =
        AsciiCanvas::new(base_config(), Overwriting, base_adapter()).unwrap();
    canvas.render_frame(0.0).unwrap();
    assert_eq!(canvas.buffer().get(0, 0).symbol, "B");
    for i in 1..canvas.buffer().len() {
        assert_eq!(canvas.buffer().content()[i].symbol, "A");
    }
}

#[test]
fn end_to_end_uniform_frame_issues_two_fill_sets() {
    let mut canvas =
        AsciiCanvas::new(base_config(), hash_scene('#'), base_adapter()).unwrap();
    canvas.render_frame(0.0).unwrap();

    let adapter = headless(&mut canvas);
    // one color-set for the background clear, one for all the glyphs
    assert_eq!(
        adapter.fill_changes(),
        vec![Color::Rgb(0, 0, 0), Color::Rgb(255, 255, 255)]
    );
    // the clear is the only rect: every cell background equals the default
    assert_eq!(adapter.rect_count(), 1);
    assert_eq!(adapter.glyph_count(), 117);
}

#[test]
fn space_cells_draw_nothing() {
    let mut canvas =
        AsciiCanvas::new(base_config(), hash_scene(' '), base_adapter()).unwrap();
    canvas.render_frame(0.0).unwrap();
    let adapter = headless(&mut canvas);
    assert_eq!(adapter.glyph_count(), 0);
    assert_eq!(adapter.rect_count(), 1);
    // only the background clear touched the fill state
    assert_eq!(adapter.fill_changes(), vec![Color::Rgb(0, 0, 0)]);
}

#[test]
fn custom_backgrounds_fill_per_cell() {
    let scene = |_c: Coord, _ctx: &FrameContext, _p: &Pointer, _b: &Buffer| {
        CellValue::new(' ').bg(Color::Blue)
    };
    let mut canvas = AsciiCanvas::new(base_config(), scene, base_adapter()).unwrap();
    canvas.render_frame(0.0).unwrap();
    let adapter = headless(&mut canvas);
    // clear + one rect per cell, but only two fill color changes
    assert_eq!(adapter.rect_count(), 1 + 117);
    assert_eq!(
        adapter.fill_changes(),
        vec![Color::Rgb(0, 0, 0), Color::Blue]
    );
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn pointer_tracks_in_cell_units_and_leave_restores_sentinel() {
    let mut canvas =
        AsciiCanvas::new(base_config(), hash_scene('#'), base_adapter()).unwrap();
    assert!(canvas.pointer().is_absent());

    canvas.handle_events(&[mouse(MouseEventKind::Moved, 16, 24)]);
    assert_eq!(canvas.pointer().x, 2.0);
    assert_eq!(canvas.pointer().y, 2.0);

    canvas.handle_events(&[mouse(MouseEventKind::Down(MouseButton::Left), 16, 24)]);
    assert!(canvas.pointer().pressed);
    canvas.handle_events(&[mouse(MouseEventKind::Up(MouseButton::Left), 16, 24)]);
    assert!(!canvas.pointer().pressed);

    canvas.handle_events(&[mouse(MouseEventKind::Exited, 0, 0)]);
    assert_eq!(canvas.pointer().x, -1.0);
    assert_eq!(canvas.pointer().y, -1.0);

    canvas.handle_events(&[mouse(MouseEventKind::Moved, 8, 12)]);
    assert_eq!((canvas.pointer().x, canvas.pointer().y), (1.0, 1.0));
}

#[test]
fn throttle_skips_frames_under_the_cadence() {
    let mut canvas =
        AsciiCanvas::new(base_config(), Recorder::default(), base_adapter()).unwrap();
    canvas.render_frame(0.0).unwrap();
    canvas.render_frame(10.0).unwrap(); // under 1000/30 ms, skipped
    canvas.render_frame(MIN_FRAME_MS + 1.0).unwrap();
    assert_eq!(canvas.scene().seen.len(), 2);
    assert_eq!(canvas.scene().seen[1].0, 1);
}

#[test]
fn degenerate_viewport_skips_and_self_heals() {
    let adapter = Box::new(HeadlessAdapter::new(0.0, 0.0).char_width(8.0));
    let mut canvas =
        AsciiCanvas::new(base_config(), Recorder::default(), adapter).unwrap();
    assert_eq!(canvas.grid(), (0, 0));
    canvas.render_frame(0.0).unwrap();
    canvas.render_frame(100.0).unwrap();
    assert!(canvas.scene().seen.is_empty());

    headless(&mut canvas).set_size(100.0, 100.0);
    canvas.handle_events(&[Event::Resize(100, 100)]);
    assert_eq!(canvas.grid(), (13, 9));

    // t0 anchors at the first *rendered* frame
    canvas.render_frame(500.0).unwrap();
    assert_eq!(canvas.scene().seen, vec![(0, 0.0)]);
}

#[test]
fn speed_scales_freezes_and_reverses_time() {
    let mut canvas = AsciiCanvas::new(
        base_config().speed(0.0),
        Recorder::default(),
        base_adapter(),
    )
    .unwrap();
    canvas.render_frame(0.0).unwrap();
    canvas.render_frame(100.0).unwrap();
    assert_eq!(canvas.scene().seen, vec![(0, 0.0), (1, 0.0)]);

    let mut canvas = AsciiCanvas::new(
        base_config().speed(-1.0),
        Recorder::default(),
        base_adapter(),
    )
    .unwrap();
    canvas.render_frame(0.0).unwrap();
    canvas.render_frame(100.0).unwrap();
    assert_eq!(canvas.scene().seen, vec![(0, 0.0), (1, -100.0)]);
}

#[test]
fn scenes_read_neighbors_computed_earlier_in_the_frame() {
    // every cell after (0,0) copies the first cell's character
    let scene = |c: Coord, _ctx: &FrameContext, _p: &Pointer, b: &Buffer| {
        if c.x == 0 && c.y == 0 {
            CellValue::from('S')
        } else {
            let first = b.get(0, 0).symbol.chars().next().unwrap_or('?');
            CellValue::from(first)
        }
    };
    let mut canvas = AsciiCanvas::new(base_config(), scene, base_adapter()).unwrap();
    canvas.render_frame(0.0).unwrap();
    assert_eq!(canvas.buffer().get(12, 8).symbol, "S");
}

#[test]
fn dispose_stops_rendering() {
    let mut canvas =
        AsciiCanvas::new(base_config(), Recorder::default(), base_adapter()).unwrap();
    canvas.render_frame(0.0).unwrap();
    canvas.dispose();
    canvas.render_frame(1000.0).unwrap();
    assert_eq!(canvas.scene().seen.len(), 1);
}

#[test]
fn run_drains_scripted_events_and_quits() {
    let mut adapter = Box::new(HeadlessAdapter::new(100.0, 100.0).char_width(8.0));
    adapter.push_event(mouse(MouseEventKind::Moved, 16, 24));
    adapter.request_quit();
    let mut canvas =
        AsciiCanvas::new(base_config(), hash_scene('#'), adapter).unwrap();
    canvas.run().unwrap();
    // the event was pumped before the quit took effect
    assert_eq!(canvas.pointer().x, 2.0);
}
