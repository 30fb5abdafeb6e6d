// AsciiCanvas
// copyright zipxing@hotmail.com 2022～2025

//! A ring of hexagons around an onioned rounded box, rotated by drag
//! gestures through the orbit controls. Left drag orbits (with inertia
//! after release), shift- or right-drag pans, q or Esc quits. The post
//! pass draws a HUD line over the finished frame.

use anyhow::{anyhow, Result};
use ascii_canvas::{
    config::CanvasConfig,
    context::{Coord, FrameContext},
    event::{Event, OrbitConfig, OrbitControls, Pointer},
    log::init_log,
    math::{
        sdf::{op_onion, op_repeat, op_smooth_union, sd_hexagon, sd_rounded_box},
        vec2, Vec2,
    },
    render::adapter::cross::CrosstermAdapter,
    render::{AsciiCanvas, Buffer, CellValue, Color, Scene, Style},
    util::Ramp,
};
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(about = "orbit-controlled sdf scene")]
struct Args {
    /// inertia damping factor per frame
    #[arg(long, default_value_t = 0.85)]
    damping: f32,
    /// time-scale multiplier
    #[arg(long, default_value_t = 1.0)]
    speed: f32,
}

struct OrbitScene {
    controls: OrbitControls,
    ramp: Ramp,
}

impl OrbitScene {
    fn new(damping: f32) -> Self {
        Self {
            controls: OrbitControls::new(OrbitConfig {
                damping,
                ..Default::default()
            }),
            ramp: Ramp::ascii(),
        }
    }

    fn field(&self, p: Vec2, t: f32) -> f32 {
        // tilt squashes the view toward the poles
        let tilt = self.controls.orbit.x.cos().clamp(0.25, 1.0);
        let q = vec2(p.x, p.y / tilt).rotate(self.controls.orbit.y + t * 0.05);
        let body = op_onion(sd_rounded_box(q, vec2(0.45, 0.45), 0.08), 0.05);
        let cells = sd_hexagon(op_repeat(q, vec2(0.9, 0.9)), 0.12);
        op_smooth_union(body, cells, 0.15)
    }
}

impl Scene for OrbitScene {
    fn handle_event(&mut self, event: &Event) {
        self.controls.handle_event(event);
    }

    fn update(&mut self, ctx: &FrameContext) {
        self.controls.set_viewport(ctx.cols as f32, ctx.rows as f32);
        self.controls.step();
    }

    fn cell(&self, coord: Coord, ctx: &FrameContext, _pointer: &Pointer, _buffer: &Buffer) -> CellValue {
        let scale = 2.0 / ctx.rows as f32;
        let p = vec2(
            (coord.x as f32 - ctx.cols as f32 * 0.5) * 0.5 * scale,
            (coord.y as f32 - ctx.rows as f32 * 0.5) * scale,
        ) - self.controls.pan;

        let d = self.field(p, ctx.time as f32 * 0.001);
        let v = (-d * 4.0).clamp(0.0, 1.0);
        if v <= 0.0 {
            return CellValue::from(' ');
        }
        let fg = if d < -0.08 {
            Color::LightYellow
        } else {
            Color::Yellow
        };
        CellValue::new(self.ramp.at(v)).fg(fg)
    }

    fn post(&self, _ctx: &FrameContext, _pointer: &Pointer, buffer: &mut Buffer) {
        let hud = format!(
            " orbit {:+.2} {:+.2}  pan {:+.2} {:+.2}  drag=rotate shift-drag=pan q=quit ",
            self.controls.orbit.x, self.controls.orbit.y, self.controls.pan.x, self.controls.pan.y
        );
        buffer.set_str(0, 0, &hud, Style::default().fg(Color::Black).bg(Color::Gray));
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_log(log::LevelFilter::Info, "log/orbit.log");
    info!("orbit start... damping {}", args.damping);

    let config = CanvasConfig::terminal().speed(args.speed);
    let mut canvas = AsciiCanvas::new(
        config,
        OrbitScene::new(args.damping),
        Box::new(CrosstermAdapter::new()),
    )
    .map_err(|e| anyhow!(e))?;
    canvas.run().map_err(|e| anyhow!(e))
}
