// AsciiCanvas
// copyright zipxing@hotmail.com 2022～2025

//! Metaballs: a handful of circles on drifting easing paths, blended
//! with a smooth union and shaded through a block ramp, with an fbm
//! wobble on the field. An active pointer contributes its own blob.
//! Drag does nothing here; press q or Esc to quit.

use anyhow::{anyhow, Result};
use ascii_canvas::{
    config::CanvasConfig,
    context::{Coord, FrameContext},
    event::Pointer,
    log::init_log,
    math::{ease_sin, noise::fbm, sdf::{op_smooth_union, sd_circle}, vec2, Vec2},
    render::adapter::cross::CrosstermAdapter,
    render::{AsciiCanvas, Buffer, CellValue, Color, Scene},
    util::{Ramp, Rand},
};
use clap::Parser;
use log::info;
use serde::Deserialize;

#[derive(Parser)]
#[command(about = "sdf metaballs on the terminal")]
struct Args {
    /// scene parameter file (json), flags below override it
    #[arg(long)]
    config: Option<String>,
    /// number of blobs
    #[arg(long)]
    count: Option<usize>,
    /// seed for the blob phases
    #[arg(long)]
    seed: Option<u64>,
    /// time-scale multiplier
    #[arg(long, default_value_t = 1.0)]
    speed: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct MetaballParams {
    count: usize,
    radius: f32,
    blend: f32,
    wobble: f32,
    seed: u64,
}

impl Default for MetaballParams {
    fn default() -> Self {
        Self {
            count: 5,
            radius: 0.28,
            blend: 0.35,
            wobble: 0.18,
            seed: 7,
        }
    }
}

struct Metaballs {
    params: MetaballParams,
    /// per-blob motion phases derived from the seed
    phases: Vec<Vec2>,
    ramp: Ramp,
}

impl Metaballs {
    fn new(params: MetaballParams) -> Self {
        let mut rd = Rand::new();
        rd.srand(params.seed);
        let phases = (0..params.count)
            .map(|_| vec2(rd.gen_range(0.0, 10.0) as f32, rd.gen_range(0.0, 10.0) as f32))
            .collect();
        Self {
            params,
            phases,
            ramp: Ramp::blocks(),
        }
    }

    /// signed distance of the blended field at p (scene space, y in ~[-1, 1])
    fn field(&self, p: Vec2, t: f32, pointer: Option<Vec2>) -> f32 {
        let mut d = f32::MAX;
        for phase in &self.phases {
            let center = vec2(
                ease_sin(t * 0.11 + phase.x) * 0.9,
                ease_sin(t * 0.17 + phase.y) * 0.7,
            );
            d = op_smooth_union(d, sd_circle(p - center, self.params.radius), self.params.blend);
        }
        if let Some(c) = pointer {
            d = op_smooth_union(d, sd_circle(p - c, self.params.radius * 0.8), self.params.blend);
        }
        d
    }
}

impl Scene for Metaballs {
    fn cell(&self, coord: Coord, ctx: &FrameContext, pointer: &Pointer, _buffer: &Buffer) -> CellValue {
        // center the grid, halve x so terminal cells read roughly square
        let scale = 2.0 / ctx.rows as f32;
        let to_scene = |x: f32, y: f32| {
            vec2(
                (x - ctx.cols as f32 * 0.5) * 0.5 * scale,
                (y - ctx.rows as f32 * 0.5) * scale,
            )
        };
        let p = to_scene(coord.x as f32, coord.y as f32);
        let pc = if pointer.is_absent() {
            None
        } else {
            Some(to_scene(pointer.x, pointer.y))
        };

        let t = ctx.time as f32 * 0.001;
        let d = self.field(p, t, pc);
        let wobble = self.params.wobble * fbm(p * 3.0 + vec2(t * 0.25, 0.0), 4);
        // inside is bright, the band outside fades out
        let v = (-d * 3.0 + wobble).clamp(0.0, 1.0);
        if v <= 0.0 {
            return CellValue::from(' ');
        }
        let fg = if d < -0.05 {
            Color::LightCyan
        } else if d < 0.0 {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        CellValue::new(self.ramp.at(v)).fg(fg)
    }
}

fn load_params(args: &Args) -> Result<MetaballParams> {
    let mut params = match &args.config {
        Some(path) => {
            let data = std::fs::read_to_string(path)?;
            serde_json::from_str(&data)?
        }
        None => MetaballParams::default(),
    };
    if let Some(count) = args.count {
        params.count = count;
    }
    if let Some(seed) = args.seed {
        params.seed = seed;
    }
    Ok(params)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_log(log::LevelFilter::Info, "log/metaballs.log");
    let params = load_params(&args)?;
    info!("metaballs start... {:?}", params);

    let config = CanvasConfig::terminal().speed(args.speed);
    let mut canvas = AsciiCanvas::new(
        config,
        Metaballs::new(params),
        Box::new(CrosstermAdapter::new()),
    )
    .map_err(|e| anyhow!(e))?;
    canvas.run().map_err(|e| anyhow!(e))
}
