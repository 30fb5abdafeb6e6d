// AsciiCanvas
// copyright zipxing@hotmail.com 2022～2025

//! AsciiCanvas is a rust engine for animated ascii art.
//! A caller-supplied scene function is sampled once per character cell,
//! once per frame, and the resulting cell grid is composited onto a
//! drawing surface (a terminal via crossterm, or an in-memory headless
//! surface for tests and snapshot rendering).
//!
//! Scenes are usually built from the signed-distance-field catalogue in
//! [`math::sdf`] and the hash/fBm noise in [`math::noise`], shaded through
//! a character ramp.
//!
//! Modules:
//! - math: Vec2 algebra, easing, sdf shapes and noise
//! - context: per-frame snapshot handed to scene functions
//! - render: cell, buffer, canvas loop and render adapters
//! - event: unified input events, pointer state, orbit controls
//! - config, log, util: canvas configuration, file logging, rng and ramps

/// target framerate of the canvas loop, frames above this cadence are skipped
pub const FRAME_RATE: u32 = 30;

/// minimum interval between two rendered frame bodies, in milliseconds
pub const MIN_FRAME_MS: f64 = 1000.0 / FRAME_RATE as f64;

/// canvas configuration (colors, cell height, speed)
pub mod config;

/// per-frame context and cell coordinates
pub mod context;

/// unified input events, pointer state and the orbit/pan drag adapter
pub mod event;

/// log
pub mod log;

/// 2d vector algebra, easing, sdf shapes, procedural noise
pub mod math;

/// Render module.
/// cell: a base drawing unit i.e. a character with colors.
/// buffer: a vector comprised of cells, managing the frame grid.
/// canvas: the render loop, sampling a scene function per cell per frame.
/// adapter: drawing surface interface (crossterm terminal, headless).
pub mod render;

/// common tools: rng, character ramps
pub mod util;
