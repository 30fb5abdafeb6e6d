// AsciiCanvas
// copyright zipxing@hotmail.com 2022～2025

//! Orbit/pan controls for 3d-feeling scenes: pointer drags turn into a
//! two-axis rotation (or a pan when shift or the right button is held),
//! and releasing leaves a residual velocity that decays geometrically
//! until it snaps to zero. The first orbit axis is clamped so the view
//! cannot flip past the poles; the second axis is free.
//!
//! Positions are in whatever unit the caller feeds (cells for terminal
//! adapters); deltas are normalized by the viewport size, so only the
//! ratio matters.

use crate::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use crate::math::{vec2, Vec2};
use std::f32::consts::TAU;

/// per-step damping factor applied to the residual drag velocity
pub const DEFAULT_DAMPING: f32 = 0.85;
/// drag distance to angle scale
pub const DEFAULT_SENSITIVITY: f32 = 2.0;
/// pole clamp for the first orbit axis, radians
pub const ORBIT_X_LIMIT: f32 = 1.5;
/// velocity magnitude below which motion stops exactly
pub const VELOCITY_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy)]
pub struct OrbitConfig {
    pub damping: f32,
    pub sensitivity: f32,
    pub initial_orbit: Vec2,
    pub initial_pan: Vec2,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            sensitivity: DEFAULT_SENSITIVITY,
            initial_orbit: vec2(0.5, 0.0),
            initial_pan: Vec2::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    is_pan: bool,
    start: Vec2,
    last: Vec2,
    start_orbit: Vec2,
    start_pan: Vec2,
}

#[derive(Debug)]
pub struct OrbitControls {
    pub orbit: Vec2,
    pub pan: Vec2,
    vel: Vec2,
    drag: Option<Drag>,
    damping: f32,
    sensitivity: f32,
    view: Vec2,
}

impl OrbitControls {
    pub fn new(config: OrbitConfig) -> Self {
        Self {
            orbit: config.initial_orbit,
            pan: config.initial_pan,
            vel: Vec2::ZERO,
            drag: None,
            damping: config.damping,
            sensitivity: config.sensitivity,
            view: vec2(1.0, 1.0),
        }
    }

    /// viewport used to normalize drag deltas, same units as positions
    pub fn set_viewport(&mut self, w: f32, h: f32) {
        if w > 0.0 && h > 0.0 {
            self.view = vec2(w, h);
        }
    }

    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, pan: bool) {
        self.drag = Some(Drag {
            is_pan: pan,
            start: vec2(x, y),
            last: vec2(x, y),
            start_orbit: self.orbit,
            start_pan: self.pan,
        });
        self.vel = Vec2::ZERO;
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let Some(mut d) = self.drag else {
            return;
        };
        let s = self.sensitivity;
        let dx = (x - d.start.x) / self.view.x * s;
        let dy = (y - d.start.y) / self.view.y * s;
        let vx = (x - d.last.x) / self.view.x * s;
        let vy = (y - d.last.y) / self.view.y * s;
        d.last = vec2(x, y);
        self.drag = Some(d);

        if d.is_pan {
            self.pan = d.start_pan + vec2(dx, dy) * 0.5;
            self.vel = vec2(vx, vy) * 0.5;
        } else {
            self.orbit = vec2(
                (d.start_orbit.x + dy * 2.0).clamp(-ORBIT_X_LIMIT, ORBIT_X_LIMIT),
                d.start_orbit.y + dx * TAU,
            );
            self.vel = vec2(vy * 2.0, vx * TAU);
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// One inertia step, called once per animation frame. While a drag
    /// is active the velocity is applied by the move handler instead.
    /// The residual velocity decays by the damping factor and snaps to
    /// exactly zero once both components drop under the epsilon.
    pub fn step(&mut self) {
        if self.drag.is_some() {
            return;
        }
        if self.vel.x.abs() < VELOCITY_EPSILON && self.vel.y.abs() < VELOCITY_EPSILON {
            self.vel = Vec2::ZERO;
            return;
        }
        self.orbit = vec2(
            (self.orbit.x + self.vel.x).clamp(-ORBIT_X_LIMIT, ORBIT_X_LIMIT),
            self.orbit.y + self.vel.y,
        );
        self.vel = self.vel * self.damping;
    }

    /// Map unified events onto the granular handlers: left drag orbits,
    /// shift or right button pans, resize updates the viewport.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Mouse(MouseEvent {
                kind,
                column,
                row,
                modifiers,
            }) => {
                let (x, y) = (*column as f32, *row as f32);
                match kind {
                    MouseEventKind::Down(button) => {
                        let pan = *button == MouseButton::Right
                            || modifiers.contains(KeyModifiers::SHIFT);
                        self.pointer_down(x, y, pan);
                    }
                    MouseEventKind::Drag(_) => self.pointer_move(x, y),
                    MouseEventKind::Up(_) | MouseEventKind::Exited => self.pointer_up(),
                    MouseEventKind::Moved => {}
                }
            }
            Event::Resize(w, h) => self.set_viewport(*w as f32, *h as f32),
            Event::Key(_) => {}
        }
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        OrbitControls::new(OrbitConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controls() -> OrbitControls {
        let mut c = OrbitControls::new(OrbitConfig {
            initial_orbit: Vec2::ZERO,
            ..Default::default()
        });
        c.set_viewport(100.0, 100.0);
        c
    }

    #[test]
    fn drag_rotates_and_release_decays_to_zero() {
        let mut c = controls();
        c.pointer_down(50.0, 50.0, false);
        c.pointer_move(60.0, 50.0);
        assert!(c.orbit.y > 0.0);
        assert!(c.velocity().y > 0.0);
        c.pointer_up();

        let mut prev = c.velocity().y.abs();
        let mut steps = 0;
        while c.velocity() != Vec2::ZERO {
            c.step();
            let mag = c.velocity().y.abs();
            assert!(mag < prev || mag == 0.0, "velocity must strictly decay");
            prev = if mag > 0.0 { mag } else { prev };
            steps += 1;
            assert!(steps < 200, "inertia never terminated");
        }
        // once stopped, further steps keep it exactly at rest
        let orbit = c.orbit;
        c.step();
        assert_eq!(c.orbit, orbit);
    }

    #[test]
    fn orbit_x_is_clamped() {
        let mut c = controls();
        c.pointer_down(50.0, 0.0, false);
        c.pointer_move(50.0, 10_000.0);
        assert_eq!(c.orbit.x, ORBIT_X_LIMIT);
        c.pointer_move(50.0, -20_000.0);
        assert_eq!(c.orbit.x, -ORBIT_X_LIMIT);
    }

    #[test]
    fn shift_or_right_button_pans() {
        let mut c = controls();
        c.handle_event(&Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 50,
            row: 50,
            modifiers: KeyModifiers::NONE,
        }));
        c.handle_event(&Event::Mouse(MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Right),
            column: 70,
            row: 50,
            modifiers: KeyModifiers::NONE,
        }));
        assert!(c.pan.x > 0.0);
        assert_eq!(c.orbit, Vec2::ZERO);
    }

    #[test]
    fn pressing_kills_residual_velocity() {
        let mut c = controls();
        c.pointer_down(50.0, 50.0, false);
        c.pointer_move(80.0, 50.0);
        c.pointer_up();
        assert!(c.velocity() != Vec2::ZERO);
        c.pointer_down(10.0, 10.0, false);
        assert_eq!(c.velocity(), Vec2::ZERO);
    }
}
