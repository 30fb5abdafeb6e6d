// AsciiCanvas
// copyright zipxing@hotmail.com 2022～2025

//! 2d float vector and the scalar helpers shared by the sdf and noise
//! modules. Everything here is a pure function of its arguments, cheap
//! enough to call for every cell of every frame.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// signed-distance functions and boolean/blend combinators
pub mod sdf;

/// deterministic hash and fractal noise
pub mod noise;

pub const PHI: f32 = 1.618034;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2 { x, y }
}

impl Vec2 {
    pub const ZERO: Vec2 = vec2(0.0, 0.0);

    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// zero vector normalizes to zero instead of NaN
    pub fn normalize(self) -> Vec2 {
        let l = self.length();
        if l > 0.0 {
            vec2(self.x / l, self.y / l)
        } else {
            Vec2::ZERO
        }
    }

    pub fn abs(self) -> Vec2 {
        vec2(self.x.abs(), self.y.abs())
    }

    pub fn min(self, other: Vec2) -> Vec2 {
        vec2(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn max(self, other: Vec2) -> Vec2 {
        vec2(self.x.max(other.x), self.y.max(other.y))
    }

    pub fn max_n(self, n: f32) -> Vec2 {
        vec2(self.x.max(n), self.y.max(n))
    }

    /// counterclockwise rotation by an angle in radians
    pub fn rotate(self, angle: f32) -> Vec2 {
        let (s, c) = angle.sin_cos();
        vec2(self.x * c - self.y * s, self.x * s + self.y * c)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        vec2(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        vec2(self.x - other.x, self.y - other.y)
    }
}

impl Mul for Vec2 {
    type Output = Vec2;
    fn mul(self, other: Vec2) -> Vec2 {
        vec2(self.x * other.x, self.y * other.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, n: f32) -> Vec2 {
        vec2(self.x * n, self.y * n)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        vec2(-self.x, -self.y)
    }
}

pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// glsl-style sign: 0.0 maps to 0.0, unlike f32::signum
pub fn sign(n: f32) -> f32 {
    if n > 0.0 {
        1.0
    } else if n < 0.0 {
        -1.0
    } else {
        0.0
    }
}

pub fn step(edge: f32, x: f32) -> f32 {
    if x < edge {
        0.0
    } else {
        1.0
    }
}

/// triangle wave with period 1, range [0, 1]
pub fn tri(t: f32) -> f32 {
    1.0 - (2.0 * t.rem_euclid(1.0) - 1.0).abs()
}

/// sinusoidal ping-pong easing, range [-1, 1]
pub fn ease_sin(t: f32) -> f32 {
    let x = tri(t);
    (-((std::f32::consts::PI * x).cos() - 1.0) / 2.0) * 2.0 - 1.0
}

/// cubic ping-pong easing, range [-1, 1]
pub fn ease_cubic(t: f32) -> f32 {
    let x = tri(t);
    let e = if x < 0.5 {
        4.0 * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
    };
    e * 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_ops() {
        let a = vec2(3.0, 4.0);
        assert_eq!(a.length(), 5.0);
        assert_eq!(a.normalize().length(), 1.0);
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
        assert_eq!(a.dot(vec2(1.0, 0.0)), 3.0);
        assert_eq!(a + vec2(1.0, 1.0), vec2(4.0, 5.0));
        assert_eq!(a * 2.0, vec2(6.0, 8.0));
    }

    #[test]
    fn rotate_quarter_turn() {
        let r = vec2(1.0, 0.0).rotate(std::f32::consts::FRAC_PI_2);
        assert!(r.x.abs() < 1e-6);
        assert!((r.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn scalar_helpers() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-3.5), -1.0);
        assert_eq!(step(0.5, 0.4), 0.0);
        assert_eq!(step(0.5, 0.6), 1.0);
        assert_eq!(mix(0.0, 10.0, 0.25), 2.5);
        // triangle wave is periodic and symmetric
        assert!((tri(0.25) - 0.5).abs() < 1e-6);
        assert!((tri(1.25) - 0.5).abs() < 1e-6);
        assert!((tri(-0.25) - tri(0.75)).abs() < 1e-6);
    }
}
