// AsciiCanvas
// copyright zipxing@hotmail.com 2022～2025

//! Signed-distance functions for 2d primitives plus boolean and blend
//! combinators. Every function takes a query point already transformed
//! into the shape's local frame and returns a signed distance: negative
//! inside, positive outside, zero on the boundary. Magnitude approximates
//! the euclidean distance to the boundary (exact for the simple shapes,
//! a usable bound for the folded ones).
//!
//! The smooth combinators require a blend radius `k > 0`; they converge
//! to the hard boolean as `k` approaches zero.

use crate::math::{mix, sign, step, vec2, Vec2};

// ---------- primitives ----------

pub fn sd_circle(p: Vec2, r: f32) -> f32 {
    p.length() - r
}

pub fn sd_box(p: Vec2, b: Vec2) -> f32 {
    let d = p.abs() - b;
    d.max_n(0.0).length() + d.x.max(d.y).min(0.0)
}

pub fn sd_rounded_box(p: Vec2, b: Vec2, r: f32) -> f32 {
    sd_box(p, b) - r
}

pub fn sd_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let pa = p - a;
    let ba = b - a;
    let h = (pa.dot(ba) / ba.dot(ba)).clamp(0.0, 1.0);
    (pa - ba * h).length()
}

pub fn sd_capsule(p: Vec2, a: Vec2, b: Vec2, r: f32) -> f32 {
    sd_segment(p, a, b) - r
}

pub fn sd_rhombus(p: Vec2, b: Vec2) -> f32 {
    let q = p.abs();
    let h = ((-2.0 * q.dot(b) + b.dot(b)) / b.dot(b)).clamp(-1.0, 1.0);
    let d = (q - b * ((1.0 - h) * 0.5)).length();
    d * sign(q.x * b.y + q.y * b.x - b.x * b.y)
}

pub fn sd_equilateral_triangle(p: Vec2, r: f32) -> f32 {
    let k = 3.0f32.sqrt();
    let mut px = p.x.abs() - r;
    let mut py = p.y + r / k;
    if px + k * py > 0.0 {
        let nx = (px - k * py) / 2.0;
        let ny = (-k * px - py) / 2.0;
        px = nx;
        py = ny;
    }
    px -= px.clamp(-2.0 * r, 0.0);
    -vec2(px, py).length() * sign(py)
}

pub fn sd_isosceles_triangle(p: Vec2, q: Vec2) -> f32 {
    let px = p.x.abs();
    let a = vec2(px, p.y) - q;
    let ba = q;
    let s = sign(q.x);
    let d1 = (a - ba * (a.dot(ba) / ba.dot(ba)).clamp(0.0, 1.0)).length();
    let d2 = (px - px.clamp(0.0, q.x)).abs() + (p.y - q.y).abs() * step(0.0, p.y - q.y);
    (d1 * d1).min(d2).sqrt() * s * sign(p.y * q.x)
}

pub fn sd_triangle(p: Vec2, p0: Vec2, p1: Vec2, p2: Vec2) -> f32 {
    let e0 = p1 - p0;
    let e1 = p2 - p1;
    let e2 = p0 - p2;
    let v0 = p - p0;
    let v1 = p - p1;
    let v2 = p - p2;

    let pq0 = v0 - e0 * (v0.dot(e0) / e0.dot(e0)).clamp(0.0, 1.0);
    let pq1 = v1 - e1 * (v1.dot(e1) / e1.dot(e1)).clamp(0.0, 1.0);
    let pq2 = v2 - e2 * (v2.dot(e2) / e2.dot(e2)).clamp(0.0, 1.0);

    let s = sign(e0.x * e2.y - e0.y * e2.x);

    let d = vec2(pq0.dot(pq0), s * (v0.x * e0.y - v0.y * e0.x))
        .min(vec2(pq1.dot(pq1), s * (v1.x * e1.y - v1.y * e1.x)))
        .min(vec2(pq2.dot(pq2), s * (v2.x * e2.y - v2.y * e2.x)));

    -d.x.sqrt() * sign(d.y)
}

pub fn sd_ellipse(p: Vec2, ab: Vec2) -> f32 {
    let px = p.x.abs();
    let py = p.y.abs();

    let abi = vec2(1.0 / ab.x, 1.0 / ab.y);
    let e = vec2(ab.x * ab.x - ab.y * ab.y, ab.y * ab.y - ab.x * ab.x);

    let mut t = std::f32::consts::FRAC_1_SQRT_2;
    for _ in 0..3 {
        let xy = vec2(ab.x * t, ab.y * (1.0 - t * t).sqrt());
        let ex = e.x * t * t * t * abi.x;
        let ey = e.y * (1.0 - t * t) * (1.0 - t * t).sqrt() * abi.y;
        let r = vec2(px - xy.x - ex, py - xy.y - ey).length();
        let q = vec2(px - xy.x + ex, py - xy.y + ey).length();
        t = ((q * t + r * (1.0 - t * t).sqrt()) / (r + q)).clamp(0.0, 1.0);
    }

    let xy = vec2(ab.x * t, ab.y * (1.0 - t * t).sqrt());
    let d = (vec2(px, py) - xy).length();
    d * sign(py - xy.y)
}

pub fn sd_parabola(p: Vec2, k: f32) -> f32 {
    let px = p.x.abs();
    let ik = 1.0 / k;
    let u = ik * (k * k + px - (k * k * k * k + px * px).sqrt());
    let d1 = vec2(px, p.y).length() - 0.25 * ik;
    let d2 = (vec2(px, p.y) - vec2(u, k * u * u)).length();
    if p.y < 0.0 {
        d1
    } else {
        d2
    }
}

/// `sc` is (sin, cos) of the arc aperture
pub fn sd_arc(p: Vec2, sc: Vec2, ra: f32, rb: f32) -> f32 {
    let px = p.x.abs();
    if sc.y * px > sc.x * p.y {
        (vec2(px, p.y) - sc * ra).length() - rb
    } else {
        (vec2(px, p.y).length() - ra).abs() - rb
    }
}

pub fn sd_ring(p: Vec2, n: Vec2, r: f32, th: f32) -> f32 {
    sd_arc(p, n, r, th)
}

pub fn sd_pie(p: Vec2, c: Vec2, r: f32) -> f32 {
    let px = p.x.abs();
    let l = vec2(px, p.y).length() - r;
    let m = (vec2(px, p.y) - c * vec2(px, p.y).dot(c).clamp(0.0, r)).length();
    l.max(m * sign(c.y * px - c.x * p.y))
}

pub fn sd_horseshoe(p: Vec2, c: Vec2, r: f32, w: f32, h: f32) -> f32 {
    let mut px = p.x.abs();
    let py = p.y;
    let l = vec2(px, py).length();
    let nx = -c.x * px + c.y * py;
    let ny = c.y * px + c.x * py;
    px = if nx < 0.0 { l * sign(-c.x) } else { nx };
    let py = ny;
    (px - px.clamp(0.0, w)) * (px - px.clamp(0.0, w))
        + (py - r) * (py - r) * step(py, r)
        + (py + h) * (py + h) * step(-h, -py)
}

pub fn sd_vesica(p: Vec2, r: f32, d: f32) -> f32 {
    let px = p.x.abs();
    let py = p.y.abs();
    let b = (r * r - d * d).sqrt();
    if py - b > d * px {
        (vec2(px, py) - vec2(0.0, b)).length()
    } else {
        (vec2(px, py) - vec2(-d, 0.0)).length() - r
    }
}

pub fn sd_moon(p: Vec2, d: f32, ra: f32, rb: f32) -> f32 {
    let py = p.y.abs();
    let a = (ra * ra - rb * rb + d * d) / (2.0 * d);
    let b = (ra * ra - a * a).max(0.0).sqrt();
    if d * (p.x * b - py * a) > d * d * (b - py).max(0.0) {
        return (vec2(p.x, py) - vec2(a, b)).length();
    }
    (vec2(p.x, py).length() - ra).max(-((vec2(p.x, py) - vec2(d, 0.0)).length() - rb))
}

pub fn sd_cross(p: Vec2, b: Vec2) -> f32 {
    let mut px = p.x.abs();
    let mut py = p.y.abs();
    if py > px {
        std::mem::swap(&mut px, &mut py);
    }
    let q = vec2(px, py) - b;
    let k = q.y.max(q.x);
    let w = if k > 0.0 { q } else { vec2(b.y - px, -k) };
    sign(k) * w.max_n(0.0).length()
}

pub fn sd_rounded_x(p: Vec2, w: f32, r: f32) -> f32 {
    let px = p.x.abs();
    let py = p.y.abs();
    (vec2(px, py) - vec2(1.0, 1.0) * ((px + py).min(w) * 0.5)).length() - r
}

pub fn sd_star5(p: Vec2, r: f32, rf: f32) -> f32 {
    let k1 = vec2(0.809_017, -0.587_785_25);
    let k2 = vec2(-k1.x, k1.y);
    let mut px = p.x.abs();
    let mut py = p.y;
    px -= 2.0 * k1.dot(vec2(px, py)).max(0.0) * k1.x;
    py -= 2.0 * k1.dot(vec2(px, py)).max(0.0) * k1.y;
    px -= 2.0 * k2.dot(vec2(px, py)).max(0.0) * k2.x;
    py -= 2.0 * k2.dot(vec2(px, py)).max(0.0) * k2.y;
    px = px.abs();
    py -= r;

    let ba = vec2(-k1.y, k1.x) * rf;
    let h = (vec2(px, py).dot(ba) / ba.dot(ba)).clamp(0.0, r);
    (vec2(px, py) - ba * h).length() * sign(py * ba.x - px * ba.y)
}

pub fn sd_hexagon(p: Vec2, r: f32) -> f32 {
    let k = vec2(-0.866_025_4, 0.5);
    let mut px = p.x.abs();
    let mut py = p.y.abs();
    px -= 2.0 * k.dot(vec2(px, py)).min(0.0) * k.x;
    py -= 2.0 * k.dot(vec2(px, py)).min(0.0) * k.y;
    px -= px.clamp(-r * k.x * 2.0, r * k.x * 2.0);
    vec2(px, py - r).length() * sign(py - r)
}

pub fn sd_pentagon(p: Vec2, r: f32) -> f32 {
    let k = vec2(0.809_017, 0.587_785_25);
    let mut px = p.x.abs();
    let mut py = -p.y;
    px -= 2.0 * vec2(-k.x, k.y).dot(vec2(px, py)).min(0.0) * -k.x;
    py -= 2.0 * vec2(-k.x, k.y).dot(vec2(px, py)).min(0.0) * k.y;
    px -= 2.0 * vec2(k.x, k.y).dot(vec2(px, py)).min(0.0) * k.x;
    py -= 2.0 * vec2(k.x, k.y).dot(vec2(px, py)).min(0.0) * k.y;
    px -= px.clamp(-r * k.y, r * k.y);
    py -= r;
    vec2(px, py).length() * sign(py)
}

pub fn sd_octagon(p: Vec2, r: f32) -> f32 {
    let k = vec2(-0.923_879_5, 0.382_683_43);
    let mut px = p.x.abs();
    let mut py = p.y.abs();
    px -= 2.0 * k.dot(vec2(px, py)).min(0.0) * k.x;
    py -= 2.0 * k.dot(vec2(px, py)).min(0.0) * k.y;
    px -= 2.0 * vec2(-k.x, k.y).dot(vec2(px, py)).min(0.0) * -k.x;
    py -= 2.0 * vec2(-k.x, k.y).dot(vec2(px, py)).min(0.0) * k.y;
    px -= px.clamp(-r * k.y * 2.0, r * k.y * 2.0);
    vec2(px, py - r).length() * sign(py - r)
}

/// unit heart centered on the x axis, cusp at the origin
pub fn sd_heart(p: Vec2) -> f32 {
    let px = p.x.abs();
    let py = p.y;
    if py + px > 1.0 {
        return ((px - 0.25).powi(2) + (py - 0.75).powi(2)).sqrt() - 2.0f32.sqrt() / 4.0;
    }
    ((px - 0.5).powi(2) + py.powi(2))
        .min((px + py - 1.0).powi(2) / 2.0)
        .sqrt()
        * sign(px - py)
}

// ---------- boolean / blend combinators ----------

pub fn op_union(d1: f32, d2: f32) -> f32 {
    d1.min(d2)
}

pub fn op_subtraction(d1: f32, d2: f32) -> f32 {
    (-d1).max(d2)
}

pub fn op_intersection(d1: f32, d2: f32) -> f32 {
    d1.max(d2)
}

pub fn op_xor(d1: f32, d2: f32) -> f32 {
    d1.min(d2).max(-d1.max(d2))
}

pub fn op_smooth_union(d1: f32, d2: f32, k: f32) -> f32 {
    let h = (0.5 + 0.5 * (d2 - d1) / k).clamp(0.0, 1.0);
    mix(d2, d1, h) - k * h * (1.0 - h)
}

pub fn op_smooth_subtraction(d1: f32, d2: f32, k: f32) -> f32 {
    let h = (0.5 - 0.5 * (d2 + d1) / k).clamp(0.0, 1.0);
    mix(d2, -d1, h) + k * h * (1.0 - h)
}

pub fn op_smooth_intersection(d1: f32, d2: f32, k: f32) -> f32 {
    let h = (0.5 - 0.5 * (d2 - d1) / k).clamp(0.0, 1.0);
    mix(d2, d1, h) + k * h * (1.0 - h)
}

pub fn op_round(d: f32, r: f32) -> f32 {
    d - r
}

pub fn op_onion(d: f32, r: f32) -> f32 {
    d.abs() - r
}

// ---------- domain operators ----------

/// tile the plane with period `c`, centering each tile on the origin
pub fn op_repeat(p: Vec2, c: Vec2) -> Vec2 {
    vec2(
        (p.x + c.x * 0.5).rem_euclid(c.x) - c.x * 0.5,
        (p.y + c.y * 0.5).rem_euclid(c.y) - c.y * 0.5,
    )
}

pub fn op_sym_x(p: Vec2) -> Vec2 {
    vec2(p.x.abs(), p.y)
}

pub fn op_sym_y(p: Vec2) -> Vec2 {
    vec2(p.x, p.y.abs())
}

pub fn op_sym(p: Vec2) -> Vec2 {
    p.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn circle_sign_convention() {
        assert!((sd_circle(vec2(0.0, 0.0), 1.0) - -1.0).abs() < EPS);
        assert!(sd_circle(vec2(1.0, 0.0), 1.0).abs() < EPS);
        assert!((sd_circle(vec2(2.0, 0.0), 1.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn box_distance() {
        let b = vec2(1.0, 1.0);
        assert!(sd_box(vec2(0.0, 0.0), b) < 0.0);
        assert!(sd_box(vec2(1.0, 0.0), b).abs() < EPS);
        assert!((sd_box(vec2(3.0, 0.0), b) - 2.0).abs() < EPS);
        // corner distance is euclidean
        assert!((sd_box(vec2(2.0, 2.0), b) - 2.0f32.sqrt()).abs() < EPS);
    }

    #[test]
    fn segment_and_capsule() {
        let a = vec2(0.0, 0.0);
        let b = vec2(2.0, 0.0);
        assert!((sd_segment(vec2(1.0, 1.0), a, b) - 1.0).abs() < EPS);
        assert!((sd_segment(vec2(3.0, 0.0), a, b) - 1.0).abs() < EPS);
        assert!((sd_capsule(vec2(1.0, 1.0), a, b, 0.5) - 0.5).abs() < EPS);
    }

    #[test]
    fn hexagon_contains_center() {
        assert!(sd_hexagon(vec2(0.0, 0.0), 1.0) < 0.0);
        assert!(sd_hexagon(vec2(0.0, 2.0), 1.0) > 0.0);
    }

    #[test]
    fn heart_contains_lobe() {
        assert!(sd_heart(vec2(0.0, 0.5)) < 0.0);
        assert!(sd_heart(vec2(2.0, 0.0)) > 0.0);
    }

    #[test]
    fn hard_booleans() {
        assert_eq!(op_union(1.0, -2.0), -2.0);
        assert_eq!(op_intersection(1.0, -2.0), 1.0);
        assert_eq!(op_subtraction(-1.0, -2.0), 1.0);
        // xor is inside exactly one of the two shapes
        assert!(op_xor(-1.0, 2.0) < 0.0);
        assert!(op_xor(-1.0, -2.0) > 0.0);
    }

    #[test]
    fn smooth_union_converges_to_min() {
        let cases = [(0.3, 0.7), (-0.4, 0.9), (-1.5, -0.2), (2.0, 2.0)];
        for &(d1, d2) in &cases {
            let s = op_smooth_union(d1, d2, 1e-4);
            assert!(
                (s - op_union(d1, d2)).abs() < 1e-3,
                "k->0 failed for ({}, {}): {}",
                d1,
                d2,
                s
            );
        }
    }

    #[test]
    fn smooth_union_blends_below_min() {
        // near the seam the blend digs below both distances
        let s = op_smooth_union(0.1, 0.1, 0.5);
        assert!(s < 0.1);
    }

    #[test]
    fn repeat_is_periodic() {
        let c = vec2(4.0, 4.0);
        let a = op_repeat(vec2(1.0, 1.0), c);
        let b = op_repeat(vec2(5.0, -3.0), c);
        assert!((a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS);
        // repeated domain stays within half a tile of the origin
        assert!(a.x.abs() <= 2.0 && a.y.abs() <= 2.0);
    }

    #[test]
    fn symmetry_operators() {
        assert_eq!(op_sym_x(vec2(-2.0, 3.0)), vec2(2.0, 3.0));
        assert_eq!(op_sym_y(vec2(-2.0, -3.0)), vec2(-2.0, 3.0));
        assert_eq!(op_sym(vec2(-2.0, -3.0)), vec2(2.0, 3.0));
    }
}
