// AsciiCanvas
// copyright zipxing@hotmail.com 2022～2025

//! Seedable rng wrapper for scene-side variation (palette derivation,
//! per-shape phases). Scenes that want frame-stable randomness should
//! reseed from their configured seed, not from the clock.

use rand::seq::SliceRandom;
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro256StarStar,
};
use std::time::{SystemTime, UNIX_EPOCH};

pub struct Rand {
    rng: Xoshiro256StarStar,
}

impl Default for Rand {
    fn default() -> Self {
        Rand::new()
    }
}

impl Rand {
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256StarStar::seed_from_u64(0),
        }
    }

    pub fn srand(&mut self, seed: u64) {
        self.rng = Xoshiro256StarStar::seed_from_u64(seed);
    }

    pub fn srand_now(&mut self) {
        let start = SystemTime::now();
        let since_the_epoch = start
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards");
        let seed = since_the_epoch.as_millis();
        self.srand(seed as u64);
    }

    pub fn rand64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    pub fn rand(&mut self) -> u32 {
        self.rng.next_u64() as u32
    }

    /// uniform float in [min, max] with three decimals of resolution
    pub fn gen_range(&mut self, min: f64, max: f64) -> f64 {
        if min > max {
            return 0.0;
        }
        let u1 = (min * 1000.0) as u64;
        let u2 = (max * 1000.0) as u64;
        (u1 + (self.rng.next_u64() % (u2 - u1 + 1))) as f64 / 1000.0
    }

    pub fn shuffle<T: Copy>(&mut self, v: &mut Vec<T>) {
        v.shuffle(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Rand::new();
        let mut b = Rand::new();
        a.srand(42);
        b.srand(42);
        for _ in 0..10 {
            assert_eq!(a.rand64(), b.rand64());
        }
    }

    #[test]
    fn gen_range_stays_in_bounds() {
        let mut r = Rand::new();
        r.srand(7);
        for _ in 0..100 {
            let v = r.gen_range(1.0, 2.0);
            assert!((1.0..=2.0).contains(&v));
        }
        assert_eq!(r.gen_range(3.0, 1.0), 0.0);
    }
}
