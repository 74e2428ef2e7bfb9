//! Seedable random source shared by generation, spawning, and combat.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};
use std::f64::consts::TAU;

#[derive(Clone)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Uniform value in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1_u64 << 53) as f64
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.unit() * len as f64) as usize % len
    }

    /// Uniform integer in `min..=max`.
    pub fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        debug_assert!(min <= max);
        let span = u64::from(max - min) + 1;
        min + (self.next_u64() % span) as u32
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.index(items.len());
        items.get(index)
    }

    pub fn angle(&mut self) -> f64 {
        self.unit() * TAU
    }
}
