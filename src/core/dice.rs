//! Deterministic randomness source
//!
//! Every draw made during generation goes through [`Dice`]. The order of calls
//! is part of the output contract: adding, removing or reordering a single
//! draw changes every system generated after it.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::seed::fnv1a_64;

/// Seeded dice roller owned by exactly one generation run
#[derive(Clone, Debug)]
pub struct Dice {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Dice {
    /// Seed from an arbitrary string via 64-bit FNV-1a
    pub fn from_seed_str(seed: &str) -> Self {
        Self::from_seed(fnv1a_64(seed.as_bytes()))
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Numeric seed this stream was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `0..n`. `n == 0` yields 0 without consuming a draw.
    pub fn uniform(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Uniform float in `[0, 1)`
    pub fn unit(&mut self) -> f64 {
        self.rng.gen()
    }

    /// Sum of `count` rolls of a `sides`-sided die
    pub fn roll(&mut self, count: u32, sides: u32) -> i32 {
        (0..count)
            .map(|_| self.uniform(sides as usize) as i32 + 1)
            .sum()
    }

    pub fn d6(&mut self) -> i32 {
        self.roll(1, 6)
    }

    pub fn two_d6(&mut self) -> i32 {
        self.roll(2, 6)
    }

    pub fn three_d6(&mut self) -> i32 {
        self.roll(3, 6)
    }

    pub fn d100(&mut self) -> i32 {
        self.roll(1, 100)
    }

    /// d6 - d6, range -5..=5
    pub fn flux(&mut self) -> i32 {
        let a = self.d6();
        let b = self.d6();
        a - b
    }

    /// Uniform pick from a slice. Empty slices consume no draw.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.uniform(items.len());
        items.get(idx)
    }
}
