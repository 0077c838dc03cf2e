//! Injectable randomness for the scoring policy.
//!
//! Scores carry a bounded random perturbation inside each branch's range.
//! The source of that perturbation is a trait so tests can pin it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws integers uniformly from an inclusive range.
pub trait JitterSource {
    /// Draw from `low..=high`. Returns `low` when `high < low`.
    fn draw(&mut self, low: u8, high: u8) -> u8;
}

impl<J: JitterSource + ?Sized> JitterSource for &mut J {
    fn draw(&mut self, low: u8, high: u8) -> u8 {
        (**self).draw(low, high)
    }
}

/// Pseudo-random jitter backed by a seedable [`StdRng`].
#[derive(Debug, Clone)]
pub struct RandomJitter {
    rng: StdRng,
}

impl RandomJitter {
    /// Entropy-seeded source for production use.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic source; equal seeds give equal draw sequences.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomJitter {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl JitterSource for RandomJitter {
    fn draw(&mut self, low: u8, high: u8) -> u8 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

/// Always the low end of the range.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimumJitter;

impl JitterSource for MinimumJitter {
    fn draw(&mut self, low: u8, _high: u8) -> u8 {
        low
    }
}

/// Always the high end of the range.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaximumJitter;

impl JitterSource for MaximumJitter {
    fn draw(&mut self, low: u8, high: u8) -> u8 {
        high.max(low)
    }
}
