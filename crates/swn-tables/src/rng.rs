//! Random sources for rolling.
//!
//! Rolls never reach for a global RNG. Callers pass a [`RandomSource`]:
//! a seeded [`StdRng`] in normal use, or a [`Scripted`] source when a test
//! needs to force exact die faces.

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform random integers.
pub trait RandomSource {
    /// A uniform value in `1..=sides`.
    fn roll_die(&mut self, sides: u32) -> u32;

    /// A uniform index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl RandomSource for StdRng {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Build the process RNG: from `seed` if given, otherwise from the clock.
pub fn seeded(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(clock_seed);
    tracing::debug!(seed, "seeding random source");
    StdRng::seed_from_u64(seed)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// A deterministic source that replays a fixed script of values.
///
/// Values are consumed in call order by both [`RandomSource::roll_die`] and
/// [`RandomSource::pick`]. A die value is clamped into `1..=sides`; a pick
/// value is used as an index and clamped to `len - 1`. Once the script runs
/// out, dice show 1 and picks return 0.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    values: VecDeque<u32>,
}

impl Scripted {
    /// Create a source that replays `values` in order.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for Scripted {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.values
            .pop_front()
            .map_or(1, |v| v.clamp(1, sides.max(1)))
    }

    fn pick(&mut self, len: usize) -> usize {
        self.values
            .pop_front()
            .map_or(0, |v| (v as usize).min(len.saturating_sub(1)))
    }
}
