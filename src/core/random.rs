//! Injectable randomness for every probabilistic effect
//!
//! Game logic never touches a global generator. Anything that rolls dice takes
//! a `&mut dyn RandomPolicy`, so a seeded policy reproduces a whole game and a
//! scripted policy pins individual outcomes in tests.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::error::{KeepError, Result};

/// Source of coin flips and integer samples
pub trait RandomPolicy {
    /// True with the given probability in percent (values above 100 count as 100)
    fn chance(&mut self, percent: u32) -> bool;

    /// Uniform integer in `min..=max`
    fn int_in_range(&mut self, min: i32, max: i32) -> Result<i32>;
}

/// Shared bounds check for range sampling
pub fn check_range(min: i32, max: i32) -> Result<()> {
    if min < 0 || max < 0 {
        return Err(KeepError::Config(format!(
            "range bounds must be non-negative, got {}..={}",
            min, max
        )));
    }
    if min > max {
        return Err(KeepError::Config(format!(
            "range is inverted: min {} > max {}",
            min, max
        )));
    }
    Ok(())
}

/// Deterministic policy backed by ChaCha8
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed from OS entropy, for interactive play
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl RandomPolicy for SeededRandom {
    fn chance(&mut self, percent: u32) -> bool {
        let percent = percent.min(100);
        self.rng.gen_range(0..100) < percent
    }

    fn int_in_range(&mut self, min: i32, max: i32) -> Result<i32> {
        check_range(min, max)?;
        Ok(self.rng.gen_range(min..=max))
    }
}

/// Replays queued outcomes in order
///
/// Once a queue runs dry, `chance` answers `false` and `int_in_range` answers
/// `min`. Queued integers are clamped into the requested range so a script can
/// never produce an out-of-range sample; each clamp is logged and counted.
#[derive(Debug, Default, Clone)]
pub struct ScriptedRandom {
    flips: VecDeque<bool>,
    ints: VecDeque<i32>,
    clamped: usize,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flips(mut self, flips: impl IntoIterator<Item = bool>) -> Self {
        self.flips.extend(flips);
        self
    }

    pub fn with_ints(mut self, ints: impl IntoIterator<Item = i32>) -> Self {
        self.ints.extend(ints);
        self
    }

    /// Outcomes not yet consumed (flips, ints)
    pub fn remaining(&self) -> (usize, usize) {
        (self.flips.len(), self.ints.len())
    }

    /// How many queued integers fell outside their requested range
    pub fn clamped(&self) -> usize {
        self.clamped
    }
}

impl RandomPolicy for ScriptedRandom {
    fn chance(&mut self, percent: u32) -> bool {
        match percent {
            0 => false,
            p if p >= 100 => true,
            _ => self.flips.pop_front().unwrap_or(false),
        }
    }

    fn int_in_range(&mut self, min: i32, max: i32) -> Result<i32> {
        check_range(min, max)?;
        let Some(queued) = self.ints.pop_front() else {
            return Ok(min);
        };
        let value = queued.clamp(min, max);
        if value != queued {
            tracing::warn!(queued, min, max, "scripted sample out of range, clamped");
            self.clamped += 1;
        }
        Ok(value)
    }
}
