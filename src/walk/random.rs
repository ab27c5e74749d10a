//! The single nondeterministic decision of a walk, behind a trait
//!
//! Every random choice the engine makes is "pick one of `len` candidates".
//! Any `rand` generator can serve, [`RandomSelector`] is the seeded default,
//! and [`SequenceSource`] replays fixed choices for reproducible scenarios.

use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};

/// Uniform choice among a known number of candidates
pub trait RandomSource {
    /// Pick an index in `0..len`
    ///
    /// Callers never pass `len == 0`; implementations return `0` for it.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 { 0 } else { self.random_range(0..len) }
    }
}

/// Seeded random selector for reproducible walks
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
    seed: u64,
}

impl RandomSelector {
    /// Create a deterministic selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a selector from a fresh random seed
    ///
    /// The seed is kept so the walk can be reproduced later.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this selector was created from
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for RandomSelector {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.pick_index(len)
    }
}

/// Replays a fixed list of choices, cycling when it runs out
///
/// Each stored choice is reduced modulo the candidate count, so any list is
/// valid for any lattice. Forced moves (one candidate) consume nothing, and an
/// empty list always picks the first candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceSource {
    choices: Vec<usize>,
    cursor: usize,
}

impl SequenceSource {
    /// Create a source replaying `choices`
    pub const fn new(choices: Vec<usize>) -> Self {
        Self { choices, cursor: 0 }
    }

    /// Number of choices consumed so far
    pub const fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 || self.choices.is_empty() {
            return 0;
        }
        let choice = self
            .choices
            .get(self.cursor % self.choices.len())
            .copied()
            .unwrap_or(0);
        self.cursor += 1;
        choice % len
    }
}
