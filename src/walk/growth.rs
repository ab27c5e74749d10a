//! Retry policy enforcing a minimum walk length
//!
//! Growth is naive rejection sampling: run a greedy walk to termination, keep
//! it if it is long enough, otherwise throw it away and start over. The
//! accepted walks are therefore biased toward whatever the greedy rule finds
//! easy; this is not a uniform sampler over self-avoiding walks.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::io::error::{Result, WalkError, invalid_configuration};
use crate::lattice::position::Position;
use crate::lattice::topology::{Lattice, LatticeKind};
use crate::walk::engine::{StartPosition, WalkEngine};
use crate::walk::moves::MoveSequence;
use crate::walk::occupancy::OccupancyState;
use crate::walk::random::RandomSource;

/// Bounds and start rule for growing walks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GrowthConfig {
    /// Where each attempt starts
    pub start: StartPosition,
    /// Give up after this many attempts
    pub max_attempts: Option<usize>,
    /// Give up once this much time has passed
    pub deadline: Option<Duration>,
}

/// Outcome of a single attempt, reported to growth observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptReport {
    /// 1-based attempt number
    pub attempt: usize,
    /// Length of the walk this attempt produced
    pub length: usize,
    /// Longest walk seen so far, this attempt included
    pub longest: usize,
    /// Whether this attempt met the minimum length
    pub accepted: bool,
}

/// Accepted walk with everything a renderer needs
#[derive(Debug, Clone)]
pub struct GrownWalk {
    /// Visited positions in visiting order
    pub path: Vec<Position>,
    /// Visit orders of the accepted attempt
    pub occupancy: OccupancyState,
    /// Playback moves, ending with a stay
    pub moves: MoveSequence,
    /// Attempts used, the accepted one included
    pub attempts: usize,
}

impl GrownWalk {
    /// Number of visited positions
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Always `false` for walks produced by growth
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// First position of the walk
    pub fn start(&self) -> Option<Position> {
        self.path.first().copied()
    }
}

/// Repeats greedy walks until one is long enough
pub struct GrowthPolicy<'a, R> {
    lattice: &'a Lattice,
    config: GrowthConfig,
    source: R,
}

impl<'a, R: RandomSource> GrowthPolicy<'a, R> {
    /// Create a policy drawing every random choice from `source`
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if:
    /// - A `Center` start is requested on the hex vertex graph
    /// - An `At` start lies outside the lattice
    /// - The attempt cap is zero
    pub fn new(lattice: &'a Lattice, config: GrowthConfig, source: R) -> Result<Self> {
        match config.start {
            StartPosition::Center if lattice.center().is_none() => {
                return Err(invalid_configuration(
                    "start",
                    &"center",
                    &format!(
                        "the {} lattice has no center; pick a vertex or a random start",
                        LatticeKind::HexVertexGraph
                    ),
                ));
            }
            StartPosition::At(position) if !lattice.contains(position) => {
                return Err(invalid_configuration(
                    "start",
                    &position,
                    &format!("position is not on the {} lattice", lattice.kind()),
                ));
            }
            _ => {}
        }
        if config.max_attempts == Some(0) {
            return Err(invalid_configuration(
                "max_attempts",
                &0,
                &"at least one attempt is required",
            ));
        }

        Ok(Self {
            lattice,
            config,
            source,
        })
    }

    /// Lattice walks are grown on
    pub const fn lattice(&self) -> &'a Lattice {
        self.lattice
    }

    /// Random source, for callers that batch several growths
    pub const fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }

    /// Grow a walk of at least `min_length` positions
    ///
    /// A `min_length` of 0 or 1 accepts the first attempt.
    ///
    /// Without `max_attempts` or `deadline` this loops until it succeeds. For
    /// a `min_length` close to the lattice capacity that may take longer than
    /// any caller is willing to wait, or effectively forever.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `InvalidConfiguration` if `min_length` exceeds the lattice capacity
    /// - `GrowthExhausted` if the attempt cap or deadline runs out
    pub fn grow(&mut self, min_length: usize) -> Result<GrownWalk> {
        self.grow_observed(min_length, |_| {})
    }

    /// Grow a walk like [`grow`](Self::grow), reporting every attempt
    ///
    /// # Errors
    ///
    /// Same as [`grow`](Self::grow)
    pub fn grow_observed<F>(&mut self, min_length: usize, mut observer: F) -> Result<GrownWalk>
    where
        F: FnMut(&AttemptReport),
    {
        let capacity = self.lattice.capacity();
        if min_length > capacity {
            return Err(invalid_configuration(
                "min_length",
                &min_length,
                &format!(
                    "exceeds the {capacity} positions of the {} lattice",
                    self.lattice.kind()
                ),
            ));
        }

        let started = Instant::now();
        let first_start = self.pick_start()?;
        let mut engine = WalkEngine::new(self.lattice, first_start)?;
        let mut attempt = 1;
        let mut longest = 0;

        loop {
            let length = engine.run(&mut self.source);
            longest = longest.max(length);
            let accepted = length >= min_length;

            observer(&AttemptReport {
                attempt,
                length,
                longest,
                accepted,
            });

            if accepted {
                debug!(
                    lattice = %self.lattice.kind(),
                    attempts = attempt,
                    length,
                    min_length,
                    elapsed = ?started.elapsed(),
                    "accepted walk"
                );
                let (path, occupancy) = engine.into_parts();
                let moves = MoveSequence::from_path(self.lattice, &path)?;
                return Ok(GrownWalk {
                    path,
                    occupancy,
                    moves,
                    attempts: attempt,
                });
            }

            trace!(attempt, length, min_length, "rejected walk");

            let out_of_attempts = self.config.max_attempts.is_some_and(|cap| attempt >= cap);
            let out_of_time = self
                .config
                .deadline
                .is_some_and(|deadline| started.elapsed() >= deadline);
            if out_of_attempts || out_of_time {
                debug!(attempts = attempt, longest, min_length, "growth exhausted");
                return Err(WalkError::GrowthExhausted {
                    attempts: attempt,
                    min_length,
                    longest,
                });
            }

            let start = self.pick_start()?;
            engine.reset(start)?;
            attempt += 1;
        }
    }

    fn pick_start(&mut self) -> Result<Position> {
        let start = match self.config.start {
            StartPosition::Center => self.lattice.center(),
            StartPosition::At(position) => Some(position),
            StartPosition::Random => {
                let index = self.source.pick_index(self.lattice.capacity());
                self.lattice.position_at(index)
            }
        };

        start.ok_or_else(|| {
            invalid_configuration(
                "start",
                &format!("{:?}", self.config.start),
                &format!("no such position on the {} lattice", self.lattice.kind()),
            )
        })
    }
}
