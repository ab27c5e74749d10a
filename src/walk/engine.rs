//! Greedy self-avoiding walk state machine
//!
//! The engine starts on one position and repeatedly moves to a uniformly
//! chosen free neighbor. It never backtracks: once every neighbor of the
//! current position is visited the walk is terminated for good.

use smallvec::SmallVec;

use crate::io::error::{Result, invalid_configuration};
use crate::lattice::position::Position;
use crate::lattice::topology::{Lattice, Neighbors};
use crate::walk::occupancy::{Occupancy, OccupancyState};
use crate::walk::random::RandomSource;

/// Run state of a walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    /// At least one free neighbor may remain
    Running,
    /// No legal move exists from the current position
    Terminated,
}

/// Rule for choosing where each attempt starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartPosition {
    /// Grid center; not defined for the hex vertex graph
    #[default]
    Center,
    /// A fixed position
    At(Position),
    /// A uniformly random position, drawn once per attempt
    Random,
}

/// One self-avoiding walk over a shared lattice
#[derive(Debug, Clone)]
pub struct WalkEngine<'a> {
    lattice: &'a Lattice,
    occupancy: OccupancyState,
    path: Vec<Position>,
    state: WalkState,
}

impl<'a> WalkEngine<'a> {
    /// Start a walk on `start`, marked visited with order 1
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `start` is not on the lattice
    pub fn new(lattice: &'a Lattice, start: Position) -> Result<Self> {
        let mut engine = Self {
            lattice,
            occupancy: OccupancyState::for_lattice(lattice),
            path: Vec::new(),
            state: WalkState::Running,
        };
        engine.reset(start)?;
        Ok(engine)
    }

    /// Discard the current walk and start again from `start`
    ///
    /// Clearing costs time proportional to the discarded path, not the lattice.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `start` is not on the lattice
    pub fn reset(&mut self, start: Position) -> Result<()> {
        if !self.lattice.contains(start) {
            return Err(invalid_configuration(
                "start",
                &start,
                &format!("position is not on the {} lattice", self.lattice.kind()),
            ));
        }

        self.occupancy.clear();
        self.path.clear();
        self.occupancy.mark_visited(start, 1);
        self.path.push(start);
        self.state = WalkState::Running;
        Ok(())
    }

    /// Lattice this walk runs on
    pub const fn lattice(&self) -> &'a Lattice {
        self.lattice
    }

    /// Current run state
    pub const fn state(&self) -> WalkState {
        self.state
    }

    /// Positions visited so far, in visiting order
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Visit orders of the current attempt
    pub const fn occupancy(&self) -> &OccupancyState {
        &self.occupancy
    }

    /// Number of positions visited so far
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Always `false`: a walk holds at least its start position
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Position the walk currently occupies
    pub fn current(&self) -> Option<Position> {
        self.path.last().copied()
    }

    /// Unvisited neighbors of the current position, in lattice order
    pub fn free_neighbors(&self) -> Neighbors {
        let Some(current) = self.current() else {
            return SmallVec::new();
        };

        self.lattice
            .neighbors(current)
            .into_iter()
            .filter(|&candidate| self.occupancy.is_free(candidate))
            .collect()
    }

    /// Apply one step of the greedy rule
    ///
    /// Picks a free neighbor through `source` and moves there, or transitions
    /// to [`WalkState::Terminated`] if none exists. A terminated walk stays
    /// terminated and draws nothing from `source`.
    pub fn step<R: RandomSource + ?Sized>(&mut self, source: &mut R) -> WalkState {
        if self.state == WalkState::Terminated {
            return self.state;
        }

        let candidates = self.free_neighbors();
        if candidates.is_empty() {
            self.state = WalkState::Terminated;
            return self.state;
        }

        let index = source.pick_index(candidates.len());
        let Some(&next) = candidates.get(index).or_else(|| candidates.first()) else {
            self.state = WalkState::Terminated;
            return self.state;
        };

        let order = u32::try_from(self.path.len() + 1).unwrap_or(u32::MAX);
        self.occupancy.mark_visited(next, order);
        self.path.push(next);
        self.state
    }

    /// Step until terminated and return the final path length
    pub fn run<R: RandomSource + ?Sized>(&mut self, source: &mut R) -> usize {
        while self.step(source) == WalkState::Running {}
        self.path.len()
    }

    /// Take the path and occupancy out of the engine
    pub fn into_parts(self) -> (Vec<Position>, OccupancyState) {
        (self.path, self.occupancy)
    }
}
