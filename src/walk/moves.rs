//! Symbolic move sequences for frame-by-frame playback

use std::fmt;

use crate::io::error::{Result, WalkError};
use crate::lattice::position::{Direction, Position};
use crate::lattice::topology::Lattice;

/// One playback step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Advance one lattice step along a heading
    Step(Direction),
    /// Hold the current frame without advancing
    Stay,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step(direction) => fmt::Display::fmt(direction, f),
            Self::Stay => f.write_str("Stay"),
        }
    }
}

/// Headings between consecutive path positions, terminated by [`Move::Stay`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveSequence {
    moves: Vec<Move>,
}

impl MoveSequence {
    /// Derive the moves of `path` on `lattice` and append the terminal stay
    ///
    /// # Errors
    ///
    /// Returns `NonAdjacentStep` if two consecutive positions are not joined
    /// by a lattice step
    pub fn from_path(lattice: &Lattice, path: &[Position]) -> Result<Self> {
        let mut moves = Vec::with_capacity(path.len());

        for (index, pair) in path.windows(2).enumerate() {
            let &[from, to] = pair else {
                continue;
            };
            let direction = lattice
                .direction_between(from, to)
                .ok_or(WalkError::NonAdjacentStep { index: index + 1 })?;
            moves.push(Move::Step(direction));
        }

        moves.push(Move::Stay);
        Ok(Self { moves })
    }

    /// All moves, the last being [`Move::Stay`]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of moves including the terminal stay
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check whether the sequence holds no moves at all
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Number of real steps, excluding stays
    pub fn step_count(&self) -> usize {
        self.moves
            .iter()
            .filter(|step| matches!(step, Move::Step(_)))
            .count()
    }

    /// Iterate over the moves in playback order
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Replay the moves from `start`, yielding the position after each move
    ///
    /// A stay yields the current position again. Replay stops early if a step
    /// leaves the lattice.
    pub fn replay<'a>(
        &'a self,
        lattice: &'a Lattice,
        start: Position,
    ) -> impl Iterator<Item = Position> + 'a {
        self.moves.iter().scan(start, move |current, step| {
            if let Move::Step(direction) = step {
                *current = lattice.step(*current, *direction)?;
            }
            Some(*current)
        })
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, step) in self.moves.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}
