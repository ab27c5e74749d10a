//! Neighbor rules for bounded square and honeycomb grids
//!
//! The honeycomb lattice is embedded in a square array: every cell keeps its
//! four axis neighbors and gains one diagonal pair chosen by the parity of
//! `row + col`. Even cells link NW/SE, odd cells link NE/SW, which gives every
//! interior cell six neighbors while keeping integer addressing.

use smallvec::SmallVec;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_configuration};
use crate::lattice::position::Direction;

const SQUARE_DIRECTIONS: [Direction; 4] = Direction::AXES;

const HONEYCOMB_EVEN_DIRECTIONS: [Direction; 6] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
    Direction::NorthWest,
    Direction::SouthEast,
];

const HONEYCOMB_ODD_DIRECTIONS: [Direction; 6] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
    Direction::NorthEast,
    Direction::SouthWest,
];

/// Neighbor rule of a grid lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKind {
    /// Four axis neighbors
    Square,
    /// Four axis neighbors plus a parity-selected diagonal pair
    Honeycomb,
}

/// Bounded `rows x cols` grid with a fixed neighbor rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLattice {
    kind: GridKind,
    rows: usize,
    cols: usize,
}

impl GridLattice {
    /// Create a grid lattice
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if either dimension is zero or exceeds
    /// [`MAX_GRID_DIMENSION`]
    pub fn new(kind: GridKind, rows: usize, cols: usize) -> Result<Self> {
        for (parameter, value) in [("rows", rows), ("cols", cols)] {
            if value == 0 {
                return Err(invalid_configuration(
                    parameter,
                    &value,
                    &"lattice size must be positive",
                ));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_configuration(
                    parameter,
                    &value,
                    &format!("lattice size must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        Ok(Self { kind, rows, cols })
    }

    /// Neighbor rule of this grid
    pub const fn kind(&self) -> GridKind {
        self.kind
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells, the longest walk the grid can hold
    pub const fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// Check whether `[row, col]` lies inside the grid
    pub const fn contains(&self, cell: [usize; 2]) -> bool {
        cell[0] < self.rows && cell[1] < self.cols
    }

    /// Cell the walk starts from by default
    pub const fn center(&self) -> [usize; 2] {
        [self.rows / 2, self.cols / 2]
    }

    /// Candidate headings from `cell`, before bounds filtering
    pub const fn directions_at(&self, cell: [usize; 2]) -> &'static [Direction] {
        match self.kind {
            GridKind::Square => &SQUARE_DIRECTIONS,
            GridKind::Honeycomb => {
                if (cell[0] + cell[1]) % 2 == 0 {
                    &HONEYCOMB_EVEN_DIRECTIONS
                } else {
                    &HONEYCOMB_ODD_DIRECTIONS
                }
            }
        }
    }

    /// Cell reached from `cell` by one step along `direction`
    ///
    /// Returns `None` if the step leaves the grid or the heading is not
    /// allowed from `cell` under this grid's rule.
    pub fn step(&self, cell: [usize; 2], direction: Direction) -> Option<[usize; 2]> {
        if !self.contains(cell) || !self.directions_at(cell).contains(&direction) {
            return None;
        }

        let [d_row, d_col] = direction.grid_offset();
        let row = cell[0].checked_add_signed(d_row)?;
        let col = cell[1].checked_add_signed(d_col)?;
        let target = [row, col];

        self.contains(target).then_some(target)
    }

    /// In-bounds neighbors of `cell` in enumeration order
    pub fn neighbors(&self, cell: [usize; 2]) -> SmallVec<[[usize; 2]; 6]> {
        if !self.contains(cell) {
            return SmallVec::new();
        }

        self.directions_at(cell)
            .iter()
            .filter_map(|&direction| self.step(cell, direction))
            .collect()
    }

    /// Heading of the single step from `from` to `to`, if they are adjacent
    pub fn direction_between(&self, from: [usize; 2], to: [usize; 2]) -> Option<Direction> {
        let offset = [
            to[0] as isize - from[0] as isize,
            to[1] as isize - from[1] as isize,
        ];
        let direction = Direction::from_grid_offset(offset)?;

        (self.step(from, direction) == Some(to)).then_some(direction)
    }

    /// Cell with row-major index `index`
    pub const fn cell_at(&self, index: usize) -> Option<[usize; 2]> {
        if index < self.capacity() {
            Some([index / self.cols, index % self.cols])
        } else {
            None
        }
    }
}
