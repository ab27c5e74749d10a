//! Exact-identity value types for lattice positions and steps

use std::fmt;

/// Interned identifier of a vertex in a [`HexVertexGraph`](crate::lattice::hex::HexVertexGraph)
///
/// Ids are dense, assigned in construction order starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

impl VertexId {
    /// Dense index of this vertex
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A site a walk can occupy
///
/// Grid lattices address cells by integer `(row, col)`; the hexagonal vertex
/// graph addresses vertices by [`VertexId`]. Equality and hashing are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    /// Cell of a square or honeycomb grid
    Cell {
        /// Row index, growing downward
        row: usize,
        /// Column index, growing rightward
        col: usize,
    },
    /// Vertex of the hexagonal vertex graph
    Vertex(VertexId),
}

impl Position {
    /// Grid cell at `(row, col)`
    pub const fn cell(row: usize, col: usize) -> Self {
        Self::Cell { row, col }
    }

    /// Hex graph vertex with the given id
    pub const fn vertex(id: u32) -> Self {
        Self::Vertex(VertexId(id))
    }

    /// Grid coordinates as `[row, col]`, if this is a cell
    pub const fn as_cell(self) -> Option<[usize; 2]> {
        match self {
            Self::Cell { row, col } => Some([row, col]),
            Self::Vertex(_) => None,
        }
    }

    /// Vertex id, if this is a hex graph vertex
    pub const fn as_vertex(self) -> Option<VertexId> {
        match self {
            Self::Cell { .. } => None,
            Self::Vertex(id) => Some(id),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cell { row, col } => write!(f, "({row}, {col})"),
            Self::Vertex(id) => write!(f, "{id}"),
        }
    }
}

/// Compass heading of a single lattice step
///
/// On grids the row axis grows downward, so `North` is `row - 1`. On the hex
/// vertex graph the tiling's y axis grows upward and only the six headings
/// `East`, `West` and the four diagonals occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up one row
    North,
    /// Right one column
    East,
    /// Down one row
    South,
    /// Left one column
    West,
    /// Up and left
    NorthWest,
    /// Up and right
    NorthEast,
    /// Down and right
    SouthEast,
    /// Down and left
    SouthWest,
}

impl Direction {
    /// The four axis directions in neighbor-enumeration order
    pub const AXES: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Row and column deltas of this heading on a grid
    pub const fn grid_offset(self) -> [isize; 2] {
        match self {
            Self::North => [-1, 0],
            Self::East => [0, 1],
            Self::South => [1, 0],
            Self::West => [0, -1],
            Self::NorthWest => [-1, -1],
            Self::NorthEast => [-1, 1],
            Self::SouthEast => [1, 1],
            Self::SouthWest => [1, -1],
        }
    }

    /// Heading whose grid offset equals `[d_row, d_col]`
    pub const fn from_grid_offset(offset: [isize; 2]) -> Option<Self> {
        match offset {
            [-1, 0] => Some(Self::North),
            [0, 1] => Some(Self::East),
            [1, 0] => Some(Self::South),
            [0, -1] => Some(Self::West),
            [-1, -1] => Some(Self::NorthWest),
            [-1, 1] => Some(Self::NorthEast),
            [1, 1] => Some(Self::SouthEast),
            [1, -1] => Some(Self::SouthWest),
            _ => None,
        }
    }

    /// Whether this heading is one of the four diagonals
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::NorthWest | Self::NorthEast | Self::SouthEast | Self::SouthWest
        )
    }

    /// Human-readable name, as printed in move listings
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
            Self::NorthWest => "Northwest",
            Self::NorthEast => "Northeast",
            Self::SouthEast => "Southeast",
            Self::SouthWest => "Southwest",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
