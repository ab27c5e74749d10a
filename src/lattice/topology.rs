//! Lattice kinds and the tagged dispatch shared by the walk engine

use std::fmt;

use smallvec::SmallVec;

use crate::io::error::Result;
use crate::lattice::grid::{GridKind, GridLattice};
use crate::lattice::hex::HexVertexGraph;
use crate::lattice::position::{Direction, Position, VertexId};

/// Up to six candidate positions, enough for every supported lattice
pub type Neighbors = SmallVec<[Position; 6]>;

/// Supported lattice topologies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LatticeKind {
    /// Square grid with four axis neighbors
    SquareGrid,
    /// Square array with parity-dependent diagonals, six neighbors per cell
    HoneycombGrid,
    /// Vertices and edges of a hexagon tiling, three neighbors per vertex
    HexVertexGraph,
}

impl fmt::Display for LatticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SquareGrid => "square",
            Self::HoneycombGrid => "honeycomb",
            Self::HexVertexGraph => "hex",
        })
    }
}

/// Parameters describing a lattice to build
///
/// Grid kinds use `rows x cols` cells. The vertex graph tiles `rows x cols`
/// hexagons of radius `hex_radius`; the radius is ignored by grid kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeConfig {
    /// Topology to build
    pub kind: LatticeKind,
    /// Rows of cells or hexagons
    pub rows: usize,
    /// Columns of cells or hexagons
    pub cols: usize,
    /// Hexagon radius for the vertex graph
    pub hex_radius: f64,
}

impl LatticeConfig {
    /// Square `size x size` configuration of the given kind with unit hexagons
    pub const fn square(kind: LatticeKind, size: usize) -> Self {
        Self {
            kind,
            rows: size,
            cols: size,
            hex_radius: 1.0,
        }
    }
}

/// Immutable lattice topology
///
/// Built once per configuration and shared read-only by any number of walks.
#[derive(Debug, Clone)]
pub enum Lattice {
    /// Square or honeycomb grid
    Grid(GridLattice),
    /// Hexagon tiling vertex graph
    Hex(HexVertexGraph),
}

impl Lattice {
    /// Build the lattice described by `config`
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for non-positive sizes or radius
    pub fn build(config: &LatticeConfig) -> Result<Self> {
        match config.kind {
            LatticeKind::SquareGrid => {
                GridLattice::new(GridKind::Square, config.rows, config.cols).map(Self::Grid)
            }
            LatticeKind::HoneycombGrid => {
                GridLattice::new(GridKind::Honeycomb, config.rows, config.cols).map(Self::Grid)
            }
            LatticeKind::HexVertexGraph => {
                HexVertexGraph::build(config.rows, config.cols, config.hex_radius).map(Self::Hex)
            }
        }
    }

    /// Square grid of `size x size` cells
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `size` is zero or too large
    pub fn square(size: usize) -> Result<Self> {
        Self::build(&LatticeConfig::square(LatticeKind::SquareGrid, size))
    }

    /// Honeycomb grid of `size x size` cells
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `size` is zero or too large
    pub fn honeycomb(size: usize) -> Result<Self> {
        Self::build(&LatticeConfig::square(LatticeKind::HoneycombGrid, size))
    }

    /// Vertex graph of `rows x cols` hexagons with the given radius
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for a zero size or non-positive radius
    pub fn hex_vertex(rows: usize, cols: usize, radius: f64) -> Result<Self> {
        HexVertexGraph::build(rows, cols, radius).map(Self::Hex)
    }

    /// Topology of this lattice
    pub const fn kind(&self) -> LatticeKind {
        match self {
            Self::Grid(grid) => match grid.kind() {
                GridKind::Square => LatticeKind::SquareGrid,
                GridKind::Honeycomb => LatticeKind::HoneycombGrid,
            },
            Self::Hex(_) => LatticeKind::HexVertexGraph,
        }
    }

    /// Number of positions, the longest walk the lattice can hold
    pub fn capacity(&self) -> usize {
        match self {
            Self::Grid(grid) => grid.capacity(),
            Self::Hex(graph) => graph.vertex_count(),
        }
    }

    /// Check whether `position` belongs to this lattice
    pub fn contains(&self, position: Position) -> bool {
        match (self, position) {
            (Self::Grid(grid), Position::Cell { row, col }) => grid.contains([row, col]),
            (Self::Hex(graph), Position::Vertex(id)) => graph.contains(id),
            _ => false,
        }
    }

    /// Candidate positions one lattice step from `position`
    ///
    /// Pure and deterministic. Out-of-bounds cells are never returned and a
    /// position foreign to this lattice has no neighbors.
    pub fn neighbors(&self, position: Position) -> Neighbors {
        match (self, position) {
            (Self::Grid(grid), Position::Cell { row, col }) => grid
                .neighbors([row, col])
                .into_iter()
                .map(|[r, c]| Position::cell(r, c))
                .collect(),
            (Self::Hex(graph), Position::Vertex(id)) => graph
                .neighbors(id)
                .iter()
                .map(|&neighbor| Position::Vertex(neighbor))
                .collect(),
            _ => Neighbors::new(),
        }
    }

    /// Check whether one lattice step joins `a` and `b`
    pub fn is_adjacent(&self, a: Position, b: Position) -> bool {
        self.direction_between(a, b).is_some()
    }

    /// Heading of the step from `from` to `to`, if they are adjacent
    pub fn direction_between(&self, from: Position, to: Position) -> Option<Direction> {
        match (self, from, to) {
            (
                Self::Grid(grid),
                Position::Cell { row, col },
                Position::Cell {
                    row: to_row,
                    col: to_col,
                },
            ) => grid.direction_between([row, col], [to_row, to_col]),
            (Self::Hex(graph), Position::Vertex(a), Position::Vertex(b)) => {
                graph.direction_between(a, b)
            }
            _ => None,
        }
    }

    /// Position reached from `from` by one step along `direction`
    pub fn step(&self, from: Position, direction: Direction) -> Option<Position> {
        match (self, from) {
            (Self::Grid(grid), Position::Cell { row, col }) => grid
                .step([row, col], direction)
                .map(|[r, c]| Position::cell(r, c)),
            (Self::Hex(graph), Position::Vertex(id)) => {
                graph.step(id, direction).map(Position::Vertex)
            }
            _ => None,
        }
    }

    /// Conventional starting position: the grid center, none for the vertex graph
    pub const fn center(&self) -> Option<Position> {
        match self {
            Self::Grid(grid) => {
                let [row, col] = grid.center();
                Some(Position::cell(row, col))
            }
            Self::Hex(_) => None,
        }
    }

    /// Position with dense index `index` in `0..capacity()`
    ///
    /// Grid cells are numbered row-major, vertices by id.
    pub fn position_at(&self, index: usize) -> Option<Position> {
        match self {
            Self::Grid(grid) => grid.cell_at(index).map(|[row, col]| Position::cell(row, col)),
            Self::Hex(graph) => {
                let id = u32::try_from(index).ok().map(VertexId)?;
                graph.contains(id).then_some(Position::Vertex(id))
            }
        }
    }
}
