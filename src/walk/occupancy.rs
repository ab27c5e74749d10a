//! Visit-order tracking with clears proportional to the visited set
//!
//! Orders are 1-based; the dense stores use `0` for "unvisited". Each store
//! remembers the keys it marked so `clear` only touches those, which keeps
//! rejected attempts cheap on large lattices.

use ndarray::Array2;

use crate::lattice::position::{Position, VertexId};
use crate::lattice::topology::Lattice;

/// Per-position visit record of a single walk attempt
pub trait Occupancy {
    /// Position key of this store
    type Key: Copy;

    /// Check whether `key` is on the lattice and not yet visited
    fn is_free(&self, key: Self::Key) -> bool;

    /// Record that `key` was visited as the `order`-th position
    ///
    /// Out-of-range keys and a zero order are ignored.
    fn mark_visited(&mut self, key: Self::Key, order: u32);

    /// Forget every visit
    fn clear(&mut self);

    /// Visit order of `key`, if visited
    fn visit_order(&self, key: Self::Key) -> Option<u32>;

    /// Number of visited keys
    fn visited_count(&self) -> usize;
}

/// Dense occupancy of a grid lattice, indexed by `[row, col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    orders: Array2<u32>,
    visited: Vec<[usize; 2]>,
}

impl OccupancyGrid {
    /// Create an all-unvisited grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            orders: Array2::zeros((rows, cols)),
            visited: Vec::new(),
        }
    }

    /// Visit orders as a `rows x cols` array, `0` for unvisited
    pub const fn orders(&self) -> &Array2<u32> {
        &self.orders
    }

    /// Visited cells in marking order
    pub fn visited(&self) -> &[[usize; 2]] {
        &self.visited
    }
}

impl Occupancy for OccupancyGrid {
    type Key = [usize; 2];

    fn is_free(&self, key: [usize; 2]) -> bool {
        self.orders.get(key) == Some(&0)
    }

    fn mark_visited(&mut self, key: [usize; 2], order: u32) {
        if order == 0 {
            return;
        }
        if let Some(cell) = self.orders.get_mut(key) {
            if *cell == 0 {
                self.visited.push(key);
            }
            *cell = order;
        }
    }

    fn clear(&mut self) {
        for key in self.visited.drain(..) {
            if let Some(cell) = self.orders.get_mut(key) {
                *cell = 0;
            }
        }
    }

    fn visit_order(&self, key: [usize; 2]) -> Option<u32> {
        self.orders.get(key).copied().filter(|&order| order > 0)
    }

    fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

/// Occupancy of a hex vertex graph, indexed by [`VertexId`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexOccupancy {
    orders: Vec<u32>,
    visited: Vec<VertexId>,
}

impl VertexOccupancy {
    /// Create an all-unvisited store for `vertex_count` vertices
    pub fn new(vertex_count: usize) -> Self {
        Self {
            orders: vec![0; vertex_count],
            visited: Vec::new(),
        }
    }

    /// Visited vertices in marking order
    pub fn visited(&self) -> &[VertexId] {
        &self.visited
    }
}

impl Occupancy for VertexOccupancy {
    type Key = VertexId;

    fn is_free(&self, key: VertexId) -> bool {
        self.orders.get(key.index()) == Some(&0)
    }

    fn mark_visited(&mut self, key: VertexId, order: u32) {
        if order == 0 {
            return;
        }
        if let Some(slot) = self.orders.get_mut(key.index()) {
            if *slot == 0 {
                self.visited.push(key);
            }
            *slot = order;
        }
    }

    fn clear(&mut self) {
        for key in self.visited.drain(..) {
            if let Some(slot) = self.orders.get_mut(key.index()) {
                *slot = 0;
            }
        }
    }

    fn visit_order(&self, key: VertexId) -> Option<u32> {
        self.orders.get(key.index()).copied().filter(|&order| order > 0)
    }

    fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

/// Occupancy of whichever lattice a walk runs on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OccupancyState {
    /// Store for square and honeycomb grids
    Grid(OccupancyGrid),
    /// Store for the hex vertex graph
    Vertex(VertexOccupancy),
}

impl OccupancyState {
    /// Empty store shaped for `lattice`
    pub fn for_lattice(lattice: &Lattice) -> Self {
        match lattice {
            Lattice::Grid(grid) => Self::Grid(OccupancyGrid::new(grid.rows(), grid.cols())),
            Lattice::Hex(graph) => Self::Vertex(VertexOccupancy::new(graph.vertex_count())),
        }
    }

    /// Grid store, if this occupancy belongs to a grid lattice
    pub const fn as_grid(&self) -> Option<&OccupancyGrid> {
        match self {
            Self::Grid(grid) => Some(grid),
            Self::Vertex(_) => None,
        }
    }

    /// Highest visit order recorded, `0` if nothing is visited
    pub fn max_order(&self) -> u32 {
        match self {
            Self::Grid(grid) => grid
                .visited()
                .iter()
                .filter_map(|&cell| grid.visit_order(cell))
                .max(),
            Self::Vertex(store) => store
                .visited()
                .iter()
                .filter_map(|&id| store.visit_order(id))
                .max(),
        }
        .unwrap_or(0)
    }
}

impl Occupancy for OccupancyState {
    type Key = Position;

    fn is_free(&self, key: Position) -> bool {
        match (self, key) {
            (Self::Grid(grid), Position::Cell { row, col }) => grid.is_free([row, col]),
            (Self::Vertex(store), Position::Vertex(id)) => store.is_free(id),
            _ => false,
        }
    }

    fn mark_visited(&mut self, key: Position, order: u32) {
        match (self, key) {
            (Self::Grid(grid), Position::Cell { row, col }) => grid.mark_visited([row, col], order),
            (Self::Vertex(store), Position::Vertex(id)) => store.mark_visited(id, order),
            _ => {}
        }
    }

    fn clear(&mut self) {
        match self {
            Self::Grid(grid) => grid.clear(),
            Self::Vertex(store) => store.clear(),
        }
    }

    fn visit_order(&self, key: Position) -> Option<u32> {
        match (self, key) {
            (Self::Grid(grid), Position::Cell { row, col }) => grid.visit_order([row, col]),
            (Self::Vertex(store), Position::Vertex(id)) => store.visit_order(id),
            _ => None,
        }
    }

    fn visited_count(&self) -> usize {
        match self {
            Self::Grid(grid) => grid.visited_count(),
            Self::Vertex(store) => store.visited_count(),
        }
    }
}
