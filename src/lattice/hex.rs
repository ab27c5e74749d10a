//! Vertex graph of a hexagon tiling
//!
//! Hexagons of radius `r` are laid out in `rows x cols` offset columns. Each
//! corner is identified by an exact integer key measured in half-radius units
//! along x and half-hexagon-height units along y, so corners shared between
//! neighboring hexagons intern to the same [`VertexId`] without any float
//! comparison. Edges are deduplicated by their `(min id, max id)` pair and the
//! adjacency table is built once; lookups afterwards are plain indexing.

use indexmap::IndexSet;
use smallvec::SmallVec;

use crate::io::configuration::{MAX_GRID_DIMENSION, MAX_HEX_VERTICES};
use crate::io::error::{Result, invalid_configuration};
use crate::lattice::position::{Direction, VertexId};

/// Corner keys relative to the hexagon center, counter-clockwise from 0°
const CORNER_OFFSETS: [[i64; 2]; 6] = [[2, 0], [1, 1], [-1, 1], [-2, 0], [-1, -1], [1, -1]];

/// Key delta of each edge heading; y grows upward in the tiling frame
const EDGE_HEADINGS: [([i64; 2], Direction); 6] = [
    ([2, 0], Direction::East),
    ([-2, 0], Direction::West),
    ([1, 1], Direction::NorthEast),
    ([-1, 1], Direction::NorthWest),
    ([1, -1], Direction::SouthEast),
    ([-1, -1], Direction::SouthWest),
];

/// A vertex touches at most three edges in a hexagon tiling
pub type VertexNeighbors = SmallVec<[VertexId; 3]>;

/// Vertex and edge structure of a tiling of hexagons
#[derive(Debug, Clone)]
pub struct HexVertexGraph {
    rows: usize,
    cols: usize,
    radius: f64,
    keys: IndexSet<[i64; 2]>,
    edges: IndexSet<(VertexId, VertexId)>,
    adjacency: Vec<VertexNeighbors>,
}

impl HexVertexGraph {
    /// Tile `rows x cols` hexagons of the given radius and build the graph
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `rows` or `cols` is zero or too large,
    /// if the tiling could exceed [`MAX_HEX_VERTICES`], or if `radius` is not a
    /// positive finite number
    pub fn build(rows: usize, cols: usize, radius: f64) -> Result<Self> {
        for (parameter, value) in [("rows", rows), ("cols", cols)] {
            if value == 0 {
                return Err(invalid_configuration(
                    parameter,
                    &value,
                    &"hexagon tiling size must be positive",
                ));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_configuration(
                    parameter,
                    &value,
                    &format!("hexagon tiling size must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(invalid_configuration(
                "radius",
                &radius,
                &"hexagon radius must be a positive finite number",
            ));
        }

        // A rows x cols tiling has exactly 2rc + 2r + 2c corners
        let vertex_bound = (rows + 1)
            .checked_mul(cols + 1)
            .and_then(|cells| cells.checked_mul(2))
            .filter(|&bound| bound <= MAX_HEX_VERTICES)
            .ok_or_else(|| {
                invalid_configuration(
                    "rows",
                    &format!("{rows}x{cols}"),
                    &format!("hexagon tiling must not exceed {MAX_HEX_VERTICES} vertices"),
                )
            })?;

        let mut keys = IndexSet::with_capacity(vertex_bound);
        let mut edges = IndexSet::with_capacity(vertex_bound + rows * cols);

        for row in 0..rows {
            for col in 0..cols {
                let center = [3 * col as i64, 2 * row as i64 + (col % 2) as i64];
                let mut corners = [VertexId(0); 6];

                for (corner, offset) in corners.iter_mut().zip(CORNER_OFFSETS) {
                    let key = [center[0] + offset[0], center[1] + offset[1]];
                    let (index, _) = keys.insert_full(key);
                    *corner = VertexId(index as u32);
                }

                for (index, &from) in corners.iter().enumerate() {
                    let to = corners
                        .get((index + 1) % corners.len())
                        .copied()
                        .unwrap_or(from);
                    edges.insert((from.min(to), from.max(to)));
                }
            }
        }

        let mut adjacency = vec![VertexNeighbors::new(); keys.len()];
        for &(a, b) in &edges {
            if let Some(list) = adjacency.get_mut(a.index()) {
                list.push(b);
            }
            if let Some(list) = adjacency.get_mut(b.index()) {
                list.push(a);
            }
        }
        for list in &mut adjacency {
            list.sort_unstable();
        }

        Ok(Self {
            rows,
            cols,
            radius,
            keys,
            edges,
            adjacency,
        })
    }

    /// Hexagon rows in the tiling
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Hexagon columns in the tiling
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Hexagon radius used for coordinates
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Number of distinct vertices
    pub fn vertex_count(&self) -> usize {
        self.keys.len()
    }

    /// Number of distinct edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All vertex ids in ascending order
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.keys.len()).filter_map(|index| u32::try_from(index).ok().map(VertexId))
    }

    /// Check whether `id` names a vertex of this graph
    pub fn contains(&self, id: VertexId) -> bool {
        id.index() < self.keys.len()
    }

    /// Vertices joined to `id` by an edge, in ascending id order
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.adjacency
            .get(id.index())
            .map_or(&[][..], SmallVec::as_slice)
    }

    /// Check whether an edge joins `a` and `b`
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.edges.contains(&(a.min(b), a.max(b)))
    }

    /// All edges as `(lower id, higher id)` pairs in construction order
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.edges.iter().copied()
    }

    /// Sorted vertex degrees, for comparing graphs up to relabelling
    pub fn degree_sequence(&self) -> Vec<usize> {
        let mut degrees: Vec<usize> = self.adjacency.iter().map(SmallVec::len).collect();
        degrees.sort_unstable();
        degrees
    }

    /// Cartesian coordinates of a vertex, y growing upward
    pub fn coordinates(&self, id: VertexId) -> Option<[f64; 2]> {
        let key = self.keys.get_index(id.index())?;
        let half_height = self.radius * 3.0_f64.sqrt() / 2.0;
        Some([key[0] as f64 * self.radius / 2.0, key[1] as f64 * half_height])
    }

    /// Heading of the edge from `from` to `to`, if they are adjacent
    pub fn direction_between(&self, from: VertexId, to: VertexId) -> Option<Direction> {
        if !self.has_edge(from, to) {
            return None;
        }
        let a = self.keys.get_index(from.index())?;
        let b = self.keys.get_index(to.index())?;
        let delta = [b[0] - a[0], b[1] - a[1]];

        EDGE_HEADINGS
            .iter()
            .find(|(offset, _)| *offset == delta)
            .map(|&(_, direction)| direction)
    }

    /// Vertex reached from `from` along the edge with the given heading
    pub fn step(&self, from: VertexId, direction: Direction) -> Option<VertexId> {
        self.neighbors(from)
            .iter()
            .copied()
            .find(|&to| self.direction_between(from, to) == Some(direction))
    }
}
