//! Lattice topologies and the positions that live on them
//!
//! This module contains:
//! - Position and direction value types
//! - Square and honeycomb grid neighbor rules
//! - The hexagon-tiling vertex graph
//! - Tagged dispatch over all lattice kinds

/// Square and honeycomb grid neighbor rules
pub mod grid;
/// Hexagon tiling vertex graph with interned vertex ids
pub mod hex;
/// Position, vertex id and compass direction value types
pub mod position;
/// Lattice kind dispatch and construction
pub mod topology;

pub use position::{Direction, Position, VertexId};
pub use topology::{Lattice, LatticeConfig, LatticeKind};
