//! Greedy self-avoiding random walks on square, honeycomb and hexagonal lattices
//!
//! A walk starts on one lattice position and keeps stepping to a uniformly
//! chosen unvisited neighbor until it is trapped. A growth policy retries
//! until a walk reaches a minimum length, then hands the path, its occupancy
//! snapshot and a symbolic move sequence to whatever renders it.
//!
//! The sampler is greedy rejection: it does not sample uniformly among all
//! self-avoiding walks of a given length.

#![forbid(unsafe_code)]

/// Input/output adapters, configuration and error handling
pub mod io;
/// Lattice topologies and positions
pub mod lattice;
/// Walk engine, growth policy and random sources
pub mod walk;

pub use io::error::{Result, WalkError};
pub use lattice::{Direction, Lattice, LatticeConfig, LatticeKind, Position, VertexId};
pub use walk::engine::{StartPosition, WalkEngine, WalkState};
pub use walk::growth::{GrowthConfig, GrowthPolicy, GrownWalk};
pub use walk::random::{RandomSelector, RandomSource};
