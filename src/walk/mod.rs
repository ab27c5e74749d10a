/// Greedy self-avoiding walk state machine
pub mod engine;
/// Retry loop enforcing a minimum walk length
pub mod growth;
/// Symbolic move sequences derived from walk paths
pub mod moves;
/// Visit-order tracking for grids and vertex graphs
pub mod occupancy;
/// Injectable source of the walk's random choices
pub mod random;
