/// Command-line parsing and the walk runner
pub mod cli;
/// Colormaps for shading walks by visit order
pub mod colormap;
/// Walk constants and runtime configuration defaults
pub mod configuration;
/// Error types and helpers
pub mod error;
/// Raster rendering and PNG export
pub mod image;
/// Terminal progress display for growth
pub mod progress;
/// GIF playback of move sequences
pub mod visualization;
