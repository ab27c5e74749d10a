//! Walk constants and runtime configuration defaults

// Lattice defaults, matching the classic visualizer
/// Default width and height of square and honeycomb grids
pub const DEFAULT_GRID_SIZE: usize = 51;
/// Default number of hexagon rows and columns for the vertex graph
pub const DEFAULT_HEX_GRID_SIZE: usize = 20;
/// Default hexagon radius
pub const DEFAULT_HEX_RADIUS: f64 = 1.0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed lattice dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;
/// Maximum number of vertices in a hexagon tiling
pub const MAX_HEX_VERTICES: usize = 1 << 24;

// Safety limit to prevent excessive memory allocation when rendering
/// Maximum number of pixels in a rendered image or animation frame
pub const MAX_CANVAS_PIXELS: u64 = 1 << 26;

/// Default minimum accepted walk length
pub const DEFAULT_LOWER_BOUND: usize = 0;

// Progress display settings
/// Spinner refresh interval in milliseconds
pub const PROGRESS_TICK_MS: u64 = 100;

// Output settings
/// Default PNG snapshot path
pub const DEFAULT_OUTPUT: &str = "saw.png";
/// Default delay between animation frames
pub const DEFAULT_FRAME_DELAY_MS: u32 = 50;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// The terminal stay frame lasts this many frame delays
pub const FINAL_FRAME_HOLD_FACTOR: u32 = 25;

// Rendering geometry
/// Side of one grid cell in pixels
pub const CELL_PIXELS: u32 = 8;
/// Pixels per unit of hexagon radius
pub const HEX_PIXELS_PER_UNIT: f64 = 12.0;
/// Blank border around rendered images in pixels
pub const IMAGE_MARGIN: u32 = 8;

// Colors
/// Background of rendered images and unvisited cells
pub const BACKGROUND_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Lattice edges that the walk did not use
pub const LATTICE_COLOR: [u8; 4] = [200, 200, 200, 255];
