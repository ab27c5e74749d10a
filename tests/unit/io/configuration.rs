//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use saw_lattice::io::configuration::{
        BACKGROUND_COLOR, DEFAULT_FRAME_DELAY_MS, DEFAULT_GRID_SIZE, DEFAULT_HEX_GRID_SIZE,
        DEFAULT_HEX_RADIUS, DEFAULT_LOWER_BOUND, FINAL_FRAME_HOLD_FACTOR, LATTICE_COLOR,
        MAX_GRID_DIMENSION, VIEWER_MIN_FRAME_DELAY_MS,
    };

    // Tests the default grid has a single center cell
    // Verified by changing the default size to an even number
    #[test]
    fn test_default_sizes() {
        assert_eq!(DEFAULT_GRID_SIZE % 2, 1);
        assert!(DEFAULT_GRID_SIZE <= MAX_GRID_DIMENSION);
        assert!(DEFAULT_HEX_GRID_SIZE <= MAX_GRID_DIMENSION);
        assert!(DEFAULT_HEX_RADIUS > 0.0);
        assert_eq!(DEFAULT_LOWER_BOUND, 0);
    }

    // Tests frame timing constants are consistent
    // Verified by setting the default delay below the viewer minimum
    #[test]
    fn test_frame_timing() {
        assert!(DEFAULT_FRAME_DELAY_MS >= VIEWER_MIN_FRAME_DELAY_MS);
        assert!(FINAL_FRAME_HOLD_FACTOR > 1);
    }

    // Tests the lattice outline stands out from the background
    // Verified by setting both colors to white
    #[test]
    fn test_colors_differ() {
        assert_ne!(BACKGROUND_COLOR, LATTICE_COLOR);
    }
}
