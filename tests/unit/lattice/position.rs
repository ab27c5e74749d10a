//! Tests for position, vertex id and direction value types

#[cfg(test)]
mod tests {
    use saw_lattice::lattice::position::{Direction, Position, VertexId};
    use std::collections::HashSet;

    // Tests cell and vertex accessors return only their own variant
    // Verified by swapping the match arms of as_cell
    #[test]
    fn test_position_accessors() {
        let cell = Position::cell(3, 4);
        let vertex = Position::vertex(7);

        assert_eq!(cell.as_cell(), Some([3, 4]));
        assert_eq!(cell.as_vertex(), None);
        assert_eq!(vertex.as_vertex(), Some(VertexId(7)));
        assert_eq!(vertex.as_cell(), None);
    }

    // Tests positions hash and compare exactly
    // Verified by deriving Hash from the row only
    #[test]
    fn test_position_identity() {
        let mut set = HashSet::new();
        set.insert(Position::cell(1, 2));
        set.insert(Position::cell(2, 1));
        set.insert(Position::cell(1, 2));
        set.insert(Position::vertex(0));

        assert_eq!(set.len(), 3);
        assert_ne!(Position::cell(0, 0), Position::vertex(0));
    }

    // Tests display formats used in error messages
    // Verified by swapping row and column in the formatter
    #[test]
    fn test_position_display() {
        assert_eq!(Position::cell(2, 5).to_string(), "(2, 5)");
        assert_eq!(Position::vertex(12).to_string(), "v12");
    }

    // Tests every direction survives the offset round trip
    // Verified by mapping NorthWest's offset to NorthEast
    #[test]
    fn test_direction_offset_round_trip() {
        let all = [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
            Direction::NorthWest,
            Direction::NorthEast,
            Direction::SouthEast,
            Direction::SouthWest,
        ];
        for direction in all {
            assert_eq!(
                Direction::from_grid_offset(direction.grid_offset()),
                Some(direction)
            );
        }
        assert_eq!(Direction::from_grid_offset([0, 0]), None);
        assert_eq!(Direction::from_grid_offset([2, 0]), None);
    }

    // Tests North decreases the row and diagonals are flagged
    // Verified by flipping the sign of North's row offset
    #[test]
    fn test_direction_conventions() {
        assert_eq!(Direction::North.grid_offset(), [-1, 0]);
        assert_eq!(Direction::SouthEast.grid_offset(), [1, 1]);
        assert!(Direction::NorthEast.is_diagonal());
        assert!(!Direction::West.is_diagonal());
        assert_eq!(Direction::AXES.len(), 4);
        assert_eq!(Direction::SouthWest.to_string(), "Southwest");
    }
}
