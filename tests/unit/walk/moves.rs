//! Tests for symbolic move sequences

#[cfg(test)]
mod tests {
    use saw_lattice::walk::moves::{Move, MoveSequence};
    use saw_lattice::{Direction, Lattice, Position, WalkError};

    fn scripted_path() -> Vec<Position> {
        vec![
            Position::cell(2, 2),
            Position::cell(2, 3),
            Position::cell(2, 4),
            Position::cell(3, 4),
            Position::cell(3, 3),
            Position::cell(3, 2),
        ]
    }

    // Tests each step becomes its heading and the sequence ends with Stay
    // Verified by omitting the trailing Stay
    #[test]
    fn test_from_path() {
        let lattice = Lattice::square(5).expect("valid");
        let sequence = MoveSequence::from_path(&lattice, &scripted_path()).expect("adjacent path");

        assert_eq!(
            sequence.moves(),
            &[
                Move::Step(Direction::East),
                Move::Step(Direction::East),
                Move::Step(Direction::South),
                Move::Step(Direction::West),
                Move::Step(Direction::West),
                Move::Stay,
            ]
        );
        assert_eq!(sequence.len(), 6);
        assert_eq!(sequence.step_count(), 5);
        assert_eq!((&sequence).into_iter().count(), sequence.iter().count());
    }

    // Tests a lone start yields just Stay
    // Verified by returning an empty sequence for single positions
    #[test]
    fn test_single_position() {
        let lattice = Lattice::square(1).expect("valid");
        let sequence =
            MoveSequence::from_path(&lattice, &[Position::cell(0, 0)]).expect("trivial path");
        assert_eq!(sequence.moves(), &[Move::Stay]);
        assert_eq!(sequence.step_count(), 0);
    }

    // Tests a break in the path names the offending index
    // Verified by reporting the index of the earlier position
    #[test]
    fn test_non_adjacent_path() {
        let lattice = Lattice::square(5).expect("valid");
        let path = [
            Position::cell(0, 0),
            Position::cell(0, 1),
            Position::cell(2, 1),
        ];
        assert!(matches!(
            MoveSequence::from_path(&lattice, &path),
            Err(WalkError::NonAdjacentStep { index: 2 })
        ));
    }

    // Tests replay reconstructs the path and repeats the end on Stay
    // Verified by skipping positions on Stay
    #[test]
    fn test_replay() {
        let lattice = Lattice::square(5).expect("valid");
        let path = scripted_path();
        let sequence = MoveSequence::from_path(&lattice, &path).expect("adjacent path");

        let replayed: Vec<Position> = sequence.replay(&lattice, Position::cell(2, 2)).collect();
        assert_eq!(replayed.len(), path.len());
        assert_eq!(replayed.get(..5), path.get(1..));
        assert_eq!(replayed.last(), path.last());
    }

    // Tests diagonal headings round trip on the honeycomb grid
    // Verified by rejecting diagonal offsets in from_path
    #[test]
    fn test_honeycomb_diagonals() {
        let lattice = Lattice::honeycomb(4).expect("valid");
        let path = [
            Position::cell(2, 2),
            Position::cell(1, 1),
            Position::cell(1, 2),
            Position::cell(0, 3),
        ];
        let sequence = MoveSequence::from_path(&lattice, &path).expect("adjacent path");

        assert_eq!(
            sequence.moves(),
            &[
                Move::Step(Direction::NorthWest),
                Move::Step(Direction::East),
                Move::Step(Direction::NorthEast),
                Move::Stay,
            ]
        );
    }

    // Tests the printed form used in verbose output
    // Verified by joining moves with commas
    #[test]
    fn test_display() {
        let lattice = Lattice::square(3).expect("valid");
        let path = [Position::cell(1, 1), Position::cell(0, 1), Position::cell(0, 2)];
        let sequence = MoveSequence::from_path(&lattice, &path).expect("adjacent path");

        assert_eq!(sequence.to_string(), "North East Stay");
        assert_eq!(Move::Step(Direction::NorthWest).to_string(), "Northwest");
    }
}
