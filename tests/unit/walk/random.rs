//! Tests for injectable random sources

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use saw_lattice::walk::random::{RandomSelector, RandomSource, SequenceSource};

    // Tests the same seed reproduces the same choices
    // Verified by seeding from entropy in new
    #[test]
    fn test_seeded_selector_is_reproducible() {
        let mut first = RandomSelector::new(42);
        let mut second = RandomSelector::new(42);

        let a: Vec<usize> = (0..64).map(|_| first.pick_index(7)).collect();
        let b: Vec<usize> = (0..64).map(|_| second.pick_index(7)).collect();
        assert_eq!(a, b);
        assert_eq!(first.seed(), 42);
    }

    // Tests choices stay in range and cover every candidate
    // Verified by drawing from 0..len-1
    #[test]
    fn test_selector_range() {
        let mut selector = RandomSelector::new(7);
        let mut seen = [false; 4];
        for _ in 0..500 {
            let index = selector.pick_index(4);
            assert!(index < 4);
            if let Some(slot) = seen.get_mut(index) {
                *slot = true;
            }
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    // Tests forced choices never consume randomness
    // Verified by drawing from the generator when len is 1
    #[test]
    fn test_forced_choice() {
        let mut selector = RandomSelector::new(3);
        assert_eq!(selector.pick_index(0), 0);
        assert_eq!(selector.pick_index(1), 0);

        let mut untouched = RandomSelector::new(3);
        assert_eq!(selector.pick_index(10), untouched.pick_index(10));
    }

    // Tests any rand generator works as a source
    // Verified by removing the blanket implementation
    #[test]
    fn test_rng_is_a_source() {
        let mut rng = StdRng::seed_from_u64(9);
        let source: &mut dyn RandomSource = &mut rng;
        assert!(source.pick_index(3) < 3);
    }

    // Tests scripted choices cycle and wrap modulo the candidate count
    // Verified by clamping instead of wrapping out-of-range choices
    #[test]
    fn test_sequence_source() {
        let mut source = SequenceSource::new(vec![1, 5]);

        assert_eq!(source.pick_index(3), 1);
        assert_eq!(source.pick_index(3), 2);
        assert_eq!(source.pick_index(4), 1);
        assert_eq!(source.consumed(), 3);

        assert_eq!(source.pick_index(1), 0);
        assert_eq!(source.consumed(), 3);
    }

    // Tests an empty script always picks the first candidate
    // Verified by indexing the empty script directly
    #[test]
    fn test_empty_sequence_source() {
        let mut source = SequenceSource::new(Vec::new());
        assert_eq!(source.pick_index(5), 0);
        assert_eq!(source.consumed(), 0);
    }
}
