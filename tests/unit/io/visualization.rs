//! Tests for GIF frame planning and export

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::BufReader;

    use image::AnimationDecoder;
    use image::codecs::gif::GifDecoder;
    use saw_lattice::io::colormap::Colormap;
    use saw_lattice::io::visualization::{FramePlan, WalkAnimation};
    use saw_lattice::walk::moves::MoveSequence;
    use saw_lattice::walk::occupancy::OccupancyState;
    use saw_lattice::{GrowthConfig, GrowthPolicy, GrownWalk, Lattice, RandomSelector, WalkError};
    use tempfile::TempDir;

    // Tests delays at or above the viewer minimum are kept as is
    // Verified by always doubling the skip factor
    #[test]
    fn test_plan_regular_delay() {
        let plan = FramePlan::new(50);
        assert_eq!(plan.delay_ms, 50);
        assert_eq!(plan.skip_factor, 1);
        assert_eq!(plan.frame_count(10), 12);
    }

    // Tests fast delays are raised and frames skipped to keep the pace
    // Verified by rounding the skip factor down
    #[test]
    fn test_plan_fast_delay() {
        let plan = FramePlan::new(5);
        assert_eq!(plan.delay_ms, 20);
        assert_eq!(plan.skip_factor, 4);
        assert_eq!(plan.frame_count(8), 4);
        assert_eq!(plan.frame_count(10), 5);

        let odd = FramePlan::new(7);
        assert_eq!(odd.skip_factor, 3);
        assert_eq!(FramePlan::new(0).delay_ms, 20);
    }

    // Tests the encoded GIF has one frame per planned frame
    // Verified by dropping the trailing partial frame
    #[test]
    fn test_export_gif_frames() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("walk.gif");
        let lattice = Lattice::square(7).expect("valid");
        let mut policy = GrowthPolicy::new(&lattice, GrowthConfig::default(), RandomSelector::new(21))
            .expect("valid config");
        let walk = policy.grow(0).expect("first walk accepted");

        for delay in [50, 6] {
            let animation = WalkAnimation::new(&lattice, Colormap::Jet, delay);
            animation.export_gif(&walk, &path).expect("export succeeds");

            let decoder = GifDecoder::new(BufReader::new(File::open(&path).expect("gif exists")))
                .expect("valid gif");
            let frames = decoder.into_frames().collect_frames().expect("decodable frames");
            assert_eq!(
                frames.len(),
                animation.plan().frame_count(walk.moves.step_count())
            );
        }
    }

    // Tests replay yields every position plus the held final one
    // Verified by replaying without the start position
    #[test]
    fn test_replay_positions() {
        let lattice = Lattice::hex_vertex(2, 3, 1.0).expect("valid");
        let config = GrowthConfig {
            start: saw_lattice::StartPosition::Random,
            ..GrowthConfig::default()
        };
        let mut policy =
            GrowthPolicy::new(&lattice, config, RandomSelector::new(4)).expect("valid config");
        let walk = policy.grow(0).expect("first walk accepted");

        let animation = WalkAnimation::new(&lattice, Colormap::Gray, 40);
        let replayed = animation.replay_positions(&walk);

        assert_eq!(replayed.len(), walk.len() + 1);
        assert_eq!(replayed.get(..walk.len()), Some(walk.path.as_slice()));
        assert_eq!(replayed.last(), walk.path.last());
    }

    // Tests an empty walk has nothing to animate
    // Verified by encoding a lone background frame
    #[test]
    fn test_empty_walk() {
        let dir = TempDir::new().expect("temp dir");
        let lattice = Lattice::square(3).expect("valid");
        let empty = GrownWalk {
            path: Vec::new(),
            occupancy: OccupancyState::for_lattice(&lattice),
            moves: MoveSequence::default(),
            attempts: 0,
        };

        let animation = WalkAnimation::new(&lattice, Colormap::Jet, 50);
        assert!(matches!(
            animation.export_gif(&empty, &dir.path().join("empty.gif")),
            Err(WalkError::InvalidConfiguration { .. })
        ));
    }
}
