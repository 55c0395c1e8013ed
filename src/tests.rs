#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::rngs::StdRng;
    use strum::VariantArray;

    use crate::puzzle::weighted_degree;
    use crate::{
        connectivity, generate, geometry, validate, CandidateBridge, Difficulty, GenerationError,
        Generator, GeneratorConfig, Island, IslandId, Location, Puzzle, Theme, DEFAULT_MAX_ATTEMPTS,
        SOLVED_MESSAGE,
    };

    fn assert_invariants(puzzle: &Puzzle) {
        for (index, island) in puzzle.islands.iter().enumerate() {
            assert_eq!(island.id, IslandId(index));
            assert!(
                island.required_bridges >= 1,
                "island {} requires zero bridges",
                island.id
            );
            assert_eq!(
                island.required_bridges as u32,
                weighted_degree(island.id, &puzzle.solution),
                "island {} disagrees with its solution degree",
                island.id
            );
        }

        for bridge in &puzzle.solution {
            let from = puzzle.island(bridge.from).unwrap();
            let to = puzzle.island(bridge.to).unwrap();
            assert!(
                geometry::are_aligned(from.location, to.location),
                "bridge {}-{} is diagonal",
                bridge.from,
                bridge.to
            );
        }

        for (a, b) in puzzle.solution.iter().tuple_combinations() {
            assert!(
                !geometry::bridges_intersect(&puzzle.islands, a, b),
                "bridges {}-{} and {}-{} cross",
                a.from,
                a.to,
                b.from,
                b.to
            );
        }

        assert!(connectivity::is_fully_connected(
            &puzzle.islands,
            &puzzle.solution
        ));
    }

    #[test]
    fn pattern_sizes_generate_valid_puzzles() {
        for (side, seed) in [(5, 1u64), (8, 2), (12, 3), (15, 4)] {
            for &difficulty in Difficulty::VARIANTS {
                let config = GeneratorConfig::new(difficulty, Theme::Harbor);
                let puzzle = Generator::seeded(config, seed).generate(side, side).unwrap();

                assert_eq!((puzzle.width, puzzle.height), (side, side));
                assert_eq!(puzzle.difficulty, difficulty);
                assert_invariants(&puzzle);
            }
        }
    }

    #[test]
    fn arbitrary_sizes_generate_valid_puzzles() {
        for (width, height, seed) in [(6, 9, 10u64), (13, 7, 11), (20, 20, 12), (5, 20, 13)] {
            let config = GeneratorConfig::new(Difficulty::Hard, Theme::Glacier);
            let puzzle = Generator::seeded(config, seed)
                .generate(width, height)
                .unwrap();

            assert_invariants(&puzzle);
            for island in &puzzle.islands {
                assert!((0..width).contains(&island.location.0));
                assert!((0..height).contains(&island.location.1));
            }
        }
    }

    #[test]
    fn every_theme_generates_valid_puzzles() {
        for &theme in Theme::VARIANTS {
            let config = GeneratorConfig::new(Difficulty::Medium, theme);
            let puzzle = Generator::seeded(config, 99).generate(8, 8).unwrap();
            assert_eq!(puzzle.theme, theme);
            assert_invariants(&puzzle);
        }
    }

    #[test]
    fn unsupported_dimensions_are_rejected_up_front() {
        let config = GeneratorConfig::default();
        let too_small = Generator::seeded(config, 1).generate(4, 10);
        let too_large = Generator::seeded(config, 1).generate(10, 21);

        assert!(matches!(
            too_small,
            Err(GenerationError::UnsupportedDimensions { .. })
        ));
        assert!(matches!(
            too_large,
            Err(GenerationError::UnsupportedDimensions { .. })
        ));
    }

    #[test]
    fn solution_round_trips_through_the_validator() {
        let config = GeneratorConfig::new(Difficulty::Expert, Theme::Volcano);
        let puzzle = Generator::seeded(config, 21).generate(12, 12).unwrap();

        let candidates: Vec<CandidateBridge> = puzzle
            .solution
            .iter()
            .map(|bridge| CandidateBridge {
                from: bridge.from,
                to: bridge.to,
                is_double: bridge.is_double,
            })
            .collect();

        let report = validate(&puzzle, &candidates).unwrap();
        assert!(report.is_valid, "own solution judged invalid: {:?}", report.errors);
        assert_eq!(report.message, SOLVED_MESSAGE);
    }

    #[test]
    fn validation_is_idempotent() {
        let config = GeneratorConfig::new(Difficulty::Medium, Theme::Reef);
        let puzzle = Generator::seeded(config, 33).generate(8, 8).unwrap();

        // drop one bridge so the reports carry findings
        let candidates: Vec<CandidateBridge> = puzzle
            .solution
            .iter()
            .skip(1)
            .map(|bridge| CandidateBridge {
                from: bridge.from,
                to: bridge.to,
                is_double: bridge.is_double,
            })
            .collect();

        let first = validate(&puzzle, &candidates).unwrap();
        let second = validate(&puzzle, &candidates).unwrap();
        assert_eq!(first, second);
        assert!(!first.is_valid);
    }

    #[test]
    fn empty_candidate_set_reports_every_island_incomplete() {
        let config = GeneratorConfig::new(Difficulty::Easy, Theme::Classic);
        let puzzle = Generator::seeded(config, 8).generate(5, 5).unwrap();

        let report = validate(&puzzle, &[]).unwrap();
        assert!(!report.is_valid);
        assert!(!report.is_complete);
        assert_eq!(report.incomplete_islands.len(), puzzle.islands.len());
    }

    #[test]
    fn retries_are_bounded_by_the_attempt_ceiling() {
        // a placement no synthesis can connect: two islands sharing no axis
        let hostile = |_: Difficulty, _: Theme, _: &mut StdRng| {
            vec![
                Island {
                    id: IslandId(0),
                    location: Location(0, 0),
                    required_bridges: 0,
                },
                Island {
                    id: IslandId(1),
                    location: Location(3, 5),
                    required_bridges: 0,
                },
            ]
        };

        let config = GeneratorConfig::default();
        let mut generator = Generator::seeded(config, 44);
        let err = generator.run(9, 9, hostile).unwrap_err();

        match err {
            GenerationError::AttemptsExhausted { attempts, source } => {
                assert_eq!(attempts, DEFAULT_MAX_ATTEMPTS);
                assert!(matches!(*source, GenerationError::DiagonalBridge { .. }));
            }
            other => panic!("expected AttemptsExhausted, got {other:?}"),
        }
    }

    #[test]
    fn generation_with_entropy_also_holds_invariants() {
        let puzzle = generate(8, 8, Difficulty::Medium, Theme::Meadow).unwrap();
        assert_invariants(&puzzle);
    }

    #[test]
    fn persisted_representation_round_trips() {
        let config = GeneratorConfig::new(Difficulty::Hard, Theme::Citadel);
        let puzzle = Generator::seeded(config, 55).generate(12, 12).unwrap();

        let stored = serde_json::to_string(&puzzle).unwrap();
        let restored: Puzzle = serde_json::from_str(&stored).unwrap();

        assert_eq!(restored.width, puzzle.width);
        assert_eq!(restored.height, puzzle.height);
        assert_eq!(restored.difficulty, puzzle.difficulty);
        assert_eq!(restored.theme, puzzle.theme);
        assert_eq!(restored.islands, puzzle.islands);
        assert_eq!(restored.solution, puzzle.solution);
        assert_invariants(&restored);
    }
}
