use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::connectivity;
use crate::error::GenerationError;
use crate::geometry;
use crate::location::Coord;
use crate::placement;
use crate::puzzle::{weighted_degree, Bridge, Island, Puzzle};
use crate::synthesis;
use crate::theme::{Difficulty, Theme};

/// Grid sides supported by [`Generator::generate`].
pub const SUPPORTED_SIDES: std::ops::RangeInclusive<Coord> = 5..=20;

/// Attempts made before generation gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 20;

/// Tuning for a [`Generator`].
#[derive(Clone, Copy, Debug)]
pub struct GeneratorConfig {
    /// Difficulty tier of the generated puzzles.
    pub difficulty: Difficulty,
    /// Theme of the generated puzzles.
    pub theme: Theme,
    /// Whole-attempt retry ceiling.
    pub max_attempts: usize,
}

impl GeneratorConfig {
    /// Tuning for a tier and theme with the standard retry ceiling.
    pub fn new(difficulty: Difficulty, theme: Theme) -> Self {
        Self {
            difficulty,
            theme,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(Difficulty::Medium, Theme::default())
    }
}

// One attempt walks Placing -> Synthesizing -> Validating; failures route
// through Retrying back to Placing until the ceiling trips to Failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    Placing,
    Synthesizing,
    Validating,
    Accepted,
    Retrying,
    Failed,
}

/// Puzzle generator: places islands, synthesizes a solution, and validates
/// the result, retrying whole attempts under a bounded ceiling.
///
/// Generation either returns a puzzle satisfying every structural invariant
/// or a single terminal error; a partially-built puzzle is never exposed.
pub struct Generator<R: Rng> {
    config: GeneratorConfig,
    rng: R,
}

impl Generator<StdRng> {
    /// A generator seeded from OS entropy.
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// A reproducible generator.
    pub fn seeded(config: GeneratorConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Generator<R> {
    /// A generator drawing randomness from `rng`.
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Generate a puzzle on a `width` x `height` grid.
    ///
    /// Dimensions outside [`SUPPORTED_SIDES`] are rejected up front without
    /// consuming any attempts.
    pub fn generate(&mut self, width: Coord, height: Coord) -> Result<Puzzle, GenerationError> {
        if !SUPPORTED_SIDES.contains(&width) || !SUPPORTED_SIDES.contains(&height) {
            return Err(GenerationError::UnsupportedDimensions { width, height });
        }

        self.run(width, height, |difficulty, theme, rng| {
            placement::place_islands(width, height, difficulty, theme, rng)
        })
    }

    // The state machine proper, with placement injected so tests can drive
    // the retry path with hostile island sets.
    pub(crate) fn run<P>(
        &mut self,
        width: Coord,
        height: Coord,
        mut place: P,
    ) -> Result<Puzzle, GenerationError>
    where
        P: FnMut(Difficulty, Theme, &mut R) -> Vec<Island>,
    {
        let GeneratorConfig {
            difficulty,
            theme,
            max_attempts,
        } = self.config;

        let mut phase = Phase::Placing;
        let mut attempts = 0usize;
        let mut islands: Vec<Island> = Vec::new();
        let mut solution: Vec<Bridge> = Vec::new();
        let mut last_failure: Option<GenerationError> = None;

        loop {
            phase = match phase {
                Phase::Placing => {
                    attempts += 1;
                    islands = place(difficulty, theme, &mut self.rng);
                    Phase::Synthesizing
                }
                Phase::Synthesizing => {
                    match synthesis::build_solution(
                        &mut islands,
                        width,
                        height,
                        difficulty,
                        theme,
                        &mut self.rng,
                    ) {
                        Ok(bridges) => {
                            solution = bridges;
                            Phase::Validating
                        }
                        Err(failure) => {
                            last_failure = Some(failure);
                            Phase::Retrying
                        }
                    }
                }
                Phase::Validating => match acceptance(&islands, &solution) {
                    Ok(()) => Phase::Accepted,
                    Err(failure) => {
                        last_failure = Some(failure);
                        Phase::Retrying
                    }
                },
                Phase::Retrying => {
                    if attempts >= max_attempts {
                        Phase::Failed
                    } else {
                        Phase::Placing
                    }
                }
                Phase::Accepted => {
                    return Ok(Puzzle {
                        width,
                        height,
                        difficulty,
                        theme,
                        islands: std::mem::take(&mut islands),
                        solution: std::mem::take(&mut solution),
                    })
                }
                Phase::Failed => {
                    return Err(GenerationError::AttemptsExhausted {
                        attempts,
                        source: Box::new(last_failure.take().unwrap()),
                    })
                }
            };
        }
    }
}

// The three checks every puzzle must pass before it is accepted.
fn acceptance(islands: &[Island], solution: &[Bridge]) -> Result<(), GenerationError> {
    if !connectivity::is_fully_connected(islands, solution) {
        return Err(GenerationError::DisconnectedSolution);
    }

    for (a, b) in solution.iter().tuple_combinations() {
        if geometry::bridges_intersect(islands, a, b) {
            return Err(GenerationError::BridgeCrossing {
                first: (a.from, a.to),
                second: (b.from, b.to),
            });
        }
    }

    for island in islands {
        let actual = weighted_degree(island.id, solution);
        if actual != island.required_bridges as u32 {
            return Err(GenerationError::RequiredCountMismatch {
                island: island.id,
                required: island.required_bridges,
                actual,
            });
        }
        if island.required_bridges == 0 {
            return Err(GenerationError::IslandUnconnectable { island: island.id });
        }
    }

    Ok(())
}

/// Generate a puzzle with entropy-seeded randomness and the standard retry
/// ceiling. Convenience wrapper over [`Generator`].
pub fn generate(
    width: Coord,
    height: Coord,
    difficulty: Difficulty,
    theme: Theme,
) -> Result<Puzzle, GenerationError> {
    Generator::new(GeneratorConfig::new(difficulty, theme)).generate(width, height)
}
