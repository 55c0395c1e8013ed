use ndarray::Array2;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::location::{Coord, Location};
use crate::patterns::{self, Layout};
use crate::puzzle::{Island, IslandId};
use crate::theme::{Difficulty, Theme};

// distance floor between islands, relaxed when a grid keeps rejecting
const MIN_SPACING: u32 = 2;

// how far along the shared axis a new island may land from its anchor;
// keeping islands near their anchors keeps bridge corridors short
const PLACEMENT_WINDOW: Coord = 6;

/// Place islands for a `width` x `height` grid.
///
/// Supported square sizes draw from the hand-designed layout catalog keyed
/// by theme; anything else is placed randomly with an alignment guarantee.
/// Required bridge counts are left at zero here; synthesis derives them.
pub(crate) fn place_islands<R: Rng>(
    width: Coord,
    height: Coord,
    difficulty: Difficulty,
    theme: Theme,
    rng: &mut R,
) -> Vec<Island> {
    match patterns::catalog_for(width, height) {
        Some(catalog) => pattern_placement(catalog, difficulty, theme),
        None => generic_placement(width, height, difficulty, rng),
    }
}

// Deterministic for a given (size, difficulty, theme): the theme picks the
// layout, the difficulty picks how much of it is used.
fn pattern_placement(catalog: &[Layout], difficulty: Difficulty, theme: Theme) -> Vec<Island> {
    let layout = catalog[theme.index() % catalog.len()];
    let (numerator, denominator) = difficulty.layout_share();
    let count = (layout.len() * numerator / denominator)
        .max(4)
        .min(layout.len());

    layout[..count]
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| Island {
            id: IslandId(i),
            location: Location(x, y),
            required_bridges: 0,
        })
        .collect()
}

// Seed one interior island, then grow the set along rows and columns of
// existing islands so every island is aligned with at least one other.
fn generic_placement<R: Rng>(
    width: Coord,
    height: Coord,
    difficulty: Difficulty,
    rng: &mut R,
) -> Vec<Island> {
    let target = difficulty.island_target(width, height);
    let mut occupancy = Array2::from_elem((height as usize, width as usize), false);
    let mut locations: Vec<Location> = Vec::with_capacity(target);

    let seed = Location(rng.gen_range(1..width - 1), rng.gen_range(1..height - 1));
    occupancy[seed.as_index()] = true;
    locations.push(seed);

    let mut min_spacing = MIN_SPACING;
    let mut rejections = 0usize;
    let attempt_cap = target * 30;

    for _ in 0..attempt_cap {
        if locations.len() >= target {
            break;
        }

        let anchor = *locations.choose(rng).unwrap();
        let candidate = if rng.gen_bool(0.5) {
            let lo = (anchor.0 - PLACEMENT_WINDOW).max(0);
            let hi = (anchor.0 + PLACEMENT_WINDOW).min(width - 1);
            Location(rng.gen_range(lo..=hi), anchor.1)
        } else {
            let lo = (anchor.1 - PLACEMENT_WINDOW).max(0);
            let hi = (anchor.1 + PLACEMENT_WINDOW).min(height - 1);
            Location(anchor.0, rng.gen_range(lo..=hi))
        };

        if occupancy[candidate.as_index()]
            || locations
                .iter()
                .any(|existing| existing.manhattan(candidate) < min_spacing)
        {
            rejections += 1;
            // crowded grid; accept tighter packing rather than stalling
            if rejections > target * 3 {
                min_spacing = 1;
            }
            continue;
        }

        occupancy[candidate.as_index()] = true;
        locations.push(candidate);
    }

    locations
        .into_iter()
        .enumerate()
        .map(|(i, location)| Island {
            id: IslandId(i),
            location,
            required_bridges: 0,
        })
        .collect()
}
