use std::collections::{BTreeMap, HashSet};

use itertools::Itertools;
use rand::Rng;
use unordered_pair::UnorderedPair;

use crate::connectivity;
use crate::error::GenerationError;
use crate::geometry;
use crate::location::{Coord, Location};
use crate::puzzle::{weighted_degree, Bridge, Island, IslandId};
use crate::theme::{Difficulty, SolutionStyle, Theme};

// grids at least this wide or tall also get the generic row/column sweep
const SWEEP_THRESHOLD: Coord = 10;

#[derive(Clone, Copy)]
enum Axis {
    Column,
    Row,
}

impl Axis {
    fn group_key(&self, location: Location) -> Coord {
        match self {
            Self::Column => location.0,
            Self::Row => location.1,
        }
    }

    fn order_key(&self, location: Location) -> Coord {
        match self {
            Self::Column => location.1,
            Self::Row => location.0,
        }
    }
}

/// Build a connected, crossing-free solution over the placed islands and
/// derive every island's required bridge count from it.
///
/// The theme picks the base style; a repair pass then stitches any islands
/// the style left stranded, and a tier-dependent share of bridges is
/// promoted to doubles before requirements are derived.
pub(crate) fn build_solution<R: Rng>(
    islands: &mut [Island],
    width: Coord,
    height: Coord,
    difficulty: Difficulty,
    theme: Theme,
    rng: &mut R,
) -> Result<Vec<Bridge>, GenerationError> {
    let occupied: HashSet<Location> = islands.iter().map(|island| island.location).collect();
    let mut bridges: Vec<Bridge> = Vec::new();
    let mut seen: HashSet<UnorderedPair<IslandId>> = HashSet::new();

    match theme.solution_style() {
        SolutionStyle::ColumnFirst => lattice_pass(
            islands,
            &mut bridges,
            &mut seen,
            &occupied,
            difficulty,
            Axis::Column,
        )?,
        SolutionStyle::RowFirst => lattice_pass(
            islands,
            &mut bridges,
            &mut seen,
            &occupied,
            difficulty,
            Axis::Row,
        )?,
        SolutionStyle::HubAndSpoke => {
            hub_pass(islands, width, height, &mut bridges, &mut seen, &occupied)?
        }
    }

    if width >= SWEEP_THRESHOLD || height >= SWEEP_THRESHOLD {
        sweep_pass(islands, &mut bridges, &mut seen, &occupied)?;
    }

    connectivity::connect_isolated(islands, &mut bridges)?;

    for bridge in bridges.iter_mut() {
        if rng.gen_bool(difficulty.double_bridge_chance()) {
            bridge.is_double = true;
        }
    }

    zero_repair(islands, &mut bridges, &mut seen, &occupied)?;

    for island in islands.iter_mut() {
        island.required_bridges = weighted_degree(island.id, &bridges) as u8;
    }

    Ok(bridges)
}

// Commit a single bridge between a and b unless the pair is already
// bridged, unaligned, obstructed, or would cross a committed bridge.
fn commit_if_legal(
    islands: &[Island],
    bridges: &mut Vec<Bridge>,
    seen: &mut HashSet<UnorderedPair<IslandId>>,
    occupied: &HashSet<Location>,
    a: &Island,
    b: &Island,
) -> Result<bool, GenerationError> {
    let pair = UnorderedPair(a.id, b.id);
    if seen.contains(&pair)
        || !geometry::are_aligned(a.location, b.location)
        || geometry::has_obstruction(a.location, b.location, occupied)
    {
        return Ok(false);
    }

    let candidate = Bridge::new(a, b, false)?;
    if bridges
        .iter()
        .any(|existing| geometry::bridges_intersect(islands, existing, &candidate))
    {
        return Ok(false);
    }

    seen.insert(pair);
    bridges.push(candidate);
    Ok(true)
}

// Connect islands line by line along `axis`, then link each pair of
// adjacent lines through one representative bridge. Tiers above easy retry
// alternative representative pairs before giving up on a line pair.
fn lattice_pass(
    islands: &[Island],
    bridges: &mut Vec<Bridge>,
    seen: &mut HashSet<UnorderedPair<IslandId>>,
    occupied: &HashSet<Location>,
    difficulty: Difficulty,
    axis: Axis,
) -> Result<(), GenerationError> {
    let mut lines: BTreeMap<Coord, Vec<&Island>> = BTreeMap::new();
    for island in islands {
        lines
            .entry(axis.group_key(island.location))
            .or_default()
            .push(island);
    }
    for line in lines.values_mut() {
        line.sort_by_key(|island| axis.order_key(island.location));
    }

    for line in lines.values() {
        for pair in line.windows(2) {
            commit_if_legal(islands, bridges, seen, occupied, pair[0], pair[1])?;
        }
    }

    let retry_alternatives = difficulty > Difficulty::Easy;
    let keys: Vec<Coord> = lines.keys().copied().collect();
    for adjacent in keys.windows(2) {
        let candidates = lines[&adjacent[0]]
            .iter()
            .cartesian_product(lines[&adjacent[1]].iter())
            .filter(|(a, b)| axis.order_key(a.location) == axis.order_key(b.location));

        for (a, b) in candidates {
            if commit_if_legal(islands, bridges, seen, occupied, a, b)? || !retry_alternatives {
                break;
            }
        }
    }

    Ok(())
}

// Star topology: every island aligned with the most central island links
// directly to it, nearest spokes first so obstruction cuts off the far ones.
fn hub_pass(
    islands: &[Island],
    width: Coord,
    height: Coord,
    bridges: &mut Vec<Bridge>,
    seen: &mut HashSet<UnorderedPair<IslandId>>,
    occupied: &HashSet<Location>,
) -> Result<(), GenerationError> {
    let center = Location(width / 2, height / 2);
    let Some(hub) = islands
        .iter()
        .min_by_key(|island| island.location.manhattan(center))
    else {
        return Ok(());
    };

    let mut spokes = islands
        .iter()
        .filter(|island| {
            island.id != hub.id && geometry::are_aligned(island.location, hub.location)
        })
        .collect::<Vec<_>>();
    spokes.sort_by_key(|spoke| spoke.location.manhattan(hub.location));

    for spoke in spokes {
        commit_if_legal(islands, bridges, seen, occupied, hub, spoke)?;
    }

    Ok(())
}

// Connect all consecutive islands sharing a row, then all sharing a column,
// each link independently subject to the crossing rules.
fn sweep_pass(
    islands: &[Island],
    bridges: &mut Vec<Bridge>,
    seen: &mut HashSet<UnorderedPair<IslandId>>,
    occupied: &HashSet<Location>,
) -> Result<(), GenerationError> {
    for axis in [Axis::Row, Axis::Column] {
        let mut lines: BTreeMap<Coord, Vec<&Island>> = BTreeMap::new();
        for island in islands {
            lines
                .entry(axis.group_key(island.location))
                .or_default()
                .push(island);
        }

        for line in lines.values_mut() {
            line.sort_by_key(|island| axis.order_key(island.location));
            for pair in line.windows(2) {
                commit_if_legal(islands, bridges, seen, occupied, pair[0], pair[1])?;
            }
        }
    }

    Ok(())
}

// Last chance for an island the finalized set left at zero connections: one
// additional aligned, crossing-free link to any island that has some.
fn zero_repair(
    islands: &[Island],
    bridges: &mut Vec<Bridge>,
    seen: &mut HashSet<UnorderedPair<IslandId>>,
    occupied: &HashSet<Location>,
) -> Result<(), GenerationError> {
    for island in islands {
        if weighted_degree(island.id, bridges) > 0 {
            continue;
        }

        let mut partners = islands
            .iter()
            .filter(|other| other.id != island.id && weighted_degree(other.id, bridges) > 0)
            .collect::<Vec<_>>();
        partners.sort_by_key(|partner| partner.location.manhattan(island.location));

        let mut linked = false;
        for partner in partners {
            if commit_if_legal(islands, bridges, seen, occupied, island, partner)? {
                linked = true;
                break;
            }
        }

        if !linked {
            return Err(GenerationError::IslandUnconnectable { island: island.id });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn island(id: usize, x: i32, y: i32) -> Island {
        Island {
            id: IslandId(id),
            location: Location(x, y),
            required_bridges: 0,
        }
    }

    #[test]
    fn solution_connects_and_numbers_every_island() {
        let mut islands = vec![
            island(0, 0, 0),
            island(1, 4, 0),
            island(2, 0, 4),
            island(3, 4, 4),
            island(4, 2, 0),
        ];
        let mut rng = StdRng::seed_from_u64(11);

        let bridges = build_solution(
            &mut islands,
            5,
            5,
            Difficulty::Medium,
            Theme::Classic,
            &mut rng,
        )
        .unwrap();

        assert!(connectivity::is_fully_connected(&islands, &bridges));
        for island in &islands {
            assert_eq!(
                island.required_bridges as u32,
                weighted_degree(island.id, &bridges)
            );
            assert!(island.required_bridges >= 1);
        }
    }

    #[test]
    fn committed_bridges_never_cross() {
        let mut islands = vec![
            island(0, 0, 0),
            island(1, 8, 0),
            island(2, 0, 8),
            island(3, 8, 8),
            island(4, 4, 0),
            island(5, 4, 8),
            island(6, 0, 4),
            island(7, 8, 4),
        ];
        let mut rng = StdRng::seed_from_u64(3);

        let bridges = build_solution(
            &mut islands,
            9,
            9,
            Difficulty::Expert,
            Theme::Sunset,
            &mut rng,
        )
        .unwrap();

        for (a, b) in bridges.iter().tuple_combinations() {
            assert!(!geometry::bridges_intersect(&islands, a, b));
        }
    }

    #[test]
    fn obstructed_pairs_are_skipped() {
        // three in a row; the outer pair must not be bridged directly
        let mut islands = vec![island(0, 0, 0), island(1, 2, 0), island(2, 4, 0)];
        let mut rng = StdRng::seed_from_u64(5);

        let bridges = build_solution(
            &mut islands,
            5,
            5,
            Difficulty::Easy,
            Theme::Classic,
            &mut rng,
        )
        .unwrap();

        assert!(!bridges
            .iter()
            .any(|bridge| bridge.endpoints() == UnorderedPair(IslandId(0), IslandId(2))));
    }

    #[test]
    fn unconnectable_layout_is_rejected() {
        let mut islands = vec![island(0, 0, 0), island(1, 3, 5)];
        let mut rng = StdRng::seed_from_u64(5);

        let result = build_solution(
            &mut islands,
            6,
            6,
            Difficulty::Easy,
            Theme::Classic,
            &mut rng,
        );
        assert!(result.is_err());
    }
}
