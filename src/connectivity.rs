use std::collections::HashSet;

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Dfs;

use crate::error::GenerationError;
use crate::geometry;
use crate::location::Location;
use crate::puzzle::{Bridge, Island, IslandId};

/// One undirected edge per bridge; multiplicity is irrelevant to
/// reachability, so a double bridge contributes the same single edge.
pub(crate) fn adjacency(islands: &[Island], bridges: &[Bridge]) -> UnGraphMap<IslandId, ()> {
    let mut graph = UnGraphMap::with_capacity(islands.len(), bridges.len());

    for island in islands {
        graph.add_node(island.id);
    }
    for bridge in bridges {
        graph.add_edge(bridge.from, bridge.to, ());
    }

    graph
}

/// Islands reachable from the first island by depth-first traversal.
pub(crate) fn reachable_from_first(islands: &[Island], bridges: &[Bridge]) -> HashSet<IslandId> {
    let mut reached = HashSet::with_capacity(islands.len());
    let Some(start) = islands.first() else {
        return reached;
    };

    let graph = adjacency(islands, bridges);
    let mut dfs = Dfs::new(&graph, start.id);
    while let Some(id) = dfs.next(&graph) {
        reached.insert(id);
    }

    reached
}

/// True iff every island is reachable from every other through `bridges`.
/// Empty and single-island sets are trivially connected.
pub(crate) fn is_fully_connected(islands: &[Island], bridges: &[Bridge]) -> bool {
    if islands.len() <= 1 {
        return true;
    }

    reachable_from_first(islands, bridges).len() == islands.len()
}

/// Generation-only repair: link stranded islands into the network one bridge
/// at a time until a single component remains.
///
/// Each round commits the nearest (stranded, reached) pair that is aligned,
/// unobstructed, and crossing-free. When every such corridor is blocked by
/// committed bridges, the blockers are removed instead, provided the network
/// only grows by the exchange. As a last resort the nearest pair is tried
/// regardless of alignment; a diagonal pair cannot form a bridge, so that
/// path fails the attempt instead of emitting an illegal edge. Every round
/// grows the network, and rounds are bounded by twice the island count.
pub(crate) fn connect_isolated(
    islands: &[Island],
    bridges: &mut Vec<Bridge>,
) -> Result<(), GenerationError> {
    let occupied: HashSet<Location> = islands.iter().map(|island| island.location).collect();
    let budget = islands.len() * 2;
    let mut rounds = 0usize;

    loop {
        let reached = reachable_from_first(islands, bridges);
        if reached.len() == islands.len() {
            return Ok(());
        }

        let strays = islands
            .iter()
            .filter(|island| !reached.contains(&island.id))
            .collect::<Vec<_>>();
        let partners = islands
            .iter()
            .filter(|island| reached.contains(&island.id))
            .collect::<Vec<_>>();

        rounds += 1;
        if rounds > budget {
            return Err(GenerationError::IslandUnconnectable {
                island: strays[0].id,
            });
        }

        let mut corridors = strays
            .iter()
            .cartesian_product(partners.iter())
            .filter(|(stray, partner)| {
                geometry::are_aligned(stray.location, partner.location)
                    && !geometry::has_obstruction(stray.location, partner.location, &occupied)
            })
            .collect::<Vec<_>>();
        corridors.sort_by_key(|(stray, partner)| stray.location.manhattan(partner.location));

        let mut committed = false;
        for (stray, partner) in &corridors {
            let candidate = Bridge::new(stray, partner, false)?;
            if bridges
                .iter()
                .any(|existing| geometry::bridges_intersect(islands, existing, &candidate))
            {
                continue;
            }

            bridges.push(candidate);
            committed = true;
            break;
        }
        if committed {
            continue;
        }

        // every corridor crosses committed bridges; trade the blockers away
        // when the network does not lose anything by it
        for (stray, partner) in &corridors {
            let candidate = Bridge::new(stray, partner, false)?;
            let mut trial = bridges
                .iter()
                .filter(|existing| !geometry::bridges_intersect(islands, existing, &candidate))
                .copied()
                .collect::<Vec<_>>();
            trial.push(candidate);

            let regrown = reachable_from_first(islands, &trial);
            if regrown.len() > reached.len() && reached.is_subset(&regrown) {
                *bridges = trial;
                committed = true;
                break;
            }
        }
        if committed {
            continue;
        }

        // best effort: nearest stranded/reached pair even without alignment
        let (stray, partner) = strays
            .iter()
            .cartesian_product(partners.iter())
            .min_by_key(|(stray, partner)| stray.location.manhattan(partner.location))
            .unwrap();
        bridges.push(Bridge::new(stray, partner, false)?);
    }
}

#[cfg(test)]
mod tests {
    use unordered_pair::UnorderedPair;

    use super::*;
    use crate::puzzle::Direction;

    fn island(id: usize, x: i32, y: i32) -> Island {
        Island {
            id: IslandId(id),
            location: Location(x, y),
            required_bridges: 1,
        }
    }

    #[test]
    fn trivial_sets_are_connected() {
        assert!(is_fully_connected(&[], &[]));
        assert!(is_fully_connected(&[island(0, 3, 3)], &[]));
    }

    #[test]
    fn bridgeless_islands_are_disconnected() {
        let islands = vec![island(0, 0, 0), island(1, 0, 4)];
        assert!(!is_fully_connected(&islands, &[]));
    }

    #[test]
    fn doubles_do_not_change_reachability() {
        let islands = vec![island(0, 0, 0), island(1, 0, 4)];
        let single = vec![Bridge::new(&islands[0], &islands[1], false).unwrap()];
        let double = vec![Bridge::new(&islands[0], &islands[1], true).unwrap()];

        assert!(is_fully_connected(&islands, &single));
        assert!(is_fully_connected(&islands, &double));
    }

    #[test]
    fn repair_links_nearest_aligned_partner() {
        let islands = vec![island(0, 0, 0), island(1, 6, 0), island(2, 6, 3)];
        let mut bridges = vec![Bridge::new(&islands[0], &islands[1], false).unwrap()];

        connect_isolated(&islands, &mut bridges).unwrap();

        assert!(is_fully_connected(&islands, &bridges));
        let added = bridges.last().unwrap();
        assert_eq!(added.endpoints(), UnorderedPair(IslandId(1), IslandId(2)));
        assert_eq!(added.direction, Direction::Vertical);
    }

    #[test]
    fn repair_fails_cleanly_without_aligned_partner() {
        // the stranded island shares no axis with anything
        let islands = vec![island(0, 0, 0), island(1, 3, 5)];
        let mut bridges = Vec::new();

        let err = connect_isolated(&islands, &mut bridges).unwrap_err();
        assert!(matches!(err, GenerationError::DiagonalBridge { .. }));
    }
}
