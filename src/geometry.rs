use std::collections::HashSet;

use crate::location::Location;
use crate::puzzle::{Bridge, Direction, Island};

/// True iff the two locations share a row or a column.
pub(crate) fn are_aligned(a: Location, b: Location) -> bool {
    a.0 == b.0 || a.1 == b.1
}

/// Orientation of a straight bridge between `a` and `b`, or [`None`] for a
/// diagonal (or degenerate) pair.
pub(crate) fn direction_between(a: Location, b: Location) -> Option<Direction> {
    if a == b {
        return None;
    }

    if a.0 == b.0 {
        Some(Direction::Vertical)
    } else if a.1 == b.1 {
        Some(Direction::Horizontal)
    } else {
        None
    }
}

/// True if any occupied coordinate lies strictly between the aligned pair
/// `a`/`b` on their connecting line. Diagonal pairs are never clear.
pub(crate) fn has_obstruction(a: Location, b: Location, occupied: &HashSet<Location>) -> bool {
    match direction_between(a, b) {
        Some(Direction::Horizontal) => {
            let (lo, hi) = (a.0.min(b.0), a.0.max(b.0));
            ((lo + 1)..hi).any(|x| occupied.contains(&Location(x, a.1)))
        }
        Some(Direction::Vertical) => {
            let (lo, hi) = (a.1.min(b.1), a.1.max(b.1));
            ((lo + 1)..hi).any(|y| occupied.contains(&Location(a.0, y)))
        }
        None => true,
    }
}

// One horizontal and one vertical span cross iff the vertical x is strictly
// inside the horizontal x-range and the horizontal y strictly inside the
// vertical y-range. Strict on both counts: meeting at a shared island is
// not a crossing.
pub(crate) fn spans_cross(horizontal: (Location, Location), vertical: (Location, Location)) -> bool {
    let (hx_lo, hx_hi) = (
        horizontal.0 .0.min(horizontal.1 .0),
        horizontal.0 .0.max(horizontal.1 .0),
    );
    let hy = horizontal.0 .1;
    let (vy_lo, vy_hi) = (
        vertical.0 .1.min(vertical.1 .1),
        vertical.0 .1.max(vertical.1 .1),
    );
    let vx = vertical.0 .0;

    hx_lo < vx && vx < hx_hi && vy_lo < hy && hy < vy_hi
}

/// True iff `a` and `b` cross illegally. Bridges of the same orientation
/// never cross; island ids must index `islands`.
pub(crate) fn bridges_intersect(islands: &[Island], a: &Bridge, b: &Bridge) -> bool {
    if a.direction == b.direction {
        return false;
    }

    let span =
        |bridge: &Bridge| (islands[bridge.from.0].location, islands[bridge.to.0].location);

    match a.direction {
        Direction::Horizontal => spans_cross(span(a), span(b)),
        Direction::Vertical => spans_cross(span(b), span(a)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::IslandId;

    fn island(id: usize, x: i32, y: i32) -> Island {
        Island {
            id: IslandId(id),
            location: Location(x, y),
            required_bridges: 1,
        }
    }

    #[test]
    fn alignment_and_direction() {
        assert!(are_aligned(Location(0, 0), Location(0, 7)));
        assert!(are_aligned(Location(3, 2), Location(9, 2)));
        assert!(!are_aligned(Location(1, 1), Location(2, 2)));

        assert_eq!(
            direction_between(Location(4, 1), Location(4, 6)),
            Some(Direction::Vertical)
        );
        assert_eq!(
            direction_between(Location(0, 3), Location(5, 3)),
            Some(Direction::Horizontal)
        );
        assert_eq!(direction_between(Location(0, 0), Location(3, 4)), None);
        assert_eq!(direction_between(Location(2, 2), Location(2, 2)), None);
    }

    #[test]
    fn obstruction_strictly_between() {
        let occupied: HashSet<Location> =
            [Location(0, 0), Location(2, 0), Location(4, 0)].into_iter().collect();

        assert!(has_obstruction(Location(0, 0), Location(4, 0), &occupied));
        // endpoints themselves do not obstruct
        assert!(!has_obstruction(Location(0, 0), Location(2, 0), &occupied));
        assert!(!has_obstruction(Location(2, 0), Location(4, 0), &occupied));
    }

    #[test]
    fn perpendicular_overlap_crosses() {
        // horizontal (0,0)-(4,0) against vertical (2,-2)-(2,2)
        assert!(spans_cross(
            (Location(0, 0), Location(4, 0)),
            (Location(2, -2), Location(2, 2))
        ));
    }

    #[test]
    fn disjoint_ranges_do_not_cross() {
        // vertical x = 5 sits outside the horizontal x-range 0..4
        assert!(!spans_cross(
            (Location(0, 0), Location(4, 0)),
            (Location(5, -2), Location(5, 2))
        ));
    }

    #[test]
    fn shared_endpoint_is_not_a_crossing() {
        assert!(!spans_cross(
            (Location(0, 0), Location(4, 0)),
            (Location(4, 0), Location(4, 5))
        ));
        assert!(!spans_cross(
            (Location(0, 0), Location(4, 0)),
            (Location(0, -3), Location(0, 3))
        ));
    }

    #[test]
    fn bridge_level_intersection() {
        let islands = vec![
            island(0, 0, 0),
            island(1, 4, 0),
            island(2, 2, -2),
            island(3, 2, 2),
        ];
        let horizontal = Bridge::new(&islands[0], &islands[1], false).unwrap();
        let vertical = Bridge::new(&islands[2], &islands[3], true).unwrap();

        assert!(bridges_intersect(&islands, &horizontal, &vertical));
        assert!(bridges_intersect(&islands, &vertical, &horizontal));
        assert!(!bridges_intersect(&islands, &horizontal, &horizontal));
    }
}
