//! Hand-designed island layouts for the grid sizes the product ships.
//!
//! Layouts are plain data so placement stays swappable and testable. Within
//! each layout every coordinate shares a row or column with at least one
//! earlier coordinate, which keeps any difficulty-scaled prefix of the list
//! repairable into a single network.

use crate::location::Coord;

pub(crate) type Layout = &'static [(Coord, Coord)];

pub(crate) const SIDE_5: &[Layout] = &[
    // border ring
    &[
        (0, 0),
        (4, 0),
        (0, 4),
        (4, 4),
        (2, 0),
        (2, 4),
        (0, 2),
        (4, 2),
    ],
    // plus sign with anchored corners
    &[
        (2, 2),
        (2, 0),
        (2, 4),
        (0, 2),
        (4, 2),
        (0, 0),
        (4, 4),
        (4, 0),
    ],
    // inner box with spurs
    &[(1, 1), (3, 1), (1, 3), (3, 3), (0, 1), (4, 3), (3, 4)],
    // two rails and a rung
    &[(0, 1), (2, 1), (4, 1), (4, 3), (2, 3), (0, 3), (2, 0)],
];

pub(crate) const SIDE_8: &[Layout] = &[
    // three-by-three lattice with an off-grid pair
    &[
        (0, 0),
        (3, 0),
        (7, 0),
        (0, 3),
        (3, 3),
        (7, 3),
        (0, 7),
        (3, 7),
        (7, 7),
        (5, 0),
        (5, 7),
    ],
    // ring with an interior shelf
    &[
        (0, 0),
        (7, 0),
        (0, 7),
        (7, 7),
        (0, 4),
        (7, 4),
        (2, 0),
        (2, 4),
        (5, 4),
        (5, 7),
    ],
    // inset lattice
    &[
        (1, 1),
        (4, 1),
        (7, 1),
        (1, 4),
        (4, 4),
        (7, 4),
        (1, 7),
        (4, 7),
        (7, 7),
        (4, 3),
    ],
    // spiral walk
    &[
        (0, 0),
        (6, 0),
        (6, 5),
        (1, 5),
        (1, 2),
        (4, 2),
        (4, 4),
        (0, 5),
        (6, 2),
        (0, 3),
    ],
];

pub(crate) const SIDE_12: &[Layout] = &[
    // wide lattice with a hanging spur
    &[
        (0, 0),
        (4, 0),
        (8, 0),
        (11, 0),
        (0, 4),
        (4, 4),
        (8, 4),
        (11, 4),
        (0, 8),
        (4, 8),
        (11, 8),
        (0, 11),
        (4, 11),
        (8, 11),
        (11, 11),
        (8, 7),
    ],
    // ring crossed by a full spine
    &[
        (0, 0),
        (11, 0),
        (11, 11),
        (0, 11),
        (0, 6),
        (11, 6),
        (6, 0),
        (6, 11),
        (6, 6),
        (3, 6),
        (9, 6),
        (6, 3),
        (6, 9),
        (3, 0),
    ],
    // staircase with mirrored returns
    &[
        (0, 0),
        (3, 0),
        (3, 3),
        (6, 3),
        (6, 6),
        (9, 6),
        (9, 9),
        (11, 9),
        (0, 9),
        (0, 6),
        (11, 0),
        (11, 3),
        (8, 0),
        (8, 9),
    ],
    // three columns, four shelves
    &[
        (0, 0),
        (5, 0),
        (11, 0),
        (0, 3),
        (5, 3),
        (11, 3),
        (0, 7),
        (5, 7),
        (11, 7),
        (0, 11),
        (5, 11),
        (11, 11),
        (8, 3),
        (8, 11),
    ],
];

pub(crate) const SIDE_15: &[Layout] = &[
    // four-by-four lattice with spurs
    &[
        (0, 0),
        (5, 0),
        (10, 0),
        (14, 0),
        (0, 5),
        (5, 5),
        (10, 5),
        (14, 5),
        (0, 10),
        (5, 10),
        (10, 10),
        (14, 10),
        (0, 14),
        (5, 14),
        (10, 14),
        (14, 14),
        (2, 0),
        (2, 10),
        (7, 5),
        (7, 14),
    ],
    // coarse lattice with an inner quad
    &[
        (0, 0),
        (7, 0),
        (14, 0),
        (0, 4),
        (7, 4),
        (14, 4),
        (0, 9),
        (7, 9),
        (14, 9),
        (0, 14),
        (7, 14),
        (14, 14),
        (3, 4),
        (10, 4),
        (3, 9),
        (10, 9),
        (5, 0),
        (5, 14),
    ],
    // ring, cross, and spokes
    &[
        (0, 0),
        (14, 0),
        (14, 14),
        (0, 14),
        (7, 0),
        (7, 14),
        (0, 7),
        (14, 7),
        (7, 7),
        (3, 0),
        (11, 0),
        (3, 14),
        (11, 14),
        (0, 3),
        (0, 11),
        (14, 3),
        (14, 11),
        (7, 3),
        (7, 11),
        (3, 7),
        (11, 7),
    ],
    // staggered shelves
    &[
        (1, 1),
        (6, 1),
        (13, 1),
        (1, 5),
        (4, 5),
        (9, 5),
        (13, 5),
        (4, 8),
        (6, 8),
        (9, 8),
        (1, 12),
        (6, 12),
        (9, 12),
        (13, 12),
        (13, 8),
        (1, 8),
    ],
];

/// The layout catalog for a supported pattern size, if any.
pub(crate) fn catalog_for(width: Coord, height: Coord) -> Option<&'static [Layout]> {
    match (width, height) {
        (5, 5) => Some(SIDE_5),
        (8, 8) => Some(SIDE_8),
        (12, 12) => Some(SIDE_12),
        (15, 15) => Some(SIDE_15),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_prefix_aligned(layouts: &[Layout], side: Coord) {
        for layout in layouts {
            for (i, &(x, y)) in layout.iter().enumerate() {
                assert!(x < side && y < side, "({x}, {y}) out of bounds for {side}");
                if i > 0 {
                    assert!(
                        layout[..i].iter().any(|&(px, py)| px == x || py == y),
                        "({x}, {y}) aligns with no earlier island"
                    );
                }
            }
        }
    }

    #[test]
    fn every_layout_is_prefix_connectable() {
        assert_prefix_aligned(SIDE_5, 5);
        assert_prefix_aligned(SIDE_8, 8);
        assert_prefix_aligned(SIDE_12, 12);
        assert_prefix_aligned(SIDE_15, 15);
    }

    #[test]
    fn layouts_have_no_duplicate_coordinates() {
        for layouts in [SIDE_5, SIDE_8, SIDE_12, SIDE_15] {
            for layout in layouts {
                let mut seen = std::collections::HashSet::new();
                for coordinate in *layout {
                    assert!(seen.insert(coordinate), "{coordinate:?} appears twice");
                }
            }
        }
    }
}
