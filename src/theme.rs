use serde::{Deserialize, Serialize};
use strum::VariantArray;

use crate::location::Coord;

/// The four ordered difficulty tiers.
///
/// Difficulty only tunes how much material a puzzle carries (island count,
/// double-bridge frequency); it never changes the correctness rules.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, VariantArray,
)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    // probability that a committed bridge is promoted to a double
    pub(crate) fn double_bridge_chance(&self) -> f64 {
        match self {
            Self::Easy => 0.10,
            Self::Medium => 0.20,
            Self::Hard => 0.35,
            Self::Expert => 0.45,
        }
    }

    /// Island count targeted by generic placement for a `width` x `height`
    /// grid. Large hard/expert grids get explicit floors so their puzzles
    /// stay combinatorially rich.
    pub(crate) fn island_target(&self, width: Coord, height: Coord) -> usize {
        let area = (width * height) as usize;
        let base = match self {
            Self::Easy => area / 8,
            Self::Medium => area / 6,
            Self::Hard => area / 5,
            Self::Expert => area / 4,
        }
        .max(4);

        let floored = match (self, area >= 144) {
            (Self::Hard, true) => base.max(16),
            (Self::Expert, true) => base.max(18),
            _ => base,
        };

        floored.min(area / 3).min(30)
    }

    // fraction of a pattern layout actually used, as (numerator, denominator)
    pub(crate) fn layout_share(&self) -> (usize, usize) {
        match self {
            Self::Easy => (5, 8),
            Self::Medium => (3, 4),
            Self::Hard => (7, 8),
            Self::Expert => (1, 1),
        }
    }
}

/// Cosmetic puzzle variants.
///
/// A theme seeds variety: its ordinal selects the placement layout for
/// pattern-sized grids (`index % catalog size`) and the solution style
/// (`index % 3`). Themes never affect the puzzle rules.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, VariantArray,
)]
pub enum Theme {
    Classic,
    Ocean,
    Sunset,
    Forest,
    Desert,
    Glacier,
    Volcano,
    Meadow,
    Harbor,
    Lagoon,
    Canyon,
    Tundra,
    Reef,
    Orchard,
    Citadel,
    Aurora,
}

impl Theme {
    /// Stable ordinal of this theme, used to pick layouts and styles.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub(crate) fn solution_style(&self) -> SolutionStyle {
        match self.index() % 3 {
            0 => SolutionStyle::ColumnFirst,
            1 => SolutionStyle::RowFirst,
            _ => SolutionStyle::HubAndSpoke,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Classic
    }
}

// How a base solution is laid over the placed islands before repair.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SolutionStyle {
    ColumnFirst,
    RowFirst,
    HubAndSpoke,
}
