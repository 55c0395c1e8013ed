use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use strum::VariantArray;
use unordered_pair::UnorderedPair;

use crate::error::GenerationError;
use crate::geometry;
use crate::location::{Coord, Location};
use crate::theme::{Difficulty, Theme};

/// Identity of an island: its index into the owning puzzle's island list.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct IslandId(pub usize);

impl Display for IslandId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A numbered island on the grid.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Island {
    /// Identity, equal to this island's position in the puzzle's island list.
    pub id: IslandId,
    /// Grid position.
    pub location: Location,
    /// Bridge connections this island must end up with; a single bridge
    /// contributes 1 and a double contributes 2. Generated puzzles never
    /// carry an island requiring 0.
    pub required_bridges: u8,
}

/// Orientation of a bridge.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, VariantArray,
)]
pub enum Direction {
    /// Both endpoints share a row.
    Horizontal,
    /// Both endpoints share a column.
    Vertical,
}

/// A bridge between two aligned islands.
///
/// The endpoint pair is order-insensitive for identity purposes (see
/// [`endpoints`](Self::endpoints)), but the orientation it was built with is
/// kept. A double bridge is one record with `is_double` set, never two
/// parallel records.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Bridge {
    /// Island the bridge was drawn from.
    pub from: IslandId,
    /// Island the bridge was drawn to.
    pub to: IslandId,
    /// Orientation, implied by the endpoint locations.
    pub direction: Direction,
    /// Whether this bridge counts as two connections.
    pub is_double: bool,
}

impl Bridge {
    /// Build a bridge between two islands, deriving its orientation.
    ///
    /// Fails with [`GenerationError::DiagonalBridge`] if the islands share
    /// neither a row nor a column (or are the same island).
    pub fn new(from: &Island, to: &Island, is_double: bool) -> Result<Self, GenerationError> {
        let direction = geometry::direction_between(from.location, to.location).ok_or(
            GenerationError::DiagonalBridge {
                from: from.location,
                to: to.location,
            },
        )?;

        Ok(Self {
            from: from.id,
            to: to.id,
            direction,
            is_double,
        })
    }

    /// The order-insensitive endpoint identity of this bridge.
    pub fn endpoints(&self) -> UnorderedPair<IslandId> {
        UnorderedPair(self.from, self.to)
    }

    /// Connections this bridge contributes to each endpoint.
    pub fn weight(&self) -> u32 {
        if self.is_double {
            2
        } else {
            1
        }
    }

    pub(crate) fn touches(&self, id: IslandId) -> bool {
        self.from == id || self.to == id
    }
}

/// Bridge-weighted degree of `id` within `bridges`.
pub(crate) fn weighted_degree(id: IslandId, bridges: &[Bridge]) -> u32 {
    bridges
        .iter()
        .filter(|bridge| bridge.touches(id))
        .map(Bridge::weight)
        .sum()
}

/// A generated puzzle: the board, its islands, and one known-valid solution.
///
/// Instances are produced whole by [`Generator`](crate::Generator) and never
/// mutated afterward; the serialized form of this struct is the persisted
/// representation consumed by storage layers.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Puzzle {
    /// Grid width.
    pub width: Coord,
    /// Grid height.
    pub height: Coord,
    /// Difficulty tier the puzzle was generated for.
    pub difficulty: Difficulty,
    /// Cosmetic variant the puzzle was generated for.
    pub theme: Theme,
    /// All islands; `islands[i].id == IslandId(i)`.
    pub islands: Vec<Island>,
    /// One valid solution synthesized together with the islands.
    pub solution: Vec<Bridge>,
}

impl Puzzle {
    /// Look up an island by id.
    pub fn island(&self, id: IslandId) -> Option<&Island> {
        self.islands.get(id.0).filter(|island| island.id == id)
    }

    /// Bridge-weighted connection count of `id` within an arbitrary bridge
    /// set, e.g. a player's in-progress solution.
    pub fn current_bridge_count(&self, id: IslandId, bridges: &[Bridge]) -> u32 {
        weighted_degree(id, bridges)
    }

    /// Whether `id`'s connection count within `bridges` matches its
    /// requirement.
    pub fn is_complete(&self, id: IslandId, bridges: &[Bridge]) -> bool {
        self.island(id)
            .is_some_and(|island| weighted_degree(id, bridges) == island.required_bridges as u32)
    }
}
