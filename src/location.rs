use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub(crate) type Coord = i32;

/// A location `(x, y)` on a grid. The top left corner is `Location(0, 0)`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// Manhattan distance to `other`.
    pub fn manhattan(&self, other: Location) -> u32 {
        self.0.abs_diff(other.0) + self.1.abs_diff(other.1)
    }

    // (row, column) indexing for array-backed occupancy; callers guarantee
    // non-negative coordinates
    pub(crate) fn as_index(&self) -> (usize, usize) {
        (self.1 as usize, self.0 as usize)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
