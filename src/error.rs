use thiserror::Error;

use crate::location::{Coord, Location};
use crate::puzzle::IslandId;

/// Reasons puzzle generation may fail.
///
/// Everything except [`UnsupportedDimensions`](Self::UnsupportedDimensions)
/// is recovered internally by retrying the whole attempt; callers only see
/// these wrapped in [`AttemptsExhausted`](Self::AttemptsExhausted) once the
/// retry ceiling is spent.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The requested grid falls outside the supported size range.
    #[error("grid {width}x{height} is outside the supported 5..=20 range")]
    UnsupportedDimensions {
        /// Requested width.
        width: Coord,
        /// Requested height.
        height: Coord,
    },
    /// Two islands sharing neither a row nor a column cannot be bridged.
    #[error("no straight bridge joins {from} and {to}")]
    DiagonalBridge {
        /// One endpoint.
        from: Location,
        /// The other endpoint.
        to: Location,
    },
    /// Two bridges in a synthesized solution cross.
    #[error("bridges {first:?} and {second:?} cross")]
    BridgeCrossing {
        /// Endpoints of one bridge.
        first: (IslandId, IslandId),
        /// Endpoints of the other.
        second: (IslandId, IslandId),
    },
    /// An island could not be linked into the solution network.
    #[error("island {island} could not be connected to the rest of the network")]
    IslandUnconnectable {
        /// The island left isolated.
        island: IslandId,
    },
    /// The synthesized solution does not reach every island.
    #[error("synthesized solution does not connect all islands")]
    DisconnectedSolution,
    /// An island's stored requirement disagrees with its solution degree.
    #[error("island {island} requires {required} bridges but the solution provides {actual}")]
    RequiredCountMismatch {
        /// The inconsistent island.
        island: IslandId,
        /// Stored requirement.
        required: u8,
        /// Bridge-weighted degree actually present.
        actual: u32,
    },
    /// Every attempt failed; generation gives up with the last failure attached.
    #[error("gave up after {attempts} generation attempts")]
    AttemptsExhausted {
        /// Attempts actually made.
        attempts: usize,
        /// The failure that ended the final attempt.
        #[source]
        source: Box<GenerationError>,
    },
}

/// Malformed player input handed to [`validate`](crate::validate).
///
/// These are input errors in the sense of being unprocessable, as opposed to
/// wrong-but-well-formed solutions, which come back as findings inside a
/// [`ValidationReport`](crate::ValidationReport).
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A candidate bridge references an island the puzzle does not contain.
    #[error("candidate bridge references unknown island {0}")]
    UnknownIsland(IslandId),
    /// A candidate bridge starts and ends on the same island.
    #[error("candidate bridge connects island {0} to itself")]
    SelfLoop(IslandId),
    /// A candidate bridge connects two islands sharing neither axis.
    #[error("candidate bridge between islands {from} and {to} is diagonal")]
    DiagonalBridge {
        /// One endpoint id.
        from: IslandId,
        /// The other endpoint id.
        to: IslandId,
    },
}
