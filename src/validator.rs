use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::connectivity;
use crate::error::ValidationError;
use crate::geometry;
use crate::puzzle::{weighted_degree, Bridge, IslandId, Puzzle};

/// Fixed message carried by a report whose candidate set solves the puzzle.
pub const SOLVED_MESSAGE: &str = "Solved! Every island is satisfied and connected.";

const NOT_SOLVED_MESSAGE: &str = "The puzzle is not solved yet.";

/// One player-proposed bridge, as raw input.
///
/// No structure beyond island identity and multiplicity is assumed; the
/// validator derives and checks everything else.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CandidateBridge {
    /// Island the bridge is drawn from.
    pub from: IslandId,
    /// Island the bridge is drawn to.
    pub to: IslandId,
    /// Whether the bridge counts as two connections.
    pub is_double: bool,
}

/// Outcome of judging a candidate bridge set against a puzzle.
///
/// Wrong solutions are data, not failures: every rule violation found is
/// collected into [`errors`](Self::errors) and the scalar verdict fields,
/// and the caller decides what to do with them.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ValidationReport {
    /// No findings of any kind, every island complete, network connected.
    pub is_valid: bool,
    /// Every island's bridge count matches its requirement.
    pub is_complete: bool,
    /// The candidate bridges form a single connected network.
    pub is_fully_connected: bool,
    /// Islands whose bridge count does not match their requirement.
    pub incomplete_islands: Vec<IslandId>,
    /// Human-readable description of every finding, in rule order.
    pub errors: Vec<String>,
    /// [`SOLVED_MESSAGE`] on success, a fixed failure note otherwise.
    pub message: String,
}

/// Judge `candidates` against `puzzle`.
///
/// Pure and idempotent: the same puzzle and candidate set always produce an
/// identical report. Only malformed input (unknown islands, self-loops,
/// diagonal pairs) is an `Err`; see [`ValidationError`].
pub fn validate(
    puzzle: &Puzzle,
    candidates: &[CandidateBridge],
) -> Result<ValidationReport, ValidationError> {
    let resolved = resolve(puzzle, candidates)?;
    let mut errors = Vec::new();

    // 1. degree: every island's weighted count must match its requirement
    let mut incomplete_islands = Vec::new();
    for island in &puzzle.islands {
        let actual = weighted_degree(island.id, &resolved);
        if actual != island.required_bridges as u32 {
            incomplete_islands.push(island.id);
            errors.push(format!(
                "island {} at {} has {} of {} required bridge connections",
                island.id, island.location, actual, island.required_bridges
            ));
        }
    }

    // 2. multiplicity: a doubled connection is one record, never two
    let mut per_pair: BTreeMap<(IslandId, IslandId), usize> = BTreeMap::new();
    for bridge in &resolved {
        let key = (bridge.from.min(bridge.to), bridge.from.max(bridge.to));
        *per_pair.entry(key).or_default() += 1;
    }
    for ((a, b), count) in per_pair {
        if count > 1 {
            errors.push(format!(
                "islands {a} and {b} are joined by {count} bridge records; a double bridge is a single record"
            ));
        }
    }

    // 3. crossing
    for (a, b) in resolved.iter().tuple_combinations() {
        if geometry::bridges_intersect(&puzzle.islands, a, b) {
            errors.push(format!(
                "bridge {}-{} crosses bridge {}-{}",
                a.from, a.to, b.from, b.to
            ));
        }
    }

    // 4. connectivity
    let is_fully_connected = connectivity::is_fully_connected(&puzzle.islands, &resolved);
    if !is_fully_connected {
        errors.push("the bridges do not connect all islands into one network".to_owned());
    }

    let is_complete = incomplete_islands.is_empty();
    let is_valid = errors.is_empty() && is_complete && is_fully_connected;

    Ok(ValidationReport {
        is_valid,
        is_complete,
        is_fully_connected,
        incomplete_islands,
        errors,
        message: if is_valid { SOLVED_MESSAGE } else { NOT_SOLVED_MESSAGE }.to_owned(),
    })
}

// Turn raw candidate records into bridges, rejecting anything the data
// model cannot even represent.
fn resolve(
    puzzle: &Puzzle,
    candidates: &[CandidateBridge],
) -> Result<Vec<Bridge>, ValidationError> {
    let mut resolved = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let from = puzzle
            .island(candidate.from)
            .ok_or(ValidationError::UnknownIsland(candidate.from))?;
        let to = puzzle
            .island(candidate.to)
            .ok_or(ValidationError::UnknownIsland(candidate.to))?;

        if from.id == to.id {
            return Err(ValidationError::SelfLoop(from.id));
        }

        let direction = geometry::direction_between(from.location, to.location).ok_or(
            ValidationError::DiagonalBridge {
                from: from.id,
                to: to.id,
            },
        )?;

        resolved.push(Bridge {
            from: from.id,
            to: to.id,
            direction,
            is_double: candidate.is_double,
        });
    }

    Ok(resolved)
}
