#![warn(missing_docs)]

//! # `pontifex`
//!
//! A generator and solution validator for [Hashiwokakero](https://en.wikipedia.org/wiki/Hashiwokakero)
//! ("Bridges") puzzles: numbered islands on a grid, connected by horizontal
//! and vertical bridges, single or double, such that every island's bridge
//! count matches its number, no bridges cross, and all islands form one
//! network.
//!
//! Generate with [`generate`] or, for seeded and tuned generation, with a
//! [`Generator`] built from a [`GeneratorConfig`]. Judge a player's bridge
//! set against a stored [`Puzzle`] with [`validate`], which returns a
//! [`ValidationReport`] rather than failing on wrong answers.
//!
//! # Internals
//! Generation walks an explicit bounded state machine: place islands (from
//! a hand-designed layout catalog on the shipped square sizes, randomly with
//! an alignment guarantee elsewhere), synthesize a solution in one of three
//! theme-keyed styles, repair connectivity, then re-validate the whole
//! attempt and retry from scratch on any geometric inconsistency. A puzzle
//! is only ever exposed once its solution satisfies every structural
//! invariant, so stored required-bridge counts are always realizable.
//!
//! Reachability questions are answered by depth-first traversal over a
//! [`petgraph`] graph keyed by island id; bridge endpoint identity is
//! order-insensitive via [`unordered_pair`].

pub use error::{GenerationError, ValidationError};
pub use generator::{generate, Generator, GeneratorConfig, DEFAULT_MAX_ATTEMPTS, SUPPORTED_SIDES};
pub use location::Location;
pub use puzzle::{Bridge, Direction, Island, IslandId, Puzzle};
pub use theme::{Difficulty, Theme};
pub use validator::{validate, CandidateBridge, ValidationReport, SOLVED_MESSAGE};

pub(crate) mod connectivity;
mod error;
mod generator;
pub(crate) mod geometry;
mod location;
pub(crate) mod patterns;
pub(crate) mod placement;
mod puzzle;
pub(crate) mod synthesis;
mod tests;
mod theme;
mod validator;
