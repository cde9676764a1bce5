//! Hexbook pattern registry.
//!
//! This crate provides:
//! - Host interfaces: [`ActionTable`] (the game's known actions) and
//!   [`SolvedPatternOracle`] (per-world pattern solutions)
//! - [`PatternInfo`]: one registry entry
//! - [`PatternRegistry`]: lookup tables built once from the action table,
//!   with [`PatternRegistry::resolve`] (pattern to text line) and
//!   [`PatternRegistry::parse_line`] (text line to patterns)
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized ──initialize()──► Initialized
//!                                   │  initialize() again: no-op
//!                                   └─ reinitialize(): rebuild tables
//! ```

mod host;
mod info;
mod parse;
mod registry;
mod special;

pub use host::{
    ActionEntry, ActionTable, NoSolvedPatterns, ResourceId, SolvedPatternMap,
    SolvedPatternOracle, SolvedSignature,
};
pub use info::{title_case_fallback, PatternInfo};
pub use parse::{strip_comment, LineError};
pub use registry::PatternRegistry;
pub use special::{CLOSE_BRACKET, OPEN_BRACKET};

#[cfg(test)]
mod fixture;
