//! Hexbook IR - core pattern types.
//!
//! This crate contains the data structures every other hexbook crate
//! builds on:
//! - [`Direction`]: one of six absolute compass directions on a hex grid
//! - [`Angle`]: one of six relative turns, each written as a single symbol
//! - [`Pattern`]: a start direction plus an ordered sequence of angles
//! - [`signature`]: rotation and direction-mapping utilities over the
//!   six-symbol turn alphabet
//!
//! All types are plain values: `Clone, Eq, Hash, Debug`, immutable once
//! constructed.

mod direction;
mod pattern;
pub mod signature;

pub use direction::{Angle, Direction};
pub use pattern::{ParsePatternError, Pattern};
