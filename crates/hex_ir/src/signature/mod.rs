//! Utilities over the six-symbol turn alphabet.
//!
//! Rotating by `k` sixth-turns shifts the start direction and every angle
//! symbol `k` places along the cyclic order `w e d s a q`. Rotating by six
//! (or any multiple) is the identity.

use crate::{Angle, Direction, Pattern};

/// Rotate one signature symbol. Non-angle characters are passed through.
pub fn rotate_symbol(symbol: char, steps: i32) -> char {
    Angle::from_symbol(symbol).map_or(symbol, |angle| angle.rotated(steps).symbol())
}

/// Rotate every symbol of a signature string.
pub fn rotate_signature(signature: &str, steps: i32) -> String {
    signature.chars().map(|c| rotate_symbol(c, steps)).collect()
}

/// Rotate a pattern's start direction and every angle by `steps`.
pub fn rotate_pattern(pattern: &Pattern, steps: i32) -> Pattern {
    Pattern::new(
        pattern.start_dir().rotated(steps),
        pattern.angles().iter().map(|a| a.rotated(steps)).collect(),
    )
}

/// Compass direction denoted by a single signature symbol.
pub fn symbol_to_direction(symbol: char) -> Option<Direction> {
    Angle::from_symbol(symbol).map(Angle::to_direction)
}

/// Signature symbol denoting a compass direction.
pub fn direction_to_symbol(direction: Direction) -> char {
    Angle::from_direction(direction).symbol()
}

/// True if `signature` consists only of angle symbols.
pub fn is_signature(signature: &str) -> bool {
    signature.chars().all(|c| Angle::from_symbol(c).is_some())
}
