//! Patterns and their raw `"<signature>,<DIRECTION>"` text form.

use std::fmt;
use std::str::FromStr;

use crate::{Angle, Direction};

/// A start direction plus an ordered sequence of turns.
///
/// Two patterns are signature-equal when their angle sequences match,
/// regardless of start direction.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Pattern {
    start_dir: Direction,
    angles: Vec<Angle>,
}

impl Pattern {
    pub fn new(start_dir: Direction, angles: Vec<Angle>) -> Self {
        Pattern { start_dir, angles }
    }

    /// Build a pattern from a signature string such as `"qaq"`.
    ///
    /// Returns `None` if any character is not an angle symbol.
    pub fn from_signature(start_dir: Direction, signature: &str) -> Option<Self> {
        let angles = signature
            .chars()
            .map(Angle::from_symbol)
            .collect::<Option<Vec<_>>>()?;
        Some(Pattern { start_dir, angles })
    }

    #[inline]
    pub fn start_dir(&self) -> Direction {
        self.start_dir
    }

    #[inline]
    pub fn angles(&self) -> &[Angle] {
        &self.angles
    }

    /// The angle symbols as a string.
    pub fn signature(&self) -> String {
        self.angles.iter().map(|a| a.symbol()).collect()
    }

    /// True when both patterns have the same angle sequence.
    pub fn same_signature(&self, other: &Pattern) -> bool {
        self.angles == other.angles
    }

    /// Absolute direction of every segment, starting with `start_dir`.
    ///
    /// The result always has `angles().len() + 1` entries.
    pub fn directions(&self) -> Vec<Direction> {
        let mut dirs = Vec::with_capacity(self.angles.len() + 1);
        let mut current = self.start_dir;
        dirs.push(current);
        for &angle in &self.angles {
            current = current.rotated_by(angle);
            dirs.push(current);
        }
        dirs
    }

    /// Same shape drawn from a different start direction.
    #[must_use]
    pub fn with_start_dir(&self, start_dir: Direction) -> Self {
        Pattern {
            start_dir,
            angles: self.angles.clone(),
        }
    }
}

impl fmt::Display for Pattern {
    /// The raw text form, e.g. `qaq,NORTH_EAST`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for angle in &self.angles {
            write!(f, "{angle}")?;
        }
        write!(f, ",{}", self.start_dir)
    }
}

/// Failure to read the raw `"<signature>,<DIRECTION>"` form.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParsePatternError {
    /// No comma separating signature and direction.
    MissingDirection,
    /// Unknown direction name.
    InvalidDirection(String),
    /// A signature character outside `wedsaq`.
    InvalidSymbol(char),
}

impl fmt::Display for ParsePatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePatternError::MissingDirection => {
                write!(f, "expected `<signature>,<DIRECTION>`")
            }
            ParsePatternError::InvalidDirection(name) => {
                write!(f, "unknown direction `{name}`")
            }
            ParsePatternError::InvalidSymbol(c) => write!(f, "invalid angle symbol `{c}`"),
        }
    }
}

impl std::error::Error for ParsePatternError {}

impl FromStr for Pattern {
    type Err = ParsePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (signature, direction) = s
            .trim()
            .rsplit_once(',')
            .ok_or(ParsePatternError::MissingDirection)?;
        let start_dir = Direction::from_name(direction)
            .ok_or_else(|| ParsePatternError::InvalidDirection(direction.trim().to_string()))?;
        let angles = signature
            .trim()
            .chars()
            .map(|c| Angle::from_symbol(c).ok_or(ParsePatternError::InvalidSymbol(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Pattern { start_dir, angles })
    }
}
