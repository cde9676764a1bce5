//! Absolute directions and relative turn angles.
//!
//! Both enums are cyclic groups of order six. Directions are listed
//! clockwise starting at `NORTH_EAST`; angles are listed clockwise starting
//! at `Forward`. Rotating a direction by an angle adds their ordinals
//! modulo six.

use std::fmt;

/// One of the six compass directions on a hex grid, clockwise order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum Direction {
    NorthEast,
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions in clockwise order.
    pub const ALL: [Direction; 6] = [
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Position in the clockwise cycle (0 = `NorthEast`).
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Direction at the given position, wrapping modulo six.
    #[inline]
    pub const fn from_ordinal(ordinal: i32) -> Self {
        Self::ALL[ordinal.rem_euclid(6) as usize]
    }

    /// Rotate clockwise by `steps` sixth-turns (negative = counter-clockwise).
    #[inline]
    #[must_use]
    pub const fn rotated(self, steps: i32) -> Self {
        Self::from_ordinal(self.ordinal() as i32 + steps)
    }

    /// Rotate by a relative turn.
    #[inline]
    #[must_use]
    pub const fn rotated_by(self, angle: Angle) -> Self {
        self.rotated(angle.ordinal() as i32)
    }

    /// The turn that takes `reference` to `self`.
    #[inline]
    pub const fn angle_from(self, reference: Direction) -> Angle {
        Angle::from_ordinal(self.ordinal() as i32 - reference.ordinal() as i32)
    }

    /// Upper-snake-case name used in the raw text form (`"NORTH_EAST"`).
    pub const fn name(self) -> &'static str {
        match self {
            Direction::NorthEast => "NORTH_EAST",
            Direction::East => "EAST",
            Direction::SouthEast => "SOUTH_EAST",
            Direction::SouthWest => "SOUTH_WEST",
            Direction::West => "WEST",
            Direction::NorthWest => "NORTH_WEST",
        }
    }

    /// Parse a direction name, ignoring ASCII case and surrounding space.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|dir| dir.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the six relative turns between consecutive pattern segments.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum Angle {
    Forward,
    Right,
    RightBack,
    Back,
    LeftBack,
    Left,
}

impl Angle {
    /// All angles in their cyclic order.
    pub const ALL: [Angle; 6] = [
        Angle::Forward,
        Angle::Right,
        Angle::RightBack,
        Angle::Back,
        Angle::LeftBack,
        Angle::Left,
    ];

    /// Position in the cyclic order (0 = `Forward`).
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Angle at the given position, wrapping modulo six.
    #[inline]
    pub const fn from_ordinal(ordinal: i32) -> Self {
        Self::ALL[ordinal.rem_euclid(6) as usize]
    }

    /// Shift `steps` positions along the cyclic order.
    #[inline]
    #[must_use]
    pub const fn rotated(self, steps: i32) -> Self {
        Self::from_ordinal(self.ordinal() as i32 + steps)
    }

    /// Signature symbol for this turn.
    pub const fn symbol(self) -> char {
        match self {
            Angle::Forward => 'w',
            Angle::Right => 'e',
            Angle::RightBack => 'd',
            Angle::Back => 's',
            Angle::LeftBack => 'a',
            Angle::Left => 'q',
        }
    }

    /// Inverse of [`Angle::symbol`].
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'w' => Some(Angle::Forward),
            'e' => Some(Angle::Right),
            'd' => Some(Angle::RightBack),
            's' => Some(Angle::Back),
            'a' => Some(Angle::LeftBack),
            'q' => Some(Angle::Left),
            _ => None,
        }
    }

    /// The compass direction with the same ordinal (`Forward` is `NorthEast`).
    #[inline]
    pub const fn to_direction(self) -> Direction {
        Direction::from_ordinal(self.ordinal() as i32)
    }

    /// Inverse of [`Angle::to_direction`].
    #[inline]
    pub const fn from_direction(direction: Direction) -> Self {
        Self::from_ordinal(direction.ordinal() as i32)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
