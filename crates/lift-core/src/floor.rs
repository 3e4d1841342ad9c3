//! 1-based floor numbering with directional arithmetic.

use std::fmt;

use crate::Direction;

/// A floor of the building, numbered from 1 (ground) up to the building's
/// `floor_count` inclusive.
///
/// The inner integer is `pub` so literals and tests can construct floors
/// directly, but arithmetic should go through [`step`][Floor::step] and
/// [`is_beyond`][Floor::is_beyond] so direction handling stays in one place.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u32);

impl Floor {
    /// The bottom floor of every building.
    pub const GROUND: Floor = Floor(1);

    /// The adjacent floor in `direction`.
    ///
    /// Callers must not step below [`Floor::GROUND`]; the controllers
    /// guarantee this by reversing at the extremes before moving.
    #[inline]
    pub fn step(self, direction: Direction) -> Floor {
        match direction {
            Direction::Up => Floor(self.0 + 1),
            Direction::Down => Floor(self.0 - 1),
        }
    }

    /// `true` if `self` lies strictly beyond `from` in `direction`.
    #[inline]
    pub fn is_beyond(self, from: Floor, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.0 > from.0,
            Direction::Down => self.0 < from.0,
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
