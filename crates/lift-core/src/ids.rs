//! Typed passenger identifier.

use std::fmt;

/// Index of a passenger in the run's population vector.
///
/// `Copy + Ord + Hash` so it can be used as a map key and sorted without
/// ceremony.  The inner integer is `pub` to allow direct indexing via
/// `id.0 as usize`, but callers should prefer [`index`][PassengerId::index]
/// for clarity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassengerId(pub u32);

impl PassengerId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

impl From<PassengerId> for usize {
    #[inline(always)]
    fn from(id: PassengerId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for PassengerId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<PassengerId, Self::Error> {
        u32::try_from(n).map(PassengerId)
    }
}
