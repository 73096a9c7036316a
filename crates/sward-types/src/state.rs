use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// The state lattice for a tracked grass object.
///
/// The three states form a total order by rank:
///
/// ```text
/// Uncut (0) < ShouldBeCut (1) < Cut (2)
/// ```
///
/// The rank order is the *monotonic* order: the store only ever applies a
/// write that strictly increases a key's rank. A cut object never un-cuts,
/// a "should have been cut" flag is never retracted, and a later genuine
/// cut supersedes "should be cut". This rank assignment is also the
/// persisted state ordinal for format version "1" and must not be
/// reordered.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum GrassState {
    /// Not yet struck.
    Uncut,
    /// Struck but not registered as cut; never retracted once set.
    ShouldBeCut,
    /// Definitively cut.
    Cut,
}

impl GrassState {
    /// All states in ascending rank order.
    pub const ALL: [GrassState; 3] = [
        GrassState::Uncut,
        GrassState::ShouldBeCut,
        GrassState::Cut,
    ];

    /// The monotonic rank of this state.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Inverse of [`rank`](Self::rank).
    pub fn from_rank(rank: u8) -> Result<Self, StateError> {
        match rank {
            0 => Ok(GrassState::Uncut),
            1 => Ok(GrassState::ShouldBeCut),
            2 => Ok(GrassState::Cut),
            other => Err(StateError::UnknownRank(other)),
        }
    }
}

impl fmt::Display for GrassState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GrassState::Uncut => "uncut",
            GrassState::ShouldBeCut => "should-be-cut",
            GrassState::Cut => "cut",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_order_matches_lattice() {
        assert!(GrassState::Uncut < GrassState::ShouldBeCut);
        assert!(GrassState::ShouldBeCut < GrassState::Cut);
    }

    #[test]
    fn rank_roundtrip() {
        for state in GrassState::ALL {
            assert_eq!(GrassState::from_rank(state.rank()), Ok(state));
        }
    }

    #[test]
    fn unknown_rank_is_rejected() {
        assert_eq!(
            GrassState::from_rank(3),
            Err(StateError::UnknownRank(3))
        );
    }

    #[test]
    fn all_is_in_ascending_rank_order() {
        for (i, state) in GrassState::ALL.iter().enumerate() {
            assert_eq!(state.rank() as usize, i);
        }
    }
}
