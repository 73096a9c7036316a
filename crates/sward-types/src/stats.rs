use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::GrassState;

/// Per-scope counters of grass keys by state.
///
/// A `GrassStats` is a fixed-size array of counts indexed by state rank,
/// maintained incrementally by the store: exactly one
/// [`apply_transition`](Self::apply_transition) call per accepted write,
/// carrying the true previous state. The counters have no way to detect a
/// duplicate or out-of-order call themselves — that discipline belongs to
/// the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrassStats {
    counts: [u32; GrassState::ALL.len()],
}

impl GrassStats {
    /// All-zero counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys counted across all states.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Number of keys currently in `state`.
    pub fn count(&self, state: GrassState) -> u32 {
        self.counts[state.rank() as usize]
    }

    /// Keys that have been struck: `Cut` plus `ShouldBeCut`.
    pub fn struck(&self) -> u32 {
        self.count(GrassState::Cut) + self.count(GrassState::ShouldBeCut)
    }

    /// Move one key's unit of count from `old` (if present) to `new`.
    ///
    /// Does not validate the rank ordering of the transition; the store is
    /// responsible for only feeding it accepted mutations.
    pub fn apply_transition(&mut self, old: Option<GrassState>, new: GrassState) {
        if let Some(old) = old {
            self.counts[old.rank() as usize] -= 1;
        }
        self.counts[new.rank() as usize] += 1;
    }
}

impl fmt::Display for GrassStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for state in GrassState::ALL {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{state}={}", self.count(state))?;
            first = false;
        }
        Ok(())
    }
}
