use thiserror::Error;

/// Errors produced by state lattice operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("unknown grass state rank {0}")]
    UnknownRank(u8),
}
