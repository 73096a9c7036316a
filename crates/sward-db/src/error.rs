use thiserror::Error;

/// Errors produced by store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DbError {
    #[error("failed to decode persisted grass data: {0}")]
    Codec(#[from] sward_codec::CodecError),
}

pub type DbResult<T> = Result<T, DbError>;
