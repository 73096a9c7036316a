use thiserror::Error;

/// Errors produced while decoding a persisted blob.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("unknown format version {found:?}, expected {expected:?}; \
             a newer tool may be required to read this data")]
    VersionMismatch {
        found: String,
        expected: &'static str,
    },

    #[error("corrupt blob: {tokens} tokens do not split into whole entries")]
    CorruptLength { tokens: usize },

    #[error("invalid base64 token: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded bytes are not valid UTF-16")]
    InvalidUtf16,

    #[error("expected 4 bytes of coordinate data, got {len}")]
    BadFloatWidth { len: usize },

    #[error("invalid state ordinal {token:?}")]
    BadStateOrdinal { token: String },
}

pub type CodecResult<T> = Result<T, CodecError>;
