//! Whole-blob encoding and streaming decoding.

use sward_types::{GrassKey, GrassState};

use crate::error::{CodecError, CodecResult};
use crate::field::{decode_f32, decode_str, encode_f32, encode_str};

/// Version tag carried as the first token of every blob.
pub const FORMAT_VERSION: &str = "1";

/// Tokens per stored entry: scene, name, x, y, state ordinal.
pub const TOKENS_PER_ENTRY: usize = 5;

/// Flatten entries into a single blob string.
///
/// Entry order is whatever the iterator yields; the format attaches no
/// meaning to it, and the monotonic load rule makes re-ordered blobs
/// equivalent.
pub fn encode<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a GrassKey, GrassState)>,
{
    let mut parts = vec![FORMAT_VERSION.to_string()];
    for (key, state) in entries {
        parts.push(encode_str(key.scene()));
        parts.push(encode_str(key.name()));
        parts.push(encode_f32(key.position().x()));
        parts.push(encode_f32(key.position().y()));
        parts.push(state.rank().to_string());
    }
    parts.join(";")
}

/// Decode a whole blob into a vector of entries.
///
/// Convenience over [`Decoder`] for callers that do not need streaming
/// semantics; fails on the first malformed entry.
pub fn decode(blob: &str) -> CodecResult<Vec<(GrassKey, GrassState)>> {
    Decoder::new(blob)?.collect()
}

/// Streaming blob decoder.
///
/// `new` performs the cheap whole-blob checks (version tag, token-count
/// congruence) before any entry is parsed, then the decoder yields one
/// `Result` per entry. After yielding an error it fuses and yields nothing
/// further.
#[derive(Debug)]
pub struct Decoder<'a> {
    tokens: Vec<&'a str>,
    cursor: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(blob: &'a str) -> CodecResult<Self> {
        // An empty blob holds no entries at all, not even a version tag.
        if blob.is_empty() {
            return Ok(Self {
                tokens: Vec::new(),
                cursor: 0,
            });
        }

        let tokens: Vec<&str> = blob.split(';').collect();
        if tokens[0] != FORMAT_VERSION {
            return Err(CodecError::VersionMismatch {
                found: tokens[0].to_string(),
                expected: FORMAT_VERSION,
            });
        }
        if (tokens.len() - 1) % TOKENS_PER_ENTRY != 0 {
            return Err(CodecError::CorruptLength {
                tokens: tokens.len(),
            });
        }
        Ok(Self { tokens, cursor: 1 })
    }

    /// Entries not yet yielded.
    pub fn remaining(&self) -> usize {
        (self.tokens.len() - self.cursor) / TOKENS_PER_ENTRY
    }

    fn parse_next(&mut self) -> CodecResult<(GrassKey, GrassState)> {
        let group = &self.tokens[self.cursor..self.cursor + TOKENS_PER_ENTRY];
        self.cursor += TOKENS_PER_ENTRY;

        let scene = decode_str(group[0])?;
        let name = decode_str(group[1])?;
        let x = decode_f32(group[2])?;
        let y = decode_f32(group[3])?;
        let ordinal: u8 = group[4].parse().map_err(|_| CodecError::BadStateOrdinal {
            token: group[4].to_string(),
        })?;
        let state = GrassState::from_rank(ordinal).map_err(|_| CodecError::BadStateOrdinal {
            token: group[4].to_string(),
        })?;

        Ok((GrassKey::new(scene, name, (x, y)), state))
    }
}

impl Iterator for Decoder<'_> {
    type Item = CodecResult<(GrassKey, GrassState)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.tokens.len() {
            return None;
        }
        let entry = self.parse_next();
        if entry.is_err() {
            // Fuse on failure.
            self.cursor = self.tokens.len();
        }
        Some(entry)
    }
}
