//! The persisted-state wire format for sward.
//!
//! A store's contents flatten to a single string: tokens joined by `;`,
//! where token 0 is the format version tag and every following group of
//! exactly [`TOKENS_PER_ENTRY`] tokens is one `(GrassKey, GrassState)`
//! entry:
//!
//! ```text
//! 1;<scene_b64>;<name_b64>;<x_b64>;<y_b64>;<state_ordinal>;...
//! ```
//!
//! - Scene and object names are UTF-16LE encoded and then Base64 encoded.
//!   The Base64 alphabet never contains `;`, so arbitrary names are
//!   delimiter-safe.
//! - Coordinates are the big-endian 4-byte IEEE-754 `f32` representation,
//!   Base64 encoded. Bit patterns survive the round trip exactly, NaN
//!   payloads included.
//! - The state ordinal is the decimal rank of the state
//!   (`uncut=0, should-be-cut=1, cut=2`), fixed for format version "1".
//!
//! Decoding is streaming: [`Decoder::new`] performs the version and
//! token-count checks up front and then yields entries one at a time, so a
//! caller applying entries as they parse keeps everything decoded before a
//! mid-stream failure.

pub mod blob;
pub mod error;
mod field;

pub use blob::{decode, encode, Decoder, FORMAT_VERSION, TOKENS_PER_ENTRY};
pub use error::{CodecError, CodecResult};
