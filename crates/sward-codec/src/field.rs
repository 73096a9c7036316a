//! Delimiter-safe encodings for the individual entry fields.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{CodecError, CodecResult};

/// Encode a string as UTF-16LE bytes wrapped in Base64.
pub(crate) fn encode_str(s: &str) -> String {
    let mut bytes = Vec::with_capacity(s.len() * 2);
    for unit in s.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    STANDARD.encode(bytes)
}

pub(crate) fn decode_str(token: &str) -> CodecResult<String> {
    let bytes = STANDARD.decode(token)?;
    if bytes.len() % 2 != 0 {
        return Err(CodecError::InvalidUtf16);
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|_| CodecError::InvalidUtf16)
}

/// Encode an `f32` as its big-endian byte representation wrapped in Base64.
pub(crate) fn encode_f32(value: f32) -> String {
    STANDARD.encode(value.to_be_bytes())
}

pub(crate) fn decode_f32(token: &str) -> CodecResult<f32> {
    let bytes = STANDARD.decode(token)?;
    let raw: [u8; 4] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| CodecError::BadFloatWidth { len: bytes.len() })?;
    Ok(f32::from_be_bytes(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_roundtrip_plain() {
        let s = "Crossroads_01";
        assert_eq!(decode_str(&encode_str(s)).unwrap(), s);
    }

    #[test]
    fn str_roundtrip_with_delimiter_and_unicode() {
        // Names may contain the delimiter and non-BMP characters; both must
        // survive through the Base64 layer.
        let s = "grass;tuft 🌿 (2)";
        assert_eq!(decode_str(&encode_str(s)).unwrap(), s);
    }

    #[test]
    fn encoded_str_never_contains_delimiter() {
        let encoded = encode_str("a;b;c;;;");
        assert!(!encoded.contains(';'));
    }

    #[test]
    fn empty_string_roundtrips() {
        assert_eq!(decode_str(&encode_str("")).unwrap(), "");
    }

    #[test]
    fn f32_roundtrip_preserves_bits() {
        for value in [0.0f32, -0.0, 1.5, -273.15, f32::INFINITY, f32::MIN_POSITIVE] {
            let decoded = decode_f32(&encode_f32(value)).unwrap();
            assert_eq!(decoded.to_bits(), value.to_bits());
        }
        let nan = decode_f32(&encode_f32(f32::NAN)).unwrap();
        assert_eq!(nan.to_bits(), f32::NAN.to_bits());
    }

    #[test]
    fn f32_encoding_is_big_endian() {
        // 1.0f32 is 0x3F800000; big-endian bytes [0x3F, 0x80, 0, 0].
        assert_eq!(encode_f32(1.0), "P4AAAA==");
    }

    #[test]
    fn bad_base64_is_rejected() {
        assert!(matches!(decode_str("!!!"), Err(CodecError::Base64(_))));
        assert!(matches!(decode_f32("!!!"), Err(CodecError::Base64(_))));
    }

    #[test]
    fn wrong_float_width_is_rejected() {
        let two_bytes = STANDARD.encode([0u8, 1]);
        assert_eq!(
            decode_f32(&two_bytes),
            Err(CodecError::BadFloatWidth { len: 2 })
        );
    }

    #[test]
    fn odd_byte_count_is_not_utf16() {
        let three_bytes = STANDARD.encode([0u8, 1, 2]);
        assert_eq!(decode_str(&three_bytes), Err(CodecError::InvalidUtf16));
    }
}
