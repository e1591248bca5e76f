// Message Codec
// Converts between byte strings and the big integers the modular
// arithmetic operates on

use crate::bigint::{self, RsaBigInt};
use crate::error::RsaError;

/// Encode a message as a big-endian unsigned integer.
///
/// Zero-length messages are rejected: the integer 0 decodes to a single
/// zero byte, not to an empty string, so the empty message cannot
/// round-trip.
pub fn encode(message: &[u8]) -> Result<RsaBigInt, RsaError> {
    if message.is_empty() {
        return Err(RsaError::EmptyMessage);
    }

    Ok(bigint::from_bytes(message))
}

/// Decode an integer back to its minimal big-endian byte representation.
///
/// Messages that start with zero bytes are not round-trip safe: the
/// leading zeros vanish in the integer form and the minimal
/// representation returned here does not restore them.
pub fn decode(value: &RsaBigInt) -> Vec<u8> {
    bigint::to_bytes(value)
}

/// Decode an integer to a UTF-8 string.
pub fn decode_utf8(value: &RsaBigInt) -> Result<String, RsaError> {
    Ok(String::from_utf8(decode(value))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::from_u64;

    #[test]
    fn test_encode_is_big_endian() {
        // "AB" = 0x41 0x42 = 0x4142
        assert_eq!(encode(b"AB").unwrap(), from_u64(0x4142));
        assert_eq!(encode(b"A").unwrap(), from_u64(0x41));
    }

    #[test]
    fn test_encode_rejects_empty_message() {
        assert!(matches!(encode(b""), Err(RsaError::EmptyMessage)));
    }

    #[test]
    fn test_decode_round_trip() {
        let message = b"Hello, world!";
        let value = encode(message).unwrap();
        assert_eq!(decode(&value), message);
        assert_eq!(decode_utf8(&value).unwrap(), "Hello, world!");
    }

    #[test]
    fn test_leading_zero_bytes_are_not_preserved() {
        let value = encode(&[0x00, 0x41]).unwrap();
        assert_eq!(value, from_u64(0x41));
        assert_eq!(decode(&value), vec![0x41]);
    }

    #[test]
    fn test_decode_utf8_rejects_invalid_bytes() {
        // 0xff is never valid UTF-8
        let value = from_u64(0xff);
        assert!(matches!(decode_utf8(&value), Err(RsaError::Codec(_))));
    }
}
