//! Conversions between hex strings, byte strings and unbounded integers.
//!
//! Hex produced by this module is always lowercase, has no `0x` prefix and has an even
//! number of digits. Hex accepted by it may use either case.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use num_bigint::BigUint;

use crate::Error;

/// Decodes an even-length hex string into bytes. The empty string decodes to no bytes.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, Error> {
    hex::decode(hex).map_err(|reason| Error::InvalidHex {
        input: hex.to_owned(),
        reason,
    })
}

/// Encodes bytes as lowercase hex.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Parses a big-endian hex string of any length as an unsigned integer.
///
/// The empty string parses as zero.
pub fn hex_to_int(hex: &str) -> Result<BigUint, Error> {
    if let Some((index, c)) = hex.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(Error::InvalidHex {
            input: hex.to_owned(),
            reason: hex::FromHexError::InvalidHexCharacter { c, index },
        });
    }

    // Every character is a hex digit, so only the empty string fails to parse.
    Ok(BigUint::parse_bytes(hex.as_bytes(), 16).unwrap_or_default())
}

/// Formats `value` as lowercase hex with an even number of digits.
///
/// If `min_width` is given the result is left-padded with zeros to at least that many
/// digits. Zero formats as `"00"`, never as the empty string.
pub fn int_to_hex(value: &BigUint, min_width: Option<usize>) -> String {
    let mut hex = value.to_str_radix(16);
    if hex.len() % 2 != 0 {
        hex.insert(0, '0');
    }

    match min_width {
        Some(width) => format!("{:0>width$}", hex, width = width),
        None => hex,
    }
}

/// Returns the minimal big-endian byte encoding of `value`; zero encodes as `[0]`.
///
/// This is always equal to `hex_to_bytes(&int_to_hex(value, None))`.
pub fn int_to_bytes(value: &BigUint) -> Vec<u8> {
    value.to_bytes_be()
}

/// Interprets `bytes` as a big-endian unsigned integer. No bytes is zero.
pub fn bytes_to_int(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Encodes the bytes of a hex string as padded standard Base64.
pub fn encode_base64(hex: &str) -> Result<String, Error> {
    hex_to_bytes(hex).map(|bytes| STANDARD.encode(bytes))
}

/// Decodes padded standard Base64 into a hex string.
pub fn decode_base64(base64: &str) -> Result<String, Error> {
    STANDARD
        .decode(base64)
        .map(|bytes| bytes_to_hex(&bytes))
        .map_err(|_| Error::InvalidBase64(base64.to_owned()))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use num_bigint::BigUint;
    use proptest::collection::vec;
    use proptest::prelude::*;

    use super::{
        bytes_to_hex, bytes_to_int, decode_base64, encode_base64, hex_to_bytes, hex_to_int,
        int_to_bytes, int_to_hex,
    };
    use crate::Error;

    #[test]
    fn zero_is_two_hex_digits() {
        assert_eq!(int_to_hex(&BigUint::from(0u8), None), "00");
        assert_eq!(int_to_bytes(&BigUint::from(0u8)), vec![0]);
    }

    #[test]
    fn int_to_hex_pads_to_even_length() {
        assert_eq!(int_to_hex(&BigUint::from(0xfu8), None), "0f");
        assert_eq!(int_to_hex(&BigUint::from(0xabcu16), None), "0abc");
        assert_eq!(int_to_hex(&BigUint::from(0xabcdu16), None), "abcd");
    }

    #[test]
    fn int_to_hex_min_width() {
        assert_eq!(int_to_hex(&BigUint::from(1u8), Some(8)), "00000001");
        // A width narrower than the value never truncates it.
        assert_eq!(int_to_hex(&BigUint::from(0x123456u32), Some(2)), "123456");
    }

    #[test]
    fn hex_to_int_accepts_any_case_and_length() {
        assert_eq!(hex_to_int("").unwrap(), BigUint::from(0u8));
        assert_eq!(hex_to_int("f").unwrap(), BigUint::from(15u8));
        assert_eq!(hex_to_int("00FF").unwrap(), BigUint::from(255u8));
        assert_eq!(hex_to_int("DeadBeef").unwrap(), BigUint::from(0xdeadbeefu32));
    }

    #[test]
    fn hex_to_int_rejects_non_hex() {
        assert_matches!(
            hex_to_int("12g4"),
            Err(Error::InvalidHex {
                reason: hex::FromHexError::InvalidHexCharacter { c: 'g', index: 2 },
                ..
            })
        );
        assert_matches!(hex_to_int("0x12"), Err(Error::InvalidHex { .. }));
        assert_matches!(hex_to_int("1_2"), Err(Error::InvalidHex { .. }));
    }

    #[test]
    fn hex_to_bytes_rejects_odd_length() {
        assert_matches!(
            hex_to_bytes("abc"),
            Err(Error::InvalidHex {
                reason: hex::FromHexError::OddLength,
                ..
            })
        );
        assert_eq!(hex_to_bytes("").unwrap(), Vec::<u8>::new());
        assert_eq!(bytes_to_hex(&[]), "");
        assert_eq!(hex_to_bytes("00AbfF").unwrap(), vec![0x00, 0xab, 0xff]);
    }

    #[test]
    fn base64() {
        assert_eq!(encode_base64("").unwrap(), "");
        assert_eq!(encode_base64("666f6f").unwrap(), "Zm9v");
        assert_eq!(encode_base64("666f6f62").unwrap(), "Zm9vYg==");
        assert_eq!(decode_base64("Zm9vYg==").unwrap(), "666f6f62");
        assert_matches!(decode_base64("Zm9v!"), Err(Error::InvalidBase64(_)));
    }

    proptest! {
        #[test]
        fn hex_bytes_roundtrip(bytes in vec(any::<u8>(), 0..64)) {
            let hex = bytes_to_hex(&bytes);
            prop_assert_eq!(hex.len(), bytes.len() * 2);
            prop_assert_eq!(hex.to_lowercase(), hex.clone());
            prop_assert_eq!(hex_to_bytes(&hex).unwrap(), bytes);
        }

        #[test]
        fn int_bytes_agree_with_hex(bytes in vec(any::<u8>(), 0..64)) {
            let value = bytes_to_int(&bytes);
            prop_assert_eq!(hex_to_int(&bytes_to_hex(&bytes)).unwrap(), value.clone());

            let hex = int_to_hex(&value, None);
            prop_assert_eq!(hex.len() % 2, 0);
            prop_assert_eq!(int_to_bytes(&value), hex_to_bytes(&hex).unwrap());
            prop_assert_eq!(hex_to_int(&hex).unwrap(), value);
        }

        #[test]
        fn base64_roundtrip(bytes in vec(any::<u8>(), 0..64)) {
            let hex = bytes_to_hex(&bytes);
            prop_assert_eq!(decode_base64(&encode_base64(&hex).unwrap()).unwrap(), hex);
        }
    }
}
