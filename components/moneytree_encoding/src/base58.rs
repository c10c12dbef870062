//! Base58 and Base58Check text encodings over hex payloads.
//!
//! Values are converted as a single unbounded integer, so each leading zero byte of the
//! payload is carried separately as a leading `'1'`.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::{
    convert::{hex_to_bytes, hex_to_int, int_to_hex},
    hash::{double_sha256, Source},
    Error,
};

/// The Base58 alphabet, without `0`, `O`, `I` and `l`.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// The number of hex digits of the Base58Check checksum (4 bytes).
const CHECKSUM_HEX_LEN: usize = 8;

/// Formats `value` in Base58, most significant digit first. Zero is the empty string.
pub fn int_to_base58(value: &BigUint) -> String {
    let base = BigUint::from(ALPHABET.len());
    let mut value = value.clone();
    let mut digits = Vec::new();

    while !value.is_zero() {
        let (quotient, remainder) = value.div_rem(&base);
        // The remainder is below 58.
        let index = remainder.to_usize().unwrap_or_default();
        digits.push(ALPHABET[index]);
        value = quotient;
    }

    digits.reverse();
    digits.into_iter().map(char::from).collect()
}

/// Parses a Base58 string as an unsigned integer. The empty string parses as zero.
pub fn base58_to_int(base58: &str) -> Result<BigUint, Error> {
    let base = BigUint::from(ALPHABET.len());
    base58.chars().try_fold(BigUint::zero(), |value, c| {
        let index = ALPHABET
            .iter()
            .position(|&a| char::from(a) == c)
            .ok_or_else(|| Error::InvalidBase58 {
                input: base58.to_owned(),
                character: c,
            })?;
        Ok(value * &base + index)
    })
}

/// Encodes the bytes of `hex` in Base58, writing one `'1'` per leading zero byte.
pub fn encode_base58(hex: &str) -> Result<String, Error> {
    let leading_zero_bytes = hex_to_bytes(hex)?
        .iter()
        .take_while(|&&b| b == 0)
        .count();
    let value = hex_to_int(hex)?;

    Ok("1".repeat(leading_zero_bytes) + &int_to_base58(&value))
}

/// Decodes a Base58 string into lowercase hex, restoring one zero byte per leading `'1'`.
pub fn decode_base58(base58: &str) -> Result<String, Error> {
    let value = base58_to_int(base58)?;
    let numeric = if value.is_zero() {
        String::new()
    } else {
        int_to_hex(&value, None)
    };
    let leading_zero_bytes = base58.chars().take_while(|&c| c == '1').count();

    Ok("00".repeat(leading_zero_bytes) + &numeric)
}

/// Returns the Base58Check checksum of the bytes of `hex`: the first 4 bytes of their
/// double SHA-256, as hex.
fn checksum(hex: &str) -> Result<String, Error> {
    let mut hash = double_sha256(Source::Hex(hex))?;
    hash.truncate(CHECKSUM_HEX_LEN);
    Ok(hash)
}

/// Encodes `hex` in Base58Check: Base58 of the payload followed by its 4-byte checksum.
pub fn to_serialized_base58(hex: &str) -> Result<String, Error> {
    let checksum = checksum(hex)?;
    encode_base58(&(hex.to_owned() + &checksum))
}

/// Decodes a Base58Check string and verifies its checksum, returning the payload as hex.
///
/// # Errors
///
/// - [`Error::InvalidBase58`] if `base58` contains a character outside the alphabet.
/// - [`Error::MissingChecksum`] if it decodes to fewer than 4 bytes.
/// - [`Error::ChecksumMismatch`] if the trailing 4 bytes are not the checksum of the rest.
pub fn from_serialized_base58(base58: &str) -> Result<String, Error> {
    let mut payload = decode_base58(base58)?;
    if payload.len() < CHECKSUM_HEX_LEN {
        return Err(Error::MissingChecksum(base58.to_owned()));
    }

    let actual = payload.split_off(payload.len() - CHECKSUM_HEX_LEN);
    let expected = checksum(&payload)?;
    if actual != expected {
        tracing::debug!(
            "Base58Check checksum mismatch for {}: expected {}, got {}",
            base58,
            expected,
            actual
        );
        return Err(Error::ChecksumMismatch { expected, actual });
    }

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use num_bigint::BigUint;
    use proptest::collection::vec;
    use proptest::prelude::*;

    use super::{
        base58_to_int, decode_base58, encode_base58, from_serialized_base58, int_to_base58,
        to_serialized_base58,
    };
    use crate::Error;

    const ADDRESS: &str = "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM";
    const PAYLOAD: &str = "00010966776006953D5567439E5E39F86A0D273BEE";
    const PAYLOAD_WITH_CHECKSUM: &str = "00010966776006953D5567439E5E39F86A0D273BEED61967F6";

    #[test]
    fn int_conversion() {
        assert_eq!(int_to_base58(&BigUint::from(0u8)), "");
        assert_eq!(int_to_base58(&BigUint::from(57u8)), "z");
        assert_eq!(int_to_base58(&BigUint::from(58u8)), "21");
        assert_eq!(base58_to_int("").unwrap(), BigUint::from(0u8));
        assert_eq!(base58_to_int("21").unwrap(), BigUint::from(58u8));
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        for bad in ["0", "O", "I", "l", "abc+", " 1"] {
            assert_matches!(base58_to_int(bad), Err(Error::InvalidBase58 { .. }));
            assert_matches!(decode_base58(bad), Err(Error::InvalidBase58 { .. }));
        }
        assert_matches!(
            base58_to_int("12l4"),
            Err(Error::InvalidBase58 { character: 'l', .. })
        );
    }

    #[test]
    fn leading_zero_bytes() {
        assert_eq!(encode_base58("").unwrap(), "");
        assert_eq!(encode_base58("00").unwrap(), "1");
        assert_eq!(encode_base58("0000").unwrap(), "11");
        assert_eq!(encode_base58("000001").unwrap(), "112");
        assert_eq!(decode_base58("1").unwrap(), "00");
        assert_eq!(decode_base58("11").unwrap(), "0000");
        assert_eq!(decode_base58("112").unwrap(), "000001");
        assert_eq!(decode_base58("").unwrap(), "");
    }

    #[test]
    fn known_address() {
        assert_eq!(encode_base58(PAYLOAD_WITH_CHECKSUM).unwrap(), ADDRESS);
        assert_eq!(
            decode_base58(ADDRESS).unwrap(),
            PAYLOAD_WITH_CHECKSUM.to_lowercase()
        );
        assert_eq!(to_serialized_base58(PAYLOAD).unwrap(), ADDRESS);
        assert_eq!(
            from_serialized_base58(ADDRESS).unwrap(),
            PAYLOAD.to_lowercase()
        );
    }

    #[test]
    fn detects_corruption() {
        // Swap the last character for another alphabet character.
        let corrupted = format!("{}N", &ADDRESS[..ADDRESS.len() - 1]);
        assert_matches!(
            from_serialized_base58(&corrupted),
            Err(Error::ChecksumMismatch { .. })
        );
        assert_matches!(
            from_serialized_base58("111"),
            Err(Error::MissingChecksum(_))
        );
        assert_matches!(
            from_serialized_base58("16UwLL9Risc3QfPqBUvKofHmBQ7wMtjv0"),
            Err(Error::InvalidBase58 { character: '0', .. })
        );
    }

    proptest! {
        #[test]
        fn roundtrip(bytes in vec(any::<u8>(), 0..64)) {
            let hex = hex::encode(&bytes);
            let encoded = encode_base58(&hex).unwrap();
            prop_assert_eq!(decode_base58(&encoded).unwrap(), hex);
        }

        #[test]
        fn roundtrip_leading_zeros(zeros in 0usize..8, bytes in vec(any::<u8>(), 0..32)) {
            let hex = "00".repeat(zeros) + &hex::encode(&bytes);
            prop_assert_eq!(decode_base58(&encode_base58(&hex).unwrap()).unwrap(), hex);
        }

        #[test]
        fn matches_bs58(bytes in vec(any::<u8>(), 0..64)) {
            let hex = hex::encode(&bytes);
            prop_assert_eq!(encode_base58(&hex).unwrap(), bs58::encode(&bytes).into_string());
            prop_assert_eq!(
                to_serialized_base58(&hex).unwrap(),
                bs58::encode(&bytes).with_check().into_string()
            );
        }

        #[test]
        fn check_roundtrip_is_canonical(bytes in vec(any::<u8>(), 0..64)) {
            let hex = hex::encode(&bytes);
            let encoded = to_serialized_base58(&hex).unwrap();
            let decoded = from_serialized_base58(&encoded).unwrap();
            prop_assert_eq!(&decoded, &hex);
            prop_assert_eq!(to_serialized_base58(&decoded).unwrap(), encoded);
        }
    }
}
