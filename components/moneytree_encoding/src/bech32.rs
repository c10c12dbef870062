//! The Bech32 checksummed base-32 encoding of [BIP 173], and segwit witness programs
//! encoded with it.
//!
//! [BIP 173]: https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki

use std::error::Error;
use std::fmt;
use std::iter;

use crate::{
    bits::convert_bits,
    convert::{bytes_to_hex, hex_to_bytes},
};

/// The Bech32 alphabet, indexed by 5-bit value.
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// The separator between the human-readable part and the data part.
pub const SEPARATOR: char = '1';

const GENERATOR: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// The value the checksum of a valid Bech32 string leaves in [`polymod`].
const CHECKSUM_CONSTANT: u32 = 1;

const CHECKSUM_LENGTH: usize = 6;

/// The maximum length of a Bech32 string.
pub const MAX_LENGTH: usize = 90;

/// The maximum length of a human-readable part.
pub const MAX_HRP_LENGTH: usize = 83;

/// The highest segwit witness version.
pub const MAX_WITNESS_VERSION: u8 = 16;

/// An error while encoding a Bech32 string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The human-readable part is empty, too long, or has characters outside `!`..=`~`.
    InvalidHrp(String),
    /// A data value does not fit in 5 bits.
    InvalidValue(u8),
    /// The encoding would be longer than [`MAX_LENGTH`].
    TooLong(usize),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::InvalidHrp(hrp) => write!(f, "Invalid human-readable part {:?}", hrp),
            EncodeError::InvalidValue(v) => write!(f, "Data value {} does not fit in 5 bits", v),
            EncodeError::TooLong(len) => write!(
                f,
                "Encoding would be {} characters, longer than the maximum of {}",
                len, MAX_LENGTH
            ),
        }
    }
}

impl Error for EncodeError {}

/// An error while decoding a Bech32 string or the witness program inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The string is longer than [`MAX_LENGTH`].
    TooLong(usize),
    /// A character is not printable ASCII, or a data character is not in [`CHARSET`].
    InvalidCharacter(char),
    /// The string mixes upper and lower case.
    MixedCase,
    /// The string has no separator.
    MissingSeparator,
    /// The separator is the first character.
    EmptyHrp,
    /// The data part is shorter than the checksum.
    TooShort,
    /// The checksum does not match.
    InvalidChecksum,
    /// The string is valid Bech32 for a different human-readable part.
    HrpMismatch { expected: String, actual: String },
    /// The witness version is above [`MAX_WITNESS_VERSION`].
    InvalidWitnessVersion(u8),
    /// The witness program has a length not allowed for its version.
    InvalidProgramLength(usize),
    /// The witness program does not regroup into whole bytes.
    InvalidPadding,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::TooLong(len) => write!(
                f,
                "Bech32 string is {} characters, longer than the maximum of {}",
                len, MAX_LENGTH
            ),
            DecodeError::InvalidCharacter(c) => write!(f, "Invalid Bech32 character {:?}", c),
            DecodeError::MixedCase => write!(f, "Bech32 string mixes upper and lower case"),
            DecodeError::MissingSeparator => write!(f, "Bech32 string has no separator"),
            DecodeError::EmptyHrp => write!(f, "Bech32 string has an empty human-readable part"),
            DecodeError::TooShort => write!(f, "Bech32 data part is shorter than the checksum"),
            DecodeError::InvalidChecksum => write!(f, "Invalid Bech32 checksum"),
            DecodeError::HrpMismatch { expected, actual } => write!(
                f,
                "Address was encoded for a different network: expected {}, got {}.",
                expected, actual
            ),
            DecodeError::InvalidWitnessVersion(v) => write!(f, "Invalid witness version {}", v),
            DecodeError::InvalidProgramLength(len) => {
                write!(f, "Invalid witness program length {}", len)
            }
            DecodeError::InvalidPadding => write!(f, "Invalid witness program padding"),
        }
    }
}

impl Error for DecodeError {}

fn polymod(values: impl IntoIterator<Item = u8>) -> u32 {
    let mut chk = 1u32;
    for value in values {
        let top = chk >> 25;
        chk = ((chk & 0x1ffffff) << 5) ^ u32::from(value);
        for (i, g) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= g;
            }
        }
    }
    chk
}

/// Expands the human-readable part into the values the checksum covers: the high bits
/// of each character, a zero, then the low bits of each character.
fn hrp_expand(hrp: &str) -> impl Iterator<Item = u8> + '_ {
    hrp.bytes()
        .map(|b| b >> 5)
        .chain(iter::once(0))
        .chain(hrp.bytes().map(|b| b & 0x1f))
}

fn verify_checksum(hrp: &str, data: &[u8]) -> bool {
    polymod(hrp_expand(hrp).chain(data.iter().copied())) == CHECKSUM_CONSTANT
}

fn create_checksum(hrp: &str, data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let pm = polymod(
        hrp_expand(hrp)
            .chain(data.iter().copied())
            .chain([0; CHECKSUM_LENGTH]),
    ) ^ CHECKSUM_CONSTANT;

    let mut checksum = [0; CHECKSUM_LENGTH];
    for (i, c) in checksum.iter_mut().enumerate() {
        *c = ((pm >> (5 * (CHECKSUM_LENGTH - 1 - i))) & 0x1f) as u8;
    }
    checksum
}

fn is_valid_hrp(hrp: &str) -> bool {
    (1..=MAX_HRP_LENGTH).contains(&hrp.len()) && hrp.bytes().all(|b| (33..=126).contains(&b))
}

/// Encodes 5-bit `values` under the human-readable part `hrp`.
///
/// The output is lowercase, whatever the case of `hrp`.
pub fn encode(hrp: &str, values: &[u8]) -> Result<String, EncodeError> {
    if !is_valid_hrp(hrp) {
        return Err(EncodeError::InvalidHrp(hrp.to_owned()));
    }
    if let Some(&v) = values.iter().find(|&&v| v >> 5 != 0) {
        return Err(EncodeError::InvalidValue(v));
    }
    let len = hrp.len() + 1 + values.len() + CHECKSUM_LENGTH;
    if len > MAX_LENGTH {
        return Err(EncodeError::TooLong(len));
    }

    let hrp = hrp.to_ascii_lowercase();
    let checksum = create_checksum(&hrp, values);

    let mut encoded = String::with_capacity(len);
    encoded.push_str(&hrp);
    encoded.push(SEPARATOR);
    encoded.extend(
        values
            .iter()
            .chain(checksum.iter())
            .map(|&v| char::from(CHARSET[usize::from(v)])),
    );
    Ok(encoded)
}

/// Decodes a Bech32 string into its lowercase human-readable part and its 5-bit data
/// values, without the checksum.
///
/// Every failure, including a checksum mismatch, is returned as an error value.
pub fn decode(address: &str) -> Result<(String, Vec<u8>), DecodeError> {
    let result = decode_internal(address);
    if let Err(e) = &result {
        tracing::trace!("Rejected Bech32 string {:?}: {}", address, e);
    }
    result
}

fn decode_internal(address: &str) -> Result<(String, Vec<u8>), DecodeError> {
    if let Some(c) = address.chars().find(|c| !(33..=126).contains(&u32::from(*c))) {
        return Err(DecodeError::InvalidCharacter(c));
    }
    // Only printable ASCII from here on, so bytes and characters coincide.
    if address.len() > MAX_LENGTH {
        return Err(DecodeError::TooLong(address.len()));
    }
    let has_lower = address.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = address.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(DecodeError::MixedCase);
    }
    let address = address.to_ascii_lowercase();

    let pos = address
        .rfind(SEPARATOR)
        .ok_or(DecodeError::MissingSeparator)?;
    if pos == 0 {
        return Err(DecodeError::EmptyHrp);
    }
    if pos + 1 + CHECKSUM_LENGTH > address.len() {
        return Err(DecodeError::TooShort);
    }

    let (hrp, data) = (&address[..pos], &address[pos + 1..]);
    let mut values = data
        .chars()
        .map(|c| {
            CHARSET
                .iter()
                .position(|&a| char::from(a) == c)
                .map(|v| v as u8)
                .ok_or(DecodeError::InvalidCharacter(c))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if !verify_checksum(hrp, &values) {
        return Err(DecodeError::InvalidChecksum);
    }

    values.truncate(values.len() - CHECKSUM_LENGTH);
    Ok((hrp.to_owned(), values))
}

/// Returns whether a witness program of `len` bytes is allowed under `version`.
fn is_valid_program_length(version: u8, len: usize) -> bool {
    (2..=40).contains(&len) && (version != 0 || len == 20 || len == 32)
}

/// Encodes a segwit witness program, given as hex, as a Bech32 address.
///
/// Returns `None` if `version` is above 16, if the program is shorter than 2 or longer
/// than 40 bytes, if a version 0 program is neither 20 nor 32 bytes long, or if the
/// program or `hrp` cannot be encoded at all.
pub fn to_serialized_bech32(witness_program_hex: &str, version: u8, hrp: &str) -> Option<String> {
    let program = match hex_to_bytes(witness_program_hex) {
        Ok(program) => program,
        Err(e) => {
            tracing::debug!("Not encoding witness program: {}", e);
            return None;
        }
    };
    if version > MAX_WITNESS_VERSION || !is_valid_program_length(version, program.len()) {
        tracing::debug!(
            "Not encoding version {} witness program of {} bytes",
            version,
            program.len()
        );
        return None;
    }

    let data = iter::once(version)
        .chain(convert_bits(&program, 8, 5, true).ok()?)
        .collect::<Vec<_>>();
    encode(hrp, &data).ok()
}

/// Decodes a segwit address for the human-readable part `hrp` into its witness version
/// and the witness program as hex.
pub fn from_serialized_bech32(address: &str, hrp: &str) -> Result<(u8, String), DecodeError> {
    let (actual, data) = decode(address)?;
    let expected = hrp.to_ascii_lowercase();
    if actual != expected {
        return Err(DecodeError::HrpMismatch { expected, actual });
    }

    let (&version, program) = data
        .split_first()
        .ok_or(DecodeError::InvalidProgramLength(0))?;
    if version > MAX_WITNESS_VERSION {
        return Err(DecodeError::InvalidWitnessVersion(version));
    }
    let program = convert_bits(program, 5, 8, false).map_err(|_| DecodeError::InvalidPadding)?;
    if !is_valid_program_length(version, program.len()) {
        return Err(DecodeError::InvalidProgramLength(program.len()));
    }

    Ok((version, bytes_to_hex(&program)))
}

#[cfg(any(test, feature = "test-dependencies"))]
pub mod testing {
    use proptest::collection::vec;
    use proptest::prelude::*;

    use super::MAX_WITNESS_VERSION;

    prop_compose! {
        /// A witness version together with a program of a length valid for it, as hex.
        pub fn arb_witness_program()(
            version in 0..=MAX_WITNESS_VERSION,
            short in any::<bool>(),
            len in 2usize..=40,
        )(
            version in Just(version),
            program in vec(any::<u8>(), match (version, short) {
                (0, true) => 20,
                (0, false) => 32,
                _ => len,
            }),
        ) -> (u8, String) {
            (version, hex::encode(program))
        }
    }
}

#[cfg(test)]
mod test_vectors;
