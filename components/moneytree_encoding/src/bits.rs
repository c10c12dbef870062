//! Regrouping of bit strings between group widths, as used to pack segwit witness
//! programs into Bech32 symbols and back.

use std::error::Error;
use std::fmt;

/// An error while regrouping bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertBitsError {
    /// An input value does not fit in the source group width.
    InvalidValue { value: u8, from_bits: u32 },
    /// Unpadded conversion would drop a whole source group or non-zero bits.
    InvalidPadding,
}

impl fmt::Display for ConvertBitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertBitsError::InvalidValue { value, from_bits } => {
                write!(f, "Value {} does not fit in {} bits", value, from_bits)
            }
            ConvertBitsError::InvalidPadding => write!(f, "Invalid padding bits"),
        }
    }
}

impl Error for ConvertBitsError {}

/// Regroups `values`, each holding `from_bits` bits, into groups of `to_bits` bits,
/// treating the input as one big-endian bit string.
///
/// With `pad`, leftover bits are emitted as one final group filled with zeros on the
/// low end. Without it, leftover bits must be fewer than `from_bits` and all zero,
/// otherwise the conversion would lose information and fails with
/// [`ConvertBitsError::InvalidPadding`].
///
/// Both widths must be between 1 and 8.
pub fn convert_bits(
    values: &[u8],
    from_bits: u32,
    to_bits: u32,
    pad: bool,
) -> Result<Vec<u8>, ConvertBitsError> {
    debug_assert!((1..=8).contains(&from_bits) && (1..=8).contains(&to_bits));

    let output_mask = (1u32 << to_bits) - 1;
    // Keeps the accumulator from growing past the bits still to be emitted.
    let buffer_mask = (1u32 << (from_bits + to_bits - 1)) - 1;

    let mut buffer = 0u32;
    let mut bits = 0u32;
    let mut output = Vec::with_capacity(values.len() * from_bits as usize / to_bits as usize + 1);

    for &value in values {
        if u32::from(value) >> from_bits != 0 {
            return Err(ConvertBitsError::InvalidValue { value, from_bits });
        }
        buffer = ((buffer << from_bits) | u32::from(value)) & buffer_mask;
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            output.push(((buffer >> bits) & output_mask) as u8);
        }
    }

    let leftover = (buffer << (to_bits - bits)) & output_mask;
    if pad {
        if bits > 0 {
            output.push(leftover as u8);
        }
    } else if bits >= from_bits || leftover != 0 {
        return Err(ConvertBitsError::InvalidPadding);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::collection::vec;
    use proptest::prelude::*;

    use super::{convert_bits, ConvertBitsError};

    #[test]
    fn pads_final_group() {
        // 11111111 -> 11111 11000
        assert_eq!(convert_bits(&[0xff], 8, 5, true), Ok(vec![31, 28]));
        assert_eq!(convert_bits(&[], 8, 5, true), Ok(vec![]));
        assert_eq!(convert_bits(&[0x00, 0x01], 8, 5, true), Ok(vec![0, 0, 0, 16]));
    }

    #[test]
    fn unpadded_rejects_lossy_input() {
        // 11111 11000 -> 11111111, the two zero bits left over are dropped.
        assert_eq!(convert_bits(&[31, 28], 5, 8, false), Ok(vec![0xff]));
        // 11111 11001: the leftover bits are not zero.
        assert_eq!(
            convert_bits(&[31, 25], 5, 8, false),
            Err(ConvertBitsError::InvalidPadding)
        );
        // A whole 5-bit group left over would be discarded.
        assert_eq!(
            convert_bits(&[31, 28, 0], 5, 8, false),
            Err(ConvertBitsError::InvalidPadding)
        );
        assert_eq!(
            convert_bits(&[0xff], 8, 5, false),
            Err(ConvertBitsError::InvalidPadding)
        );
    }

    #[test]
    fn rejects_oversized_values() {
        assert_matches!(
            convert_bits(&[32], 5, 8, false),
            Err(ConvertBitsError::InvalidValue { value: 32, from_bits: 5 })
        );
    }

    proptest! {
        #[test]
        fn bytes_to_groups_and_back(bytes in vec(any::<u8>(), 0..64)) {
            let groups = convert_bits(&bytes, 8, 5, true).unwrap();
            prop_assert_eq!(groups.len(), (bytes.len() * 8 + 4) / 5);
            prop_assert!(groups.iter().all(|&g| g < 32));
            prop_assert_eq!(convert_bits(&groups, 5, 8, false).unwrap(), bytes);
        }
    }
}
