//! Addresses for a given network, built from the Base58Check and Bech32 encodings.

use moneytree_protocol::NetworkParameters;

use crate::{
    base58::{from_serialized_base58, to_serialized_base58},
    bech32::{from_serialized_bech32, to_serialized_bech32, DecodeError},
    convert::{bytes_to_hex, hex_to_bytes},
    hash::hash160,
    Error,
};

/// The length of the hash carried by P2PKH and P2SH addresses.
const HASH_LEN: usize = 20;

/// The hash carried by a Base58Check address, as hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressPayload {
    /// The HASH160 of a public key.
    P2pkh(String),
    /// The HASH160 of a redeem script.
    P2sh(String),
}

fn versioned_address(version: u8, hash_hex: &str) -> Result<String, Error> {
    let len = hex_to_bytes(hash_hex)?.len();
    if len != HASH_LEN {
        return Err(Error::InvalidPayloadLength(len));
    }
    to_serialized_base58(&format!("{:02x}{}", version, hash_hex.to_ascii_lowercase()))
}

/// Encodes the P2PKH address of a public key hash on the given network.
pub fn p2pkh_address(hash160_hex: &str, params: &NetworkParameters) -> Result<String, Error> {
    versioned_address(params.address_version(), hash160_hex)
}

/// Encodes the P2PKH address of a serialized public key on the given network.
pub fn p2pkh_address_from_pubkey(
    pubkey_hex: &str,
    params: &NetworkParameters,
) -> Result<String, Error> {
    p2pkh_address(&hash160(pubkey_hex)?, params)
}

/// Encodes the P2SH address of a script hash on the given network.
pub fn p2sh_address(script_hash_hex: &str, params: &NetworkParameters) -> Result<String, Error> {
    versioned_address(params.p2sh_version(), script_hash_hex)
}

/// Encodes a segwit address on the given network.
///
/// Returns `None` under the same conditions as [`to_serialized_bech32`].
pub fn segwit_address(
    witness_program_hex: &str,
    version: u8,
    params: &NetworkParameters,
) -> Option<String> {
    to_serialized_bech32(witness_program_hex, version, params.bech32_hrp())
}

/// Decodes a Base58Check address of the given network into the hash it carries.
///
/// # Errors
///
/// Any error of [`from_serialized_base58`], [`Error::InvalidPayloadLength`] if the
/// payload is not a version byte followed by a 20-byte hash, or [`Error::UnknownVersion`]
/// if the version byte is neither the P2PKH nor the P2SH version of the network.
pub fn decode_base58_address(
    address: &str,
    params: &NetworkParameters,
) -> Result<AddressPayload, Error> {
    let payload = hex_to_bytes(&from_serialized_base58(address)?)?;
    if payload.len() != 1 + HASH_LEN {
        return Err(Error::InvalidPayloadLength(payload.len()));
    }
    let (version, hash) = (payload[0], bytes_to_hex(&payload[1..]));

    if version == params.address_version() {
        Ok(AddressPayload::P2pkh(hash))
    } else if version == params.p2sh_version() {
        Ok(AddressPayload::P2sh(hash))
    } else {
        Err(Error::UnknownVersion(version))
    }
}

/// Decodes a segwit address of the given network into its witness version and program.
pub fn decode_segwit_address(
    address: &str,
    params: &NetworkParameters,
) -> Result<(u8, String), DecodeError> {
    from_serialized_bech32(address, params.bech32_hrp())
}
