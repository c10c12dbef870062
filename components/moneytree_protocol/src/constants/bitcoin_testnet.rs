//! Constants for the Bitcoin test network.

/// The version byte for a Base58Check-encoded testnet P2PKH address.
pub const B58_PUBKEY_ADDRESS_PREFIX: u8 = 0x6f;

/// The version byte for a Base58Check-encoded testnet P2SH address.
pub const B58_SCRIPT_ADDRESS_PREFIX: u8 = 0xc4;

/// The leading character of every Base58Check-encoded testnet P2SH address.
pub const B58_SCRIPT_ADDRESS_CHAR: char = '2';

/// The HRP for a Bech32-encoded testnet segwit address.
pub const HRP_SEGWIT_ADDRESS: &str = "tb";

/// The version byte for a testnet WIF private key.
pub const B58_SECRET_KEY_PREFIX: u8 = 0xef;

/// The version bytes for a testnet extended private key (`tprv`).
pub const EXTENDED_PRIVATE_KEY_PREFIX: [u8; 4] = [0x04, 0x35, 0x83, 0x94];

/// The version bytes for a testnet extended public key (`tpub`).
pub const EXTENDED_PUBLIC_KEY_PREFIX: [u8; 4] = [0x04, 0x35, 0x87, 0xcf];

pub const COMPRESSED_WIF_CHARS: &[char] = &['c'];

pub const UNCOMPRESSED_WIF_CHARS: &[char] = &['9'];
