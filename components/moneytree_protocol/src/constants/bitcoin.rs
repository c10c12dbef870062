//! Constants for the Bitcoin main network.

/// The version byte for a Base58Check-encoded mainnet P2PKH address.
pub const B58_PUBKEY_ADDRESS_PREFIX: u8 = 0x00;

/// The version byte for a Base58Check-encoded mainnet P2SH address.
pub const B58_SCRIPT_ADDRESS_PREFIX: u8 = 0x05;

/// The leading character of every Base58Check-encoded mainnet P2SH address.
pub const B58_SCRIPT_ADDRESS_CHAR: char = '3';

/// The HRP for a Bech32-encoded mainnet segwit address.
///
/// Defined in [BIP 173].
///
/// [BIP 173]: https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki
pub const HRP_SEGWIT_ADDRESS: &str = "bc";

/// The version byte for a mainnet WIF private key.
pub const B58_SECRET_KEY_PREFIX: u8 = 0x80;

/// The version bytes for a mainnet extended private key (`xprv`).
///
/// Defined in [BIP 32].
///
/// [BIP 32]: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki
pub const EXTENDED_PRIVATE_KEY_PREFIX: [u8; 4] = [0x04, 0x88, 0xad, 0xe4];

/// The version bytes for a mainnet extended public key (`xpub`).
pub const EXTENDED_PUBLIC_KEY_PREFIX: [u8; 4] = [0x04, 0x88, 0xb2, 0x1e];

/// The possible leading characters of a compressed mainnet WIF private key.
pub const COMPRESSED_WIF_CHARS: &[char] = &['K', 'L'];

/// The leading character of an uncompressed mainnet WIF private key.
pub const UNCOMPRESSED_WIF_CHARS: &[char] = &['5'];
