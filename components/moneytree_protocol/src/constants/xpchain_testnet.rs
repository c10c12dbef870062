//! Constants for the XPChain test network.

pub const B58_PUBKEY_ADDRESS_PREFIX: u8 = 0x8a;

pub const B58_SCRIPT_ADDRESS_PREFIX: u8 = 0x58;

pub const B58_SCRIPT_ADDRESS_CHAR: char = '2';

pub const HRP_SEGWIT_ADDRESS: &str = "txpc";

pub const B58_SECRET_KEY_PREFIX: u8 = 0xef;

pub const EXTENDED_PRIVATE_KEY_PREFIX: [u8; 4] = [0x04, 0x35, 0x83, 0x94];

pub const EXTENDED_PUBLIC_KEY_PREFIX: [u8; 4] = [0x04, 0x35, 0x87, 0xcf];

pub const COMPRESSED_WIF_CHARS: &[char] = &['c'];

pub const UNCOMPRESSED_WIF_CHARS: &[char] = &['9'];
