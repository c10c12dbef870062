//! Constants for the XPChain main network.
//!
//! XPChain shares Bitcoin's key prefixes but uses its own address version bytes and
//! segwit HRP.

pub const B58_PUBKEY_ADDRESS_PREFIX: u8 = 0x4c;

pub const B58_SCRIPT_ADDRESS_PREFIX: u8 = 0x1c;

pub const B58_SCRIPT_ADDRESS_CHAR: char = '3';

pub const HRP_SEGWIT_ADDRESS: &str = "xpc";

pub const B58_SECRET_KEY_PREFIX: u8 = 0x80;

pub const EXTENDED_PRIVATE_KEY_PREFIX: [u8; 4] = [0x04, 0x88, 0xad, 0xe4];

pub const EXTENDED_PUBLIC_KEY_PREFIX: [u8; 4] = [0x04, 0x88, 0xb2, 0x1e];

pub const COMPRESSED_WIF_CHARS: &[char] = &['K', 'L'];

pub const UNCOMPRESSED_WIF_CHARS: &[char] = &['5'];
