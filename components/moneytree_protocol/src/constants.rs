//! Network-specific address encoding constants.

pub mod bitcoin;
pub mod bitcoin_testnet;
pub mod xpchain;
pub mod xpchain_testnet;

/// The peer-to-peer protocol version shared by every supported network.
pub const PROTOCOL_VERSION: u32 = 70001;

/// The flag byte appended to a WIF private key whose public key is compressed.
pub const PRIVKEY_COMPRESSION_FLAG: u8 = 0x01;
