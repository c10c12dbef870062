//! The registry of supported networks and their address encoding parameters.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use getset::CopyGetters;
use lazy_static::lazy_static;

use crate::constants::{
    bitcoin, bitcoin_testnet, xpchain, xpchain_testnet, PRIVKEY_COMPRESSION_FLAG,
    PROTOCOL_VERSION,
};

/// The address encoding parameters of a single network.
///
/// Records are only ever constructed by this crate, as statics, and are never mutated.
/// Obtain one through [`lookup`] or [`Network::params`].
#[derive(Debug, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct NetworkParameters {
    /// The version byte prefixed to a HASH160 to form a P2PKH address.
    address_version: u8,
    /// The version byte prefixed to a script hash to form a P2SH address.
    p2sh_version: u8,
    /// The character every P2SH address on this network starts with.
    p2sh_char: char,
    /// The human-readable part of this network's segwit addresses.
    bech32_hrp: &'static str,
    /// The version byte of a WIF private key.
    privkey_version: u8,
    /// The byte appended to a WIF private key to mark its public key as compressed.
    privkey_compression_flag: u8,
    /// The version bytes of a serialized extended private key.
    extended_privkey_version: [u8; 4],
    /// The version bytes of a serialized extended public key.
    extended_pubkey_version: [u8; 4],
    /// The characters a compressed WIF private key may start with.
    compressed_wif_chars: &'static [char],
    /// The characters an uncompressed WIF private key may start with.
    uncompressed_wif_chars: &'static [char],
    protocol_version: u32,
}

pub static BITCOIN: NetworkParameters = NetworkParameters {
    address_version: bitcoin::B58_PUBKEY_ADDRESS_PREFIX,
    p2sh_version: bitcoin::B58_SCRIPT_ADDRESS_PREFIX,
    p2sh_char: bitcoin::B58_SCRIPT_ADDRESS_CHAR,
    bech32_hrp: bitcoin::HRP_SEGWIT_ADDRESS,
    privkey_version: bitcoin::B58_SECRET_KEY_PREFIX,
    privkey_compression_flag: PRIVKEY_COMPRESSION_FLAG,
    extended_privkey_version: bitcoin::EXTENDED_PRIVATE_KEY_PREFIX,
    extended_pubkey_version: bitcoin::EXTENDED_PUBLIC_KEY_PREFIX,
    compressed_wif_chars: bitcoin::COMPRESSED_WIF_CHARS,
    uncompressed_wif_chars: bitcoin::UNCOMPRESSED_WIF_CHARS,
    protocol_version: PROTOCOL_VERSION,
};

pub static BITCOIN_TESTNET: NetworkParameters = NetworkParameters {
    address_version: bitcoin_testnet::B58_PUBKEY_ADDRESS_PREFIX,
    p2sh_version: bitcoin_testnet::B58_SCRIPT_ADDRESS_PREFIX,
    p2sh_char: bitcoin_testnet::B58_SCRIPT_ADDRESS_CHAR,
    bech32_hrp: bitcoin_testnet::HRP_SEGWIT_ADDRESS,
    privkey_version: bitcoin_testnet::B58_SECRET_KEY_PREFIX,
    privkey_compression_flag: PRIVKEY_COMPRESSION_FLAG,
    extended_privkey_version: bitcoin_testnet::EXTENDED_PRIVATE_KEY_PREFIX,
    extended_pubkey_version: bitcoin_testnet::EXTENDED_PUBLIC_KEY_PREFIX,
    compressed_wif_chars: bitcoin_testnet::COMPRESSED_WIF_CHARS,
    uncompressed_wif_chars: bitcoin_testnet::UNCOMPRESSED_WIF_CHARS,
    protocol_version: PROTOCOL_VERSION,
};

pub static XPCHAIN: NetworkParameters = NetworkParameters {
    address_version: xpchain::B58_PUBKEY_ADDRESS_PREFIX,
    p2sh_version: xpchain::B58_SCRIPT_ADDRESS_PREFIX,
    p2sh_char: xpchain::B58_SCRIPT_ADDRESS_CHAR,
    bech32_hrp: xpchain::HRP_SEGWIT_ADDRESS,
    privkey_version: xpchain::B58_SECRET_KEY_PREFIX,
    privkey_compression_flag: PRIVKEY_COMPRESSION_FLAG,
    extended_privkey_version: xpchain::EXTENDED_PRIVATE_KEY_PREFIX,
    extended_pubkey_version: xpchain::EXTENDED_PUBLIC_KEY_PREFIX,
    compressed_wif_chars: xpchain::COMPRESSED_WIF_CHARS,
    uncompressed_wif_chars: xpchain::UNCOMPRESSED_WIF_CHARS,
    protocol_version: PROTOCOL_VERSION,
};

pub static XPCHAIN_TESTNET: NetworkParameters = NetworkParameters {
    address_version: xpchain_testnet::B58_PUBKEY_ADDRESS_PREFIX,
    p2sh_version: xpchain_testnet::B58_SCRIPT_ADDRESS_PREFIX,
    p2sh_char: xpchain_testnet::B58_SCRIPT_ADDRESS_CHAR,
    bech32_hrp: xpchain_testnet::HRP_SEGWIT_ADDRESS,
    privkey_version: xpchain_testnet::B58_SECRET_KEY_PREFIX,
    privkey_compression_flag: PRIVKEY_COMPRESSION_FLAG,
    extended_privkey_version: xpchain_testnet::EXTENDED_PRIVATE_KEY_PREFIX,
    extended_pubkey_version: xpchain_testnet::EXTENDED_PUBLIC_KEY_PREFIX,
    compressed_wif_chars: xpchain_testnet::COMPRESSED_WIF_CHARS,
    uncompressed_wif_chars: xpchain_testnet::UNCOMPRESSED_WIF_CHARS,
    protocol_version: PROTOCOL_VERSION,
};

/// A network known to the registry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Network {
    Bitcoin,
    BitcoinTestnet,
    Xpchain,
    XpchainTestnet,
}

impl Network {
    /// Every supported network, in registry order.
    pub const ALL: [Network; 4] = [
        Network::Bitcoin,
        Network::BitcoinTestnet,
        Network::Xpchain,
        Network::XpchainTestnet,
    ];

    /// Returns the canonical symbol of this network.
    pub fn symbol(&self) -> &'static str {
        match self {
            Network::Bitcoin => "bitcoin",
            Network::BitcoinTestnet => "bitcoin_testnet",
            Network::Xpchain => "xpchain",
            Network::XpchainTestnet => "xpchain_testnet",
        }
    }

    /// Returns the parameter record of this network.
    pub fn params(&self) -> &'static NetworkParameters {
        match self {
            Network::Bitcoin => &BITCOIN,
            Network::BitcoinTestnet => &BITCOIN_TESTNET,
            Network::Xpchain => &XPCHAIN,
            Network::XpchainTestnet => &XPCHAIN_TESTNET,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Historical names that resolve to an existing network.
const ALIASES: &[(&str, Network)] = &[("testnet3", Network::BitcoinTestnet)];

lazy_static! {
    static ref REGISTRY: BTreeMap<&'static str, Network> = Network::ALL
        .iter()
        .map(|net| (net.symbol(), *net))
        .chain(ALIASES.iter().copied())
        .collect();
}

/// The error returned when a network symbol is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNetwork(pub String);

impl fmt::Display for UnknownNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a valid network!", self.0)
    }
}

impl Error for UnknownNetwork {}

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGISTRY.get(s).copied().ok_or_else(|| {
            tracing::debug!("Rejected unknown network symbol {:?}", s);
            UnknownNetwork(s.to_owned())
        })
    }
}

/// Looks up the parameter record registered under `symbol`.
///
/// Aliases resolve to the same record as the network they name, not to a copy of it.
///
/// # Errors
///
/// Returns [`UnknownNetwork`] carrying `symbol` if no network is registered under it.
/// There is no fallback network.
pub fn lookup(symbol: &str) -> Result<&'static NetworkParameters, UnknownNetwork> {
    symbol.parse::<Network>().map(|net| net.params())
}

/// Returns the canonical symbols of all supported networks.
pub fn networks() -> impl Iterator<Item = &'static str> {
    Network::ALL.iter().map(|net| net.symbol())
}

#[cfg(any(test, feature = "test-dependencies"))]
pub mod testing {
    use proptest::prelude::*;

    use super::Network;

    pub fn arb_network() -> impl Strategy<Value = Network> {
        prop::sample::select(Network::ALL.to_vec())
    }
}
