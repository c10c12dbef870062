//! *Network parameters for Bitcoin-style address encodings.*
//!
//! `moneytree_protocol` holds the read-only registry that maps a network symbol such as
//! `bitcoin` or `bitcoin_testnet` to the version bytes, Bech32 human-readable part and key
//! prefixes used when encoding addresses and keys for that network.
//!
//! ```
//! let params = moneytree_protocol::lookup("bitcoin").unwrap();
//! assert_eq!(params.bech32_hrp(), "bc");
//! assert!(moneytree_protocol::lookup("nonexistent").is_err());
//! ```
//!
#![cfg_attr(feature = "std", doc = "## Feature flags")]
#![cfg_attr(feature = "std", doc = document_features::document_features!())]
//!

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Catch documentation errors caused by code changes.
#![deny(rustdoc::broken_intra_doc_links)]

pub mod constants;
mod network;

pub use network::{
    lookup, networks, Network, NetworkParameters, UnknownNetwork, BITCOIN, BITCOIN_TESTNET,
    XPCHAIN, XPCHAIN_TESTNET,
};

#[cfg(any(test, feature = "test-dependencies"))]
pub use network::testing;
