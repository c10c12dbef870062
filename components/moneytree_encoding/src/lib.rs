//! *Text encodings for Bitcoin-style addresses and keys.*
//!
//! This crate turns raw key and script bytes, passed around as hex strings, into
//! checksum-protected text and back:
//!
//! - [`base58`] implements Base58 over unbounded integers and Base58Check, the encoding
//!   of P2PKH and P2SH addresses, WIF private keys and extended keys.
//! - [`bech32`] implements the [BIP 173] checksummed base-32 encoding and segwit witness
//!   programs encoded with it.
//! - [`hash`] provides the digests these encodings and their callers rely on.
//! - [`address`] combines them with the network parameters from
//!   [`moneytree_protocol`].
//!
//! ```
//! use moneytree_encoding::{address::p2pkh_address_from_pubkey, base58::from_serialized_base58};
//!
//! let params = moneytree_protocol::lookup("bitcoin").unwrap();
//! let address = p2pkh_address_from_pubkey(
//!     "0250863ad64a87ae8a2fe83c1af1a8403cb53f53e486d8511dad8a04887e5b2352",
//!     params,
//! )
//! .unwrap();
//! assert_eq!(address, "1PMycacnJaSqwwJqjawXBErnLsZ7RkXUAs");
//! assert_eq!(
//!     from_serialized_base58(&address).unwrap(),
//!     "00f54a5851e9372b87810a8e60cdd2e7cfd80b6e31",
//! );
//! ```
//!
//! [BIP 173]: https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki
//!
#![cfg_attr(feature = "std", doc = "## Feature flags")]
#![cfg_attr(feature = "std", doc = document_features::document_features!())]
//!

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Catch documentation errors caused by code changes.
#![deny(rustdoc::broken_intra_doc_links)]

pub mod address;
pub mod base58;
pub mod bech32;
pub mod bits;
pub mod convert;
pub mod hash;

mod error;
pub use error::Error;
