//! One-shot hash functions over hex or raw input, returning lowercase hex.

use std::borrow::Cow;

use hmac::{Hmac, Mac};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256, Sha512};

use crate::{convert::hex_to_bytes, Error};

/// A hash algorithm supported by [`digest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sha256,
    Sha512,
    Ripemd160,
}

/// The input to a hash function, tagged with how it is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    /// A hex string whose decoded bytes are hashed.
    Hex(&'a str),
    /// Bytes that are hashed as they are, for example ASCII text.
    Bytes(&'a [u8]),
}

impl<'a> Source<'a> {
    fn bytes(self) -> Result<Cow<'a, [u8]>, Error> {
        match self {
            Source::Hex(hex) => hex_to_bytes(hex).map(Cow::Owned),
            Source::Bytes(bytes) => Ok(Cow::Borrowed(bytes)),
        }
    }
}

/// Hashes `bytes` with `algorithm` and returns the digest as lowercase hex.
pub fn digest(algorithm: Algorithm, bytes: &[u8]) -> String {
    match algorithm {
        Algorithm::Sha256 => hex::encode(Sha256::digest(bytes)),
        Algorithm::Sha512 => hex::encode(Sha512::digest(bytes)),
        Algorithm::Ripemd160 => hex::encode(Ripemd160::digest(bytes)),
    }
}

fn digest_source(algorithm: Algorithm, source: Source<'_>) -> Result<String, Error> {
    source.bytes().map(|bytes| digest(algorithm, &bytes))
}

pub fn sha256(source: Source<'_>) -> Result<String, Error> {
    digest_source(Algorithm::Sha256, source)
}

pub fn ripemd160(source: Source<'_>) -> Result<String, Error> {
    digest_source(Algorithm::Ripemd160, source)
}

/// SHA-256 applied twice, the second time to the raw bytes of the first digest.
pub fn double_sha256(source: Source<'_>) -> Result<String, Error> {
    let bytes = source.bytes()?;
    Ok(hex::encode(Sha256::digest(Sha256::digest(&bytes))))
}

/// RIPEMD-160 of the SHA-256 of the bytes of `hex`: the fingerprint used in P2PKH and
/// P2SH addresses.
pub fn hash160(hex: &str) -> Result<String, Error> {
    let bytes = hex_to_bytes(hex)?;
    Ok(hex::encode(Ripemd160::digest(Sha256::digest(&bytes))))
}

/// Computes HMAC-SHA512 of `message` under `key`.
pub fn hmac_sha512(key: &[u8], message: &[u8]) -> [u8; 64] {
    let mut mac = Hmac::<Sha512>::new_from_slice(key).expect("HMAC can take a key of any size");
    mac.update(message);

    let mut tag = [0; 64];
    tag.copy_from_slice(&mac.finalize().into_bytes());
    tag
}

/// Computes HMAC-SHA512 of `message` under `key` as 128 lowercase hex digits.
pub fn hmac_sha512_hex(key: &[u8], message: &[u8]) -> String {
    hex::encode(hmac_sha512(key, message))
}
