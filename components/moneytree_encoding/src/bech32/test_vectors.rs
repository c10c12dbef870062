//! Checksum test vectors from [BIP 173].
//!
//! [BIP 173]: https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki#test-vectors

pub(super) const VALID_CHECKSUM: &[&str] = &[
    "A12UEL5L",
    "a12uel5l",
    "an83characterlonghumanreadablepartthatcontainsthenumber1andtheexcludedcharactersbio1tt5tgs",
    "abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw",
    "11qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqc8247j",
    "split1checkupstagehandshakeupstreamerranterredcaperred2y9e3w",
];

pub(super) const INVALID_CHECKSUM: &[&str] = &[
    // HRP character out of range
    " 1nwldj5",
    "\x7F1axkwrx",
    // Overall max length exceeded
    "an84characterslonghumanreadablepartthatcontainsthenumber1andtheexcludedcharactersbio1569pvx",
    // No separator character
    "pzry9x0s0muk",
    // Empty HRP
    "1pzry9x0s0muk",
    // Invalid data character
    "x1b4n0q5v",
    // Too short checksum
    "li1dgmt3",
    // Invalid character in checksum
    "de1lg7wt\u{ff}",
];
