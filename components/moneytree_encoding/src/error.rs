use std::fmt;

/// An error while converting between hex, integers and the Base58/Base64 text encodings.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The input is not valid hex.
    InvalidHex { input: String, reason: hex::FromHexError },
    /// The input contains a character outside the Base58 alphabet.
    InvalidBase58 { input: String, character: char },
    /// The input is valid Base58 but decodes to fewer bytes than a Base58Check checksum.
    MissingChecksum(String),
    /// The Base58Check checksum does not match the payload it is attached to.
    ChecksumMismatch { expected: String, actual: String },
    /// The input is not valid standard Base64.
    InvalidBase64(String),
    /// A Base58Check address carries a version byte the network does not use.
    UnknownVersion(u8),
    /// An address hash, with its version byte if any, has the wrong number of bytes.
    InvalidPayloadLength(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidHex { input, reason } => {
                write!(f, "Invalid hex string {:?}: {}", input, reason)
            }
            Error::InvalidBase58 { input, character } => write!(
                f,
                "Value not a valid Base58 String: {:?} contains {:?}",
                input, character
            ),
            Error::MissingChecksum(input) => {
                write!(f, "{:?} is too short to carry a Base58Check checksum", input)
            }
            Error::ChecksumMismatch { expected, actual } => write!(
                f,
                "Base58Check checksum mismatch: expected {}, got {}",
                expected, actual
            ),
            Error::InvalidBase64(input) => write!(f, "Invalid Base64 string {:?}", input),
            Error::UnknownVersion(version) => write!(
                f,
                "Version byte {:#04x} is not an address version of this network",
                version
            ),
            Error::InvalidPayloadLength(len) => {
                write!(f, "Invalid address payload length {}", len)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidHex { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
