//! Error types for address operations.

use coinkey_crypto::CryptoError;
use coinkey_curve::CurveError;
use thiserror::Error;

/// Errors that can occur while building or decoding addresses and keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// A character outside the codec's alphabet was found.
    ///
    /// `position` is the zero-based character index (not byte offset) into
    /// the encoded text, after surrounding whitespace and any `.onion`
    /// suffix are removed. Base58 and Base32 decoding agree on this.
    #[error("Invalid character {character:?} at position {position}")]
    DecodeAlphabet { character: char, position: usize },

    /// The string is not valid Base32 for reasons other than its alphabet.
    #[error("Invalid Base32 encoding: {0}")]
    InvalidBase32(String),

    /// The embedded checksum does not match the payload.
    #[error("Invalid checksum")]
    InvalidChecksum,

    /// The decoded payload has an invalid length.
    #[error("Invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The version byte is not acceptable here.
    #[error("Invalid version byte: 0x{0:02x}")]
    InvalidVersion(u8),

    /// The version byte belongs to another network.
    #[error("Network mismatch: expected version 0x{expected:02x}, got 0x{actual:02x}")]
    NetworkMismatch { expected: u8, actual: u8 },

    /// The string is not an address of any known shape.
    #[error("Unrecognized address format")]
    UnrecognizedFormat,

    /// Curve arithmetic or key serialization failed.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// A hashing or key operation failed.
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}
