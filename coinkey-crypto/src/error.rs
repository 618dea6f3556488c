//! Error types for cryptographic operations.

use thiserror::Error;

/// Errors that can occur during cryptographic operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// The public key has an invalid length or format.
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    /// The key seed has an invalid length or format.
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    /// A passphrase must contain at least one byte.
    #[error("Passphrase is empty")]
    EmptyPassphrase,
}

impl From<ed25519_dalek::SignatureError> for CryptoError {
    fn from(err: ed25519_dalek::SignatureError) -> Self {
        CryptoError::InvalidPublicKey(err.to_string())
    }
}
