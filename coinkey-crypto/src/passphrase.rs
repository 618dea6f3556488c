//! Passphrase to private-key bytes.
//!
//! Produces 32 candidate scalar bytes; range checking against the curve
//! order happens when the bytes are turned into a scalar.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::error::CryptoError;
use crate::hash::{double_sha256, sha256};

/// How a passphrase is stretched into key bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PassphraseScheme {
    /// `SHA-256(passphrase)` with the bit clamping used by Komodo-family
    /// wallets: `h[0] &= 248; h[31] &= 127; h[31] |= 64`.
    #[default]
    Iguana,
    /// `SHA-256(SHA-256(passphrase))`.
    DoubleSha256,
}

impl fmt::Display for PassphraseScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassphraseScheme::Iguana => f.write_str("iguana"),
            PassphraseScheme::DoubleSha256 => f.write_str("double-sha256"),
        }
    }
}

impl FromStr for PassphraseScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "iguana" => Ok(PassphraseScheme::Iguana),
            "double-sha256" | "sha256d" => Ok(PassphraseScheme::DoubleSha256),
            other => Err(format!("unknown passphrase scheme: {}", other)),
        }
    }
}

/// Derive 32 private-key bytes from a passphrase.
///
/// # Arguments
/// * `passphrase` - The secret phrase (must not be empty)
/// * `scheme` - The stretching scheme
///
/// # Returns
/// The key bytes, wiped from memory when dropped.
pub fn key_bytes_from_passphrase(
    passphrase: &str,
    scheme: PassphraseScheme,
) -> Result<Zeroizing<[u8; 32]>, CryptoError> {
    if passphrase.is_empty() {
        return Err(CryptoError::EmptyPassphrase);
    }
    debug!("deriving key bytes with the {} passphrase scheme", scheme);

    let bytes = match scheme {
        PassphraseScheme::Iguana => {
            let mut hash = sha256(passphrase.as_bytes());
            hash[0] &= 248;
            hash[31] &= 127;
            hash[31] |= 64;
            hash
        }
        PassphraseScheme::DoubleSha256 => double_sha256(passphrase.as_bytes()),
    };

    Ok(Zeroizing::new(bytes))
}
