//! Hidden-service key types.

use std::fmt;

use ed25519_dalek::{SigningKey, VerifyingKey};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::error::CryptoError;
use crate::hash::sha256;

/// An Ed25519 public key identifying a hidden service (32 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OnionPublicKey(#[serde(with = "hex_bytes_32")] pub [u8; 32]);

impl OnionPublicKey {
    /// Create a new public key from raw bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create from a hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, CryptoError> {
        let bytes =
            hex::decode(hex_str).map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
        Self::try_from(bytes.as_slice())
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to an ed25519_dalek VerifyingKey, checking the encoding.
    pub fn to_verifying_key(&self) -> Result<VerifyingKey, CryptoError> {
        Ok(VerifyingKey::from_bytes(&self.0)?)
    }
}

impl From<VerifyingKey> for OnionPublicKey {
    fn from(key: VerifyingKey) -> Self {
        Self(key.to_bytes())
    }
}

impl TryFrom<&[u8]> for OnionPublicKey {
    type Error = CryptoError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 32 {
            return Err(CryptoError::InvalidPublicKey(format!(
                "Expected 32 bytes, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// An Ed25519 key pair for a hidden service.
///
/// The key pair is independent of the coin key unless it is built with
/// [`OnionKeyPair::from_public_key_hash`].
pub struct OnionKeyPair {
    signing_key: SigningKey,
}

impl OnionKeyPair {
    /// Create from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Create from a hex-encoded 32-byte seed.
    pub fn from_seed_hex(hex_str: &str) -> Result<Self, CryptoError> {
        let bytes = Zeroizing::new(
            hex::decode(hex_str.trim()).map_err(|e| CryptoError::InvalidSeed(e.to_string()))?,
        );
        if bytes.len() != 32 {
            return Err(CryptoError::InvalidSeed(format!(
                "Expected 32 bytes, got {}",
                bytes.len()
            )));
        }
        let mut seed = Zeroizing::new([0u8; 32]);
        seed.copy_from_slice(&bytes);
        Ok(Self::from_seed(&seed))
    }

    /// Derive the key pair from a coin public-key hash: `seed = SHA-256(hash160)`.
    pub fn from_public_key_hash(public_key_hash: &[u8; 20]) -> Self {
        let seed = Zeroizing::new(sha256(public_key_hash));
        Self::from_seed(&seed)
    }

    /// Get the public key.
    pub fn public_key(&self) -> OnionPublicKey {
        OnionPublicKey::from(self.signing_key.verifying_key())
    }

    /// Get the seed bytes (use with caution).
    pub fn seed_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }
}

impl fmt::Debug for OnionKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnionKeyPair")
            .field("public_key", &self.public_key().to_hex())
            .field("seed", &"[REDACTED]")
            .finish()
    }
}

/// Serde module for 32-byte arrays as hex strings.
mod hex_bytes_32 {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<[u8; 32], D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        if bytes.len() != 32 {
            return Err(serde::de::Error::custom(format!(
                "Expected 32 bytes, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(arr)
    }
}
