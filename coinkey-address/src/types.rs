//! Core types for networks, key bundles and decoded keys.

use std::fmt;

use coinkey_crypto::OnionPublicKey;
use coinkey_curve::{CompressedPublicKey, SecretScalar};
use serde::{Deserialize, Serialize};

/// Version bytes of a coin network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Bitcoin mainnet.
    #[default]
    Bitcoin,
    /// Bitcoin testnet.
    Testnet,
    /// Komodo mainnet.
    Komodo,
    /// Caller-supplied version bytes.
    Custom { pubkey_hash: u8, private_key: u8 },
}

impl Network {
    /// Presets that can be recognised from a version byte.
    pub const PRESETS: [Network; 3] = [Network::Bitcoin, Network::Testnet, Network::Komodo];

    /// Version byte prepended to a public-key hash.
    pub fn pubkey_hash_version(&self) -> u8 {
        match self {
            Network::Bitcoin => 0x00,
            Network::Testnet => 0x6f,
            Network::Komodo => 0x3c,
            Network::Custom { pubkey_hash, .. } => *pubkey_hash,
        }
    }

    /// Version byte prepended to a private key (WIF).
    pub fn private_key_version(&self) -> u8 {
        match self {
            Network::Bitcoin => 0x80,
            Network::Testnet => 0xef,
            Network::Komodo => 0xbc,
            Network::Custom { private_key, .. } => *private_key,
        }
    }

    /// Parse a preset by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "bitcoin" | "btc" | "mainnet" => Some(Network::Bitcoin),
            "testnet" | "tbtc" => Some(Network::Testnet),
            "komodo" | "kmd" => Some(Network::Komodo),
            _ => None,
        }
    }

    /// Find the preset using this public-key-hash version byte.
    pub fn from_pubkey_hash_version(byte: u8) -> Option<Self> {
        Self::PRESETS
            .into_iter()
            .find(|network| network.pubkey_hash_version() == byte)
    }

    /// Find the preset using this private-key version byte.
    pub fn from_private_key_version(byte: u8) -> Option<Self> {
        Self::PRESETS
            .into_iter()
            .find(|network| network.private_key_version() == byte)
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Bitcoin => "bitcoin",
            Network::Testnet => "testnet",
            Network::Komodo => "komodo",
            Network::Custom { .. } => "custom",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Custom {
                pubkey_hash,
                private_key,
            } => write!(f, "custom(0x{:02x}/0x{:02x})", pubkey_hash, private_key),
            preset => f.write_str(preset.name()),
        }
    }
}

/// A hidden-service identity: the Ed25519 public key and its onion address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnionIdentity {
    /// The Ed25519 public key.
    pub public_key: OnionPublicKey,
    /// The `<56 base32 chars>.onion` address.
    pub address: String,
}

/// Everything derived from one private scalar.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBundle {
    /// Network whose version bytes were used.
    pub network: Network,
    /// SEC1 compressed public key.
    pub public_key: CompressedPublicKey,
    /// `RIPEMD-160(SHA-256(public_key))`.
    #[serde(with = "hex_bytes_20")]
    pub public_key_hash: [u8; 20],
    /// Base58Check pay-to-pubkey-hash address.
    pub address: String,
    /// WIF private key for the uncompressed public key.
    pub wif_uncompressed: String,
    /// WIF private key flagged for the compressed public key.
    pub wif_compressed: String,
    /// Hidden-service identity, when a signature key was supplied.
    pub onion: Option<OnionIdentity>,
}

impl fmt::Debug for KeyBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyBundle")
            .field("network", &self.network)
            .field("public_key", &self.public_key.to_hex())
            .field("public_key_hash", &hex::encode(self.public_key_hash))
            .field("address", &self.address)
            .field("wif_uncompressed", &"[REDACTED]")
            .field("wif_compressed", &"[REDACTED]")
            .field("onion", &self.onion)
            .finish()
    }
}

/// A decoded Base58Check address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedAddress {
    /// Version byte.
    pub version: u8,
    /// The 20-byte public-key hash.
    pub public_key_hash: [u8; 20],
}

impl ParsedAddress {
    /// The preset network using this version byte, if any.
    pub fn network(&self) -> Option<Network> {
        Network::from_pubkey_hash_version(self.version)
    }
}

/// A decoded WIF private key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedWif {
    /// Version byte.
    pub version: u8,
    /// The private scalar, range-checked.
    pub scalar: SecretScalar,
    /// Whether the key is flagged for a compressed public key.
    pub compressed: bool,
}

impl DecodedWif {
    /// The preset network using this version byte, if any.
    pub fn network(&self) -> Option<Network> {
        Network::from_private_key_version(self.version)
    }
}

/// Serde module for 20-byte arrays as hex strings.
mod hex_bytes_20 {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8; 20], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<[u8; 20], D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        if bytes.len() != 20 {
            return Err(serde::de::Error::custom(format!(
                "Expected 20 bytes, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 20];
        arr.copy_from_slice(&bytes);
        Ok(arr)
    }
}
