//! Hashing and Hidden-Service Keys for coinkey
//!
//! This crate wraps the hash primitives and the Ed25519 key type that the
//! address builder composes.
//!
//! # Overview
//!
//! - **Hash pipeline**: single and double application of any `Digest`,
//!   plus the fixed compositions used by Base58Check encodings
//!   (`hash160 = RIPEMD-160(SHA-256(x))`, `checksum = SHA-256²(x)[0..4]`)
//! - **Hidden-service keys**: an Ed25519 key pair whose public key is
//!   embedded in onion v3 addresses
//! - **Passphrases**: stretching a passphrase into 32 private-key bytes
//!
//! # Example
//!
//! ```rust
//! use coinkey_crypto::{checksum, hash160, OnionKeyPair};
//!
//! let pubkey_hash = hash160(b"public key bytes");
//! let tag = checksum(&pubkey_hash);
//! assert_eq!(tag.len(), 4);
//!
//! let onion_key = OnionKeyPair::from_seed(&[0u8; 32]);
//! println!("onion public key: {}", onion_key.public_key().to_hex());
//! ```

mod error;
mod hash;
mod passphrase;
mod types;

pub use error::CryptoError;
pub use hash::{
    checksum, double_hash, double_sha256, hash160, ripemd160, sha256, sha3_256, single_hash,
};
pub use passphrase::{key_bytes_from_passphrase, PassphraseScheme};
pub use types::{OnionKeyPair, OnionPublicKey};

/// Length of a Base58Check checksum.
pub const CHECKSUM_LEN: usize = 4;

/// Length of a public-key hash.
pub const PUBKEY_HASH_LEN: usize = 20;
