//! Address and Key Encodings for coinkey
//!
//! This crate turns a secp256k1 private scalar into the strings a wallet
//! shows to its user, and decodes those strings back.
//!
//! # Overview
//!
//! - **Base58 / Base58Check**: the integer-division codec with leading-zero
//!   preservation and a 4-byte double SHA-256 checksum
//! - **Addresses**: pay-to-pubkey-hash, `Base58Check(version ‖ hash160(P))`
//! - **WIF**: `Base58Check(version ‖ d)`, with a trailing `0x01` when the
//!   key pairs with a compressed public key
//! - **Onion v3**: a hidden-service address for an independent Ed25519 key
//! - **Networks**: version-byte presets (Bitcoin, testnet, Komodo) or custom bytes
//!
//! # Address Format
//!
//! ```text
//! address = Base58([version:1][hash160:20][checksum:4])
//! wif     = Base58([version:1][scalar:32][0x01]?[checksum:4])
//! onion   = base32([ed25519 pubkey:32][checksum:2][0x03]) ".onion"
//! ```
//!
//! # Example
//!
//! ```rust
//! use coinkey_address::{derive_key_bundle_from_hex, parse_address, Network};
//!
//! let bundle = derive_key_bundle_from_hex(
//!     "038109007313a5807b2eccc082c8c3fbb988a973cacf1a7df9ce725c31b14776",
//!     Network::Bitcoin,
//!     None,
//! ).unwrap();
//! assert_eq!(bundle.address, "1PRTTaJesdNovgne6Ehcdu1fpEdX7913CK");
//!
//! let parsed = parse_address(&bundle.address).unwrap();
//! assert_eq!(parsed.public_key_hash, bundle.public_key_hash);
//! ```

mod error;
mod onion;
mod parsing;
mod serialization;
mod types;
mod validation;

pub mod base58;

pub use error::AddressError;
pub use onion::{onion_address, onion_checksum, onion_identity, parse_onion_address, ONION_VERSION};
pub use parsing::{parse_address, parse_address_for_network, parse_wif, parse_wif_for_network};
pub use serialization::{
    derive_key_bundle, derive_key_bundle_from_hex, p2pkh_address, public_key_hash,
    versioned_payload, wif_compressed, wif_uncompressed, COMPRESSED_FLAG,
};
pub use types::{DecodedWif, KeyBundle, Network, OnionIdentity, ParsedAddress};
pub use validation::{validate_address, validate_network, validate_onion_address, ValidationResult};
