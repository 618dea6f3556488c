//! Address and key builders.
//!
//! The derivation runs strictly in order and stops at the first failure:
//! ```text
//! d ─► P = d·G ─► SEC1(P) ─► hash160 ─► version ‖ hash ─► Base58Check
//! d ─► version ‖ d [‖ 0x01] ─► Base58Check (WIF)
//! ```

use coinkey_crypto::{hash160, OnionKeyPair};
use coinkey_curve::{serialize_compressed, CompressedPublicKey, SecretScalar, SECP256K1};
use log::debug;
use zeroize::Zeroizing;

use crate::base58::encode_check;
use crate::onion::onion_identity;
use crate::{AddressError, KeyBundle, Network};

/// Marker byte appended to a WIF payload for compressed public keys.
pub const COMPRESSED_FLAG: u8 = 0x01;

/// Prepend a version byte to a body.
pub fn versioned_payload(version: u8, body: &[u8]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(body.len() + 1);
    payload.push(version);
    payload.extend_from_slice(body);
    payload
}

/// Hash a compressed public key: `RIPEMD-160(SHA-256(key))`.
pub fn public_key_hash(public_key: &CompressedPublicKey) -> [u8; 20] {
    hash160(public_key.as_bytes())
}

/// Encode the pay-to-pubkey-hash address of a public key.
///
/// # Format
/// ```text
/// Base58([version:1][hash160:20][checksum:4])
/// ```
pub fn p2pkh_address(public_key: &CompressedPublicKey, network: Network) -> String {
    let payload = versioned_payload(network.pubkey_hash_version(), &public_key_hash(public_key));
    encode_check(&payload)
}

fn wif(scalar: &SecretScalar, network: Network, compressed: bool) -> String {
    let key_bytes = Zeroizing::new(scalar.to_bytes());
    let mut payload = Zeroizing::new(versioned_payload(network.private_key_version(), &*key_bytes));
    if compressed {
        payload.push(COMPRESSED_FLAG);
    }
    encode_check(&payload)
}

/// Encode a private key in Wallet Import Format for an uncompressed public key.
///
/// # Format
/// ```text
/// Base58([version:1][scalar:32][checksum:4])
/// ```
pub fn wif_uncompressed(scalar: &SecretScalar, network: Network) -> String {
    wif(scalar, network, false)
}

/// Encode a private key in Wallet Import Format for a compressed public key.
///
/// # Format
/// ```text
/// Base58([version:1][scalar:32][0x01][checksum:4])
/// ```
pub fn wif_compressed(scalar: &SecretScalar, network: Network) -> String {
    wif(scalar, network, true)
}

/// Derive every public identifier of a private scalar.
///
/// # Arguments
/// * `scalar` - The private key
/// * `network` - Version bytes for the address and WIF strings
/// * `onion_key` - Optional signature key for the hidden-service address;
///   it is independent of `scalar`
///
/// # Returns
/// * `Ok(KeyBundle)` - All outputs
/// * `Err(AddressError)` - The stage that failed; nothing partial is returned
pub fn derive_key_bundle(
    scalar: &SecretScalar,
    network: Network,
    onion_key: Option<&OnionKeyPair>,
) -> Result<KeyBundle, AddressError> {
    debug!("deriving key bundle for network {}", network);

    let point = scalar.public_point(&SECP256K1)?;
    let public_key = serialize_compressed(&SECP256K1, &point)?;
    debug!("public key {}", public_key);

    let public_key_hash = public_key_hash(&public_key);
    let address = p2pkh_address(&public_key, network);
    debug!("address {}", address);

    let wif_uncompressed = wif_uncompressed(scalar, network);
    let wif_compressed = wif_compressed(scalar, network);

    let onion = onion_key.map(onion_identity);
    if let Some(identity) = &onion {
        debug!("onion address {}", identity.address);
    }

    Ok(KeyBundle {
        network,
        public_key,
        public_key_hash,
        address,
        wif_uncompressed,
        wif_compressed,
        onion,
    })
}

/// Derive a key bundle from a hex-encoded scalar.
pub fn derive_key_bundle_from_hex(
    scalar_hex: &str,
    network: Network,
    onion_key: Option<&OnionKeyPair>,
) -> Result<KeyBundle, AddressError> {
    let scalar = SecretScalar::from_hex(scalar_hex, &SECP256K1)?;
    derive_key_bundle(&scalar, network, onion_key)
}
