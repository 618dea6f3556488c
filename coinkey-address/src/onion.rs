//! Onion v3 (hidden-service) addresses.
//!
//! ```text
//! checksum = SHA3-256(".onion checksum" ‖ pubkey ‖ version)[0..2]
//! address  = lower(base32(pubkey ‖ checksum ‖ version)) ‖ ".onion"
//! ```

use coinkey_crypto::{sha3_256, OnionKeyPair, OnionPublicKey};
use data_encoding::{DecodeKind, BASE32};

use crate::{AddressError, OnionIdentity};

/// Onion address version.
pub const ONION_VERSION: u8 = 0x03;

/// Suffix appended to the encoded address.
pub const ONION_SUFFIX: &str = ".onion";

const CHECKSUM_CONTEXT: &[u8] = b".onion checksum";

/// Decoded length: public key, checksum and version.
const ONION_PAYLOAD_LEN: usize = 32 + 2 + 1;

/// Compute the two checksum bytes for a public key.
pub fn onion_checksum(public_key: &OnionPublicKey) -> [u8; 2] {
    let mut data = Vec::with_capacity(CHECKSUM_CONTEXT.len() + 32 + 1);
    data.extend_from_slice(CHECKSUM_CONTEXT);
    data.extend_from_slice(public_key.as_bytes());
    data.push(ONION_VERSION);

    let digest = sha3_256(&data);
    [digest[0], digest[1]]
}

/// Build the onion address for a public key.
pub fn onion_address(public_key: &OnionPublicKey) -> String {
    let mut payload = Vec::with_capacity(ONION_PAYLOAD_LEN);
    payload.extend_from_slice(public_key.as_bytes());
    payload.extend_from_slice(&onion_checksum(public_key));
    payload.push(ONION_VERSION);

    format!("{}{}", BASE32.encode(&payload).to_lowercase(), ONION_SUFFIX)
}

/// Build the onion identity of a key pair.
pub fn onion_identity(key_pair: &OnionKeyPair) -> OnionIdentity {
    let public_key = key_pair.public_key();
    OnionIdentity {
        address: onion_address(&public_key),
        public_key,
    }
}

/// Strip a trailing `.onion` written in any letter case.
pub(crate) fn strip_onion_suffix(address: &str) -> Option<&str> {
    let split = address.len().checked_sub(ONION_SUFFIX.len())?;
    let suffix = address.get(split..)?;
    if suffix.eq_ignore_ascii_case(ONION_SUFFIX) {
        address.get(..split)
    } else {
        None
    }
}

/// Character index and value of the character covering byte `offset`.
fn character_at(text: &str, offset: usize) -> (usize, char) {
    text.char_indices()
        .take_while(|(start, _)| *start <= offset)
        .enumerate()
        .last()
        .map(|(index, (_, character))| (index, character))
        .unwrap_or((0, '?'))
}

/// Parse an onion v3 address back to its public key.
///
/// The `.onion` suffix is optional and letter case is ignored, including
/// in the suffix.
///
/// # Errors
/// * `DecodeAlphabet` - a character outside the Base32 alphabet
/// * `InvalidBase32` - bad length or padding
/// * `InvalidLength` - decoded payload is not 35 bytes
/// * `InvalidVersion` - version byte is not 3
/// * `InvalidChecksum` - checksum mismatch
pub fn parse_onion_address(address: &str) -> Result<OnionPublicKey, AddressError> {
    let trimmed = address.trim();
    let encoded = strip_onion_suffix(trimmed).unwrap_or(trimmed);

    let payload = BASE32
        .decode(encoded.to_ascii_uppercase().as_bytes())
        .map_err(|e| match e.kind {
            DecodeKind::Symbol => {
                let (position, character) = character_at(encoded, e.position);
                AddressError::DecodeAlphabet {
                    character,
                    position,
                }
            }
            _ => AddressError::InvalidBase32(e.to_string()),
        })?;

    if payload.len() != ONION_PAYLOAD_LEN {
        return Err(AddressError::InvalidLength {
            expected: ONION_PAYLOAD_LEN,
            actual: payload.len(),
        });
    }

    let version = payload[34];
    if version != ONION_VERSION {
        return Err(AddressError::InvalidVersion(version));
    }

    let public_key = OnionPublicKey::try_from(&payload[..32])?;
    if payload[32..34] != onion_checksum(&public_key) {
        return Err(AddressError::InvalidChecksum);
    }

    Ok(public_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_SEED_ONION: &str =
        "hnvcppgow2sc2yvdvdicu3ynonsteflxdxrehjr2ybekdc2z3iu63yid.onion";

    #[test]
    fn test_zero_seed_address() {
        let identity = onion_identity(&OnionKeyPair::from_seed(&[0u8; 32]));

        assert_eq!(identity.address, ZERO_SEED_ONION);
        assert_eq!(identity.address.len(), 56 + ONION_SUFFIX.len());
    }

    #[test]
    fn test_address_shape() {
        let public_key = OnionKeyPair::from_seed(&[9u8; 32]).public_key();
        let address = onion_address(&public_key);

        assert!(address.ends_with(".onion"));
        assert!(!address.contains('='));
        assert_eq!(address, address.to_lowercase());
        // Version 3 always encodes to a trailing 'd'.
        assert!(address.trim_end_matches(".onion").ends_with('d'));
    }

    #[test]
    fn test_parse_roundtrip_case_insensitive() {
        let public_key = parse_onion_address(ZERO_SEED_ONION).unwrap();
        assert_eq!(public_key, OnionKeyPair::from_seed(&[0u8; 32]).public_key());

        let upper = ZERO_SEED_ONION.trim_end_matches(".onion").to_uppercase();
        assert_eq!(parse_onion_address(&upper).unwrap(), public_key);
    }

    #[test]
    fn test_parse_rejects_bad_checksum() {
        // Swap the first character; the public key changes, the checksum does not.
        let tampered = format!("a{}", &ZERO_SEED_ONION[1..]);
        assert_eq!(
            parse_onion_address(&tampered),
            Err(AddressError::InvalidChecksum)
        );
    }

    #[test]
    fn test_parse_rejects_bad_alphabet() {
        let tampered = format!("1{}", &ZERO_SEED_ONION[1..]);
        assert!(matches!(
            parse_onion_address(&tampered),
            Err(AddressError::DecodeAlphabet {
                character: '1',
                position: 0
            })
        ));
    }

    #[test]
    fn test_parse_upper_case_suffix() {
        let upper = ZERO_SEED_ONION.to_uppercase();
        assert!(upper.ends_with(".ONION"));
        assert_eq!(
            parse_onion_address(&upper).unwrap(),
            OnionKeyPair::from_seed(&[0u8; 32]).public_key()
        );

        let mixed = format!("{}.Onion", ZERO_SEED_ONION.trim_end_matches(".onion"));
        assert!(parse_onion_address(&mixed).is_ok());
    }

    #[test]
    fn test_strip_onion_suffix() {
        assert_eq!(strip_onion_suffix("abc.OnIoN"), Some("abc"));
        assert_eq!(strip_onion_suffix(".onion"), Some(""));
        assert_eq!(strip_onion_suffix("abc.onio"), None);
        assert_eq!(strip_onion_suffix("onion"), None);
    }

    #[test]
    fn test_bad_alphabet_position_counts_characters() {
        // Two ASCII characters replaced by one two-byte character keeps the
        // byte length a multiple of eight.
        let tampered = format!("a\u{e9}{}", &ZERO_SEED_ONION[3..]);
        assert_eq!(
            parse_onion_address(&tampered),
            Err(AddressError::DecodeAlphabet {
                character: '\u{e9}',
                position: 1
            })
        );
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(parse_onion_address("aaaaaaaa.onion").is_err());
    }
}
