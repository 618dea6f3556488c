//! Decoding of addresses and WIF keys.

use coinkey_curve::{SecretScalar, SECP256K1};
use zeroize::Zeroizing;

use crate::base58::decode_check;
use crate::serialization::COMPRESSED_FLAG;
use crate::{AddressError, DecodedWif, Network, ParsedAddress};

/// Decoded address length (version + hash160).
const ADDRESS_PAYLOAD_LEN: usize = 1 + 20;

/// Decoded WIF length without the compression flag (version + scalar).
const WIF_PAYLOAD_LEN: usize = 1 + 32;

/// Parse a Base58Check pay-to-pubkey-hash address.
///
/// Any version byte is accepted; use [`parse_address_for_network`] to pin it.
///
/// # Errors
/// * `DecodeAlphabet` - invalid Base58 character
/// * `InvalidChecksum` - checksum mismatch
/// * `InvalidLength` - payload is not 21 bytes
pub fn parse_address(address: &str) -> Result<ParsedAddress, AddressError> {
    let payload = decode_check(address.trim())?;

    if payload.len() != ADDRESS_PAYLOAD_LEN {
        return Err(AddressError::InvalidLength {
            expected: ADDRESS_PAYLOAD_LEN,
            actual: payload.len(),
        });
    }

    let mut public_key_hash = [0u8; 20];
    public_key_hash.copy_from_slice(&payload[1..]);

    Ok(ParsedAddress {
        version: payload[0],
        public_key_hash,
    })
}

/// Parse an address and require the version byte of `expected_network`.
pub fn parse_address_for_network(
    address: &str,
    expected_network: Network,
) -> Result<ParsedAddress, AddressError> {
    let parsed = parse_address(address)?;

    let expected = expected_network.pubkey_hash_version();
    if parsed.version != expected {
        return Err(AddressError::NetworkMismatch {
            expected,
            actual: parsed.version,
        });
    }

    Ok(parsed)
}

/// Parse a WIF private key.
///
/// A 33-byte payload is an uncompressed key; a 34-byte payload must end
/// with the `0x01` compression flag.
///
/// # Errors
/// * `DecodeAlphabet` / `InvalidChecksum` - Base58Check failure
/// * `InvalidLength` - payload is neither 33 nor 34 bytes
/// * `UnrecognizedFormat` - 34-byte payload without the compression flag
/// * `Curve(InvalidScalar)` - scalar is zero or not below the group order
pub fn parse_wif(wif: &str) -> Result<DecodedWif, AddressError> {
    let payload = Zeroizing::new(decode_check(wif.trim())?);

    let compressed = match payload.len() {
        WIF_PAYLOAD_LEN => false,
        len if len == WIF_PAYLOAD_LEN + 1 => {
            if payload[WIF_PAYLOAD_LEN] != COMPRESSED_FLAG {
                return Err(AddressError::UnrecognizedFormat);
            }
            true
        }
        actual => {
            return Err(AddressError::InvalidLength {
                expected: WIF_PAYLOAD_LEN,
                actual,
            })
        }
    };

    let scalar = SecretScalar::from_bytes(&payload[1..WIF_PAYLOAD_LEN], &SECP256K1)?;

    Ok(DecodedWif {
        version: payload[0],
        scalar,
        compressed,
    })
}

/// Parse a WIF key and require the private-key version of `expected_network`.
pub fn parse_wif_for_network(
    wif: &str,
    expected_network: Network,
) -> Result<DecodedWif, AddressError> {
    let decoded = parse_wif(wif)?;

    let expected = expected_network.private_key_version();
    if decoded.version != expected {
        return Err(AddressError::NetworkMismatch {
            expected,
            actual: decoded.version,
        });
    }

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base58::encode_check;

    #[test]
    fn test_parse_address() {
        let parsed = parse_address("1PRTTaJesdNovgne6Ehcdu1fpEdX7913CK").unwrap();

        assert_eq!(parsed.version, 0x00);
        assert_eq!(
            hex::encode(parsed.public_key_hash),
            "f5f2d624cfb5c3f66d06123d0829d1c9cebf770e"
        );
        assert_eq!(parsed.network(), Some(Network::Bitcoin));
    }

    #[test]
    fn test_parse_address_wrong_length() {
        let encoded = encode_check(&[0x00; 10]);
        assert_eq!(
            parse_address(&encoded),
            Err(AddressError::InvalidLength {
                expected: 21,
                actual: 10
            })
        );
    }

    #[test]
    fn test_parse_address_network_mismatch() {
        let result =
            parse_address_for_network("1PRTTaJesdNovgne6Ehcdu1fpEdX7913CK", Network::Komodo);
        assert_eq!(
            result,
            Err(AddressError::NetworkMismatch {
                expected: 0x3c,
                actual: 0x00
            })
        );
    }

    #[test]
    fn test_parse_wif_uncompressed() {
        let decoded = parse_wif("5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf").unwrap();

        assert_eq!(decoded.version, 0x80);
        assert!(!decoded.compressed);
        assert_eq!(decoded.scalar.as_biguint(), &num_bigint::BigUint::from(1u8));
    }

    #[test]
    fn test_parse_wif_compressed() {
        let decoded = parse_wif("KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn").unwrap();

        assert!(decoded.compressed);
        assert_eq!(decoded.network(), Some(Network::Bitcoin));
    }

    #[test]
    fn test_parse_wif_bad_flag() {
        let mut payload = vec![0x80];
        payload.extend_from_slice(&[0x11; 32]);
        payload.push(0x02);

        assert_eq!(
            parse_wif(&encode_check(&payload)),
            Err(AddressError::UnrecognizedFormat)
        );
    }

    #[test]
    fn test_parse_wif_zero_scalar() {
        let mut payload = vec![0x80];
        payload.extend_from_slice(&[0x00; 32]);

        assert!(matches!(
            parse_wif(&encode_check(&payload)),
            Err(AddressError::Curve(coinkey_curve::CurveError::InvalidScalar(_)))
        ));
    }

    #[test]
    fn test_parse_wif_for_network() {
        let wif = "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn";
        assert!(parse_wif_for_network(wif, Network::Bitcoin).is_ok());
        assert!(matches!(
            parse_wif_for_network(wif, Network::Testnet),
            Err(AddressError::NetworkMismatch {
                expected: 0xef,
                actual: 0x80
            })
        ));
    }
}
