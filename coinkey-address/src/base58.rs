//! Base58 and Base58Check codecs.
//!
//! The byte string is read as one big-endian integer and repeatedly divided
//! by 58. Leading zero bytes carry no numeric value, so each one is written
//! as an explicit leading `'1'`.

use coinkey_crypto::{checksum, CHECKSUM_LEN};
use num_bigint::BigUint;
use num_traits::Zero;
use zeroize::Zeroizing;

use crate::AddressError;

/// The Bitcoin Base58 alphabet (no `0`, `O`, `I` or `l`).
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

fn alphabet_index(character: char) -> Option<u32> {
    if !character.is_ascii() {
        return None;
    }
    ALPHABET
        .iter()
        .position(|&symbol| symbol == character as u8)
        .map(|index| index as u32)
}

/// Encode bytes as Base58.
///
/// An all-zero input of length `k` encodes to `k` copies of `'1'`.
pub fn encode(data: &[u8]) -> String {
    let base = BigUint::from(58u32);
    let mut value = BigUint::from_bytes_be(data);
    let mut digits: Vec<u8> = Vec::with_capacity(data.len() * 138 / 100 + 1);

    // Remainders come out least-significant first.
    while !value.is_zero() {
        let remainder = &value % &base;
        value /= &base;
        let index = remainder.to_u32_digits().first().copied().unwrap_or(0) as usize;
        digits.push(ALPHABET[index]);
    }

    for _ in data.iter().take_while(|&&byte| byte == 0) {
        digits.push(ALPHABET[0]);
    }

    digits.iter().rev().map(|&symbol| symbol as char).collect()
}

/// Decode a Base58 string.
///
/// # Errors
/// `DecodeAlphabet` on the first character outside the alphabet.
pub fn decode(encoded: &str) -> Result<Vec<u8>, AddressError> {
    let mut value = BigUint::zero();

    for (position, character) in encoded.chars().enumerate() {
        let index = alphabet_index(character)
            .ok_or(AddressError::DecodeAlphabet { character, position })?;
        value = value * 58u32 + index;
    }

    let leading_zeros = encoded.chars().take_while(|&c| c == '1').count();
    let mut bytes = vec![0u8; leading_zeros];
    if !value.is_zero() {
        bytes.extend_from_slice(&value.to_bytes_be());
    }

    Ok(bytes)
}

/// Encode `payload ‖ checksum(payload)` as Base58.
pub fn encode_check(payload: &[u8]) -> String {
    let mut data = Zeroizing::new(Vec::with_capacity(payload.len() + CHECKSUM_LEN));
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));
    encode(&data)
}

/// Decode a Base58Check string and return the payload without checksum.
///
/// # Errors
/// * `DecodeAlphabet` - invalid character
/// * `InvalidLength` - fewer than one payload byte plus the checksum
/// * `InvalidChecksum` - checksum mismatch
pub fn decode_check(encoded: &str) -> Result<Vec<u8>, AddressError> {
    let bytes = decode(encoded)?;

    if bytes.len() <= CHECKSUM_LEN {
        return Err(AddressError::InvalidLength {
            expected: CHECKSUM_LEN + 1,
            actual: bytes.len(),
        });
    }

    let checksum_start = bytes.len() - CHECKSUM_LEN;
    let (payload, provided) = bytes.split_at(checksum_start);
    if provided != checksum(payload) {
        return Err(AddressError::InvalidChecksum);
    }

    Ok(payload.to_vec())
}
