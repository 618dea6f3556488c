//! SEC1 public-key encodings.

use num_bigint::BigUint;
use num_traits::One;

use crate::field::{mod_add, mod_mul, mod_pow, mod_sub};
use crate::{CompressedPublicKey, CurveError, CurveParams, Point, COMPRESSED_KEY_LEN};

/// Left-pad a coordinate to 32 big-endian bytes.
fn coordinate_bytes(value: &BigUint) -> [u8; 32] {
    let raw = value.to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - raw.len()..].copy_from_slice(&raw);
    out
}

/// Extract affine coordinates of a point that may be serialized.
fn checked_coordinates<'a>(
    params: &CurveParams,
    point: &'a Point,
) -> Result<(&'a BigUint, &'a BigUint), CurveError> {
    match point {
        Point::Identity => Err(CurveError::IdentityPointSerialization),
        Point::Affine { x, y } if params.is_on_curve(x, y) => Ok((x, y)),
        Point::Affine { .. } => Err(CurveError::PointNotOnCurve),
    }
}

/// Serialize a point as a 33-byte compressed key.
///
/// # Format
/// ```text
/// [0x02 | 0x03 (y parity)][x: 32 bytes big-endian]
/// ```
///
/// # Errors
/// * `IdentityPointSerialization` - the identity has no encoding
/// * `PointNotOnCurve` - the coordinates fail the curve equation
pub fn serialize_compressed(
    params: &CurveParams,
    point: &Point,
) -> Result<CompressedPublicKey, CurveError> {
    let (x, y) = checked_coordinates(params, point)?;

    let mut out = [0u8; COMPRESSED_KEY_LEN];
    out[0] = if y.bit(0) { 0x03 } else { 0x02 };
    out[1..].copy_from_slice(&coordinate_bytes(x));

    Ok(CompressedPublicKey::new(out))
}

/// Serialize a point as a 65-byte uncompressed key (`0x04 ‖ x ‖ y`).
pub fn serialize_uncompressed(params: &CurveParams, point: &Point) -> Result<[u8; 65], CurveError> {
    let (x, y) = checked_coordinates(params, point)?;

    let mut out = [0u8; 65];
    out[0] = 0x04;
    out[1..33].copy_from_slice(&coordinate_bytes(x));
    out[33..].copy_from_slice(&coordinate_bytes(y));

    Ok(out)
}

/// Recover a point from its compressed encoding.
///
/// Since `p ≡ 3 (mod 4)`, a square root of `x³ + b` is
/// `(x³ + b)^((p + 1) / 4)`; the prefix selects the root's parity.
pub fn decompress(params: &CurveParams, bytes: &[u8]) -> Result<Point, CurveError> {
    let key = CompressedPublicKey::try_from(bytes)?;
    let m = &params.p;

    let x = BigUint::from_bytes_be(&key.as_bytes()[1..]);
    if &x >= m {
        return Err(CurveError::PointNotOnCurve);
    }

    let rhs = mod_add(&mod_mul(&mod_mul(&x, &x, m), &x, m), &params.b, m);
    let exponent = (m + BigUint::one()) >> 2u32;
    let root = mod_pow(&rhs, &exponent, m);

    if mod_mul(&root, &root, m) != rhs {
        return Err(CurveError::PointNotOnCurve);
    }

    let y = if root.bit(0) == key.is_odd() {
        root
    } else {
        mod_sub(m, &root, m)
    };

    Point::new(x, y, params)
}

/// Parse a compressed (33-byte) or uncompressed (65-byte) SEC1 key.
pub fn parse_public_key(params: &CurveParams, bytes: &[u8]) -> Result<Point, CurveError> {
    match bytes.len() {
        COMPRESSED_KEY_LEN => decompress(params, bytes),
        65 if bytes[0] == 0x04 => Point::new(
            BigUint::from_bytes_be(&bytes[1..33]),
            BigUint::from_bytes_be(&bytes[33..]),
            params,
        ),
        len => Err(CurveError::InvalidEncoding(format!(
            "Unsupported public key encoding ({} bytes)",
            len
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::mul_generator;
    use crate::SECP256K1;

    #[test]
    fn test_identity_cannot_be_serialized() {
        assert_eq!(
            serialize_compressed(&SECP256K1, &Point::Identity),
            Err(CurveError::IdentityPointSerialization)
        );
        assert_eq!(
            serialize_uncompressed(&SECP256K1, &Point::Identity),
            Err(CurveError::IdentityPointSerialization)
        );
    }

    #[test]
    fn test_off_curve_point_rejected() {
        let bogus = Point::from_coordinates_unchecked(BigUint::from(1u32), BigUint::from(1u32));
        assert_eq!(
            serialize_compressed(&SECP256K1, &bogus),
            Err(CurveError::PointNotOnCurve)
        );
    }

    #[test]
    fn test_parity_prefix() {
        // 2G has an even y; 6G is the first multiple with an odd one.
        let two = mul_generator(&SECP256K1, &BigUint::from(2u32)).unwrap();
        let six = mul_generator(&SECP256K1, &BigUint::from(6u32)).unwrap();

        assert_eq!(serialize_compressed(&SECP256K1, &two).unwrap().as_bytes()[0], 0x02);

        let compressed = serialize_compressed(&SECP256K1, &six).unwrap();
        assert!(compressed.is_odd());
        assert_eq!(
            compressed.to_hex(),
            "03fff97bd5755eeea420453a14355235d382f6472f8568a18b2f057a1460297556"
        );
        assert_eq!(compressed.to_point(&SECP256K1).unwrap(), six);
    }

    #[test]
    fn test_small_x_is_left_padded() {
        let x = BigUint::from(0xabcdu32);
        let bytes = coordinate_bytes(&x);

        assert_eq!(&bytes[30..], &[0xab, 0xcd]);
        assert!(bytes[..30].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_decompress_recovers_point() {
        for k in [1u32, 2, 3, 7, 1000] {
            let point = mul_generator(&SECP256K1, &BigUint::from(k)).unwrap();
            let compressed = serialize_compressed(&SECP256K1, &point).unwrap();

            assert_eq!(decompress(&SECP256K1, compressed.as_bytes()).unwrap(), point);
            assert_eq!(compressed.to_point(&SECP256K1).unwrap(), point);
        }
    }

    #[test]
    fn test_decompress_rejects_non_residue() {
        // x = 5: 5^3 + 7 = 132 is not a square mod p.
        let mut bytes = [0u8; 33];
        bytes[0] = 0x02;
        bytes[32] = 5;

        assert_eq!(decompress(&SECP256K1, &bytes), Err(CurveError::PointNotOnCurve));
    }

    #[test]
    fn test_uncompressed_roundtrip() {
        let point = mul_generator(&SECP256K1, &BigUint::from(99u32)).unwrap();
        let bytes = serialize_uncompressed(&SECP256K1, &point).unwrap();

        assert_eq!(bytes[0], 0x04);
        assert_eq!(parse_public_key(&SECP256K1, &bytes).unwrap(), point);
    }

    #[test]
    fn test_parse_public_key_rejects_other_lengths() {
        assert!(matches!(
            parse_public_key(&SECP256K1, &[0u8; 20]),
            Err(CurveError::InvalidEncoding(_))
        ));
    }
}
