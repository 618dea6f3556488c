//! Core point and public-key types.

use std::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::{CurveError, CurveParams, COMPRESSED_KEY_LEN};

/// A point on the curve in affine coordinates, or the identity.
///
/// Points are plain values: every operation returns a new point and
/// equality compares coordinates, never storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Point {
    /// The point at infinity, the additive unit of the group.
    Identity,
    /// An affine point `(x, y)`.
    Affine { x: BigUint, y: BigUint },
}

impl Point {
    /// The identity element.
    pub fn identity() -> Self {
        Point::Identity
    }

    /// Create an affine point, checking it satisfies the curve equation.
    ///
    /// # Errors
    /// `PointNotOnCurve` if the coordinates are unreduced or off the curve.
    pub fn new(x: BigUint, y: BigUint, params: &CurveParams) -> Result<Self, CurveError> {
        if !params.is_on_curve(&x, &y) {
            return Err(CurveError::PointNotOnCurve);
        }
        Ok(Point::Affine { x, y })
    }

    /// Create an affine point without validation.
    pub(crate) fn from_coordinates_unchecked(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    /// Whether this is the identity.
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// The x-coordinate, if affine.
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// The y-coordinate, if affine.
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Identity => write!(f, "Point(identity)"),
            Point::Affine { x, y } => write!(f, "Point({:064x}, {:064x})", x, y),
        }
    }
}

/// A SEC1 compressed public key (33 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompressedPublicKey(
    #[serde(with = "hex_bytes_33")] pub [u8; COMPRESSED_KEY_LEN],
);

impl CompressedPublicKey {
    /// Create from raw bytes.
    pub fn new(bytes: [u8; COMPRESSED_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; COMPRESSED_KEY_LEN] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Create from hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, CurveError> {
        let bytes = hex::decode(hex_str).map_err(|e| CurveError::InvalidEncoding(e.to_string()))?;
        Self::try_from(bytes.as_slice())
    }

    /// Whether the encoded y-coordinate is odd.
    pub fn is_odd(&self) -> bool {
        self.0[0] == 0x03
    }

    /// Recover the full curve point.
    pub fn to_point(&self, params: &CurveParams) -> Result<Point, CurveError> {
        crate::serialization::decompress(params, &self.0)
    }
}

impl TryFrom<&[u8]> for CompressedPublicKey {
    type Error = CurveError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != COMPRESSED_KEY_LEN {
            return Err(CurveError::InvalidEncoding(format!(
                "Expected {} bytes, got {}",
                COMPRESSED_KEY_LEN,
                bytes.len()
            )));
        }
        if bytes[0] != 0x02 && bytes[0] != 0x03 {
            return Err(CurveError::InvalidEncoding(format!(
                "Invalid compressed key prefix 0x{:02x}",
                bytes[0]
            )));
        }
        let mut arr = [0u8; COMPRESSED_KEY_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

impl fmt::Display for CompressedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Serde module for 33-byte arrays as hex strings.
mod hex_bytes_33 {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::COMPRESSED_KEY_LEN;

    pub fn serialize<S>(
        bytes: &[u8; COMPRESSED_KEY_LEN],
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<[u8; COMPRESSED_KEY_LEN], D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        if bytes.len() != COMPRESSED_KEY_LEN {
            return Err(serde::de::Error::custom(format!(
                "Expected {} bytes, got {}",
                COMPRESSED_KEY_LEN,
                bytes.len()
            )));
        }
        let mut arr = [0u8; COMPRESSED_KEY_LEN];
        arr.copy_from_slice(&bytes);
        Ok(arr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SECP256K1;

    #[test]
    fn test_point_equality_is_by_value() {
        let a = SECP256K1.generator().clone();
        let b = Point::new(
            a.x().unwrap().clone(),
            a.y().unwrap().clone(),
            &SECP256K1,
        )
        .unwrap();

        assert_eq!(a, b);
        assert_ne!(a, Point::Identity);
    }

    #[test]
    fn test_point_new_rejects_off_curve() {
        let result = Point::new(BigUint::from(1u32), BigUint::from(1u32), &SECP256K1);
        assert_eq!(result, Err(CurveError::PointNotOnCurve));
    }

    #[test]
    fn test_identity_has_no_coordinates() {
        let identity = Point::identity();
        assert!(identity.is_identity());
        assert!(identity.x().is_none());
        assert!(identity.y().is_none());
    }

    #[test]
    fn test_compressed_key_hex_roundtrip() {
        let hex_str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
        let key = CompressedPublicKey::from_hex(hex_str).unwrap();

        assert_eq!(key.to_hex(), hex_str);
        assert!(!key.is_odd());
    }

    #[test]
    fn test_compressed_key_rejects_bad_prefix_and_length() {
        assert!(CompressedPublicKey::try_from(&[0x04u8; 33][..]).is_err());
        assert_eq!(
            CompressedPublicKey::try_from(&[0x02u8; COMPRESSED_KEY_LEN - 1][..]),
            Err(CurveError::InvalidEncoding(
                "Expected 33 bytes, got 32".to_string()
            ))
        );
        assert!(CompressedPublicKey::from_hex("zz").is_err());
    }

    #[test]
    fn test_compressed_key_serde_as_hex() {
        let key = CompressedPublicKey::new([0x02; 33]);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, format!("\"{}\"", "02".repeat(33)));

        let back: CompressedPublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
