//! Private-key scalars.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use zeroize::Zeroize;

use crate::arithmetic::mul_generator;
use crate::serialization::serialize_compressed;
use crate::{CompressedPublicKey, CurveError, CurveParams, Point, SCALAR_LEN};

/// A private key: an integer in `[1, n - 1]`.
///
/// # Security
/// - Construction rejects zero and values at or above the group order
///   instead of reducing them
/// - Debug output is redacted to prevent key leakage in logs
#[derive(Clone, PartialEq, Eq)]
pub struct SecretScalar(BigUint);

impl SecretScalar {
    /// Create from an integer, checking the range against `params.n`.
    pub fn from_biguint(value: BigUint, params: &CurveParams) -> Result<Self, CurveError> {
        if value.is_zero() {
            return Err(CurveError::InvalidScalar("scalar is zero".to_string()));
        }
        if &value >= params.order() {
            return Err(CurveError::InvalidScalar(
                "scalar is not below the group order".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Create from big-endian bytes (at most 32).
    pub fn from_bytes(bytes: &[u8], params: &CurveParams) -> Result<Self, CurveError> {
        if bytes.len() > SCALAR_LEN {
            return Err(CurveError::InvalidScalar(format!(
                "expected at most {} bytes, got {}",
                SCALAR_LEN,
                bytes.len()
            )));
        }
        Self::from_biguint(BigUint::from_bytes_be(bytes), params)
    }

    /// Create from a hex string, with or without a `0x` prefix.
    pub fn from_hex(hex_str: &str, params: &CurveParams) -> Result<Self, CurveError> {
        let trimmed = hex_str.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CurveError::InvalidScalar(
                "expected a non-empty hex string".to_string(),
            ));
        }

        let value = BigUint::parse_bytes(digits.as_bytes(), 16)
            .ok_or_else(|| CurveError::InvalidScalar("unparseable hex".to_string()))?;
        Self::from_biguint(value, params)
    }

    /// Get the integer value.
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Convert to 32 big-endian bytes, left-padded with zeros.
    ///
    /// # Security Warning
    /// The returned bytes contain the private key. Ensure they are
    /// zeroized after use.
    pub fn to_bytes(&self) -> [u8; SCALAR_LEN] {
        let mut raw = self.0.to_bytes_be();
        let mut out = [0u8; SCALAR_LEN];
        out[SCALAR_LEN - raw.len()..].copy_from_slice(&raw);
        raw.zeroize();
        out
    }

    /// Compute the public point `d·G`.
    pub fn public_point(&self, params: &CurveParams) -> Result<Point, CurveError> {
        mul_generator(params, &self.0)
    }

    /// Compute the compressed public key.
    pub fn public_key(&self, params: &CurveParams) -> Result<CompressedPublicKey, CurveError> {
        let point = self.public_point(params)?;
        serialize_compressed(params, &point)
    }
}

impl fmt::Debug for SecretScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretScalar([REDACTED])")
    }
}
