//! Error types for curve operations.

use thiserror::Error;

/// Errors that can occur during field, point or scalar operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// The scalar is zero, out of range or not parseable.
    #[error("Invalid scalar: {0}")]
    InvalidScalar(String),

    /// The coordinates do not satisfy `y^2 = x^3 + 7 (mod p)`.
    #[error("Point not on curve")]
    PointNotOnCurve,

    /// The identity has no compressed or uncompressed encoding.
    #[error("Cannot serialize the identity point")]
    IdentityPointSerialization,

    /// General-case addition was asked to divide by `Qx - Px = 0` for
    /// points that are neither equal nor inverses of each other.
    #[error("Undefined point addition: equal x-coordinates for unrelated points")]
    UndefinedAdditionCase,

    /// Key bytes or hex input are malformed.
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),
}
