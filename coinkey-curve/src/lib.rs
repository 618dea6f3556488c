//! secp256k1 Arithmetic for Key Derivation
//!
//! This crate implements the elliptic-curve half of address derivation:
//! a private scalar `d` is turned into the public point `d·G` and its SEC1
//! compressed encoding.
//!
//! # Overview
//!
//! - **Field arithmetic**: modular add/sub/mul/pow and Fermat inversion
//!   over the prime `p = 2^256 - 2^32 - 977`
//! - **Points**: affine coordinates or the identity, compared by value
//! - **Group law**: doubling, general addition, negation
//! - **Scalar multiplication**: double-and-add, least-significant bit first
//! - **Serialization**: compressed (33-byte) and uncompressed (65-byte) keys
//!
//! Curve constants live in the immutable [`SECP256K1`] parameter set, which
//! every arithmetic call receives by reference.
//!
//! # Known limitation
//!
//! The general addition formula divides by `Qx - Px`. Inverse points
//! (`P + (-P)`) are recognised and return the identity; any other pair with
//! equal x-coordinates can only arise from off-curve input and is reported
//! as [`CurveError::UndefinedAdditionCase`].
//!
//! # Example
//!
//! ```rust
//! use coinkey_curve::{SecretScalar, SECP256K1};
//!
//! let scalar = SecretScalar::from_hex(
//!     "038109007313a5807b2eccc082c8c3fbb988a973cacf1a7df9ce725c31b14776",
//!     &SECP256K1,
//! ).unwrap();
//!
//! let public_key = scalar.public_key(&SECP256K1).unwrap();
//! assert_eq!(
//!     public_key.to_hex(),
//!     "0202a406624211f2abbdc68da3df929f938c3399dd79fac1b51b0e4ad1d26a47aa",
//! );
//! ```

mod arithmetic;
mod error;
mod params;
mod scalar;
mod serialization;
mod types;

pub mod field;

pub use arithmetic::{mul_generator, point_add, point_double, point_mul, point_negate};
pub use error::CurveError;
pub use params::{CurveParams, SECP256K1};
pub use scalar::SecretScalar;
pub use serialization::{decompress, parse_public_key, serialize_compressed, serialize_uncompressed};
pub use types::{CompressedPublicKey, Point};

/// Length of a compressed public key.
pub const COMPRESSED_KEY_LEN: usize = 33;

/// Length of a private scalar in bytes.
pub const SCALAR_LEN: usize = 32;
