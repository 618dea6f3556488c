//! Hash pipeline used by address and key encodings.
//!
//! Each function is a pure composition of the underlying digests; nothing
//! is cached between calls.

use ripemd::Ripemd160;
use sha2::digest::Output;
use sha2::{Digest, Sha256};
use sha3::Sha3_256;

/// Apply a digest once.
pub fn single_hash<D: Digest>(data: &[u8]) -> Output<D> {
    D::digest(data)
}

/// Apply a digest twice: `D(D(data))`.
pub fn double_hash<D: Digest>(data: &[u8]) -> Output<D> {
    D::digest(D::digest(data))
}

/// Create a SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    single_hash::<Sha256>(data).into()
}

/// SHA-256 applied twice.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    double_hash::<Sha256>(data).into()
}

/// Create a RIPEMD-160 hash of arbitrary data.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    single_hash::<Ripemd160>(data).into()
}

/// Create a SHA3-256 hash of arbitrary data.
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    single_hash::<Sha3_256>(data).into()
}

/// `RIPEMD-160(SHA-256(data))`, the public-key hash.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// First four bytes of `SHA-256(SHA-256(data))`.
pub fn checksum(data: &[u8]) -> [u8; 4] {
    let digest = double_sha256(data);
    [digest[0], digest[1], digest[2], digest[3]]
}
