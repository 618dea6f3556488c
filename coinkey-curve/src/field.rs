//! Modular arithmetic over a prime field.
//!
//! Every function takes the modulus explicitly and returns a freshly
//! allocated value reduced into `[0, m)`. Inputs are never mutated.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// `(a + b) mod m`.
pub fn mod_add(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// `(a - b) mod m`, lifted into the non-negative range.
pub fn mod_sub(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let a = a % m;
    let b = b % m;
    if a >= b {
        a - b
    } else {
        m - (b - a)
    }
}

/// `(a * b) mod m`.
pub fn mod_mul(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// `base^exp mod m`.
pub fn mod_pow(base: &BigUint, exp: &BigUint, m: &BigUint) -> BigUint {
    if m.is_one() {
        return BigUint::zero();
    }
    base.modpow(exp, m)
}

/// Multiplicative inverse via Fermat's little theorem: `a^(m-2) mod m`.
///
/// Only meaningful for a prime modulus. Returns `None` when `a ≡ 0`,
/// which has no inverse.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    let a = a % m;
    if a.is_zero() {
        return None;
    }
    let exp = m - BigUint::from(2u32);
    Some(a.modpow(&exp, m))
}

/// `-a mod m`.
pub fn mod_neg(a: &BigUint, m: &BigUint) -> BigUint {
    mod_sub(&BigUint::zero(), a, m)
}
