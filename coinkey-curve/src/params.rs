//! secp256k1 domain parameters.
//!
//! The parameters are built once on first use and shared read-only by every
//! derivation. Arithmetic functions take them by reference instead of
//! reaching for globals, so alternative parameter sets can be used in tests.

use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;

use crate::field::{mod_add, mod_mul};
use crate::Point;

/// Generator x-coordinate (SEC 2, section 2.4.1).
const GENERATOR_X: [u8; 32] = [
    0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac, 0x55, 0xa0, 0x62, 0x95, 0xce, 0x87, 0x0b, 0x07,
    0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9, 0x59, 0xf2, 0x81, 0x5b, 0x16, 0xf8, 0x17, 0x98,
];

/// Generator y-coordinate.
const GENERATOR_Y: [u8; 32] = [
    0x48, 0x3a, 0xda, 0x77, 0x26, 0xa3, 0xc4, 0x65, 0x5d, 0xa4, 0xfb, 0xfc, 0x0e, 0x11, 0x08, 0xa8,
    0xfd, 0x17, 0xb4, 0x48, 0xa6, 0x85, 0x54, 0x19, 0x9c, 0x47, 0xd0, 0x8f, 0xfb, 0x10, 0xd4, 0xb8,
];

/// Order of the generator.
const GROUP_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

/// The process-wide secp256k1 parameter set.
pub static SECP256K1: Lazy<CurveParams> = Lazy::new(CurveParams::secp256k1);

/// Parameters of a short Weierstrass curve `y^2 = x^3 + b` over `F_p`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveParams {
    /// Field prime.
    pub p: BigUint,
    /// Order of the generator.
    pub n: BigUint,
    /// Constant term of the curve equation.
    pub b: BigUint,
    /// Generator point.
    pub g: Point,
}

impl CurveParams {
    /// Build the secp256k1 parameters. `p` is derived as `2^256 - 2^32 - 977`.
    pub fn secp256k1() -> Self {
        let p = (BigUint::one() << 256u32) - (BigUint::one() << 32u32) - BigUint::from(977u32);

        Self {
            p,
            n: BigUint::from_bytes_be(&GROUP_ORDER),
            b: BigUint::from(7u32),
            g: Point::Affine {
                x: BigUint::from_bytes_be(&GENERATOR_X),
                y: BigUint::from_bytes_be(&GENERATOR_Y),
            },
        }
    }

    /// Check whether `(x, y)` is a reduced solution of the curve equation.
    pub fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        if x >= &self.p || y >= &self.p {
            return false;
        }

        let lhs = mod_mul(y, y, &self.p);
        let x_cubed = mod_mul(&mod_mul(x, x, &self.p), x, &self.p);
        let rhs = mod_add(&x_cubed, &self.b, &self.p);

        lhs == rhs
    }

    /// Check a point; the identity is always a member of the group.
    pub fn contains(&self, point: &Point) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine { x, y } => self.is_on_curve(x, y),
        }
    }

    /// The generator `G`.
    pub fn generator(&self) -> &Point {
        &self.g
    }

    /// The group order `n`.
    pub fn order(&self) -> &BigUint {
        &self.n
    }
}
