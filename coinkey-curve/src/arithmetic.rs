//! Curve group law: addition, doubling, negation and scalar multiplication.
//!
//! Formulas for `y^2 = x^3 + b` in affine coordinates:
//! ```text
//! doubling:  s = 3·Px² / 2·Py
//! addition:  s = (Qy - Py) / (Qx - Px)
//! result:    Rx = s² - Px - Qx
//!            Ry = s·(Px - Rx) - Py
//! ```
//! Division is multiplication by the Fermat inverse in `F_p`.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::field::{mod_add, mod_inverse, mod_mul, mod_neg, mod_sub};
use crate::{CurveError, CurveParams, Point};

/// Add two points.
///
/// The doubling formula is selected when `P` and `Q` are equal by value.
/// When `Px == Qx` but the points differ, `Qx - Px` has no inverse:
/// - if `Py + Qy ≡ 0` the points are inverses and the sum is the identity;
/// - otherwise the inputs cannot both be on the curve and the call fails
///   with [`CurveError::UndefinedAdditionCase`].
///
/// # Arguments
/// * `params` - Curve parameters
/// * `p` - Left operand
/// * `q` - Right operand
///
/// # Returns
/// A new point with coordinates reduced into `[0, p)`.
pub fn point_add(params: &CurveParams, p: &Point, q: &Point) -> Result<Point, CurveError> {
    let (px, py) = match p {
        Point::Identity => return Ok(q.clone()),
        Point::Affine { x, y } => (x, y),
    };
    let (qx, qy) = match q {
        Point::Identity => return Ok(p.clone()),
        Point::Affine { x, y } => (x, y),
    };
    let m = &params.p;

    let slope = if p == q {
        let denominator = mod_add(py, py, m);
        // Vertical tangent: only reachable for a point of order two.
        let Some(inverse) = mod_inverse(&denominator, m) else {
            return Ok(Point::Identity);
        };
        let numerator = mod_mul(&BigUint::from(3u32), &mod_mul(px, px, m), m);
        mod_mul(&numerator, &inverse, m)
    } else {
        let denominator = mod_sub(qx, px, m);
        match mod_inverse(&denominator, m) {
            Some(inverse) => mod_mul(&mod_sub(qy, py, m), &inverse, m),
            None if mod_add(py, qy, m).is_zero() => return Ok(Point::Identity),
            None => return Err(CurveError::UndefinedAdditionCase),
        }
    };

    let rx = mod_sub(&mod_sub(&mod_mul(&slope, &slope, m), px, m), qx, m);
    let ry = mod_sub(&mod_mul(&slope, &mod_sub(px, &rx, m), m), py, m);

    Ok(Point::from_coordinates_unchecked(rx, ry))
}

/// Double a point.
pub fn point_double(params: &CurveParams, p: &Point) -> Result<Point, CurveError> {
    point_add(params, p, p)
}

/// Negate a point: `(x, y) -> (x, p - y)`.
pub fn point_negate(params: &CurveParams, p: &Point) -> Point {
    match p {
        Point::Identity => Point::Identity,
        Point::Affine { x, y } => {
            Point::from_coordinates_unchecked(x.clone(), mod_neg(y, &params.p))
        }
    }
}

/// Multiply a point by a scalar using double-and-add, least-significant
/// bit first.
///
/// The accumulator and the running double are private copies; `p` is only
/// read. Exactly `bits(d)` bits are visited, and `d = 0` yields the
/// identity. The scalar is not range-checked against the group order.
///
/// # Arguments
/// * `params` - Curve parameters
/// * `d` - The scalar
/// * `p` - The point to multiply
pub fn point_mul(params: &CurveParams, d: &BigUint, p: &Point) -> Result<Point, CurveError> {
    let mut accumulator = Point::Identity;
    let mut running = p.clone();
    let bits = d.bits();

    for i in 0..bits {
        if d.bit(i) {
            accumulator = point_add(params, &accumulator, &running)?;
        }
        // The double after the top bit would never be accumulated.
        if i + 1 < bits {
            running = point_double(params, &running)?;
        }
    }

    Ok(accumulator)
}

/// Multiply the generator by `d`.
pub fn mul_generator(params: &CurveParams, d: &BigUint) -> Result<Point, CurveError> {
    point_mul(params, d, params.generator())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SECP256K1;

    fn hex_point(x: &str, y: &str) -> Point {
        Point::new(
            BigUint::parse_bytes(x.as_bytes(), 16).unwrap(),
            BigUint::parse_bytes(y.as_bytes(), 16).unwrap(),
            &SECP256K1,
        )
        .unwrap()
    }

    fn two_g() -> Point {
        hex_point(
            "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
            "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a",
        )
    }

    fn three_g() -> Point {
        hex_point(
            "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9",
            "388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672",
        )
    }

    #[test]
    fn test_identity_is_additive_unit() {
        let g = SECP256K1.generator();

        assert_eq!(point_add(&SECP256K1, &Point::Identity, g).unwrap(), *g);
        assert_eq!(point_add(&SECP256K1, g, &Point::Identity).unwrap(), *g);
        assert_eq!(
            point_add(&SECP256K1, &Point::Identity, &Point::Identity).unwrap(),
            Point::Identity
        );
    }

    #[test]
    fn test_doubling_generator() {
        let doubled = point_double(&SECP256K1, SECP256K1.generator()).unwrap();
        assert_eq!(doubled, two_g());
        assert!(SECP256K1.contains(&doubled));
    }

    #[test]
    fn test_general_addition() {
        let sum = point_add(&SECP256K1, SECP256K1.generator(), &two_g()).unwrap();
        assert_eq!(sum, three_g());

        // Commutative
        let sum = point_add(&SECP256K1, &two_g(), SECP256K1.generator()).unwrap();
        assert_eq!(sum, three_g());
    }

    #[test]
    fn test_doubling_uses_value_equality() {
        // Two separately allocated copies of G must still take the doubling path.
        let g1 = SECP256K1.generator().clone();
        let g2 = Point::new(
            g1.x().unwrap().clone(),
            g1.y().unwrap().clone(),
            &SECP256K1,
        )
        .unwrap();

        assert_eq!(point_add(&SECP256K1, &g1, &g2).unwrap(), two_g());
    }

    #[test]
    fn test_inverse_points_sum_to_identity() {
        let g = SECP256K1.generator();
        let neg = point_negate(&SECP256K1, g);

        assert!(SECP256K1.contains(&neg));
        assert_eq!(point_add(&SECP256K1, g, &neg).unwrap(), Point::Identity);
    }

    #[test]
    fn test_equal_x_unrelated_points_is_rejected() {
        let g = SECP256K1.generator();
        let bogus = Point::from_coordinates_unchecked(
            g.x().unwrap().clone(),
            BigUint::from(12345u32),
        );

        assert_eq!(
            point_add(&SECP256K1, g, &bogus),
            Err(CurveError::UndefinedAdditionCase)
        );
    }

    #[test]
    fn test_multiplication_small_scalars() {
        let g = SECP256K1.generator();

        assert_eq!(point_mul(&SECP256K1, &BigUint::zero(), g).unwrap(), Point::Identity);
        assert_eq!(point_mul(&SECP256K1, &BigUint::from(1u32), g).unwrap(), *g);
        assert_eq!(point_mul(&SECP256K1, &BigUint::from(2u32), g).unwrap(), two_g());
        assert_eq!(point_mul(&SECP256K1, &BigUint::from(3u32), g).unwrap(), three_g());
    }

    #[test]
    fn test_multiplication_does_not_touch_input() {
        let g = SECP256K1.generator().clone();
        let before = g.clone();
        let _ = point_mul(&SECP256K1, &BigUint::from(0xdead_beefu32), &g).unwrap();

        assert_eq!(g, before);
    }

    #[test]
    fn test_order_times_generator_is_identity() {
        let result = mul_generator(&SECP256K1, SECP256K1.order()).unwrap();
        assert_eq!(result, Point::Identity);
    }

    #[test]
    fn test_order_minus_one_is_negated_generator() {
        let n_minus_one = SECP256K1.order() - BigUint::from(1u32);
        let result = mul_generator(&SECP256K1, &n_minus_one).unwrap();

        assert_eq!(result, point_negate(&SECP256K1, SECP256K1.generator()));
    }

    #[test]
    fn test_multiplying_identity() {
        let result = point_mul(&SECP256K1, &BigUint::from(42u32), &Point::Identity).unwrap();
        assert_eq!(result, Point::Identity);
    }
}
