//! NAF scalar multiplication
//!
//! Scalars are decomposed into non-adjacent form (NAF), a signed-binary
//! representation with no two consecutive nonzero digits. NAF leaves about
//! one third fewer nonzero digits than plain binary, and each nonzero digit
//! costs one point addition, so double-and-add driven by NAF digits saves
//! roughly a third of the additions. The base point is negated exactly once
//! up front to serve the -1 digits.

use crate::ec::curve::Curve;
use crate::ec::point::Point;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

/// Non-adjacent-form digits of k, least significant first.
///
/// While k is nonzero: an odd k takes digit 2 - (k mod 4), which is +1 or
/// -1 and is subtracted from k; an even k takes digit 0. Then k is halved.
pub fn naf(k: &BigUint) -> Vec<i8> {
    let four = BigUint::from(4u32);
    let mut k = k.clone();
    let mut digits = Vec::with_capacity(k.bits() as usize + 1);

    while !k.is_zero() {
        if k.is_odd() {
            let rem4 = (&k % &four)
                .to_u32_digits()
                .first()
                .copied()
                .unwrap_or(0);
            if rem4 == 1 {
                digits.push(1);
                k -= 1u32;
            } else {
                digits.push(-1);
                k += 1u32;
            }
        } else {
            digits.push(0);
        }
        k >>= 1u32;
    }
    digits
}

/// Scalar multiplication k * P via NAF double-and-add.
///
/// Returns the identity for k = 0. Digits are scanned most significant
/// first; the accumulator doubles each step and adds P or -P on a nonzero
/// digit.
pub fn mul(curve: &Curve, k: &BigUint, point: &Point) -> Point {
    if k.is_zero() {
        return Point::identity();
    }

    let digits = naf(k);
    let neg_point = point.negate(curve);
    let mut acc = Point::identity();

    for &digit in digits.iter().rev() {
        acc = acc.double(curve);
        match digit {
            1 => acc = acc.add(curve, point),
            -1 => acc = acc.add(curve, &neg_point),
            _ => {}
        }
    }
    acc
}
