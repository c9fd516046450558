//! Affine elliptic-curve point operations
//!
//! Points are immutable values: either the point at infinity or an affine
//! (x, y) pair of canonical field elements. Every group operation returns a
//! new point; nothing is mutated in place. Non-infinity points produced by
//! this layer always satisfy the curve equation.

use crate::ec::curve::Curve;
use crate::ec::field;
use crate::error::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;

/// Uncompressed point tag byte: 0x04 || x || y
pub const UNCOMPRESSED_TAG: u8 = 0x04;

/// A point on a short-Weierstrass curve in affine coordinates, or the
/// point at infinity
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Point {
    /// The group identity (point at infinity)
    Identity,
    /// An affine point (x, y), both coordinates in [0, p)
    Affine {
        /// x-coordinate
        x: BigUint,
        /// y-coordinate
        y: BigUint,
    },
}

impl Point {
    /// The identity (point at infinity)
    pub fn identity() -> Self {
        Point::Identity
    }

    /// An affine point from raw coordinates. No curve check is applied;
    /// use [`Point::is_on_curve`] or the deserializer for untrusted input.
    pub fn affine(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// x-coordinate, absent for the identity
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate, absent for the identity
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }

    /// The inverse point -P = (x, p - y)
    pub fn negate(&self, curve: &Curve) -> Self {
        match self {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => {
                if y.is_zero() {
                    Point::Affine {
                        x: x.clone(),
                        y: BigUint::zero(),
                    }
                } else {
                    Point::Affine {
                        x: x.clone(),
                        y: curve.p() - y,
                    }
                }
            }
        }
    }

    /// Add two points (group law).
    ///
    /// Identity operands pass the other point through. Equal x-coordinates
    /// mean either P = -Q (infinity) or P = Q (doubling). The general case
    /// takes the chord slope through the two points.
    pub fn add(&self, curve: &Curve, other: &Self) -> Self {
        let (x1, y1) = match self {
            Point::Identity => return other.clone(),
            Point::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match other {
            Point::Identity => return self.clone(),
            Point::Affine { x, y } => (x, y),
        };

        let p = curve.p();
        if x1 == x2 {
            if field::mod_add(y1, y2, p).is_zero() {
                return Point::Identity;
            }
            return self.double(curve);
        }

        // lambda = (y2 - y1) / (x2 - x1)
        let dx = field::mod_sub(x2, x1, p);
        let dx_inv = curve
            .field_inverse(&dx)
            .expect("distinct x-coordinates have a nonzero difference mod a prime");
        let lambda = field::mod_mul(&field::mod_sub(y2, y1, p), &dx_inv, p);

        let x3 = field::mod_sub(&field::mod_sub(&field::mod_mul(&lambda, &lambda, p), x1, p), x2, p);
        let y3 = field::mod_sub(&field::mod_mul(&lambda, &field::mod_sub(x1, &x3, p), p), y1, p);
        Point::Affine { x: x3, y: y3 }
    }

    /// Double this point: 2P.
    ///
    /// The identity doubles to itself; a 2-torsion point (y = 0) doubles to
    /// the identity. Otherwise the tangent slope is (3x^2 + a) / 2y.
    pub fn double(&self, curve: &Curve) -> Self {
        let (x1, y1) = match self {
            Point::Identity => return Point::Identity,
            Point::Affine { x, y } => (x, y),
        };
        if y1.is_zero() {
            return Point::Identity;
        }

        let p = curve.p();
        let three = BigUint::from(3u32);
        let two = BigUint::from(2u32);

        let numerator = field::mod_add(
            &field::mod_mul(&three, &field::mod_mul(x1, x1, p), p),
            curve.a(),
            p,
        );
        let denominator = field::mod_mul(&two, y1, p);
        let den_inv = curve
            .field_inverse(&denominator)
            .expect("2y is nonzero mod an odd prime when y != 0");
        let lambda = field::mod_mul(&numerator, &den_inv, p);

        let x3 = field::mod_sub(&field::mod_sub(&field::mod_mul(&lambda, &lambda, p), x1, p), x1, p);
        let y3 = field::mod_sub(&field::mod_mul(&lambda, &field::mod_sub(x1, &x3, p), p), y1, p);
        Point::Affine { x: x3, y: y3 }
    }

    /// Check that the point satisfies y^2 = x^3 + ax + b. The identity is
    /// always valid.
    pub fn is_on_curve(&self, curve: &Curve) -> bool {
        let (x, y) = match self {
            Point::Identity => return true,
            Point::Affine { x, y } => (x, y),
        };
        let p = curve.p();
        let lhs = field::mod_mul(y, y, p);
        let x3 = field::mod_mul(&field::mod_mul(x, x, p), x, p);
        let rhs = field::mod_add(&field::mod_add(&x3, &field::mod_mul(curve.a(), x, p), p), curve.b(), p);
        lhs == rhs
    }

    /// Serialize as 0x04 || x || y with fixed-width coordinates.
    ///
    /// The identity has no affine encoding in this format and serializes as
    /// an empty vector; callers in this crate never encode it.
    pub fn serialize_uncompressed(&self, curve: &Curve) -> Vec<u8> {
        let (x, y) = match self {
            Point::Identity => return Vec::new(),
            Point::Affine { x, y } => (x, y),
        };
        let width = curve.field_bytes();
        let mut out = Vec::with_capacity(curve.point_bytes());
        out.push(UNCOMPRESSED_TAG);
        out.extend_from_slice(&field::to_padded_bytes(x, width));
        out.extend_from_slice(&field::to_padded_bytes(y, width));
        out
    }

    /// Deserialize an uncompressed point, validating the tag byte, the
    /// coordinate range, and the curve equation.
    pub fn deserialize_uncompressed(curve: &Curve, bytes: &[u8]) -> Result<Self> {
        let expected = curve.point_bytes();
        if bytes.len() < expected {
            return Err(Error::InvalidPointLength {
                expected,
                actual: bytes.len(),
            });
        }
        if bytes[0] != UNCOMPRESSED_TAG {
            return Err(Error::InvalidPointTag { found: bytes[0] });
        }
        let width = curve.field_bytes();
        let x = field::bytes_to_int(&bytes[1..1 + width]);
        let y = field::bytes_to_int(&bytes[1 + width..1 + 2 * width]);
        if &x >= curve.p() || &y >= curve.p() {
            return Err(Error::PointNotOnCurve);
        }
        let point = Point::Affine { x, y };
        if !point.is_on_curve(curve) {
            return Err(Error::PointNotOnCurve);
        }
        Ok(point)
    }
}
