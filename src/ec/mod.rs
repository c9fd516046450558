//! Elliptic-curve arithmetic core
//!
//! Affine-coordinate arithmetic over a short-Weierstrass prime-field curve:
//! domain parameters, field arithmetic with a memoized modular inverse, the
//! group law, and NAF scalar multiplication. Key generation lives here too,
//! since it is nothing but a random scalar and one base-point multiplication.

pub mod curve;
pub mod field;
pub mod point;
pub mod scalar;

pub use curve::Curve;
pub use point::Point;

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

/// A private scalar d in [1, n-1] and its public point P = d * G
#[derive(Clone, Debug)]
pub struct KeyPair {
    d: BigUint,
    public: Point,
}

impl KeyPair {
    /// The private scalar d
    pub fn private_key(&self) -> &BigUint {
        &self.d
    }

    /// The public point P = d * G
    pub fn public_key(&self) -> &Point {
        &self.public
    }
}

/// Generate a key pair: d uniform in [1, n-1], P = d * G.
///
/// Cannot fail under a correctly seeded CSPRNG; supplying one is the
/// caller's precondition.
pub fn generate_keypair<R: CryptoRng + RngCore>(curve: &Curve, rng: &mut R) -> KeyPair {
    let d = curve.random_scalar(rng);
    let public = scalar::mul(curve, &d, curve.generator());
    KeyPair { d, public }
}

/// Scalar multiplication k * P with an arbitrary point
pub fn scalar_mult(curve: &Curve, k: &BigUint, point: &Point) -> Point {
    scalar::mul(curve, k, point)
}

/// Scalar multiplication with the base point: k * G
pub fn scalar_mult_base(curve: &Curve, k: &BigUint) -> Point {
    scalar::mul(curve, k, curve.generator())
}
