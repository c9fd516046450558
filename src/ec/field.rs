//! Prime-field arithmetic
//!
//! Plain modular arithmetic over an explicitly supplied modulus. All values
//! are canonical residues in [0, m); every operation returns a fresh value.
//! The modular inverse runs the extended Euclidean algorithm iteratively and
//! reports [`Error::NoInverse`] when gcd(a, m) != 1 — unreachable for a prime
//! modulus and 0 < a < m, but checked because point arithmetic can feed it
//! intermediate values it does not otherwise validate.

use crate::error::{Error, Result};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// (a + b) mod m
pub fn mod_add(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// (a - b) mod m, for canonical a, b < m
pub fn mod_sub(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    ((a + m) - b) % m
}

/// (a * b) mod m
pub fn mod_mul(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// The unique x with a*x = 1 (mod m), via the extended Euclidean algorithm.
///
/// Runs the iterative form of the algorithm over signed integers; the
/// Bezout coefficient is reduced with a floored modulus to land back in
/// [0, m).
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    let modulus = BigInt::from(m.clone());
    let mut old_r = BigInt::from(a.clone());
    let mut r = modulus.clone();
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = core::mem::replace(&mut r, next_r);
        let next_s = &old_s - &q * &s;
        old_s = core::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return Err(Error::NoInverse);
    }

    let inv = old_s.mod_floor(&modulus);
    // mod_floor against a positive modulus is always non-negative
    Ok(inv.to_biguint().expect("floored residue is non-negative"))
}

/// Fixed-width big-endian encoding, zero-padded on the left.
///
/// This is the field-element wire codec: width = ceil(bitlen(p) / 8) for the
/// curve in use. Values wider than `width` bytes keep only the low-order
/// bytes, which canonical field elements never trigger.
pub fn to_padded_bytes(x: &BigUint, width: usize) -> Vec<u8> {
    let raw = x.to_bytes_be();
    if raw.len() >= width {
        return raw[raw.len() - width..].to_vec();
    }
    let mut out = vec![0u8; width - raw.len()];
    out.extend_from_slice(&raw);
    out
}

/// Big-endian bytes to integer
pub fn bytes_to_int(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}
