//! Private-key recovery from mishandled signature nonces
//!
//! Four algebraic procedures that recover an SM2 private key from signature
//! values alone, each exploiting a different way the ephemeral secret k can
//! be mishandled: disclosed outright, reused by one signer, shared between
//! two signers, or reused across ECDSA and SM2. They read nothing but
//! (r, s) pairs and the subgroup order — no signer internals.
//!
//! All derivations start from the SM2 relation s(1 + d) = k - r*d (mod n)
//! and, for the cross-protocol case, the ECDSA relation k*s = e + r*d
//! (mod n). Each fails with [`Error::IrreversibleDenominator`] when its
//! denominator is not invertible mod n, which a prime n makes a defensive
//! rather than expected case.
//!
//! These exist for demonstration and key-hygiene auditing. Run them only
//! against keys you own.

use crate::ec::curve::Curve;
use crate::ec::field;
use crate::error::{Error, Result};
use crate::sign::Signature;
use num_bigint::BigUint;

/// Inverse mod n, with failures reported as an irreversible denominator
fn order_inverse(curve: &Curve, denominator: &BigUint) -> Result<BigUint> {
    field::mod_inverse(denominator, curve.order()).map_err(|_| Error::IrreversibleDenominator)
}

/// Recover d from one signature whose ephemeral secret k was disclosed.
///
/// From s(1 + d) = k - r*d: d = (k - s) * (s + r)^-1 mod n.
pub fn recover_from_disclosed_nonce(
    curve: &Curve,
    signature: &Signature,
    k: &BigUint,
) -> Result<BigUint> {
    let n = curve.order();
    let denominator = field::mod_add(signature.s(), signature.r(), n);
    let inv = order_inverse(curve, &denominator)?;
    let numerator = field::mod_sub(&(k % n), signature.s(), n);
    Ok(field::mod_mul(&numerator, &inv, n))
}

/// Recover d from two signatures by the same signer that reused one k.
///
/// Subtracting the two signing relations eliminates k:
/// d = (s2 - s1) * (s1 - s2 + r1 - r2)^-1 mod n.
pub fn recover_from_repeated_nonce(
    curve: &Curve,
    first: &Signature,
    second: &Signature,
) -> Result<BigUint> {
    let n = curve.order();
    let s_diff = field::mod_sub(first.s(), second.s(), n);
    let r_diff = field::mod_sub(first.r(), second.r(), n);
    let denominator = field::mod_add(&s_diff, &r_diff, n);
    let inv = order_inverse(curve, &denominator)?;
    let numerator = field::mod_sub(second.s(), first.s(), n);
    Ok(field::mod_mul(&numerator, &inv, n))
}

/// Reconstruct the ephemeral secret k from a signature and the private key
/// that produced it: k = s(1 + d) + r*d mod n.
pub fn nonce_from_signature(curve: &Curve, signature: &Signature, d: &BigUint) -> BigUint {
    let n = curve.order();
    let one_plus_d = (d + 1u32) % n;
    let s_term = field::mod_mul(signature.s(), &one_plus_d, n);
    let r_term = field::mod_mul(signature.r(), d, n);
    field::mod_add(&s_term, &r_term, n)
}

/// Recover a peer's private key when two signers accidentally shared one k.
///
/// The known party's signature and private key yield k via
/// [`nonce_from_signature`]; the peer's signature then falls to the
/// disclosed-nonce recovery.
pub fn recover_peer_from_shared_nonce(
    curve: &Curve,
    known_signature: &Signature,
    known_d: &BigUint,
    peer_signature: &Signature,
) -> Result<BigUint> {
    let k = nonce_from_signature(curve, known_signature, known_d);
    recover_from_disclosed_nonce(curve, peer_signature, &k)
}

/// Recover d from one ECDSA signature and one SM2 signature over the same
/// domain that share both the private key and the ephemeral secret.
///
/// Substituting k = s2(1 + d) + r2*d from the SM2 relation into the ECDSA
/// relation k*s1 = e1 + r1*d gives
/// d = (s2*s1 - e1) * (r1 - s1*s2 - s1*r2)^-1 mod n,
/// with e1 the ECDSA message digest as an integer.
pub fn recover_from_cross_protocol_nonce(
    curve: &Curve,
    ecdsa_signature: &Signature,
    ecdsa_digest: &BigUint,
    sm2_signature: &Signature,
) -> Result<BigUint> {
    let n = curve.order();
    let (r1, s1) = (ecdsa_signature.r(), ecdsa_signature.s());
    let (r2, s2) = (sm2_signature.r(), sm2_signature.s());

    let s1s2 = field::mod_mul(s1, s2, n);
    let s1r2 = field::mod_mul(s1, r2, n);
    let denominator = field::mod_sub(&field::mod_sub(r1, &s1s2, n), &s1r2, n);
    let inv = order_inverse(curve, &denominator)?;
    let numerator = field::mod_sub(&s1s2, &(ecdsa_digest % n), n);
    Ok(field::mod_mul(&numerator, &inv, n))
}

#[cfg(test)]
mod tests;
