//! SM2 digital signatures, with companion ECDSA operations
//!
//! Signing hashes the message with SM3, commits to the ephemeral point
//! x-coordinate through r = (e + x1) mod n, and folds the private key into
//! s = (1 + d)^-1 (k - r*d) mod n. Verification is total: every failure
//! mode returns `false`, never an error.
//!
//! The caller-supplied-nonce entry points exist to model nonce misuse
//! deterministically (see [`crate::attacks`]); production signing always
//! draws a fresh random k. A degenerate r or s under a caller-supplied k is
//! a hard [`Error::DegenerateNonce`] failure rather than a silent resample,
//! so fixed-nonce experiments stay reproducible.
//!
//! The ECDSA operations run over the same domain and hash; they are the
//! second protocol of the cross-protocol nonce-reuse scenario.

use crate::ec::curve::Curve;
use crate::ec::field;
use crate::ec::point::Point;
use crate::ec::scalar;
use crate::error::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use sm3::{Digest, Sm3};

/// Cap on ephemeral-secret resampling for random-nonce signing
const MAX_RESAMPLE_ATTEMPTS: usize = 64;

/// A signature (r, s), both components in [1, n-1]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Assemble a signature from raw components.
    ///
    /// No range validation is applied; verification rejects out-of-range
    /// components itself.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Signature { r, s }
    }

    /// The r component
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The s component
    pub fn s(&self) -> &BigUint {
        &self.s
    }
}

/// SM3 digest of the message, interpreted as a big-endian integer
pub fn hash_message(message: &[u8]) -> BigUint {
    BigUint::from_bytes_be(Sm3::digest(message).as_slice())
}

/// Sign `message` under private key `d` with a fresh random ephemeral
/// secret.
///
/// Degenerate r or s values resample k; the retry cap only trips when the
/// random source is broken.
pub fn sign<R: CryptoRng + RngCore>(
    curve: &Curve,
    message: &[u8],
    d: &BigUint,
    rng: &mut R,
) -> Result<Signature> {
    let e = hash_message(message);
    for _ in 0..MAX_RESAMPLE_ATTEMPTS {
        let k = curve.random_scalar(rng);
        if let Some(sig) = sign_digest(curve, &e, d, &k)? {
            return Ok(sig);
        }
    }
    Err(Error::RetriesExhausted {
        operation: "SM2 signing",
    })
}

/// Sign `message` with a caller-supplied ephemeral secret k.
///
/// Intended only for controlled nonce-misuse experiments. Fails with
/// [`Error::InvalidNonce`] unless 0 < k < n, and with
/// [`Error::DegenerateNonce`] when the supplied k produces a degenerate
/// r or s — the caller fixed k on purpose, so re-randomizing behind its
/// back would falsify the experiment.
pub fn sign_with_nonce(
    curve: &Curve,
    message: &[u8],
    d: &BigUint,
    k: &BigUint,
) -> Result<Signature> {
    if k.is_zero() || k >= curve.order() {
        return Err(Error::InvalidNonce);
    }
    let e = hash_message(message);
    sign_digest(curve, &e, d, k)?.ok_or(Error::DegenerateNonce)
}

/// One signing attempt. `Ok(None)` marks a degenerate r or s.
fn sign_digest(curve: &Curve, e: &BigUint, d: &BigUint, k: &BigUint) -> Result<Option<Signature>> {
    let n = curve.order();
    let p1 = scalar::mul(curve, k, curve.generator());
    let x1 = match p1.x() {
        Some(x) => x,
        // k*G is never the identity for 0 < k < n
        None => return Ok(None),
    };

    let r = (e + x1) % n;
    if r.is_zero() || &(&r + k) == n {
        return Ok(None);
    }

    let one_plus_d = (d + 1u32) % n;
    let inv = field::mod_inverse(&one_plus_d, n)?;
    let rd = field::mod_mul(&r, d, n);
    let s = field::mod_mul(&inv, &field::mod_sub(k, &rd, n), n);
    if s.is_zero() {
        return Ok(None);
    }
    Ok(Some(Signature { r, s }))
}

/// Verify an SM2 signature. Returns `false` for any invalid signature;
/// never errors.
pub fn verify(curve: &Curve, message: &[u8], signature: &Signature, public_key: &Point) -> bool {
    let n = curve.order();
    let (r, s) = (&signature.r, &signature.s);
    if r.is_zero() || r >= n || s.is_zero() || s >= n {
        return false;
    }

    let e = hash_message(message);
    let t = (r + s) % n;
    if t.is_zero() {
        return false;
    }

    let sg = scalar::mul(curve, s, curve.generator());
    let tp = scalar::mul(curve, &t, public_key);
    let point = sg.add(curve, &tp);
    match point.x() {
        Some(x) => (e + x) % n == *r,
        None => false,
    }
}

/// ECDSA signing over the same domain and hash, with a caller-supplied
/// ephemeral secret.
///
/// r = (k*G).x mod n and s = k^-1 (e + r*d) mod n. Exists to produce the
/// ECDSA half of the cross-protocol nonce-reuse scenario; the same nonce
/// rules as [`sign_with_nonce`] apply.
pub fn ecdsa_sign_with_nonce(
    curve: &Curve,
    message: &[u8],
    d: &BigUint,
    k: &BigUint,
) -> Result<Signature> {
    let n = curve.order();
    if k.is_zero() || k >= n {
        return Err(Error::InvalidNonce);
    }

    let e = hash_message(message);
    let p1 = scalar::mul(curve, k, curve.generator());
    let x1 = match p1.x() {
        Some(x) => x,
        None => return Err(Error::DegenerateNonce),
    };

    let r = x1 % n;
    if r.is_zero() {
        return Err(Error::DegenerateNonce);
    }

    let k_inv = field::mod_inverse(k, n)?;
    let rd = field::mod_mul(&r, d, n);
    let s = field::mod_mul(&k_inv, &field::mod_add(&(&e % n), &rd, n), n);
    if s.is_zero() {
        return Err(Error::DegenerateNonce);
    }
    Ok(Signature { r, s })
}

/// Verify an ECDSA signature over the same domain and hash. Returns
/// `false` for any invalid signature; never errors.
pub fn ecdsa_verify(curve: &Curve, message: &[u8], signature: &Signature, public_key: &Point) -> bool {
    let n = curve.order();
    let (r, s) = (&signature.r, &signature.s);
    if r.is_zero() || r >= n || s.is_zero() || s >= n {
        return false;
    }

    let w = match field::mod_inverse(s, n) {
        Ok(w) => w,
        Err(_) => return false,
    };
    let e = hash_message(message) % n;
    let u1 = field::mod_mul(&e, &w, n);
    let u2 = field::mod_mul(r, &w, n);

    let point = scalar::mul(curve, &u1, curve.generator())
        .add(curve, &scalar::mul(curve, &u2, public_key));
    match point.x() {
        Some(x) => &(x % n) == r,
        None => false,
    }
}
