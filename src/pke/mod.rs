//! SM2 public-key encryption
//!
//! Encryption masks the message with a KDF-derived key stream seeded by the
//! shared point (x2, y2) = k * P, transmits the ephemeral point C1 = k * G
//! uncompressed, and binds everything with the tag C3 = SM3(x2 || m || y2).
//! Wire format: 0x04 || x1 || y1 || C2 || C3, with a hex transport encoding
//! on top.
//!
//! Decode failures (short input, wrong tag byte, off-curve point, tag
//! mismatch) are typed errors and never retried; the all-zero key-stream
//! coincidence during encryption is resampled with a fresh k, up to a cap.

use crate::ec::curve::Curve;
use crate::ec::field;
use crate::ec::point::Point;
use crate::ec::scalar;
use crate::error::{Error, Result};
use crate::kdf;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use sm3::{Digest, Sm3};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Cap on ephemeral-secret resampling. Each retry fires only on an
/// astronomically unlikely algebraic coincidence, so hitting the cap means
/// the random source is broken.
const MAX_RESAMPLE_ATTEMPTS: usize = 64;

/// An SM2 ciphertext: ephemeral point C1, masked message C2, binding tag C3
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    c1: Point,
    c2: Vec<u8>,
    c3: [u8; kdf::DIGEST_SIZE],
}

impl Ciphertext {
    /// The ephemeral public point C1 = k * G
    pub fn c1(&self) -> &Point {
        &self.c1
    }

    /// The masked message bytes C2
    pub fn c2(&self) -> &[u8] {
        &self.c2
    }

    /// The 32-byte binding tag C3
    pub fn c3(&self) -> &[u8; kdf::DIGEST_SIZE] {
        &self.c3
    }

    /// Serialize to the wire format 0x04 || x1 || y1 || C2 || C3
    pub fn to_bytes(&self, curve: &Curve) -> Vec<u8> {
        let mut out = self.c1.serialize_uncompressed(curve);
        out.extend_from_slice(&self.c2);
        out.extend_from_slice(&self.c3);
        out
    }

    /// Parse the wire format, validating length, tag byte, and that C1 lies
    /// on the curve
    pub fn from_bytes(curve: &Curve, bytes: &[u8]) -> Result<Self> {
        let point_len = curve.point_bytes();
        let minimum = point_len + kdf::DIGEST_SIZE;
        if bytes.len() < minimum {
            return Err(Error::CiphertextTooShort {
                minimum,
                actual: bytes.len(),
            });
        }
        let c1 = Point::deserialize_uncompressed(curve, &bytes[..point_len])?;
        let c2 = bytes[point_len..bytes.len() - kdf::DIGEST_SIZE].to_vec();
        let mut c3 = [0u8; kdf::DIGEST_SIZE];
        c3.copy_from_slice(&bytes[bytes.len() - kdf::DIGEST_SIZE..]);
        Ok(Ciphertext { c1, c2, c3 })
    }

    /// Hex transport encoding of the wire format
    pub fn to_hex(&self, curve: &Curve) -> String {
        hex::encode(self.to_bytes(curve))
    }

    /// Parse the hex transport encoding
    pub fn from_hex(curve: &Curve, s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|_| Error::InvalidHex)?;
        Self::from_bytes(curve, &bytes)
    }
}

/// Encrypt `message` to the holder of `public_key`.
///
/// Draws a fresh ephemeral k per attempt; an all-zero key stream or a
/// degenerate shared point resamples k. The identity is rejected as a
/// public key up front.
pub fn encrypt<R: CryptoRng + RngCore>(
    curve: &Curve,
    message: &[u8],
    public_key: &Point,
    rng: &mut R,
) -> Result<Ciphertext> {
    if public_key.is_identity() {
        return Err(Error::PointNotOnCurve);
    }

    for _ in 0..MAX_RESAMPLE_ATTEMPTS {
        let k = curve.random_scalar(rng);
        let c1 = scalar::mul(curve, &k, curve.generator());
        let shared = scalar::mul(curve, &k, public_key);
        let (x2, y2) = match &shared {
            Point::Affine { x, y } => (x, y),
            Point::Identity => continue,
        };

        let mut seed = shared_seed(curve, x2, y2);
        let mut stream = kdf::derive(&seed, message.len())?;
        if !stream.is_empty() && stream.iter().all(|&b| b == 0) {
            seed.zeroize();
            stream.zeroize();
            continue;
        }

        let c2: Vec<u8> = message
            .iter()
            .zip(stream.iter())
            .map(|(m, t)| m ^ t)
            .collect();
        let c3 = binding_tag(curve, x2, y2, message);

        seed.zeroize();
        stream.zeroize();
        return Ok(Ciphertext { c1, c2, c3 });
    }
    Err(Error::RetriesExhausted {
        operation: "SM2 encryption",
    })
}

/// Decrypt an SM2 ciphertext in wire format with private key `d`.
///
/// Performs the wire checks in order (length, tag byte, curve membership),
/// rederives the key stream from d * C1, and verifies the binding tag in
/// constant time before releasing the plaintext.
pub fn decrypt(curve: &Curve, ciphertext: &[u8], d: &BigUint) -> Result<Vec<u8>> {
    let parsed = Ciphertext::from_bytes(curve, ciphertext)?;
    decrypt_parsed(curve, &parsed, d)
}

/// Decrypt an already parsed [`Ciphertext`]
pub fn decrypt_parsed(curve: &Curve, ciphertext: &Ciphertext, d: &BigUint) -> Result<Vec<u8>> {
    let shared = scalar::mul(curve, d, &ciphertext.c1);
    let (x2, y2) = match &shared {
        Point::Affine { x, y } => (x, y),
        Point::Identity => return Err(Error::PointNotOnCurve),
    };

    let mut seed = shared_seed(curve, x2, y2);
    let mut stream = kdf::derive(&seed, ciphertext.c2.len())?;
    if !stream.is_empty() && stream.iter().all(|&b| b == 0) {
        seed.zeroize();
        return Err(Error::ZeroKeyStream);
    }

    let message: Vec<u8> = ciphertext
        .c2
        .iter()
        .zip(stream.iter())
        .map(|(c, t)| c ^ t)
        .collect();
    let expected = binding_tag(curve, x2, y2, &message);

    seed.zeroize();
    stream.zeroize();

    if expected.ct_eq(&ciphertext.c3).into() {
        Ok(message)
    } else {
        Err(Error::TagMismatch)
    }
}

/// KDF seed: x2 || y2 as fixed-width big-endian bytes
fn shared_seed(curve: &Curve, x2: &BigUint, y2: &BigUint) -> Vec<u8> {
    let width = curve.field_bytes();
    let mut seed = field::to_padded_bytes(x2, width);
    seed.extend_from_slice(&field::to_padded_bytes(y2, width));
    seed
}

/// C3 = SM3(x2 || message || y2)
fn binding_tag(curve: &Curve, x2: &BigUint, y2: &BigUint, message: &[u8]) -> [u8; kdf::DIGEST_SIZE] {
    let width = curve.field_bytes();
    let mut hasher = Sm3::new();
    hasher.update(field::to_padded_bytes(x2, width));
    hasher.update(message);
    hasher.update(field::to_padded_bytes(y2, width));
    hasher.finalize().into()
}
