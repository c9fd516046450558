//! Curve domain parameters
//!
//! [`Curve`] is the single immutable configuration value the rest of the
//! crate works against: the prime modulus, the short-Weierstrass
//! coefficients, the base point, and the subgroup order. It is constructed
//! once and passed by reference everywhere; there are no module-level
//! parameter globals, so test instances with different parameters can
//! coexist.

use crate::ec::field;
use crate::ec::point::Point;
use crate::error::{Error, Result};
use num_bigint::{BigUint, RandBigInt};
use num_traits::{Num, One};
use rand::{CryptoRng, RngCore};
use std::collections::HashMap;
use std::sync::Mutex;

/// SM2 prime modulus p (GB/T 32918 example domain)
const SM2_P: &str = "8542D69E4C044F18E8B92435BF6FF7DE457283915C45517D722EDB8B08F1DFC3";
/// SM2 coefficient a
const SM2_A: &str = "787968B4FA32C3FD2417842E73BBFEFF2F3C848B6831D7E0EC65228B3937E498";
/// SM2 coefficient b
const SM2_B: &str = "63E4C6D3B23B0C849CF84241484BFE48F61D59A5B16BA06E6E12D1DA27C5249A";
/// SM2 subgroup order n
const SM2_N: &str = "8542D69E4C044F18E8B92435BF6FF7DD297720630485628D5AE74EE7C32E79B7";
/// SM2 base point x
const SM2_GX: &str = "421DEBD61B62EAB6746434EBC3CC315E32220B3BADD50BDC4C4E6C147FEDD43D";
/// SM2 base point y
const SM2_GY: &str = "0680512BCBB42C07D47349D2153B70C4E5D7FDFCBFA36EA1A85841B9E46E09A2";

/// Upper bound on memoized field inverses. The cache only ever holds
/// intermediate chord/tangent denominators, so evicting nothing and simply
/// refusing new entries past the cap keeps it correct.
const INVERSE_CACHE_CAP: usize = 1024;

/// Domain parameters of a short-Weierstrass curve y^2 = x^3 + ax + b over
/// F_p, with base point G of prime order n.
#[derive(Debug)]
pub struct Curve {
    p: BigUint,
    a: BigUint,
    b: BigUint,
    g: Point,
    n: BigUint,
    field_bytes: usize,
    inv_cache: Mutex<HashMap<BigUint, BigUint>>,
}

impl Curve {
    /// Build a curve from raw parameters. The base point must satisfy the
    /// curve equation.
    pub fn new(p: BigUint, a: BigUint, b: BigUint, gx: BigUint, gy: BigUint, n: BigUint) -> Result<Self> {
        let field_bytes = ((p.bits() as usize) + 7) / 8;
        let g = Point::affine(gx, gy);
        let curve = Curve {
            p,
            a,
            b,
            g,
            n,
            field_bytes,
            inv_cache: Mutex::new(HashMap::new()),
        };
        if !curve.g.is_on_curve(&curve) {
            return Err(Error::PointNotOnCurve);
        }
        Ok(curve)
    }

    /// The fixed SM2 domain used by the scheme
    pub fn sm2() -> Self {
        let parse = |s| BigUint::from_str_radix(s, 16).expect("standard SM2 constant");
        Curve::new(
            parse(SM2_P),
            parse(SM2_A),
            parse(SM2_B),
            parse(SM2_GX),
            parse(SM2_GY),
            parse(SM2_N),
        )
        .expect("standard SM2 base point must be on the curve")
    }

    /// Prime field modulus p
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Curve coefficient a
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Curve coefficient b
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Base point G
    pub fn generator(&self) -> &Point {
        &self.g
    }

    /// Subgroup order n
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    /// Byte width of one encoded field element: ceil(bitlen(p) / 8)
    pub fn field_bytes(&self) -> usize {
        self.field_bytes
    }

    /// Byte width of one uncompressed point: tag byte plus two coordinates
    pub fn point_bytes(&self) -> usize {
        1 + 2 * self.field_bytes
    }

    /// Draw a uniform scalar from [1, n-1] with the caller's CSPRNG
    pub fn random_scalar<R: CryptoRng + RngCore>(&self, rng: &mut R) -> BigUint {
        rng.gen_biguint_range(&BigUint::one(), &self.n)
    }

    /// Inverse modulo p, memoized.
    ///
    /// The cache holds intermediate arithmetic denominators, never key
    /// material. It serves the field modulus only; order-n inversions go
    /// through [`field::mod_inverse`] uncached.
    pub fn field_inverse(&self, a: &BigUint) -> Result<BigUint> {
        if let Ok(cache) = self.inv_cache.lock() {
            if let Some(inv) = cache.get(a) {
                return Ok(inv.clone());
            }
        }
        let inv = field::mod_inverse(a, &self.p)?;
        if let Ok(mut cache) = self.inv_cache.lock() {
            if cache.len() < INVERSE_CACHE_CAP {
                cache.insert(a.clone(), inv.clone());
            }
        }
        Ok(inv)
    }
}
