//! # gmcrypt
//!
//! Pure Rust implementation of the SM2 elliptic-curve public-key cryptosystem:
//! key generation, public-key encryption, and digital signatures over the
//! fixed SM2 prime-field domain, built on an affine-coordinate arithmetic
//! layer with NAF scalar multiplication.
//!
//! The crate also ships deliberate cryptanalysis routines ([`attacks`]) that
//! recover a private key from signature values alone whenever the
//! per-signature ephemeral secret k was disclosed, reused, shared between
//! signers, or reused across ECDSA and SM2. They exist to demonstrate why
//! nonce hygiene is non-negotiable; point them only at keys you own.
//!
//! ## Example
//!
//! ```
//! use gmcrypt::ec::{self, Curve};
//! use rand::rngs::OsRng;
//!
//! let curve = Curve::sm2();
//! let keypair = ec::generate_keypair(&curve, &mut OsRng);
//!
//! let ct = gmcrypt::pke::encrypt(&curve, b"Hello World!", keypair.public_key(), &mut OsRng)?;
//! let pt = gmcrypt::pke::decrypt(&curve, &ct.to_bytes(&curve), keypair.private_key())?;
//! assert_eq!(pt, b"Hello World!");
//!
//! let sig = gmcrypt::sign::sign(&curve, b"hello", keypair.private_key(), &mut OsRng)?;
//! assert!(gmcrypt::sign::verify(&curve, b"hello", &sig, keypair.public_key()));
//! # Ok::<(), gmcrypt::Error>(())
//! ```
//!
//! The SM3 hash is consumed as an external collaborator through the `sm3`
//! crate; it is not reimplemented here. Arithmetic is functionally correct
//! but not hardened against timing side channels.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{Error, Result};

// Elliptic-curve arithmetic core: domain parameters, field, points, scalars
pub mod ec;
pub use ec::{Curve, KeyPair, Point};

// Counter-mode key derivation over SM3
pub mod kdf;

// SM2 public-key encryption
pub mod pke;
pub use pke::Ciphertext;

// SM2 (and companion ECDSA) signatures
pub mod sign;
pub use sign::Signature;

// Private-key recovery from mishandled nonces
pub mod attacks;
