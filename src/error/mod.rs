//! Error handling for the SM2 cryptosystem and its analysis routines
//!
//! Malformed or adversarial input to decryption and point decoding surfaces
//! immediately as a typed failure and is never retried. Degenerate algebraic
//! coincidences during correct-usage signing/encryption are resampled
//! internally with a fresh ephemeral secret, up to a fixed cap. Signature
//! verification never produces an error for an invalid signature; it returns
//! a boolean.

use std::fmt;

/// The error type for SM2 operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No modular inverse exists: gcd(value, modulus) != 1
    NoInverse,

    /// Leading byte of an encoded point was not the uncompressed tag 0x04
    InvalidPointTag {
        /// The tag byte actually found
        found: u8,
    },

    /// Encoded point shorter than one tag byte plus two coordinates
    InvalidPointLength {
        /// Byte length the uncompressed encoding requires
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// Decoded coordinates do not satisfy the curve equation
    PointNotOnCurve,

    /// Ciphertext shorter than one encoded point plus the 32-byte tag
    CiphertextTooShort {
        /// Minimum length the wire format requires
        minimum: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// Derived key stream was entirely zero during decryption
    ZeroKeyStream,

    /// Recomputed C3 tag differs from the one supplied
    TagMismatch,

    /// Requested KDF output would exhaust the 32-bit counter space
    KeyLengthExceeded {
        /// Number of bytes requested
        requested: usize,
    },

    /// Caller-supplied ephemeral secret outside [1, n-1]
    InvalidNonce,

    /// Caller-supplied ephemeral secret produced a degenerate r or s
    DegenerateNonce,

    /// Recovery denominator is not invertible modulo the subgroup order
    IrreversibleDenominator,

    /// Resampling of the ephemeral secret hit the retry cap
    RetriesExhausted {
        /// Operation that gave up
        operation: &'static str,
    },

    /// Hex transport string could not be decoded
    InvalidHex,
}

/// Result type for SM2 operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoInverse => write!(f, "No modular inverse exists"),
            Error::InvalidPointTag { found } => {
                write!(f, "Invalid point tag: expected 0x04, got {:#04x}", found)
            }
            Error::InvalidPointLength { expected, actual } => {
                write!(
                    f,
                    "Invalid point encoding: need {} bytes, got {}",
                    expected, actual
                )
            }
            Error::PointNotOnCurve => write!(f, "Point is not on the curve"),
            Error::CiphertextTooShort { minimum, actual } => {
                write!(
                    f,
                    "Ciphertext too short: need at least {} bytes, got {}",
                    minimum, actual
                )
            }
            Error::ZeroKeyStream => write!(f, "Derived key stream is all zero"),
            Error::TagMismatch => write!(f, "Ciphertext tag verification failed"),
            Error::KeyLengthExceeded { requested } => {
                write!(f, "KDF output length {} exceeds the counter space", requested)
            }
            Error::InvalidNonce => write!(f, "Ephemeral secret outside [1, n-1]"),
            Error::DegenerateNonce => {
                write!(f, "Supplied ephemeral secret produced a degenerate signature")
            }
            Error::IrreversibleDenominator => {
                write!(f, "Recovery denominator not invertible modulo the order")
            }
            Error::RetriesExhausted { operation } => {
                write!(f, "Retry cap reached in {}", operation)
            }
            Error::InvalidHex => write!(f, "Invalid hex encoding"),
        }
    }
}

impl std::error::Error for Error {}
