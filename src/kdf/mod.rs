//! Counter-mode key derivation over SM3
//!
//! Expands a byte seed into an arbitrary-length pseudorandom stream:
//! SM3(seed || counter) for counter = 1, 2, ... with the counter encoded as
//! a 4-byte big-endian integer, digests concatenated and truncated to the
//! requested length.

use crate::error::{Error, Result};
use sm3::{Digest, Sm3};

/// SM3 digest size in bytes
pub const DIGEST_SIZE: usize = 32;

/// Derive `out_len` bytes of key stream from `seed`.
///
/// Fails with [`Error::KeyLengthExceeded`] when the output would need more
/// than 2^32 - 1 counter values. With a 256-bit digest that bound sits far
/// beyond any message this crate can mask, so it is defensive only.
pub fn derive(seed: &[u8], out_len: usize) -> Result<Vec<u8>> {
    let max = (u32::MAX as u64) * DIGEST_SIZE as u64;
    if out_len as u64 > max {
        return Err(Error::KeyLengthExceeded { requested: out_len });
    }

    let mut stream = Vec::with_capacity(out_len);
    let mut counter: u32 = 1;
    while stream.len() < out_len {
        let mut hasher = Sm3::new();
        hasher.update(seed);
        hasher.update(counter.to_be_bytes());
        stream.extend_from_slice(hasher.finalize().as_slice());
        counter = counter.wrapping_add(1);
    }
    stream.truncate(out_len);
    Ok(stream)
}

#[cfg(test)]
mod tests;
