use super::*;
use crate::error::Error;

#[test]
fn output_length_is_exact() {
    for len in [0usize, 1, 31, 32, 33, 64, 100] {
        let stream = derive(b"seed", len).unwrap();
        assert_eq!(stream.len(), len);
    }
}

#[test]
fn derivation_is_deterministic() {
    let a = derive(b"seed material", 48).unwrap();
    let b = derive(b"seed material", 48).unwrap();
    assert_eq!(a, b);
}

#[test]
fn longer_output_extends_shorter_one() {
    // the counter sequence is fixed, so a longer stream is a prefix-extension
    let short = derive(b"seed material", 32).unwrap();
    let long = derive(b"seed material", 96).unwrap();
    assert_eq!(&long[..32], &short[..]);
}

#[test]
fn distinct_seeds_diverge() {
    let a = derive(b"seed one", 32).unwrap();
    let b = derive(b"seed two", 32).unwrap();
    assert_ne!(a, b);
}

#[test]
fn first_block_is_hash_of_seed_and_counter_one() {
    use sm3::{Digest, Sm3};
    let mut hasher = Sm3::new();
    hasher.update(b"seed");
    hasher.update(1u32.to_be_bytes());
    let expected = hasher.finalize();
    assert_eq!(derive(b"seed", 32).unwrap(), expected.as_slice());
}

#[test]
fn counter_space_is_bounded() {
    assert_eq!(
        derive(b"seed", usize::MAX),
        Err(Error::KeyLengthExceeded {
            requested: usize::MAX
        })
    );
}
