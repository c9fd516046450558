//! Recovery-procedure tests: every attack runs against freshly generated
//! keys and must reproduce the private scalar exactly.

use super::*;
use crate::ec::{self, Curve};
use crate::error::Error;
use crate::sign::{self, Signature};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn setup() -> (Curve, ChaCha20Rng) {
    (Curve::sm2(), ChaCha20Rng::seed_from_u64(1337))
}

#[test]
fn disclosed_nonce_recovers_private_key() {
    let (curve, mut rng) = setup();
    let keypair = ec::generate_keypair(&curve, &mut rng);
    let k = curve.random_scalar(&mut rng);

    let sig = sign::sign_with_nonce(&curve, b"secret operation", keypair.private_key(), &k).unwrap();
    let recovered = recover_from_disclosed_nonce(&curve, &sig, &k).unwrap();
    assert_eq!(&recovered, keypair.private_key());
}

#[test]
fn repeated_nonce_recovers_private_key() {
    let (curve, mut rng) = setup();
    let keypair = ec::generate_keypair(&curve, &mut rng);
    let k = curve.random_scalar(&mut rng);

    let first = sign::sign_with_nonce(&curve, b"message one", keypair.private_key(), &k).unwrap();
    let second = sign::sign_with_nonce(&curve, b"message two", keypair.private_key(), &k).unwrap();
    let recovered = recover_from_repeated_nonce(&curve, &first, &second).unwrap();
    assert_eq!(&recovered, keypair.private_key());
}

#[test]
fn repeated_nonce_on_identical_signatures_is_irreversible() {
    let (curve, mut rng) = setup();
    let keypair = ec::generate_keypair(&curve, &mut rng);
    let k = curve.random_scalar(&mut rng);

    let sig = sign::sign_with_nonce(&curve, b"only one message", keypair.private_key(), &k).unwrap();
    assert_eq!(
        recover_from_repeated_nonce(&curve, &sig, &sig),
        Err(Error::IrreversibleDenominator)
    );
}

#[test]
fn nonce_reconstruction_matches_the_one_used() {
    let (curve, mut rng) = setup();
    let keypair = ec::generate_keypair(&curve, &mut rng);
    let k = curve.random_scalar(&mut rng);

    let sig = sign::sign_with_nonce(&curve, b"trace me", keypair.private_key(), &k).unwrap();
    assert_eq!(nonce_from_signature(&curve, &sig, keypair.private_key()), k);
}

#[test]
fn shared_nonce_recovers_both_peers() {
    let (curve, mut rng) = setup();
    let alice = ec::generate_keypair(&curve, &mut rng);
    let bob = ec::generate_keypair(&curve, &mut rng);
    let k = curve.random_scalar(&mut rng);

    let alice_sig = sign::sign_with_nonce(&curve, b"from alice", alice.private_key(), &k).unwrap();
    let bob_sig = sign::sign_with_nonce(&curve, b"from bob", bob.private_key(), &k).unwrap();

    // knowing either private key exposes the other through the shared k
    let recovered_bob =
        recover_peer_from_shared_nonce(&curve, &alice_sig, alice.private_key(), &bob_sig).unwrap();
    assert_eq!(&recovered_bob, bob.private_key());

    let recovered_alice =
        recover_peer_from_shared_nonce(&curve, &bob_sig, bob.private_key(), &alice_sig).unwrap();
    assert_eq!(&recovered_alice, alice.private_key());
}

#[test]
fn cross_protocol_nonce_recovers_private_key() {
    let (curve, mut rng) = setup();
    let keypair = ec::generate_keypair(&curve, &mut rng);
    let k = curve.random_scalar(&mut rng);

    let ecdsa_msg = b"signed with ecdsa";
    let ecdsa_sig =
        sign::ecdsa_sign_with_nonce(&curve, ecdsa_msg, keypair.private_key(), &k).unwrap();
    let sm2_sig =
        sign::sign_with_nonce(&curve, b"signed with sm2", keypair.private_key(), &k).unwrap();

    let e1 = sign::hash_message(ecdsa_msg);
    let recovered =
        recover_from_cross_protocol_nonce(&curve, &ecdsa_sig, &e1, &sm2_sig).unwrap();
    assert_eq!(&recovered, keypair.private_key());
}

#[test]
fn recovery_reads_only_signature_values() {
    // the procedures take (r, s) pairs rebuilt from raw integers, proving
    // no hidden signer state is involved
    let (curve, mut rng) = setup();
    let keypair = ec::generate_keypair(&curve, &mut rng);
    let k = curve.random_scalar(&mut rng);

    let sig = sign::sign_with_nonce(&curve, b"opaque", keypair.private_key(), &k).unwrap();
    let rebuilt = Signature::new(sig.r().clone(), sig.s().clone());
    let recovered = recover_from_disclosed_nonce(&curve, &rebuilt, &k).unwrap();
    assert_eq!(&recovered, keypair.private_key());
}
