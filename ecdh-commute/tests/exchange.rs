//! Exchange tests.

use ecdh_commute::{
    BigUint, CurveArithmetic, EcPoint, NistP256Arithmetic, exchange, random_scalar,
};
use hex_literal::hex;
use p256::{FieldBytes, NonZeroScalar, PublicKey, elliptic_curve::ecdh::diffie_hellman};
use proptest::prelude::*;
use rand_chacha::ChaCha20Rng;
use rand_core::{OsRng, SeedableRng};

/// `(12345 · 67890)·G`
const SHARED_POINT_X: [u8; 32] =
    hex!("3e0c4fe85c5ec06d7507496bb70f1aa7012f383901ba592ab5254eb475f14b7b");
const SHARED_POINT_Y: [u8; 32] =
    hex!("9d8863e232c23858d900b79285f2f7756f6e486797e6d66e2c620c33825eecdc");

fn non_zero_scalar(k: &BigUint) -> NonZeroScalar {
    let bytes = k.to_bytes_be();
    let mut repr = FieldBytes::default();
    repr[32 - bytes.len()..].copy_from_slice(&bytes);
    NonZeroScalar::from_repr(repr).unwrap()
}

#[test]
fn small_scalars_commute() {
    let curve = NistP256Arithmetic::new();

    for (k, d) in [(1u32, 1u32), (2, 3), (3, 2), (0, 7), (0, 0)] {
        let transcript = exchange::run(&curve, &BigUint::from(k), &BigUint::from(d)).unwrap();
        assert!(transcript.is_commutative(), "k={k}, d={d}");
    }
}

#[test]
fn zero_scalar_degenerates_to_identity() {
    let curve = NistP256Arithmetic::new();
    let transcript = exchange::run(&curve, &BigUint::from(0u32), &BigUint::from(7u32)).unwrap();

    assert!(transcript.h2().is_identity());
    assert!(transcript.h4().is_identity());
    assert!(curve.is_on_curve(transcript.h1()));
}

#[test]
fn fixed_scalars_are_reproducible() {
    let curve = NistP256Arithmetic::new();
    let expected = EcPoint::new(
        BigUint::from_bytes_be(&SHARED_POINT_X),
        BigUint::from_bytes_be(&SHARED_POINT_Y),
    );

    for _ in 0..3 {
        let transcript =
            exchange::run(&curve, &BigUint::from(12345u32), &BigUint::from(67890u32)).unwrap();

        assert_eq!(transcript.k(), &BigUint::from(12345u32));
        assert_eq!(transcript.d(), &BigUint::from(67890u32));
        assert_eq!(transcript.h2(), &expected);
        assert_eq!(transcript.h4(), &expected);
        assert!(transcript.is_commutative());
    }
}

#[test]
fn random_scalars_commute() {
    let curve = NistP256Arithmetic::new();
    let transcript = exchange::run_random(&curve, 256, &mut OsRng).unwrap();

    assert!(transcript.k().bits() <= 256);
    assert!(transcript.d().bits() <= 256);
    assert!(transcript.is_commutative());
}

#[test]
fn run_random_rejects_partial_bytes() {
    let curve = NistP256Arithmetic::new();
    assert!(exchange::run_random(&curve, 100, &mut OsRng).is_err());
}

#[test]
fn shared_point_matches_p256_ecdh() {
    let curve = NistP256Arithmetic::new();
    let k = BigUint::from(12345u32);
    let d = BigUint::from(67890u32);
    let transcript = exchange::run(&curve, &k, &d).unwrap();

    let d_public = PublicKey::from_secret_scalar(&non_zero_scalar(&d));
    let shared = diffie_hellman(non_zero_scalar(&k), d_public.as_affine());

    assert_eq!(
        &BigUint::from_bytes_be(shared.raw_secret_bytes()),
        transcript.h2().x()
    );
}

proptest! {
    #[test]
    fn scalar_in_range(bytes in 0usize..=64, seed in any::<u64>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let bits = bytes * 8;
        let v = random_scalar(bits, &mut rng).unwrap();

        prop_assert!(v < (BigUint::from(1u32) << bits));
    }

    #[test]
    fn seeded_exchange_commutes(seed in any::<u64>()) {
        let curve = NistP256Arithmetic::new();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let transcript = exchange::run_random(&curve, 256, &mut rng).unwrap();

        prop_assert!(transcript.is_commutative());
    }
}
