//! End-to-end tests of the GOST R 34.10 private-key operations

use std::sync::Arc;

use gostcrypt_algorithms::ec::gost::{decode_be, AffinePoint, Curve, CurveArithmetic};
use gostcrypt_api::{DigestSigner, KeyAgreement};
use gostcrypt_params::traditional::gost3410::CurveId;
use gostcrypt_sign::{DigestSize, Error, PrivateKey, PublicKey, KEK_SIZE, UKM_SIZE};
use gostcrypt_tests::vectors::{
    wire, KekVector, SignatureVector, KEK_2001, KEK_2001_PUBLISHED, KEK_2001_PUBLISHED_RAW,
    KEK_2001_ZERO_UKM, KEK_2012_512, SIGN_2001, SIGN_2012_512,
};
use gostcrypt_tests::{ExhaustedSource, FixedSource};
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn curve(id: CurveId) -> Arc<Curve> {
    Arc::new(Curve::named(id).unwrap())
}

fn key(curve: &Arc<Curve>, size: DigestSize, d: &str) -> PrivateKey {
    PrivateKey::new(Arc::clone(curve), size, &wire(d, size.len())).unwrap()
}

fn point(x: &str, y: &str) -> AffinePoint {
    AffinePoint::from_be_bytes(&hex::decode(x).unwrap(), &hex::decode(y).unwrap()).unwrap()
}

fn check_signature(v: &SignatureVector) {
    let curve = curve(v.curve);
    let key = key(&curve, v.digest_size, v.d);

    let public = key.public_key().unwrap();
    assert_eq!(public.point(), &point(v.qx, v.qy));

    let mut rng = FixedSource::from_hex(&[v.k]);
    let signature = key.sign_digest(&hex::decode(v.e).unwrap(), &mut rng).unwrap();
    let (s, r) = signature.split_at(v.digest_size.len());
    assert_eq!(hex::encode(s), v.s);
    assert_eq!(hex::encode(r), v.r);
    assert_eq!(rng.remaining(), 0);
}

fn check_kek(v: &KekVector) {
    let curve = curve(v.curve);
    let local = key(&curve, v.digest_size, v.d_local);
    let peer = PublicKey::new(Arc::clone(&curve), v.digest_size, point(v.peer_x, v.peer_y));
    let ukm = hex::decode(v.ukm).unwrap();

    let kek = local.derive_kek(&peer, &ukm).unwrap();
    assert_eq!(hex::encode(*kek), v.kek);

    // the peer derives the same key from its side
    let remote = key(&curve, v.digest_size, v.d_peer);
    assert_eq!(remote.public_key().unwrap(), peer);
    let mirrored = remote.derive_kek(&local.public_key().unwrap(), &ukm).unwrap();
    assert_eq!(*mirrored, *kek);
}

#[test]
fn test_sign_known_answer_2001() {
    check_signature(&SIGN_2001);
}

#[test]
fn test_sign_known_answer_2012_512() {
    check_signature(&SIGN_2012_512);
}

#[test]
fn test_generate_from_known_source() {
    let curve = curve(CurveId::GostR34102001Test);
    let mut rng = FixedSource::new([wire(SIGN_2001.d, 32)]);
    let key = PrivateKey::generate(Arc::clone(&curve), DigestSize::Size256, &mut rng).unwrap();

    let d = decode_be(&hex::decode(SIGN_2001.d).unwrap()).unwrap();
    let expected = curve.scalar_mul(&d, curve.generator()).unwrap();
    assert_eq!(key.public_key().unwrap().point(), &expected);
    assert_eq!(key.raw(), &wire(SIGN_2001.d, 32)[..]);
}

#[test]
fn test_sign_with_exhausted_source() {
    let curve = curve(CurveId::GostR34102001Test);
    let key = key(&curve, DigestSize::Size256, SIGN_2001.d);
    let err = key
        .sign_digest(&hex::decode(SIGN_2001.e).unwrap(), &mut ExhaustedSource)
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_generate_with_exhausted_source() {
    let curve = curve(CurveId::GostR34102001CryptoProA);
    let err = PrivateKey::generate(curve, DigestSize::Size256, &mut ExhaustedSource).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_kek_zero_ukm_known_answer() {
    check_kek(&KEK_2001_ZERO_UKM);
}

#[test]
fn test_kek_known_answer() {
    check_kek(&KEK_2001);
}

#[test]
fn test_kek_published_example() {
    check_kek(&KEK_2001_PUBLISHED);
}

#[test]
fn test_kek_published_example_from_raw_keys() {
    let curve = curve(CurveId::GostR34102001Test);
    let (raw_a, raw_b) = KEK_2001_PUBLISHED_RAW;
    let a = PrivateKey::new(Arc::clone(&curve), DigestSize::Size256, &hex::decode(raw_a).unwrap())
        .unwrap();
    let b = PrivateKey::new(Arc::clone(&curve), DigestSize::Size256, &hex::decode(raw_b).unwrap())
        .unwrap();
    assert_eq!(a.raw(), &wire(KEK_2001_PUBLISHED.d_local, 32)[..]);

    let ukm = hex::decode(KEK_2001_PUBLISHED.ukm).unwrap();
    let kek_a = a.derive_kek(&b.public_key().unwrap(), &ukm).unwrap();
    let kek_b = b.derive_kek(&a.public_key().unwrap(), &ukm).unwrap();
    assert_eq!(hex::encode(*kek_a), KEK_2001_PUBLISHED.kek);
    assert_eq!(*kek_a, *kek_b);
}

#[test]
fn test_kek_known_answer_512() {
    check_kek(&KEK_2012_512);
}

#[test]
fn test_kek_is_deterministic() {
    let curve = curve(CurveId::GostR34102001Test);
    let local = key(&curve, DigestSize::Size256, SIGN_2001.d);
    let peer = PublicKey::new(
        Arc::clone(&curve),
        DigestSize::Size256,
        point(KEK_2001.peer_x, KEK_2001.peer_y),
    );
    let ukm = [0x42u8; UKM_SIZE];
    let a = local.derive_kek(&peer, &ukm).unwrap();
    let b = local.derive_kek(&peer, &ukm).unwrap();
    assert_eq!(*a, *b);
    assert_eq!(a.len(), KEK_SIZE);
}

#[test]
fn test_kek_ukm_lengths() {
    let curve = curve(CurveId::GostR34102001Test);
    let local = key(&curve, DigestSize::Size256, SIGN_2001.d);
    let peer = local.public_key().unwrap();
    for len in [0usize, 7, 9] {
        let err = local.derive_kek(&peer, &vec![1u8; len]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInput {
                context: "UKM",
                expected: UKM_SIZE,
                actual: len
            }
        );
    }
}

#[test]
fn test_digest_lengths() {
    for (id, size, d) in [
        (CurveId::GostR34102001Test, DigestSize::Size256, SIGN_2001.d),
        (CurveId::GostR34102012Test512, DigestSize::Size512, SIGN_2012_512.d),
    ] {
        let curve = curve(id);
        let key = key(&curve, size, d);
        let mut rng = ChaCha20Rng::from_seed([0u8; 32]);
        for len in [size.len() - 1, size.len() + 1] {
            let err = key.sign_digest(&vec![0xabu8; len], &mut rng).unwrap_err();
            assert!(matches!(err, Error::InvalidInput { context: "digest", actual, .. } if actual == len));
        }
    }
}

#[test]
fn test_signatures_use_fresh_nonces() {
    let curve = curve(CurveId::GostR34102001CryptoProA);
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let key = PrivateKey::generate(curve, DigestSize::Size256, &mut rng).unwrap();
    let digest = [0x5au8; 32];

    let first = key
        .sign_digest(&digest, &mut ChaCha20Rng::from_seed([2u8; 32]))
        .unwrap();
    let second = key
        .sign_digest(&digest, &mut ChaCha20Rng::from_seed([3u8; 32]))
        .unwrap();
    assert_ne!(first, second);
    assert_ne!(first[32..], second[32..]);
}

#[test]
fn test_signature_layout() {
    let curve = curve(CurveId::Tc26Gost341012512ParamSetA);
    let mut rng = ChaCha20Rng::from_seed([4u8; 32]);
    let key = PrivateKey::generate(Arc::clone(&curve), DigestSize::Size512, &mut rng).unwrap();
    let signature = key.sign_digest(&[0x17u8; 64], &mut rng).unwrap();
    assert_eq!(signature.len(), 128);

    let (s, r) = signature.split_at(64);
    let order = curve.order();
    let s = decode_be(s).unwrap();
    let r = decode_be(r).unwrap();
    for v in [&s, &r] {
        assert!(!bool::from(v.is_zero()));
        assert!(v.bits() <= order.bits());
    }
}

#[test]
fn test_public_key_raw_round_trip() {
    let curve = curve(CurveId::GostR34102012Test512);
    let key = key(&curve, DigestSize::Size512, SIGN_2012_512.d);
    let public = key.public_key().unwrap();

    let raw = public.raw().unwrap();
    let mut expected = wire(SIGN_2012_512.qx, 64);
    expected.extend(wire(SIGN_2012_512.qy, 64));
    assert_eq!(raw, expected);

    let parsed = PublicKey::from_raw(curve, DigestSize::Size512, &raw).unwrap();
    assert_eq!(parsed, public);
}

#[test]
fn test_keys_share_one_curve() {
    let curve = curve(CurveId::GostR34102001CryptoProB);
    let mut rng = ChaCha20Rng::from_seed([5u8; 32]);
    let a = PrivateKey::generate(Arc::clone(&curve), DigestSize::Size256, &mut rng).unwrap();
    let b = PrivateKey::generate(Arc::clone(&curve), DigestSize::Size256, &mut rng).unwrap();
    assert!(Arc::ptr_eq(a.curve(), b.curve()));
    assert_eq!(Arc::strong_count(&curve), 3);
    assert_ne!(a, b);
}

#[test]
fn test_api_traits() {
    fn sign_with<S: DigestSigner>(signer: &S, digest: &[u8]) -> gostcrypt_api::Result<Vec<u8>> {
        signer.sign_digest(digest, &mut ChaCha20Rng::from_seed([6u8; 32]))
    }

    fn agree<K: KeyAgreement>(
        key: &K,
        peer: &K::PublicKey,
        ukm: &[u8],
    ) -> gostcrypt_api::Result<Vec<u8>> {
        key.derive_kek(peer, ukm)
    }

    let curve = curve(CurveId::GostR34102001Test);
    let local = key(&curve, DigestSize::Size256, KEK_2001.d_local);
    let peer = PublicKey::new(
        Arc::clone(&curve),
        DigestSize::Size256,
        point(KEK_2001.peer_x, KEK_2001.peer_y),
    );

    assert_eq!(local.algorithm(), "GOST R 34.10-2012-256");
    assert_eq!(sign_with(&local, &[1u8; 32]).unwrap().len(), 64);
    assert!(matches!(
        sign_with(&local, &[1u8; 31]),
        Err(gostcrypt_api::Error::InvalidLength { .. })
    ));

    let kek = agree(&local, &peer, &hex::decode(KEK_2001.ukm).unwrap()).unwrap();
    assert_eq!(hex::encode(kek), KEK_2001.kek);
}
