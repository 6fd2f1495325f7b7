//! GOST R 34.10 private keys

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crypto_bigint::BoxedUint;
use rand::{CryptoRng, RngCore};
use tracing::{debug, instrument, trace};
use zeroize::{Zeroize, Zeroizing};

use gostcrypt_algorithms::ec::gost::{decode_be, Curve, CurveArithmetic, ModularField};
use gostcrypt_algorithms::hash::{GostR3411_94, HashFunction};
use gostcrypt_api::{DigestSigner, KeyAgreement};
use gostcrypt_internal::constant_time::ct_eq;
use gostcrypt_internal::endian::reversed;
use gostcrypt_params::traditional::gost3410::VKO_POINT_COORDINATE_SIZE;

use super::encoding::{check_length, decode_le, encode_fixed_be};
use super::{DigestSize, PublicKey, KEK_SIZE, UKM_SIZE};
use crate::error::{Error, Result};

/// A GOST R 34.10 private key: a non-zero scalar d bound to a curve and a
/// digest size
///
/// The scalar is not checked against the subgroup order; values at or
/// above q act modulo q in every operation.
pub struct PrivateKey<C: CurveArithmetic = Curve> {
    curve: Arc<C>,
    digest_size: DigestSize,
    secret: BoxedUint,
    raw: Zeroizing<Vec<u8>>,
}

impl<C: CurveArithmetic> PrivateKey<C> {
    /// Import a key from its raw little-endian form of exactly
    /// `digest_size` bytes
    pub fn new(curve: Arc<C>, digest_size: DigestSize, raw: &[u8]) -> Result<Self> {
        check_length("private key", raw.len(), digest_size.len())?;
        let secret = decode_le(raw)?;
        if bool::from(secret.is_zero()) {
            return Err(Error::InvalidKey("private key is zero".into()));
        }
        Ok(Self {
            curve,
            digest_size,
            secret,
            raw: Zeroizing::new(raw.to_vec()),
        })
    }

    /// Generate a key from `digest_size` bytes of the random source
    ///
    /// The bytes are taken as the raw key, so a source that yields all
    /// zeros fails with `InvalidKey`.
    #[instrument(skip_all, err(Debug), fields(digest_size = digest_size.len()))]
    pub fn generate<R: CryptoRng + RngCore>(
        curve: Arc<C>,
        digest_size: DigestSize,
        rng: &mut R,
    ) -> Result<Self> {
        let mut raw = Zeroizing::new(vec![0u8; digest_size.len()]);
        rng.try_fill_bytes(&mut raw)?;
        let key = Self::new(curve, digest_size, &raw)?;
        debug!("generated private key");
        Ok(key)
    }

    /// The raw little-endian form, exactly `digest_size` bytes
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// The curve the key lives on
    pub fn curve(&self) -> &Arc<C> {
        &self.curve
    }

    /// The digest size the key is bound to
    pub fn digest_size(&self) -> DigestSize {
        self.digest_size
    }

    /// Derive the public key Q = d·G
    #[instrument(skip_all, err(Debug))]
    pub fn public_key(&self) -> Result<PublicKey<C>> {
        let point = self.curve.scalar_mul_base(&self.secret)?;
        debug!("derived public key");
        Ok(PublicKey::new(
            Arc::clone(&self.curve),
            self.digest_size,
            point,
        ))
    }

    /// Sign a precomputed digest of exactly `digest_size` bytes
    ///
    /// The digest is read as a big-endian integer. The returned signature
    /// is `s || r`, each big-endian and `digest_size` bytes wide. A fresh
    /// nonce is drawn from `rng` for every attempt; attempts giving a zero
    /// nonce, r or s are discarded.
    #[instrument(skip_all, err(Debug), fields(digest_size = self.digest_size.len()))]
    pub fn sign_digest<R: CryptoRng + RngCore>(
        &self,
        digest: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        let width = self.digest_size.len();
        check_length("digest", digest.len(), width)?;

        let scalars = ModularField::new(self.curve.order())?;
        let mut e = scalars.reduce(&decode_be(digest)?)?;
        if bool::from(e.is_zero()) {
            e = BoxedUint::one_with_precision(scalars.bits_precision());
        }
        let e = scalars.element(&e)?;
        let d = Zeroizing::new(scalars.element(&self.secret)?);

        let mut nonce = Zeroizing::new(vec![0u8; width]);
        let mut attempt = 0u32;
        let (s, r) = loop {
            attempt = attempt.saturating_add(1);
            rng.try_fill_bytes(&mut nonce)?;
            let k = Zeroizing::new(scalars.reduce(&Zeroizing::new(decode_be(&nonce)?))?);
            if bool::from(k.is_zero()) {
                trace!(attempt, "nonce reduced to zero, retrying");
                continue;
            }

            let point = self.curve.scalar_mul_base(&k)?;
            let r = scalars.reduce(point.x())?;
            if bool::from(r.is_zero()) {
                trace!(attempt, "r is zero, retrying");
                continue;
            }

            // s = (d·r + k·e) mod q
            let k_m = Zeroizing::new(scalars.element(&k)?);
            let r_m = scalars.element(&r)?;
            let dr = Zeroizing::new(&*d * &r_m);
            let ke = Zeroizing::new(&*k_m * &e);
            let s = (&*dr + &*ke).retrieve();
            if bool::from(s.is_zero()) {
                trace!(attempt, "s is zero, retrying");
                continue;
            }
            break (s, r);
        };

        let mut signature = Vec::with_capacity(2 * width);
        signature.extend_from_slice(&encode_fixed_be(&s, width)?);
        signature.extend_from_slice(&encode_fixed_be(&r, width)?);
        debug!(attempts = attempt, "signed digest");
        Ok(signature)
    }

    /// VKO GOST R 34.10-2001 key-encryption-key derivation
    ///
    /// Computes u·d·Q_peer with u the big-endian UKM (zero taken as one) and
    /// hashes the little-endian coordinates with GOST R 34.11-94. Both sides
    /// of an exchange derive the same key.
    #[instrument(skip_all, err(Debug))]
    pub fn derive_kek(
        &self,
        peer: &PublicKey<C>,
        ukm: &[u8],
    ) -> Result<Zeroizing<[u8; KEK_SIZE]>> {
        check_length("UKM", ukm.len(), UKM_SIZE)?;

        let shared = self.curve.scalar_mul(&self.secret, peer.point())?;
        let mut u = decode_be(ukm)?;
        if bool::from(u.is_zero()) {
            u = BoxedUint::one_with_precision(u.bits_precision());
        }
        let point = self.curve.scalar_mul(&u, &shared)?;

        let width = VKO_POINT_COORDINATE_SIZE.max(self.curve.coordinate_size());
        let mut material = Zeroizing::new(Vec::with_capacity(2 * width));
        material.extend_from_slice(&reversed(&point.x_bytes(width)?));
        material.extend_from_slice(&reversed(&point.y_bytes(width)?));

        let digest = GostR3411_94::digest(&material)?;
        let mut kek = Zeroizing::new([0u8; KEK_SIZE]);
        kek.copy_from_slice(digest.as_ref());
        debug!("derived key-encryption key");
        Ok(kek)
    }
}

impl<C: CurveArithmetic> Drop for PrivateKey<C> {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

impl<C: CurveArithmetic> Clone for PrivateKey<C> {
    fn clone(&self) -> Self {
        Self {
            curve: Arc::clone(&self.curve),
            digest_size: self.digest_size,
            secret: self.secret.clone(),
            raw: self.raw.clone(),
        }
    }
}

impl<C: CurveArithmetic> PartialEq for PrivateKey<C> {
    fn eq(&self, other: &Self) -> bool {
        self.digest_size == other.digest_size
            && Arc::ptr_eq(&self.curve, &other.curve)
            && ct_eq(&*self.raw, &*other.raw)
    }
}

impl<C: CurveArithmetic> fmt::Debug for PrivateKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("digest_size", &self.digest_size)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl<C: CurveArithmetic> DigestSigner for PrivateKey<C> {
    fn algorithm(&self) -> &'static str {
        self.digest_size.algorithm_name()
    }

    fn digest_len(&self) -> usize {
        self.digest_size.len()
    }

    fn sign_digest<R: CryptoRng + RngCore>(
        &self,
        digest: &[u8],
        rng: &mut R,
    ) -> gostcrypt_api::Result<Vec<u8>> {
        Ok(PrivateKey::sign_digest(self, digest, rng)?)
    }
}

impl<C: CurveArithmetic> KeyAgreement for PrivateKey<C> {
    type PublicKey = PublicKey<C>;

    fn kek_len(&self) -> usize {
        KEK_SIZE
    }

    fn derive_kek(&self, peer: &PublicKey<C>, ukm: &[u8]) -> gostcrypt_api::Result<Vec<u8>> {
        let kek = PrivateKey::derive_kek(self, peer, ukm)?;
        Ok(kek.to_vec())
    }
}
