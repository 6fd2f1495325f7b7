//! GOST R 34.10 public keys

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use gostcrypt_algorithms::ec::gost::{AffinePoint, Curve, CurveArithmetic};
use gostcrypt_internal::endian::trim_leading_zeros;

use super::encoding::{check_length, decode_le, encode_le};
use super::DigestSize;
use crate::error::Result;

/// A public key Q = d·G bound to a curve and digest size
///
/// The raw form is `x || y`, each coordinate little-endian and padded to the
/// digest size.
pub struct PublicKey<C: CurveArithmetic = Curve> {
    curve: Arc<C>,
    digest_size: DigestSize,
    point: AffinePoint,
}

impl<C: CurveArithmetic> PublicKey<C> {
    /// Wrap a curve point
    ///
    /// The point is not checked against the curve here; curve arithmetic
    /// rejects off-curve points when the key is used.
    pub fn new(curve: Arc<C>, digest_size: DigestSize, point: AffinePoint) -> Self {
        Self {
            curve,
            digest_size,
            point,
        }
    }

    /// Parse the raw `x || y` form
    pub fn from_raw(curve: Arc<C>, digest_size: DigestSize, raw: &[u8]) -> Result<Self> {
        let width = digest_size.len();
        check_length("public key", raw.len(), 2 * width)?;
        let (x, y) = raw.split_at(width);
        let point = AffinePoint::new(decode_le(x)?, decode_le(y)?);
        Ok(Self::new(curve, digest_size, point))
    }

    /// Serialize to the raw `x || y` form, `2 · digest_size` bytes
    ///
    /// Fails with a curve error if a coordinate is wider than the digest
    /// size.
    pub fn raw(&self) -> Result<Vec<u8>> {
        let width = self.digest_size.len();
        let mut out = Vec::with_capacity(2 * width);
        out.extend_from_slice(&encode_le(self.point.x(), width)?);
        out.extend_from_slice(&encode_le(self.point.y(), width)?);
        Ok(out)
    }

    /// The curve point
    pub fn point(&self) -> &AffinePoint {
        &self.point
    }

    /// The curve the key lives on
    pub fn curve(&self) -> &Arc<C> {
        &self.curve
    }

    /// The digest size the key is bound to
    pub fn digest_size(&self) -> DigestSize {
        self.digest_size
    }

    fn same_curve(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.curve, &other.curve) {
            return true;
        }
        let order = self.curve.order().to_be_bytes();
        let other_order = other.curve.order().to_be_bytes();
        trim_leading_zeros(&order) == trim_leading_zeros(&other_order)
            && self.curve.generator() == other.curve.generator()
    }
}

impl<C: CurveArithmetic> Clone for PublicKey<C> {
    fn clone(&self) -> Self {
        Self {
            curve: Arc::clone(&self.curve),
            digest_size: self.digest_size,
            point: self.point.clone(),
        }
    }
}

impl<C: CurveArithmetic> PartialEq for PublicKey<C> {
    fn eq(&self, other: &Self) -> bool {
        self.digest_size == other.digest_size
            && self.point == other.point
            && self.same_curve(other)
    }
}

impl<C: CurveArithmetic> Eq for PublicKey<C> {}

impl<C: CurveArithmetic> fmt::Debug for PublicKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("digest_size", &self.digest_size)
            .field("point", &self.point)
            .finish()
    }
}
