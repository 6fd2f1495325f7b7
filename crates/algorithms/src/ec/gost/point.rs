//! Curve points

use alloc::vec::Vec;
use core::fmt;

use crypto_bigint::modular::BoxedMontyForm;
use crypto_bigint::{BoxedUint, ConstantTimeSelect};
use subtle::Choice;
use zeroize::{Zeroizing, ZeroizeOnDrop};

use super::field::{decode_be, encode_be};
use crate::error::Result;
use gostcrypt_internal::endian::trim_leading_zeros;

/// A point in affine coordinates
///
/// Equality compares coordinate values, independent of the precision of
/// the underlying integers.
#[derive(Clone, ZeroizeOnDrop)]
pub struct AffinePoint {
    x: BoxedUint,
    y: BoxedUint,
}

impl AffinePoint {
    /// Build a point from its coordinates
    pub fn new(x: BoxedUint, y: BoxedUint) -> Self {
        Self { x, y }
    }

    /// Build a point from big-endian coordinate bytes
    pub fn from_be_bytes(x: &[u8], y: &[u8]) -> Result<Self> {
        Ok(Self {
            x: decode_be(x)?,
            y: decode_be(y)?,
        })
    }

    /// The x-coordinate
    pub fn x(&self) -> &BoxedUint {
        &self.x
    }

    /// The y-coordinate
    pub fn y(&self) -> &BoxedUint {
        &self.y
    }

    /// x-coordinate as exactly `width` big-endian bytes
    pub fn x_bytes(&self, width: usize) -> Result<Zeroizing<Vec<u8>>> {
        encode_be(&self.x, width)
    }

    /// y-coordinate as exactly `width` big-endian bytes
    pub fn y_bytes(&self, width: usize) -> Result<Zeroizing<Vec<u8>>> {
        encode_be(&self.y, width)
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        let (ax, ay) = (self.x.to_be_bytes(), self.y.to_be_bytes());
        let (bx, by) = (other.x.to_be_bytes(), other.y.to_be_bytes());
        trim_leading_zeros(&ax) == trim_leading_zeros(&bx)
            && trim_leading_zeros(&ay) == trim_leading_zeros(&by)
    }
}

impl Eq for AffinePoint {}

impl fmt::Debug for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.x.to_be_bytes();
        let y = self.y.to_be_bytes();
        f.debug_struct("AffinePoint")
            .field("x", &hex::encode(trim_leading_zeros(&x)))
            .field("y", &hex::encode(trim_leading_zeros(&y)))
            .finish()
    }
}

/// A point in projective coordinates in Montgomery form
#[derive(Clone)]
pub(crate) struct ProjectivePoint {
    pub(crate) x: BoxedMontyForm,
    pub(crate) y: BoxedMontyForm,
    pub(crate) z: BoxedMontyForm,
}

impl ProjectivePoint {
    /// `a` when `choice` is unset, `b` when it is set, without branching
    /// on `choice`
    pub(crate) fn ct_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let select = |a: &BoxedMontyForm, b: &BoxedMontyForm| {
            BoxedMontyForm::from_montgomery(
                BoxedUint::ct_select(a.as_montgomery(), b.as_montgomery(), choice),
                a.params().clone(),
            )
        };
        Self {
            x: select(&a.x, &b.x),
            y: select(&a.y, &b.y),
            z: select(&a.z, &b.z),
        }
    }
}
