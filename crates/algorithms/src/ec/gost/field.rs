//! Prime-field arithmetic on top of `crypto-bigint`
//!
//! Values are `BoxedUint`s whose precision is a multiple of 64 bits. Values
//! of different precision are never compared directly: they are reduced or
//! re-encoded into a common precision first.

use alloc::vec::Vec;
use core::fmt;

use crypto_bigint::modular::{BoxedMontyForm, BoxedMontyParams};
use crypto_bigint::BoxedUint;
use zeroize::Zeroizing;

use crate::error::{validate, Error, Result};
use gostcrypt_internal::endian::{pad_left, trim_leading_zeros};

const LIMB_BITS: usize = 64;

/// Precision in bits able to hold `len` big-endian bytes
pub fn precision_for(len: usize) -> Result<u32> {
    let bits = len
        .checked_mul(8)
        .map(|b| b.div_ceil(LIMB_BITS).max(1) * LIMB_BITS)
        .ok_or(Error::param("length", "integer too large"))?;
    u32::try_from(bits).map_err(|_| Error::param("length", "integer too large"))
}

fn from_be_with_precision(bytes: &[u8], bits: u32) -> Result<BoxedUint> {
    let significant = trim_leading_zeros(bytes);
    if significant.is_empty() {
        return Ok(BoxedUint::zero_with_precision(bits));
    }
    BoxedUint::from_be_slice(significant, bits)
        .map_err(|_| Error::param("value", "does not fit the requested precision"))
}

/// Interpret big-endian bytes as an unsigned integer
pub fn decode_be(bytes: &[u8]) -> Result<BoxedUint> {
    from_be_with_precision(bytes, precision_for(bytes.len())?)
}

/// Encode an integer as exactly `width` big-endian bytes, zero-padded on
/// the left
///
/// Fails with a length error when the value needs more than `width` bytes.
pub fn encode_be(value: &BoxedUint, width: usize) -> Result<Zeroizing<Vec<u8>>> {
    let full = Zeroizing::new(value.to_be_bytes());
    let significant = trim_leading_zeros(&full);
    pad_left(significant, width).ok_or(Error::Length {
        context: "big-endian encoding",
        expected: width,
        actual: significant.len(),
    })
}

/// Re-encode `value` at `bits` precision
pub fn with_precision(value: &BoxedUint, bits: u32) -> Result<BoxedUint> {
    if value.bits_precision() == bits {
        return Ok(value.clone());
    }
    let full = Zeroizing::new(value.to_be_bytes());
    from_be_with_precision(&full, bits)
}

/// Arithmetic modulo an odd modulus in Montgomery form
#[derive(Clone)]
pub struct ModularField {
    modulus: BoxedUint,
    params: BoxedMontyParams,
}

impl ModularField {
    /// Set up Montgomery parameters for an odd modulus greater than one
    pub fn new(modulus: &BoxedUint) -> Result<Self> {
        let modulus = with_precision(modulus, precision_for(modulus.bits().div_ceil(8) as usize)?)?;
        validate::parameter(modulus.bits() > 1, "modulus", "must be greater than one")?;
        let odd = modulus
            .to_odd()
            .into_option()
            .ok_or(Error::param("modulus", "must be odd"))?;
        Ok(Self {
            params: BoxedMontyParams::new(odd),
            modulus,
        })
    }

    /// The modulus
    pub fn modulus(&self) -> &BoxedUint {
        &self.modulus
    }

    /// Precision of reduced values in bits
    pub fn bits_precision(&self) -> u32 {
        self.modulus.bits_precision()
    }

    /// Width of the modulus in bytes
    pub fn byte_len(&self) -> usize {
        self.modulus.bits().div_ceil(8) as usize
    }

    /// Reduce an integer of any precision into `[0, modulus)`
    pub fn reduce(&self, value: &BoxedUint) -> Result<BoxedUint> {
        let bits = self.bits_precision();
        if value.bits_precision() <= bits {
            let value = with_precision(value, bits)?;
            return Ok(BoxedMontyForm::new(value, self.params.clone()).retrieve());
        }

        // Montgomery parameters at the wider precision of the input
        let wide_bits = value.bits_precision();
        let wide_modulus = with_precision(&self.modulus, wide_bits)?;
        let odd = wide_modulus
            .to_odd()
            .into_option()
            .ok_or(Error::param("modulus", "must be odd"))?;
        let reduced = BoxedMontyForm::new(value.clone(), BoxedMontyParams::new(odd)).retrieve();
        with_precision(&reduced, bits)
    }

    /// Map an integer into Montgomery form, reducing it first
    pub fn element(&self, value: &BoxedUint) -> Result<BoxedMontyForm> {
        Ok(BoxedMontyForm::new(self.reduce(value)?, self.params.clone()))
    }

    /// Additive identity
    pub fn zero(&self) -> BoxedMontyForm {
        BoxedMontyForm::zero(self.params.clone())
    }

    /// Multiplicative identity
    pub fn one(&self) -> BoxedMontyForm {
        BoxedMontyForm::one(self.params.clone())
    }

    /// Whether `value` is already a canonical residue
    pub fn contains(&self, value: &BoxedUint) -> bool {
        let bits = self.bits_precision();
        match with_precision(value, bits) {
            Ok(value) => value < self.modulus,
            Err(_) => false,
        }
    }
}

impl fmt::Debug for ModularField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModularField")
            .field("bits", &self.modulus.bits())
            .finish()
    }
}
