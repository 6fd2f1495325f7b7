//! Wire encodings of GOST R 34.10 keys
//!
//! Raw private keys and public-key coordinates travel least-significant
//! byte first, while signatures are plain big-endian `s || r`.

use alloc::vec::Vec;

use crypto_bigint::BoxedUint;
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use gostcrypt_algorithms::ec::gost::{decode_be, encode_be};
use gostcrypt_internal::endian::reversed;

/// Fail with `InvalidInput` unless `actual == expected`
pub(crate) fn check_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidInput {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Decode a little-endian wire integer
pub(crate) fn decode_le(raw: &[u8]) -> Result<BoxedUint> {
    let be = reversed(raw);
    Ok(decode_be(&be)?)
}

/// Encode an integer as exactly `width` little-endian wire bytes
pub(crate) fn encode_le(value: &BoxedUint, width: usize) -> Result<Zeroizing<Vec<u8>>> {
    let mut out = encode_be(value, width)?;
    out.reverse();
    Ok(out)
}

/// Big-endian encoding of exactly `width` bytes
pub(crate) fn encode_fixed_be(value: &BoxedUint, width: usize) -> Result<Zeroizing<Vec<u8>>> {
    Ok(encode_be(value, width)?)
}
