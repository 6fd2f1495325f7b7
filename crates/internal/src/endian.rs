//! Byte-order utility functions
//!
//! GOST wire formats carry integers least-significant byte first, while the
//! arithmetic layer works on big-endian strings. These helpers convert
//! between the two. Outputs are wrapped in [`Zeroizing`] because they
//! routinely hold secret scalars.

use zeroize::Zeroizing;

/// Return a copy of `bytes` in reverse order
pub fn reversed(bytes: &[u8]) -> Zeroizing<Vec<u8>> {
    let mut out = Zeroizing::new(bytes.to_vec());
    out.reverse();
    out
}

/// Strip leading zero bytes from a big-endian string
pub fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[first..]
}

/// Left-pad a big-endian string with zeros to exactly `width` bytes
///
/// Leading zeros of the input do not count towards its length. Returns
/// `None` when the significant bytes do not fit in `width`.
pub fn pad_left(bytes: &[u8], width: usize) -> Option<Zeroizing<Vec<u8>>> {
    let significant = trim_leading_zeros(bytes);
    if significant.len() > width {
        return None;
    }
    let mut out = Zeroizing::new(vec![0u8; width]);
    out[width - significant.len()..].copy_from_slice(significant);
    Some(out)
}
