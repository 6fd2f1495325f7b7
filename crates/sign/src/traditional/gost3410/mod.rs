//! GOST R 34.10-2001 / 34.10-2012 private-key operations
//!
//! This module covers what a holder of a private key needs:
//!
//! - key generation and import/export in the raw little-endian wire form
//! - public key derivation Q = d·G
//! - signing of precomputed digests (256- or 512-bit)
//! - VKO GOST R 34.10-2001 key-encryption-key derivation
//!
//! Signatures are produced as `s || r`, each left-padded big-endian to the
//! digest size. Hashing the message and verifying signatures are out of
//! scope.

use gostcrypt_params::traditional::gost3410::{
    GOST3410_DIGEST_SIZE_256, GOST3410_DIGEST_SIZE_512, VKO_KEK_SIZE, VKO_UKM_SIZE,
};

mod encoding;
mod private;
mod public;

pub use private::PrivateKey;
pub use public::PublicKey;

/// Length of the user keying material accepted by VKO
pub const UKM_SIZE: usize = VKO_UKM_SIZE;

/// Length of a derived key-encryption key
pub const KEK_SIZE: usize = VKO_KEK_SIZE;

/// Digest size a key is bound to
///
/// Fixes the raw private-key length, the digest length accepted for
/// signing, and the width of each signature component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DigestSize {
    /// 256-bit digests (GOST R 34.10-2001, 34.10-2012 256-bit)
    Size256,
    /// 512-bit digests (GOST R 34.10-2012 512-bit)
    Size512,
}

impl DigestSize {
    /// Size in bytes
    pub const fn len(self) -> usize {
        match self {
            DigestSize::Size256 => GOST3410_DIGEST_SIZE_256,
            DigestSize::Size512 => GOST3410_DIGEST_SIZE_512,
        }
    }

    /// Look up a digest size by its length in bytes
    pub const fn from_len(len: usize) -> Option<Self> {
        match len {
            GOST3410_DIGEST_SIZE_256 => Some(DigestSize::Size256),
            GOST3410_DIGEST_SIZE_512 => Some(DigestSize::Size512),
            _ => None,
        }
    }

    /// Algorithm name for this digest size
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            DigestSize::Size256 => "GOST R 34.10-2012-256",
            DigestSize::Size512 => "GOST R 34.10-2012-512",
        }
    }
}
