//! Digital signature traits for gostcrypt
//!
//! Signing operates on a precomputed message digest; hashing the message is
//! the caller's business. The design does not require mutable access to the
//! secret key.

use crate::Result;
use rand::{CryptoRng, RngCore};

/// Signing of precomputed digests with a randomized nonce
///
/// # Security Requirements
///
/// Implementations must draw every nonce from the provided RNG and must never
/// reuse a nonce across signatures.
pub trait DigestSigner {
    /// Returns the name of the signature algorithm
    fn algorithm(&self) -> &'static str;

    /// Length in bytes of the digests accepted by [`DigestSigner::sign_digest`]
    fn digest_len(&self) -> usize;

    /// Sign a digest of exactly [`DigestSigner::digest_len`] bytes
    fn sign_digest<R: CryptoRng + RngCore>(&self, digest: &[u8], rng: &mut R) -> Result<Vec<u8>>;
}
