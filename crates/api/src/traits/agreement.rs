//! Key agreement traits for gostcrypt

use crate::Result;

/// Derivation of a shared key-encryption key from a local secret key and a
/// peer's public key
pub trait KeyAgreement {
    /// Public key type of the peer
    type PublicKey;

    /// Length in bytes of the derived key
    fn kek_len(&self) -> usize;

    /// Derive a key-encryption key bound to the user keying material `ukm`
    ///
    /// The derivation is deterministic: the same keys and `ukm` always give
    /// the same output.
    fn derive_kek(&self, peer: &Self::PublicKey, ukm: &[u8]) -> Result<Vec<u8>>;
}
