//! GOST R 34.11-94 hash function
//!
//! Wraps the RustCrypto `gost94` implementation with the CryptoPro
//! parameter set (RFC 4357), the variant VKO GOST R 34.10-2001 hashes its
//! shared point with.

use alloc::string::{String, ToString};

use gost94::{Digest as _, Gost94CryptoPro};

use crate::error::Result;
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;
use gostcrypt_params::utils::hash::{GOST94_BLOCK_SIZE, GOST94_OUTPUT_SIZE};


/// Marker type for GOST R 34.11-94
pub enum GostR3411_94Algorithm {}

impl HashAlgorithm for GostR3411_94Algorithm {
    const OUTPUT_SIZE: usize = GOST94_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = GOST94_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "GOST R 34.11-94";
}

/// GOST R 34.11-94 hash function state (CryptoPro S-box)
#[derive(Clone, Default)]
pub struct GostR3411_94 {
    inner: Gost94CryptoPro,
}

impl GostR3411_94 {
    /// Creates a new hasher with a zero starting hash value
    pub fn new() -> Self {
        Self::default()
    }
}

impl HashFunction for GostR3411_94 {
    type Algorithm = GostR3411_94Algorithm;
    type Output = Digest<GOST94_OUTPUT_SIZE>;

    fn new() -> Self {
        GostR3411_94::new()
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.inner.update(data);
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let out = self.inner.finalize_reset();
        Digest::from_slice(&out)
    }

    fn name() -> String {
        "GOST R 34.11-94".to_string()
    }
}
