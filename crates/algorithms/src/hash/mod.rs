//! Hash function implementations

use alloc::string::String;

use crate::error::Result;

pub mod gost94;

pub use gost94::GostR3411_94;

/// Marker trait for hash algorithms with compile-time properties
pub trait HashAlgorithm {
    /// Output size in bytes
    const OUTPUT_SIZE: usize;

    /// Internal block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm identifier
    const ALGORITHM_ID: &'static str;
}

/// Trait for cryptographic hash functions
pub trait HashFunction: Sized {
    /// The algorithm this hash function implements
    type Algorithm: HashAlgorithm;

    /// Digest type produced by [`HashFunction::finalize`]
    type Output: AsRef<[u8]> + Clone;

    /// Creates a new instance of the hash function
    fn new() -> Self;

    /// Updates the hash function state with new data
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Finalizes the hash computation and returns the digest
    ///
    /// The state is reset afterwards and can be reused for a new message.
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Returns the output size of the hash function in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Returns the block size of the hash function in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Convenience method to hash data in a single call
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }

    /// Returns the name of the hash function
    fn name() -> String;
}
