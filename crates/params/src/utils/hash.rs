//! Constants for hash functions

/// Output size of GOST R 34.11-94 in bytes
pub const GOST94_OUTPUT_SIZE: usize = 32;

/// Internal block size of GOST R 34.11-94 in bytes
pub const GOST94_BLOCK_SIZE: usize = 32;
