//! Error handling for the gostcrypt ecosystem

use alloc::string::ToString;

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::RandomGenerationError {
            context: "I/O operation",
            message: e.to_string(),
        }
    }
}

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Self::RandomGenerationError {
            context: "random source",
            message: e.to_string(),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
