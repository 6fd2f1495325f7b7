//! Error types for the signature crate

use alloc::string::{String, ToString};
use core::fmt;

use gostcrypt_algorithms::error::Error as AlgoError;

/// Errors that can occur during GOST R 34.10 key operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The key material is unusable (a zero private key)
    InvalidKey(String),

    /// A caller-supplied buffer has the wrong length
    InvalidInput {
        /// What the buffer is
        context: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Supplied length in bytes
        actual: usize,
    },

    /// The random source failed or could not supply enough bytes
    Io(String),

    /// Curve arithmetic rejected its input, or a value does not fit its
    /// encoding width
    Curve(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
            Error::InvalidInput {
                context,
                expected,
                actual,
            } => write!(
                f,
                "Invalid {} length: expected {}, got {}",
                context, expected, actual
            ),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
            Error::Curve(msg) => write!(f, "Curve error: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<AlgoError> for Error {
    fn from(err: AlgoError) -> Self {
        Error::Curve(err.to_string())
    }
}

impl From<rand::Error> for Error {
    fn from(err: rand::Error) -> Self {
        Error::Io(err.to_string())
    }
}

// Convert to api::Error
impl From<Error> for gostcrypt_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidKey(msg) => gostcrypt_api::Error::InvalidKey {
                context: "GOST R 34.10",
                message: msg,
            },
            Error::InvalidInput {
                context,
                expected,
                actual,
            } => gostcrypt_api::Error::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Io(msg) => gostcrypt_api::Error::RandomGenerationError {
                context: "GOST R 34.10",
                message: msg,
            },
            Error::Curve(msg) => gostcrypt_api::Error::InvalidParameter {
                context: "GOST R 34.10 curve",
                message: msg,
            },
        }
    }
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;
