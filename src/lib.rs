//! # gostcrypt
//!
//! GOST R 34.10 private-key operations: key generation, public-key
//! derivation, digest signing and VKO key agreement (RFC 4357).
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gostcrypt = "0.3"
//! ```
//!
//! ## Features
//!
//! - `sign` (default): the GOST R 34.10 private-key core
//! - `algorithms`: curve arithmetic and the GOST R 34.11-94 seam
//! - `serde`: serde support for parameter types
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`gostcrypt-api`]: public error type and traits
//! - [`gostcrypt-internal`]: byte-order and constant-time helpers
//! - [`gostcrypt-params`]: curve parameter sets and sizes
//! - [`gostcrypt-algorithms`]: curve arithmetic and hash
//! - [`gostcrypt-sign`]: private and public keys

// Core re-exports (always available)
pub use gostcrypt_api as api;
pub use gostcrypt_internal as internal;
pub use gostcrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use gostcrypt_algorithms as algorithms;

#[cfg(feature = "sign")]
pub use gostcrypt_sign as sign;

/// Common imports for gostcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{DigestSigner, KeyAgreement};

    pub use crate::params::traditional::gost3410::CurveId;

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::ec::gost::{Curve, CurveArithmetic};

    #[cfg(feature = "sign")]
    pub use crate::sign::{DigestSize, PrivateKey, PublicKey};
}
