//! Public API traits and types for the gostcrypt library
//!
//! This crate provides the public API surface for the gostcrypt ecosystem:
//! the crate-agnostic error type and the traits implemented by key types.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{DigestSigner, KeyAgreement};

// Re-export trait modules for direct access
pub use traits::{agreement, signature};
