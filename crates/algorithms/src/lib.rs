//! Cryptographic primitives for the GOST R 34.10 signature suite
//!
//! This crate provides the building blocks the signature crate consumes
//! through narrow interfaces:
//!
//! - GOST R 34.11-94 with the CryptoPro S-box (RFC 5831, RFC 4357), backed by
//!   the `gost94` crate
//! - Prime-field and elliptic-curve arithmetic for GOST R 34.10 curves
//!
//! # Security Features
//!
//! - Intermediate scalars and point coordinates are zeroized on drop
//! - Constant-time comparison of digests
//! - Constant-time selection in point multiplication
//! - Complete projective addition formulas for point multiplication

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function implementations
pub mod hash;
pub use hash::{GostR3411_94, HashFunction};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{AffinePoint, Curve, CurveArithmetic};

// Type system
pub mod types;
pub use types::{ConstantTimeEq, Digest};
