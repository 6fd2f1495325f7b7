//! GOST R 34.10 private-key operations
//!
//! Key generation, public-key derivation, digest signing and VKO
//! key-encryption-key derivation over the GOST R 34.10-2001 and
//! GOST R 34.10-2012 curves.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use gostcrypt_algorithms::ec::gost::Curve;
//! use gostcrypt_params::traditional::gost3410::CurveId;
//! use gostcrypt_sign::{DigestSize, PrivateKey};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let curve = Arc::new(Curve::named(CurveId::GostR34102001CryptoProA)?);
//! let key = PrivateKey::generate(curve, DigestSize::Size256, &mut rand::rngs::OsRng)?;
//! let signature = key.sign_digest(&[0x5a; 32], &mut rand::rngs::OsRng)?;
//! assert_eq!(signature.len(), 64);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod traditional;

pub use error::{Error, Result};
pub use traditional::gost3410::{DigestSize, PrivateKey, PublicKey, KEK_SIZE, UKM_SIZE};
