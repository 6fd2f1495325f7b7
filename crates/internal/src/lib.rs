//! Internal utilities for the gostcrypt library
//!
//! Not part of the public API surface; shared by the algorithm and signature
//! crates.

#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;

pub use constant_time::ct_eq;
pub use endian::{pad_left, reversed, trim_leading_zeros};
