//! Constant values for gostcrypt cryptographic operations
//!
//! This crate provides the named curve parameter sets and the size constants
//! shared across the gostcrypt workspace.

#![no_std]

pub mod traditional;
pub mod utils;
