//! Type-safe wrappers for cryptographic types

pub mod digest;

pub use digest::Digest;

/// Trait for cryptographic types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}
