//! Traits implemented by gostcrypt key types

pub mod agreement;
pub mod signature;

pub use agreement::KeyAgreement;
pub use signature::DigestSigner;
