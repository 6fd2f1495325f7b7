//! Constants for traditional cryptographic algorithms

pub mod gost3410;
