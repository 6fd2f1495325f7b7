//! Size constants for the GOST primitives

pub mod hash;
