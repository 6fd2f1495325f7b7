//! Elliptic curve primitives

pub mod gost;

pub use gost::{AffinePoint, Curve, CurveArithmetic};
