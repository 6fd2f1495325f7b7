//! Elliptic curve arithmetic for GOST R 34.10
//!
//! Curves are short Weierstrass curves over a prime field with arbitrary
//! coefficients, so arithmetic is carried out on heap-allocated
//! `crypto-bigint` integers sized from the curve parameters. Points are
//! multiplied in projective coordinates with the complete addition formulas
//! of Renes, Costello and Batina, which need no special cases for doubling
//! or the point at infinity.

mod curve;
mod field;
mod point;

pub use curve::{Curve, CurveArithmetic};
pub use field::{decode_be, encode_be, precision_for, with_precision, ModularField};
pub use point::AffinePoint;
