//! Short Weierstrass curves y² = x³ + a·x + b over a prime field

use alloc::borrow::Cow;
use core::fmt;
use core::ops::{Add, Mul};

use crypto_bigint::modular::BoxedMontyForm;
use crypto_bigint::BoxedUint;
use subtle::ConstantTimeEq;

use super::field::{decode_be, ModularField};
use super::point::{AffinePoint, ProjectivePoint};
use crate::error::{validate, Error, Result};
use gostcrypt_params::traditional::gost3410::CurveId;

/// Curve arithmetic needed by GOST R 34.10 key operations
pub trait CurveArithmetic {
    /// Order q of the subgroup generated by the base point
    fn order(&self) -> &BoxedUint;

    /// The base point
    fn generator(&self) -> &AffinePoint;

    /// Width of a field element in bytes
    fn coordinate_size(&self) -> usize;

    /// Compute `scalar · point` in affine coordinates
    ///
    /// Fails with a parameter error for a zero scalar or a point that is
    /// not on the curve, and with a processing error when the result is
    /// the point at infinity.
    fn scalar_mul(&self, scalar: &BoxedUint, point: &AffinePoint) -> Result<AffinePoint>;

    /// Compute `scalar · G`
    fn scalar_mul_base(&self, scalar: &BoxedUint) -> Result<AffinePoint> {
        self.scalar_mul(scalar, self.generator())
    }
}

/// A GOST R 34.10 elliptic curve with its base point and subgroup order
#[derive(Clone)]
pub struct Curve {
    name: Cow<'static, str>,
    field: ModularField,
    a: BoxedMontyForm,
    b: BoxedMontyForm,
    b3: BoxedMontyForm,
    order: BoxedUint,
    generator: AffinePoint,
}

impl Curve {
    /// Build and validate a curve
    ///
    /// `p` and `q` must be odd, and the base point must satisfy the curve
    /// equation with coordinates reduced modulo `p`.
    pub fn new<N: Into<Cow<'static, str>>>(
        name: N,
        p: &BoxedUint,
        a: &BoxedUint,
        b: &BoxedUint,
        q: &BoxedUint,
        generator: AffinePoint,
    ) -> Result<Self> {
        let field = ModularField::new(p)?;
        validate::parameter(bool::from(q.bit(0)), "q", "subgroup order must be odd")?;
        validate::parameter(q.bits() > 1, "q", "subgroup order must be greater than one")?;

        let a = field.element(a)?;
        let b = field.element(b)?;
        let b3 = (&b).add(&b).add(&b);
        let curve = Self {
            name: name.into(),
            generator: generator.clone(),
            order: q.clone(),
            field,
            a,
            b,
            b3,
        };
        validate::parameter(
            curve.is_on_curve(&generator),
            "generator",
            "base point is not on the curve",
        )?;
        Ok(curve)
    }

    /// Build one of the shipped parameter sets
    pub fn named(id: CurveId) -> Result<Self> {
        let params = id.params();
        let generator = AffinePoint::from_be_bytes(params.x, params.y)?;
        Self::new(
            params.name,
            &decode_be(params.p)?,
            &decode_be(params.a)?,
            &decode_be(params.b)?,
            &decode_be(params.q)?,
            generator,
        )
    }

    /// Registered name of the curve
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field modulus p
    pub fn prime(&self) -> &BoxedUint {
        self.field.modulus()
    }

    /// Check that both coordinates are canonical and satisfy the curve
    /// equation
    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        if !self.field.contains(point.x()) || !self.field.contains(point.y()) {
            return false;
        }
        let (x, y) = match (self.field.element(point.x()), self.field.element(point.y())) {
            (Ok(x), Ok(y)) => (x, y),
            _ => return false,
        };

        let y_squared = (&y).mul(&y);
        let x_cubed = (&x).mul(&x).mul(&x);
        let ax = (&x).mul(&self.a);
        let rhs = (&x_cubed).add(&ax).add(&self.b);
        bool::from(y_squared.retrieve().ct_eq(&rhs.retrieve()))
    }

    fn to_projective(&self, point: &AffinePoint) -> Result<ProjectivePoint> {
        Ok(ProjectivePoint {
            x: self.field.element(point.x())?,
            y: self.field.element(point.y())?,
            z: self.field.one(),
        })
    }

    fn to_affine(&self, point: &ProjectivePoint) -> Result<AffinePoint> {
        let inverse = point.z.invert().into_option().ok_or(Error::Processing {
            operation: "scalar multiplication",
            details: "result is the point at infinity",
        })?;
        let x = (&point.x).mul(&inverse);
        let y = (&point.y).mul(&inverse);
        Ok(AffinePoint::new(x.retrieve(), y.retrieve()))
    }

    fn identity(&self) -> ProjectivePoint {
        ProjectivePoint {
            x: self.field.zero(),
            y: self.field.one(),
            z: self.field.zero(),
        }
    }

    fn double(&self, point: &ProjectivePoint) -> ProjectivePoint {
        // Renes/Costello/Batina 2015 (https://eprint.iacr.org/2015/1060), Algorithm 3
        let (a, b3) = (&self.a, &self.b3);

        let mut t0 = (&point.x).mul(&point.x);
        let t1 = (&point.y).mul(&point.y);
        let mut t2 = (&point.z).mul(&point.z);
        let mut t3 = (&point.x).mul(&point.y);
        t3 = (&t3).add(&t3);
        let mut z3 = (&point.x).mul(&point.z);
        z3 = (&z3).add(&z3);
        let mut x3 = a.mul(&z3);
        let mut y3 = b3.mul(&t2);
        y3 = (&x3).add(&y3);
        x3 = (&t1).sub(&y3);
        y3 = (&t1).add(&y3);
        y3 = (&x3).mul(&y3);
        x3 = (&t3).mul(&x3);
        z3 = b3.mul(&z3);
        t2 = a.mul(&t2);
        t3 = (&t0).sub(&t2);
        t3 = a.mul(&t3);
        t3 = (&t3).add(&z3);
        z3 = (&t0).add(&t0);
        t0 = (&z3).add(&t0);
        t0 = (&t0).add(&t2);
        t0 = (&t0).mul(&t3);
        y3 = (&y3).add(&t0);
        t2 = (&point.y).mul(&point.z);
        t2 = (&t2).add(&t2);
        t0 = (&t2).mul(&t3);
        x3 = (&x3).sub(&t0);
        z3 = (&t2).mul(&t1);
        z3 = (&z3).add(&z3);
        z3 = (&z3).add(&z3);
        ProjectivePoint { x: x3, y: y3, z: z3 }
    }

    fn add(&self, lhs: &ProjectivePoint, rhs: &ProjectivePoint) -> ProjectivePoint {
        // Renes/Costello/Batina 2015 (https://eprint.iacr.org/2015/1060), Algorithm 1
        let (a, b3) = (&self.a, &self.b3);

        let mut t0 = (&lhs.x).mul(&rhs.x);
        let mut t1 = (&lhs.y).mul(&rhs.y);
        let mut t2 = (&lhs.z).mul(&rhs.z);
        let mut t3 = (&lhs.x).add(&lhs.y);
        let mut t4 = (&rhs.x).add(&rhs.y);
        t3 = (&t3).mul(&t4);
        t4 = (&t0).add(&t1);
        t3 = (&t3).sub(&t4);
        t4 = (&lhs.x).add(&lhs.z);
        let mut t5 = (&rhs.x).add(&rhs.z);
        t4 = (&t4).mul(&t5);
        t5 = (&t0).add(&t2);
        t4 = (&t4).sub(&t5);
        t5 = (&lhs.y).add(&lhs.z);
        let mut x3 = (&rhs.y).add(&rhs.z);
        t5 = (&t5).mul(&x3);
        x3 = (&t1).add(&t2);
        t5 = (&t5).sub(&x3);
        let mut z3 = a.mul(&t4);
        x3 = b3.mul(&t2);
        z3 = (&x3).add(&z3);
        x3 = (&t1).sub(&z3);
        z3 = (&t1).add(&z3);
        let mut y3 = (&x3).mul(&z3);
        t1 = (&t0).add(&t0);
        t1 = (&t1).add(&t0);
        t2 = a.mul(&t2);
        t4 = b3.mul(&t4);
        t1 = (&t1).add(&t2);
        t2 = (&t0).sub(&t2);
        t2 = a.mul(&t2);
        t4 = (&t4).add(&t2);
        t0 = (&t1).mul(&t4);
        y3 = (&y3).add(&t0);
        t0 = (&t5).mul(&t4);
        x3 = (&t3).mul(&x3);
        x3 = (&x3).sub(&t0);
        t0 = (&t3).mul(&t1);
        z3 = (&t5).mul(&z3);
        z3 = (&z3).add(&t0);
        ProjectivePoint { x: x3, y: y3, z: z3 }
    }

    /// Double-and-add over every bit of the scalar's precision
    fn multiply(&self, scalar: &BoxedUint, point: &ProjectivePoint) -> ProjectivePoint {
        let mut result = self.identity();
        let mut double_me = point.clone();
        for i in 0..scalar.bits_precision() {
            let sum = self.add(&result, &double_me);
            result = ProjectivePoint::ct_select(&result, &sum, scalar.bit(i));
            double_me = self.double(&double_me);
        }
        result
    }
}

impl CurveArithmetic for Curve {
    fn order(&self) -> &BoxedUint {
        &self.order
    }

    fn generator(&self) -> &AffinePoint {
        &self.generator
    }

    fn coordinate_size(&self) -> usize {
        self.field.byte_len()
    }

    fn scalar_mul(&self, scalar: &BoxedUint, point: &AffinePoint) -> Result<AffinePoint> {
        validate::parameter(!bool::from(scalar.is_zero()), "scalar", "must be non-zero")?;
        validate::parameter(self.is_on_curve(point), "point", "not on the curve")?;

        let projective = self.to_projective(point)?;
        let product = self.multiply(scalar, &projective);
        self.to_affine(&product)
    }
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("name", &self.name)
            .field("coordinate_size", &self.coordinate_size())
            .field("generator", &self.generator)
            .finish()
    }
}
