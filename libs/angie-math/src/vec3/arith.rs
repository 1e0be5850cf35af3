//! In-place arithmetic and the `std::ops` operator impls for [`Vec3`].
//!
//! Every operation has a scalar form (broadcast), a vector form
//! (component-wise) and an [`Operand`] form that picks between the two by
//! the operand's variant.

use super::Vec3;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// =============================================================================
// OPERAND
// =============================================================================

/// Right-hand side of an in-place arithmetic operation.
///
/// The variant alone decides between broadcasting and component-wise
/// application, so a vector with a zero `x` is still treated as a vector.
///
/// ```rust
/// use angie_math::{Operand, Vec3};
///
/// let mut v = Vec3::new(1.0, 1.0, 1.0);
/// v.add_operand(Vec3::new(0.0, 2.0, 3.0));
/// assert_eq!(v, Vec3::new(1.0, 3.0, 4.0));
///
/// v.add_operand(1.0);
/// assert_eq!(v, Vec3::new(2.0, 4.0, 5.0));
/// assert_eq!(Operand::from(2.0), Operand::Scalar(2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// Applied uniformly to all three components.
    Scalar(f64),
    /// Applied component-wise.
    Vector(Vec3),
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<Vec3> for Operand {
    fn from(value: Vec3) -> Self {
        Operand::Vector(value)
    }
}

impl From<&Vec3> for Operand {
    fn from(value: &Vec3) -> Self {
        Operand::Vector(*value)
    }
}

/// Arithmetic operation selector for [`Vec3::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
}

impl ArithOp {
    #[inline]
    fn eval(self, a: f64, b: f64) -> f64 {
        match self {
            ArithOp::Add => a + b,
            ArithOp::Sub => a - b,
            ArithOp::Mul => a * b,
            ArithOp::Div => a / b,
        }
    }
}

// =============================================================================
// IN-PLACE OPERATIONS
// =============================================================================

impl Vec3 {
    /// Applies `op` with `rhs` to this vector in place.
    ///
    /// ```rust
    /// use angie_math::{ArithOp, Vec3};
    /// let mut v = Vec3::new(2.0, 4.0, 8.0);
    /// v.apply(ArithOp::Div, 2.0).apply(ArithOp::Sub, Vec3::UNIT_Z);
    /// assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn apply(&mut self, op: ArithOp, rhs: impl Into<Operand>) -> &mut Self {
        let rhs = match rhs.into() {
            Operand::Scalar(s) => Vec3::splat(s),
            Operand::Vector(v) => v,
        };
        self.x = op.eval(self.x, rhs.x);
        self.y = op.eval(self.y, rhs.y);
        self.z = op.eval(self.z, rhs.z);
        self
    }

    /// Adds a scalar or a vector.
    pub fn add_operand(&mut self, rhs: impl Into<Operand>) -> &mut Self {
        self.apply(ArithOp::Add, rhs)
    }

    /// Adds `s` to every component.
    pub fn add_scalar(&mut self, s: f64) -> &mut Self {
        self.apply(ArithOp::Add, s)
    }

    /// Adds `v` component-wise.
    pub fn add_vector(&mut self, v: &Vec3) -> &mut Self {
        self.apply(ArithOp::Add, v)
    }

    /// Subtracts a scalar or a vector.
    pub fn sub_operand(&mut self, rhs: impl Into<Operand>) -> &mut Self {
        self.apply(ArithOp::Sub, rhs)
    }

    /// Subtracts `s` from every component.
    pub fn sub_scalar(&mut self, s: f64) -> &mut Self {
        self.apply(ArithOp::Sub, s)
    }

    /// Subtracts `v` component-wise.
    pub fn sub_vector(&mut self, v: &Vec3) -> &mut Self {
        self.apply(ArithOp::Sub, v)
    }

    /// Multiplies by a scalar or a vector.
    pub fn mul_operand(&mut self, rhs: impl Into<Operand>) -> &mut Self {
        self.apply(ArithOp::Mul, rhs)
    }

    /// Multiplies every component by `s`.
    pub fn mul_scalar(&mut self, s: f64) -> &mut Self {
        self.apply(ArithOp::Mul, s)
    }

    /// Multiplies by `v` component-wise.
    pub fn mul_vector(&mut self, v: &Vec3) -> &mut Self {
        self.apply(ArithOp::Mul, v)
    }

    /// Divides by a scalar or a vector.
    pub fn div_operand(&mut self, rhs: impl Into<Operand>) -> &mut Self {
        self.apply(ArithOp::Div, rhs)
    }

    /// Divides every component by `s`. Division by zero follows IEEE 754.
    pub fn div_scalar(&mut self, s: f64) -> &mut Self {
        self.apply(ArithOp::Div, s)
    }

    /// Divides by `v` component-wise.
    pub fn div_vector(&mut self, v: &Vec3) -> &mut Self {
        self.apply(ArithOp::Div, v)
    }
}

// =============================================================================
// OPERATOR TRAITS
// =============================================================================

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:expr) => {
        impl $trait for Vec3 {
            type Output = Vec3;

            fn $method(mut self, rhs: Vec3) -> Vec3 {
                self.apply($op, rhs);
                self
            }
        }

        impl $trait<f64> for Vec3 {
            type Output = Vec3;

            fn $method(mut self, rhs: f64) -> Vec3 {
                self.apply($op, rhs);
                self
            }
        }

        impl $assign_trait for Vec3 {
            fn $assign_method(&mut self, rhs: Vec3) {
                self.apply($op, rhs);
            }
        }

        impl $assign_trait<f64> for Vec3 {
            fn $assign_method(&mut self, rhs: f64) {
                self.apply($op, rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, ArithOp::Add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, ArithOp::Sub);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, ArithOp::Mul);
impl_binary_op!(Div, div, DivAssign, div_assign, ArithOp::Div);

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(mut self) -> Vec3 {
        self.negate();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_forms_broadcast() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v.add_scalar(1.0);
        assert_eq!(v, Vec3::new(2.0, 3.0, 4.0));
        v.sub_scalar(2.0);
        assert_eq!(v, Vec3::new(0.0, 1.0, 2.0));
        v.mul_scalar(3.0);
        assert_eq!(v, Vec3::new(0.0, 3.0, 6.0));
        v.div_scalar(3.0);
        assert_eq!(v, Vec3::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn vector_forms_are_component_wise() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v.add_vector(&Vec3::new(1.0, 1.0, 1.0))
            .mul_vector(&Vec3::new(2.0, 3.0, 4.0))
            .sub_vector(&Vec3::new(4.0, 9.0, 16.0))
            .div_vector(&Vec3::new(1.0, 2.0, 4.0));
        assert_eq!(v, Vec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn operand_with_zero_x_is_still_a_vector() {
        let rhs = Vec3::new(0.0, 5.0, 7.0);

        let mut v = Vec3::new(1.0, 1.0, 1.0);
        v.add_operand(rhs);
        assert_eq!(v, Vec3::new(1.0, 6.0, 8.0));

        let mut v = Vec3::new(1.0, 1.0, 1.0);
        v.mul_operand(&rhs);
        assert_eq!(v, Vec3::new(0.0, 5.0, 7.0));

        let mut v = Vec3::new(3.0, 10.0, 14.0);
        v.div_operand(Vec3::new(0.0, 5.0, 7.0));
        assert!(v.x.is_infinite());
        assert_eq!((v.y, v.z), (2.0, 2.0));
    }

    #[test]
    fn operand_scalar_zero_broadcasts() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v.sub_operand(0.0);
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        v.mul_operand(0.0);
        assert_eq!(v, Vec3::ZERO);
    }

    #[test]
    fn operator_traits_match_in_place_forms() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::splat(3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / b, Vec3::ONE);
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        c -= 1.0;
        c *= Vec3::new(1.0, 0.0, 1.0);
        c /= 2.0;
        assert_eq!(c, Vec3::new(2.0, 0.0, 4.0));
        // operands are untouched by the allocating forms
        assert_eq!(a, Vec3::new(1.0, 2.0, 3.0));
    }
}
