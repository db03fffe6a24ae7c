//! Linear operations: scaling, negation, conjugation, addition and
//! subtraction.
//!
//! None of these mix components across the two complex parts, so every
//! output component depends only on the matching input components.

use crate::hamilton::Hamilton;
use num_complex::Complex64;
use std::ops::Neg;

impl Hamilton {
    /// Multiplies both complex parts by the complex scalar `a`.
    ///
    /// This acts on the Cayley-Dickson pair directly and is a primitive in
    /// its own right. For a non-real `a` it coincides with the left product
    /// `(a, 0) * self`, not with `self * (a, 0)`.
    #[inline]
    pub fn scaled(&self, a: Complex64) -> Self {
        Self::from_parts(self.re() * a, self.im() * a)
    }

    /// Multiplies every component by the real factor `a`.
    #[inline]
    pub fn dilated(&self, a: f64) -> Self {
        Self::from_parts(self.re() * a, self.im() * a)
    }

    #[inline]
    pub fn negated(&self) -> Self {
        self.dilated(-1.0)
    }

    /// Returns `a - bi - cj - dk`: the first part is complex-conjugated and
    /// the second part is negated outright.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::from_parts(self.re().conj(), -self.im())
    }
}

impl_binop!(Add, add, AddAssign, add_assign, Hamilton, |a, b| {
    Hamilton::from_parts(a.re() + b.re(), a.im() + b.im())
});

impl_binop!(Sub, sub, SubAssign, sub_assign, Hamilton, |a, b| {
    Hamilton::from_parts(a.re() - b.re(), a.im() - b.im())
});

impl_binop!(Mul, mul, MulAssign, mul_assign, f64, |a, b| {
    a.dilated(b)
});

impl Neg for Hamilton {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.negated()
    }
}

impl Neg for &Hamilton {
    type Output = Hamilton;

    #[inline]
    fn neg(self) -> Hamilton {
        self.negated()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;

    #[test]
    fn scaled_by_real_matches_dilated() {
        let z = Hamilton::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(z.scaled(Complex64::new(2.5, 0.0)), z.dilated(2.5));
    }

    #[test]
    fn scaled_by_imaginary_unit_multiplies_each_part() {
        let z = Hamilton::new(1.0, 2.0, 3.0, 4.0);
        // (1 + 2i) i = -2 + i and (3 + 4i) i = -4 + 3i
        assert_eq!(
            z.scaled(Complex64::new(0.0, 1.0)),
            Hamilton::new(-2.0, 1.0, -4.0, 3.0)
        );
    }

    #[test]
    fn scaled_is_left_product_with_complex_embedding() {
        let z = Hamilton::new(1.0, 2.0, 3.0, 4.0);
        let a = Complex64::new(0.5, -1.5);
        let embedded = Hamilton::from_parts(a, Complex64::new(0.0, 0.0));
        assert_eq!(z.scaled(a), embedded * z);
        assert_ne!(z.scaled(a), z * embedded);
    }

    #[test]
    fn dilated_works() {
        let z = Hamilton::new(1.0, -2.0, 0.5, 4.0);
        assert_eq!(z.dilated(2.0), Hamilton::new(2.0, -4.0, 1.0, 8.0));
        assert_eq!(z * 2.0, z.dilated(2.0));
        assert_eq!(&z * &2.0, z.dilated(2.0));
    }

    #[test]
    fn dilated_infinity_stays_free_of_nan() {
        let z = Hamilton::new(f64::INFINITY, 0.0, 1.0, f64::NEG_INFINITY);
        let (a, b, c, d) = z.dilated(-2.0).cartesian();
        assert_eq!(a, f64::NEG_INFINITY);
        assert_eq!(b, 0.0);
        assert_eq!(c, -2.0);
        assert_eq!(d, f64::INFINITY);
    }

    #[test]
    fn negated_works() {
        let z = Hamilton::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(z.negated(), Hamilton::new(-1.0, 2.0, -3.0, 4.0));
        assert_eq!(-z, z.negated());
        assert_eq!(-&z, z.negated());
        assert_eq!(Hamilton::inf(1, 1, -1, -1).negated(), Hamilton::inf(-1, -1, 1, 1));
    }

    #[test]
    fn conjugate_flips_every_non_scalar_component() {
        let z = Hamilton::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(z.conjugate(), Hamilton::new(1.0, -2.0, -3.0, -4.0));
    }

    #[test]
    fn conjugate_is_an_involution() {
        let z = Hamilton::new(-0.5, 2.0, f64::INFINITY, -4.0);
        assert_eq!(z.conjugate().conjugate(), z);
    }

    #[test]
    fn addition_and_subtraction_work() {
        let x = Hamilton::new(1.0, 2.0, 3.0, 4.0);
        let y = Hamilton::new(0.5, -1.0, 2.0, -8.0);
        assert_eq!(x + y, Hamilton::new(1.5, 1.0, 5.0, -4.0));
        assert_eq!(x - y, Hamilton::new(0.5, 3.0, 1.0, 12.0));
        assert_eq!(&x + &y, x + y);
        assert_eq!(&x - y, x - y);
        assert_eq!(x - &y, x - y);
    }

    #[test]
    fn assigning_operators_allow_self_as_operand() {
        let mut z = Hamilton::new(1.0, 2.0, 3.0, 4.0);
        z += z;
        assert_eq!(z, Hamilton::new(2.0, 4.0, 6.0, 8.0));
        z -= z;
        assert_eq!(z, Hamilton::ZERO);

        let mut w = Hamilton::new(1.0, -1.0, 1.0, -1.0);
        w *= 3.0;
        assert_eq!(w, Hamilton::new(3.0, -3.0, 3.0, -3.0));
    }

    #[test]
    fn addition_is_associative_for_exact_values() {
        let x = Hamilton::new(1.0, 2.0, 3.0, 4.0);
        let y = Hamilton::new(-8.0, 0.25, 7.5, 2.0);
        let z = Hamilton::new(16.0, -3.0, 0.5, -1.0);
        assert_eq!((x + y) + z, x + (y + z));
    }
}
