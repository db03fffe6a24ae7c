//! Infinite and NaN quaternions.
//!
//! A quaternion is infinite if either of its complex parts is infinite, and
//! a complex number is infinite as soon as one of its two components is,
//! whatever the other one holds. NaN classification only applies to values
//! that are not infinite, so the two predicates never hold at the same time.

use crate::hamilton::Hamilton;
use num_complex::Complex64;

#[inline]
fn complex_is_inf(z: Complex64) -> bool {
    z.re.is_infinite() || z.im.is_infinite()
}

#[inline]
fn complex_is_nan(z: Complex64) -> bool {
    z.re.is_nan() || z.im.is_nan()
}

#[inline]
fn signed_infinity(sign: i32) -> f64 {
    if sign >= 0 {
        f64::INFINITY
    } else {
        f64::NEG_INFINITY
    }
}

impl Hamilton {
    /// Whether any component is infinite. Takes priority over
    /// [`is_nan`](Self::is_nan).
    #[inline]
    pub fn is_inf(&self) -> bool {
        complex_is_inf(self.re()) || complex_is_inf(self.im())
    }

    /// Whether any component is NaN while none is infinite.
    #[inline]
    pub fn is_nan(&self) -> bool {
        !self.is_inf() && (complex_is_nan(self.re()) || complex_is_nan(self.im()))
    }

    /// Creates a quaternionic infinity. Each selector picks `+inf` for the
    /// corresponding component when it is non-negative and `-inf` otherwise.
    pub fn inf(sa: i32, sb: i32, sc: i32, sd: i32) -> Self {
        Self::new(
            signed_infinity(sa),
            signed_infinity(sb),
            signed_infinity(sc),
            signed_infinity(sd),
        )
    }

    /// Creates a quaternion with every component NaN.
    pub fn nan() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_values_are_neither_inf_nor_nan() {
        let z = Hamilton::new(1.0, -2.0, 3.0, f64::MAX);
        assert!(!z.is_inf());
        assert!(!z.is_nan());
        assert!(!Hamilton::ZERO.is_inf());
        assert!(!Hamilton::ZERO.is_nan());
    }

    #[test]
    fn single_infinite_component_makes_value_infinite() {
        for index in 0..4 {
            let mut components = [1.0; 4];
            components[index] = f64::NEG_INFINITY;
            let [a, b, c, d] = components;
            let z = Hamilton::new(a, b, c, d);
            assert!(z.is_inf(), "component {index}");
            assert!(!z.is_nan(), "component {index}");
        }
    }

    #[test]
    fn infinity_takes_priority_over_nan_in_same_part() {
        let z = Hamilton::new(f64::INFINITY, f64::NAN, 0.0, 0.0);
        assert!(z.is_inf());
        assert!(!z.is_nan());
    }

    #[test]
    fn infinity_takes_priority_over_nan_in_other_part() {
        let z = Hamilton::new(f64::NAN, 0.0, 0.0, f64::INFINITY);
        assert!(z.is_inf());
        assert!(!z.is_nan());
    }

    #[test]
    fn single_nan_component_makes_value_nan() {
        let z = Hamilton::new(0.0, 0.0, f64::NAN, 1.0);
        assert!(z.is_nan());
        assert!(!z.is_inf());
    }

    #[test]
    fn inf_selects_sign_per_component() {
        let z = Hamilton::inf(1, -1, 0, -5);
        assert_eq!(
            z.cartesian(),
            (
                f64::INFINITY,
                f64::NEG_INFINITY,
                f64::INFINITY,
                f64::NEG_INFINITY
            )
        );
        assert!(z.is_inf());
    }

    #[test]
    fn nan_has_every_component_nan() {
        let z = Hamilton::nan();
        let (a, b, c, d) = z.cartesian();
        assert!(a.is_nan() && b.is_nan() && c.is_nan() && d.is_nan());
        assert!(z.is_nan());
        assert!(!z.is_inf());
    }
}
