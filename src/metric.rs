//! Quadrance, inverse and quotient.

use crate::{
    error::{DivisionOp, HamiltonError, Result},
    hamilton::Hamilton,
};

impl Hamilton {
    /// Returns the non-negative quadrance `|re|² + |im|²`, i.e. the sum of
    /// squares of all four components.
    ///
    /// The result is `+inf` when every complex part is either infinite or free
    /// of NaN and at least one part is infinite. A part that holds NaN but no
    /// infinity makes the result NaN, even if the other part is infinite.
    #[inline]
    pub fn quad(&self) -> f64 {
        let (re_abs, im_abs) = (self.re().norm(), self.im().norm());
        re_abs * re_abs + im_abs * im_abs
    }

    /// Computes the multiplicative inverse `conj(self) / quad(self)`.
    ///
    /// # Errors
    /// Returns [`HamiltonError::DivideByZero`] if `self` is exactly zero.
    pub fn inverse(&self) -> Result<Self> {
        reject_zero_divisor(self, DivisionOp::Inverse)?;
        Ok(self.conjugate().dilated(self.quad().recip()))
    }

    /// Computes the right quotient `self * divisor⁻¹`.
    ///
    /// The inverse is applied on the right; `divisor⁻¹ * self` generally
    /// differs. The inverse is never formed explicitly: the result is
    /// `self * conj(divisor)` dilated by `1 / quad(divisor)`.
    ///
    /// # Errors
    /// Returns [`HamiltonError::DivideByZero`] if `divisor` is exactly zero.
    pub fn quotient(&self, divisor: &Self) -> Result<Self> {
        reject_zero_divisor(divisor, DivisionOp::Quotient)?;
        Ok((self * divisor.conjugate()).dilated(divisor.quad().recip()))
    }
}

fn reject_zero_divisor(divisor: &Hamilton, op: DivisionOp) -> Result<()> {
    if *divisor == Hamilton::ZERO {
        log::debug!("Rejected zero divisor in quaternion {}", op);
        return Err(HamiltonError::DivideByZero { op });
    }
    Ok(())
}
