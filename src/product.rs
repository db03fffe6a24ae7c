//! The Cayley-Dickson product and the commutator.

use crate::hamilton::Hamilton;

/// The product of `x` and `y`, computed on the complex pairs `x = (p, q)`
/// and `y = (r, s)` as
///
/// ```text
/// (p r - conj(s) q,  s p + q conj(r))
/// ```
///
/// On the basis this gives `i² = j² = k² = -1`, `ij = -ji = k`,
/// `jk = -kj = i` and `ki = -ik = j`. The product is associative and
/// bilinear but not commutative.
#[inline]
fn cayley_dickson_product(x: Hamilton, y: Hamilton) -> Hamilton {
    let (p, q) = (x.re(), x.im());
    let (r, s) = (y.re(), y.im());
    Hamilton::from_parts(p * r - s.conj() * q, s * p + q * r.conj())
}

impl Hamilton {
    /// Returns `self * other - other * self`, which vanishes exactly when the
    /// two factors commute.
    pub fn commutator(&self, other: &Self) -> Self {
        self * other - other * self
    }
}

impl_binop!(Mul, mul, MulAssign, mul_assign, Hamilton, |x, y| {
    cayley_dickson_product(x, y)
});
