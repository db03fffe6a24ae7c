//! Representation of Hamilton quaternions as pairs of complex numbers.

use bytemuck::{Pod, Zeroable};
use num_complex::Complex64;

/// A Hamilton quaternion `a + bi + cj + dk`, stored as the Cayley-Dickson
/// pair `(a + bi, c + di)`.
///
/// The first complex number is the Cayley-Dickson real part and carries the
/// `1` and `i` components. The second is the Cayley-Dickson imaginary part
/// and carries the `j` and `k` components. Components can be any `f64`,
/// including infinities and NaN; nothing is normalized or validated.
///
/// Equality is exact and componentwise, following IEEE-754 semantics.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Hamilton {
    re: Complex64,
    im: Complex64,
}

impl Hamilton {
    /// The additive identity.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// The multiplicative identity.
    pub const ONE: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// The basis element `i`.
    pub const I: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// The basis element `j`.
    pub const J: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// The basis element `k`.
    pub const K: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates the quaternion `a + bi + cj + dk`.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::from_parts(Complex64::new(a, b), Complex64::new(c, d))
    }

    /// Creates a quaternion from its Cayley-Dickson real and imaginary
    /// parts.
    #[inline]
    pub const fn from_parts(re: Complex64, im: Complex64) -> Self {
        Self { re, im }
    }

    /// The Cayley-Dickson real part, `a + bi`.
    #[inline]
    pub const fn re(&self) -> Complex64 {
        self.re
    }

    /// The Cayley-Dickson imaginary part, `c + di`.
    #[inline]
    pub const fn im(&self) -> Complex64 {
        self.im
    }

    #[inline]
    pub fn set_re(&mut self, re: Complex64) {
        self.re = re;
    }

    #[inline]
    pub fn set_im(&mut self, im: Complex64) {
        self.im = im;
    }

    /// Returns the four real components `(a, b, c, d)`.
    #[inline]
    pub const fn cartesian(&self) -> (f64, f64, f64, f64) {
        (self.re.re, self.re.im, self.im.re, self.im.im)
    }

    /// Overwrites this quaternion with `other` and returns it for chaining.
    #[inline]
    pub fn copy_from(&mut self, other: &Self) -> &mut Self {
        *self = *other;
        self
    }
}

impl num_traits::Zero for Hamilton {
    fn zero() -> Self {
        Self::ZERO
    }

    /// Exact componentwise test, so `-0.0` components also count as zero.
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl num_traits::One for Hamilton {
    fn one() -> Self {
        Self::ONE
    }
}

impl From<nalgebra::Quaternion<f64>> for Hamilton {
    fn from(quaternion: nalgebra::Quaternion<f64>) -> Self {
        Self::new(quaternion.w, quaternion.i, quaternion.j, quaternion.k)
    }
}

impl From<Hamilton> for nalgebra::Quaternion<f64> {
    fn from(z: Hamilton) -> Self {
        let (a, b, c, d) = z.cartesian();
        nalgebra::Quaternion::new(a, b, c, d)
    }
}

impl_componentwise_approx_eq!(Hamilton);

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Hamilton {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self::new(
            u.arbitrary()?,
            u.arbitrary()?,
            u.arbitrary()?,
            u.arbitrary()?,
        ))
    }
}
