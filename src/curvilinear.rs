//! Conversion between quaternions and 4-dimensional hyperspherical
//! coordinates.

use crate::hamilton::Hamilton;

/// Hyperspherical coordinates: a radius and three angles (in radians).
///
/// The associated quaternion is
///
/// ```text
/// a = r cos(θ1)
/// b = r sin(θ1) cos(θ2)
/// c = r sin(θ1) sin(θ2) cos(θ3)
/// d = r sin(θ1) sin(θ2) sin(θ3)
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Curvilinear {
    pub r: f64,
    pub theta1: f64,
    pub theta2: f64,
    pub theta3: f64,
}

impl Curvilinear {
    pub const fn new(r: f64, theta1: f64, theta2: f64, theta3: f64) -> Self {
        Self {
            r,
            theta1,
            theta2,
            theta3,
        }
    }
}

impl Hamilton {
    /// Creates a quaternion from hyperspherical coordinates.
    ///
    /// A radius of exactly zero yields [`Hamilton::ZERO`] without evaluating
    /// any trigonometric function, so the angles may hold anything. Angles
    /// are neither clamped nor normalized.
    pub fn from_curvilinear(r: f64, theta1: f64, theta2: f64, theta3: f64) -> Self {
        if r == 0.0 {
            return Self::ZERO;
        }
        Self::new(
            r * theta1.cos(),
            r * theta1.sin() * theta2.cos(),
            r * theta1.sin() * theta2.sin() * theta3.cos(),
            r * theta1.sin() * theta2.sin() * theta3.sin(),
        )
    }

    /// Computes the hyperspherical coordinates of this quaternion.
    ///
    /// At the origin the radius is zero and all angles are NaN.
    ///
    /// `θ1` and `θ2` come from the single-argument arctangent, so they lie in
    /// `[-π/2, π/2]` and are NaN or ±π/2 when their ratio is `0/0` or has a
    /// zero denominator. Only `θ3` is quadrant-correct. Consequently
    /// `from_curvilinear(z.curvilinear())` only reproduces `z` when `a > 0`
    /// and `b > 0`.
    pub fn curvilinear(&self) -> Curvilinear {
        if *self == Self::ZERO {
            return Curvilinear::new(0.0, f64::NAN, f64::NAN, f64::NAN);
        }
        let (a, b, c, d) = self.cartesian();
        let h = self.im().norm();
        Curvilinear {
            r: self.quad().sqrt(),
            theta1: (b.hypot(h) / a).atan(),
            theta2: (h / b).atan(),
            theta3: d.atan2(c),
        }
    }
}

impl From<Curvilinear> for Hamilton {
    fn from(coords: Curvilinear) -> Self {
        Self::from_curvilinear(coords.r, coords.theta1, coords.theta2, coords.theta3)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Curvilinear {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self::new(
            u.arbitrary()?,
            u.arbitrary()?,
            u.arbitrary()?,
            u.arbitrary()?,
        ))
    }
}
