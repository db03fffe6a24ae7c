//! Textual rendering of quaternions.

use crate::hamilton::Hamilton;
use std::fmt;

const BASIS_SYMBOLS: [&str; 3] = ["i", "j", "k"];

/// Writes a component without a leading sign token.
fn write_component(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        write!(f, "NaN")
    } else if value == f64::INFINITY {
        write!(f, "+Inf")
    } else if value == f64::NEG_INFINITY {
        write!(f, "-Inf")
    } else {
        write_finite_component(f, value)
    }
}

/// Writes a finite value with the shortest digits that round-trip. Values
/// with a decimal exponent outside `-4..6` use exponent notation with an
/// explicit sign and at least two exponent digits, e.g. `1e+21`.
fn write_finite_component(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return write!(f, "{value}");
    };
    match exponent.parse::<i32>() {
        Ok(exponent) if !(-4..6).contains(&exponent) => {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
        }
        _ => write!(f, "{value}"),
    }
}

/// Writes a component preceded by `+` unless it carries its own sign.
fn write_signed_component(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if !value.is_sign_negative() && value != f64::INFINITY {
        write!(f, "+")?;
    }
    write_component(f, value)
}

/// Renders `a + bi + cj + dk` as `(a+bi+cj+dk)`, in the manner of complex
/// number literals.
impl fmt::Display for Hamilton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b, c, d) = self.cartesian();
        write!(f, "(")?;
        write_component(f, a)?;
        for (value, symbol) in [b, c, d].into_iter().zip(BASIS_SYMBOLS) {
            write_signed_component(f, value)?;
            write!(f, "{symbol}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_works() {
        assert_eq!(Hamilton::new(1.0, 2.0, 3.0, 4.0).to_string(), "(1+2i+3j+4k)");
    }

    #[test]
    fn display_keeps_negative_signs() {
        assert_eq!(
            Hamilton::new(-1.5, -2.0, 0.25, -4.0).to_string(),
            "(-1.5-2i+0.25j-4k)"
        );
    }

    #[test]
    fn display_shows_signed_zero() {
        assert_eq!(Hamilton::new(0.0, -0.0, 0.0, -0.0).to_string(), "(0-0i+0j-0k)");
    }

    #[test]
    fn display_uses_exponent_form_for_large_and_small_magnitudes() {
        assert_eq!(
            Hamilton::new(1e21, -1e-5, 1.5e-7, -2.5e6).to_string(),
            "(1e+21-1e-05i+1.5e-07j-2.5e+06k)"
        );
        assert_eq!(
            Hamilton::new(1e100, 0.0, 0.0, 0.0).to_string(),
            "(1e+100+0i+0j+0k)"
        );
    }

    #[test]
    fn display_keeps_plain_form_for_moderate_magnitudes() {
        assert_eq!(
            Hamilton::new(999999.0, 0.0001, -123.456, 0.5).to_string(),
            "(999999+0.0001i-123.456j+0.5k)"
        );
    }

    #[test]
    fn display_renders_infinities() {
        assert_eq!(
            Hamilton::inf(1, 1, -1, 1).to_string(),
            "(+Inf+Infi-Infj+Infk)"
        );
    }

    #[test]
    fn display_renders_nan() {
        assert_eq!(Hamilton::nan().to_string(), "(NaN+NaNi+NaNj+NaNk)");
    }
}
