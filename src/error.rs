//! Errors raised by the fallible quaternion operations.

use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HamiltonError>;

/// The division-like operation that rejected its divisor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DivisionOp {
    Inverse,
    Quotient,
}

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HamiltonError {
    /// The divisor was exactly the additive identity.
    #[error("Division by zero quaternion in {op}")]
    DivideByZero { op: DivisionOp },
}

impl fmt::Display for DivisionOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inverse => write!(f, "inverse"),
            Self::Quotient => write!(f, "quotient"),
        }
    }
}
