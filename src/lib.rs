//! Hamilton quaternions represented as Cayley-Dickson pairs of complex
//! numbers.
//!
//! A [`Hamilton`] value `a + bi + cj + dk` is stored as the pair
//! `(a + bi, c + di)`. All algebraic operations are written directly in terms
//! of this pair grouping, which is what fixes the multiplication and
//! conjugation rules.

#[macro_use]
mod macros;

pub mod curvilinear;
pub mod display;
pub mod error;
pub mod hamilton;
pub mod linear;
pub mod metric;
pub mod product;
pub mod special;

pub use curvilinear::Curvilinear;
pub use error::{DivisionOp, HamiltonError, Result};
pub use hamilton::Hamilton;
pub use num_complex::Complex64;
