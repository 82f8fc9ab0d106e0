//! `matcalc` evaluates a single matrix operation described in a text file, using [`genmatrix`]
//! for the arithmetic.
//!
//! The input format is described in [`parser`], the available operations in [`Command`].

pub mod command;
pub mod error;
pub mod parser;

pub use command::Command;
pub use error::{CalcError, Result};
pub use parser::Problem;

use genmatrix::{Element, Matrix};
use num_traits::Float;
use std::{fmt, str::FromStr};

/// Element types the calculator can work with: floating types that are their own real type and
/// can be read from and written as text
pub trait Number: Element<Real = Self> + Float + FromStr + fmt::Display {}

impl<T> Number for T where T: Element<Real = T> + Float + FromStr + fmt::Display {}

/// Parses `input` as a problem and evaluates it
pub fn evaluate<T: Number>(input: &str) -> Result<Matrix<T>> {
    Problem::parse(input)?.solve()
}
