//! `genmatrix` is a Rust library for dense matrices over a generic element type. Some features
//! include:
//! - checked and unchecked element access on a row-major buffer
//! - addition, subtraction and multiplication between matrices of possibly different element
//!   types, with the result element type inferred from the elements' own operators
//! - scalar multiplication and matrix division
//! - transpose, cofactors and integer powers
//! - a single Gaussian-elimination pass computing rank and determinant together, and the
//!   adjugate-based inverse built on top of it
//!
//! The main data structure is [`Matrix`]. Element requirements for the elimination-based
//! routines are collected in the [`Element`] trait, and the result types of mixed-type arithmetic
//! are named by the aliases in [`element`].
//!
//! ```
//! use genmatrix::Matrix;
//!
//! let a = Matrix::from_rows([[1i32, 4, 0, 12], [-1, -2, 1, 1], [0, 1, 1, -1], [7, 0, 1, 2]])?;
//! assert_eq!(a.det()?, 325);
//! assert_eq!(a.rank(), 4);
//!
//! let b = Matrix::from_rows([[2.0f64, 0.0], [0.0, 4.0]])?;
//! assert_eq!((&b / &b)?, Matrix::<f64>::eye(2));
//! # Ok::<(), genmatrix::MatrixError>(())
//! ```

#![allow(
    clippy::needless_range_loop,
    clippy::uninlined_format_args,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]
pub mod element;
pub mod error;
pub mod matrix;

pub use element::{AddOutput, DivOutput, DotOutput, Element, MulOutput, SubOutput};
pub use error::{MatrixError, Result};
pub use matrix::{gauss::PIVOT_EPSILON, ops::scale, Matrix};
