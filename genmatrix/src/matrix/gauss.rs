//! Gaussian elimination shared by [`Matrix::det`] and [`Matrix::rank`]
//!
//! A single elimination pass yields both the rank and the signed determinant. Matrices whose
//! elements all have an exact integer value are reduced with fraction-free integer elimination,
//! everything else on a wide `f64` copy.

use super::Matrix;
use crate::{
    element::Element,
    error::{MatrixError, Result},
};
use log::trace;

/// Relative tolerance of the floating engine
///
/// An entry counts as zero when its absolute value is at most
/// `PIVOT_EPSILON * max_abs_entry * max(height, width)` of the input matrix.
pub const PIVOT_EPSILON: f64 = 1e-10;

/// Outcome of one elimination pass
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Reduction {
    pub(crate) rank: usize,

    /// signed product of the pivot diagonal, only present for square matrices
    pub(crate) det: Option<f64>,
}

/// Row-major `f64` working copy that elimination is performed on
///
/// Columns dropped as linearly dependent are never removed from the buffer; `active` counts the
/// columns that still take part, and they always occupy indices `0..active`.
struct WideMatrix {
    rows: usize,
    cols: usize,
    active: usize,
    tolerance: f64,
    data: Vec<f64>,
}

impl WideMatrix {
    fn new<T: Element>(m: &Matrix<T>) -> Self {
        let data: Vec<f64> = m.as_slice().iter().map(Element::to_wide).collect();
        let max_abs = data.iter().fold(0.0f64, |acc, x| acc.max(x.abs()));
        WideMatrix {
            rows: m.height(),
            cols: m.width(),
            active: m.width(),
            tolerance: PIVOT_EPSILON * max_abs * m.height().max(m.width()) as f64,
            data,
        }
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }

    #[inline]
    fn is_zero(&self, x: f64) -> bool {
        x.abs() <= self.tolerance
    }

    #[inline]
    fn swap_rows(&mut self, from: usize, to: usize) {
        for j in 0..self.active {
            self.data.swap(from * self.cols + j, to * self.cols + j);
        }
    }

    /// `row[to] -= factor * row[from]` over the active columns
    #[inline]
    fn sub_scaled_row(&mut self, from: usize, to: usize, factor: f64) {
        for j in 0..self.active {
            let x = self.at(from, j);
            self.data[to * self.cols + j] -= factor * x;
        }
    }

    /// Drops column `col` by overwriting it with the last active column
    fn drop_col(&mut self, col: usize) {
        self.active -= 1;
        let last = self.active;
        for i in 0..self.rows {
            self.data[i * self.cols + col] = self.data[i * self.cols + last];
        }
    }

    /// For each pivot index `p`, a non-zero pivot eliminates column `p` from every other row. A
    /// zero pivot is first replaced by swapping in a row from below with a non-zero entry in the
    /// same column, which flips the sign of the determinant. If there is no such row the column is
    /// dependent on the pivot columns before it: it is dropped (forcing the determinant to zero)
    /// and the same pivot index is retried with the last active column in its place.
    fn reduce(mut self) -> Reduction {
        let mut rank = self.rows.min(self.cols);
        let mut sign = 1.0;
        let mut p = 0;

        while p < rank {
            let pivot = self.at(p, p);
            if !self.is_zero(pivot) {
                for i in 0..self.rows {
                    if i != p {
                        let factor = self.at(i, p) / pivot;
                        if factor != 0.0 {
                            self.sub_scaled_row(p, i, factor);
                        }
                    }
                }
                p += 1;
            } else if let Some(i) = ((p + 1)..self.rows).find(|&i| !self.is_zero(self.at(i, p))) {
                self.swap_rows(p, i);
                sign = -sign;
            } else {
                self.drop_col(p);
                sign = 0.0;
                rank = rank.min(self.active);
            }
        }

        let det = (self.rows == self.cols)
            .then(|| sign * (0..self.rows).map(|i| self.at(i, i)).product::<f64>());
        Reduction { rank, det }
    }
}

/// Row-major `i128` working copy for fraction-free (Bareiss) elimination
///
/// After eliminating with pivot `k`, every remaining entry is a minor of the input, so each
/// division by the previous pivot is exact.
struct ExactMatrix {
    rows: usize,
    cols: usize,
    data: Vec<i128>,
}

impl ExactMatrix {
    /// `None` if some element has no exact integer value
    fn new<T: Element>(m: &Matrix<T>) -> Option<Self> {
        Some(ExactMatrix {
            rows: m.height(),
            cols: m.width(),
            data: m
                .as_slice()
                .iter()
                .map(Element::to_exact)
                .collect::<Option<Vec<_>>>()?,
        })
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> i128 {
        self.data[i * self.cols + j]
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        for j in 0..self.cols {
            self.data.swap(a * self.cols + j, b * self.cols + j);
        }
    }

    /// `None` if an intermediate minor overflows `i128`
    fn reduce(mut self) -> Option<Reduction> {
        let mut prev: i128 = 1;
        let mut negate = false;
        let mut r = 0;

        for c in 0..self.cols {
            if r == self.rows {
                break;
            }
            let Some(i) = (r..self.rows).find(|&i| self.at(i, c) != 0) else {
                continue;
            };
            if i != r {
                self.swap_rows(i, r);
                negate = !negate;
            }

            let pivot = self.at(r, c);
            for i in (r + 1)..self.rows {
                let lead = self.at(i, c);
                for j in (c + 1)..self.cols {
                    let cross = pivot
                        .checked_mul(self.at(i, j))?
                        .checked_sub(lead.checked_mul(self.at(r, j))?)?;
                    self.data[i * self.cols + j] = cross / prev;
                }
                self.data[i * self.cols + c] = 0;
            }
            prev = pivot;
            r += 1;
        }

        // the last pivot is the determinant up to the row swaps
        let det = (self.rows == self.cols).then(|| {
            let det = if r == self.rows { prev as f64 } else { 0.0 };
            if negate {
                -det
            } else {
                det
            }
        });
        Some(Reduction { rank: r, det })
    }
}

impl<T: Element> Matrix<T> {
    /// Performs elimination on a copy of the matrix
    ///
    /// Integer matrices take the exact path and fall back to the floating engine only if an
    /// intermediate value overflows.
    pub(crate) fn reduce(&self) -> Reduction {
        let reduction = ExactMatrix::new(self)
            .and_then(ExactMatrix::reduce)
            .unwrap_or_else(|| WideMatrix::new(self).reduce());
        trace!(
            "reduced {}x{} matrix: rank {}, det {:?}",
            self.height,
            self.width,
            reduction.rank,
            reduction.det
        );
        reduction
    }

    /// Computes the rank of the matrix using gaussian elimination
    ///
    /// Works for any shape; the rank of the 0x0 matrix and of every all-zero matrix is 0.
    #[inline]
    pub fn rank(&self) -> usize {
        self.reduce().rank
    }

    /// Computes the determinant using gaussian elimination
    ///
    /// The determinant of the 0x0 matrix is 1 (the empty product). Integer element types get the
    /// result through [`Element::from_wide`], rounded and saturated.
    ///
    /// # Errors
    ///
    /// [`MatrixError::BadDeterminant`] if the matrix isn't square
    pub fn det(&self) -> Result<T> {
        if !self.is_square() {
            return Err(MatrixError::BadDeterminant {
                height: self.height,
                width: self.width,
            });
        }
        Ok(T::from_wide(self.reduce().det.unwrap_or(0.0)))
    }
}
