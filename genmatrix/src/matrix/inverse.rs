use super::{ops::scale, Matrix};
use crate::{
    element::Element,
    error::{MatrixError, Result},
};
use log::debug;
use num_traits::{One, Zero};
use std::ops::Mul;

impl<T: Clone> Matrix<T> {
    /// Returns the minor obtained by deleting row `i` and column `j`
    ///
    /// # Errors
    ///
    /// [`MatrixError::BadAccess`] if `i >= height` or `j >= width`
    pub fn cofactor(&self, i: usize, j: usize) -> Result<Self> {
        if i >= self.height || j >= self.width {
            return Err(MatrixError::BadAccess {
                row: i,
                col: j,
                height: self.height,
                width: self.width,
            });
        }

        let data = self
            .data
            .iter()
            .enumerate()
            .filter(|(idx, _)| idx / self.width != i && idx % self.width != j)
            .map(|(_, x)| x.clone())
            .collect();
        Ok(Matrix {
            height: self.height - 1,
            width: self.width - 1,
            data,
        })
    }
}

impl<T: Element> Matrix<T> {
    /// Computes the inverse as the adjugate scaled by `1 / det`
    ///
    /// Each adjugate entry is a signed cofactor determinant, so this costs `O(n^4)`. The result is
    /// over [`Element::Real`].
    ///
    /// # Errors
    ///
    /// [`MatrixError::BadInverse`] if the matrix isn't square or its determinant is zero
    pub fn inverse(&self) -> Result<Matrix<T::Real>> {
        if !self.is_square() {
            return Err(MatrixError::BadInverse(format!(
                "matrix {}x{} isn't square",
                self.height, self.width
            )));
        }

        let det = self.det()?.to_real();
        if det.is_zero() {
            return Err(MatrixError::BadInverse(
                "matrix is singular, its determinant is zero".to_owned(),
            ));
        }

        let n = self.height;
        let mut adjugate = Matrix::<T::Real>::new(n, n)?;
        for i in 0..n {
            for j in 0..n {
                let minor = self.cofactor(i, j)?.det()?.to_real();
                // transposed position
                adjugate[(j, i)] = if (i + j) % 2 == 0 { minor } else { -minor };
            }
        }
        debug!("inverted {}x{} matrix with determinant {:?}", n, n, det.to_wide());

        Ok(scale(<T::Real as One>::one() / det, &adjugate))
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero + One + Mul<Output = T>,
{
    /// Raises a square matrix to the power `power` by repeated multiplication
    ///
    /// `pow(0)` is the identity of matching size.
    ///
    /// # Errors
    ///
    /// [`MatrixError::BadPow`] if the matrix isn't square
    pub fn pow(&self, power: u32) -> Result<Self> {
        if !self.is_square() {
            return Err(MatrixError::BadPow {
                height: self.height,
                width: self.width,
            });
        }
        if power == 0 {
            return Ok(Self::eye(self.height));
        }

        let mut out = self.clone();
        for _ in 1..power {
            out = (&out * self)?;
        }
        debug!("raised {}x{} matrix to power {}", self.height, self.width, power);
        Ok(out)
    }
}
