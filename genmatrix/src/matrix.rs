pub mod gauss;
pub mod inverse;
pub mod ops;

use crate::error::{MatrixError, Result};
use num_traits::{One, Zero};
use rand::{
    distr::{Distribution, StandardUniform},
    Rng,
};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A dense matrix of elements of type `T`
///
/// The elements are stored in row-major order in a single buffer, so the element at row `i`,
/// column `j` lives at `data[i * width + j]`. A matrix is either fully empty (0x0) or has both
/// dimensions non-zero; every constructor rejects a shape that is degenerate in only one
/// dimension.
#[derive(Clone, Debug)]
pub struct Matrix<T> {
    /// the number of rows
    height: usize,

    /// the number of columns
    width: usize,

    /// the elements, row-major, `height * width` of them
    data: Vec<T>,
}

fn check_shape(height: usize, width: usize) -> Result<()> {
    if (height == 0) != (width == 0) {
        return Err(MatrixError::Initialization(format!(
            "a {}x{} matrix is degenerate in only one dimension",
            height, width
        )));
    }
    Ok(())
}

impl<T> Matrix<T> {
    /// Builds a matrix from a flat row-major buffer
    ///
    /// Fails if the shape is degenerate in one dimension or if `data.len() != height * width`.
    pub fn from_vec(height: usize, width: usize, data: Vec<T>) -> Result<Self> {
        check_shape(height, width)?;
        if data.len() != height * width {
            return Err(MatrixError::Initialization(format!(
                "a {}x{} matrix needs {} elements, got {}",
                height,
                width,
                height * width,
                data.len()
            )));
        }
        Ok(Matrix {
            height,
            width,
            data,
        })
    }

    /// Builds a matrix from nested rows, e.g. `Matrix::from_rows([[1, 2], [3, 4]])`
    ///
    /// All rows must have the same length. An empty outer list gives the 0x0 matrix.
    pub fn from_rows<R, I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut data = Vec::new();
        let mut width = None;
        let mut height = 0;
        for row in rows {
            let start = data.len();
            data.extend(row);
            let len = data.len() - start;
            match width {
                None => width = Some(len),
                Some(w) if w != len => {
                    return Err(MatrixError::Initialization(format!(
                        "row {} has {} elements, expected {}",
                        height, len, w
                    )));
                }
                Some(_) => {}
            }
            height += 1;
        }
        Self::from_vec(height, width.unwrap_or(0), data)
    }

    /// Builds a matrix by evaluating `f(row, col)` for every position
    pub fn build(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> T) -> Result<Self> {
        check_shape(height, width)?;
        let data = (0..height)
            .flat_map(|i| (0..width).map(move |j| (i, j)))
            .map(|(i, j)| f(i, j))
            .collect();
        Ok(Matrix {
            height,
            width,
            data,
        })
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.height == self.width
    }

    /// Returns true for the 0x0 matrix
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the element at `(row, col)`
    ///
    /// # Errors
    ///
    /// [`MatrixError::BadAccess`] if `row >= height` or `col >= width`
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        let idx = self.offset(row, col)?;
        Ok(&self.data[idx])
    }

    /// Returns a mutable reference to the element at `(row, col)`
    ///
    /// This is how a matrix read from a stream gets populated, element by element.
    ///
    /// # Errors
    ///
    /// [`MatrixError::BadAccess`] if `row >= height` or `col >= width`
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let idx = self.offset(row, col)?;
        Ok(&mut self.data[idx])
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.height || col >= self.width {
            return Err(MatrixError::BadAccess {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(row * self.width + col)
    }

    /// Returns row `i` as a slice
    ///
    /// # Panics
    ///
    /// If `i >= height`
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.height, "row {} out of range for height {}", i, self.height);
        &self.data[i * self.width..(i + 1) * self.width]
    }

    /// Iterates over all elements in row-major order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// The row-major element buffer
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Applies `f` to every element, producing a matrix of the same shape
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Matrix<U> {
        Matrix {
            height: self.height,
            width: self.width,
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Moves the contents out, leaving the 0x0 matrix behind
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Transposes the matrix in place
    ///
    /// Square matrices are transposed by swapping elements across the diagonal. Other shapes are
    /// rebuilt by moving every element to its transposed position.
    pub fn transpose_inplace(&mut self) {
        if self.is_square() {
            let n = self.width;
            for i in 0..n {
                for j in (i + 1)..n {
                    self.data.swap(i * n + j, j * n + i);
                }
            }
        } else {
            let (height, width) = (self.height, self.width);
            let mut slots: Vec<Option<T>> = std::mem::take(&mut self.data)
                .into_iter()
                .map(Some)
                .collect();
            self.data = (0..width)
                .flat_map(|j| (0..height).map(move |i| i * width + j))
                .filter_map(|idx| slots[idx].take())
                .collect();
            self.height = width;
            self.width = height;
        }
    }
}

impl<T: Clone> Matrix<T> {
    /// Returns a transposed copy of the matrix
    pub fn transpose(&self) -> Self {
        Matrix {
            height: self.width,
            width: self.height,
            data: (0..self.width)
                .flat_map(|j| (0..self.height).map(move |i| (i, j)))
                .map(|(i, j)| self.data[i * self.width + j].clone())
                .collect(),
        }
    }
}

impl<T: Zero + Clone> Matrix<T> {
    /// Creates a `height` by `width` matrix filled with `T::zero()`
    ///
    /// # Errors
    ///
    /// [`MatrixError::Initialization`] if exactly one of the dimensions is zero
    pub fn new(height: usize, width: usize) -> Result<Self> {
        check_shape(height, width)?;
        Ok(Matrix {
            height,
            width,
            data: vec![T::zero(); height * width],
        })
    }

    /// Checks if every element is zero
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(T::is_zero)
    }
}

impl<T: Zero + One + Clone> Matrix<T> {
    /// The `n` by `n` identity matrix; `eye(0)` is the 0x0 matrix
    pub fn eye(n: usize) -> Self {
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            data[i * n + i] = T::one();
        }
        Matrix {
            height: n,
            width: n,
            data,
        }
    }
}

impl<T> Matrix<T>
where
    StandardUniform: Distribution<T>,
{
    /// A matrix of elements sampled from `rand`'s standard distribution for `T`
    #[inline]
    pub fn random(rng: &mut impl Rng, height: usize, width: usize) -> Result<Self> {
        Self::build(height, width, |_, _| rng.random::<T>())
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Matrix {
            height: 0,
            width: 0,
            data: Vec::new(),
        }
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

/// Two matrices are equal if they have the same shape and pairwise-equal elements. The element
/// types may differ as long as they're comparable.
impl<A, B> PartialEq<Matrix<B>> for Matrix<A>
where
    A: PartialEq<B>,
{
    fn eq(&self, other: &Matrix<B>) -> bool {
        self.height == other.height
            && self.width == other.width
            && self.data.iter().zip(other.data.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for Matrix<T> {}

/// Unchecked element access
///
/// # Panics
///
/// If the index is out of range. Use [`Matrix::get`] for a checked version.
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (i, j) = index;
        assert!(
            i < self.height && j < self.width,
            "index ({}, {}) out of range for a {}x{} matrix",
            i,
            j,
            self.height,
            self.width
        );
        &self.data[i * self.width + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let (i, j) = index;
        assert!(
            i < self.height && j < self.width,
            "index ({}, {}) out of range for a {}x{} matrix",
            i,
            j,
            self.height,
            self.width
        );
        &mut self.data[i * self.width + j]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.height {
            for (j, x) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", x)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
