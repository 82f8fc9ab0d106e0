use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Failures raised by matrix construction, access and the linear-algebra routines
///
/// Every variant is returned at the point where the problem is detected. No operation produces a
/// partial result: either a fully valid matrix is returned or an error is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Malformed construction: one dimension zero and the other not, uneven rows, or a flat
    /// buffer whose length doesn't match the dimensions
    #[error("initialization error: {0}")]
    Initialization(String),

    /// Element or cofactor index outside of the matrix
    #[error("bad access: ({row}, {col}) is out of range for a {height}x{width} matrix")]
    BadAccess {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// Operand dimensions are incompatible for `+`, `-`, `*` or `/`
    #[error("bad operation: {0}")]
    BadOperation(String),

    /// Determinant requested for a non-square matrix
    #[error("bad determinant: matrix {height}x{width} isn't square")]
    BadDeterminant { height: usize, width: usize },

    /// Inverse requested for a non-square or singular matrix
    #[error("bad inverse: {0}")]
    BadInverse(String),

    /// Power requested for a non-square matrix
    #[error("bad pow: matrix {height}x{width} isn't square")]
    BadPow { height: usize, width: usize },
}
