//! Error types for the calculator

use genmatrix::MatrixError;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, CalcError>;

/// Everything that can stop a problem from being read or evaluated
#[derive(Error, Debug)]
pub enum CalcError {
    /// The operation named on the first line isn't known
    #[error("invalid operation \"{0}\"")]
    UnknownOperation(String),

    /// Fewer arguments than the operation needs were given on the first line
    #[error("not enough arguments for operation {op}: {expected} expected, but {given} given")]
    MissingArguments {
        op: String,
        expected: usize,
        given: usize,
    },

    /// The input ended before every dimension and element was read
    #[error("not enough args or elements: missing {what}")]
    UnexpectedEnd { what: &'static str },

    /// A dimension or element token couldn't be parsed
    #[error("error in getting {what}: \"{token}\"")]
    InvalidToken { what: &'static str, token: String },

    /// An operation argument (e.g. the exponent of `pow`) couldn't be parsed
    #[error("invalid argument \"{token}\" for operation {op}")]
    InvalidArgument { op: String, token: String },

    /// A command was handed the wrong number of operand matrices
    #[error("operation {op} takes {expected} operands, but {given} given")]
    OperandCount {
        op: String,
        expected: usize,
        given: usize,
    },

    /// The matrix engine rejected an operand or an operation
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    /// Get exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io(_) => ExitCode::from(3),
            Self::UnknownOperation(_)
            | Self::MissingArguments { .. }
            | Self::UnexpectedEnd { .. }
            | Self::InvalidToken { .. }
            | Self::InvalidArgument { .. }
            | Self::OperandCount { .. }
            | Self::Matrix(MatrixError::Initialization(_)) => ExitCode::from(4),
            Self::Matrix(_) => ExitCode::from(5),
        }
    }
}
