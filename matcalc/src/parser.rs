//! Reader for problem files
//!
//! A problem looks like:
//!
//! ```text
//! pow 3
//! 2 2
//! 1 1
//! 1 0
//! ```
//!
//! The first line holds the operation name followed by its arguments. After it comes every
//! operand the operation needs, each as `height width` and then `height * width` elements in
//! row-major order. Apart from the first line, tokens are only whitespace-delimited, so line
//! breaks inside a matrix don't matter. Anything after the last operand is ignored.

use crate::{
    command::Command,
    error::{CalcError, Result},
    Number,
};
use genmatrix::Matrix;
use log::debug;
use std::str::{FromStr, SplitWhitespace};

/// A parsed problem: an operation, its arguments and its operand matrices
#[derive(Clone, Debug)]
pub struct Problem<T> {
    pub command: Command,
    pub args: Vec<String>,
    pub operands: Vec<Matrix<T>>,
}

struct Tokens<'a>(SplitWhitespace<'a>);

impl<'a> Tokens<'a> {
    fn next_parsed<U: FromStr>(&mut self, what: &'static str) -> Result<U> {
        let token = self.0.next().ok_or(CalcError::UnexpectedEnd { what })?;
        token.parse().map_err(|_| CalcError::InvalidToken {
            what,
            token: token.to_owned(),
        })
    }

    /// Reads `height width` and the elements that follow
    ///
    /// All elements are parsed before the matrix is built, so a bad token never leaves a
    /// partially filled matrix behind.
    fn next_matrix<T: FromStr>(&mut self) -> Result<Matrix<T>> {
        let height: usize = self.next_parsed("height")?;
        let width: usize = self.next_parsed("width")?;
        let len = height
            .checked_mul(width)
            .ok_or_else(|| CalcError::InvalidToken {
                what: "width",
                token: width.to_string(),
            })?;
        let data = (0..len)
            .map(|_| self.next_parsed("elements of the matrix"))
            .collect::<Result<Vec<T>>>()?;
        Ok(Matrix::from_vec(height, width, data)?)
    }
}

impl<T: Number> Problem<T> {
    /// Parses a problem from the full text of a problem file
    pub fn parse(input: &str) -> Result<Self> {
        let (header, body) = input.split_once('\n').unwrap_or((input, ""));
        let mut header = header.split_whitespace();
        let name = header
            .next()
            .ok_or(CalcError::UnexpectedEnd { what: "operation" })?;
        let command: Command = name.parse()?;
        let args: Vec<String> = header.map(str::to_owned).collect();
        if args.len() < command.arguments() {
            return Err(CalcError::MissingArguments {
                op: command.to_string(),
                expected: command.arguments(),
                given: args.len(),
            });
        }

        let mut tokens = Tokens(body.split_whitespace());
        let operands = (0..command.operands())
            .map(|_| tokens.next_matrix())
            .collect::<Result<Vec<_>>>()?;
        debug!(
            "parsed problem {} with {} argument(s) and {} operand(s)",
            command,
            args.len(),
            operands.len()
        );

        Ok(Problem {
            command,
            args,
            operands,
        })
    }

    /// Evaluates the problem
    pub fn solve(&self) -> Result<Matrix<T>> {
        self.command.execute(&self.args, &self.operands)
    }
}
