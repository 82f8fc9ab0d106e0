use crate::{
    error::{CalcError, Result},
    Number,
};
use genmatrix::Matrix;
use log::debug;
use std::{fmt, str::FromStr};

/// An operation the calculator can evaluate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Add,
    Sub,
    Mul,
    Div,
    Det,
    Inverse,
    Rank,
    Transpose,
    Pow,
}

impl Command {
    pub const ALL: [Command; 9] = [
        Command::Add,
        Command::Sub,
        Command::Mul,
        Command::Div,
        Command::Det,
        Command::Inverse,
        Command::Rank,
        Command::Transpose,
        Command::Pow,
    ];

    /// The name used for this command on the first line of a problem
    pub fn name(self) -> &'static str {
        match self {
            Command::Add => "+",
            Command::Sub => "-",
            Command::Mul => "*",
            Command::Div => "/",
            Command::Det => "det",
            Command::Inverse => "inv",
            Command::Rank => "rk",
            Command::Transpose => "t",
            Command::Pow => "pow",
        }
    }

    /// Number of operand matrices that follow the first line
    pub fn operands(self) -> usize {
        match self {
            Command::Add | Command::Sub | Command::Mul | Command::Div => 2,
            _ => 1,
        }
    }

    /// Number of arguments expected after the command name
    pub fn arguments(self) -> usize {
        match self {
            Command::Pow => 1,
            _ => 0,
        }
    }

    /// Runs the command on `operands`, using `args` for commands that take arguments
    ///
    /// Scalar results (`det`, `rk`) are returned as 1x1 matrices.
    pub fn execute<T: Number>(self, args: &[String], operands: &[Matrix<T>]) -> Result<Matrix<T>> {
        if operands.len() != self.operands() {
            return Err(CalcError::OperandCount {
                op: self.to_string(),
                expected: self.operands(),
                given: operands.len(),
            });
        }
        if args.len() < self.arguments() {
            return Err(CalcError::MissingArguments {
                op: self.to_string(),
                expected: self.arguments(),
                given: args.len(),
            });
        }
        debug!("executing {} on {} operand(s)", self, operands.len());

        let a = &operands[0];
        let out = match self {
            Command::Add => (a + &operands[1])?,
            Command::Sub => (a - &operands[1])?,
            Command::Mul => (a * &operands[1])?,
            Command::Div => (a / &operands[1])?,
            Command::Det => Matrix::from_vec(1, 1, vec![a.det()?])?,
            Command::Inverse => a.inverse()?,
            Command::Rank => Matrix::from_vec(1, 1, vec![T::from_wide(a.rank() as f64)])?,
            Command::Transpose => a.transpose(),
            Command::Pow => {
                let power = args[0].parse().map_err(|_| CalcError::InvalidArgument {
                    op: self.to_string(),
                    token: args[0].clone(),
                })?;
                a.pow(power)?
            }
        };
        Ok(out)
    }
}

impl FromStr for Command {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        Command::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| CalcError::UnknownOperation(s.to_owned()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use genmatrix::MatrixError;

    fn m(rows: Vec<Vec<f64>>) -> Matrix<f64> {
        Matrix::try_from(rows).unwrap()
    }

    #[test]
    fn names_round_trip() {
        for c in Command::ALL {
            assert_eq!(c.name().parse::<Command>().unwrap(), c);
        }
        assert!(matches!(
            "sqrt".parse::<Command>(),
            Err(CalcError::UnknownOperation(name)) if name == "sqrt"
        ));
    }

    #[test]
    fn binary_commands() {
        let a = m(vec![vec![1.0, 3.0, 5.0, 1.0], vec![-1.0, 3.0, -2.0, 10.0]]);
        let b = m(vec![
            vec![1.0, 3.0],
            vec![-1.0, 1.0],
            vec![1.0, 0.0],
            vec![10.0, 1.0],
        ]);
        let product = Command::Mul.execute(&[], &[a.clone(), b.clone()]).unwrap();
        assert_eq!(product, m(vec![vec![13.0, 7.0], vec![94.0, 10.0]]));

        let sum = Command::Add.execute(&[], &[a.clone(), a.clone()]).unwrap();
        assert_eq!(sum, m(vec![vec![2.0, 6.0, 10.0, 2.0], vec![-2.0, 6.0, -4.0, 20.0]]));

        let zero = Command::Sub.execute(&[], &[a.clone(), a.clone()]).unwrap();
        assert!(zero.is_zero());

        assert!(matches!(
            Command::Add.execute(&[], &[a, b]),
            Err(CalcError::Matrix(MatrixError::BadOperation(_)))
        ));
    }

    #[test]
    fn scalar_commands() {
        let a = m(vec![
            vec![1.0, 4.0, 0.0, 12.0],
            vec![-1.0, -2.0, 1.0, 1.0],
            vec![0.0, 1.0, 1.0, -1.0],
            vec![7.0, 0.0, 1.0, 2.0],
        ]);
        let det = Command::Det.execute(&[], &[a.clone()]).unwrap();
        assert!((det[(0, 0)] - 325.0).abs() < 1e-9);

        let rank = Command::Rank.execute(&[], std::slice::from_ref(&a)).unwrap();
        assert_eq!(rank, m(vec![vec![4.0]]));
    }

    #[test]
    fn pow_argument() {
        let a = m(vec![vec![1.0, 1.0], vec![1.0, 0.0]]);
        let out = Command::Pow
            .execute(&["5".to_owned()], std::slice::from_ref(&a))
            .unwrap();
        assert_eq!(out, m(vec![vec![8.0, 5.0], vec![5.0, 3.0]]));

        assert!(matches!(
            Command::Pow.execute(&[], std::slice::from_ref(&a)),
            Err(CalcError::MissingArguments {
                expected: 1,
                given: 0,
                ..
            })
        ));
        assert!(matches!(
            Command::Pow.execute(&["-2".to_owned()], std::slice::from_ref(&a)),
            Err(CalcError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn operand_count() {
        let a = Matrix::<f32>::eye(2);
        assert!(matches!(
            Command::Div.execute(&[], std::slice::from_ref(&a)),
            Err(CalcError::OperandCount {
                expected: 2,
                given: 1,
                ..
            })
        ));
    }
}
