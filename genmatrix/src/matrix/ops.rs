//! Arithmetic on matrices: `+`, `-`, `*` (matrix and scalar) and `/`
//!
//! Fallible operators are implemented with `Output = Result<Matrix<_>>` so dimension mismatches
//! surface as [`MatrixError::BadOperation`] instead of a panic. The result element type follows
//! the aliases in [`crate::element`].

use super::Matrix;
use crate::{
    element::{AddOutput, DivOutput, DotOutput, Element, MulOutput, SubOutput},
    error::{MatrixError, Result},
};
use num_traits::Zero;
use std::ops::{Add, Div, Mul, Sub};

impl<A> Matrix<A> {
    /// Combines two equally-shaped matrices element by element
    fn zip_with<B, U>(&self, rhs: &Matrix<B>, mut f: impl FnMut(&A, &B) -> U) -> Result<Matrix<U>> {
        if self.height != rhs.height || self.width != rhs.width {
            return Err(MatrixError::BadOperation(format!(
                "sizes of matrices aren't equal: {}x{} != {}x{}",
                self.height, self.width, rhs.height, rhs.width
            )));
        }
        Ok(Matrix {
            height: self.height,
            width: self.width,
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
        })
    }

    /// Multiplies every element by `scalar` from the left
    ///
    /// This covers scalar types that the `scalar * &matrix` operator impls don't, e.g. scalars of
    /// a user-defined type.
    pub fn scaled_by<S>(&self, scalar: S) -> Matrix<MulOutput<S, A>>
    where
        S: Clone + Mul<A>,
        A: Clone,
    {
        scale(scalar, self)
    }
}

/// `scalar * matrix`, the scalar always on the left
pub fn scale<S, T>(scalar: S, matrix: &Matrix<T>) -> Matrix<MulOutput<S, T>>
where
    S: Clone + Mul<T>,
    T: Clone,
{
    matrix.map(|x| scalar.clone() * x.clone())
}

/// Standard matrix product; requires `a.width() == b.height()`
fn multiply<A, B>(a: &Matrix<A>, b: &Matrix<B>) -> Result<Matrix<DotOutput<A, B>>>
where
    A: Clone + Mul<B>,
    B: Clone,
    MulOutput<A, B>: Add,
    DotOutput<A, B>: Zero + Add<MulOutput<A, B>, Output = DotOutput<A, B>>,
{
    if a.width != b.height {
        return Err(MatrixError::BadOperation(format!(
            "sizes of matrices aren't compatible for multiplication: {}x{} and {}x{}",
            a.height, a.width, b.height, b.width
        )));
    }

    let mut data = Vec::with_capacity(a.height * b.width);
    for i in 0..a.height {
        let row = a.row(i);
        for j in 0..b.width {
            let mut sum = <DotOutput<A, B> as Zero>::zero();
            for (k, x) in row.iter().enumerate() {
                sum = sum + x.clone() * b.data[k * b.width + j].clone();
            }
            data.push(sum);
        }
    }

    Ok(Matrix {
        height: a.height,
        width: b.width,
        data,
    })
}

macro_rules! impl_element_wise_op {
    ($($trait:ident => $alias:ident),* $(,)?) => {
        $(
            paste::paste! {
                impl<'a, 'b, A, B> $trait<&'b Matrix<B>> for &'a Matrix<A>
                where
                    A: Clone + $trait<B>,
                    B: Clone,
                {
                    type Output = Result<Matrix<$alias<A, B>>>;

                    fn [<$trait:lower>](self, rhs: &'b Matrix<B>) -> Self::Output {
                        self.zip_with(rhs, |a, b| a.clone().[<$trait:lower>](b.clone()))
                    }
                }

                impl<A, B> $trait<Matrix<B>> for Matrix<A>
                where
                    A: Clone + $trait<B>,
                    B: Clone,
                {
                    type Output = Result<Matrix<$alias<A, B>>>;

                    fn [<$trait:lower>](self, rhs: Matrix<B>) -> Self::Output {
                        (&self).[<$trait:lower>](&rhs)
                    }
                }
            }
        )*
    };
}

impl_element_wise_op!(Add => AddOutput, Sub => SubOutput);

impl<'a, 'b, A, B> Mul<&'b Matrix<B>> for &'a Matrix<A>
where
    A: Clone + Mul<B>,
    B: Clone,
    MulOutput<A, B>: Add,
    DotOutput<A, B>: Zero + Add<MulOutput<A, B>, Output = DotOutput<A, B>>,
{
    type Output = Result<Matrix<DotOutput<A, B>>>;

    fn mul(self, rhs: &'b Matrix<B>) -> Self::Output {
        multiply(self, rhs)
    }
}

impl<A, B> Mul<Matrix<B>> for Matrix<A>
where
    A: Clone + Mul<B>,
    B: Clone,
    MulOutput<A, B>: Add,
    DotOutput<A, B>: Zero + Add<MulOutput<A, B>, Output = DotOutput<A, B>>,
{
    type Output = Result<Matrix<DotOutput<A, B>>>;

    fn mul(self, rhs: Matrix<B>) -> Self::Output {
        multiply(&self, &rhs)
    }
}

/// `a / b` is `a * b.inverse()`, with both sides coerced to their real element types
///
/// # Errors
///
/// [`MatrixError::BadOperation`] if `b` isn't square or `a.width() != b.height()`, and any
/// [`MatrixError::BadInverse`] from inverting `b`
impl<'a, 'b, A, B> Div<&'b Matrix<B>> for &'a Matrix<A>
where
    A: Element,
    B: Element,
    A::Real: Mul<B::Real>,
    MulOutput<A::Real, B::Real>: Add,
    DivOutput<A, B>: Zero + Add<MulOutput<A::Real, B::Real>, Output = DivOutput<A, B>>,
{
    type Output = Result<Matrix<DivOutput<A, B>>>;

    fn div(self, rhs: &'b Matrix<B>) -> Self::Output {
        if !rhs.is_square() {
            return Err(MatrixError::BadOperation(format!(
                "denominator {}x{} isn't square",
                rhs.height, rhs.width
            )));
        }
        let inverse = rhs.inverse()?;
        multiply::<A::Real, B::Real>(&self.map(Element::to_real), &inverse)
    }
}

macro_rules! impl_scalar_mul {
    ($($s:ty),* $(,)?) => {
        $(
            impl<'a, T> Mul<&'a Matrix<T>> for $s
            where
                $s: Mul<T>,
                T: Clone,
            {
                type Output = Matrix<MulOutput<$s, T>>;

                #[inline]
                fn mul(self, rhs: &'a Matrix<T>) -> Self::Output {
                    scale(self, rhs)
                }
            }

            impl<T> Mul<Matrix<T>> for $s
            where
                $s: Mul<T>,
                T: Clone,
            {
                type Output = Matrix<MulOutput<$s, T>>;

                #[inline]
                fn mul(self, rhs: Matrix<T>) -> Self::Output {
                    scale(self, &rhs)
                }
            }
        )*
    };
}

impl_scalar_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    fn small_ints(rng: &mut SmallRng, height: usize, width: usize) -> Matrix<i64> {
        Matrix::build(height, width, |_, _| rng.random_range(-20..=20)).unwrap()
    }

    #[test]
    fn addition() {
        let a = Matrix::from_rows([[1i32, 2, 3, 4, 5], [1, 2, 3, 4, 5], [5, 6, 1, 2, 3]]).unwrap();
        let b =
            Matrix::from_rows([[0i32, 2, 1, 4, 5], [-10, 2, 30, 4, 25], [5, -6, 1, 2, 3]]).unwrap();
        let sum = (&a + &b).unwrap();
        for i in 0..a.height() {
            for j in 0..a.width() {
                assert_eq!(sum[(i, j)], a[(i, j)] + b[(i, j)]);
            }
        }

        let err = (&a + &Matrix::<i32>::eye(3)).unwrap_err();
        assert_eq!(
            err,
            MatrixError::BadOperation("sizes of matrices aren't equal: 3x5 != 3x3".to_owned())
        );
    }

    #[test]
    fn subtraction() {
        let a = Matrix::from_rows([[1i32, 2, 3, 4, 5], [1, 2, 3, 4, 5], [5, 6, 1, 2, 3]]).unwrap();
        let b =
            Matrix::from_rows([[0i32, 2, 1, 4, 5], [-10, 2, 30, 4, 25], [5, -6, 1, 2, 3]]).unwrap();
        let diff = (a.clone() - b.clone()).unwrap();
        for i in 0..a.height() {
            for j in 0..a.width() {
                assert_eq!(diff[(i, j)], a[(i, j)] - b[(i, j)]);
            }
        }

        assert!(matches!(
            &a - &Matrix::<i32>::eye(3),
            Err(MatrixError::BadOperation(_))
        ));
    }

    #[test]
    fn add_then_subtract() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..10 {
            let a = small_ints(&mut rng, 6, 9);
            let b = small_ints(&mut rng, 6, 9);
            let back = (&(&a + &b).unwrap() - &b).unwrap();
            assert_eq!(back, a);
        }
    }

    #[test]
    fn multiplication() {
        assert!(matches!(
            &Matrix::<i32>::eye(3) * &Matrix::<i32>::eye(4),
            Err(MatrixError::BadOperation(_))
        ));

        let a = Matrix::from_rows([[1i32, 3, 5, 1], [-1, 3, -2, 10]]).unwrap();
        let b = Matrix::from_rows([[1i32, 3], [-1, 1], [1, 0], [10, 1]]).unwrap();
        let axb = Matrix::from_rows([[13, 7], [94, 10]]).unwrap();
        let bxa = Matrix::from_rows([
            [-2, 12, -1, 31],
            [-2, 0, -7, 9],
            [1, 3, 5, 1],
            [9, 33, 48, 20],
        ])
        .unwrap();
        assert_eq!((&a * &b).unwrap(), axb);
        assert_eq!((b * a).unwrap(), bxa);
    }

    #[test]
    fn identity_is_neutral() {
        let mut rng = SmallRng::seed_from_u64(1);
        for n in [1, 2, 5, 12] {
            let a = small_ints(&mut rng, n, n);
            let id = Matrix::<i64>::eye(n);
            assert_eq!((&a * &id).unwrap(), a);
            assert_eq!((&id * &a).unwrap(), a);
        }
    }

    #[test]
    fn empty_product() {
        let e = Matrix::<f64>::default();
        assert_eq!((&e * &e).unwrap(), e);
        assert_eq!((&e + &e).unwrap(), e);
    }

    #[test]
    fn scalar() {
        let a = Matrix::from_rows([[1i32, -2], [3, 0]]).unwrap();
        assert_eq!(3i32 * &a, Matrix::from_rows([[3, -6], [9, 0]]).unwrap());
        assert_eq!(
            0.5f64 * Matrix::from_rows([[1.0f64, 4.0]]).unwrap(),
            Matrix::from_rows([[0.5f64, 2.0]]).unwrap()
        );
        assert_eq!(a.scaled_by(-1i32), Matrix::from_rows([[-1, 2], [-3, 0]]).unwrap());
    }

    #[test]
    fn division() {
        let a = Matrix::from_rows([[1i32, 2, 3], [4, 5, 6], [7, 8, 8]]).unwrap();
        let q = (&a / &a).unwrap();
        for i in 0..q.height() {
            for j in 0..q.width() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((q[(i, j)] - expected).abs() < 1e-6);
            }
        }

        let rect = Matrix::from_rows([[1i32, 2, 3]]).unwrap();
        assert!(matches!(&a / &rect, Err(MatrixError::BadOperation(_))));

        let singular = Matrix::from_rows([[1i32, 2], [2, 4]]).unwrap();
        assert!(matches!(
            &Matrix::<i32>::eye(2) / &singular,
            Err(MatrixError::BadInverse(_))
        ));
    }

    /// An element that only combines with `i32`, producing a different type
    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Cents(i64);

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Ledger(i64);

    impl Add<i32> for Cents {
        type Output = Ledger;
        fn add(self, rhs: i32) -> Ledger {
            Ledger(self.0 + i64::from(rhs))
        }
    }

    impl Mul<i32> for Cents {
        type Output = Ledger;
        fn mul(self, rhs: i32) -> Ledger {
            Ledger(self.0 * i64::from(rhs))
        }
    }

    impl Add for Ledger {
        type Output = Ledger;
        fn add(self, rhs: Ledger) -> Ledger {
            Ledger(self.0 + rhs.0)
        }
    }

    impl Zero for Ledger {
        fn zero() -> Self {
            Ledger(0)
        }

        fn is_zero(&self) -> bool {
            self.0 == 0
        }
    }

    impl PartialEq<i64> for Ledger {
        fn eq(&self, other: &i64) -> bool {
            self.0 == *other
        }
    }

    #[test]
    fn mixed_element_types() {
        let cents = Matrix::from_rows([[Cents(1), Cents(2)], [Cents(3), Cents(4)]]).unwrap();
        let ints = Matrix::from_rows([[10i32, 20], [30, 40]]).unwrap();

        let sum: Matrix<AddOutput<Cents, i32>> = (&cents + &ints).unwrap();
        assert_eq!(
            sum,
            Matrix::from_rows([[Ledger(11), Ledger(22)], [Ledger(33), Ledger(44)]]).unwrap()
        );
        assert_eq!(sum, Matrix::from_rows([[11i64, 22], [33, 44]]).unwrap());
        assert_ne!(sum, Matrix::from_rows([[11i64, 22, 0], [33, 44, 0]]).unwrap());

        let product: Matrix<DotOutput<Cents, i32>> = (&cents * &ints).unwrap();
        assert_eq!(product, Matrix::from_rows([[70i64, 100], [150, 220]]).unwrap());

        assert!(matches!(
            &cents + &Matrix::<i32>::eye(3),
            Err(MatrixError::BadOperation(_))
        ));
    }

    #[test]
    fn mixed_division() {
        let a = Matrix::from_rows([[1i32, 2], [3, 4]]).unwrap();
        let b = Matrix::from_rows([[2.0f64, 0.0], [0.0, 2.0]]).unwrap();
        let q: Matrix<f64> = (&a / &b).unwrap();
        assert_eq!(q, Matrix::from_rows([[0.5, 1.0], [1.5, 2.0]]).unwrap());

        let half: Matrix<f64> = (&b / &Matrix::<i64>::eye(2)).unwrap();
        assert_eq!(half, b);
    }

    #[test]
    fn mixed_float_precision() {
        let a = Matrix::from_rows([[2.0f32, 0.0], [0.0, 4.0]]).unwrap();
        let q: Matrix<f32> = (&a / &a).unwrap();
        assert_eq!(q, Matrix::<f32>::eye(2));
    }
}
