use num_traits::Float;

use crate::{error::MatrixError, matrix::Matrix};

fn check_same_shape<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<(), MatrixError> {
    if a.shape() != b.shape() {
        return Err(MatrixError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(())
}

fn zip_map<T, F>(a: &Matrix<T>, b: &Matrix<T>, op: F) -> Result<Matrix<T>, MatrixError>
where
    T: Float,
    F: Fn(T, T) -> T,
{
    check_same_shape(a, b)?;
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| op(x, y))
        .collect();
    Matrix::new(data, a.height(), a.width())
}

/// Returns the transpose of `a`.
///
/// Same as [`Matrix::transpose`].
pub fn transpose<T: Float>(a: &Matrix<T>) -> Matrix<T> {
    a.transpose()
}

/// Adds two matrices element-wise.
///
/// # Arguments
///
/// * `a` - The left operand.
/// * `b` - The right operand.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
///
/// # Example
///
/// ```
/// use densemat::{ops::add, Matrix};
///
/// let a = Matrix::from_rows(&[[1.0, 2.0]]).unwrap();
/// let b = Matrix::from_rows(&[[10.0, 20.0]]).unwrap();
/// assert_eq!(add(&a, &b).unwrap().as_slice(), &[11.0, 22.0]);
/// ```
pub fn add<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    zip_map(a, b, |x, y| x + y)
}

/// Subtracts `b` from `a` element-wise.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
pub fn subtract<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    zip_map(a, b, |x, y| x - y)
}

/// Multiplies every cell of `a` by `scalar`.
pub fn scale<T: Float>(a: &Matrix<T>, scalar: T) -> Matrix<T> {
    a.map(|v| v * scalar)
}

/// Negates every cell of `a`.
pub fn negate<T: Float>(a: &Matrix<T>) -> Matrix<T> {
    scale(a, -T::one())
}

/// Computes the matrix product `a * b`.
///
/// The result has shape `[a.height(), b.width()]` and
/// `out[i, j] = sum_x a[i, x] * b[x, j]`.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] if `a.width() != b.height()`.
///
/// # Example
///
/// ```
/// use densemat::{ops::multiply, Matrix};
///
/// let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
/// let c = Matrix::from_rows(&[[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]).unwrap();
/// let out = multiply(&a, &c).unwrap();
/// assert_eq!(out.shape(), [2, 2]);
/// assert_eq!(out.as_slice(), &[4.0, 5.0, 10.0, 11.0]);
/// ```
pub fn multiply<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    if a.width() != b.height() {
        return Err(MatrixError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }

    let (lhs, rhs) = (a.as_slice(), b.as_slice());
    let (inner, cols) = (a.width(), b.width());

    Matrix::from_shape_fn(a.height(), cols, |i, j| {
        (0..inner).fold(T::zero(), |acc, x| acc + lhs[i * inner + x] * rhs[x * cols + j])
    })
}

// Shape-checked operators return a `Result`, for every owned/borrowed pairing.
macro_rules! impl_checked_binary_op {
    ($trait:ident, $method:ident, $func:ident) => {
        impl<T: Float> std::ops::$trait<&Matrix<T>> for &Matrix<T> {
            type Output = Result<Matrix<T>, MatrixError>;

            fn $method(self, rhs: &Matrix<T>) -> Self::Output {
                $func(self, rhs)
            }
        }

        impl<T: Float> std::ops::$trait<Matrix<T>> for &Matrix<T> {
            type Output = Result<Matrix<T>, MatrixError>;

            fn $method(self, rhs: Matrix<T>) -> Self::Output {
                $func(self, &rhs)
            }
        }

        impl<T: Float> std::ops::$trait<&Matrix<T>> for Matrix<T> {
            type Output = Result<Matrix<T>, MatrixError>;

            fn $method(self, rhs: &Matrix<T>) -> Self::Output {
                $func(&self, rhs)
            }
        }

        impl<T: Float> std::ops::$trait<Matrix<T>> for Matrix<T> {
            type Output = Result<Matrix<T>, MatrixError>;

            fn $method(self, rhs: Matrix<T>) -> Self::Output {
                $func(&self, &rhs)
            }
        }
    };
}

impl_checked_binary_op!(Add, add, add);
impl_checked_binary_op!(Sub, sub, subtract);
impl_checked_binary_op!(Mul, mul, multiply);

// Scalar products in both operand orders.
macro_rules! impl_scalar_mul {
    ($scalar:ty) => {
        impl std::ops::Mul<$scalar> for &Matrix<$scalar> {
            type Output = Matrix<$scalar>;

            fn mul(self, rhs: $scalar) -> Self::Output {
                scale(self, rhs)
            }
        }

        impl std::ops::Mul<$scalar> for Matrix<$scalar> {
            type Output = Matrix<$scalar>;

            fn mul(self, rhs: $scalar) -> Self::Output {
                scale(&self, rhs)
            }
        }

        impl std::ops::Mul<&Matrix<$scalar>> for $scalar {
            type Output = Matrix<$scalar>;

            fn mul(self, rhs: &Matrix<$scalar>) -> Self::Output {
                scale(rhs, self)
            }
        }

        impl std::ops::Mul<Matrix<$scalar>> for $scalar {
            type Output = Matrix<$scalar>;

            fn mul(self, rhs: Matrix<$scalar>) -> Self::Output {
                scale(&rhs, self)
            }
        }
    };
}

impl_scalar_mul!(f32);
impl_scalar_mul!(f64);

impl<T: Float> std::ops::Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Self::Output {
        negate(self)
    }
}

impl<T: Float> std::ops::Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Self::Output {
        negate(&self)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn a23() -> Result<Matrix<f64>, MatrixError> {
        Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])
    }

    #[test]
    fn add_sub() -> Result<(), MatrixError> {
        let a = a23()?;
        let b = Matrix::from_rows(&[[0.5, -1.0, 2.0], [1.0, 1.0, 1.0]])?;
        let sum = add(&a, &b)?;
        assert_eq!(sum.as_slice(), &[1.5, 1.0, 5.0, 5.0, 6.0, 7.0]);
        let diff = subtract(&a, &b)?;
        assert_eq!(diff.as_slice(), &[0.5, 3.0, 1.0, 3.0, 4.0, 5.0]);
        assert_relative_eq!(subtract(&sum, &b)?, a);
        Ok(())
    }

    #[test]
    fn add_shape_mismatch() -> Result<(), MatrixError> {
        let a = a23()?;
        let b = Matrix::<f64>::zeros(3, 2)?;
        assert_eq!(
            add(&a, &b),
            Err(MatrixError::DimensionMismatch {
                left: [2, 3],
                right: [3, 2]
            })
        );
        assert!(subtract(&a, &b).is_err());
        Ok(())
    }

    #[test]
    fn multiply_shapes() -> Result<(), MatrixError> {
        let a = a23()?;
        let c = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]])?;
        let out = multiply(&a, &c)?;
        assert_eq!(out.shape(), [2, 2]);
        assert_eq!(out.as_slice(), &[22.0, 28.0, 49.0, 64.0]);

        let d = Matrix::<f64>::zeros(2, 2)?;
        assert_eq!(
            multiply(&a, &d),
            Err(MatrixError::DimensionMismatch {
                left: [2, 3],
                right: [2, 2]
            })
        );
        Ok(())
    }

    #[test]
    fn multiply_identity_left() -> Result<(), MatrixError> {
        let a = a23()?;
        let i = Matrix::identity(2)?;
        assert_eq!(multiply(&i, &a)?, a);
        Ok(())
    }

    #[test]
    fn scale_commutes() -> Result<(), MatrixError> {
        let a = a23()?;
        let left = 2.0_f64 * &a;
        let right = &a * 2.0_f64;
        assert_eq!(left, right);
        assert_eq!(left.as_slice(), &[2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
        assert_eq!(scale(&a, 2.0), left);
        Ok(())
    }

    #[test]
    fn negate_matches_scale() -> Result<(), MatrixError> {
        let a = a23()?;
        assert_eq!(-&a, scale(&a, -1.0));
        assert_eq!(negate(&a).as_slice(), &[-1.0, -2.0, -3.0, -4.0, -5.0, -6.0]);
        Ok(())
    }

    #[test]
    fn operators() -> Result<(), MatrixError> {
        let a = a23()?;
        let b = a.clone();
        assert_eq!((&a + &b)?, 2.0_f64 * &a);
        assert_eq!((&a - &b)?, Matrix::zeros(2, 3)?);
        let p = (&a * transpose(&b))?;
        assert_eq!(p.as_slice(), &[14.0, 32.0, 32.0, 77.0]);
        assert!((a * b).is_err());
        Ok(())
    }

    #[test]
    fn f32_scalar() -> Result<(), MatrixError> {
        let a = Matrix::<f32>::identity(2)?;
        let out = 0.5_f32 * a;
        assert_eq!(out.as_slice(), &[0.5, 0.0, 0.0, 0.5]);
        Ok(())
    }
}
