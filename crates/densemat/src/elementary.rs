use num_traits::Float;

use crate::{error::MatrixError, matrix::Matrix};

fn check_rows(size: usize, rows: &[usize]) -> Result<(), MatrixError> {
    if size == 0 {
        return Err(MatrixError::invalid_dimensions(size, size));
    }
    match rows.iter().find(|&&row| row >= size) {
        Some(&row) => Err(MatrixError::index_out_of_bounds(row, size)),
        None => Ok(()),
    }
}

/// Creates the elementary matrix that swaps rows `row1` and `row2`.
///
/// Left-multiplying a matrix by the result swaps the two rows. Passing the
/// same row twice yields the identity.
///
/// # Errors
///
/// Returns [`MatrixError::InvalidDimensions`] if `size` is zero and
/// [`MatrixError::IndexOutOfBounds`] if a row is not below `size`.
///
/// # Example
///
/// ```
/// use densemat::{elementary_swap, Matrix};
///
/// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let e = elementary_swap::<f64>(2, 0, 1).unwrap();
/// let swapped = (&e * &m).unwrap();
/// assert_eq!(swapped.as_slice(), &[3.0, 4.0, 1.0, 2.0]);
/// ```
pub fn elementary_swap<T: Float>(
    size: usize,
    row1: usize,
    row2: usize,
) -> Result<Matrix<T>, MatrixError> {
    check_rows(size, &[row1, row2])?;
    let mut m = Matrix::identity(size)?;

    m.set(row1, row1, T::zero())?;
    m.set(row2, row2, T::zero())?;
    m.set(row1, row2, T::one())?;
    m.set(row2, row1, T::one())?;

    Ok(m)
}

/// Creates the elementary matrix that multiplies row `row` by `multiplier`.
///
/// # Errors
///
/// Returns [`MatrixError::InvalidDimensions`] if `size` is zero and
/// [`MatrixError::IndexOutOfBounds`] if `row` is not below `size`.
pub fn elementary_scale<T: Float>(
    size: usize,
    row: usize,
    multiplier: T,
) -> Result<Matrix<T>, MatrixError> {
    check_rows(size, &[row])?;
    let mut m = Matrix::identity(size)?;

    let scaled = m.get(row, row)? * multiplier;
    m.set(row, row, scaled)?;

    Ok(m)
}

/// Creates the elementary matrix that adds `multiplier` times `source_row`
/// to `target_row`.
///
/// The entry at `(target_row, source_row)` is overwritten, so when both rows
/// are equal the result scales that row by `multiplier` instead.
///
/// # Errors
///
/// Returns [`MatrixError::InvalidDimensions`] if `size` is zero and
/// [`MatrixError::IndexOutOfBounds`] if a row is not below `size`.
pub fn elementary_add_multiple<T: Float>(
    size: usize,
    source_row: usize,
    target_row: usize,
    multiplier: T,
) -> Result<Matrix<T>, MatrixError> {
    check_rows(size, &[source_row, target_row])?;
    let mut m = Matrix::identity(size)?;

    m.set(target_row, source_row, multiplier)?;

    Ok(m)
}
