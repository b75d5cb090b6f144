use thiserror::Error;

/// An error type for matrix construction and arithmetic.
///
/// Every variant describes a caller-input violation. None of them is
/// transient, so retrying the same call always fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A constructor or size-based factory received a zero dimension.
    #[error("Invalid dimensions: a matrix needs at least one row and one column, got {height}x{width}")]
    InvalidDimensions {
        /// Requested number of rows
        height: usize,
        /// Requested number of columns
        width: usize,
    },

    /// The backing buffer does not hold exactly `height * width` values.
    #[error("Buffer size mismatch: expected {expected} elements, but got {actual}")]
    BufferSizeMismatch {
        /// Number of elements implied by the shape
        expected: usize,
        /// Number of elements in the buffer
        actual: usize,
    },

    /// A binary operation received operands of incompatible shapes.
    ///
    /// For `add` and `subtract` the shapes must be equal, for `multiply`
    /// the width of the left operand must equal the height of the right one.
    #[error("Dimension mismatch: {left:?} is not compatible with {right:?}")]
    DimensionMismatch {
        /// Shape of the left operand as `[height, width]`
        left: [usize; 2],
        /// Shape of the right operand as `[height, width]`
        right: [usize; 2],
    },

    /// Determinant, complement and inverse need a square matrix.
    #[error("Matrix must be square, got {height}x{width}")]
    NotSquare {
        /// Number of rows
        height: usize,
        /// Number of columns
        width: usize,
    },

    /// The determinant is exactly zero, so no inverse exists.
    #[error("Matrix is singular: determinant is zero, inverse does not exist")]
    SingularMatrix,

    /// A row or column index lies outside the matrix.
    ///
    /// Reported for the first offending axis, rows before columns.
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index that was attempted
        index: usize,
        /// The size of the dimension being indexed
        size: usize,
    },
}

impl MatrixError {
    pub(crate) fn invalid_dimensions(height: usize, width: usize) -> Self {
        Self::InvalidDimensions { height, width }
    }

    pub(crate) fn index_out_of_bounds(index: usize, size: usize) -> Self {
        Self::IndexOutOfBounds { index, size }
    }

    pub(crate) fn not_square(shape: [usize; 2]) -> Self {
        Self::NotSquare {
            height: shape[0],
            width: shape[1],
        }
    }
}
