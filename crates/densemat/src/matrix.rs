use num_traits::Float;

use crate::error::MatrixError;

/// Largest matrix size for which [`Matrix::determinant`] stays quiet.
///
/// Cofactor expansion costs O(n!) operations, so a warning is logged for
/// bigger inputs.
pub const DETERMINANT_WARN_SIZE: usize = 10;

/// A dense matrix of real values stored in row-major order.
///
/// The shape is fixed at construction and every instance owns its buffer.
/// Cell contents can be changed through [`Matrix::set`] and
/// [`Matrix::get_mut`]; every other operation allocates a new matrix.
///
/// The type carries no internal synchronization. Sharing a matrix across
/// threads for reading is fine, concurrent mutation needs external locking.
///
/// # Examples
///
/// ```
/// use densemat::Matrix;
///
/// let m = Matrix::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
///
/// assert_eq!(m.shape(), [2, 3]);
/// assert_eq!(m.get(1, 2), Ok(6.0));
/// assert_eq!(m.transpose().shape(), [3, 2]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    height: usize,
    width: usize,
}

/// Type alias for a matrix of `f32` values.
pub type MatrixF32 = Matrix<f32>;

/// Type alias for a matrix of `f64` values.
pub type MatrixF64 = Matrix<f64>;

// returns the number of cells, rejecting empty and overflowing shapes
fn check_dimensions(height: usize, width: usize) -> Result<usize, MatrixError> {
    if height == 0 || width == 0 {
        return Err(MatrixError::invalid_dimensions(height, width));
    }
    height
        .checked_mul(width)
        .ok_or_else(|| MatrixError::invalid_dimensions(height, width))
}

impl<T: Float> Matrix<T> {
    /// Wraps a row-major buffer with the given dimensions.
    ///
    /// # Arguments
    ///
    /// * `data` - The row-major cell values.
    /// * `height` - The number of rows.
    /// * `width` - The number of columns.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimensions`] if either dimension is zero
    /// or `height * width` overflows `usize`, and [`MatrixError::BufferSizeMismatch`] if `data` does not hold exactly
    /// `height * width` values.
    pub fn new(data: Vec<T>, height: usize, width: usize) -> Result<Self, MatrixError> {
        let expected = check_dimensions(height, width)?;
        if data.len() != expected {
            return Err(MatrixError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            height,
            width,
        })
    }

    /// Creates a matrix by copying a row-major slice.
    pub fn from_slice(height: usize, width: usize, data: &[T]) -> Result<Self, MatrixError> {
        Self::new(data.to_vec(), height, width)
    }

    /// Creates a matrix filled with zeros.
    pub fn zeros(height: usize, width: usize) -> Result<Self, MatrixError> {
        let numel = check_dimensions(height, width)?;
        Ok(Self {
            data: vec![T::zero(); numel],
            height,
            width,
        })
    }

    /// Creates a matrix whose cell `(i, j)` is `f(i, j)`.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let m = Matrix::<f64>::from_shape_fn(2, 2, |i, j| (i * 2 + j) as f64).unwrap();
    /// assert_eq!(m.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
    /// ```
    pub fn from_shape_fn<F>(height: usize, width: usize, mut f: F) -> Result<Self, MatrixError>
    where
        F: FnMut(usize, usize) -> T,
    {
        let numel = check_dimensions(height, width)?;
        let data = (0..numel).map(|k| f(k / width, k % width)).collect();
        Ok(Self {
            data,
            height,
            width,
        })
    }

    /// Creates a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimensions`] if there are no rows or the
    /// first row is empty, and [`MatrixError::BufferSizeMismatch`] if the rows
    /// do not all have the same length.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.determinant(), Ok(-2.0));
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let numel = check_dimensions(height, width)?;

        let mut data = Vec::with_capacity(numel);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MatrixError::BufferSizeMismatch {
                    expected: width,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            height,
            width,
        })
    }

    /// Creates a `size x size` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimensions`] if `size` is zero.
    pub fn identity(size: usize) -> Result<Self, MatrixError> {
        Self::from_shape_fn(size, size, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The shape as `[height, width]`.
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        [self.height, self.width]
    }

    /// Total number of cells.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.height == self.width
    }

    /// The row-major cell values.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix and returns its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if row >= self.height {
            return Err(MatrixError::index_out_of_bounds(row, self.height));
        }
        if col >= self.width {
            return Err(MatrixError::index_out_of_bounds(col, self.width));
        }
        Ok(row * self.width + col)
    }

    /// Returns the value at row `row` and column `col`, both zero-based.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if the cell lies outside
    /// the matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        let offset = self.offset(row, col)?;
        Ok(self.data[offset])
    }

    /// Returns a mutable reference to the value at `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        let offset = self.offset(row, col)?;
        Ok(&mut self.data[offset])
    }

    /// Overwrites the value at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if the cell lies outside
    /// the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Returns row `row` as a slice.
    pub fn row(&self, row: usize) -> Result<&[T], MatrixError> {
        let start = self.offset(row, 0)?;
        Ok(&self.data[start..start + self.width])
    }

    /// Applies `f` to every cell and returns the result as a new matrix.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        Self {
            data: self.data.iter().map(|&v| f(v)).collect(),
            height: self.height,
            width: self.width,
        }
    }

    /// Returns the transposed matrix, of shape `[width, height]`.
    pub fn transpose(&self) -> Self {
        let data = (0..self.height * self.width)
            .map(|k| {
                let (j, i) = (k / self.height, k % self.height);
                self.data[i * self.width + j]
            })
            .collect();
        Self {
            data,
            height: self.width,
            width: self.height,
        }
    }

    /// Returns the matrix with row `row` and column `col` deleted.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if `row` or `col` lies
    /// outside the matrix, and [`MatrixError::InvalidDimensions`] if the
    /// result would have no rows or no columns.
    pub fn submatrix(&self, row: usize, col: usize) -> Result<Self, MatrixError> {
        self.offset(row, col)?;
        check_dimensions(self.height - 1, self.width - 1)?;
        Ok(self.minor(row, col))
    }

    // caller guarantees row < height, col < width and both dimensions >= 2
    fn minor(&self, row: usize, col: usize) -> Self {
        let mut data = Vec::with_capacity((self.height - 1) * (self.width - 1));
        for (i, values) in self.data.chunks_exact(self.width).enumerate() {
            if i == row {
                continue;
            }
            data.extend(
                values
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != col)
                    .map(|(_, &v)| v),
            );
        }
        Self {
            data,
            height: self.height - 1,
            width: self.width - 1,
        }
    }

    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// The expansion is O(n!) and meant for small matrices. A warning is
    /// logged when the size exceeds [`DETERMINANT_WARN_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] if the matrix is not square.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]]).unwrap();
    /// assert_eq!(m.determinant(), Ok(6.0));
    /// ```
    pub fn determinant(&self) -> Result<T, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::not_square(self.shape()));
        }
        if self.height > DETERMINANT_WARN_SIZE {
            log::warn!(
                "Cofactor expansion on a {0}x{0} matrix needs O(n!) operations",
                self.height
            );
        }
        Ok(self.cofactor_expansion())
    }

    fn cofactor_expansion(&self) -> T {
        if self.width == 1 {
            return self.data[0];
        }

        self.data[..self.width]
            .iter()
            .enumerate()
            .fold(T::zero(), |det, (i, &v)| {
                let term = v * self.minor(0, i).cofactor_expansion();
                if i % 2 == 0 {
                    det + term
                } else {
                    det - term
                }
            })
    }

    /// Returns the matrix of cofactors, `out[i, j] = (-1)^(i+j) * det(minor(i, j))`.
    ///
    /// The complement of a 1x1 matrix is `[[1]]`, the determinant of its
    /// empty minor.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] if the matrix is not square.
    pub fn complement(&self) -> Result<Self, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::not_square(self.shape()));
        }
        let n = self.height;
        if n == 1 {
            return Self::identity(1);
        }

        Self::from_shape_fn(n, n, |i, j| {
            let minor = self.minor(i, j).cofactor_expansion();
            if (i + j) % 2 == 0 {
                minor
            } else {
                -minor
            }
        })
    }

    /// Returns the inverse, `transpose(complement) / determinant`.
    ///
    /// Singularity is an exact comparison of the determinant against zero.
    /// A nearly singular matrix whose determinant rounds to a tiny non-zero
    /// value is inverted, with correspondingly large entries.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] if the matrix is not square and
    /// [`MatrixError::SingularMatrix`] if its determinant is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(inv.as_slice(), &[-2.0, 1.0, 1.5, -0.5]);
    /// ```
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let det = self.determinant()?;
        if det == T::zero() {
            log::debug!(
                "Refusing to invert a singular {}x{} matrix",
                self.height,
                self.width
            );
            return Err(MatrixError::SingularMatrix);
        }

        let factor = T::one() / det;
        Ok(self.complement()?.transpose().map(|v| factor * v))
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells: Vec<String> = self.data.iter().map(|v| format!("{v:.4}")).collect();
        let width = cells.iter().map(String::len).max().unwrap_or(0);

        for (i, row) in cells.chunks(self.width).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell:>width$}")?;
            }
        }
        Ok(())
    }
}

impl<T> approx::AbsDiffEq for Matrix<T>
where
    T: approx::AbsDiffEq<Epsilon = T> + Copy,
{
    type Epsilon = T;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        <T as approx::AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.height == other.height
            && self.width == other.width
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| <T as approx::AbsDiffEq>::abs_diff_eq(a, b, epsilon))
    }
}

impl<T> approx::RelativeEq for Matrix<T>
where
    T: approx::RelativeEq<Epsilon = T> + Copy,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        <T as approx::RelativeEq>::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.height == other.height
            && self.width == other.width
            && self.data.iter().zip(other.data.iter()).all(|(a, b)| {
                <T as approx::RelativeEq>::relative_eq(a, b, epsilon, max_relative)
            })
    }
}
