#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `densemat` provides a dense, row-major [`Matrix`] of real values together
//! with the classic textbook operations: transpose, elementary row matrices,
//! submatrices, determinant by cofactor expansion, the complement (cofactor)
//! matrix and the inverse built from it.
//!
//! The algorithms favour clarity over speed. The determinant is O(n!) and the
//! singularity test of [`Matrix::inverse`] compares the determinant against
//! zero exactly, so the crate is meant for small matrices.
//!
//! # Quick Start
//!
//! ```rust
//! use densemat::{Matrix, MatrixError};
//!
//! let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
//! assert_eq!(a.determinant()?, -2.0);
//!
//! let inv = a.inverse()?;
//! let id = (&a * &inv)?;
//! assert_eq!(id, Matrix::identity(2)?);
//!
//! let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]])?;
//! assert_eq!(singular.inverse(), Err(MatrixError::SingularMatrix));
//! # Ok::<(), MatrixError>(())
//! ```

/// Factories for elementary row-operation matrices.
///
/// Left-multiplying by one of these matrices swaps two rows, scales a row or
/// adds a multiple of one row to another.
pub mod elementary;

/// Error types for matrix operations.
///
/// Defines [`MatrixError`] for handling invalid shapes, indices and singular
/// matrices.
pub mod error;

/// The dense matrix type and its decompositions.
pub mod matrix;

/// Element-wise and matrix arithmetic, plus the `std::ops` operator overloads.
pub mod ops;

pub use crate::elementary::{elementary_add_multiple, elementary_scale, elementary_swap};
pub use crate::error::MatrixError;
pub use crate::matrix::{Matrix, MatrixF32, MatrixF64, DETERMINANT_WARN_SIZE};
