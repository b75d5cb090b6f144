use approx::{assert_abs_diff_eq, assert_relative_eq};
use densemat::{
    elementary_add_multiple, elementary_scale, elementary_swap,
    ops::{add, multiply, subtract},
    Matrix, MatrixError,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_matrix(rng: &mut StdRng, height: usize, width: usize) -> Result<Matrix<f64>, MatrixError> {
    Matrix::from_shape_fn(height, width, |_, _| rng.random_range(-10.0..10.0))
}

// diagonally dominant, hence invertible and well conditioned
fn random_invertible(rng: &mut StdRng, size: usize) -> Result<Matrix<f64>, MatrixError> {
    let mut m = random_matrix(rng, size, size)?;
    for i in 0..size {
        let v = m.get(i, i)?;
        m.set(i, i, v + 20.0 * size as f64)?;
    }
    Ok(m)
}

#[test]
fn transpose_is_an_involution() -> Result<(), MatrixError> {
    let mut rng = StdRng::seed_from_u64(0);
    for (h, w) in [(1, 1), (1, 4), (3, 2), (5, 5)] {
        let a = random_matrix(&mut rng, h, w)?;
        assert_eq!(a.transpose().transpose(), a);
    }
    Ok(())
}

#[test]
fn identity_is_neutral() -> Result<(), MatrixError> {
    let mut rng = StdRng::seed_from_u64(1);
    for n in 1..=5 {
        let a = random_matrix(&mut rng, n, n)?;
        let id = Matrix::identity(n)?;
        assert_eq!(multiply(&a, &id)?, a);
        assert_eq!(multiply(&id, &a)?, a);
    }
    Ok(())
}

#[test]
fn inverse_times_matrix_is_identity() -> Result<(), MatrixError> {
    let mut rng = StdRng::seed_from_u64(2);
    for n in 1..=5 {
        let a = random_invertible(&mut rng, n)?;
        let product = multiply(&a, &a.inverse()?)?;
        assert_abs_diff_eq!(product, Matrix::identity(n)?, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn identity_determinant_is_one() -> Result<(), MatrixError> {
    for n in 1..=6 {
        assert_eq!(Matrix::<f64>::identity(n)?.determinant()?, 1.0);
    }
    Ok(())
}

#[test]
fn row_swap_negates_determinant() -> Result<(), MatrixError> {
    let mut rng = StdRng::seed_from_u64(3);
    for n in 2..=5 {
        let a = random_matrix(&mut rng, n, n)?;
        let swapped = multiply(&elementary_swap(n, 0, n - 1)?, &a)?;
        assert_relative_eq!(
            swapped.determinant()?,
            -a.determinant()?,
            epsilon = 1e-9,
            max_relative = 1e-9
        );
    }
    Ok(())
}

#[test]
fn row_scale_and_add_on_determinant() -> Result<(), MatrixError> {
    let a = Matrix::from_rows(&[[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]])?;
    let det = a.determinant()?;

    let scaled = multiply(&elementary_scale(3, 2, 3.0)?, &a)?;
    assert_relative_eq!(scaled.determinant()?, 3.0 * det);

    let added = multiply(&elementary_add_multiple(3, 0, 1, -0.5)?, &a)?;
    assert_relative_eq!(added.determinant()?, det);
    Ok(())
}

#[test]
fn add_then_subtract_round_trips() -> Result<(), MatrixError> {
    let mut rng = StdRng::seed_from_u64(4);
    let a = random_matrix(&mut rng, 3, 4)?;
    let b = random_matrix(&mut rng, 3, 4)?;
    assert_relative_eq!(subtract(&add(&a, &b)?, &b)?, a, epsilon = 1e-12);
    Ok(())
}

#[test]
fn determinant_of_two_by_two() -> Result<(), MatrixError> {
    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
    assert_eq!(a.determinant()?, -2.0);
    Ok(())
}

#[test]
fn inverse_of_two_by_two() -> Result<(), MatrixError> {
    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
    let expected = Matrix::from_rows(&[[-2.0, 1.0], [1.5, -0.5]])?;
    assert_relative_eq!(a.inverse()?, expected);
    Ok(())
}

#[test]
fn identity_times_rectangular() -> Result<(), MatrixError> {
    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
    let b = Matrix::identity(2)?;
    assert_eq!((&b * &a)?, a);
    Ok(())
}

#[test]
fn multiply_checks_inner_dimension() -> Result<(), MatrixError> {
    let a = Matrix::<f64>::zeros(2, 3)?;
    let c = Matrix::<f64>::zeros(3, 2)?;
    let d = Matrix::<f64>::zeros(2, 2)?;
    assert_eq!(multiply(&a, &c)?.shape(), [2, 2]);
    assert!(matches!(
        multiply(&a, &d),
        Err(MatrixError::DimensionMismatch { .. })
    ));
    Ok(())
}

#[test]
fn zero_height_is_rejected() {
    assert!(matches!(
        Matrix::<f64>::new(vec![], 0, 2),
        Err(MatrixError::InvalidDimensions { .. })
    ));
}

#[test]
fn singular_matrix_has_no_inverse() -> Result<(), MatrixError> {
    let a = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]])?;
    assert_eq!(a.inverse(), Err(MatrixError::SingularMatrix));
    Ok(())
}
