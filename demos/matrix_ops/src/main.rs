use argh::FromArgs;
use rand::{rngs::StdRng, Rng, SeedableRng};

use densemat::{Matrix, MatrixError};

#[derive(FromArgs, Debug)]
/// Compute the determinant and inverse of a random square matrix.
struct Args {
    /// number of rows and columns of the matrix
    #[argh(option, short = 's', default = "3")]
    size: usize,

    /// seed for the random number generator
    #[argh(option, default = "42")]
    seed: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let a = Matrix::<f64>::from_shape_fn(args.size, args.size, |_, _| {
        rng.random_range(-9..=9) as f64
    })?;
    log::info!("Generated a {}x{} matrix with seed {}", args.size, args.size, args.seed);

    println!("A =\n{a}\n");
    println!("det(A) = {:.4}\n", a.determinant()?);

    let inv = match a.inverse() {
        Ok(inv) => inv,
        Err(MatrixError::SingularMatrix) => {
            println!("A is singular, no inverse exists");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    println!("A^-1 =\n{inv}\n");

    let residual = ((&a * &inv)? - Matrix::identity(args.size)?)?
        .as_slice()
        .iter()
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    println!("max |A * A^-1 - I| = {residual:.3e}");

    Ok(())
}
