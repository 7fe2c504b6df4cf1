/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
**                                                                          **
** Be aware that not all of fixmat is provided under this permissive        **
** license, and that the project as a whole is licensed under the GPL 3.0.  **
** ************************************************************************ */

//! Determinants, inverses and linear solves for `fixmat` matrices.
//!
//! The matrices are handed to an [`Eliminate`] implementation as row-major
//! data, whatever their layout.  The functions without a `_with` suffix use
//! [`GaussianElimination`] with zero tolerance.

#[macro_use]
extern crate log;
#[cfg(test)]
#[macro_use]
extern crate fixmat_assert_close;

pub use self::gauss::{Eliminate, Elimination, EliminationRequest, LinearSystem, GaussianElimination};
mod gauss;

use num_traits::Float;
use slice_of_array::prelude::*;

use fixmat_array_types::{Matrix, Vector, Layout, Field};

/// The elimination found no usable pivot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("matrix is singular")]
pub struct SingularMatrixError;

pub mod prelude {
    pub use crate::MatrixDeterminantExt;
    pub use crate::MatrixInverseExt;
}

// ---------------------------------------------------------------------------
// with the default solver

pub fn determinant<const N: usize, X, L>(m: &Matrix<N, N, X, L>) -> X
where X: Field + Float + std::fmt::Debug, L: Layout,
{ determinant_with(&GaussianElimination::default(), m) }

/// The inverse, or a zero matrix if there is none.
pub fn inverse<const N: usize, X, L>(m: &Matrix<N, N, X, L>) -> Matrix<N, N, X, L>
where X: Field + Float + std::fmt::Debug, L: Layout,
{ inverse_reporting(m).0 }

/// The inverse, and whether it exists.
pub fn inverse_reporting<const N: usize, X, L>(m: &Matrix<N, N, X, L>) -> (Matrix<N, N, X, L>, bool)
where X: Field + Float + std::fmt::Debug, L: Layout,
{ inverse_reporting_with(&GaussianElimination::default(), m) }

pub fn try_inverse<const N: usize, X, L>(m: &Matrix<N, N, X, L>) -> Result<Matrix<N, N, X, L>, SingularMatrixError>
where X: Field + Float + std::fmt::Debug, L: Layout,
{ try_inverse_with(&GaussianElimination::default(), m) }

/// Solves `m x = b` for `x`.
pub fn solve<const N: usize, X, L>(m: &Matrix<N, N, X, L>, b: &Vector<N, X>) -> Result<Vector<N, X>, SingularMatrixError>
where X: Field + Float + std::fmt::Debug, L: Layout,
{ solve_with(&GaussianElimination::default(), m, b) }

/// Solves `m X = b` for `X`.
pub fn solve_matrix<const N: usize, const K: usize, X, L>(
    m: &Matrix<N, N, X, L>,
    b: &Matrix<N, K, X, L>,
) -> Result<Matrix<N, K, X, L>, SingularMatrixError>
where X: Field + Float + std::fmt::Debug, L: Layout,
{ solve_matrix_with(&GaussianElimination::default(), m, b) }

// ---------------------------------------------------------------------------
// with any solver

pub fn determinant_with<const N: usize, X, L, E>(solver: &E, m: &Matrix<N, N, X, L>) -> X
where X: Field + Float, L: Layout, E: Eliminate<X> + ?Sized,
{
    let rows = m.to_rows();
    solver.eliminate(N, rows.flat(), EliminationRequest::default()).determinant
}

pub fn inverse_with<const N: usize, X, L, E>(solver: &E, m: &Matrix<N, N, X, L>) -> Matrix<N, N, X, L>
where X: Field + Float, L: Layout, E: Eliminate<X> + ?Sized,
{ inverse_reporting_with(solver, m).0 }

pub fn inverse_reporting_with<const N: usize, X, L, E>(solver: &E, m: &Matrix<N, N, X, L>) -> (Matrix<N, N, X, L>, bool)
where X: Field + Float, L: Layout, E: Eliminate<X> + ?Sized,
{
    let rows = m.to_rows();
    let mut out = [[X::zero(); N]; N];
    let Elimination { invertible, .. } = solver.eliminate(
        N, rows.flat(),
        EliminationRequest::default().with_inverse(out.flat_mut()),
    );
    (Matrix::from_rows(out), invertible)
}

pub fn try_inverse_with<const N: usize, X, L, E>(solver: &E, m: &Matrix<N, N, X, L>) -> Result<Matrix<N, N, X, L>, SingularMatrixError>
where X: Field + Float, L: Layout, E: Eliminate<X> + ?Sized,
{
    match inverse_reporting_with(solver, m) {
        (inv, true) => Ok(inv),
        (_, false) => {
            debug!("no inverse for {}x{} matrix", N, N);
            Err(SingularMatrixError)
        },
    }
}

pub fn solve_with<const N: usize, X, L, E>(solver: &E, m: &Matrix<N, N, X, L>, b: &Vector<N, X>) -> Result<Vector<N, X>, SingularMatrixError>
where X: Field + Float, L: Layout, E: Eliminate<X> + ?Sized,
{
    let mut x = [X::zero(); N];
    run_system(solver, m, &b.0, &mut x, 1)?;
    Ok(Vector(x))
}

pub fn solve_matrix_with<const N: usize, const K: usize, X, L, E>(
    solver: &E,
    m: &Matrix<N, N, X, L>,
    b: &Matrix<N, K, X, L>,
) -> Result<Matrix<N, K, X, L>, SingularMatrixError>
where X: Field + Float, L: Layout, E: Eliminate<X> + ?Sized,
{
    let rhs = b.to_rows();
    let mut x = [[X::zero(); K]; N];
    run_system(solver, m, rhs.flat(), x.flat_mut(), K)?;
    Ok(Matrix::from_rows(x))
}

fn run_system<const N: usize, X, L, E>(
    solver: &E,
    m: &Matrix<N, N, X, L>,
    rhs: &[X],
    solution: &mut [X],
    columns: usize,
) -> Result<(), SingularMatrixError>
where X: Field + Float, L: Layout, E: Eliminate<X> + ?Sized,
{
    let rows = m.to_rows();
    let request = EliminationRequest::default().with_system(rhs, solution, columns);
    match solver.eliminate(N, rows.flat(), request).invertible {
        true => Ok(()),
        false => {
            debug!("cannot solve {}x{} system with {} right-hand sides", N, N, columns);
            Err(SingularMatrixError)
        },
    }
}

// ---------------------------------------------------------------------------

/// Extension trait for `matrix.det()`
pub trait MatrixDeterminantExt {
    type Scalar;

    fn det(&self) -> Self::Scalar;
}

/// Extension trait for `matrix.inv()`
pub trait MatrixInverseExt {
    /// The inverse, or a zero matrix if there is none.
    fn inv(&self) -> Self;
}

impl<const N: usize, X, L> MatrixDeterminantExt for Matrix<N, N, X, L>
where X: Field + Float + std::fmt::Debug, L: Layout,
{
    type Scalar = X;

    fn det(&self) -> X
    { determinant(self) }
}

impl<const N: usize, X, L> MatrixInverseExt for Matrix<N, N, X, L>
where X: Field + Float + std::fmt::Debug, L: Layout,
{
    fn inv(&self) -> Self
    { inverse(self) }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    use fixmat_array_types::{M22, M33, RowMajor, ColMajor};

    fn init_logger() {
        let _ = env_logger::try_init();
    }

    #[test]
    fn scaled_identity() {
        let m = M22::from_rows([[2.0, 0.0], [0.0, 2.0]]);
        assert_eq!(m.det(), 4.0);
        assert_eq!(inverse_reporting(&m), (M22::from_rows([[0.5, 0.0], [0.0, 0.5]]), true));
    }

    #[test]
    fn identity() {
        assert_eq!(determinant(&M33::<f64>::identity()), 1.0);
        assert_eq!(inverse_reporting(&M33::<f64>::identity()), (M33::<f64>::identity(), true));
        assert_eq!(inverse(&Matrix::<5, 5, f32, ColMajor>::identity()), Matrix::identity());
    }

    #[test]
    fn test_inverse_2() {
        let actual = M22::from_rows([[7., 2.], [-11., 4.]]).inv();
        let expected = [
            [ 2./25., -1./25.],
            [11./50.,  7./50.],
        ];
        assert_close!(abs=1e-12, expected, actual.to_rows());
    }

    #[test]
    fn test_inverse_3() {
        let rows = [[1., 2., 4.], [5., 2., 1.], [3., 6., 3.]];
        let expected = [
            [ 0./1.,  1./4., -1./12.],
            [-1./6., -1./8., 19./72.],
            [ 1./3.,  0./1., -1./9. ],
        ];
        let a = Matrix::<3, 3, f64, RowMajor>::from_rows(rows);
        let b = Matrix::<3, 3, f64, ColMajor>::from_rows(rows);
        assert_close!(abs=1e-12, expected, a.inv().to_rows());
        assert_close!(abs=1e-12, expected, b.inv().to_rows());
        assert_close!(abs=1e-12, a.det(), 72.0);
        assert_close!(abs=1e-12, b.det(), 72.0);
    }

    #[test]
    fn singular() {
        init_logger();
        let m = M33::from_rows([[1.0, 2.0, 4.0], [2.0, 4.0, 8.0], [1.0, 1.0, 1.0]]);
        assert_eq!(m.det(), 0.0);
        assert_eq!(inverse_reporting(&m), (M33::<f64>::zero(), false));
        assert_eq!(try_inverse(&m), Err(SingularMatrixError));
        assert_eq!(solve(&m, &Vector([1.0, 1.0, 1.0])), Err(SingularMatrixError));
        assert_eq!(SingularMatrixError.to_string(), "matrix is singular");
    }

    // Diagonally dominant, so comfortably invertible.
    fn random_matrix<const N: usize, L: Layout>(rng: &mut StdRng) -> Matrix<N, N, f64, L> {
        Matrix::from_fn(|r, c| {
            let x = rng.gen_range(-1.0..1.0);
            if r == c { x + 2.0 * N as f64 } else { x }
        })
    }

    #[test]
    fn random_inverses() {
        init_logger();
        let mut rng = StdRng::seed_from_u64(0x1234_5678);
        for _ in 0..20 {
            let m = random_matrix::<6, ColMajor>(&mut rng);
            let inv = try_inverse(&m).unwrap();
            assert_close!(abs=1e-12, (&m * &inv).to_rows(), Matrix::<6, 6, f64, ColMajor>::identity().to_rows());
            assert_close!(abs=1e-12, (&inv * &m).to_rows(), Matrix::<6, 6, f64, ColMajor>::identity().to_rows());
            assert_close!(rel=1e-10, m.det() * inv.det(), 1.0);
        }
    }

    #[test]
    fn random_solves() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let m = random_matrix::<4, RowMajor>(&mut rng);
            let b = Vector::<4>::from_fn(|_| rng.gen_range(-10.0..10.0));
            let x = solve(&m, &b).unwrap();
            assert_close!(abs=1e-10, (&m * &x).0, b.0);

            let bs = Matrix::<4, 2, f64, RowMajor>::from_fn(|_, _| rng.gen_range(-10.0..10.0));
            let xs = solve_matrix(&m, &bs).unwrap();
            assert_close!(abs=1e-10, (&m * &xs).to_rows(), bs.to_rows());
            assert_close!(abs=1e-12, xs.col(1).0, solve(&m, &bs.col(1)).unwrap().0);
        }
    }

    // Checks what the solver is given.
    struct Recording(RefCell<Vec<f64>>);

    impl Eliminate<f64> for Recording {
        fn eliminate(&self, n: usize, matrix: &[f64], request: EliminationRequest<'_, f64>) -> Elimination<f64> {
            *self.0.borrow_mut() = matrix.to_vec();
            if let Some(inverse) = request.inverse {
                inverse.iter_mut().for_each(|x| *x = -1.0);
            }
            Elimination { determinant: n as f64, invertible: false }
        }
    }

    #[test]
    fn solver_always_sees_row_major() {
        let rows = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        let row_major = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];

        let solver = Recording(RefCell::new(vec![]));
        assert_eq!(determinant_with(&solver, &Matrix::<3, 3, f64, ColMajor>::from_rows(rows)), 3.0);
        assert_eq!(*solver.0.borrow(), row_major);

        let solver = Recording(RefCell::new(vec![]));
        let (inv, ok) = inverse_reporting_with(&solver, &Matrix::<3, 3, f64, RowMajor>::from_rows(rows));
        assert_eq!(*solver.0.borrow(), row_major);
        // whatever the solver leaves behind is passed through
        assert!(!ok);
        assert_eq!(inv.to_rows(), [[-1.0; 3]; 3]);
    }

    #[test]
    fn custom_tolerance() {
        let m = M22::from_rows([[1.0, 1.0], [1.0, 1.0 + 1e-12]]);
        assert!(try_inverse(&m).is_ok());
        let strict = GaussianElimination::with_tolerance(1e-9);
        assert_eq!(try_inverse_with(&strict, &m), Err(SingularMatrixError));
        assert_eq!(determinant_with(&strict, &m), 0.0);
    }
}
