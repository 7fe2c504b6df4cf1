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

//! The elimination collaborator.
//!
//! Everything here works on plain row-major slices; the matrix types never
//! show up.  This keeps the solver independent of storage layout, and lets
//! callers plug in their own solver through [`Eliminate`].

use std::fmt;

use ndarray::{s, ArrayViewMut2, Axis, Zip};
use num_traits::Float;

use fixmat_array_types::Field;

/// A right-hand side for `A X = B`, together with space for the solution.
///
/// Both buffers are row-major `n x columns`.
#[derive(Debug)]
pub struct LinearSystem<'a, X> {
    pub rhs: &'a [X],
    pub solution: &'a mut [X],
    pub columns: usize,
}

/// The outputs wanted from an elimination, beyond the determinant.
#[derive(Debug)]
pub struct EliminationRequest<'a, X> {
    /// Receives the row-major inverse.  Must have `n * n` elements.
    pub inverse: Option<&'a mut [X]>,
    pub system: Option<LinearSystem<'a, X>>,
}

impl<'a, X> Default for EliminationRequest<'a, X> {
    fn default() -> Self
    { EliminationRequest { inverse: None, system: None } }
}

impl<'a, X> EliminationRequest<'a, X> {
    pub fn with_inverse(mut self, inverse: &'a mut [X]) -> Self
    { self.inverse = Some(inverse); self }

    pub fn with_system(mut self, rhs: &'a [X], solution: &'a mut [X], columns: usize) -> Self
    { self.system = Some(LinearSystem { rhs, solution, columns }); self }
}

/// What an elimination always reports.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Elimination<X> {
    pub determinant: X,
    pub invertible: bool,
}

/// A solver for dense square systems.
///
/// `matrix` is `n x n` in row-major order.  When `invertible` comes back
/// false, the contents of the requested buffers are up to the implementation.
pub trait Eliminate<X> {
    fn eliminate(&self, n: usize, matrix: &[X], request: EliminationRequest<'_, X>) -> Elimination<X>;
}

impl<'e, X, E: Eliminate<X> + ?Sized> Eliminate<X> for &'e E {
    fn eliminate(&self, n: usize, matrix: &[X], request: EliminationRequest<'_, X>) -> Elimination<X>
    { (**self).eliminate(n, matrix, request) }
}

/// Gauss-Jordan elimination with full pivoting.
///
/// A pivot whose magnitude is not greater than `tolerance` means the matrix
/// is singular.  In that case the determinant is zero and any inverse or
/// solution buffers are filled with zeros.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GaussianElimination<X = f64> {
    pub tolerance: X,
}

impl<X: Field + Float> Default for GaussianElimination<X> {
    fn default() -> Self
    { GaussianElimination { tolerance: X::zero() } }
}

impl<X: Field + Float> GaussianElimination<X> {
    pub fn with_tolerance(tolerance: X) -> Self
    { GaussianElimination { tolerance } }
}

// Swap two distinct rows (axis 0) or columns (axis 1).
fn swap_lanes<X>(m: &mut ArrayViewMut2<'_, X>, axis: Axis, a: usize, b: usize) {
    let (mut x, mut y) = match axis {
        Axis(0) => m.multi_slice_mut((s![a, ..], s![b, ..])),
        _ => m.multi_slice_mut((s![.., a], s![.., b])),
    };
    Zip::from(&mut x).and(&mut y).for_each(|x, y| std::mem::swap(x, y));
}

// row[target] -= factor * row[pivot]
fn subtract_row<X: Float>(m: &mut ArrayViewMut2<'_, X>, target: usize, pivot: usize, factor: X) {
    let (mut target, pivot) = m.multi_slice_mut((s![target, ..], s![pivot, ..]));
    Zip::from(&mut target).and(&pivot).for_each(|t, &p| *t = *t - p * factor);
}

impl<X: Field + Float + fmt::Debug> Eliminate<X> for GaussianElimination<X> {
    fn eliminate(&self, n: usize, matrix: &[X], request: EliminationRequest<'_, X>) -> Elimination<X> {
        assert_eq!(
            matrix.len(), n * n,
            "elimination input has {} elements, but n = {}", matrix.len(), n,
        );
        let EliminationRequest { inverse, system } = request;

        // The matrix is inverted in place, either in the caller's inverse
        // buffer or in scratch space.
        let want_inverse = inverse.is_some();
        let mut scratch;
        let work: &mut [X] = match inverse {
            Some(buf) => {
                assert_eq!(buf.len(), n * n, "inverse buffer has wrong length for n = {}", n);
                buf
            },
            None => {
                scratch = vec![X::zero(); n * n];
                &mut scratch[..]
            },
        };
        work.copy_from_slice(matrix);
        let mut a = ArrayViewMut2::from_shape((n, n), work).expect("(BUG) length was checked");

        let mut b = match system {
            Some(LinearSystem { rhs, solution, columns }) => {
                assert_eq!(rhs.len(), n * columns, "rhs has wrong length for {}x{}", n, columns);
                assert_eq!(solution.len(), n * columns, "solution has wrong length for {}x{}", n, columns);
                solution.copy_from_slice(rhs);
                Some(ArrayViewMut2::from_shape((n, columns), solution).expect("(BUG) length was checked"))
            },
            None => None,
        };

        let mut row_index = vec![0; n];
        let mut col_index = vec![0; n];
        let mut pivoted = vec![false; n];
        let mut odd = false;
        let mut determinant = X::one();

        for step in 0..n {
            // largest magnitude among the unpivoted rows and columns
            let mut max_value = X::zero();
            let (mut row, mut col) = (0, 0);
            for r in (0..n).filter(|&r| !pivoted[r]) {
                for c in (0..n).filter(|&c| !pivoted[c]) {
                    let value = a[[r, c]].abs();
                    if value > max_value {
                        max_value = value;
                        row = r;
                        col = c;
                    }
                }
            }

            if !(max_value > self.tolerance) {
                debug!("singular matrix: best pivot at step {} of {} is {:?}", step, n, max_value);
                if want_inverse {
                    a.fill(X::zero());
                }
                if let Some(b) = &mut b {
                    b.fill(X::zero());
                }
                return Elimination { determinant: X::zero(), invertible: false };
            }
            trace!("pivot {}: ({}, {}) = {:?}", step, row, col, a[[row, col]]);

            pivoted[col] = true;
            if row != col {
                odd = !odd;
                swap_lanes(&mut a, Axis(0), row, col);
                if let Some(b) = &mut b {
                    swap_lanes(b, Axis(0), row, col);
                }
            }
            row_index[step] = row;
            col_index[step] = col;

            // scale the pivot row so the pivot becomes one
            let diagonal = a[[col, col]];
            determinant = determinant * diagonal;
            let scale = diagonal.recip();
            a[[col, col]] = X::one();
            a.row_mut(col).map_inplace(|x| *x = *x * scale);
            if let Some(b) = &mut b {
                b.row_mut(col).map_inplace(|x| *x = *x * scale);
            }

            // clear the pivot column in every other row
            for r in (0..n).filter(|&r| r != col) {
                let save = a[[r, col]];
                a[[r, col]] = X::zero();
                subtract_row(&mut a, r, col, save);
                if let Some(b) = &mut b {
                    subtract_row(b, r, col, save);
                }
            }
        }

        if want_inverse {
            for step in (0..n).rev() {
                if row_index[step] != col_index[step] {
                    swap_lanes(&mut a, Axis(1), row_index[step], col_index[step]);
                }
            }
        }

        if odd {
            determinant = -determinant;
        }
        Elimination { determinant, invertible: true }
    }
}
