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

//! Entrywise norms.  These treat the matrix as one long vector, visited in
//! physical order.

use crate::traits::Field;
use crate::traits::internal::PrimitiveFloat;
use crate::layout::Layout;

use super::types::*;

/// Sum of absolute values.
pub fn l1_norm<const R: usize, const C: usize, X: Field, L: Layout>(m: &Matrix<R, C, X, L>) -> X
where X: PrimitiveFloat,
{
    let mut acc = X::zero();
    for &x in m.as_flat() {
        acc += x.abs();
    }
    acc
}

/// Frobenius norm; the square root of the sum of squares.
pub fn l2_norm<const R: usize, const C: usize, X: Field, L: Layout>(m: &Matrix<R, C, X, L>) -> X
where X: PrimitiveFloat,
{
    let mut acc = X::zero();
    for &x in m.as_flat() {
        acc += x * x;
    }
    acc.sqrt()
}

/// Largest absolute value.  Zero for an empty matrix.
pub fn linf_norm<const R: usize, const C: usize, X: Field, L: Layout>(m: &Matrix<R, C, X, L>) -> X
where X: PrimitiveFloat,
{
    let mut acc = X::zero();
    for &x in m.as_flat() {
        acc = acc.max(x.abs());
    }
    acc
}

impl<const R: usize, const C: usize, X: Field, L: Layout> Matrix<R, C, X, L>
where X: PrimitiveFloat,
{
    /// See [`l1_norm`].
    #[inline(always)]
    pub fn l1_norm(&self) -> X
    { l1_norm(self) }

    /// See [`l2_norm`].
    #[inline(always)]
    pub fn l2_norm(&self) -> X
    { l2_norm(self) }

    /// See [`linf_norm`].
    #[inline(always)]
    pub fn linf_norm(&self) -> X
    { linf_norm(self) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ColMajor;

    #[test]
    fn simple_diagonal() {
        let m = M22::from_rows([[2.0, 0.0], [0.0, 2.0]]);
        assert_eq!(m.l1_norm(), 4.0);
        assert_eq!(m.l2_norm(), 8f64.sqrt());
        assert_eq!(m.linf_norm(), 2.0);
    }

    #[test]
    fn negative_entries() {
        let m = Matrix::<2, 3, f32, ColMajor>::from_rows([[-1.0, 2.0, -7.5], [0.5, -0.5, 3.0]]);
        assert_eq!(l1_norm(&m), 14.5);
        assert_eq!(l2_norm(&Matrix::<1, 2, f32, ColMajor>::from_rows([[-3.0, 4.0]])), 5.0);
        // the first element is not special
        assert_eq!(linf_norm(&m), 7.5);
        assert_eq!(linf_norm(&Matrix::<1, 2, f64, ColMajor>::from_rows([[-3.0, 1.0]])), 3.0);
    }

    #[test]
    fn zero_matrix() {
        assert_eq!(M33::<f64>::zero().l1_norm(), 0.0);
        assert_eq!(M33::<f64>::zero().l2_norm(), 0.0);
        assert_eq!(M33::<f64>::zero().linf_norm(), 0.0);
    }
}
