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

//! Construction and access for [`Matrix`].
//!
//! Any API here that accepts a flat list of values reads it in row-major
//! order, whatever the layout of the matrix being built.  The layout only
//! shows through `as_flat`, `m[i]` and iteration.


use num_traits::Zero;

use crate::traits::Semiring;
use crate::traits::internal::PrimitiveSemiring;
use crate::layout::{Layout, Table};
use crate::error::ShapeError;

use super::types::*;

pub use crate::products::{
    transpose,
    multiply_ab, multiply_abt, multiply_atb, multiply_atbt,
    multiply_mv, multiply_vm, multiply_md, multiply_dm,
    outer_product, make_diagonal, diagonal,
};
pub use crate::norms::{l1_norm, l2_norm, linf_norm};
pub use crate::homogeneous::{hlift, hproject};

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a matrix from a function on indices.
///
/// The shape of the matrix will be inferred solely from how it
/// is used.  There is also a static method form of this for
/// easily supplying a type hint. (e.g. `M33::from_fn`)
#[inline(always)]
pub fn from_fn<const R: usize, const C: usize, X: Copy, F>(f: F) -> Matrix<R, C, X>
where F: FnMut(usize, usize) -> X,
{ Matrix::from_fn(f) }

/// Construct a matrix from a 2D array (of rows).
///
/// This is intended to be used in places where an array of known
/// shape already exists, and needs to be wrapped into a matrix.
/// Type inference works in the forward direction.
#[inline(always)]
pub fn from_rows<const R: usize, const C: usize, X: Copy>(rows: [[X; C]; R]) -> Matrix<R, C, X>
{ Matrix::from_rows(rows) }

/// Construct an identity matrix (using type inference).
///
/// This is also available as a static method on the matrix types.
#[inline(always)]
pub fn eye<const R: usize, const C: usize, X: Semiring>() -> Matrix<R, C, X>
where X: PrimitiveSemiring,
{ Matrix::identity() }

/// Construct a zero matrix (using type inference).
///
/// This is also available as a static method on the matrix types.
#[inline(always)]
pub fn zero<const R: usize, const C: usize, X: Semiring>() -> Matrix<R, C, X>
where X: PrimitiveSemiring,
{ Matrix::zero() }

/// Compile-time check that a flat array has one element per matrix slot.
struct FlatLen<const R: usize, const C: usize, const N: usize>;

impl<const R: usize, const C: usize, const N: usize> FlatLen<R, C, N> {
    const OK: () = assert!(N == R * C, "flat data must have exactly R * C elements");
}

impl<const R: usize, const C: usize, X: Copy, L: Layout> Matrix<R, C, X, L> {
    /// Construct a matrix from a function of `(row, col)`.
    ///
    /// This is also available as the free function `mat::from_fn`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize, usize) -> X,
    { Matrix { table: Table::from_fn(f) } }

    /// Wrap a table.
    #[inline(always)]
    pub fn from_table(table: Table<R, C, X, L>) -> Self
    { Matrix { table } }

    /// Borrow the underlying storage table.
    #[inline(always)]
    pub fn table(&self) -> &Table<R, C, X, L>
    { &self.table }

    /// Construct from an array of rows.
    #[inline(always)]
    pub fn from_rows(rows: [[X; C]; R]) -> Self
    { Self::from_fn(|r, c| rows[r][c]) }

    /// Construct from exactly `R * C` values in row-major order.
    ///
    /// `N` must equal `R * C`; anything else fails to compile.
    ///
    /// ```
    /// use fixmat_array_types::{Matrix, ColMajor};
    ///
    /// let m = Matrix::<2, 2, i32, ColMajor>::from_row_major([1, 2, 3, 4]);
    /// assert_eq!(m[(0, 1)], 2);
    /// assert_eq!(m.as_flat(), &[1, 3, 2, 4]);
    /// ```
    ///
    /// The length check is evaluated during monomorphization, so `cargo check`
    /// lets a wrong length through and only a full build reports it.
    ///
    /// ```compile_fail
    /// use fixmat_array_types::Matrix;
    ///
    /// let m = Matrix::<2, 2, i32>::from_row_major([1, 2, 3]);
    /// ```
    #[inline]
    pub fn from_row_major<const N: usize>(values: [X; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = FlatLen::<R, C, N>::OK;
        Self::from_fn(|r, c| values[r * C + c])
    }

    /// Construct from a slice of exactly `R * C` values in row-major order.
    ///
    /// This is for data whose length is only known at runtime; a slice of
    /// any other length is an error (it is not truncated or padded).
    pub fn try_from_row_major(values: &[X]) -> Result<Self, ShapeError> {
        if values.len() != R * C {
            return Err(ShapeError::ElementCount { rows: R, cols: C, actual: values.len() });
        }
        Ok(Self::from_fn(|r, c| values[r * C + c]))
    }

    /// Copy the matrix into an array of rows.
    #[inline]
    pub fn to_rows(&self) -> [[X; C]; R]
    { std::array::from_fn(|r| std::array::from_fn(|c| self[(r, c)])) }

    /// Copy the elements into a `Vec` in row-major order.
    pub fn to_row_major_vec(&self) -> Vec<X> {
        let mut out = Vec::with_capacity(R * C);
        for r in 0..R {
            for c in 0..C {
                out.push(self[(r, c)]);
            }
        }
        out
    }

    /// Elements in physical storage order.
    #[inline(always)]
    pub fn as_flat(&self) -> &[X]
    { self.table.flat() }

    /// Elements in physical storage order.
    #[inline(always)]
    pub fn as_flat_mut(&mut self) -> &mut [X]
    { self.table.flat_mut() }

    /// Checked `(row, col)` access.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> Option<&X> {
        match r < R && c < C {
            true => Some(self.table.at(r, c)),
            false => None,
        }
    }

    /// Checked `(row, col)` access.
    #[inline]
    pub fn get_mut(&mut self, r: usize, c: usize) -> Option<&mut X> {
        match r < R && c < C {
            true => Some(self.table.at_mut(r, c)),
            false => None,
        }
    }

    /// Copy out row `r`.
    #[inline]
    pub fn row(&self, r: usize) -> Vector<C, X>
    { Vector::from_fn(|c| self[(r, c)]) }

    /// Copy out column `c`.
    #[inline]
    pub fn col(&self, c: usize) -> Vector<R, X>
    { Vector::from_fn(|r| self[(r, c)]) }

    /// Overwrite row `r`.
    #[inline]
    pub fn set_row(&mut self, r: usize, row: &Vector<C, X>) {
        for c in 0..C {
            self[(r, c)] = row[c];
        }
    }

    /// Overwrite column `c`.
    #[inline]
    pub fn set_col(&mut self, c: usize, col: &Vector<R, X>) {
        for r in 0..R {
            self[(r, c)] = col[r];
        }
    }

    /// Matrix transpose. (does not conjugate)
    #[inline]
    pub fn t(&self) -> Matrix<C, R, X, L>
    { Matrix::from_fn(|r, c| self[(c, r)]) }

    /// Map each scalar element of a matrix.
    #[inline]
    pub fn map<B: Copy, F>(self, mut f: F) -> Matrix<R, C, B, L>
    where F: FnMut(X) -> B,
    { Matrix::from_fn(|r, c| f(self[(r, c)])) }

    /// Apply a fallible function to each scalar element, with short-circuiting.
    ///
    /// Elements are visited in row-major order.
    pub fn try_map<E, B: Copy + Default, F>(self, mut f: F) -> Result<Matrix<R, C, B, L>, E>
    where F: FnMut(X) -> Result<B, E>,
    {
        let mut out = Matrix::<R, C, B, L>::from_fn(|_, _| B::default());
        for r in 0..R {
            for c in 0..C {
                out[(r, c)] = f(self[(r, c)])?;
            }
        }
        Ok(out)
    }

    /// Reinterpret the same logical matrix in another layout.
    #[inline]
    pub fn relayout<L2: Layout>(&self) -> Matrix<R, C, X, L2>
    { Matrix::from_fn(|r, c| self[(r, c)]) }
}

impl<const R: usize, const C: usize, X: Semiring, L: Layout> Matrix<R, C, X, L>
where X: PrimitiveSemiring,
{
    /// Construct from up to `R * C` values in row-major order.
    ///
    /// Values are copied until either the input runs out or the matrix is
    /// full.  Every slot that was not reached is zero, and any input beyond
    /// `R * C` values is ignored.
    pub fn from_row_major_iter<I>(values: I) -> Self
    where I: IntoIterator<Item = X>,
    {
        let mut out = Self::zero();
        let mut values = values.into_iter();
        'fill: for r in 0..R {
            for c in 0..C {
                match values.next() {
                    Some(x) => out[(r, c)] = x,
                    None => break 'fill,
                }
            }
        }
        out
    }

    /// Set every element to zero.
    #[inline]
    pub fn make_zero(&mut self) {
        for x in self.as_flat_mut() {
            *x = X::zero();
        }
    }

    /// Set element `(r, c)` to one and all others to zero.
    ///
    /// If `(r, c)` is out of range, the result is simply the zero matrix.
    #[inline]
    pub fn make_unit(&mut self, r: usize, c: usize) {
        self.make_zero();
        if let Some(x) = self.get_mut(r, c) {
            *x = X::one();
        }
    }

    /// Set the leading `min(R, C)` diagonal elements to one and all others
    /// to zero.  Non-square matrices are fine.
    #[inline]
    pub fn make_identity(&mut self) {
        self.make_zero();
        for i in 0..usize::min(R, C) {
            self[(i, i)] = X::one();
        }
    }

    /// Construct the zero matrix.
    ///
    /// This is also available as the free function `mat::zero`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline]
    pub fn zero() -> Self
    { Matrix { table: Table::filled(X::zero()) } }

    /// Construct a standard basis matrix (see [`Matrix::make_unit`]).
    #[inline]
    pub fn unit(r: usize, c: usize) -> Self {
        let mut m = Self::zero();
        m.make_unit(r, c);
        m
    }

    /// Construct the identity matrix (see [`Matrix::make_identity`]).
    ///
    /// This is also available as the free function `mat::eye`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline]
    pub fn identity() -> Self {
        let mut m = Self::zero();
        m.make_identity();
        m
    }

    /// Test whether every element is zero.
    #[inline]
    pub fn is_zero(&self) -> bool
    { self.as_flat().iter().all(|x| *x == X::zero()) }
}

impl<const R: usize, const C: usize, X: Semiring, L: Layout> Default for Matrix<R, C, X, L>
where X: PrimitiveSemiring,
{
    #[inline(always)]
    fn default() -> Self { Self::zero() }
}

// ---------------------------------------------------------------------------
// Runtime-sized input.

impl<const R: usize, const C: usize, X: Copy, L: Layout> TryFrom<&[X]> for Matrix<R, C, X, L> {
    type Error = ShapeError;

    /// See [`Matrix::try_from_row_major`].
    #[inline]
    fn try_from(values: &[X]) -> Result<Self, ShapeError>
    { Self::try_from_row_major(values) }
}

impl<const R: usize, const C: usize, X: Copy, L: Layout> TryFrom<Vec<Vec<X>>> for Matrix<R, C, X, L> {
    type Error = ShapeError;

    /// Checks that there are `R` rows of `C` elements each.
    fn try_from(rows: Vec<Vec<X>>) -> Result<Self, ShapeError> {
        if rows.len() != R {
            return Err(ShapeError::RowCount { rows: R, cols: C, actual: rows.len() });
        }
        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, v)| v.len() != C) {
            return Err(ShapeError::RowLength { row, rows: R, cols: C, actual: bad.len() });
        }
        Ok(Self::from_fn(|r, c| rows[r][c]))
    }
}

impl<const R: usize, const C: usize, X: Copy, L: Layout> From<[[X; C]; R]> for Matrix<R, C, X, L> {
    #[inline(always)]
    fn from(rows: [[X; C]; R]) -> Self { Self::from_rows(rows) }
}

impl<const R: usize, const C: usize, X: Copy, L: Layout> From<Matrix<R, C, X, L>> for [[X; C]; R] {
    #[inline(always)]
    fn from(m: Matrix<R, C, X, L>) -> Self { m.to_rows() }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{RowMajor, ColMajor};

    #[test]
    fn test_zero_eye() {
        assert_eq!(from_rows([[0.0, 0.0], [0.0, 0.0]]), M22::zero());
        assert_eq!(from_rows([[1.0, 0.0], [0.0, 1.0]]), M22::identity());
        assert_eq!(from_rows([[0, 0, 0], [0, 0, 0], [0, 0, 0]]), M33::<i32>::zero());
        assert_eq!(from_rows([[1, 0, 0], [0, 1, 0], [0, 0, 1]]), M33::<i32>::identity());
        assert_eq!(eye(), M44::<u8>::identity());
        assert!(from_rows([[0, 0], [0, 0]]).is_zero());
        assert!(!from_rows([[0, 1], [0, 0]]).is_zero());
        assert_eq!(M22::<f64>::default(), M22::zero());
    }

    #[test]
    fn identity_of_non_square() {
        fn check<L: Layout>() {
            let wide = Matrix::<2, 4, i32, L>::identity();
            assert_eq!(wide.to_rows(), [[1, 0, 0, 0], [0, 1, 0, 0]]);
            assert_eq!(wide.as_flat().iter().sum::<i32>(), 2);

            let tall = Matrix::<3, 1, i32, L>::identity();
            assert_eq!(tall.to_rows(), [[1], [0], [0]]);
        }
        check::<RowMajor>();
        check::<ColMajor>();
    }

    #[test]
    fn unit_out_of_range_is_zero() {
        assert_eq!(Matrix::<2, 3, i32>::unit(1, 2).to_rows(), [[0, 0, 0], [0, 0, 1]]);
        assert!(Matrix::<2, 3, i32>::unit(2, 0).is_zero());
        assert!(Matrix::<2, 3, i32>::unit(0, 3).is_zero());

        let mut m = Matrix::<2, 3, i32>::from_fn(|_, _| 7);
        m.make_unit(5, 5);
        assert!(m.is_zero());
    }

    #[test]
    fn row_major_input_in_any_layout() {
        fn check<L: Layout>() {
            let values = [1, 2, 3, 4, 5, 6];
            let m = Matrix::<2, 3, i32, L>::from_row_major(values);
            for r in 0..2 {
                for c in 0..3 {
                    assert_eq!(m[(r, c)], values[r * 3 + c]);
                }
            }
            assert_eq!(m.to_row_major_vec(), values.to_vec());
            assert_eq!(Matrix::<2, 3, i32, L>::try_from_row_major(&values), Ok(m));
        }
        check::<RowMajor>();
        check::<ColMajor>();
    }

    #[test]
    fn short_input_is_zero_filled() {
        fn check<L: Layout>() {
            let m = Matrix::<2, 3, f64, L>::from_row_major_iter(vec![1.0, 2.0]);
            assert_eq!(m.to_rows(), [[1.0, 2.0, 0.0], [0.0, 0.0, 0.0]]);

            let m = Matrix::<2, 3, f64, L>::from_row_major_iter(vec![1.0, 2.0, 3.0, 4.0]);
            assert_eq!(m.to_rows(), [[1.0, 2.0, 3.0], [4.0, 0.0, 0.0]]);

            let m = Matrix::<2, 2, i32, L>::from_row_major_iter(1..=9);
            assert_eq!(m.to_rows(), [[1, 2], [3, 4]]);

            assert!(Matrix::<2, 2, f64, L>::from_row_major_iter(None).is_zero());
        }
        check::<RowMajor>();
        check::<ColMajor>();
    }

    #[test]
    fn runtime_shape_errors() {
        assert_eq!(
            Matrix::<2, 3, i32>::try_from_row_major(&[1, 2, 3, 4, 5]),
            Err(ShapeError::ElementCount { rows: 2, cols: 3, actual: 5 }),
        );
        assert_eq!(
            Matrix::<2, 2, i32>::try_from(vec![vec![1, 2]]),
            Err(ShapeError::RowCount { rows: 2, cols: 2, actual: 1 }),
        );
        assert_eq!(
            Matrix::<2, 2, i32>::try_from(vec![vec![1, 2], vec![3, 4, 5]]),
            Err(ShapeError::RowLength { row: 1, rows: 2, cols: 2, actual: 3 }),
        );
        assert_eq!(
            Matrix::<2, 2, i32>::try_from(vec![vec![1, 2], vec![3, 4]]),
            Ok(from_rows([[1, 2], [3, 4]])),
        );
    }

    #[test]
    fn rows_and_cols() {
        let mut m = Matrix::<2, 3, i32, ColMajor>::zero();
        m.set_row(0, &Vector([1, 2, 3]));
        m.set_col(2, &Vector([7, 8]));
        assert_eq!(m.to_rows(), [[1, 2, 7], [0, 0, 8]]);
        assert_eq!(m.row(0), Vector([1, 2, 7]));
        assert_eq!(m.col(2), Vector([7, 8]));
        assert_eq!(m.get(1, 2), Some(&8));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn transpose_twice() {
        let m = Matrix::<2, 3, i32, ColMajor>::from_row_major([1, 2, 3, 4, 5, 6]);
        assert_eq!(m.t().to_rows(), [[1, 4], [2, 5], [3, 6]]);
        assert_eq!(m.t().t(), m);
    }

    #[test]
    fn relayout_keeps_logical_values() {
        let m = Matrix::<2, 3, i32, RowMajor>::from_row_major([1, 2, 3, 4, 5, 6]);
        let n: Matrix<2, 3, i32, ColMajor> = m.relayout();
        assert_eq!(m.to_rows(), n.to_rows());
        assert_eq!(n.as_flat(), &[1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn try_map_short_circuits() {
        let m = from_rows([[1i32, -2], [3, 4]]);
        let mut seen = 0;
        let res = m.try_map(|x| { seen += 1; u32::try_from(x) });
        assert!(res.is_err());
        assert_eq!(seen, 2);
        assert_eq!(from_rows([[1i32, 2]]).try_map(|x| u32::try_from(x)), Ok(from_rows([[1u32, 2]])));
    }
}
