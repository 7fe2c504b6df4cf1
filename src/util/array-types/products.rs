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

//! Matrix products and friends.
//!
//! Every sum here is accumulated the same way: start from zero and add the
//! terms in order of the shared index.  (`Iterator::sum` is avoided because
//! for floats it is allowed to start from `-0.0`.)  Because the order is
//! fixed, the transposed variants agree *exactly* with the equivalent
//! `multiply_ab` on explicitly transposed inputs.

use crate::traits::Semiring;
use crate::traits::internal::PrimitiveSemiring;
use crate::layout::Layout;
use crate::vee;

use super::types::*;

#[inline(always)]
fn accumulate<X, F>(n: usize, mut term: F) -> X
where
    X: Semiring + PrimitiveSemiring,
    F: FnMut(usize) -> X,
{
    let mut acc = X::zero();
    for i in 0..n {
        acc += term(i);
    }
    acc
}

/// Transpose a matrix.  Same as [`Matrix::t`].
#[inline(always)]
pub fn transpose<const R: usize, const C: usize, X: Copy, L: Layout>(m: &Matrix<R, C, X, L>) -> Matrix<C, R, X, L>
{ m.t() }

/// `A B`
///
/// The inner dimensions must agree.
///
/// ```
/// use fixmat_array_types::{mat, Matrix};
///
/// let a = Matrix::<2, 3, i32>::from_rows([[1, 0, 2], [0, 1, 0]]);
/// let b = Matrix::<3, 1, i32>::from_rows([[1], [2], [3]]);
/// assert_eq!(mat::multiply_ab(&a, &b).to_rows(), [[7], [2]]);
/// ```
///
/// ```compile_fail
/// use fixmat_array_types::{mat, Matrix};
///
/// let a = Matrix::<2, 3, i32>::zero();
/// let b = Matrix::<2, 2, i32>::zero();
/// let _ = mat::multiply_ab(&a, &b);
/// ```
pub fn multiply_ab<const R: usize, const K: usize, const C: usize, X: Semiring, L: Layout>(
    a: &Matrix<R, K, X, L>,
    b: &Matrix<K, C, X, L>,
) -> Matrix<R, C, X, L>
where X: PrimitiveSemiring,
{ Matrix::from_fn(|r, c| accumulate(K, |i| a[(r, i)] * b[(i, c)])) }

/// `A Bᵀ`
pub fn multiply_abt<const R: usize, const K: usize, const C: usize, X: Semiring, L: Layout>(
    a: &Matrix<R, K, X, L>,
    b: &Matrix<C, K, X, L>,
) -> Matrix<R, C, X, L>
where X: PrimitiveSemiring,
{ Matrix::from_fn(|r, c| accumulate(K, |i| a[(r, i)] * b[(c, i)])) }

/// `Aᵀ B`
pub fn multiply_atb<const R: usize, const K: usize, const C: usize, X: Semiring, L: Layout>(
    a: &Matrix<K, R, X, L>,
    b: &Matrix<K, C, X, L>,
) -> Matrix<R, C, X, L>
where X: PrimitiveSemiring,
{ Matrix::from_fn(|r, c| accumulate(K, |i| a[(i, r)] * b[(i, c)])) }

/// `Aᵀ Bᵀ`
pub fn multiply_atbt<const R: usize, const K: usize, const C: usize, X: Semiring, L: Layout>(
    a: &Matrix<K, R, X, L>,
    b: &Matrix<C, K, X, L>,
) -> Matrix<R, C, X, L>
where X: PrimitiveSemiring,
{ Matrix::from_fn(|r, c| accumulate(K, |i| a[(i, r)] * b[(c, i)])) }

/// Matrix times column vector.  Also available as `&m * &v`.
pub fn multiply_mv<const R: usize, const C: usize, X: Semiring, L: Layout>(
    m: &Matrix<R, C, X, L>,
    v: &Vector<C, X>,
) -> Vector<R, X>
where X: PrimitiveSemiring,
{ vee::from_fn(|r| accumulate(C, |c| m[(r, c)] * v[c])) }

/// Row vector times matrix.  Also available as `&v * &m`.
pub fn multiply_vm<const R: usize, const C: usize, X: Semiring, L: Layout>(
    v: &Vector<R, X>,
    m: &Matrix<R, C, X, L>,
) -> Vector<C, X>
where X: PrimitiveSemiring,
{ vee::from_fn(|c| accumulate(R, |r| v[r] * m[(r, c)])) }

/// `M D`, where `D` is the diagonal matrix with the elements of `d`.
///
/// This scales column `c` by `d[c]`.
pub fn multiply_md<const R: usize, const C: usize, X: Semiring, L: Layout>(
    m: &Matrix<R, C, X, L>,
    d: &Vector<C, X>,
) -> Matrix<R, C, X, L>
where X: PrimitiveSemiring,
{ Matrix::from_fn(|r, c| m[(r, c)] * d[c]) }

/// `D M`, where `D` is the diagonal matrix with the elements of `d`.
///
/// This scales row `r` by `d[r]`.
pub fn multiply_dm<const R: usize, const C: usize, X: Semiring, L: Layout>(
    d: &Vector<R, X>,
    m: &Matrix<R, C, X, L>,
) -> Matrix<R, C, X, L>
where X: PrimitiveSemiring,
{ Matrix::from_fn(|r, c| d[r] * m[(r, c)]) }

/// `U Vᵀ`
pub fn outer_product<const R: usize, const C: usize, X: Semiring, L: Layout>(
    u: &Vector<R, X>,
    v: &Vector<C, X>,
) -> Matrix<R, C, X, L>
where X: PrimitiveSemiring,
{ Matrix::from_fn(|r, c| u[r] * v[c]) }

/// Overwrite a square matrix with the diagonal matrix whose diagonal is `d`.
pub fn make_diagonal<const N: usize, X: Semiring, L: Layout>(
    d: &Vector<N, X>,
    m: &mut Matrix<N, N, X, L>,
)
where X: PrimitiveSemiring,
{
    m.make_zero();
    for i in 0..N {
        m[(i, i)] = d[i];
    }
}

/// Construct a diagonal matrix.
pub fn diagonal<const N: usize, X: Semiring, L: Layout>(d: &Vector<N, X>) -> Matrix<N, N, X, L>
where X: PrimitiveSemiring,
{
    let mut m = Matrix::zero();
    make_diagonal(d, &mut m);
    m
}

impl<const N: usize, X: Semiring, L: Layout> Matrix<N, N, X, L>
where X: PrimitiveSemiring,
{
    /// Construct a diagonal matrix.
    ///
    /// This is also available as the free function `mat::diagonal`.
    #[inline(always)]
    pub fn diagonal(d: &Vector<N, X>) -> Self
    { diagonal(d) }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{RowMajor, ColMajor};

    fn check_product_variants<L: Layout>() {
        let a = Matrix::<2, 3, f64, L>::from_rows([
            [0.1, 2.0, -3.5],
            [4.25, 0.3, 6.0],
        ]);
        let b = Matrix::<3, 4, f64, L>::from_rows([
            [1.0, 0.7, 0.0, -1.0],
            [-2.0, 1.1, 0.5, 0.3],
            [0.9, 0.0, 3.0, 1.0 / 3.0],
        ]);

        let ab = multiply_ab(&a, &b);
        assert_eq!(ab, multiply_abt(&a, &b.t()));
        assert_eq!(ab, multiply_atb(&a.t(), &b));
        assert_eq!(ab, multiply_atbt(&a.t(), &b.t()));
        assert_eq!(ab, &a * &b);
        assert_eq!(ab.t(), multiply_ab(&b.t(), &a.t()));
    }

    #[test]
    fn product_variants_agree() {
        check_product_variants::<RowMajor>();
        check_product_variants::<ColMajor>();
    }

    #[test]
    fn products_agree_across_layouts() {
        let rows_a = [[1, 2, 3], [4, 5, 6]];
        let rows_b = [[7, 8], [9, 10], [11, 12]];
        let p = multiply_ab(&Matrix::<2, 3, i32, RowMajor>::from_rows(rows_a), &Matrix::from_rows(rows_b));
        let q = multiply_ab(&Matrix::<2, 3, i32, ColMajor>::from_rows(rows_a), &Matrix::from_rows(rows_b));
        assert_eq!(p.to_rows(), [[58, 64], [139, 154]]);
        assert_eq!(p.to_rows(), q.to_rows());
    }

    #[test]
    fn sums_start_from_positive_zero() {
        let a = Matrix::<1, 2, f64, RowMajor>::from_rows([[-0.0, -0.0]]);
        let b = Matrix::<2, 1, f64, RowMajor>::from_rows([[1.0], [1.0]]);
        assert_eq!(multiply_ab(&a, &b)[(0, 0)].to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn diagonal_products() {
        let m = Matrix::<2, 3, i32, ColMajor>::from_rows([[1, 2, 3], [4, 5, 6]]);
        let d2 = Vector([10, -1]);
        let d3 = Vector([1, 0, 2]);

        assert_eq!(multiply_md(&m, &d3).to_rows(), [[1, 0, 6], [4, 0, 12]]);
        assert_eq!(multiply_dm(&d2, &m).to_rows(), [[10, 20, 30], [-4, -5, -6]]);
        assert_eq!(multiply_md(&m, &d3), &m * &diagonal(&d3));
        assert_eq!(multiply_dm(&d2, &m), &diagonal(&d2) * &m);
    }

    #[test]
    fn outer() {
        let m: Matrix<2, 3, i32, RowMajor> = outer_product(&Vector([1, 2]), &Vector([3, 4, 5]));
        assert_eq!(m.to_rows(), [[3, 4, 5], [6, 8, 10]]);
    }

    #[test]
    fn diagonal_overwrites() {
        let mut m = Matrix::<3, 3, i32, RowMajor>::from_row_major([9; 9]);
        make_diagonal(&Vector([1, 2, 3]), &mut m);
        assert_eq!(m.to_rows(), [[1, 0, 0], [0, 2, 0], [0, 0, 3]]);
        assert_eq!(M33::diagonal(&Vector([1.0, 1.0, 1.0])), M33::identity());
    }
}
