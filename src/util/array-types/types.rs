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

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::fmt;

use crate::layout::{Layout, DefaultLayout, Table};

// ---------------------------------------------------------------------------

/// A fixed-size vector with operations for linear algebra.
///
/// Vectors carry no orientation; `&matrix * vector` treats it as a column
/// and `vector * &matrix` treats it as a row.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector<const N: usize, X = f64>(pub [X; N]);

/// A 2-dimensional vector.
pub type V2<X = f64> = Vector<2, X>;
/// A 3-dimensional vector.
pub type V3<X = f64> = Vector<3, X>;
/// A 4-dimensional vector.
pub type V4<X = f64> = Vector<4, X>;

// ---------------------------------------------------------------------------

/// A dense matrix with `R` rows and `C` columns.
///
/// Elements live in a [`Table`] whose physical order is decided by `L`
/// (normally left at [`DefaultLayout`]).  Indexing with `m[(r, c)]` always
/// means row `r`, column `c`.  Indexing with `m[i]`, and everything else that
/// deals in flat sequences of elements, follows the physical order.
///
/// # Comparisons
///
/// `==`, `<` and friends compare the physical element sequences
/// lexicographically, so that matrices can be used as keys in ordered
/// containers.  For non-square matrices (or any matrices that differ in more
/// than one element) the result of `<` can change when the layout changes.
/// Equality is unaffected.
///
/// # Mutation
///
/// All mutators take `&mut self`. Sharing one matrix between threads that
/// mutate it requires external synchronization (e.g. a `Mutex`), which is
/// the caller's business.
pub struct Matrix<const R: usize, const C: usize, X: Copy = f64, L: Layout = DefaultLayout> {
    pub(crate) table: Table<R, C, X, L>,
}

/// A square dense 2x2 matrix.
pub type M22<X = f64> = Matrix<2, 2, X>;
/// A square dense 3x3 matrix.
pub type M33<X = f64> = Matrix<3, 3, X>;
/// A square dense 4x4 matrix.
pub type M44<X = f64> = Matrix<4, 4, X>;

// ---------------------------------------------------------------------------
// Vectors behave generally like their backing array type.

impl<const N: usize, X> Deref for Vector<N, X> {
    type Target = [X; N];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl<const N: usize, X> DerefMut for Vector<N, X> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

// Fix a paper cut not solved by Deref, which is that many methods
// take `I: IntoIterator`.
impl<'a, const N: usize, X> IntoIterator for &'a Vector<N, X> {
    type Item = &'a X;
    type IntoIter = std::slice::Iter<'a, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter() }
}

impl<'a, const N: usize, X> IntoIterator for &'a mut Vector<N, X> {
    type Item = &'a mut X;
    type IntoIter = std::slice::IterMut<'a, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter_mut() }
}

impl<const N: usize, X: Default> Default for Vector<N, X> {
    #[inline]
    fn default() -> Self
    { Vector(std::array::from_fn(|_| X::default())) }
}

// forward the debug impl without a surrounding "Vector(...)", for somewhat
// selfish reasons (it makes the debug output valid JSON and Python for
// many types, significantly lowering the barrier to some common tasks
// during debugging)
impl<const N: usize, X: fmt::Debug> fmt::Debug for Vector<N, X> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

// ---------------------------------------------------------------------------
// Matrix plumbing.  Everything here goes through the table.

impl<const R: usize, const C: usize, X: Copy, L: Layout> Clone for Matrix<R, C, X, L> {
    #[inline(always)]
    fn clone(&self) -> Self { *self }
}

impl<const R: usize, const C: usize, X: Copy, L: Layout> Copy for Matrix<R, C, X, L> { }

/// Layout-independent element access.
impl<const R: usize, const C: usize, X: Copy, L: Layout> Index<(usize, usize)> for Matrix<R, C, X, L> {
    type Output = X;

    #[inline(always)]
    fn index(&self, (r, c): (usize, usize)) -> &X
    { self.table.at(r, c) }
}

impl<const R: usize, const C: usize, X: Copy, L: Layout> IndexMut<(usize, usize)> for Matrix<R, C, X, L> {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut X
    { self.table.at_mut(r, c) }
}

/// Layout-dependent element access.
///
/// Useful when every element gets the same treatment. Don't compute
/// `r * C + c` yourself; that bakes in a storage order.
impl<const R: usize, const C: usize, X: Copy, L: Layout> Index<usize> for Matrix<R, C, X, L> {
    type Output = X;

    #[inline(always)]
    fn index(&self, i: usize) -> &X
    { &self.table.flat()[i] }
}

impl<const R: usize, const C: usize, X: Copy, L: Layout> IndexMut<usize> for Matrix<R, C, X, L> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut X
    { &mut self.table.flat_mut()[i] }
}

impl<'a, const R: usize, const C: usize, X: Copy, L: Layout> IntoIterator for &'a Matrix<R, C, X, L> {
    type Item = &'a X;
    type IntoIter = std::slice::Iter<'a, X>;

    /// Iterates in physical order.
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.table.flat().iter() }
}

impl<'a, const R: usize, const C: usize, X: Copy, L: Layout> IntoIterator for &'a mut Matrix<R, C, X, L> {
    type Item = &'a mut X;
    type IntoIter = std::slice::IterMut<'a, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.table.flat_mut().iter_mut() }
}

// Comparisons are over the physical sequence. See the type docs.
impl<const R: usize, const C: usize, X: Copy + PartialEq, L: Layout> PartialEq for Matrix<R, C, X, L> {
    #[inline]
    fn eq(&self, other: &Self) -> bool
    { self.table.flat() == other.table.flat() }
}

impl<const R: usize, const C: usize, X: Copy + Eq, L: Layout> Eq for Matrix<R, C, X, L> { }

impl<const R: usize, const C: usize, X: Copy + PartialOrd, L: Layout> PartialOrd for Matrix<R, C, X, L> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering>
    { self.table.flat().partial_cmp(other.table.flat()) }
}

impl<const R: usize, const C: usize, X: Copy + Ord, L: Layout> Ord for Matrix<R, C, X, L> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering
    { self.table.flat().cmp(other.table.flat()) }
}

impl<const R: usize, const C: usize, X: Copy + Hash, L: Layout> Hash for Matrix<R, C, X, L> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H)
    { self.table.flat().hash(state) }
}

// Like the vector impl, the output is a plain nested list (of rows, always;
// the layout is not visible here).
impl<const R: usize, const C: usize, X: Copy + fmt::Debug, L: Layout> fmt::Debug for Matrix<R, C, X, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..R).map(|r| RowDebug(self, r)))
            .finish()
    }
}

struct RowDebug<'a, const R: usize, const C: usize, X: Copy, L: Layout>(&'a Matrix<R, C, X, L>, usize);

impl<const R: usize, const C: usize, X: Copy + fmt::Debug, L: Layout> fmt::Debug for RowDebug<'_, R, C, X, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let RowDebug(m, r) = *self;
        f.debug_list()
            .entries((0..C).map(|c| &m[(r, c)]))
            .finish()
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{RowMajor, ColMajor};

    #[test]
    fn debug_is_rows_regardless_of_layout() {
        let a = Matrix::<2, 3, i32, RowMajor>::from_rows([[1, 2, 3], [4, 5, 6]]);
        let b = Matrix::<2, 3, i32, ColMajor>::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(format!("{:?}", a), "[[1, 2, 3], [4, 5, 6]]");
        assert_eq!(format!("{:?}", b), "[[1, 2, 3], [4, 5, 6]]");
        assert_eq!(format!("{:?}", Vector([1, 2])), "[1, 2]");
    }

    #[test]
    fn linear_index_is_physical() {
        let a = Matrix::<2, 3, i32, RowMajor>::from_rows([[1, 2, 3], [4, 5, 6]]);
        let b = Matrix::<2, 3, i32, ColMajor>::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(a[1], 2);
        assert_eq!(b[1], 4);
        assert_eq!(a.into_iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(b.into_iter().copied().collect::<Vec<_>>(), vec![1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn ordering_follows_physical_sequence() {
        // Row-major sequences: [0, 1, 0, 0, 0, 0] vs [0, 0, 0, 1, 0, 0]
        // Column-major:        [0, 0, 1, 0, 0, 0] vs [0, 1, 0, 0, 0, 0]
        let lo = [[0, 1, 0], [0, 0, 0]];
        let hi = [[0, 0, 0], [1, 0, 0]];

        let (a, b) = (Matrix::<2, 3, i32, RowMajor>::from_rows(lo), Matrix::<2, 3, i32, RowMajor>::from_rows(hi));
        assert!(a > b);

        let (a, b) = (Matrix::<2, 3, i32, ColMajor>::from_rows(lo), Matrix::<2, 3, i32, ColMajor>::from_rows(hi));
        assert!(a < b);
    }

    #[test]
    fn usable_as_set_key() {
        use std::collections::{BTreeSet, HashSet};

        let mats = vec![M22::<i32>::identity(), M22::<i32>::zero(), M22::<i32>::identity(), M22::<i32>::unit(0, 1)];
        assert_eq!(mats.iter().collect::<BTreeSet<_>>().len(), 3);
        assert_eq!(mats.iter().collect::<HashSet<_>>().len(), 3);
    }
}
