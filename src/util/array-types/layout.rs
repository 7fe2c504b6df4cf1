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

//! Physical storage of matrix elements.
//!
//! A [`Table`] holds the `R * C` elements of a matrix in one of two physical
//! orders, chosen by a [`Layout`] type.  The `(row, col)` accessors mean the
//! same thing under either layout; only the linear (flat) accessors expose
//! the physical order.
//!
//! The layout used by [`Matrix`](crate::Matrix) when none is named is
//! [`DefaultLayout`], which is decided once per build by the `column-major`
//! cargo feature.

use std::fmt;

use slice_of_array::prelude::*;

/// Compile-time storage order of a [`Table`].
///
/// This trait is sealed; the only layouts are [`RowMajor`] and [`ColMajor`].
pub trait Layout: private::Sealed + Copy + Default + fmt::Debug + 'static {
    /// Human readable name, for debug output.
    const NAME: &'static str;

    /// The backing array type for an `R x C` table.
    ///
    /// This is `[[X; C]; R]` for row-major and `[[X; R]; C]` for column-major.
    type Storage<X: Copy, const R: usize, const C: usize>: Copy;

    /// Build storage by visiting every `(row, col)` once, in physical order.
    fn storage_from_fn<X: Copy, const R: usize, const C: usize, F>(f: F) -> Self::Storage<X, R, C>
    where F: FnMut(usize, usize) -> X;

    /// Position of `(r, c)` in the flat sequence.
    fn flat_index<const R: usize, const C: usize>(r: usize, c: usize) -> usize;

    /// Inverse of `flat_index`.
    fn coords<const R: usize, const C: usize>(i: usize) -> (usize, usize);

    fn get<X: Copy, const R: usize, const C: usize>(storage: &Self::Storage<X, R, C>, r: usize, c: usize) -> &X;

    fn get_mut<X: Copy, const R: usize, const C: usize>(storage: &mut Self::Storage<X, R, C>, r: usize, c: usize) -> &mut X;

    fn flat<X: Copy, const R: usize, const C: usize>(storage: &Self::Storage<X, R, C>) -> &[X];

    fn flat_mut<X: Copy, const R: usize, const C: usize>(storage: &mut Self::Storage<X, R, C>) -> &mut [X];
}

mod private {
    pub trait Sealed { }
}

/// Consecutive elements run across a row.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct RowMajor;

/// Consecutive elements run down a column.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ColMajor;

impl private::Sealed for RowMajor { }
impl private::Sealed for ColMajor { }

/// The layout used by every matrix that does not name one.
#[cfg(not(feature = "column-major"))]
pub type DefaultLayout = RowMajor;

/// The layout used by every matrix that does not name one.
#[cfg(feature = "column-major")]
pub type DefaultLayout = ColMajor;

impl Layout for RowMajor {
    const NAME: &'static str = "row-major";

    type Storage<X: Copy, const R: usize, const C: usize> = [[X; C]; R];

    #[inline]
    fn storage_from_fn<X: Copy, const R: usize, const C: usize, F>(mut f: F) -> [[X; C]; R]
    where F: FnMut(usize, usize) -> X,
    { std::array::from_fn(|r| std::array::from_fn(|c| f(r, c))) }

    #[inline(always)]
    fn flat_index<const R: usize, const C: usize>(r: usize, c: usize) -> usize
    { r * C + c }

    #[inline(always)]
    fn coords<const R: usize, const C: usize>(i: usize) -> (usize, usize)
    { (i / C, i % C) }

    #[inline(always)]
    fn get<X: Copy, const R: usize, const C: usize>(storage: &[[X; C]; R], r: usize, c: usize) -> &X
    { &storage[r][c] }

    #[inline(always)]
    fn get_mut<X: Copy, const R: usize, const C: usize>(storage: &mut [[X; C]; R], r: usize, c: usize) -> &mut X
    { &mut storage[r][c] }

    #[inline(always)]
    fn flat<X: Copy, const R: usize, const C: usize>(storage: &[[X; C]; R]) -> &[X]
    { storage[..].flat() }

    #[inline(always)]
    fn flat_mut<X: Copy, const R: usize, const C: usize>(storage: &mut [[X; C]; R]) -> &mut [X]
    { storage[..].flat_mut() }
}

impl Layout for ColMajor {
    const NAME: &'static str = "column-major";

    type Storage<X: Copy, const R: usize, const C: usize> = [[X; R]; C];

    #[inline]
    fn storage_from_fn<X: Copy, const R: usize, const C: usize, F>(mut f: F) -> [[X; R]; C]
    where F: FnMut(usize, usize) -> X,
    { std::array::from_fn(|c| std::array::from_fn(|r| f(r, c))) }

    #[inline(always)]
    fn flat_index<const R: usize, const C: usize>(r: usize, c: usize) -> usize
    { c * R + r }

    #[inline(always)]
    fn coords<const R: usize, const C: usize>(i: usize) -> (usize, usize)
    { (i % R, i / R) }

    #[inline(always)]
    fn get<X: Copy, const R: usize, const C: usize>(storage: &[[X; R]; C], r: usize, c: usize) -> &X
    { &storage[c][r] }

    #[inline(always)]
    fn get_mut<X: Copy, const R: usize, const C: usize>(storage: &mut [[X; R]; C], r: usize, c: usize) -> &mut X
    { &mut storage[c][r] }

    #[inline(always)]
    fn flat<X: Copy, const R: usize, const C: usize>(storage: &[[X; R]; C]) -> &[X]
    { storage[..].flat() }

    #[inline(always)]
    fn flat_mut<X: Copy, const R: usize, const C: usize>(storage: &mut [[X; R]; C]) -> &mut [X]
    { storage[..].flat_mut() }
}

// ---------------------------------------------------------------------------

/// Fixed-size element storage for an `R x C` matrix.
///
/// Access by `(row, col)` is independent of `L`; access by flat index
/// follows the physical order of `L`.  Indices out of range panic.
pub struct Table<const R: usize, const C: usize, X: Copy, L: Layout = DefaultLayout> {
    storage: L::Storage<X, R, C>,
}

impl<const R: usize, const C: usize, X: Copy, L: Layout> Clone for Table<R, C, X, L> {
    #[inline(always)]
    fn clone(&self) -> Self { *self }
}

impl<const R: usize, const C: usize, X: Copy, L: Layout> Copy for Table<R, C, X, L> { }

impl<const R: usize, const C: usize, X: Copy, L: Layout> Table<R, C, X, L> {
    /// Number of elements.
    pub const LEN: usize = R * C;

    /// Build a table from a function of `(row, col)`.
    ///
    /// The function is called exactly once per element, in physical order.
    #[inline]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize, usize) -> X,
    { Table { storage: L::storage_from_fn::<X, R, C, F>(f) } }

    /// A table with every slot equal to `value`.
    #[inline]
    pub fn filled(value: X) -> Self
    { Self::from_fn(|_, _| value) }

    #[inline(always)]
    pub fn at(&self, r: usize, c: usize) -> &X
    { L::get::<X, R, C>(&self.storage, r, c) }

    #[inline(always)]
    pub fn at_mut(&mut self, r: usize, c: usize) -> &mut X
    { L::get_mut::<X, R, C>(&mut self.storage, r, c) }

    /// Position of `(r, c)` in [`Table::flat`].
    #[inline(always)]
    pub fn flat_index(r: usize, c: usize) -> usize
    { L::flat_index::<R, C>(r, c) }

    /// The `(row, col)` stored at a flat index.
    #[inline(always)]
    pub fn coords(i: usize) -> (usize, usize)
    { L::coords::<R, C>(i) }

    /// All elements in physical order.
    #[inline(always)]
    pub fn flat(&self) -> &[X]
    { L::flat::<X, R, C>(&self.storage) }

    /// All elements in physical order.
    #[inline(always)]
    pub fn flat_mut(&mut self) -> &mut [X]
    { L::flat_mut::<X, R, C>(&mut self.storage) }
}

impl<const R: usize, const C: usize, X: Copy + fmt::Debug, L: Layout> fmt::Debug for Table<R, C, X, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("layout", &L::NAME)
            .field("flat", &self.flat())
            .finish()
    }
}

// ---------------------------------------------------------------------------
