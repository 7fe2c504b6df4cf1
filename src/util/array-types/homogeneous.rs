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

//! Homogeneous coordinates: moving a square matrix up or down by one
//! dimension.
//!
//! `N + 1` can't be written in a generic position, so these are traits
//! implemented for each supported size.  Lifting is available for
//! `N = 1..=16`, projecting for `N = 2..=17`.  Projecting a 1x1 matrix
//! does not compile.

use crate::traits::Semiring;
use crate::traits::internal::PrimitiveSemiring;
use crate::layout::Layout;

use super::types::*;

/// Embed an NxN matrix as the upper left block of an (N+1)x(N+1) identity.
pub trait HLift {
    type Output;

    fn hlift(&self) -> Self::Output;
}

/// Take the upper left (N-1)x(N-1) block of an NxN matrix.
///
/// ```
/// use fixmat_array_types::{Matrix, HProject};
///
/// let m = Matrix::<2, 2, i32>::from_rows([[1, 2], [3, 4]]);
/// assert_eq!(m.hproject().to_rows(), [[1]]);
/// ```
///
/// There is nothing to project a 1x1 matrix onto.
///
/// ```compile_fail
/// use fixmat_array_types::{Matrix, HProject};
///
/// let m = Matrix::<1, 1, i32>::from_rows([[1]]);
/// let _ = m.hproject();
/// ```
pub trait HProject {
    type Output;

    fn hproject(&self) -> Self::Output;
}

gen_each!{
    @{1...16}
    impl_homogeneous!({$n:tt}) => {
        impl<X: Semiring, L: Layout> HLift for Matrix<$n, $n, X, L>
          where X: PrimitiveSemiring,
        {
            type Output = Matrix<{ $n + 1 }, { $n + 1 }, X, L>;

            fn hlift(&self) -> Self::Output {
                let mut out = Matrix::identity();
                for r in 0..$n {
                    for c in 0..$n {
                        out[(r, c)] = self[(r, c)];
                    }
                }
                out
            }
        }

        impl<X: Semiring, L: Layout> HProject for Matrix<{ $n + 1 }, { $n + 1 }, X, L>
          where X: PrimitiveSemiring,
        {
            type Output = Matrix<$n, $n, X, L>;

            #[inline]
            fn hproject(&self) -> Self::Output
            { Matrix::from_fn(|r, c| self[(r, c)]) }
        }
    }
}

/// Embed an NxN matrix as the upper left block of an (N+1)x(N+1) identity.
#[inline(always)]
pub fn hlift<M: HLift>(m: &M) -> M::Output
{ m.hlift() }

/// Take the upper left (N-1)x(N-1) block of an NxN matrix.
#[inline(always)]
pub fn hproject<M: HProject>(m: &M) -> M::Output
{ m.hproject() }

// ---------------------------------------------------------------------------
