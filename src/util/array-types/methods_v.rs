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


use crate::traits::{Semiring, Field};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveFloat};
use crate::error::ShapeError;

use super::types::*;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a fixed-size vector from a function on indices.
///
/// The length is inferred from how the result is used.
#[inline(always)]
pub fn from_fn<const N: usize, X, F>(f: F) -> Vector<N, X>
where F: FnMut(usize) -> X,
{ Vector(std::array::from_fn(f)) }

/// Get a zero vector (using type inference).
#[inline(always)]
pub fn zero<const N: usize, X: Semiring>() -> Vector<N, X>
where X: PrimitiveSemiring,
{ Vector([X::zero(); N]) }

/// Inner product of vectors.
///
/// This is basically just `Vector::dot` as a free function,
/// because everyone loves symmetry.
#[inline(always)]
pub fn dot<const N: usize, X: Semiring>(a: &Vector<N, X>, b: &Vector<N, X>) -> X
where X: PrimitiveSemiring,
{
    let mut acc = X::zero();
    for k in 0..N {
        acc += a[k] * b[k];
    }
    acc
}

impl<const N: usize, X> Vector<N, X> {
    /// Construct a fixed-size vector from a function on indices.
    ///
    /// This is also available as the free function `vee::from_fn`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize) -> X,
    { from_fn(f) }

    /// Get the inner product of two vectors.
    ///
    /// It is recommended you write this as `Vector::dot(a, b)`, rather than `a.dot(b)`.
    #[inline(always)]
    pub fn dot(&self, other: &Self) -> X
    where X: Semiring + PrimitiveSemiring,
    { dot(self, other) }

    /// Get the vector's squared magnitude.
    #[inline(always)]
    pub fn sqnorm(&self) -> X
    where X: Semiring + PrimitiveSemiring,
    { dot(self, self) }

    /// Get the vector's magnitude.
    #[inline(always)]
    pub fn norm(&self) -> X
    where X: Field + PrimitiveFloat,
    { self.sqnorm().sqrt() }

    /// Get a basis vector.
    #[inline(always)]
    pub fn axis_unit(i: usize) -> Self
    where X: Semiring + PrimitiveSemiring,
    {
        let mut v = zero();
        *v.get_mut(i)
            .unwrap_or_else(|| panic!("Invalid axis for {}d vector: {}", N, i)) = X::one();
        v
    }

    /// Perform elementwise multiplication, or multiplication of a vector by a diagonal
    /// matrix.
    #[inline(always)]
    pub fn mul_diag(&self, other: &Self) -> Self
    where X: Semiring + PrimitiveSemiring,
    { Self::from_fn(|i| self[i] * other[i]) }

    /// Apply a function to each element.
    #[inline]
    pub fn map<B, F>(self, f: F) -> Vector<N, B>
    where F: FnMut(X) -> B,
    { Vector(self.0.map(f)) }
}

impl<const N: usize, X: Semiring> Vector<N, X>
where X: PrimitiveSemiring,
{
    /// Get a zero vector.
    ///
    /// This is also available as the free function `vee::zero`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn zero() -> Self
    { zero() }
}

// ---------------------------------------------------------------------------
// Runtime-sized input.

impl<const N: usize, X: Copy> TryFrom<&[X]> for Vector<N, X> {
    type Error = ShapeError;

    fn try_from(slice: &[X]) -> Result<Self, ShapeError> {
        match <[X; N]>::try_from(slice) {
            Ok(array) => Ok(Vector(array)),
            Err(_) => Err(ShapeError::VectorLength { expected: N, actual: slice.len() }),
        }
    }
}

impl<const N: usize, X> TryFrom<Vec<X>> for Vector<N, X> {
    type Error = ShapeError;

    fn try_from(vec: Vec<X>) -> Result<Self, ShapeError> {
        let actual = vec.len();
        <[X; N]>::try_from(vec)
            .map(Vector)
            .map_err(|_| ShapeError::VectorLength { expected: N, actual })
    }
}

impl<const N: usize, X> From<[X; N]> for Vector<N, X> {
    #[inline(always)]
    fn from(array: [X; N]) -> Self { Vector(array) }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basics() {
        assert_eq!(V3::<i32>::zero(), Vector([0, 0, 0]));
        assert_eq!(V3::<i32>::default(), Vector([0, 0, 0]));
        assert_eq!(V3::<i32>::axis_unit(1), Vector([0, 1, 0]));
        assert_eq!(Vector([1, 2, 3]).dot(&Vector([4, 5, 6])), 32);
        assert_eq!(Vector([3.0, 4.0]).norm(), 5.0);
        assert_eq!(Vector([1, 2, 3]).mul_diag(&Vector([2, 2, 0])), Vector([2, 4, 0]));
        assert_eq!(Vector([1, 2]).map(|x| x as f64 / 2.0), Vector([0.5, 1.0]));
    }

    #[test]
    #[should_panic(expected = "Invalid axis")]
    fn bad_axis() {
        let _ = V2::<f64>::axis_unit(2);
    }

    #[test]
    fn from_runtime_data() {
        assert_eq!(V3::<i32>::try_from(&[1, 2, 3][..]), Ok(Vector([1, 2, 3])));
        assert_eq!(
            V3::<i32>::try_from(vec![1, 2]),
            Err(ShapeError::VectorLength { expected: 3, actual: 2 }),
        );
    }
}
