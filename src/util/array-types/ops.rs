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

use std::ops::{Add, Sub, AddAssign, SubAssign, Neg};
use std::ops::{Mul, Div, MulAssign, DivAssign};
use std::fmt;

use crate::traits::{Semiring, Ring, Field};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveRing, PrimitiveFloat};
use crate::layout::Layout;
use crate::{vee, products};

use super::types::*;

// NOTE: Operator impls are deliberately between same-typed operands,
//       rather than e.g. Matrix<X> and Matrix<Y> where X: Add<Y>.
//
//       The reason for this is that the having such generic bounds
//       tends to influence the design of the rest of the library
//       towards a design that is actually impossible to implement.

// Lets the by-value and by-reference impls below share a body.
#[inline(always)]
fn own<const R: usize, const C: usize, X: Copy, L: Layout>(m: &Matrix<R, C, X, L>) -> Matrix<R, C, X, L>
{ *m }

// ---------------------------------------------------------------------------
// matrix assign ops; these do the real work, element by element over the
// physical storage.  The value-returning forms copy and defer to them.

impl<'b, const R: usize, const C: usize, X: Semiring, L: Layout> AddAssign<&'b Matrix<R, C, X, L>> for Matrix<R, C, X, L>
  where X: PrimitiveSemiring,
{
    #[inline]
    fn add_assign(&mut self, other: &'b Matrix<R, C, X, L>) {
        for (a, &b) in self.as_flat_mut().iter_mut().zip(other.as_flat()) {
            *a += b;
        }
    }
}

impl<'b, const R: usize, const C: usize, X: Ring, L: Layout> SubAssign<&'b Matrix<R, C, X, L>> for Matrix<R, C, X, L>
  where X: PrimitiveRing,
{
    #[inline]
    fn sub_assign(&mut self, other: &'b Matrix<R, C, X, L>) {
        for (a, &b) in self.as_flat_mut().iter_mut().zip(other.as_flat()) {
            *a -= b;
        }
    }
}

impl<const R: usize, const C: usize, X: Semiring, L: Layout> AddAssign for Matrix<R, C, X, L>
  where X: PrimitiveSemiring,
{
    #[inline(always)]
    fn add_assign(&mut self, other: Self)
    { *self += &other; }
}

impl<const R: usize, const C: usize, X: Ring, L: Layout> SubAssign for Matrix<R, C, X, L>
  where X: PrimitiveRing,
{
    #[inline(always)]
    fn sub_assign(&mut self, other: Self)
    { *self -= &other; }
}

// matrix *= scalar;
impl<const R: usize, const C: usize, X: Semiring, L: Layout> MulAssign<X> for Matrix<R, C, X, L>
  where X: PrimitiveSemiring,
{
    #[inline]
    fn mul_assign(&mut self, scalar: X) {
        for a in self.as_flat_mut() {
            *a *= scalar;
        }
    }
}

// matrix /= scalar;
//
// Dividing by an exact zero produces the zero matrix rather than infinities
// and NaNs.  Otherwise this multiplies by the reciprocal, so the result may
// differ from elementwise division in the last bit.
impl<const R: usize, const C: usize, X: Field, L: Layout> DivAssign<X> for Matrix<R, C, X, L>
  where X: PrimitiveFloat,
{
    #[inline]
    fn div_assign(&mut self, scalar: X) {
        if scalar != X::zero() {
            *self *= scalar.recip();
        } else {
            self.make_zero();
        }
    }
}

// ---------------------------------------------------------------------------
// matrix-matrix ops

gen_each!{
    @{by_ref_a}
    @{by_ref_b}
    impl_m_add_sub!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // matrix + matrix
        impl<$($lt_a)* $($lt_b)* const R: usize, const C: usize, X: Semiring, L: Layout>
            Add<$($ref_b)* Matrix<R, C, X, L>> for $($ref_a)* Matrix<R, C, X, L>
          where X: PrimitiveSemiring,
        {
            type Output = Matrix<R, C, X, L>;

            #[inline]
            fn add(self, other: $($ref_b)* Matrix<R, C, X, L>) -> Self::Output {
                let mut out = own(&self);
                out += own(&other);
                out
            }
        }

        // matrix - matrix
        impl<$($lt_a)* $($lt_b)* const R: usize, const C: usize, X: Ring, L: Layout>
            Sub<$($ref_b)* Matrix<R, C, X, L>> for $($ref_a)* Matrix<R, C, X, L>
          where X: PrimitiveRing,
        {
            type Output = Matrix<R, C, X, L>;

            #[inline]
            fn sub(self, other: $($ref_b)* Matrix<R, C, X, L>) -> Self::Output {
                let mut out = own(&self);
                out -= own(&other);
                out
            }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix unary and matrix-scalar ops

gen_each!{
    @{by_ref_a}
    impl_m_unops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // -matrix
        impl<$($lt_a)* const R: usize, const C: usize, X: Ring, L: Layout> Neg for $($ref_a)* Matrix<R, C, X, L>
          where X: PrimitiveRing,
        {
            type Output = Matrix<R, C, X, L>;

            #[inline]
            fn neg(self) -> Self::Output {
                let mut out = own(&self);
                for a in out.as_flat_mut() {
                    *a = -*a;
                }
                out
            }
        }

        // matrix * scalar
        impl<$($lt_a)* const R: usize, const C: usize, X: Semiring, L: Layout> Mul<X> for $($ref_a)* Matrix<R, C, X, L>
          where X: PrimitiveSemiring,
        {
            type Output = Matrix<R, C, X, L>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output {
                let mut out = own(&self);
                out *= scalar;
                out
            }
        }

        // matrix / scalar
        impl<$($lt_a)* const R: usize, const C: usize, X: Field, L: Layout> Div<X> for $($ref_a)* Matrix<R, C, X, L>
          where X: PrimitiveFloat,
        {
            type Output = Matrix<R, C, X, L>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output {
                let mut out = own(&self);
                out /= scalar;
                out
            }
        }
    }
}

// scalar * matrix
gen_each!{
    // NOTE: the orphan rules prevent us from impl-ing these ops "for X" so
    //       we must generate a separate impl for each Semiring type rather than
    //       being generic over X: Semiring
    @{semiring}
    @{by_ref_a}
    impl_scalar_m_ops!(
        {$X:ty}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        impl<$($lt_a)* const R: usize, const C: usize, L: Layout> Mul<$($ref_a)* Matrix<R, C, $X, L>> for $X {
            type Output = Matrix<R, C, $X, L>;

            #[inline(always)]
            fn mul(self, matrix: $($ref_a)* Matrix<R, C, $X, L>) -> Self::Output
            { matrix * self }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix-matrix and matrix-vector products

gen_each!{
    @{by_ref_a}
    @{by_ref_b}
    impl_m_products!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // matrix * matrix
        impl<$($lt_a)* $($lt_b)* const R: usize, const K: usize, const C: usize, X: Semiring, L: Layout>
            Mul<$($ref_b)* Matrix<K, C, X, L>> for $($ref_a)* Matrix<R, K, X, L>
          where X: PrimitiveSemiring,
        {
            type Output = Matrix<R, C, X, L>;

            #[inline]
            fn mul(self, other: $($ref_b)* Matrix<K, C, X, L>) -> Self::Output
            {
                let a: &Matrix<R, K, X, L> = &self;
                let b: &Matrix<K, C, X, L> = &other;
                products::multiply_ab(a, b)
            }
        }

        // matrix * column vector
        impl<$($lt_a)* $($lt_b)* const R: usize, const C: usize, X: Semiring, L: Layout>
            Mul<$($ref_b)* Vector<C, X>> for $($ref_a)* Matrix<R, C, X, L>
          where X: PrimitiveSemiring,
        {
            type Output = Vector<R, X>;

            #[inline]
            fn mul(self, vector: $($ref_b)* Vector<C, X>) -> Self::Output
            {
                let matrix: &Matrix<R, C, X, L> = &self;
                let vector: &Vector<C, X> = &vector;
                products::multiply_mv(matrix, vector)
            }
        }

        // row vector * matrix
        impl<$($lt_a)* $($lt_b)* const R: usize, const C: usize, X: Semiring, L: Layout>
            Mul<$($ref_b)* Matrix<R, C, X, L>> for $($ref_a)* Vector<R, X>
          where X: PrimitiveSemiring,
        {
            type Output = Vector<C, X>;

            #[inline]
            fn mul(self, matrix: $($ref_b)* Matrix<R, C, X, L>) -> Self::Output
            {
                let vector: &Vector<R, X> = &self;
                let matrix: &Matrix<R, C, X, L> = &matrix;
                products::multiply_vm(vector, matrix)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// vector ops

gen_each!{
    @{by_ref_a}
    @{by_ref_b}
    impl_v_add_sub!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // vector + vector
        impl<$($lt_a)* $($lt_b)* const N: usize, X: Semiring> Add<$($ref_b)* Vector<N, X>> for $($ref_a)* Vector<N, X>
          where X: PrimitiveSemiring,
        {
            type Output = Vector<N, X>;

            #[inline]
            fn add(self, other: $($ref_b)* Vector<N, X>) -> Self::Output
            { vee::from_fn(|k| self[k] + other[k]) }
        }

        // vector - vector
        impl<$($lt_a)* $($lt_b)* const N: usize, X: Ring> Sub<$($ref_b)* Vector<N, X>> for $($ref_a)* Vector<N, X>
          where X: PrimitiveRing,
        {
            type Output = Vector<N, X>;

            #[inline]
            fn sub(self, other: $($ref_b)* Vector<N, X>) -> Self::Output
            { vee::from_fn(|k| self[k] - other[k]) }
        }
    }
}

gen_each!{
    @{by_ref_a}
    impl_v_unops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // -vector
        impl<$($lt_a)* const N: usize, X: Ring> Neg for $($ref_a)* Vector<N, X>
          where X: PrimitiveRing,
        {
            type Output = Vector<N, X>;

            #[inline]
            fn neg(self) -> Self::Output
            { vee::from_fn(|k| -self[k]) }
        }

        // vector * scalar
        impl<$($lt_a)* const N: usize, X: Semiring> Mul<X> for $($ref_a)* Vector<N, X>
          where X: PrimitiveSemiring,
        {
            type Output = Vector<N, X>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { vee::from_fn(|k| self[k] * scalar) }
        }

        // vector / scalar
        //
        // Same rule as for matrices: an exact zero gives the zero vector.
        impl<$($lt_a)* const N: usize, X: Field> Div<X> for $($ref_a)* Vector<N, X>
          where X: PrimitiveFloat,
        {
            type Output = Vector<N, X>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output {
                if scalar != X::zero() {
                    let inv = scalar.recip();
                    vee::from_fn(|k| self[k] * inv)
                } else {
                    vee::zero()
                }
            }
        }
    }
}

gen_each!{
    @{semiring}
    @{by_ref_a}
    impl_scalar_v_ops!(
        {$X:ty}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // scalar * vector
        impl<$($lt_a)* const N: usize> Mul<$($ref_a)* Vector<N, $X>> for $X {
            type Output = Vector<N, $X>;

            #[inline(always)]
            fn mul(self, vector: $($ref_a)* Vector<N, $X>) -> Self::Output
            { vector * self }
        }
    }
}

// vector op= x
impl<const N: usize, X, B> AddAssign<B> for Vector<N, X> where for<'a> &'a Self: Add<B, Output=Self> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: B)
    { *self = &*self + rhs; }
}

impl<const N: usize, X, B> SubAssign<B> for Vector<N, X> where for<'a> &'a Self: Sub<B, Output=Self> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: B)
    { *self = &*self - rhs; }
}

impl<const N: usize, X, B> MulAssign<B> for Vector<N, X> where for<'a> &'a Self: Mul<B, Output=Self> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: B)
    { *self = &*self * rhs; }
}

impl<const N: usize, X, B> DivAssign<B> for Vector<N, X> where for<'a> &'a Self: Div<B, Output=Self> {
    #[inline(always)]
    fn div_assign(&mut self, rhs: B)
    { *self = &*self / rhs; }
}

// ---------------------------------------------------------------------------

// fmt traits apply the format to each element for convenience, printing
// matrices as a list of rows.
gen_each!{
    [
        // Note: the inclusion of Display in this list is a necessary evil, because
        //       there's no other way to get output like `[1.0000, 0.3333]`,
        //       which is kind of, you know, THE motivating use-case.
        {Display} {LowerExp} {UpperExp}
    ]
    impl_fmt!(
        {$Format:ident}
    ) => {
        impl<const N: usize, X: fmt::$Format> fmt::$Format for Vector<N, X> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (k, x) in self.iter().enumerate() {
                    if k > 0 {
                        write!(f, ", ")?;
                    }
                    fmt::$Format::fmt(x, f)?;
                }
                write!(f, "]")
            }
        }

        impl<const R: usize, const C: usize, X: Copy + fmt::$Format, L: Layout> fmt::$Format for Matrix<R, C, X, L> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for r in 0..R {
                    if r > 0 {
                        write!(f, ", ")?;
                    }
                    fmt::$Format::fmt(&self.row(r), f)?;
                }
                write!(f, "]")
            }
        }
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat;
    use crate::layout::{RowMajor, ColMajor};

    #[test]
    fn add_sub_neg() {
        let a = mat::from_rows([[1, 2], [3, 4]]);
        let b = mat::from_rows([[10, 20], [30, 40]]);
        assert_eq!(a + b, mat::from_rows([[11, 22], [33, 44]]));
        assert_eq!(&b - &a, mat::from_rows([[9, 18], [27, 36]]));
        assert_eq!(-&a, mat::from_rows([[-1, -2], [-3, -4]]));
        assert_eq!(a + -a, mat::zero());

        let mut c = a;
        c += &b;
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn scalar_mul_div() {
        let a = Matrix::<2, 3, f64, ColMajor>::from_row_major([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!((a * 2.0).to_rows(), [[2.0, 4.0, 6.0], [8.0, 10.0, 12.0]]);
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(2.0 * &a, &a * 2.0);
        assert_eq!((a / 2.0).to_rows(), [[0.5, 1.0, 1.5], [2.0, 2.5, 3.0]]);

        // multiplies by the reciprocal, so only approximately elementwise division
        assert_close!(
            rel=1e-15,
            (a / 3.0).to_rows(),
            [[1.0 / 3.0, 2.0 / 3.0, 1.0], [4.0 / 3.0, 5.0 / 3.0, 2.0]],
        );

        let mut b = a;
        b *= 4.0;
        b /= 4.0;
        assert_eq!(b, a);
    }

    #[test]
    fn divide_by_zero_is_zero() {
        let a = mat::from_rows([[1.0, -2.0], [f64::INFINITY, 4.0]]);
        assert_eq!(a / 0.0, M22::zero());
        assert_eq!(a / -0.0, M22::zero());

        let mut b = a;
        b /= 0.0;
        assert!(b.is_zero());
        assert!(b.as_flat().iter().all(|x| x.to_bits() == 0));
    }

    #[test]
    fn ops_are_layout_independent() {
        let a = Matrix::<2, 3, i32, RowMajor>::from_row_major([1, 2, 3, 4, 5, 6]);
        let b = Matrix::<2, 3, i32, ColMajor>::from_row_major([1, 2, 3, 4, 5, 6]);
        assert_eq!((a + a * 2).to_rows(), (b + b * 2).to_rows());
        assert_eq!((-a - a).to_rows(), (-b - b).to_rows());
    }

    #[test]
    fn mat_mat() {
        let eye2 = mat::from_rows([[1, 0], [0, 1i32]]);
        let eye3 = mat::from_rows([[1, 0, 0], [0, 1, 0], [0, 0, 1i32]]);

        let a = mat::from_rows([
            [1, 2, 3],
            [4, 5, 6],
        ]);

        let b = mat::from_rows([
            [1,  1],
            [1, -1],
            [0,  1],
        ]);

        let a_dot_b = mat::from_rows([
            [3, 2],
            [9, 5],
        ]);

        assert_eq!(a, &eye2 * &a);
        assert_eq!(a, &a * &eye3);
        assert_eq!(a_dot_b, &a * &b);
        assert_eq!(a_dot_b, a * b);
    }

    #[test]
    fn mat_vec() {
        let m = mat::from_rows([
            [1, 2, 3],
            [4, 5, 6],
        ]);
        assert_eq!(Vector([1, 7]), &m * Vector([4, -3, 1]));
        assert_eq!(Vector([-8, -7, -6]), Vector([4, -3]) * &m);

        // try with the other dimension longer so that we make sure the sums
        // are over the right indices
        let m = m.t();
        assert_eq!(Vector([1, 7]), Vector([4, -3, 1]) * &m);
        assert_eq!(Vector([-8, -7, -6]), &m * Vector([4, -3]));
    }

    #[test]
    fn vec_ops() {
        let mut v = Vector([1.0, 2.0]);
        v += Vector([1.0, 1.0]);
        v *= 2.0;
        assert_eq!(v, Vector([4.0, 6.0]));
        assert_eq!(-v / 2.0, Vector([-2.0, -3.0]));
        assert_eq!(0.5 * v - v, Vector([-2.0, -3.0]));
    }

    #[test]
    fn vec_divide_by_zero_is_zero() {
        let v = Vector([1.0, -2.0]);
        assert_eq!(v / 0.0, Vector([0.0, 0.0]));
        assert_eq!(&v / -0.0, Vector([0.0, 0.0]));
        assert!((v / 0.0).iter().all(|x: &f64| x.to_bits() == 0));

        let mut w = Vector([f64::INFINITY, 3.0]);
        w /= 0.0;
        assert_eq!(w, Vector([0.0, 0.0]));
        assert_eq!(Vector([1.0, -2.0]) / 4.0, Vector([0.25, -0.5]));
    }

    #[test]
    fn display() {
        let m = Matrix::<2, 2, f64, ColMajor>::from_row_major([1.0, 0.5, 0.25, 2.0]);
        assert_eq!(format!("{}", m), "[[1, 0.5], [0.25, 2]]");
        assert_eq!(format!("{:.2}", m), "[[1.00, 0.50], [0.25, 2.00]]");
        assert_eq!(format!("{:e}", Vector([100.0])), "[1e2]");
    }
}
