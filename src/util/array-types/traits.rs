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

// Traits exposed in public interfaces,
// implemented on finite sets of types rather than more general
//  generic bounds in order to reduce coupling with client crates.

pub use self::semiring::Semiring;
mod semiring {
    /// Trait for scalars with addition and multiplication.
    ///
    /// Enough for construction, transposes, and every product in this crate.
    /// You get primitive floats and integers; the trait is sealed to avoid
    /// accidental commitments.
    pub trait Semiring : Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::ring::Ring;
mod ring {
    use super::Semiring;

    /// Trait for scalars with addition, multiplication, and subtraction.
    ///
    /// This trait is sealed to avoid accidental commitments.
    /// It doesn't include unsigned integers because a ring must be
    /// closed under negation.
    pub trait Ring : Semiring + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::field::Field;
mod field {
    use super::Ring;

    /// Trait for scalars with addition, multiplication, subtraction, and division.
    ///
    /// This trait is sealed to avoid accidental commitments.
    /// It's currently just primitive, real floating point types.
    /// Norms, inverses and determinants all require it.
    pub trait Field : Ring + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}


// Generate the (trivial) impls of Field, Ring, and Semiring.
gen_each!{
    @{field}
    for_each!({$T:ty}) => {
        impl Field for $T { }
        impl field::Sealed for $T { }
    };
}

gen_each!{
    @{ring}
    for_each!({$T:ty}) => {
        impl Ring for $T { }
        impl ring::Sealed for $T { }
    };
}

gen_each!{
    @{semiring}
    for_each!({$T:ty}) => {
        impl Semiring for $T { }
        impl semiring::Sealed for $T { }
    };
}

/// Marker traits for generic implementations.
///
/// These carry the actual arithmetic bounds, so that the public sealed
/// traits stay free of supertraits that we would have to commit to.
/// They are public (so that downstream crates like `fixmat-linalg` can
/// name them in bounds) but hidden from the docs.
#[doc(hidden)]
pub mod internal {
    use std::ops::{Add, Sub, Mul, Div, Neg};
    use std::ops::{AddAssign, SubAssign, MulAssign};

    macro_rules! markers {
        ($( $name:ident[$($bound:tt)+]; )+)
        => {$(
            pub trait $name: $($bound)+ { }
            impl<T> $name for T where T: $($bound)+ { }
        )+};
    }

    markers!{
        SelfAdd[Sized + Add<Self, Output=Self> + AddAssign];
        SelfSub[Sized + Sub<Self, Output=Self> + SubAssign];
        SelfMul[Sized + Mul<Self, Output=Self> + MulAssign];
        SelfDiv[Sized + Div<Self, Output=Self>];
        SelfNeg[Sized + Neg<Output=Self>];
    }

    pub trait PrimitiveSemiring
        : Sized + Copy + Clone + Default
        + PartialEq + PartialOrd
        + std::fmt::Debug
        + SelfAdd + SelfMul
        + num_traits::Zero
        + num_traits::One
    {
        fn from_uint(u: u8) -> Self;
    }

    gen_each!{
        @{semiring}
        for_each!({$T:ty})
        => {
            impl PrimitiveSemiring for $T {
                #[inline(always)] fn from_uint(u: u8) -> $T { u as $T }
            }
        };
    }

    pub trait PrimitiveRing
        : PrimitiveSemiring
        + SelfSub + SelfNeg
    {
        fn abs(self) -> Self;
    }

    gen_each!{
        @{ring}
        for_each!({$T:ty})
        => {
            impl PrimitiveRing for $T {
                #[inline(always)] fn abs(self) -> $T { <$T>::abs(self) }
            }
        };
    }

    pub trait PrimitiveFloat
        : PrimitiveRing
        + SelfDiv
    {
        // (allow(unused) because these are arbitrarily added as they're needed,
        //  and it's annoying to have to remove them only to possibly later have
        //  to add them back)
        #[allow(unused)] fn sqrt(self) -> Self;
        #[allow(unused)] fn min(self, b: Self) -> Self;
        #[allow(unused)] fn max(self, b: Self) -> Self;
        #[allow(unused)] fn recip(self) -> Self;
    }

    gen_each!{
        @{float}
        for_each!({$T:ty})
        => {
            impl PrimitiveFloat for $T {
                #[inline(always)] fn sqrt(self) -> $T { <$T>::sqrt(self) }
                #[inline(always)] fn min(self, b: Self) -> $T { <$T>::min(self, b) }
                #[inline(always)] fn max(self, b: Self) -> $T { <$T>::max(self, b) }
                #[inline(always)] fn recip(self) -> $T { <$T>::recip(self) }
            }
        };
    }
}
