/// Higher-order macro that iterates over a cartesian product.
///
/// Useful for generating impls that cannot be written generically,
/// either because of the orphan rules (`scalar * matrix`) or because
/// the impl needs arithmetic on a const parameter (`N + 1`).
///
/// It takes a number of groups of token trees and a suitable definition
/// for a callback macro, and it calls the macro with one token tree from
/// each group in order.
///
/// See the examples module in the source for example usage.
macro_rules! cartesian {
    (
        $([$($groups:tt)*])*
        $mac:ident!($($mac_match:tt)*)
        => {$($mac_body:tt)*}$(;)*
    )
    => {
        macro_rules! $mac {
            ($($mac_match)*) => {$($mac_body)*};
        }
        cartesian__!{ @product::next($([$($groups)*])*) -> ($mac!()) }
    };
}

/// implementation detail, go away
macro_rules! cartesian__ {

    (@product::next([$($token:tt)+] $($rest:tt)*) -> $cb:tt)
    => { cartesian__!{ @product::unpack([$($token)+] $($rest)*) -> $cb } };
    // base case; direct product of no arguments
    (@product::next() -> ($mac:ident!($($args:tt)*)))
    => {$mac!{$($args)*}};

    // Each direct product in the invocation incurs a fixed number of recursions
    //  as we replicate the macro.  First, we must smash anything we want to replicate
    //  into a single tt that can be matched without repetitions.  Do this to `rest`.
    (@product::unpack([$($token:tt)*] $($rest:tt)*) -> $cb:tt)
    => {cartesian__!{ @product::unpack_2([$($token)*] [$($rest)*]) -> $cb }};

    // Replicate macro for each token.
    (@product::unpack_2([$($token:tt)*] $rest:tt) -> $cb:tt)
    => { $( cartesian__!{ @product::unpack_3($token $rest) -> $cb } )* };

    // Expand the unparsed arguments back to normal;
    // add the token into the macro call
    (@product::unpack_3($token:tt [$($rest:tt)*]) -> ($mac:ident!($($args:tt)*)))
    => {cartesian__!{ @product::next($($rest)*) -> ($mac!($($args)*$token)) }};
}

/// `cartesian!` with some predefined groups used in the library's public API.
///
/// See the examples module in the source for example usage.
macro_rules! gen_each {
    ($($arg:tt)*) => { gen_each__!{[$($arg)*] -> []} };
}

macro_rules! gen_each__ {
    //----------------------------
    // Groups using the standard syntax supported by cartesian

    ([[$($alternatives:tt)*] $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        $($alternatives)*
    ]] }};

    //----------------------------
    // Special groups of the form @{...}

    // NOTE: This macro is what truly defines the set of members
    //       for each sealed scalar trait.

    // Types that implement Field
    ([@{field} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {f32} {f64}
    ]] }};

    // Types that implement Ring
    ([@{ring} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {f32} {f64}
        {i8} {i16} {i32} {i64} {isize}
    ]] }};

    // Types that implement Semiring
    ([@{semiring} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {f32} {f64}
        {i8} {i16} {i32} {i64} {isize}
        {u8} {u16} {u32} {u64} {usize}
    ]] }};

    // PrimitiveFloat types
    ([@{float} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {f32} {f64}
    ]] }};

    // Owned and borrowed forms of an operand, as (lifetime params) (prefix).
    ([@{by_ref_a} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        [(   ) (   )] [('a,) (&'a)]
    ]] }};

    ([@{by_ref_b} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        [(   ) (   )] [('b,) (&'b)]
    ]] }};

    // Sizes for which `N + 1` is spelled out by homogeneous lift/project.
    ([@{1...16} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
             { 1} { 2} { 3} { 4} { 5} { 6} { 7} { 8} { 9}
        {10} {11} {12} {13} {14} {15} {16}
    ]] }};

    // Finally: Delegate to `cartesian`
    ([$mac:ident!$($defn_args:tt)*] -> [$($groups:tt)*])
    => {
        cartesian!{
            $($groups)*
            $mac!$($defn_args)*
        }
    };
}

#[cfg(test)]
mod examples {
    mod cartesian {
        trait Trait { }
        // NOTE: Braces around the alternatives are not strictly necessary
        //       (cartesian simply iterates over token trees), but they tend
        //       to help group tokens and resolve any would-be ambiguities in
        //       the callback's match pattern.
        cartesian!{
            [{i32} {u32}]
            [{0} {1} {2} {3}]
            unique_name!({$T:ty} {$n:expr})
            => {
                impl Trait for [$T; $n] { }
            }
        }

        #[test]
        fn example_works() {
            fn assert_trait<T:Trait>() {}
            assert_trait::<[u32; 0]>();
            assert_trait::<[i32; 2]>();
        }
    }

    mod gen_each {
        trait Trait { }
        gen_each!{
            @{field}      // equivalent to [{f32} {f64}]
            @{1...16}     // equivalent to [{1} {2} ... {16}]
            [{i32} {u32}] // explicitly defined groups are still allowed
            unique_name!({$A:ty} {$n:tt} {$B:ty})
            => {
                impl Trait for ([$A; $n], [$B; { $n + 1 }]) { }
            }
        }

        #[test]
        fn example_works() {
            fn assert_trait<T:Trait>() {}
            assert_trait::<([f64; 3], [i32; 4])>();
            assert_trait::<([f32; 16], [u32; 17])>();
        }
    }
}
