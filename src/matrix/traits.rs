/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Scalar traits exposed in public interfaces,
// implemented on finite sets of types rather than more general
//  generic bounds in order to reduce coupling with client crates.

pub use self::semiring::Semiring;
mod semiring {
    use super::internal::PrimitiveSemiring;

    /// Trait for matrix elements with addition and multiplication.
    ///
    /// You get primitive floats and integers.  That's all that this API
    /// is willing to commit to at the moment.
    /// This trait is sealed to avoid accidental commitments.
    pub trait Semiring : PrimitiveSemiring + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::ring::Ring;
mod ring {
    use super::Semiring;
    use super::internal::PrimitiveRing;

    /// Trait for matrix elements with addition, multiplication, and subtraction.
    ///
    /// This trait is sealed to avoid accidental commitments.
    /// It doesn't include unsigned integers because a ring must be
    /// closed under negation.
    pub trait Ring : Semiring + PrimitiveRing + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::field::Field;
mod field {
    use super::Ring;
    use super::internal::PrimitiveFloat;

    /// Trait for matrix elements with addition, multiplication, subtraction, and division.
    ///
    /// The LU kernels require this.  It's currently just primitive, real
    /// floating point types.
    pub trait Field : Ring + PrimitiveFloat + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

// Generate the (trivial) impls of Field, Ring, and Semiring.
gen_each!{
    @{field}
    impl_field!({$T:ty}) => {
        impl Field for $T { }
        impl field::Sealed for $T { }
    };
}

gen_each!{
    @{ring}
    impl_ring!({$T:ty}) => {
        impl Ring for $T { }
        impl ring::Sealed for $T { }
    };
}

gen_each!{
    @{semiring}
    impl_semiring!({$T:ty}) => {
        impl Semiring for $T { }
        impl semiring::Sealed for $T { }
    };
}

/// Supertraits of the public scalar traits.
///
/// These are nameable so that the bounds can be used from the other crates in
/// the workspace, but they are not part of the supported API.
#[doc(hidden)]
pub mod internal {
    use std::fmt;
    use std::hash::Hasher;
    use std::ops::{Add, Sub, Mul, Div, Neg};

    macro_rules! markers {
        ($( $name:ident[$($bound:tt)+]; )+)
        => {$(
            pub trait $name: $($bound)+ { }
            impl<T> $name for T where T: $($bound)+ { }
        )+};
    }

    markers!{
        SelfAdd[Sized + Add<Self, Output=Self>];
        SelfSub[Sized + Sub<Self, Output=Self>];
        SelfMul[Sized + Mul<Self, Output=Self>];
        SelfDiv[Sized + Div<Self, Output=Self>];
        SelfNeg[Sized + Neg<Output=Self>];
    }

    pub trait PrimitiveSemiring
        : Sized + Copy + Clone + Default + 'static
        + PartialEq + PartialOrd
        + fmt::Debug + fmt::Display
        + SelfAdd + SelfMul
        + num_traits::Zero
        + num_traits::One
        + std::iter::Sum
        + std::iter::Product
    {
        /// Feed a hasher with this scalar, such that values which compare
        /// equal produce equal hashes.
        fn hash_scalar<H: Hasher>(&self, state: &mut H);
    }

    gen_each!{
        @{integer}
        for_each!({$T:ty})
        => {
            impl PrimitiveSemiring for $T {
                #[inline(always)]
                fn hash_scalar<H: Hasher>(&self, state: &mut H)
                { std::hash::Hash::hash(self, state) }
            }
        };
    }

    gen_each!{
        @{field}
        for_each!({$T:ty})
        => {
            impl PrimitiveSemiring for $T {
                #[inline]
                fn hash_scalar<H: Hasher>(&self, state: &mut H) {
                    // +0.0 and -0.0 compare equal, so they must hash equal.
                    let x = if *self == 0.0 { 0.0 } else { *self };
                    std::hash::Hash::hash(&x.to_bits(), state)
                }
            }
        };
    }

    pub trait PrimitiveRing
        : PrimitiveSemiring
        + SelfSub + SelfNeg
    { }

    gen_each!{
        @{ring}
        for_each!({$T:ty})
        => {
            impl PrimitiveRing for $T { }
        };
    }

    pub trait PrimitiveFloat
        : PrimitiveRing
        + SelfDiv
        + num_traits::Float
    { }

    gen_each!{
        @{field}
        for_each!({$T:ty})
        => {
            impl PrimitiveFloat for $T { }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher;

    fn hash_of<X: Semiring>(x: X) -> u64 {
        let mut h = DefaultHasher::new();
        x.hash_scalar(&mut h);
        h.finish()
    }

    #[test]
    fn signed_zero_hashes_equal() {
        assert_eq!(hash_of(0.0f64), hash_of(-0.0f64));
        assert_eq!(hash_of(0.0f32), hash_of(-0.0f32));
        assert_ne!(hash_of(1.0f64), hash_of(-1.0f64));
    }

    #[test]
    fn integer_hashes_are_deterministic() {
        assert_eq!(hash_of(17u32), hash_of(17u32));
        assert_eq!(hash_of(-3i64), hash_of(-3i64));
    }
}
