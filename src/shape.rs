//! # Layer 1: Shape Dispatch
//!
//! The one place where genericity and specialization meet. A [`Shape`]
//! binding associates a container element type with its unboxed host
//! variant and the pair of conversions between them, resolved entirely
//! through the trait system: no type tags, no reflection, no branches.
//!
//! Exactly three bindings exist. The trait is sealed, so the set is closed
//! and an unsupported element type is a trait bound error at the call site,
//! never a runtime failure or a silent fallback to the boxed form.

use crate::unboxed::{OptionalF64, OptionalI32, OptionalI64};

mod sealed {
    pub trait Sealed {}

    impl Sealed for f64 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}

/// Binding between a container element type and its unboxed host variant.
///
/// Implemented for `f64`, `i32` and `i64` (the three primitives the host
/// ecosystem defines unboxed optionals for) and nothing else. Callers
/// write the conversion once per direction against this trait and the
/// compiler selects the variant from the element type.
///
/// ```
/// use hostopt::Shape;
///
/// let packed = <i32 as Shape>::pack(Some(5));
/// assert_eq!(<i32 as Shape>::unpack(packed), Some(5));
/// ```
///
/// Any other element type is rejected at compile time:
///
/// ```compile_fail
/// use hostopt::prelude::*;
///
/// // &str has no unboxed host variant.
/// let _ = Some("five").into_unboxed();
/// ```
///
/// ```compile_fail
/// use hostopt::prelude::*;
///
/// // Neither does a wrapper of a bound primitive.
/// let _ = Some(Some(5_i32)).into_unboxed();
/// ```
pub trait Shape: sealed::Sealed + Copy + Sized {
    /// The unboxed variant this element type packs into.
    type Out: Copy;

    /// Container to unboxed variant. Presence-preserving.
    fn pack(value: Option<Self>) -> Self::Out;

    /// Unboxed variant back to container. Presence-preserving.
    fn unpack(packed: Self::Out) -> Option<Self>;
}

impl Shape for f64 {
    type Out = OptionalF64;

    #[inline(always)]
    fn pack(value: Option<f64>) -> OptionalF64 {
        OptionalF64::from_option(value)
    }

    #[inline(always)]
    fn unpack(packed: OptionalF64) -> Option<f64> {
        packed.into_option()
    }
}

impl Shape for i32 {
    type Out = OptionalI32;

    #[inline(always)]
    fn pack(value: Option<i32>) -> OptionalI32 {
        OptionalI32::from_option(value)
    }

    #[inline(always)]
    fn unpack(packed: OptionalI32) -> Option<i32> {
        packed.into_option()
    }
}

impl Shape for i64 {
    type Out = OptionalI64;

    #[inline(always)]
    fn pack(value: Option<i64>) -> OptionalI64 {
        OptionalI64::from_option(value)
    }

    #[inline(always)]
    fn unpack(packed: OptionalI64) -> Option<i64> {
        packed.into_option()
    }
}
