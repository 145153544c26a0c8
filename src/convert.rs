//! # Layer 3: Free-standing Conversions
//!
//! The whole conversion surface as plain functions, for callers that
//! prefer `convert::to_boxed(opt)` over the method sugar in [`crate::ext`].
//! Each function forwards to a leaf conversion or to the [`Shape`]
//! dispatch; none holds logic of its own.
//!
//! Calls targeting the boxed form never consult `Shape`; they go straight
//! to the leaves.

#[cfg(feature = "alloc")]
use crate::boxed::{Boxed, Nullable};
use crate::shape::Shape;

/// Container -> boxed host optional.
///
/// The element crosses through [`Nullable`]; a payload that is the null
/// reference collapses to the absent state (the null-bridging rule).
#[cfg(feature = "alloc")]
#[inline]
pub fn to_boxed<T, U: Into<Nullable<T>>>(value: Option<U>) -> Boxed<T> {
    Boxed::from(value)
}

/// Boxed host optional -> container.
#[cfg(feature = "alloc")]
#[inline]
pub fn from_boxed<T>(value: Boxed<T>) -> Option<T> {
    value.into_option()
}

/// Container -> unboxed host optional, resolved through [`Shape`].
///
/// Compiles only for the three bound element types.
#[inline]
pub fn to_unboxed<T: Shape>(value: Option<T>) -> T::Out {
    T::pack(value)
}

/// Unboxed host optional -> container.
///
/// `Shape::Out` is not injective, so the element type usually needs
/// spelling out: `from_unboxed::<i32>(packed)`. The `From` impls on the
/// variants cover the inference-friendly direction.
#[inline]
pub fn from_unboxed<T: Shape>(packed: T::Out) -> Option<T> {
    T::unpack(packed)
}
