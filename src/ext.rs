//! # Layer 3: Method Sugar
//!
//! Extension traits attaching the conversions to `Option` itself. Pure
//! forwarding: every method delegates to [`crate::shape::Shape`] or to a
//! leaf conversion in [`crate::boxed`].
//!
//! The deprecated `to_*` spellings are the pre-0.2 names, kept as exact
//! aliases: identical behavior, compile-time discouragement only.

#[cfg(feature = "alloc")]
use crate::boxed::{Boxed, Nullable};
use crate::shape::Shape;

/// Conversion from the generic container into the host's boxed optional.
#[cfg(feature = "alloc")]
pub trait IntoHost<T>: Sized {
    /// Convert into the host's boxed optional.
    ///
    /// The element crosses through [`Nullable`], so `Some(Nullable::null())`
    /// comes out as the **absent** boxed value.
    fn into_boxed(self) -> Boxed<T>;

    /// Pre-0.2 name for [`into_boxed`](IntoHost::into_boxed).
    #[deprecated(since = "0.2.0", note = "renamed to `into_boxed`")]
    #[inline]
    fn to_boxed(self) -> Boxed<T> {
        self.into_boxed()
    }
}

#[cfg(feature = "alloc")]
impl<T, U: Into<Nullable<T>>> IntoHost<T> for Option<U> {
    #[inline]
    fn into_boxed(self) -> Boxed<T> {
        Boxed::from(self)
    }
}

/// Conversion from the generic container into the host's unboxed optional,
/// for the three element types with a [`Shape`] binding.
pub trait IntoUnboxed: Sized {
    /// The unboxed variant resolved by [`Shape`].
    type Out;

    /// Convert into the host's unboxed optional.
    fn into_unboxed(self) -> Self::Out;

    /// Pre-0.2 name for [`into_unboxed`](IntoUnboxed::into_unboxed).
    #[deprecated(since = "0.2.0", note = "renamed to `into_unboxed`")]
    #[inline]
    fn to_unboxed(self) -> Self::Out {
        self.into_unboxed()
    }
}

impl<T: Shape> IntoUnboxed for Option<T> {
    type Out = T::Out;

    #[inline]
    fn into_unboxed(self) -> T::Out {
        T::pack(self)
    }
}
