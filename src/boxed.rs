//! # Layer 2: Boxed Bridge
//!
//! The host ecosystem's generic optional, [`Boxed`], and the model of a
//! host reference, [`Nullable`]. A present `Boxed` always stores its
//! payload by reference (behind a `Box`), never as a raw primitive; the
//! unboxed variants in [`crate::unboxed`] exist to avoid exactly that.
//!
//! ## The null-bridging quirk
//!
//! [`Boxed::of_nullable`] maps the null reference to the **absent** state:
//! a present container holding `Nullable::null()` comes out as
//! `Boxed::empty()`, not as present-with-null. The container-to-boxed
//! conversion routes every element through `Nullable`, so the collapse is
//! structural, not a recoverable condition. Round-tripping a present null
//! will observe it become absent.

use alloc::boxed::Box;

/// A host reference: either a live reference to a `T` or the null
/// reference.
///
/// Rust values cannot be null, so this type is the only way a container
/// element can carry the host's null. It exists to give the null-bridging
/// rule (see [`Boxed::of_nullable`]) something to bind to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nullable<T>(Option<Box<T>>);

impl<T> Nullable<T> {
    /// A live reference to `value`.
    #[inline]
    pub fn of(value: T) -> Self {
        Self(Some(Box::new(value)))
    }

    /// The null reference.
    #[inline]
    pub const fn null() -> Self {
        Self(None)
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0.is_none()
    }

    /// Unbox into the container representation; null becomes absent.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.0.map(|b| *b)
    }
}

/// Every plain value is a live (non-null) reference.
impl<T> From<T> for Nullable<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::of(value)
    }
}

/// The host ecosystem's generic optional. Present payloads are stored by
/// reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Boxed<T> {
    value: Option<Box<T>>,
}

impl<T> Boxed<T> {
    /// A present value.
    #[inline]
    pub fn of(value: T) -> Self {
        Self { value: Some(Box::new(value)) }
    }

    /// The absent value.
    #[inline]
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// Build from a host reference. **The null reference becomes
    /// [`empty`](Boxed::empty)**. This is the host constructor whose
    /// semantics the whole container-to-boxed path inherits.
    #[inline]
    pub fn of_nullable(reference: Nullable<T>) -> Self {
        Self { value: reference.0 }
    }

    #[inline]
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Borrow the payload, if present.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.value.as_deref()
    }

    /// Leaf conversion from the generic container. A plain Rust value can
    /// never be null, so this direction is always presence-preserving.
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        Self { value: value.map(Box::new) }
    }

    /// Leaf conversion back to the generic container (unboxes).
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value.map(|b| *b)
    }

    /// Pre-0.2 name for [`into_option`](Boxed::into_option).
    #[deprecated(since = "0.2.0", note = "renamed to `into_option`")]
    #[inline]
    pub fn to_option(self) -> Option<T> {
        self.into_option()
    }
}

impl<T> Default for Boxed<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

/// Container -> boxed. The element crosses through [`Nullable`], so a
/// payload that is the null reference collapses to the absent state.
impl<T, U: Into<Nullable<T>>> From<Option<U>> for Boxed<T> {
    #[inline]
    fn from(value: Option<U>) -> Self {
        match value {
            Some(v) => Self::of_nullable(v.into()),
            None => Self::empty(),
        }
    }
}

impl<T> From<Boxed<T>> for Option<T> {
    #[inline]
    fn from(value: Boxed<T>) -> Self {
        value.into_option()
    }
}
