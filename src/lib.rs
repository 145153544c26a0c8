#![cfg_attr(not(feature = "std"), no_std)]

//! # hostopt
//!
//! Bidirectional bridge between `Option<T>` and a host ecosystem's optional
//! family: one generic **boxed** optional plus three **unboxed**,
//! primitive-specialized ones.
//!
//! ## Architecture
//!
//! ```text
//! +------------------------------------------------------------------+
//! |  Layer 0: Unboxed Variants (core)                                |
//! |  - OptionalF64 / OptionalI32 / OptionalI64                       |
//! |    (presence bit + raw primitive, no boxing)                     |
//! +------------------------------------------------------------------+
//!                                |
//!                                v
//! +------------------------------------------------------------------+
//! |  Layer 1: Shape Dispatch (core)                                  |
//! |  - Shape: element type -> variant, resolved at compile time      |
//! +------------------------------------------------------------------+
//!                                |
//!                                v
//! +------------------------------------------------------------------+
//! |  Layer 2: Boxed Bridge (alloc)                                   |
//! |  - Boxed<T> (payload by reference), Nullable<T> (host reference) |
//! +------------------------------------------------------------------+
//!                                |
//!                                v
//! +------------------------------------------------------------------+
//! |  Layer 3: Sugar                                                  |
//! |  - convert:: free functions, IntoHost / IntoUnboxed on Option    |
//! +------------------------------------------------------------------+
//! ```
//!
//! ## Guarantees
//!
//! - **Zero runtime dispatch**: the unboxed variant for an element type is
//!   selected entirely through the trait system. No type tags, no
//!   branches beyond the presence bit itself.
//! - **Closed specialization**: exactly three [`Shape`] bindings exist
//!   (`f64`, `i32`, `i64`); any other element type is a compile error on
//!   the unboxed path, never a silent fallback to the boxed form.
//! - **Total conversions**: every operation is pure, presence-preserving
//!   and cannot fail at runtime.
//!
//! ## Quick start
//!
//! ```
//! use hostopt::prelude::*;
//!
//! // Unboxed path: the Shape binding picks OptionalI32 at compile time.
//! let packed = Some(5_i32).into_unboxed();
//! assert_eq!(packed, hostopt::OptionalI32::of(5));
//! assert_eq!(Option::<i32>::from(packed), Some(5));
//!
//! // Boxed path: the payload moves behind a reference.
//! let boxed: hostopt::Boxed<i32> = Some(5).into_boxed();
//! assert_eq!(boxed.into_option(), Some(5));
//! ```
//!
//! ## The null-bridging quirk
//!
//! The host's boxed constructor treats a null payload as absence, and the
//! container-to-boxed conversion inherits that: a *present* container holding
//! the null reference comes out **absent**. This surprises people; see
//! [`Boxed::of_nullable`] before relying on round-trips through the boxed
//! form.
//!
//! ```
//! use hostopt::prelude::*;
//!
//! let held_null: Option<Nullable<String>> = Some(Nullable::null());
//! let boxed: Boxed<String> = held_null.into_boxed();
//! assert!(boxed.is_empty());
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Unboxed Variants (core)
// =============================================================================
pub mod unboxed;

// =============================================================================
// Layer 1: Shape Dispatch (core)
// =============================================================================
pub mod shape;

// =============================================================================
// Layer 2: Boxed Bridge (alloc)
// =============================================================================
#[cfg(feature = "alloc")]
pub mod boxed;

// =============================================================================
// Layer 3: Sugar
// =============================================================================
pub mod convert;
pub mod ext;

// Re-exports at crate root
#[cfg(feature = "alloc")]
pub use boxed::{Boxed, Nullable};
#[cfg(feature = "alloc")]
pub use ext::IntoHost;
pub use ext::IntoUnboxed;
pub use shape::Shape;
pub use unboxed::{OptionalF64, OptionalI32, OptionalI64};

/// Common items for the bridge.
pub mod prelude {
    #[cfg(feature = "alloc")]
    pub use crate::boxed::{Boxed, Nullable};
    #[cfg(feature = "alloc")]
    pub use crate::ext::IntoHost;
    pub use crate::ext::IntoUnboxed;
    pub use crate::shape::Shape;
    pub use crate::unboxed::{OptionalF64, OptionalI32, OptionalI64};
}
