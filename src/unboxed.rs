//! # Layer 0: Unboxed Variants
//!
//! The host ecosystem's primitive-specialized optionals: `OptionalF64`,
//! `OptionalI32`, `OptionalI64`. Each is a closed, non-generic value type
//! carrying a presence bit and the raw primitive. No boxing anywhere.
//!
//! The leaf conversions to and from `Option` live here as inherent
//! functions; the generic surface over them is [`crate::shape::Shape`].

use core::fmt;

/// Generate one unboxed variant plus its leaf conversions.
///
/// `$zero` fills the payload slot of the absent value; the presence bit
/// makes it unobservable.
macro_rules! unboxed_variant {
    ($prim:ident, $zero:expr) => {
        paste::paste! {
            #[doc = "Unboxed host optional carrying a `" $prim "` directly."]
            #[doc = ""]
            #[doc = "Absent values compare equal regardless of the stale"]
            #[doc = "payload slot; the payload is only ever observable when"]
            #[doc = "the presence bit is set."]
            #[derive(Clone, Copy)]
            #[repr(C)]
            pub struct [<Optional $prim:upper>] {
                present: bool,
                value: $prim,
            }

            impl [<Optional $prim:upper>] {
                #[doc = "A present `" $prim "`."]
                #[inline]
                pub const fn of(value: $prim) -> Self {
                    Self { present: true, value }
                }

                /// The absent value.
                #[inline]
                pub const fn empty() -> Self {
                    Self { present: false, value: $zero }
                }

                #[inline]
                pub const fn is_present(&self) -> bool {
                    self.present
                }

                #[inline]
                pub const fn is_empty(&self) -> bool {
                    !self.present
                }

                #[doc = "Leaf conversion: `Option<" $prim ">` into the unboxed form."]
                #[inline]
                pub const fn from_option(value: Option<$prim>) -> Self {
                    match value {
                        Some(v) => Self::of(v),
                        None => Self::empty(),
                    }
                }

                #[doc = "Leaf conversion: back to `Option<" $prim ">`."]
                #[inline]
                pub const fn into_option(self) -> Option<$prim> {
                    if self.present { Some(self.value) } else { None }
                }

                #[doc = "Pre-0.2 name for `into_option`."]
                #[deprecated(since = "0.2.0", note = "renamed to `into_option`")]
                #[inline]
                pub const fn to_option(self) -> Option<$prim> {
                    self.into_option()
                }

                /// Re-box into the host's generic representation.
                #[cfg(feature = "alloc")]
                #[inline]
                pub fn into_boxed(self) -> crate::boxed::Boxed<$prim> {
                    crate::boxed::Boxed::from_option(self.into_option())
                }

                #[doc = "Pre-0.2 name for `into_boxed`."]
                #[cfg(feature = "alloc")]
                #[deprecated(since = "0.2.0", note = "renamed to `into_boxed`")]
                #[inline]
                pub fn to_boxed(self) -> crate::boxed::Boxed<$prim> {
                    self.into_boxed()
                }
            }

            impl Default for [<Optional $prim:upper>] {
                #[inline]
                fn default() -> Self {
                    Self::empty()
                }
            }

            impl PartialEq for [<Optional $prim:upper>] {
                fn eq(&self, other: &Self) -> bool {
                    match (self.present, other.present) {
                        (true, true) => self.value == other.value,
                        (false, false) => true,
                        _ => false,
                    }
                }
            }

            impl fmt::Debug for [<Optional $prim:upper>] {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    match self.into_option() {
                        Some(v) => write!(f, "{}[{:?}]", stringify!([<Optional $prim:upper>]), v),
                        None => write!(f, "{}.empty", stringify!([<Optional $prim:upper>])),
                    }
                }
            }

            impl From<Option<$prim>> for [<Optional $prim:upper>] {
                #[inline]
                fn from(value: Option<$prim>) -> Self {
                    Self::from_option(value)
                }
            }

            impl From<[<Optional $prim:upper>]> for Option<$prim> {
                #[inline]
                fn from(value: [<Optional $prim:upper>]) -> Self {
                    value.into_option()
                }
            }

            #[cfg(feature = "alloc")]
            impl From<[<Optional $prim:upper>]> for crate::boxed::Boxed<$prim> {
                #[inline]
                fn from(value: [<Optional $prim:upper>]) -> Self {
                    value.into_boxed()
                }
            }
        }
    };
}

unboxed_variant!(f64, 0.0);
unboxed_variant!(i32, 0);
unboxed_variant!(i64, 0);

// NaN payloads rule out `Eq` for `OptionalF64`.
impl Eq for OptionalI32 {}
impl Eq for OptionalI64 {}
