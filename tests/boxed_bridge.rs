//! The boxed bridge: presence preservation, the null-bridging rule, and
//! re-boxing of the unboxed variants.

use hostopt::convert;
use hostopt::prelude::*;

// =============================================================================
// Presence preservation
// =============================================================================

#[test]
fn present_value_round_trips() {
    let boxed: Boxed<String> = Some(String::from("five")).into_boxed();
    assert!(boxed.is_present());
    assert_eq!(boxed.into_option(), Some(String::from("five")));
}

#[test]
fn absent_round_trips() {
    let boxed: Boxed<u8> = convert::to_boxed(None::<u8>);
    assert!(boxed.is_empty());
    assert_eq!(convert::from_boxed(boxed), None);
}

#[test]
fn from_impls_mirror_the_free_functions() {
    let boxed = Boxed::<i32>::from(Some(7));
    assert_eq!(Option::<i32>::from(boxed), Some(7));
}

#[test]
fn borrowing_does_not_consume() {
    let boxed = Boxed::of(5_i32);
    assert_eq!(boxed.get(), Some(&5));
    assert_eq!(boxed.into_option(), Some(5));
}

// =============================================================================
// The null-bridging rule
// =============================================================================

#[test]
fn present_null_bridges_to_absent() {
    let container: Option<Nullable<String>> = Some(Nullable::null());
    let boxed: Boxed<String> = container.into_boxed();
    assert!(boxed.is_empty());
}

#[test]
fn present_live_reference_stays_present() {
    let container = Some(Nullable::of(5_u8));
    let boxed: Boxed<u8> = container.into_boxed();
    assert_eq!(boxed.into_option(), Some(5));
}

#[test]
fn of_nullable_is_the_source_of_the_rule() {
    assert!(Boxed::<String>::of_nullable(Nullable::null()).is_empty());
    assert!(Boxed::of_nullable(Nullable::of(1)).is_present());
}

#[test]
fn nullable_unboxes_like_the_container() {
    assert!(Nullable::<u8>::null().is_null());
    assert_eq!(Nullable::of(5_u8).into_option(), Some(5));
    assert_eq!(Nullable::<u8>::null().into_option(), None);
}

// =============================================================================
// Re-boxing the unboxed variants
// =============================================================================

#[test]
fn reboxing_preserves_presence_and_value() {
    let reboxed: Boxed<i64> = OptionalI64::of(42).into_boxed();
    assert_eq!(reboxed.into_option(), Some(42));

    let empty: Boxed<f64> = OptionalF64::empty().into();
    assert!(empty.is_empty());

    let via_from: Boxed<i32> = Boxed::from(OptionalI32::of(7));
    assert_eq!(via_from.into_option(), Some(7));
}
