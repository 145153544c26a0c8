//! Round-trips through each Shape binding, for both presence states, plus
//! the value semantics of the unboxed variants.

use hostopt::convert;
use hostopt::prelude::*;

// =============================================================================
// Shape round-trips
// =============================================================================

#[test]
fn i32_present_round_trip() {
    let packed = <i32 as Shape>::pack(Some(5));
    assert!(packed.is_present());
    assert_eq!(<i32 as Shape>::unpack(packed), Some(5));
}

#[test]
fn f64_absent_round_trip() {
    let packed = <f64 as Shape>::pack(None);
    assert!(packed.is_empty());
    assert_eq!(<f64 as Shape>::unpack(packed), None);
}

#[test]
fn i64_round_trip_both_states() {
    for value in [Some(i64::MIN), Some(-1), Some(0), Some(i64::MAX), None] {
        assert_eq!(<i64 as Shape>::unpack(<i64 as Shape>::pack(value)), value);
    }
}

#[test]
fn f64_round_trip_preserves_value_exactly() {
    for value in [0.0, -0.0, 2.5, f64::MIN_POSITIVE, f64::MAX, f64::NEG_INFINITY] {
        assert_eq!(<f64 as Shape>::unpack(<f64 as Shape>::pack(Some(value))), Some(value));
    }
}

#[test]
fn variant_round_trip_is_identity() {
    let present = OptionalF64::of(2.5);
    assert_eq!(<f64 as Shape>::pack(<f64 as Shape>::unpack(present)), present);

    let absent = OptionalI32::empty();
    assert_eq!(<i32 as Shape>::pack(<i32 as Shape>::unpack(absent)), absent);
}

// =============================================================================
// Free functions and method sugar agree with the dispatch
// =============================================================================

#[test]
fn convert_functions_forward_to_shape() {
    assert_eq!(convert::to_unboxed(Some(2.5_f64)), OptionalF64::of(2.5));
    assert_eq!(convert::from_unboxed::<i32>(OptionalI32::empty()), None);
    assert_eq!(convert::from_unboxed::<i64>(convert::to_unboxed(Some(9_i64))), Some(9));
}

#[test]
fn method_sugar_forwards_to_shape() {
    assert_eq!(Some(5_i32).into_unboxed(), OptionalI32::of(5));
    assert_eq!(None::<i64>.into_unboxed(), OptionalI64::empty());
}

// =============================================================================
// From impls (the per-primitive overloads)
// =============================================================================

#[test]
fn from_impls_match_leaf_conversions() {
    assert_eq!(OptionalI32::from(Some(7)), OptionalI32::of(7));
    assert_eq!(Option::<i32>::from(OptionalI32::of(7)), Some(7));
    assert_eq!(OptionalF64::from(None), OptionalF64::empty());
    assert_eq!(Option::<f64>::from(OptionalF64::empty()), None);
}

// =============================================================================
// Variant value semantics
// =============================================================================

#[test]
fn empty_values_compare_equal() {
    assert_eq!(OptionalI32::empty(), OptionalI32::from_option(None));
    assert_eq!(OptionalF64::default(), OptionalF64::empty());
}

#[test]
fn present_and_absent_never_compare_equal() {
    assert_ne!(OptionalI64::of(0), OptionalI64::empty());
    assert_ne!(OptionalF64::of(0.0), OptionalF64::empty());
}

#[test]
fn presence_bit_is_never_invented() {
    assert!(OptionalF64::of(0.0).is_present());
    assert!(OptionalI32::of(0).is_present());
    assert!(OptionalI64::empty().is_empty());
}

#[test]
fn debug_output_names_the_variant() {
    assert_eq!(format!("{:?}", OptionalI32::of(5)), "OptionalI32[5]");
    assert_eq!(format!("{:?}", OptionalI64::empty()), "OptionalI64.empty");
    assert_eq!(format!("{:?}", OptionalF64::of(2.5)), "OptionalF64[2.5]");
}
