//! Guided tour of the bridge: unboxed, boxed, and back.
//!
//! Run with `cargo run --example bridge_tour`.

use hostopt::convert;
use hostopt::prelude::*;

fn main() {
    // Unboxed path: the Shape binding picks OptionalI32 at compile time.
    let packed = Some(5_i32).into_unboxed();
    println!("packed      : {packed:?}");
    println!("unpacked    : {:?}", convert::from_unboxed::<i32>(packed));

    let absent = convert::to_unboxed(None::<f64>);
    println!("absent f64  : {absent:?}");

    // Boxed path: the payload moves behind a reference.
    let boxed: Boxed<String> = Some(String::from("five")).into_boxed();
    println!("boxed       : {:?}", boxed.get());

    // The null-bridging rule: a present null reference comes out absent.
    let held_null: Option<Nullable<String>> = Some(Nullable::null());
    let bridged: Boxed<String> = held_null.into_boxed();
    println!("present-null bridged to absent? {}", bridged.is_empty());

    // Re-boxing an unboxed variant into the generic host form.
    let reboxed: Boxed<i64> = OptionalI64::of(42).into_boxed();
    println!("reboxed     : {:?}", reboxed.into_option());
}
