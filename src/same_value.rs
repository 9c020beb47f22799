//! The primitive identity rule (SameValueZero).
//!
//! Identity for references, value equality for primitives, with two numeric
//! exceptions: `NaN` equals `NaN`, and `+0` equals `-0`. `null` and
//! `undefined` are each equal only to themselves.

use alloc::rc::Rc;

use crate::value::Value;

/// SameValueZero for doubles.
#[inline]
pub fn same_value_zero_f64(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// SameValueZero for single-precision floats.
#[inline]
pub fn same_value_zero_f32(a: f32, b: f32) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// SameValueZero over [`Value`]s.
///
/// Numbers and big integers never equal each other (`1` vs `1n`).
pub fn same_value_zero(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => same_value_zero_f64(*x, *y),
        (Value::BigInt(x), Value::BigInt(y)) => x == y,
        (Value::String(x), Value::String(y)) => Rc::ptr_eq(x, y) || x == y,
        (Value::Symbol(x), Value::Symbol(y)) => x == y,
        (Value::Object(x), Value::Object(y)) => x.ptr_eq(y),
        _ => false,
    }
}
