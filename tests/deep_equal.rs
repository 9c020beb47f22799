//! Integration tests for the default deep comparison.
//!
//! Run with: `cargo test`

use valeq::value::{Class, TypedArray, TypedArrayKind};
use valeq::{deep_equal, Value};

// ─── helpers ─────────────────────────────────────────────────────────────────

fn bc() -> Value {
    Value::object([("b", "c")])
}

fn num(n: f64) -> Value {
    Value::from(n)
}

// ─── primitives ──────────────────────────────────────────────────────────────

#[test]
fn test_numeric_edge_cases() {
    assert!(deep_equal(&num(0.0), &num(-0.0)));
    assert!(deep_equal(&num(f64::NAN), &num(f64::NAN)));
    assert!(!deep_equal(&num(f64::NAN), &num(123.0)));
}

#[test]
fn test_null_and_undefined() {
    assert!(deep_equal(&Value::Null, &Value::Null));
    assert!(deep_equal(&Value::Undefined, &Value::Undefined));
    assert!(!deep_equal(&Value::Null, &Value::Undefined));
    assert!(!deep_equal(&Value::Null, &Value::new_object()));
}

#[test]
fn test_primitives_of_different_types() {
    assert!(!deep_equal(&Value::from("1"), &num(1.0)));
    assert!(!deep_equal(&Value::from(true), &num(1.0)));
    assert!(!deep_equal(&Value::BigInt(1), &num(1.0)));
}

// ─── category discrimination ─────────────────────────────────────────────────

#[test]
fn test_empty_object_is_not_an_empty_array() {
    assert!(!deep_equal(&Value::new_object(), &Value::new_array()));
    assert!(!deep_equal(&Value::new_array(), &Value::new_object()));
}

#[test]
fn test_map_never_equals_set() {
    let map = Value::map([(1, 1)]);
    let set = Value::set([1]);
    assert!(!deep_equal(&map, &set));
    assert!(!deep_equal(&Value::map(Vec::<(Value, Value)>::new()), &Value::set(Vec::<Value>::new())));
}

#[test]
fn test_boxed_primitive_is_not_the_primitive() {
    let boxed = Value::boxed(Value::from("x")).unwrap();
    assert!(!deep_equal(&boxed, &Value::from("x")));
    assert!(deep_equal(&boxed, &Value::boxed(Value::from("x")).unwrap()));
}

// ─── arrays ──────────────────────────────────────────────────────────────────

#[test]
fn test_arrays_are_order_sensitive() {
    assert!(deep_equal(&Value::array([1, 2, 3]), &Value::array([1, 2, 3])));
    assert!(!deep_equal(&Value::array([1, 2, 3]), &Value::array([3, 2, 1])));
}

#[test]
fn test_nested_structures() {
    let make = || {
        Value::object([
            ("list", Value::array([Value::object([("x", 1)]), Value::array([2, 3])])),
            ("when", Value::date(1_700_000_000_000.0)),
            ("re", Value::regexp("^a", "im").unwrap()),
        ])
    };
    assert!(deep_equal(&make(), &make()));
    let changed = make();
    changed.as_object().unwrap().set("when", Value::date(0.0)).unwrap();
    assert!(!deep_equal(&make(), &changed));
}

// ─── keyed collections ───────────────────────────────────────────────────────

#[test]
fn test_maps_with_duplicate_looking_entries() {
    let a = Value::map([(bc(), 2), (bc(), 2)]);
    let b = Value::map([(bc(), 2), (bc(), 2)]);
    assert!(deep_equal(&a, &b));
}

#[test]
fn test_one_different_entry_in_either_position_breaks_equality() {
    let a = Value::map([(bc(), 2), (bc(), 2)]);
    let other = || Value::object([("b", "d")]);
    let first = Value::map([(other(), 2), (bc(), 2)]);
    let second = Value::map([(bc(), 2), (other(), 2)]);
    for changed in [&first, &second] {
        assert!(!deep_equal(&a, changed));
        assert!(!deep_equal(changed, &a));
    }
}

#[test]
fn test_map_order_is_irrelevant() {
    let a = Value::map([(Value::from("x"), bc()), (Value::from("y"), Value::from(1))]);
    let b = Value::map([(Value::from("y"), Value::from(1)), (Value::from("x"), bc())]);
    assert!(deep_equal(&a, &b));
}

#[test]
fn test_sets_with_structural_members() {
    let a = Value::set([bc(), Value::array([1])]);
    let b = Value::set([Value::array([1]), bc()]);
    assert!(deep_equal(&a, &b));
    assert!(!deep_equal(&a, &Value::set([bc(), Value::array([2])])));
}

// ─── scalars ─────────────────────────────────────────────────────────────────

#[test]
fn test_invalid_dates_are_equal() {
    assert!(deep_equal(&Value::invalid_date(), &Value::invalid_date()));
    assert!(!deep_equal(&Value::invalid_date(), &Value::date(0.0)));
}

#[test]
fn test_regexp_flag_order() {
    let a = Value::regexp("a|b", "gim").unwrap();
    let b = Value::regexp("a|b", "mig").unwrap();
    assert!(deep_equal(&a, &b));
    assert!(!deep_equal(&a, &Value::regexp("a|b", "gi").unwrap()));
}

#[test]
fn test_typed_arrays_need_the_same_kind() {
    let bytes = [0u8, 0, 128, 63];
    let floats = TypedArray::from_bytes(TypedArrayKind::Float32, &bytes).unwrap();
    let ints = TypedArray::from_bytes(TypedArrayKind::Uint32, &bytes).unwrap();
    let again = TypedArray::from_bytes(TypedArrayKind::Float32, &bytes).unwrap();
    assert!(deep_equal(&floats.clone().into(), &again.into()));
    assert!(!deep_equal(&floats.into(), &ints.into()));
}

#[test]
fn test_thenables_and_functions_use_identity() {
    let p = Value::promise();
    assert!(deep_equal(&p, &p));
    assert!(!deep_equal(&Value::promise(), &Value::promise()));

    let then = Value::function("then");
    let a = Value::object([("then", then.clone())]);
    let b = Value::object([("then", then)]);
    assert!(!deep_equal(&a, &b));
    assert!(deep_equal(&a, &a.clone()));

    assert!(!deep_equal(&Value::function("f"), &Value::function("f")));
}

// ─── objects ─────────────────────────────────────────────────────────────────

#[test]
fn test_class_instances_compare_by_properties() {
    let class = Class::new("Failure");
    let a = Value::instance(&class, [("message", "boom")]);
    let b = Value::instance(&class, [("message", "boom")]);
    let c = Value::instance(&class, [("message", "bang")]);
    assert!(deep_equal(&a, &b));
    assert!(!deep_equal(&a, &c));
}

#[test]
fn test_instances_of_distinct_classes_differ() {
    let a = Value::instance(&Class::new("A"), [("x", 1)]);
    let b = Value::instance(&Class::new("A"), [("x", 1)]);
    assert!(!deep_equal(&a, &b));
}

#[test]
fn test_deep_equal_does_not_mutate_operands() {
    let a = Value::object([("list", Value::array([1, 2]))]);
    let b = Value::object([("list", Value::array([1, 2]))]);
    let before = format!("{:?}", a);
    assert!(deep_equal(&a, &b));
    assert_eq!(format!("{:?}", a), before);
}
