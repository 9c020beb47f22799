//! Property tests over generated acyclic values.

use proptest::prelude::*;

use valeq::{
    circular_deep_equal, deep_equal, shallow_equal, strict_circular_deep_equal,
    strict_deep_equal, Value,
};

// ─── helpers ─────────────────────────────────────────────────────────────────

/// Owned description of a value, built into a fresh [`Value`] on demand so
/// two builds share no objects.
#[derive(Clone, Debug)]
enum Shape {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Date(f64),
    Array(Vec<Shape>),
    Object(Vec<(String, Shape)>),
    Map(Vec<(Shape, Shape)>),
    Set(Vec<Shape>),
}

fn build(shape: &Shape) -> Value {
    match shape {
        Shape::Undefined => Value::Undefined,
        Shape::Null => Value::Null,
        Shape::Bool(b) => Value::from(*b),
        Shape::Number(n) => Value::from(*n),
        Shape::Text(s) => Value::from(s.as_str()),
        Shape::Date(ms) => Value::date(*ms),
        Shape::Array(items) => Value::array(items.iter().map(build)),
        Shape::Object(entries) => {
            Value::object(entries.iter().map(|(k, v)| (k.as_str(), build(v))))
        }
        Shape::Map(entries) => Value::map(entries.iter().map(|(k, v)| (build(k), build(v)))),
        Shape::Set(items) => Value::set(items.iter().map(build)),
    }
}

fn number() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => (-1000i32..1000).prop_map(f64::from),
        1 => any::<f64>(),
        1 => Just(f64::NAN),
        1 => Just(-0.0),
    ]
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = prop_oneof![
        Just(Shape::Undefined),
        Just(Shape::Null),
        any::<bool>().prop_map(Shape::Bool),
        number().prop_map(Shape::Number),
        "[a-c]{0,2}".prop_map(Shape::Text),
        number().prop_map(Shape::Date),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Shape::Array),
            prop::collection::vec(("[a-d]", inner.clone()), 0..4).prop_map(Shape::Object),
            prop::collection::vec((inner.clone(), inner.clone()), 0..3).prop_map(Shape::Map),
            prop::collection::vec(inner, 0..3).prop_map(Shape::Set),
        ]
    })
}

// ─── properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn test_reflexive_on_the_same_handle(s in shape()) {
        let v = build(&s);
        prop_assert!(deep_equal(&v, &v));
        prop_assert!(shallow_equal(&v, &v));
    }

    #[test]
    fn test_reflexive_on_independent_builds(s in shape()) {
        prop_assert!(deep_equal(&build(&s), &build(&s)));
        prop_assert!(circular_deep_equal(&build(&s), &build(&s)));
        prop_assert!(strict_deep_equal(&build(&s), &build(&s)));
    }

    #[test]
    fn test_symmetric(a in shape(), b in shape()) {
        let (x, y) = (build(&a), build(&b));
        prop_assert_eq!(deep_equal(&x, &y), deep_equal(&y, &x));
        prop_assert_eq!(shallow_equal(&x, &y), shallow_equal(&y, &x));
    }

    #[test]
    fn test_circular_agrees_with_deep_on_acyclic_values(a in shape(), b in shape()) {
        let (x, y) = (build(&a), build(&b));
        prop_assert_eq!(circular_deep_equal(&x, &y), deep_equal(&x, &y));
        prop_assert_eq!(strict_circular_deep_equal(&x, &y), strict_deep_equal(&x, &y));
    }

    #[test]
    fn test_stricter_comparisons_imply_looser_ones(a in shape(), b in shape()) {
        let (x, y) = (build(&a), build(&b));
        if strict_deep_equal(&x, &y) {
            prop_assert!(deep_equal(&x, &y));
        }
        if shallow_equal(&x, &y) {
            prop_assert!(deep_equal(&x, &y));
        }
    }
}
