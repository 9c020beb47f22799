//! Keyed-object rules.
//!
//! # Owner back-references
//!
//! Element-like objects tagged with an own `$$typeof` carry an `_owner` link
//! into a potentially huge parent graph. When either side is tagged, `_owner`
//! is not traversed, but the two tags must agree.

use crate::same_value::same_value_zero;
use crate::state::{Key, State};
use crate::value::{Obj, ObjectData, PropertyKey, Value};

const OWNER: &str = "_owner";
const TYPE_TAG: &str = "$$typeof";

/// Same count of own enumerable string keys, and every such key of `a` is an
/// own key of `b` with a recursively equal value.
pub fn are_objects_equal<M>(a: &Obj, b: &Obj, state: &State<'_, M>) -> bool {
    let (da, db) = (a.borrow(), b.borrow());
    if da.properties.enumerable().count() != db.properties.enumerable().count() {
        return false;
    }
    for (key, pa) in da.properties.enumerable() {
        match owner_check(key, &da, &db) {
            Some(true) if db.properties.contains(key) => continue,
            Some(_) => return false,
            None => {}
        }
        let Some(pb) = db.properties.get(key) else {
            return false;
        };
        let key = Key::Property(key);
        if !state.equals(&pa.value, &pb.value, key, key, a, b) {
            return false;
        }
    }
    true
}

/// Identical own-property sets, symbols and non-enumerables included, with
/// recursively equal values and matching descriptor flags.
///
/// On arrays, maps, sets and typed arrays this compares only the extra own
/// properties; their elements live outside the property list.
pub fn are_objects_equal_strict<M>(a: &Obj, b: &Obj, state: &State<'_, M>) -> bool {
    let (da, db) = (a.borrow(), b.borrow());
    if da.properties.len() != db.properties.len() {
        return false;
    }
    for (key, pa) in da.properties.iter() {
        match owner_check(key, &da, &db) {
            Some(true) if db.properties.contains(key) => continue,
            Some(_) => return false,
            None => {}
        }
        let Some(pb) = db.properties.get(key) else {
            return false;
        };
        if pa.flags != pb.flags {
            return false;
        }
        let key = Key::Property(key);
        if !state.equals(&pa.value, &pb.value, key, key, a, b) {
            return false;
        }
    }
    true
}

/// `Some(skip)` when `key` is the owner link on a tagged pair, where `skip`
/// is whether the tags agree. `None` means compare the property normally.
/// The caller still requires `b` to own the link.
fn owner_check(key: &PropertyKey, a: &ObjectData, b: &ObjectData) -> Option<bool> {
    if key.as_str() != Some(OWNER) {
        return None;
    }
    let tag_a = type_tag(a);
    let tag_b = type_tag(b);
    if tag_a.is_none() && tag_b.is_none() {
        return None;
    }
    let undefined = Value::Undefined;
    Some(same_value_zero(tag_a.unwrap_or(&undefined), tag_b.unwrap_or(&undefined)))
}

/// Own `$$typeof` when truthy; `0`, `false`, `""` and the like are untagged.
fn type_tag(data: &ObjectData) -> Option<&Value> {
    data.properties
        .get_str(TYPE_TAG)
        .map(|p| &p.value)
        .filter(|v| is_truthy(v))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => *n != 0.0 && !n.is_nan(),
        Value::BigInt(n) => *n != 0,
        Value::String(s) => !s.is_empty(),
        Value::Symbol(_) | Value::Object(_) => true,
    }
}
