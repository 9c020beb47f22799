//! `serde` support for [`Value`].
//!
//! # Mapping
//!
//! | Value | Serialized as |
//! |-------|---------------|
//! | `undefined` | none |
//! | `null` | unit |
//! | boolean, number, string | native |
//! | big integer | `i128` |
//! | array, set, typed array | sequence |
//! | map | sequence of `[key, value]` pairs |
//! | plain object, class instance | map of enumerable string-keyed properties |
//! | date | timestamp in milliseconds |
//! | regular expression | string `/source/flags` |
//! | boxed primitive | the inner primitive |
//!
//! Symbols, functions, promises, host objects and cyclic graphs cannot be
//! serialized. Deserialization accepts any self-describing format and
//! produces `null`, booleans, numbers (big integers past ±2^53), strings,
//! arrays and plain objects.
//!
//! This module requires the `serde` feature and is compatible with no_std +
//! alloc environments.

use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::value::{Obj, ObjId, ObjectKind, PropertyKey, TypedArray, Value};

/// Largest integer magnitude a double represents exactly.
const MAX_SAFE_INTEGER: i128 = (1 << 53) - 1;

// ─── Serialize ───────────────────────────────────────────────────────────────

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let path = RefCell::new(Vec::new());
        Tracked { value: self, path: &path }.serialize(serializer)
    }
}

/// A value plus the objects currently being serialized above it.
struct Tracked<'a> {
    value: &'a Value,
    path: &'a RefCell<Vec<ObjId>>,
}

impl<'a> Tracked<'a> {
    fn child<'b>(&'b self, value: &'b Value) -> Tracked<'b> {
        Tracked { value, path: self.path }
    }

    fn object<S: Serializer>(&self, obj: &Obj, serializer: S) -> Result<S::Ok, S::Error> {
        let data = obj.borrow();
        match &data.kind {
            ObjectKind::Plain => {
                let mut map = serializer.serialize_map(None)?;
                for (key, property) in data.properties.enumerable() {
                    if let PropertyKey::String(name) = key {
                        map.serialize_entry(&**name, &self.child(&property.value))?;
                    }
                }
                map.end()
            }
            ObjectKind::Array(items) | ObjectKind::Set(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&self.child(item))?;
                }
                seq.end()
            }
            ObjectKind::Map(entries) => {
                let mut seq = serializer.serialize_seq(Some(entries.len()))?;
                for (key, value) in entries {
                    seq.serialize_element(&(self.child(key), self.child(value)))?;
                }
                seq.end()
            }
            ObjectKind::TypedArray(array) => match array {
                TypedArray::Int8(v) => serializer.collect_seq(v),
                TypedArray::Uint8(v) | TypedArray::Uint8Clamped(v) => serializer.collect_seq(v),
                TypedArray::Int16(v) => serializer.collect_seq(v),
                TypedArray::Uint16(v) => serializer.collect_seq(v),
                TypedArray::Int32(v) => serializer.collect_seq(v),
                TypedArray::Uint32(v) => serializer.collect_seq(v),
                TypedArray::Float32(v) => serializer.collect_seq(v),
                TypedArray::Float64(v) => serializer.collect_seq(v),
                TypedArray::BigInt64(v) => serializer.collect_seq(v),
                TypedArray::BigUint64(v) => serializer.collect_seq(v),
            },
            ObjectKind::Date(ms) => serializer.serialize_f64(*ms),
            ObjectKind::RegExp(re) => {
                serializer.collect_str(&format_args!("/{}/{}", re.source(), re.flags()))
            }
            ObjectKind::Boxed(inner) => self.child(inner).serialize(serializer),
            ObjectKind::Promise => Err(ser::Error::custom("cannot serialize a promise")),
            ObjectKind::Function(name) => {
                Err(ser::Error::custom(format_args!("cannot serialize function `{}`", name)))
            }
            ObjectKind::Host(tag) => {
                Err(ser::Error::custom(format_args!("cannot serialize host object `{}`", tag)))
            }
        }
    }
}

impl Serialize for Tracked<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            Value::Undefined => serializer.serialize_none(),
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::BigInt(n) => serializer.serialize_i128(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Symbol(_) => Err(ser::Error::custom("cannot serialize a symbol")),
            Value::Object(obj) => {
                let id = obj.id();
                if self.path.borrow().contains(&id) {
                    return Err(ser::Error::custom("cannot serialize a cyclic value"));
                }
                self.path.borrow_mut().push(id);
                let result = self.object(obj, serializer);
                self.path.borrow_mut().pop();
                result
            }
        }
    }
}

// ─── Deserialize ─────────────────────────────────────────────────────────────

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

fn integer(n: i128) -> Value {
    if (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&n) {
        Value::Number(n as f64)
    } else {
        Value::BigInt(n)
    }
}

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a self-describing value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<Value, E> {
        Ok(integer(n.into()))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<Value, E> {
        Ok(integer(n.into()))
    }

    fn visit_i128<E: de::Error>(self, n: i128) -> Result<Value, E> {
        Ok(integer(n))
    }

    fn visit_u128<E: de::Error>(self, n: u128) -> Result<Value, E> {
        i128::try_from(n)
            .map(integer)
            .map_err(|_| E::custom("integer does not fit in 128 signed bits"))
    }

    fn visit_f64<E: de::Error>(self, n: f64) -> Result<Value, E> {
        Ok(Value::Number(n))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> {
        Ok(Value::from(s))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Value, E> {
        Ok(Value::from(s))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(item) = seq.next_element::<Value>()? {
            items.push(item);
        }
        Ok(Value::array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut entries: Vec<(String, Value)> = Vec::new();
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            entries.push((key, value));
        }
        Ok(Value::object(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deep_equal;

    #[test]
    fn test_objects_and_arrays_deserialize_structurally() {
        let parsed: Value = serde_json::from_str(r#"{"a": [1, 2.5, null], "b": "x"}"#).unwrap();
        let expected = Value::object([
            ("a", Value::array([Value::from(1), Value::from(2.5), Value::Null])),
            ("b", Value::from("x")),
        ]);
        assert!(deep_equal(&parsed, &expected));
    }

    #[test]
    fn test_large_integers_become_bigints() {
        let parsed: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert!(matches!(parsed, Value::BigInt(n) if n == u64::MAX as i128));
        let small: Value = serde_json::from_str("42").unwrap();
        assert!(matches!(small, Value::Number(n) if n == 42.0));
    }

    #[test]
    fn test_cycles_are_rejected() {
        let x = Value::new_object();
        x.as_object().unwrap().set("self", x.clone()).unwrap();
        assert!(serde_json::to_string(&x).is_err());
    }

    #[test]
    fn test_shared_siblings_serialize_twice() {
        let shared = Value::array([1]);
        let outer = Value::array([shared.clone(), shared]);
        assert_eq!(serde_json::to_string(&outer).unwrap(), "[[1.0],[1.0]]");
    }
}
