//! Dynamic value model compared by the engine.
//!
//! Primitives are held inline; everything reference-typed lives behind an
//! [`Obj`] handle whose identity is its allocation. Handles are shared with
//! `Rc`, so graphs may contain cycles (`x.self = x`).
//!
//! # Example
//!
//! ```
//! use valeq::Value;
//!
//! let x = Value::object([("a", Value::from(1)), ("b", Value::from("two"))]);
//! let obj = x.as_object().unwrap();
//! obj.set("self", x.clone()).unwrap();
//! assert!(obj.get_str("self").unwrap().is_object());
//! ```

mod debug;
mod object;
mod regexp;
mod typed_array;

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

pub use object::{
    Class, Obj, ObjId, ObjectData, ObjectKind, Properties, Property, PropertyFlags, PropertyKey,
    Prototype,
};
pub use regexp::{RegExp, RegExpFlags};
pub use typed_array::{TypedArray, TypedArrayKind};

use crate::error::ValueError;
use crate::same_value::same_value_zero;

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// Unique token compared by identity, never by description.
#[derive(Clone)]
pub struct Symbol(Rc<Option<Rc<str>>>);

impl Symbol {
    /// Create a fresh symbol with a description.
    pub fn new(description: &str) -> Self {
        Self(Rc::new(Some(Rc::from(description))))
    }

    /// Create a fresh symbol without a description.
    pub fn anonymous() -> Self {
        Self(Rc::new(None))
    }

    /// The description given at creation, if any.
    pub fn description(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl core::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

// ─── Value ───────────────────────────────────────────────────────────────────

/// Any value the engine can compare.
#[derive(Clone, Default)]
pub enum Value {
    /// The absent value. Equal only to itself.
    #[default]
    Undefined,
    /// The empty reference. Equal only to itself.
    Null,
    /// Boolean primitive.
    Bool(bool),
    /// IEEE-754 double; `NaN` equals `NaN` and `+0` equals `-0`.
    Number(f64),
    /// Arbitrary-size integer primitive (bounded to `i128` here).
    BigInt(i128),
    /// String primitive, compared by content.
    String(Rc<str>),
    /// Symbol primitive, compared by identity.
    Symbol(Symbol),
    /// Reference to a heap object.
    Object(Obj),
}

impl Value {
    /// Host-style type name (`"undefined"`, `"number"`, `"object"`, ...).
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Object(_) => "object",
        }
    }

    /// `true` for reference-typed values.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// `true` for `undefined` and `null`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// The object handle, if this is a reference.
    pub fn as_object(&self) -> Option<&Obj> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// The numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    // ── Object constructors ────────────────────────────────────────────────

    /// Empty plain object.
    pub fn new_object() -> Self {
        Obj::new(ObjectKind::Plain, Prototype::Object).into()
    }

    /// Empty array.
    pub fn new_array() -> Self {
        Obj::new(ObjectKind::Array(Vec::new()), Prototype::Object).into()
    }

    /// Plain object with enumerable, writable, configurable properties.
    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<PropertyKey>,
        V: Into<Value>,
    {
        Obj::with_properties(ObjectKind::Plain, Prototype::Object, entries).into()
    }

    /// Dictionary object without a prototype.
    pub fn null_prototype<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<PropertyKey>,
        V: Into<Value>,
    {
        Obj::with_properties(ObjectKind::Plain, Prototype::Null, entries).into()
    }

    /// Instance of `class` carrying the given own properties.
    pub fn instance<I, K, V>(class: &Class, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<PropertyKey>,
        V: Into<Value>,
    {
        Obj::with_properties(ObjectKind::Plain, Prototype::Class(class.clone()), entries).into()
    }

    /// Array of the given elements.
    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let items = items.into_iter().map(Into::into).collect();
        Obj::new(ObjectKind::Array(items), Prototype::Object).into()
    }

    /// Keyed collection. A later entry replaces an earlier one with the same
    /// key (SameValueZero), keeping the earlier insertion position.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        let mut out: Vec<(Value, Value)> = Vec::new();
        for (key, value) in entries {
            let (key, value) = (key.into(), value.into());
            match out.iter_mut().find(|(k, _)| same_value_zero(k, &key)) {
                Some(slot) => slot.1 = value,
                None => out.push((key, value)),
            }
        }
        Obj::new(ObjectKind::Map(out), Prototype::Object).into()
    }

    /// Unique-element collection. Duplicates (SameValueZero) are dropped.
    pub fn set<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut out: Vec<Value> = Vec::new();
        for item in items {
            let item = item.into();
            if !out.iter().any(|v| same_value_zero(v, &item)) {
                out.push(item);
            }
        }
        Obj::new(ObjectKind::Set(out), Prototype::Object).into()
    }

    /// Date at `timestamp_ms` milliseconds since the Unix epoch.
    pub fn date(timestamp_ms: f64) -> Self {
        Obj::new(ObjectKind::Date(timestamp_ms), Prototype::Object).into()
    }

    /// Date whose timestamp is `NaN`.
    pub fn invalid_date() -> Self {
        Self::date(f64::NAN)
    }

    /// Regular expression from its source text and flag string.
    pub fn regexp(source: &str, flags: &str) -> Result<Self, ValueError> {
        Ok(RegExp::new(source, flags)?.into())
    }

    /// Boxed boolean, number or string.
    pub fn boxed(inner: Value) -> Result<Self, ValueError> {
        match inner {
            Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                Ok(Obj::new(ObjectKind::Boxed(inner), Prototype::Object).into())
            }
            other => Err(ValueError::NotBoxable(other.type_name())),
        }
    }

    /// Function object; only ever equal to itself.
    pub fn function(name: &str) -> Self {
        Obj::new(ObjectKind::Function(Rc::from(name)), Prototype::Object).into()
    }

    /// Pending promise; only ever equal to itself.
    pub fn promise() -> Self {
        Obj::new(ObjectKind::Promise, Prototype::Object).into()
    }

    /// Opaque host object identified by a type tag (`"URL"`, `"WeakMap"`).
    pub fn host(tag: &str) -> Self {
        Obj::new(ObjectKind::Host(Rc::from(tag)), Prototype::Object).into()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Value::BigInt(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Rc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Rc::from(s))
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl From<Obj> for Value {
    fn from(obj: Obj) -> Self {
        Value::Object(obj)
    }
}

impl From<&Obj> for Value {
    fn from(obj: &Obj) -> Self {
        Value::Object(obj.clone())
    }
}

impl From<RegExp> for Value {
    fn from(re: RegExp) -> Self {
        Obj::new(ObjectKind::RegExp(re), Prototype::Object).into()
    }
}

impl From<TypedArray> for Value {
    fn from(array: TypedArray) -> Self {
        Obj::new(ObjectKind::TypedArray(array), Prototype::Object).into()
    }
}
