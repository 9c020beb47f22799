//! Cycle-safe `Debug` rendering of values.
//!
//! Objects already on the rendering path print as `[Circular]`.

use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use super::{Obj, ObjId, ObjectKind, Prototype, TypedArray, Value};

struct Printer<'a> {
    value: &'a Value,
    path: &'a RefCell<Vec<ObjId>>,
}

impl<'a> Printer<'a> {
    fn child<'b>(&'b self, value: &'b Value) -> Printer<'b> {
        Printer { value, path: self.path }
    }

    fn object(&self, obj: &Obj, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = obj.borrow();
        // Every arm except `Plain` ignores extra own properties.
        match &data.kind {
            ObjectKind::Plain => {
                match &data.prototype {
                    Prototype::Class(class) => write!(f, "{} ", class.name())?,
                    Prototype::Null => f.write_str("[Object: null prototype] ")?,
                    Prototype::Object => {}
                }
                f.debug_map()
                    .entries(data.properties.iter().map(|(k, p)| (KeyPrinter(k), self.child(&p.value))))
                    .finish()
            }
            ObjectKind::Array(items) => f
                .debug_list()
                .entries(items.iter().map(|v| self.child(v)))
                .finish(),
            ObjectKind::Map(entries) => {
                f.write_str("Map ")?;
                f.debug_map()
                    .entries(entries.iter().map(|(k, v)| (self.child(k), self.child(v))))
                    .finish()
            }
            ObjectKind::Set(items) => {
                f.write_str("Set ")?;
                f.debug_set().entries(items.iter().map(|v| self.child(v))).finish()
            }
            ObjectKind::Date(ms) => write!(f, "Date({})", ms),
            ObjectKind::RegExp(re) => write!(f, "/{}/{}", re.source(), re.flags()),
            ObjectKind::Boxed(inner) => write!(f, "[Boxed: {:?}]", self.child(inner)),
            ObjectKind::TypedArray(array) => {
                write!(f, "{} ", array.kind().name())?;
                match array {
                    TypedArray::Int8(v) => f.debug_list().entries(v).finish(),
                    TypedArray::Uint8(v) | TypedArray::Uint8Clamped(v) => {
                        f.debug_list().entries(v).finish()
                    }
                    TypedArray::Int16(v) => f.debug_list().entries(v).finish(),
                    TypedArray::Uint16(v) => f.debug_list().entries(v).finish(),
                    TypedArray::Int32(v) => f.debug_list().entries(v).finish(),
                    TypedArray::Uint32(v) => f.debug_list().entries(v).finish(),
                    TypedArray::Float32(v) => f.debug_list().entries(v).finish(),
                    TypedArray::Float64(v) => f.debug_list().entries(v).finish(),
                    TypedArray::BigInt64(v) => f.debug_list().entries(v).finish(),
                    TypedArray::BigUint64(v) => f.debug_list().entries(v).finish(),
                }
            }
            ObjectKind::Promise => f.write_str("Promise { <pending> }"),
            ObjectKind::Function(name) => write!(f, "[Function: {}]", name),
            ObjectKind::Host(tag) => write!(f, "[object {}]", tag),
        }
    }
}

impl fmt::Debug for Printer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) if n.is_nan() => f.write_str("NaN"),
            Value::Number(n) if *n == 0.0 && n.is_sign_negative() => f.write_str("-0"),
            Value::Number(n) => write!(f, "{}", n),
            Value::BigInt(n) => write!(f, "{}n", n),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Symbol(sym) => write!(f, "{:?}", sym),
            Value::Object(obj) => {
                let id = obj.id();
                if self.path.borrow().contains(&id) {
                    return f.write_str("[Circular]");
                }
                self.path.borrow_mut().push(id);
                let result = self.object(obj, f);
                self.path.borrow_mut().pop();
                result
            }
        }
    }
}

struct KeyPrinter<'a>(&'a super::PropertyKey);

impl fmt::Debug for KeyPrinter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_str() {
            Some(s) => f.write_str(s),
            None => write!(f, "[{}]", self.0),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = RefCell::new(Vec::new());
        Printer { value: self, path: &path }.fmt(f)
    }
}

impl fmt::Debug for Obj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Value::Object(self.clone()).fmt(f)
    }
}
