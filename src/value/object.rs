//! Heap objects: kinds, prototypes and own properties.

use alloc::rc::Rc;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::cell::{Ref, RefCell, RefMut};
use core::fmt;

use super::{RegExp, Symbol, TypedArray, Value};
use crate::error::ValueError;
use crate::same_value::same_value_zero;

// ─── Identity ────────────────────────────────────────────────────────────────

/// Pointer identity of an [`Obj`]. Stable for as long as the object is alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjId(usize);

/// Shared handle to a heap object.
///
/// Cloning the handle shares the object; [`Obj::ptr_eq`] and [`Obj::id`]
/// expose its identity.
#[derive(Clone)]
pub struct Obj(Rc<RefCell<ObjectData>>);

impl Obj {
    /// Allocate an object with no own properties.
    pub fn new(kind: ObjectKind, prototype: Prototype) -> Self {
        Self(Rc::new(RefCell::new(ObjectData {
            kind,
            prototype,
            properties: Properties::new(),
        })))
    }

    /// Allocate an object with default-flagged own properties.
    pub fn with_properties<I, K, V>(kind: ObjectKind, prototype: Prototype, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<PropertyKey>,
        V: Into<Value>,
    {
        let obj = Self::new(kind, prototype);
        {
            let mut data = obj.borrow_mut();
            for (key, value) in entries {
                data.properties.insert(key.into(), Property::new(value.into()));
            }
        }
        obj
    }

    /// Identity of this object.
    pub fn id(&self) -> ObjId {
        ObjId(Rc::as_ptr(&self.0) as *const () as usize)
    }

    /// `true` if both handles point at the same object.
    pub fn ptr_eq(&self, other: &Obj) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Read access to the object's data.
    ///
    /// # Panics
    ///
    /// Panics if the object is being mutated.
    pub fn borrow(&self) -> Ref<'_, ObjectData> {
        self.0.borrow()
    }

    fn borrow_mut(&self) -> RefMut<'_, ObjectData> {
        self.0.borrow_mut()
    }

    /// Own property value for `key`, if present.
    pub fn get(&self, key: &PropertyKey) -> Option<Value> {
        self.borrow().properties.get(key).map(|p| p.value.clone())
    }

    /// Own property value for a string key, if present.
    pub fn get_str(&self, key: &str) -> Option<Value> {
        self.borrow().properties.get_str(key).map(|p| p.value.clone())
    }

    /// Assign a property. New properties get default flags; existing ones
    /// keep their flags and must be writable.
    pub fn set(&self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> Result<(), ValueError> {
        let key = key.into();
        let mut guard = self.borrow_mut();
        let data = &mut *guard;
        match data.properties.get_mut(&key) {
            Some(existing) if !existing.flags.writable => {
                Err(ValueError::NonWritableProperty(key.to_string()))
            }
            Some(existing) => {
                existing.value = value.into();
                Ok(())
            }
            None => {
                data.properties.insert(key, Property::new(value.into()));
                Ok(())
            }
        }
    }

    /// Define a property with explicit flags. Fails if an existing property
    /// with that key is not configurable.
    pub fn define(
        &self,
        key: impl Into<PropertyKey>,
        value: impl Into<Value>,
        flags: PropertyFlags,
    ) -> Result<(), ValueError> {
        let key = key.into();
        let mut data = self.borrow_mut();
        if let Some(existing) = data.properties.get(&key) {
            if !existing.flags.configurable {
                return Err(ValueError::NonConfigurableProperty(key.to_string()));
            }
        }
        data.properties.insert(key, Property { value: value.into(), flags });
        Ok(())
    }

    /// Append to an array, returning the new length.
    pub fn push(&self, value: impl Into<Value>) -> Result<usize, ValueError> {
        let mut data = self.borrow_mut();
        let ObjectKind::Array(items) = &mut data.kind else {
            return Err(ValueError::NotAnArray);
        };
        items.push(value.into());
        Ok(items.len())
    }

    /// Insert or replace a map entry (keys unique under SameValueZero).
    pub fn map_insert(&self, key: impl Into<Value>, value: impl Into<Value>) -> Result<(), ValueError> {
        let mut data = self.borrow_mut();
        let ObjectKind::Map(entries) = &mut data.kind else {
            return Err(ValueError::NotAMap);
        };
        let (key, value) = (key.into(), value.into());
        match entries.iter_mut().find(|(k, _)| same_value_zero(k, &key)) {
            Some(slot) => slot.1 = value,
            None => entries.push((key, value)),
        }
        Ok(())
    }

    /// Add a set element. Returns `false` if an equal element was present.
    pub fn set_add(&self, value: impl Into<Value>) -> Result<bool, ValueError> {
        let mut data = self.borrow_mut();
        let ObjectKind::Set(items) = &mut data.kind else {
            return Err(ValueError::NotASet);
        };
        let value = value.into();
        if items.iter().any(|v| same_value_zero(v, &value)) {
            return Ok(false);
        }
        items.push(value);
        Ok(true)
    }
}

// ─── Object data ─────────────────────────────────────────────────────────────

/// What kind of object this is, with its internal payload.
pub enum ObjectKind {
    /// Ordinary keyed object (or class instance, depending on the prototype).
    Plain,
    /// Ordered elements.
    Array(Vec<Value>),
    /// Insertion-ordered key/value entries, keys unique.
    Map(Vec<(Value, Value)>),
    /// Insertion-ordered unique elements.
    Set(Vec<Value>),
    /// Milliseconds since the epoch; `NaN` for an invalid date.
    Date(f64),
    /// Regular expression.
    RegExp(RegExp),
    /// Boxed boolean, number or string.
    Boxed(Value),
    /// Typed numeric array.
    TypedArray(TypedArray),
    /// Pending asynchronous value.
    Promise,
    /// Callable; the payload is its name.
    Function(Rc<str>),
    /// Opaque host object identified by its type tag.
    Host(Rc<str>),
}

/// The constructor an object was created by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prototype {
    /// Ordinary objects and built-ins.
    Object,
    /// Dictionary objects with no prototype.
    Null,
    /// Instances of a user-defined class.
    Class(Class),
}

/// User-defined class, compared by identity.
#[derive(Clone)]
pub struct Class(Rc<str>);

impl Class {
    /// Declare a new class. Two classes with the same name are distinct.
    pub fn new(name: &str) -> Self {
        Self(Rc::from(name))
    }

    /// The class name.
    pub fn name(&self) -> &str {
        &self.0
    }

    pub(crate) fn name_rc(&self) -> Rc<str> {
        self.0.clone()
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {}", self.0)
    }
}

/// Everything stored behind an [`Obj`].
pub struct ObjectData {
    /// Internal payload.
    pub kind: ObjectKind,
    /// Constructor identity.
    pub prototype: Prototype,
    /// Own properties, in insertion order.
    pub properties: Properties,
}

impl ObjectData {
    /// Elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match &self.kind {
            ObjectKind::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Entries, if this is a map.
    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match &self.kind {
            ObjectKind::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Elements, if this is a set.
    pub fn as_set(&self) -> Option<&[Value]> {
        match &self.kind {
            ObjectKind::Set(items) => Some(items),
            _ => None,
        }
    }

    /// Timestamp, if this is a date.
    pub fn as_date(&self) -> Option<f64> {
        match self.kind {
            ObjectKind::Date(ms) => Some(ms),
            _ => None,
        }
    }

    /// Pattern, if this is a regular expression.
    pub fn as_regexp(&self) -> Option<&RegExp> {
        match &self.kind {
            ObjectKind::RegExp(re) => Some(re),
            _ => None,
        }
    }

    /// Unwrapped primitive, if this is a boxed value.
    pub fn as_boxed(&self) -> Option<&Value> {
        match &self.kind {
            ObjectKind::Boxed(inner) => Some(inner),
            _ => None,
        }
    }

    /// Elements, if this is a typed array.
    pub fn as_typed_array(&self) -> Option<&TypedArray> {
        match &self.kind {
            ObjectKind::TypedArray(array) => Some(array),
            _ => None,
        }
    }
}

// ─── Properties ──────────────────────────────────────────────────────────────

/// Own-property key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyKey {
    /// String key, compared by content.
    String(Rc<str>),
    /// Symbol key, compared by identity.
    Symbol(Symbol),
}

impl PropertyKey {
    /// The key text, if this is a string key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyKey::String(s) => Some(s),
            PropertyKey::Symbol(_) => None,
        }
    }

    /// `true` for symbol keys.
    pub fn is_symbol(&self) -> bool {
        matches!(self, PropertyKey::Symbol(_))
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::String(s) => f.write_str(s),
            PropertyKey::Symbol(sym) => write!(f, "{:?}", sym),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        PropertyKey::String(Rc::from(s))
    }
}

impl From<alloc::string::String> for PropertyKey {
    fn from(s: alloc::string::String) -> Self {
        PropertyKey::String(Rc::from(s))
    }
}

impl From<Symbol> for PropertyKey {
    fn from(sym: Symbol) -> Self {
        PropertyKey::Symbol(sym)
    }
}

impl From<&Symbol> for PropertyKey {
    fn from(sym: &Symbol) -> Self {
        PropertyKey::Symbol(sym.clone())
    }
}

/// Descriptor flags of a data property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyFlags {
    /// Visible to key enumeration.
    pub enumerable: bool,
    /// Value may be reassigned.
    pub writable: bool,
    /// Property may be redefined.
    pub configurable: bool,
}

impl PropertyFlags {
    /// Flags of an ordinary assignment: all set.
    pub const DEFAULT: Self = Self { enumerable: true, writable: true, configurable: true };

    /// Writable and configurable, but skipped by key enumeration.
    pub const HIDDEN: Self = Self { enumerable: false, writable: true, configurable: true };

    /// Enumerable but neither writable nor configurable.
    pub const FROZEN: Self = Self { enumerable: true, writable: false, configurable: false };
}

impl Default for PropertyFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A data property: value plus descriptor flags.
#[derive(Clone, Debug)]
pub struct Property {
    /// Stored value.
    pub value: Value,
    /// Descriptor flags.
    pub flags: PropertyFlags,
}

impl Property {
    /// Property with [`PropertyFlags::DEFAULT`].
    pub fn new(value: Value) -> Self {
        Self { value, flags: PropertyFlags::DEFAULT }
    }
}

/// Insertion-ordered own properties.
///
/// Lookup is a linear scan; objects compared by value are small in practice
/// and the order must be preserved for enumeration.
#[derive(Clone, Debug, Default)]
pub struct Properties(Vec<(PropertyKey, Property)>);

impl Properties {
    /// Empty property list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of own properties, of every kind.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if there are no own properties.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Property for `key`.
    pub fn get(&self, key: &PropertyKey) -> Option<&Property> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, p)| p)
    }

    /// Property for a string key.
    pub fn get_str(&self, key: &str) -> Option<&Property> {
        self.0
            .iter()
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, p)| p)
    }

    fn get_mut(&mut self, key: &PropertyKey) -> Option<&mut Property> {
        self.0.iter_mut().find(|(k, _)| k == key).map(|(_, p)| p)
    }

    /// `true` if `key` is an own property (enumerable or not).
    pub fn contains(&self, key: &PropertyKey) -> bool {
        self.get(key).is_some()
    }

    /// Insert or replace, returning the previous property.
    pub fn insert(&mut self, key: PropertyKey, property: Property) -> Option<Property> {
        match self.get_mut(&key) {
            Some(slot) => Some(core::mem::replace(slot, property)),
            None => {
                self.0.push((key, property));
                None
            }
        }
    }

    /// Every own property: string keys first, then symbols, each in
    /// insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&PropertyKey, &Property)> {
        let strings = self.0.iter().filter(|(k, _)| !k.is_symbol());
        let symbols = self.0.iter().filter(|(k, _)| k.is_symbol());
        strings.chain(symbols).map(|(k, p)| (k, p))
    }

    /// Own enumerable string-keyed properties, in insertion order.
    pub fn enumerable(&self) -> impl Iterator<Item = (&PropertyKey, &Property)> {
        self.0
            .iter()
            .filter(|(k, p)| !k.is_symbol() && p.flags.enumerable)
            .map(|(k, p)| (k, p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_survives_cloning_the_handle() {
        let a = Obj::new(ObjectKind::Plain, Prototype::Object);
        let b = a.clone();
        let c = Obj::new(ObjectKind::Plain, Prototype::Object);
        assert!(a.ptr_eq(&b));
        assert_eq!(a.id(), b.id());
        assert_ne!(a.id(), c.id());
    }

    #[test]
    fn test_set_respects_writable_flag() {
        let obj = Obj::new(ObjectKind::Plain, Prototype::Object);
        obj.define("id", 1, PropertyFlags::FROZEN).unwrap();
        assert_eq!(
            obj.set("id", 2),
            Err(ValueError::NonWritableProperty("id".into()))
        );
        assert_eq!(
            obj.define("id", 3, PropertyFlags::DEFAULT),
            Err(ValueError::NonConfigurableProperty("id".into()))
        );
    }

    #[test]
    fn test_enumerable_skips_hidden_and_symbol_keys() {
        let sym = Symbol::new("meta");
        let obj = Obj::new(ObjectKind::Plain, Prototype::Object);
        obj.set("a", 1).unwrap();
        obj.define("hidden", 2, PropertyFlags::HIDDEN).unwrap();
        obj.set(&sym, 3).unwrap();
        let data = obj.borrow();
        let keys: Vec<_> = data.properties.enumerable().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, [Some("a")]);
        assert_eq!(data.properties.len(), 3);
        assert!(data.properties.iter().last().unwrap().0.is_symbol());
    }

    #[test]
    fn test_collection_mutators_reject_wrong_kinds() {
        let obj = Obj::new(ObjectKind::Plain, Prototype::Object);
        assert_eq!(obj.push(1), Err(ValueError::NotAnArray));
        assert_eq!(obj.map_insert(1, 2), Err(ValueError::NotAMap));
        assert_eq!(obj.set_add(1), Err(ValueError::NotASet));

        let set = Obj::new(ObjectKind::Set(Vec::new()), Prototype::Object);
        assert_eq!(set.set_add(f64::NAN), Ok(true));
        assert_eq!(set.set_add(f64::NAN), Ok(false));
    }
}
