//! Classification of objects into comparison categories.
//!
//! Every object lands in exactly one [`Category`]. Objects the engine has no
//! dedicated rule for fall into [`Category::Unclassified`], which carries the
//! observed type tag so a late-bound comparator can be chosen for it.

use alloc::rc::Rc;

use crate::value::{ObjectData, ObjectKind, Prototype, Value};

/// The comparison category of an object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Category {
    /// Ordered elements.
    Array,
    /// Plain keyed object (ordinary or null prototype).
    Object,
    /// Keyed collection.
    Map,
    /// Unique-element collection.
    Set,
    /// Date.
    Date,
    /// Regular expression.
    RegExp,
    /// Boxed boolean, number or string.
    Boxed,
    /// Typed numeric array.
    TypedArray,
    /// Promise, or an object with a callable `then`.
    Thenable,
    /// Callable.
    Function,
    /// Anything else; `tag` is the host tag or class name.
    Unclassified {
        /// Observed type tag.
        tag: Rc<str>,
    },
}

impl Category {
    /// Classify an object by its kind, prototype and `then` member.
    pub fn of(data: &ObjectData) -> Self {
        match &data.kind {
            ObjectKind::Array(_) => Category::Array,
            ObjectKind::Map(_) => Category::Map,
            ObjectKind::Set(_) => Category::Set,
            ObjectKind::Date(_) => Category::Date,
            ObjectKind::RegExp(_) => Category::RegExp,
            ObjectKind::Boxed(_) => Category::Boxed,
            ObjectKind::TypedArray(_) => Category::TypedArray,
            ObjectKind::Function(_) => Category::Function,
            ObjectKind::Promise => Category::Thenable,
            _ if has_callable_then(data) => Category::Thenable,
            ObjectKind::Plain => match &data.prototype {
                Prototype::Class(class) => Category::Unclassified { tag: class.name_rc() },
                Prototype::Object | Prototype::Null => Category::Object,
            },
            ObjectKind::Host(tag) => Category::Unclassified { tag: tag.clone() },
        }
    }

    /// `true` for every category with a dedicated rule.
    pub fn is_dedicated(&self) -> bool {
        !matches!(self, Category::Unclassified { .. })
    }

    /// The type tag of an unclassified object.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Category::Unclassified { tag } => Some(tag),
            _ => None,
        }
    }
}

fn has_callable_then(data: &ObjectData) -> bool {
    let Some(then) = data.properties.get_str("then") else {
        return false;
    };
    match &then.value {
        Value::Object(obj) => matches!(obj.borrow().kind, ObjectKind::Function(_)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Class, TypedArray};
    use alloc::vec;

    fn category(value: &Value) -> Category {
        Category::of(&value.as_object().unwrap().borrow())
    }

    #[test]
    fn test_builtins_get_dedicated_categories() {
        assert_eq!(category(&Value::new_array()), Category::Array);
        assert_eq!(category(&Value::new_object()), Category::Object);
        assert_eq!(category(&Value::map([(1, 2)])), Category::Map);
        assert_eq!(category(&Value::set([1])), Category::Set);
        assert_eq!(category(&Value::date(0.0)), Category::Date);
        assert_eq!(category(&Value::regexp("a", "g").unwrap()), Category::RegExp);
        assert_eq!(category(&Value::boxed(Value::from(1)).unwrap()), Category::Boxed);
        assert_eq!(category(&TypedArray::Int8(vec![1]).into()), Category::TypedArray);
        assert_eq!(category(&Value::function("f")), Category::Function);
        assert_eq!(category(&Value::promise()), Category::Thenable);
    }

    #[test]
    fn test_callable_then_makes_a_thenable() {
        let thenable = Value::object([("then", Value::function("then"))]);
        let not_thenable = Value::object([("then", Value::from(1))]);
        assert_eq!(category(&thenable), Category::Thenable);
        assert_eq!(category(&not_thenable), Category::Object);
    }

    #[test]
    fn test_instances_and_host_objects_carry_tags() {
        let point = Class::new("Point");
        let instance = Value::instance(&point, [("x", 1)]);
        assert_eq!(category(&instance).tag(), Some("Point"));
        assert_eq!(category(&Value::host("URL")).tag(), Some("URL"));
        assert!(!category(&Value::host("URL")).is_dedicated());
    }

    #[test]
    fn test_null_prototype_dictionary_is_a_plain_object() {
        let dict = Value::null_prototype([("a", 1)]);
        assert_eq!(category(&dict), Category::Object);
    }
}
