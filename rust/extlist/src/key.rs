//! Key variants and their resolution into per-element value selectors.
//!
//! A key is constructed through one of the free functions in this module
//! ([`index`], [`with`], [`named`], [`field`]) and resolved once per query
//! operation: the key *is* the selector, and applying it to an element is
//! [`Select::select`]. Which variants apply to a given element type is
//! decided by trait bounds — [`index`] requires [`Indexable`] elements,
//! [`field`] requires [`FieldAccess`] — so a list of subscriptable elements
//! always takes the subscript path, and the ambiguity between "index that
//! happens to look like an accessor" and "accessor" cannot arise.

use std::borrow::Borrow;
use std::fmt;

use extlist_common::Result;

use crate::field::FieldAccess;
use crate::indexable::Indexable;

/// A resolved key: selects a value out of an element.
///
/// Selection is fallible for subscript and field keys (the underlying
/// index or name may be absent from a given element) and infallible for
/// accessor-function keys.
pub trait Select<T> {
    /// The selected value type.
    type Output;

    /// Selects this key's value from `element`.
    fn select(&self, element: &T) -> Result<Self::Output>;
}

/// A key that can name the column it produces, used by `to_dict_list`.
pub trait Label {
    /// The display name of this key: the literal index for subscript keys,
    /// the field name for field keys, the declared name for named
    /// accessors.
    fn label(&self) -> String;
}

/// A labeled selector: what `to_dict_list` takes per column.
///
/// Blanket-implemented for every key that is both [`Select`] and
/// [`Label`]; plain [`with`] accessors carry no label and must be wrapped
/// with [`named`] to qualify.
pub trait Column<T>: Select<T> + Label {}

impl<T, K> Column<T> for K where K: Select<T> + Label {}

/// A subscript key for [`Indexable`] elements.
///
/// Constructed by [`index`].
pub struct IndexKey<I> {
    index: I,
}

/// Creates a subscript key: the value at map key or sequence position
/// `index` of each element.
///
/// ```
/// use extlist::{ExtList, key};
///
/// let pairs: ExtList<Vec<i64>> = vec![vec![1, 2], vec![3, 4]].into();
/// assert_eq!(pairs.extract(key::index(0)).unwrap().as_slice(), &[1, 3]);
/// ```
pub fn index<I>(index: I) -> IndexKey<I> {
    IndexKey { index }
}

impl<T, I> Select<T> for IndexKey<I>
where
    T: Indexable,
    I: Borrow<T::Index>,
{
    type Output = T::Value;

    fn select(&self, element: &T) -> Result<T::Value> {
        element.lookup(self.index.borrow())
    }
}

impl<I: fmt::Display> Label for IndexKey<I> {
    fn label(&self) -> String {
        self.index.to_string()
    }
}

/// A plain accessor-function key.
///
/// Constructed by [`with`].
pub struct FnKey<F> {
    func: F,
}

/// Creates an accessor key: the result of `func(&element)`.
///
/// Extra accessor arguments are captured by the closure itself.
pub fn with<F>(func: F) -> FnKey<F> {
    FnKey { func }
}

impl<T, V, F> Select<T> for FnKey<F>
where
    F: Fn(&T) -> V,
{
    type Output = V;

    fn select(&self, element: &T) -> Result<V> {
        Ok((self.func)(element))
    }
}

/// An accessor-function key carrying a display label.
///
/// Constructed by [`named`].
pub struct NamedFnKey<F> {
    name: String,
    func: F,
}

/// Creates a labeled accessor key, for operations that synthesize a column
/// name per key (`to_dict_list`).
pub fn named<F>(name: impl Into<String>, func: F) -> NamedFnKey<F> {
    NamedFnKey {
        name: name.into(),
        func,
    }
}

impl<T, V, F> Select<T> for NamedFnKey<F>
where
    F: Fn(&T) -> V,
{
    type Output = V;

    fn select(&self, element: &T) -> Result<V> {
        Ok((self.func)(element))
    }
}

impl<F> Label for NamedFnKey<F> {
    fn label(&self) -> String {
        self.name.clone()
    }
}

/// A named-member key for [`FieldAccess`] elements.
///
/// Constructed by [`field`].
pub struct FieldKey {
    name: String,
}

/// Creates a field key: the member named `name` of each element, resolved
/// through the element type's [`FieldAccess`] implementation.
pub fn field(name: impl Into<String>) -> FieldKey {
    FieldKey { name: name.into() }
}

impl<T> Select<T> for FieldKey
where
    T: FieldAccess,
{
    type Output = T::Value;

    fn select(&self, element: &T) -> Result<T::Value> {
        element.field(&self.name)
    }
}

impl Label for FieldKey {
    fn label(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::no_such_field;
    use extlist_common::error::ErrorKind;
    use std::collections::HashMap;

    struct Person {
        name: String,
        age: u32,
    }

    impl FieldAccess for Person {
        type Value = serde_json::Value;

        fn field(&self, name: &str) -> Result<serde_json::Value> {
            match name {
                "name" => Ok(self.name.clone().into()),
                "age" => Ok(self.age.into()),
                "introduce" => Ok(format!("{} is {} years old", self.name, self.age).into()),
                _ => no_such_field::<Person, _>(name),
            }
        }
    }

    #[test]
    fn test_index_key_on_map() {
        let element = HashMap::from([("a".to_string(), 1)]);
        assert_eq!(index("a").select(&element).unwrap(), 1);
        assert!(index("missing").select(&element).is_err());
    }

    #[test]
    fn test_index_key_on_sequence() {
        let element = vec![10, 20];
        assert_eq!(index(1usize).select(&element).unwrap(), 20);
    }

    #[test]
    fn test_fn_key() {
        let person = Person {
            name: "Alice".to_string(),
            age: 25,
        };
        let key = with(|person: &Person| person.age * 2);
        assert_eq!(key.select(&person).unwrap(), 50);
    }

    #[test]
    fn test_field_key_resolves_member() {
        let person = Person {
            name: "Alice".to_string(),
            age: 25,
        };
        assert_eq!(
            field("name").select(&person).unwrap(),
            serde_json::json!("Alice")
        );
        // A computed member is just another field name.
        assert_eq!(
            field("introduce").select(&person).unwrap(),
            serde_json::json!("Alice is 25 years old")
        );
    }

    #[test]
    fn test_field_key_unknown_name() {
        let person = Person {
            name: "Alice".to_string(),
            age: 25,
        };
        let err = field("height").select(&person).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::UnknownField { name, .. } if name == "height"
        ));
    }

    #[test]
    fn test_labels() {
        assert_eq!(index(3usize).label(), "3");
        assert_eq!(index("age").label(), "age");
        assert_eq!(field("name").label(), "name");
        assert_eq!(named("age_doubled", |person: &Person| person.age * 2).label(), "age_doubled");
    }
}
