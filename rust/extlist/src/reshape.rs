//! Reshaping operations for lists of indexable elements, plus record
//! instantiation.
//!
//! The reshaping operations never alias the source: each element is cloned
//! before its keys are touched, and a fresh list is returned.

use std::borrow::Borrow;

use extlist_common::Result;
use extlist_common::error::Error;
use serde::de::DeserializeOwned;

use crate::ExtList;
use crate::indexable::Indexable;

impl<T> ExtList<T>
where
    T: Indexable + Clone,
{
    /// Returns a new list in which, per element, the value at each `from`
    /// key has been moved to the corresponding `to` key, removing `from`.
    ///
    /// A `from` key absent from an element fails with the element's
    /// lookup error. For sequence elements the move is an assignment at
    /// `to` followed by a removing shift at `from`, matching subscript
    /// semantics.
    ///
    /// ```
    /// use extlist::ExtList;
    /// use std::collections::BTreeMap;
    ///
    /// let rows: ExtList<BTreeMap<String, i64>> =
    ///     vec![BTreeMap::from([("name".to_string(), 1)])].into();
    /// let renamed = rows.rename_keys(&[("name", "Name")]).unwrap();
    /// assert_eq!(renamed[0]["Name"], 1);
    /// assert!(!renamed[0].contains_key("name"));
    /// ```
    pub fn rename_keys<I>(&self, renames: &[(I, I)]) -> Result<ExtList<T>>
    where
        I: Borrow<T::Index>,
    {
        let mut result = ExtList::with_capacity(self.len());
        for element in self.iter() {
            let mut renamed = element.clone();
            for (from, to) in renames {
                let value = renamed.lookup(from.borrow())?;
                renamed.put(to.borrow(), value)?;
                renamed.take(from.borrow())?;
            }
            result.push(renamed);
        }
        Ok(result)
    }

    /// Returns a new list in which, per element, the value at each listed
    /// key has been replaced by `function(value)`; keys not listed are
    /// untouched.
    pub fn map_for_keys<I, F>(&self, keys: &[I], function: F) -> Result<ExtList<T>>
    where
        I: Borrow<T::Index>,
        F: Fn(T::Value) -> T::Value,
    {
        let mut result = ExtList::with_capacity(self.len());
        for element in self.iter() {
            let mut mapped = element.clone();
            for key in keys {
                let value = mapped.lookup(key.borrow())?;
                mapped.put(key.borrow(), function(value))?;
            }
            result.push(mapped);
        }
        Ok(result)
    }
}

impl ExtList<serde_json::Map<String, serde_json::Value>> {
    /// Constructs an instance of `U` from every record, keyword-expanding
    /// each record's entries as the constructor arguments.
    ///
    /// The underlying deserialization error (missing or unknown field) is
    /// propagated as [`ErrorKind::Construct`].
    ///
    /// [`ErrorKind::Construct`]: extlist_common::error::ErrorKind::Construct
    pub fn to_instances<U>(&self) -> Result<ExtList<U>>
    where
        U: DeserializeOwned,
    {
        let mut result = ExtList::with_capacity(self.len());
        for record in self.iter() {
            let instance = serde_json::from_value(serde_json::Value::Object(record.clone()))
                .map_err(Error::construct)?;
            result.push(instance);
        }
        Ok(result)
    }
}
