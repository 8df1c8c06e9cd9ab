//! Key-driven query operations: comparator filters, extraction, map
//! conversion and grouping.
//!
//! Every operation resolves its key once, then performs a single
//! first-to-last pass over the elements. Called on an empty list, every
//! operation returns the empty-shaped result without touching any key.

use std::hash::Hash;

use extlist_common::Result;
use extlist_common::verify_arg;

use crate::key::{Column, Select};
use crate::{ExtList, ExtMap};

impl<T: Clone> ExtList<T> {
    /// Retains the elements whose selected value equals `target`.
    ///
    /// Filtering is stable: surviving elements keep their source order.
    ///
    /// ```
    /// use extlist::{ExtList, key};
    /// use std::collections::HashMap;
    ///
    /// let rows: ExtList<HashMap<String, i64>> = vec![
    ///     HashMap::from([("age".to_string(), 25)]),
    ///     HashMap::from([("age".to_string(), 30)]),
    /// ]
    /// .into();
    /// let filtered = rows.equal(key::index("age"), &30).unwrap();
    /// assert_eq!(filtered.len(), 1);
    /// ```
    pub fn equal<K, U>(&self, key: K, target: &U) -> Result<ExtList<T>>
    where
        K: Select<T>,
        K::Output: PartialEq<U>,
        U: ?Sized,
    {
        self.filter_by(key, |value| value.eq(target))
    }

    /// Retains the elements whose selected value does not equal `target`.
    pub fn not_equal<K, U>(&self, key: K, target: &U) -> Result<ExtList<T>>
    where
        K: Select<T>,
        K::Output: PartialEq<U>,
        U: ?Sized,
    {
        self.filter_by(key, |value| value.ne(target))
    }

    /// Retains the elements whose selected value is strictly greater than
    /// `target`.
    pub fn greater<K, U>(&self, key: K, target: &U) -> Result<ExtList<T>>
    where
        K: Select<T>,
        K::Output: PartialOrd<U>,
        U: ?Sized,
    {
        self.filter_by(key, |value| value.gt(target))
    }

    /// Retains the elements whose selected value is greater than or equal
    /// to `target`.
    pub fn greater_or_equal<K, U>(&self, key: K, target: &U) -> Result<ExtList<T>>
    where
        K: Select<T>,
        K::Output: PartialOrd<U>,
        U: ?Sized,
    {
        self.filter_by(key, |value| value.ge(target))
    }

    /// Retains the elements whose selected value is strictly less than
    /// `target`.
    pub fn less<K, U>(&self, key: K, target: &U) -> Result<ExtList<T>>
    where
        K: Select<T>,
        K::Output: PartialOrd<U>,
        U: ?Sized,
    {
        self.filter_by(key, |value| value.lt(target))
    }

    /// Retains the elements whose selected value is less than or equal to
    /// `target`.
    pub fn less_or_equal<K, U>(&self, key: K, target: &U) -> Result<ExtList<T>>
    where
        K: Select<T>,
        K::Output: PartialOrd<U>,
        U: ?Sized,
    {
        self.filter_by(key, |value| value.le(target))
    }

    /// Retains the elements whose selected value is a member of `targets`.
    pub fn in_set<K, U>(&self, key: K, targets: &[U]) -> Result<ExtList<T>>
    where
        K: Select<T>,
        K::Output: PartialEq<U>,
    {
        self.filter_by(key, |value| targets.iter().any(|target| value.eq(target)))
    }

    /// Retains the elements whose selected value is not a member of
    /// `targets`.
    pub fn not_in_set<K, U>(&self, key: K, targets: &[U]) -> Result<ExtList<T>>
    where
        K: Select<T>,
        K::Output: PartialEq<U>,
    {
        self.filter_by(key, |value| !targets.iter().any(|target| value.eq(target)))
    }

    fn filter_by<K, P>(&self, key: K, predicate: P) -> Result<ExtList<T>>
    where
        K: Select<T>,
        P: Fn(&K::Output) -> bool,
    {
        let mut result = ExtList::new();
        for element in self.iter() {
            if predicate(&key.select(element)?) {
                result.push(element.clone());
            }
        }
        Ok(result)
    }

    /// Builds a map from each element's selected value to the element.
    ///
    /// On key collision the later element wins: the pass is a single
    /// forward scan inserting into the map, and an insert for an existing
    /// key replaces the value while keeping the key's original position.
    pub fn to_dict<K>(&self, key: K) -> Result<ExtMap<K::Output, T>>
    where
        K: Select<T>,
        K::Output: Hash + Eq,
    {
        let mut result = ExtMap::default();
        for element in self.iter() {
            result.insert(key.select(element)?, element.clone());
        }
        Ok(result)
    }

    /// Builds a map from a composite of per-key selected values to the
    /// element.
    ///
    /// The composite key is the `Vec` of each key's selection, in key
    /// order; the key kinds may be mixed as long as they select the same
    /// value type. Collisions are last-write-wins, as in
    /// [`to_dict`](ExtList::to_dict).
    pub fn to_dict_with_complex_keys<V>(
        &self,
        keys: &[&dyn Select<T, Output = V>],
    ) -> Result<ExtMap<Vec<V>, T>>
    where
        V: Hash + Eq,
    {
        if self.is_empty() {
            return Ok(ExtMap::default());
        }
        verify_arg!(keys, !keys.is_empty());

        let mut result = ExtMap::default();
        for element in self.iter() {
            let composite = keys
                .iter()
                .map(|key| key.select(element))
                .collect::<Result<Vec<_>>>()?;
            result.insert(composite, element.clone());
        }
        Ok(result)
    }

    /// Groups the elements by their selected value.
    ///
    /// Groups appear in first-seen order; the members of each group keep
    /// their source order. Every element lands in exactly one group.
    pub fn group_by_key<K>(&self, key: K) -> Result<ExtMap<K::Output, ExtList<T>>>
    where
        K: Select<T>,
        K::Output: Hash + Eq,
    {
        let mut result: ExtMap<K::Output, ExtList<T>> = ExtMap::default();
        for element in self.iter() {
            result
                .entry(key.select(element)?)
                .or_default()
                .push(element.clone());
        }
        Ok(result)
    }
}

impl<T> ExtList<T> {
    /// Produces a new list of each element's selected value, in source
    /// order.
    pub fn extract<K>(&self, key: K) -> Result<ExtList<K::Output>>
    where
        K: Select<T>,
    {
        let mut result = ExtList::with_capacity(self.len());
        for element in self.iter() {
            result.push(key.select(element)?);
        }
        Ok(result)
    }

    /// Produces, per element, a row mapping each key's label to that key's
    /// selected value, and returns the new list of rows in source order.
    ///
    /// The label is the literal index for subscript keys, the field name
    /// for field keys, and the declared name for [`named`](crate::key::named)
    /// accessors.
    pub fn to_dict_list<V>(
        &self,
        keys: &[&dyn Column<T, Output = V>],
    ) -> Result<ExtList<ExtMap<String, V>>> {
        if self.is_empty() {
            return Ok(ExtList::new());
        }
        verify_arg!(keys, !keys.is_empty());

        let mut result = ExtList::with_capacity(self.len());
        for element in self.iter() {
            let mut row = ExtMap::default();
            for key in keys {
                row.insert(key.label(), key.select(element)?);
            }
            result.push(row);
        }
        Ok(result)
    }
}
