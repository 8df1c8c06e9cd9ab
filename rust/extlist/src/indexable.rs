//! The subscript capability for map-like and sequence-like elements.

use std::collections::{BTreeMap, HashMap};

use extlist_common::Result;
use extlist_common::error::Error;

/// Capability trait for elements that support subscript access.
///
/// This is the static counterpart of probing an element for item lookup
/// support: map-like and sequence-like element types implement it, and
/// [`key::index`](crate::key::index) keys only apply to lists whose
/// elements do. Whether a *specific* index is present is still decided per
/// element at lookup time — an absent map key fails with
/// [`ErrorKind::KeyNotFound`], an out-of-bounds sequence position with
/// [`ErrorKind::IndexOutOfBounds`].
///
/// [`put`](Indexable::put) and [`take`](Indexable::take) exist for the
/// reshaping operations (`rename_keys`, `map_for_keys`), which clone each
/// element before touching it.
///
/// [`ErrorKind::KeyNotFound`]: extlist_common::error::ErrorKind::KeyNotFound
/// [`ErrorKind::IndexOutOfBounds`]: extlist_common::error::ErrorKind::IndexOutOfBounds
pub trait Indexable {
    /// Borrowed form of the subscript key (`str` for string-keyed maps,
    /// `usize` for sequences).
    type Index: ?Sized;

    /// Value produced by a lookup.
    type Value;

    /// Returns the value at `index`, failing if it is absent.
    fn lookup(&self, index: &Self::Index) -> Result<Self::Value>;

    /// Stores `value` at `index`. For maps this inserts or overwrites; for
    /// sequences it assigns an existing position and fails out of bounds.
    fn put(&mut self, index: &Self::Index, value: Self::Value) -> Result<()>;

    /// Removes and returns the value at `index`, failing if it is absent.
    /// Sequence implementations shift subsequent elements to the left.
    fn take(&mut self, index: &Self::Index) -> Result<Self::Value>;
}

impl<V: Clone> Indexable for HashMap<String, V> {
    type Index = str;
    type Value = V;

    fn lookup(&self, index: &str) -> Result<V> {
        self.get(index)
            .cloned()
            .ok_or_else(|| Error::key_not_found(index))
    }

    fn put(&mut self, index: &str, value: V) -> Result<()> {
        self.insert(index.to_owned(), value);
        Ok(())
    }

    fn take(&mut self, index: &str) -> Result<V> {
        self.remove(index).ok_or_else(|| Error::key_not_found(index))
    }
}

impl<V: Clone> Indexable for BTreeMap<String, V> {
    type Index = str;
    type Value = V;

    fn lookup(&self, index: &str) -> Result<V> {
        self.get(index)
            .cloned()
            .ok_or_else(|| Error::key_not_found(index))
    }

    fn put(&mut self, index: &str, value: V) -> Result<()> {
        self.insert(index.to_owned(), value);
        Ok(())
    }

    fn take(&mut self, index: &str) -> Result<V> {
        self.remove(index).ok_or_else(|| Error::key_not_found(index))
    }
}

impl Indexable for serde_json::Map<String, serde_json::Value> {
    type Index = str;
    type Value = serde_json::Value;

    fn lookup(&self, index: &str) -> Result<serde_json::Value> {
        self.get(index)
            .cloned()
            .ok_or_else(|| Error::key_not_found(index))
    }

    fn put(&mut self, index: &str, value: serde_json::Value) -> Result<()> {
        self.insert(index.to_owned(), value);
        Ok(())
    }

    fn take(&mut self, index: &str) -> Result<serde_json::Value> {
        self.remove(index).ok_or_else(|| Error::key_not_found(index))
    }
}

impl<V: Clone> Indexable for Vec<V> {
    type Index = usize;
    type Value = V;

    fn lookup(&self, index: &usize) -> Result<V> {
        self.get(*index)
            .cloned()
            .ok_or_else(|| Error::index_out_of_bounds(*index, self.len()))
    }

    fn put(&mut self, index: &usize, value: V) -> Result<()> {
        if *index < self.len() {
            self[*index] = value;
            Ok(())
        } else {
            Err(Error::index_out_of_bounds(*index, self.len()))
        }
    }

    fn take(&mut self, index: &usize) -> Result<V> {
        if *index < self.len() {
            Ok(self.remove(*index))
        } else {
            Err(Error::index_out_of_bounds(*index, self.len()))
        }
    }
}
