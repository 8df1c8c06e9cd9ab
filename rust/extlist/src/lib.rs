//! An ordered, homogeneous list with key-based query operations: predicate
//! filtering, value extraction, map conversion, grouping and reshaping.
//!
//! The central abstraction is the *key*: every query operation selects a
//! value out of each element, and the key decides how. A key is one of a
//! small closed set of variants, constructed through the [`key`] module:
//!
//! - [`key::index`] subscripts [`Indexable`] elements (maps and sequences),
//! - [`key::with`] applies a plain accessor function,
//! - [`key::named`] is an accessor carrying a display label,
//! - [`key::field`] resolves a named member through [`FieldAccess`].
//!
//! All variants implement [`Select`], so a key is resolved once per
//! operation call and then applied to every element in a single pass.
//!
//! ```
//! use extlist::ExtList;
//! use extlist::key;
//! use std::collections::HashMap;
//!
//! let rows: ExtList<HashMap<String, i64>> = vec![
//!     HashMap::from([("a".to_string(), 1), ("b".to_string(), 2)]),
//!     HashMap::from([("a".to_string(), 3), ("b".to_string(), 4)]),
//! ]
//! .into();
//!
//! let by_a = rows.to_dict(key::index("a")).unwrap();
//! assert_eq!(by_a[&1]["b"], 2);
//! assert_eq!(rows.extract(key::index("a")).unwrap().as_slice(), &[1, 3]);
//! ```

pub mod field;
pub mod indexable;
pub mod key;
pub mod list;
pub mod query;
pub mod reshape;

pub use extlist_common::Result;
pub use extlist_common::error::{Error, ErrorKind};
pub use field::FieldAccess;
pub use indexable::Indexable;
pub use key::{Column, Label, Select};
pub use list::ExtList;

/// Insertion-ordered map used for all map-shaped query results.
///
/// Iterating an `ExtMap` visits keys in the order the source elements were
/// first seen, mirroring the ordered-mapping semantics the query operations
/// guarantee.
pub type ExtMap<K, V> = indexmap::IndexMap<K, V, ahash::RandomState>;
