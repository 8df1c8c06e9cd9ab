//! Name-based member access, the static counterpart of attribute reflection.

use extlist_common::Result;
use extlist_common::error::Error;

/// Resolves a named member of an element to a value.
///
/// Element types register their accessors in one place: the implementation
/// matches on the field name and returns the corresponding value. A member
/// that is computed rather than stored (the counterpart of a zero-argument
/// method or property) is simply another match arm that calls it. Unknown
/// names fail with [`ErrorKind::UnknownField`].
///
/// The associated `Value` type is chosen by the implementor; a type whose
/// fields are heterogeneous typically picks an enum or `serde_json::Value`.
///
/// ```
/// use extlist::FieldAccess;
/// use extlist::field::no_such_field;
/// use extlist::Result;
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// impl FieldAccess for Person {
///     type Value = serde_json::Value;
///
///     fn field(&self, name: &str) -> Result<serde_json::Value> {
///         match name {
///             "name" => Ok(self.name.clone().into()),
///             "age" => Ok(self.age.into()),
///             _ => no_such_field::<Person, _>(name),
///         }
///     }
/// }
/// ```
///
/// [`ErrorKind::UnknownField`]: extlist_common::error::ErrorKind::UnknownField
pub trait FieldAccess {
    /// Value produced by a field resolution.
    type Value;

    /// Returns the value of the member named `name`.
    fn field(&self, name: &str) -> Result<Self::Value>;
}

/// Builds the failure an implementation of [`FieldAccess::field`] returns
/// for a name it does not recognize.
#[cold]
pub fn no_such_field<T, V>(name: &str) -> Result<V> {
    Err(Error::unknown_field(name, std::any::type_name::<T>()))
}
