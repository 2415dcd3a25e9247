//! Safe invocation of resolved methods.

use crate::value::{Method, Value};

/// A callable returned by [`Resolver::invoke`](super::Resolver::invoke).
///
/// Calling it never fails: a missing or non-callable target yields `Noop`,
/// which does nothing and returns `Null`.
///
/// # Examples
///
/// ```
/// use exist::{Invocation, Map, Value};
///
/// let mut employee = Map::new();
/// employee.insert("name".to_string(), Value::from("Benjy"));
/// employee.insert(
///     "getName".to_string(),
///     Value::function(|this, _args| this["name"].clone()),
/// );
/// let employee = Value::Map(employee);
///
/// assert_eq!(exist::invoke(&employee, "getName").call(&[]), Value::from("Benjy"));
///
/// let missing = exist::invoke(&employee, "getAge");
/// assert!(missing.is_noop());
/// assert_eq!(missing.call(&[]), Value::Null);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Invocation<'a> {
    /// A resolved method and the node that owns it.
    Bound {
        /// The method found at the path.
        method: &'a Method,
        /// The owning node, passed to the method as its receiver.
        receiver: &'a Value,
    },
    /// Nothing callable was found at the path.
    Noop,
}

impl Invocation<'_> {
    /// Calls the method with its receiver, or does nothing for `Noop`.
    pub fn call(&self, args: &[Value]) -> Value {
        match self {
            Self::Bound { method, receiver } => method.call(receiver, args),
            Self::Noop => Value::Null,
        }
    }

    /// Returns true if nothing callable was found.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::Noop)
    }
}
