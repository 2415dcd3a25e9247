//! Callable values.

use std::fmt;
use std::sync::Arc;

use super::Value;

type MethodFn = dyn Fn(&Value, &[Value]) -> Value + Send + Sync;

/// A shared callable stored inside a [`Value`].
///
/// The first argument is the receiver: the node that owns the method at the
/// point it was resolved. Two methods compare equal only when they share the
/// same underlying closure.
///
/// # Examples
///
/// ```
/// use exist::{Method, Value};
///
/// let get_name = Method::new(|this, _args| {
///     this.member("name").cloned().unwrap_or_default()
/// });
///
/// let mut employee = exist::Map::new();
/// employee.insert("name".to_string(), Value::from("Benjy"));
///
/// assert_eq!(get_name.call(&Value::Map(employee), &[]), Value::from("Benjy"));
/// ```
#[derive(Clone)]
pub struct Method(Arc<MethodFn>);

impl Method {
    /// Wraps a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Calls the method with an explicit receiver.
    #[must_use]
    pub fn call(&self, receiver: &Value, args: &[Value]) -> Value {
        (self.0)(receiver, args)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Method(..)")
    }
}

impl PartialEq for Method {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_passes_receiver_and_args() {
        let method = Method::new(|this, args| {
            Value::Array(std::iter::once(this.clone()).chain(args.iter().cloned()).collect())
        });
        let result = method.call(&Value::from("self"), &[Value::from(1)]);
        assert_eq!(
            result,
            Value::Array(vec![Value::from("self"), Value::from(1)])
        );
    }

    #[test]
    fn test_equality_is_identity() {
        let a = Method::new(|_, _| Value::Null);
        let b = Method::new(|_, _| Value::Null);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_debug_is_opaque() {
        let method = Method::new(|_, _| Value::Null);
        assert_eq!(format!("{method:?}"), "Method(..)");
    }
}
