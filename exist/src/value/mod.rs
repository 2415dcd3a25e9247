//! The dynamic value model walked by path operations.
//!
//! A [`Value`] is a closed variant over everything a path can land on:
//! containers (maps and arrays), scalars, callables, and `Null`. Containers
//! answer [`Value::member`] for a string key; everything else answers
//! `None`, which is what lets a walk stop gracefully instead of failing.
//!
//! # Examples
//!
//! ```
//! use exist::{Map, Value};
//!
//! let mut employee = Map::new();
//! employee.insert("name".to_string(), Value::from("Benjy"));
//!
//! let employees = Value::Array(vec![Value::Map(employee)]);
//!
//! assert!(employees.member("0").is_some());
//! assert!(employees.member("1").is_none());
//! assert!(employees.member("name").is_none());
//! ```

mod convert;
mod method;

use std::collections::BTreeMap;
use std::ops::Index;

use crate::path::Path;

pub use method::Method;

/// Largest number of `Null` elements an assignment may pad an array with.
///
/// Arrays are dense, so writing far past the end would allocate every slot
/// in between.
pub const MAX_ARRAY_GAP: usize = 1 << 16;

/// String-keyed container used for map-like values.
pub type Map = BTreeMap<String, Value>;

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Explicit null marker. Present, but not indexable.
    #[default]
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar.
    Number(serde_json::Number),
    /// String scalar.
    String(String),
    /// Sequence addressed by non-negative integer index.
    Array(Vec<Value>),
    /// String-keyed map.
    Map(Map),
    /// Callable member, invoked with its owning node as receiver.
    Function(Method),
}

impl Value {
    /// Creates an empty map value.
    #[must_use]
    pub fn map() -> Self {
        Self::Map(Map::new())
    }

    /// Creates an empty array value.
    #[must_use]
    pub fn array() -> Self {
        Self::Array(Vec::new())
    }

    /// Wraps a closure as a callable value.
    ///
    /// The closure receives the node that owns it and the call arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use exist::Value;
    ///
    /// let hello = Value::function(|_this, _args| Value::from("hello"));
    /// assert!(hello.is_callable());
    /// ```
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + Send + Sync + 'static,
    {
        Self::Function(Method::new(f))
    }

    /// Returns true for `Null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for maps and arrays.
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Map(_) | Self::Array(_))
    }

    /// Returns true for callable values.
    #[must_use]
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Returns the boolean if this is a `Bool`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number as `f64` if this is a `Number`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Returns the number as `i64` if it is an integer that fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Returns the string slice if this is a `String`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is an `Array`.
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries if this is a `Map`.
    #[must_use]
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the method if this is a `Function`.
    #[must_use]
    pub fn as_method(&self) -> Option<&Method> {
        match self {
            Self::Function(method) => Some(method),
            _ => None,
        }
    }

    /// Looks up an own member by string key.
    ///
    /// Maps answer for keys they contain. Arrays answer for canonical
    /// decimal indices below their length. Every other variant has no
    /// members.
    #[must_use]
    pub fn member(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Map(map) => map.get(key),
            Self::Array(items) => Path::as_index(key).and_then(|i| items.get(i)),
            _ => None,
        }
    }

    /// Mutable counterpart of [`Value::member`].
    pub fn member_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Self::Map(map) => map.get_mut(key),
            Self::Array(items) => Path::as_index(key).and_then(|i| items.get_mut(i)),
            _ => None,
        }
    }

    /// Returns the slot for `key`, making room for it when absent.
    ///
    /// Maps insert `Null` under a missing key. Arrays accept index keys and
    /// pad with `Null` up to the index, at most [`MAX_ARRAY_GAP`] elements
    /// past the end. Returns `None` when the node cannot hold the key at all
    /// (scalars, `Null`, non-index keys on arrays, indices too far out); in
    /// that case nothing is modified.
    pub(crate) fn slot_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Self::Map(map) => Some(map.entry(key.to_string()).or_insert(Value::Null)),
            Self::Array(items) => {
                let index = Path::as_index(key)?;
                if index.saturating_sub(items.len()) > MAX_ARRAY_GAP {
                    return None;
                }
                if index >= items.len() {
                    items.resize(index + 1, Value::Null);
                }
                items.get_mut(index)
            }
            _ => None,
        }
    }

    /// Assigns `value` under `key`, returning whether the assignment happened.
    pub(crate) fn assign(&mut self, key: &str, value: Value) -> bool {
        match self.slot_mut(key) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Short name of the variant, used in log records.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Map(_) => "map",
            Self::Function(_) => "function",
        }
    }
}

static NULL: Value = Value::Null;

/// Indexing by key never panics: a missing member reads as `Null`.
impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.member(key).unwrap_or(&NULL)
    }
}

/// Indexing by position never panics: a missing element reads as `Null`.
impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        match self {
            Self::Array(items) => items.get(index).unwrap_or(&NULL),
            _ => &NULL,
        }
    }
}
