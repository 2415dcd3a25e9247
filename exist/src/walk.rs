//! The walk primitive shared by every path operation.
//!
//! A walk follows a path's keys one at a time from a root value. It stops at
//! the first key that cannot be followed, either because the current node
//! has no members (`Null`, scalars, functions) or because the container has
//! no such member. Reaching the end of the path is a success even when the
//! terminal value is `Null`: the key was present, its value just happens to
//! be empty.

use crate::path::Path;
use crate::value::Value;

/// Outcome of walking a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Walk<'a> {
    /// Every key was followed.
    Resolved {
        /// The terminal value.
        value: &'a Value,
        /// The node that holds `value`; `None` for an empty path.
        owner: Option<&'a Value>,
    },
    /// The walk stopped before the end of the path.
    Unresolved {
        /// Index of the first key that could not be followed.
        depth: usize,
    },
}

impl<'a> Walk<'a> {
    /// Returns true if every key was followed.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    /// The terminal value, if resolved.
    #[must_use]
    pub fn value(&self) -> Option<&'a Value> {
        match *self {
            Self::Resolved { value, .. } => Some(value),
            Self::Unresolved { .. } => None,
        }
    }
}

/// Walks `path` from `root`.
///
/// # Examples
///
/// ```
/// use exist::walk::{walk, Walk};
/// use exist::{Path, Value};
///
/// let company = Value::from_json_str(r#"{"employees":[{}]}"#).unwrap();
///
/// let walked = walk(&company, &Path::from("employees[0].name"));
/// assert_eq!(walked, Walk::Unresolved { depth: 2 });
/// ```
#[must_use]
pub fn walk<'a>(root: &'a Value, path: &Path) -> Walk<'a> {
    let mut owner = None;
    let mut node = root;

    for (depth, key) in path.iter().enumerate() {
        match node.member(key) {
            Some(next) => {
                owner = Some(node);
                node = next;
            }
            None => {
                log::trace!(
                    "path '{path}' unresolved at key '{key}' (depth {depth}, {} node)",
                    node.kind()
                );
                return Walk::Unresolved { depth };
            }
        }
    }

    Walk::Resolved { value: node, owner }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company() -> Value {
        Value::from_json_str(r#"{"employees":[{"name":"Benjy","boss":null}]}"#).unwrap()
    }

    #[test]
    fn test_resolves_nested_value() {
        let root = company();
        let walked = walk(&root, &Path::from("employees[0].name"));
        assert_eq!(walked.value(), Some(&Value::from("Benjy")));
    }

    #[test]
    fn test_owner_is_parent_node() {
        let root = company();
        let Walk::Resolved { owner, .. } = walk(&root, &Path::from("employees[0].name")) else {
            panic!("expected resolution");
        };
        assert_eq!(owner, root.member("employees").and_then(|e| e.member("0")));
    }

    #[test]
    fn test_null_terminal_is_resolved() {
        let root = company();
        let walked = walk(&root, &Path::from("employees[0].boss"));
        assert!(walked.is_resolved());
        assert_eq!(walked.value(), Some(&Value::Null));
    }

    #[test]
    fn test_null_intermediate_stops() {
        let root = company();
        let walked = walk(&root, &Path::from("employees[0].boss.name"));
        assert_eq!(walked, Walk::Unresolved { depth: 3 });
    }

    #[test]
    fn test_missing_first_key() {
        let root = company();
        let walked = walk(&root, &Path::from("stockholders[0].name"));
        assert_eq!(walked, Walk::Unresolved { depth: 0 });
    }

    #[test]
    fn test_null_root_fails_at_first_key() {
        let walked = walk(&Value::Null, &Path::from("name"));
        assert_eq!(walked, Walk::Unresolved { depth: 0 });
    }

    #[test]
    fn test_empty_path_resolves_to_root() {
        let root = company();
        let walked = walk(&root, &Path::new());
        assert_eq!(
            walked,
            Walk::Resolved {
                value: &root,
                owner: None
            }
        );
    }

    #[test]
    fn test_scalar_intermediate_stops() {
        let root = company();
        let walked = walk(&root, &Path::from("employees[0].name.length"));
        assert_eq!(walked, Walk::Unresolved { depth: 3 });
    }
}
