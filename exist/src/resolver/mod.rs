//! Path operations over dynamic values.
//!
//! The [`Resolver`] exposes the five operations built on the walk
//! primitive:
//!
//! - [`Resolver::exist`]: does the path fully resolve?
//! - [`Resolver::detect`]: if not, which property is missing?
//! - [`Resolver::get`] / [`Resolver::get_or`]: the value, or a fallback.
//! - [`Resolver::set`]: assign in place, optionally creating containers.
//! - [`Resolver::invoke`]: a callable that is always safe to call.
//!
//! None of them fail. A path that cannot be followed degrades to `false`,
//! the path of the missing property, `None`, a default, or a no-op.
//!
//! # Examples
//!
//! ```
//! use exist::{Detection, Path, Resolver, Value};
//!
//! let company = Value::from_json_str(r#"{"employees":[{"name":"Benjy"}]}"#).unwrap();
//! let resolver = Resolver::new();
//!
//! assert!(resolver.exist(&company, "employees[0].name"));
//! assert_eq!(
//!     resolver.detect(&company, "stockholders[0].name"),
//!     Detection::Missing(Path::from(["stockholders"])),
//! );
//! let fallback = Value::from("Baby");
//! assert_eq!(
//!     resolver.get_or(&company, "stockholders[0].name", &fallback),
//!     &Value::from("Baby"),
//! );
//! ```

mod invoke;
mod set;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use invoke::Invocation;

use crate::config::{Config, IntermediateStyle};
use crate::path::Path;
use crate::value::Value;
use crate::walk::{walk, Walk};

/// Result of [`Resolver::detect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// The whole path resolved.
    Found,
    /// The walk stopped; holds the path to the missing property: every key
    /// that was followed, then the first key that could not be.
    Missing(Path),
}

impl Detection {
    /// Returns true if the whole path resolved.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found)
    }

    /// The path to the missing property, if any.
    #[must_use]
    pub fn missing(&self) -> Option<&Path> {
        match self {
            Self::Found => None,
            Self::Missing(rest) => Some(rest),
        }
    }

    /// Converts into a `Result`, with the missing path as the error.
    ///
    /// # Errors
    ///
    /// Returns the path to the missing property when the walk stopped.
    pub fn into_result(self) -> Result<(), Path> {
        match self {
            Self::Found => Ok(()),
            Self::Missing(rest) => Err(rest),
        }
    }
}

/// Performs path operations with a fixed `set` policy.
///
/// Read operations behave identically for every resolver; the settings
/// only affect [`Resolver::set`].
///
/// # Examples
///
/// ```
/// use exist::{IntermediateStyle, Resolver};
///
/// let resolver = Resolver::new()
///     .with_create_missing(true)
///     .with_intermediates(IntermediateStyle::Map);
/// assert!(resolver.creates_missing());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolver {
    create_missing: bool,
    intermediates: IntermediateStyle,
}

impl Resolver {
    /// Create a resolver that never creates containers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver from a merged configuration, using defaults for
    /// unset fields.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            create_missing: config.create_missing.unwrap_or(false),
            intermediates: config.intermediates.unwrap_or_default(),
        }
    }

    /// Allow `set` to create missing intermediate containers.
    #[must_use]
    pub fn with_create_missing(mut self, create: bool) -> Self {
        self.create_missing = create;
        self
    }

    /// Choose the shape of containers created by `set`.
    #[must_use]
    pub fn with_intermediates(mut self, style: IntermediateStyle) -> Self {
        self.intermediates = style;
        self
    }

    /// Whether `set` creates missing containers.
    #[must_use]
    pub fn creates_missing(&self) -> bool {
        self.create_missing
    }

    /// Shape of containers created by `set`.
    #[must_use]
    pub fn intermediates(&self) -> IntermediateStyle {
        self.intermediates
    }

    /// Returns true iff every key of `path` can be followed from `root`.
    ///
    /// A key whose value is `Null` still exists.
    pub fn exist(&self, root: &Value, path: impl Into<Path>) -> bool {
        walk(root, &path.into()).is_resolved()
    }

    /// Like [`Resolver::exist`], but reports where the walk stopped.
    ///
    /// The missing path ends with the first key that could not be followed,
    /// so its last element names the broken link of the chain.
    pub fn detect(&self, root: &Value, path: impl Into<Path>) -> Detection {
        let path = path.into();
        match walk(root, &path) {
            Walk::Resolved { .. } => Detection::Found,
            Walk::Unresolved { depth } => Detection::Missing(path.prefix(depth + 1)),
        }
    }

    /// Returns the value at `path`, or `None` if it does not resolve.
    ///
    /// A resolved `Null` is returned as `Some(&Value::Null)`.
    pub fn get<'a>(&self, root: &'a Value, path: impl Into<Path>) -> Option<&'a Value> {
        walk(root, &path.into()).value()
    }

    /// Returns the value at `path`, or `default` if it does not resolve.
    ///
    /// The default applies only to unresolved paths, never to a resolved
    /// value that happens to be `Null`, `false`, `0` or `""`.
    pub fn get_or<'a>(
        &self,
        root: &'a Value,
        path: impl Into<Path>,
        default: &'a Value,
    ) -> &'a Value {
        self.get(root, path).unwrap_or(default)
    }

    /// Assigns `value` at `path`, returning whether the assignment happened.
    ///
    /// Every key but the last must lead to an existing container, unless the
    /// resolver creates missing ones: then an absent or `Null` member is
    /// replaced by a fresh container shaped by [`IntermediateStyle`]. The last
    /// key is inserted into a map, or written at an index of an array (an
    /// index past the end pads with `Null`). Returns false, leaving `root`
    /// untouched, for an empty path, a `Null` root, a scalar in the way, or a
    /// non-index key on an array.
    pub fn set(&self, root: &mut Value, path: impl Into<Path>, value: impl Into<Value>) -> bool {
        let intermediates = self.create_missing.then_some(self.intermediates);
        set::assign(root, &path.into(), value.into(), intermediates)
    }

    /// Returns a callable for the method at `path`, bound to its owner.
    ///
    /// Unresolved paths and non-callable values yield [`Invocation::Noop`].
    pub fn invoke<'a>(&self, root: &'a Value, path: impl Into<Path>) -> Invocation<'a> {
        match walk(root, &path.into()) {
            Walk::Resolved {
                value: Value::Function(method),
                owner: Some(receiver),
            } => Invocation::Bound { method, receiver },
            _ => Invocation::Noop,
        }
    }
}
