#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # exist
//!
//! Defensive path access for nested dynamic values.
//!
//! Given a [`Value`] tree and a path such as `employees[0].name` (or the key
//! sequence `["employees", "0", "name"]`), this library checks whether the
//! path exists, reports where it breaks, reads it with a fallback, writes
//! to it, or invokes a method stored there. Missing intermediate nodes never
//! cause a failure: every operation degrades to `false`, a default, or a
//! no-op.
//!
//! ## Core Types
//!
//! - [`Value`], [`Map`] and [`Method`]: the dynamic value model
//! - [`Path`]: normalized key sequence, parsed from dot/bracket strings
//! - [`Resolver`], [`Detection`] and [`Invocation`]: path operations
//! - [`Config`] and [`ConfigBuilder`]: layered settings for `set`
//! - [`Error`] and [`Result`]: errors from the surrounding machinery
//! - [`Logger`] and [`LogLevel`]: stderr backend for the `log` facade
//!
//! ## Examples
//!
//! ```
//! use exist::{Detection, Path, Value};
//!
//! let mut company = Value::from_json_str(r#"{"employees":[{"name":"Benjy"}]}"#).unwrap();
//!
//! assert!(exist::exist(&company, "employees[0].name"));
//! assert!(!exist::exist(&company, "stockholders[0].name"));
//! assert_eq!(
//!     exist::detect(&company, "stockholders[0].name"),
//!     Detection::Missing(Path::from(["stockholders"])),
//! );
//!
//! let baby = Value::from("Baby");
//! assert_eq!(exist::get_or(&company, "stockholders[0].name", &baby), &baby);
//!
//! assert!(!exist::set(&mut company, "stockholders[0].name", "Benjy", false));
//! assert!(exist::set(&mut company, "stockholders[0].name", "Benjy", true));
//! assert_eq!(exist::get(&company, "stockholders[0].name"), Some(&Value::from("Benjy")));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod resolver;
pub mod value;
pub mod walk;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, IntermediateStyle};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::Path;
pub use resolver::{Detection, Invocation, Resolver};
pub use value::{Map, Method, Value};

/// Returns true iff every key of `path` can be followed from `root`.
///
/// A key whose value is `Null` exists; a key under a `Null` does not.
///
/// # Examples
///
/// ```
/// use exist::Value;
///
/// let company = Value::from_json_str(r#"{"employees":[{"name":"Benjy"}]}"#).unwrap();
/// assert!(exist::exist(&company, "employees[0].name"));
/// assert!(exist::exist(&company, ["employees", "0", "name"]));
/// assert!(!exist::exist(&company["employees"], "[1].name"));
/// ```
pub fn exist(root: &Value, path: impl Into<Path>) -> bool {
    Resolver::new().exist(root, path)
}

/// Reports whether `path` resolves, and if not, the path to the missing
/// property.
///
/// # Examples
///
/// ```
/// use exist::{Detection, Path, Value};
///
/// let company = Value::from_json_str(r#"{"employees":[{}]}"#).unwrap();
/// assert_eq!(
///     exist::detect(&company["employees"], "[0].name"),
///     Detection::Missing(Path::from(["0", "name"])),
/// );
/// assert_eq!(exist::detect(&company, "employees[0]"), Detection::Found);
/// ```
pub fn detect(root: &Value, path: impl Into<Path>) -> Detection {
    Resolver::new().detect(root, path)
}

/// Returns the value at `path`, or `None` if it does not resolve.
///
/// # Examples
///
/// ```
/// use exist::Value;
///
/// let company = Value::from_json_str(r#"{"employees":[{"name":"Benjy"}]}"#).unwrap();
/// assert_eq!(exist::get(&company, "employees[0].name"), Some(&Value::from("Benjy")));
/// assert_eq!(exist::get(&company, "employees[1].name"), None);
/// ```
pub fn get<'a>(root: &'a Value, path: impl Into<Path>) -> Option<&'a Value> {
    Resolver::new().get(root, path)
}

/// Returns the value at `path`, or `default` if it does not resolve.
pub fn get_or<'a>(root: &'a Value, path: impl Into<Path>, default: &'a Value) -> &'a Value {
    Resolver::new().get_or(root, path, default)
}

/// Assigns `value` at `path`, returning whether the assignment happened.
///
/// With `create_missing`, absent intermediate containers are created: arrays
/// for index-looking keys, maps otherwise. Use a [`Resolver`] to choose a
/// different [`IntermediateStyle`].
///
/// # Examples
///
/// ```
/// use exist::Value;
///
/// let mut company = Value::from_json_str(r#"{"employees":[{}]}"#).unwrap();
/// assert!(exist::set(&mut company, "employees[0].name", "Benjy", false));
/// assert_eq!(company["employees"][0]["name"], Value::from("Benjy"));
/// ```
pub fn set(
    root: &mut Value,
    path: impl Into<Path>,
    value: impl Into<Value>,
    create_missing: bool,
) -> bool {
    Resolver::new()
        .with_create_missing(create_missing)
        .set(root, path, value)
}

/// Returns a callable for the method at `path`, bound to the node that owns
/// it. Anything else yields [`Invocation::Noop`].
pub fn invoke<'a>(root: &'a Value, path: impl Into<Path>) -> Invocation<'a> {
    Resolver::new().invoke(root, path)
}
