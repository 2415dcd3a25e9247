//! Path parsing and normalization.
//!
//! A path names a nested location inside a [`Value`](crate::Value). It can
//! be written two ways:
//!
//! - As a string in dot/bracket form: `employees[0].name`, `[0].name`,
//!   `matrix[1][2]`.
//! - As an ordered sequence of keys: `["employees", "0", "name"]`, or a
//!   mixed sequence built with [`Path::key`] and [`Path::index`].
//!
//! Both forms normalize to the same [`Path`]: an ordered list of string keys.
//! Keys that look like canonical non-negative integers double as array
//! indices.
//!
//! Parsing is total. A malformed string still yields keys; they simply fail
//! to resolve later.
//!
//! # Examples
//!
//! ```
//! use exist::Path;
//!
//! let path: Path = "employees[0].name".into();
//! assert_eq!(path.keys(), ["employees", "0", "name"]);
//! assert!(Path::is_index(&path.keys()[1]));
//! ```

pub mod parse;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use types::Path;
