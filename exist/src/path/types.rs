//! The normalized path type.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::parse::tokenize;

/// An ordered sequence of string keys.
///
/// Built from a dot/bracket string, from any sequence of displayable keys,
/// or with the [`Path::key`] / [`Path::index`] builder. All three produce the
/// same normalized form.
///
/// # Examples
///
/// ```
/// use exist::Path;
///
/// let parsed = Path::parse("employees[0].name");
/// let listed = Path::from(["employees", "0", "name"]);
/// let built = Path::new().key("employees").index(0).key("name");
///
/// assert_eq!(parsed, listed);
/// assert_eq!(parsed, built);
/// assert_eq!(parsed.to_string(), "employees[0].name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    keys: Vec<String>,
}

impl Path {
    /// Creates an empty path, which resolves to the root itself.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the dot/bracket grammar. Never fails.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self {
            keys: tokenize(input),
        }
    }

    /// Builds a path from a sequence of keys, converting each with `ToString`.
    ///
    /// # Examples
    ///
    /// ```
    /// use exist::Path;
    ///
    /// let path = Path::from_keys([1, 2, 3]);
    /// assert_eq!(path.keys(), ["1", "2", "3"]);
    /// ```
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: ToString,
    {
        Self {
            keys: keys.into_iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Appends a key.
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.keys.push(key.into());
        self
    }

    /// Appends an array index.
    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.keys.push(index.to_string());
        self
    }

    /// The keys in order.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true when the path has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over the keys.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.keys.iter()
    }

    /// The first `len` keys, as a new path.
    ///
    /// A `len` past the end yields the whole path.
    #[must_use]
    pub fn prefix(&self, len: usize) -> Self {
        Self {
            keys: self.keys.iter().take(len).cloned().collect(),
        }
    }

    /// Splits into the parent keys and the last key.
    #[must_use]
    pub fn split_last(&self) -> Option<(&str, &[String])> {
        self.keys
            .split_last()
            .map(|(last, parents)| (last.as_str(), parents))
    }

    /// Interprets a key as an array index.
    ///
    /// Only canonical non-negative decimals qualify: `"0"`, `"42"`, but not
    /// `"007"`, `"+1"`, `"-1"` or `"1.0"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use exist::Path;
    ///
    /// assert_eq!(Path::as_index("42"), Some(42));
    /// assert_eq!(Path::as_index("042"), None);
    /// assert_eq!(Path::as_index("name"), None);
    /// ```
    #[must_use]
    pub fn as_index(key: &str) -> Option<usize> {
        let bytes = key.as_bytes();
        let canonical = match bytes {
            [] => false,
            [b'0'] => true,
            [first, rest @ ..] => {
                (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit)
            }
        };
        if canonical {
            key.parse().ok()
        } else {
            None
        }
    }

    /// Returns true if the key looks like an array index.
    #[must_use]
    pub fn is_index(key: &str) -> bool {
        Self::as_index(key).is_some()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            let plain = !key.is_empty() && !key.contains(&['.', '[', ']'][..]);
            if Self::is_index(key) || !plain {
                write!(f, "[{key}]")?;
            } else if i == 0 {
                f.write_str(key)?;
            } else {
                write!(f, ".{key}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Path {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&String> for Path {
    fn from(s: &String) -> Self {
        Self::parse(s)
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl<K: ToString> From<Vec<K>> for Path {
    fn from(keys: Vec<K>) -> Self {
        Self::from_keys(keys)
    }
}

impl<K: ToString> From<&[K]> for Path {
    fn from(keys: &[K]) -> Self {
        Self {
            keys: keys.iter().map(ToString::to_string).collect(),
        }
    }
}

impl<K: ToString, const N: usize> From<[K; N]> for Path {
    fn from(keys: [K; N]) -> Self {
        Self::from_keys(keys)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
