//! Configuration schema definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How `set` builds intermediate containers when it is allowed to create them.
///
/// # Examples
///
/// ```
/// use exist::IntermediateStyle;
///
/// let style: IntermediateStyle = serde_yaml::from_str("map").unwrap();
/// assert_eq!(style, IntermediateStyle::Map);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntermediateStyle {
    /// Arrays for index-looking keys, maps otherwise.
    #[default]
    ByKey,
    /// Maps for every key, including index-looking ones.
    Map,
}

impl IntermediateStyle {
    /// Parses a style name (`by-key` or `map`, case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error message if the name is not recognized.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "by-key" => Ok(Self::ByKey),
            "map" => Ok(Self::Map),
            _ => Err(format!("invalid intermediate style: {s}")),
        }
    }
}

impl fmt::Display for IntermediateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByKey => write!(f, "by-key"),
            Self::Map => write!(f, "map"),
        }
    }
}

/// Resolver configuration.
///
/// Every field is optional so that layers can be merged; unset fields fall
/// back to built-in defaults when a resolver is created.
///
/// # Examples
///
/// ```
/// use exist::{Config, IntermediateStyle};
///
/// let config: Config = serde_yaml::from_str(
///     "create_missing: true\nintermediates: map\n",
/// ).unwrap();
/// assert_eq!(config.create_missing, Some(true));
/// assert_eq!(config.intermediates, Some(IntermediateStyle::Map));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Create missing intermediate containers in `set`.
    pub create_missing: Option<bool>,

    /// Shape of containers created by `set`.
    pub intermediates: Option<IntermediateStyle>,
}

impl Config {
    /// Overlays `other` on top of `self`; fields set in `other` win.
    ///
    /// # Examples
    ///
    /// ```
    /// use exist::Config;
    ///
    /// let mut base = Config { create_missing: Some(false), ..Default::default() };
    /// base.merge(Config { create_missing: Some(true), ..Default::default() });
    /// assert_eq!(base.create_missing, Some(true));
    /// ```
    pub fn merge(&mut self, other: Config) {
        if other.create_missing.is_some() {
            self.create_missing = other.create_missing;
        }
        if other.intermediates.is_some() {
            self.intermediates = other.intermediates;
        }
    }
}
