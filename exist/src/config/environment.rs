//! Environment variable handling for configuration overrides.
//!
//! Recognized variables:
//!
//! - `EXIST_CREATE_MISSING`: `true`/`false`/`1`/`0`/`yes`/`no`
//! - `EXIST_INTERMEDIATES`: `by-key` or `map`

use std::env;

use crate::config::schema::{Config, IntermediateStyle};
use crate::error::{Error, Result};

/// Environment variable controlling `Config::create_missing`.
pub const CREATE_MISSING_VAR: &str = "EXIST_CREATE_MISSING";

/// Environment variable controlling `Config::intermediates`.
pub const INTERMEDIATES_VAR: &str = "EXIST_INTERMEDIATES";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use exist::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `EXIST_*` environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a variable is set to an unrecognized
    /// value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(CREATE_MISSING_VAR) {
            config.create_missing = Some(Self::parse_bool(CREATE_MISSING_VAR, &val)?);
        }

        if let Ok(val) = env::var(INTERMEDIATES_VAR) {
            let style = IntermediateStyle::parse(val.trim()).map_err(|message| Error::Validation {
                field: INTERMEDIATES_VAR.into(),
                message,
            })?;
            config.intermediates = Some(style);
        }

        Ok(())
    }

    /// Parse a boolean environment variable value.
    fn parse_bool(name: &str, value: &str) -> Result<bool> {
        match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: name.into(),
                message: format!("Invalid boolean value: {value}"),
            }),
        }
    }
}
