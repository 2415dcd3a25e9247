//! Configuration file loading.

use std::fs;
use std::path::Path;

use crate::config::schema::Config;
use crate::error::Result;

/// Loads configuration from YAML files or strings.
///
/// # Examples
///
/// ```
/// use exist::config::ConfigLoader;
///
/// let config = ConfigLoader::parse_str("create_missing: true").unwrap();
/// assert_eq!(config.create_missing, Some(true));
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a configuration
    /// error if it is not valid YAML for [`Config`].
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        let config = Self::parse_str(&contents)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse YAML text into a [`Config`].
    ///
    /// Empty text yields the default (all fields unset).
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the YAML is invalid or contains
    /// unknown fields.
    pub fn parse_str(contents: &str) -> Result<Config> {
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }
}
