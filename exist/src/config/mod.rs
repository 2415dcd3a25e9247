//! Configuration system for exist.
//!
//! Only `set` has behavior worth configuring: whether it may create missing
//! intermediate containers, and what shape those containers take.
//!
//! # Configuration Precedence
//!
//! Layers are merged with the following precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`EXIST_*`)
//! 3. YAML configuration file (via `ConfigBuilder::with_file`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use exist::config::{Config, ConfigBuilder};
//! use exist::Resolver;
//!
//! let config = ConfigBuilder::new()
//!     .skip_env(true)
//!     .with_config(Config { create_missing: Some(true), ..Default::default() })
//!     .build()
//!     .unwrap();
//!
//! let resolver = Resolver::from_config(&config);
//! assert!(resolver.creates_missing());
//! ```

mod environment;
mod loader;
mod schema;

use std::path::PathBuf;

pub use environment::{EnvironmentConfig, CREATE_MISSING_VAR, INTERMEDIATES_VAR};
pub use loader::ConfigLoader;
pub use schema::{Config, IntermediateStyle};

use crate::error::Result;

/// Builder that merges configuration layers.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    file: Option<PathBuf>,
    overrides: Option<Config>,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder with no file, no overrides, and environment enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a YAML configuration file. The file must exist.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Apply programmatic overrides on top of every other layer.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Ignore `EXIST_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self, skip: bool) -> Self {
        self.skip_env = skip;
        self
    }

    /// Merge all layers into a final configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if an
    /// environment variable holds an invalid value.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(path) = &self.file {
            config.merge(ConfigLoader::load_file(path)?);
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = self.overrides {
            config.merge(overrides);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_build_defaults() {
        let config = ConfigBuilder::new().skip_env(true).build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_override_beats_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("exist.yaml");
        fs::write(&path, "create_missing: true\nintermediates: map\n").unwrap();

        let config = ConfigBuilder::new()
            .skip_env(true)
            .with_file(&path)
            .with_config(Config {
                create_missing: Some(false),
                intermediates: None,
            })
            .build()
            .unwrap();

        assert_eq!(config.create_missing, Some(false));
        assert_eq!(config.intermediates, Some(IntermediateStyle::Map));
    }

    #[test]
    #[serial]
    fn test_env_beats_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("exist.yaml");
        fs::write(&path, "create_missing: false\n").unwrap();

        env::set_var(CREATE_MISSING_VAR, "true");
        let config = ConfigBuilder::new().with_file(&path).build();
        env::remove_var(CREATE_MISSING_VAR);

        assert_eq!(config.unwrap().create_missing, Some(true));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let result = ConfigBuilder::new()
            .skip_env(true)
            .with_file(dir.path().join("nope.yaml"))
            .build();
        assert!(result.unwrap_err().is_not_found());
    }
}
