//! Error types for the exist library.
//!
//! Path operations never fail: a path that cannot be followed degrades to
//! `false`, `None`, a default, or a no-op. The errors here belong to the
//! surrounding machinery (configuration, JSON input, logger installation),
//! built with `thiserror`.

use thiserror::Error;

/// Result type alias for fallible operations in the exist library.
///
/// # Examples
///
/// ```
/// use exist::{Error, Result};
///
/// fn example_operation() -> Result<bool> {
///     Ok(true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the exist library.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// JSON input could not be parsed into a value.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A global logger was already installed.
    #[error("logger installation failed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl Error {
    /// Check if error indicates a missing file.
    ///
    /// # Examples
    ///
    /// ```
    /// use exist::Error;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    /// assert!(Error::from(io).is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Check if error came from validating a configuration value.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "EXIST_CREATE_MISSING".to_string(),
            message: "must be a boolean".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("EXIST_CREATE_MISSING"));
        assert!(display.contains("must be a boolean"));
        assert!(err.is_validation());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(format!("{err}").contains("JSON error"));
    }

    #[test]
    fn test_configuration_error_conversion() {
        let yaml_err = serde_yaml::from_str::<Vec<u8>>("- [").unwrap_err();
        let err: Error = yaml_err.into();
        assert!(format!("{err}").contains("configuration error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u16> {
            Err(Error::Validation {
                field: "test".to_string(),
                message: "test".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}
