//! Error types for configuration validation.

use thiserror::Error;

/// Error type for configuration operations.
///
/// Usage errors (unknown flags, conflicting modes, malformed MAC) are raised
/// by clap while parsing; this covers what is left to validate afterwards.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required field that must be provided on the command line.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// The adapter name is empty or blank.
    #[error("Invalid adapter name '{0}': must not be blank")]
    BlankAdapterName(String),
}

/// Well-known field names for `MissingRequired` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The adapter name field.
    pub const ADAPTER: &str = "adapter";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
