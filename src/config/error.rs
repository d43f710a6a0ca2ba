//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the scenario file.
    #[error("Failed to read scenario file '{}': {source}", path.display())]
    FileRead {
        /// Path to the scenario file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML scenario.
    #[error("Failed to parse TOML scenario: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write the scenario file (for init command).
    #[error("Failed to write scenario file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the scenario file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Missing required field that must be provided by CLI or scenario file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// Invalid element declaration.
    #[error("Invalid element '{name}': {reason}")]
    InvalidElement {
        /// The element name as written
        name: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A step or option refers to an element that was never declared.
    #[error("Unknown element '{name}' referenced by {context}")]
    UnknownElement {
        /// The referenced name
        name: String,
        /// Where the reference appears
        context: String,
    },

    /// Invalid dimension (negative, NaN or infinite).
    #[error("Invalid size for {context}: {reason}")]
    InvalidSize {
        /// Where the size appears
        context: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid duration value (zero).
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid host element tag.
    #[error("Invalid host tag '{0}'")]
    InvalidHostTag(String),

    /// Invalid output format value.
    #[error("Invalid output format '{value}': expected text or json")]
    InvalidFormat {
        /// The invalid value provided
        value: String,
    },
}

/// Well-known field names for `MissingRequired` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The scenario file field.
    pub const SCENARIO: &str = "scenario";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
