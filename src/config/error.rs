use std::fmt;

use thiserror::Error;

/// Errors raised while selecting or assembling a configuration profile.
///
/// All of them happen during construction of a
/// [`ConfigResolver`](super::ConfigResolver); once built, the resolver never
/// fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The requested profile name is not one of the built-in profiles.
    #[error(
        "unknown profile '{name}' (expected one of: development, test, staging, production)"
    )]
    UnknownProfile {
        /// Name that was requested
        name: String,
    },

    /// A configuration layer is not valid TOML.
    #[error("failed to parse TOML in {layer} layer: {details}")]
    TomlParse {
        /// Layer that failed to parse (e.g. "base", "override #1")
        layer: String,
        /// Parse error details
        details: String,
    },

    /// The merged layers do not form a complete profile.
    #[error("failed to build profile from merged layers: {details}")]
    Deserialization {
        /// Deserialization error details
        details: String,
    },

    /// A field holds a value that violates a profile constraint.
    #[error("invalid config field '{field}': {reason}")]
    InvalidField {
        /// The field that is invalid
        field: String,
        /// Reason why the field is invalid
        reason: String,
    },
}

impl ConfigError {
    /// Creates a TOML parsing error for the named layer.
    pub fn toml_parse(error: impl fmt::Display, layer: &str) -> Self {
        ConfigError::TomlParse {
            layer: layer.to_string(),
            details: error.to_string(),
        }
    }

    pub(crate) fn invalid_field(field: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
