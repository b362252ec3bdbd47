#![forbid(unsafe_code)]

//! Error types for publish-gate
//!
//! Errors here cover configuration loading and programmatic rule
//! construction only. The evaluation path never returns an error: missing
//! attributes, type mismatches, and "no applicable rule" are all ordinary
//! data conditions modeled as `None`, not failures.

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid configuration syntax
    #[error("Invalid configuration syntax: {0}")]
    InvalidSyntax(String),

    /// Missing required configuration field
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Invalid configuration value
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// I/O error reading the configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rule-construction errors
///
/// Constructing a Rule with invalid invariants is a programming error, not
/// a runtime data condition, so these surface eagerly.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Invalid rule definition
    #[error("Invalid rule definition: {0}")]
    InvalidDefinition(String),
}

/// Top-level error type for publish-gate
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),
}
