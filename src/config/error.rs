//! Configuration error types.

use thiserror::Error;

/// Errors reported by the global-configuration validation hook
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationError {
    /// The configuration source could not be parsed
    #[error("Failed to load mocking configuration: {0}")]
    Parse(String),

    /// The configuration parsed but breaks one or more rules
    #[error("Invalid mocking configuration: {}", .problems.join("; "))]
    Invalid { problems: Vec<String> },
}
