//! Progress error types.

use crate::config::ConfigurationError;
use crate::core::Location;
use crate::matchers::MatcherError;
use thiserror::Error;

/// Protocol violations detected by the mocking-progress validation gate.
///
/// Every variant is raised after the offending pending state has been
/// cleared, so a caller that handles the error continues from a clean
/// state.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProgressError {
    /// A stub configuration was opened and never completed
    #[error("Unfinished stubbing detected, started at {location}")]
    UnfinishedStubbing { location: Location },

    /// A verification mode was set and never consumed by a call on the mock
    #[error("Unfinished verification detected, started at {location}")]
    UnfinishedVerification { location: Location },

    /// Argument matchers were reported but never consumed
    #[error(transparent)]
    InvalidMatcherUsage(#[from] MatcherError),

    /// The global-configuration hook failed
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl ProgressError {
    /// Call site that opened the unfinished operation, if the error has one.
    pub fn location(&self) -> Option<&Location> {
        match self {
            Self::UnfinishedStubbing { location } | Self::UnfinishedVerification { location } => {
                Some(location)
            }
            Self::InvalidMatcherUsage(_) | Self::Configuration(_) => None,
        }
    }
}

/// Errors that can occur while exporting a progress snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),
}
