//! Matcher storage error types.

use crate::core::Location;
use thiserror::Error;

/// Errors raised when argument matchers are used outside the protocol.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MatcherError {
    /// Matchers were reported but never consumed by a stubbed or verified call
    #[error(
        "Misplaced argument matcher detected: {count} matcher(s) reported but not consumed, first at {first}",
        count = .locations.len(),
        first = first_location(.locations)
    )]
    MisplacedMatchers { locations: Vec<Location> },

    /// A combinator found fewer sub-matchers on the stack than it needs
    #[error("Invalid use of argument matchers: {operator} expects {expected} sub-matcher(s), found {found}")]
    InvalidUseOfMatchers {
        operator: &'static str,
        expected: usize,
        found: usize,
    },
}

fn first_location(locations: &[Location]) -> String {
    locations
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| "<unknown>".to_string())
}
