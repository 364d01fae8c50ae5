//! Values paired with the call site that produced them.

use super::location::Location;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value tagged with the [`Location`] where it was recorded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Localized<T> {
    value: T,
    location: Location,
}

impl<T> Localized<T> {
    /// Wrap `value`, capturing the caller's location.
    #[track_caller]
    pub fn new(value: T) -> Self {
        Self {
            value,
            location: Location::capture(),
        }
    }

    /// Get the wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Where the value was reported.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Split into the value and its location.
    pub fn into_parts(self) -> (T, Location) {
        (self.value, self.location)
    }
}

impl<T: fmt::Display> fmt::Display for Localized<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.value, self.location)
    }
}
