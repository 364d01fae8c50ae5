//! The in-flight stubbing handed from interception to configuration.

use crate::core::Location;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Handoff created when a call on a mock is intercepted during stubbing.
///
/// The interception layer reports it to the progress state machine; the
/// `when(..)` side of the API pulls it exactly once to attach answers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OngoingStubbing {
    id: Uuid,
    invocation: String,
    location: Location,
}

impl OngoingStubbing {
    /// Create a handoff for the intercepted `invocation`, e.g. `"List::get(0)"`.
    #[track_caller]
    pub fn new(invocation: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            invocation: invocation.into(),
            location: Location::capture(),
        }
    }

    /// Unique id of this handoff.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Description of the intercepted call.
    pub fn invocation(&self) -> &str {
        &self.invocation
    }

    /// Where the call was intercepted.
    pub fn location(&self) -> &Location {
        &self.location
    }
}

impl fmt::Display for OngoingStubbing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.invocation, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_handoff_has_a_fresh_id() {
        let first = OngoingStubbing::new("List::get(0)");
        let second = OngoingStubbing::new("List::get(0)");
        assert_ne!(first.id(), second.id());
        assert_ne!(first, second);
    }

    #[test]
    fn handoff_records_invocation_and_location() {
        let handoff = OngoingStubbing::new("Repository::find(42)");
        assert_eq!(handoff.invocation(), "Repository::find(42)");
        assert!(handoff.location().file().ends_with("ongoing.rs"));
        assert!(handoff.to_string().starts_with("Repository::find(42) ["));
    }
}
