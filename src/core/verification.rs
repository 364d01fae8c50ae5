//! Verification modes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many matching calls a verification expects.
///
/// The progress state machine treats the mode as an opaque value: it stores
/// it when a verification begins and hands it back exactly once.
///
/// # Example
///
/// ```rust
/// use mockguard::core::VerificationMode;
///
/// assert_eq!(VerificationMode::never(), VerificationMode::Times(0));
/// assert_eq!(VerificationMode::at_least_once(), VerificationMode::AtLeast(1));
/// assert!(VerificationMode::times(2).accepts(2));
/// assert!(!VerificationMode::at_most(1).accepts(2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationMode {
    /// Exactly this many calls.
    Times(usize),

    /// At least this many calls.
    AtLeast(usize),

    /// At most this many calls.
    AtMost(usize),

    /// The verified call is the only interaction with the mock.
    Only,
}

impl VerificationMode {
    /// Exactly `count` calls.
    pub fn times(count: usize) -> Self {
        Self::Times(count)
    }

    /// No calls at all.
    pub fn never() -> Self {
        Self::Times(0)
    }

    /// One call or more.
    pub fn at_least_once() -> Self {
        Self::AtLeast(1)
    }

    /// `count` calls or more.
    pub fn at_least(count: usize) -> Self {
        Self::AtLeast(count)
    }

    /// `count` calls or fewer.
    pub fn at_most(count: usize) -> Self {
        Self::AtMost(count)
    }

    /// The verified call is the only interaction.
    pub fn only() -> Self {
        Self::Only
    }

    /// Check whether an observed call count satisfies this mode (pure).
    ///
    /// `Only` is satisfied by a single call; checking that no other
    /// interaction happened is left to the verifier.
    pub fn accepts(&self, actual: usize) -> bool {
        match *self {
            Self::Times(expected) => actual == expected,
            Self::AtLeast(min) => actual >= min,
            Self::AtMost(max) => actual <= max,
            Self::Only => actual == 1,
        }
    }
}

impl Default for VerificationMode {
    fn default() -> Self {
        Self::Times(1)
    }
}

impl fmt::Display for VerificationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Times(0) => write!(f, "never()"),
            Self::Times(n) => write!(f, "times({n})"),
            Self::AtLeast(n) => write!(f, "atLeast({n})"),
            Self::AtMost(n) => write!(f, "atMost({n})"),
            Self::Only => write!(f, "only()"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_times_one() {
        assert_eq!(VerificationMode::default(), VerificationMode::Times(1));
    }

    #[test]
    fn accepts_follows_mode() {
        assert!(VerificationMode::never().accepts(0));
        assert!(!VerificationMode::never().accepts(1));
        assert!(VerificationMode::at_least(2).accepts(5));
        assert!(!VerificationMode::at_least(2).accepts(1));
        assert!(VerificationMode::at_most(2).accepts(0));
        assert!(VerificationMode::only().accepts(1));
        assert!(!VerificationMode::only().accepts(2));
    }

    #[test]
    fn display_names_modes() {
        assert_eq!(VerificationMode::never().to_string(), "never()");
        assert_eq!(VerificationMode::times(3).to_string(), "times(3)");
        assert_eq!(VerificationMode::at_least_once().to_string(), "atLeast(1)");
        assert_eq!(VerificationMode::at_most(4).to_string(), "atMost(4)");
        assert_eq!(VerificationMode::only().to_string(), "only()");
    }
}
