//! Argument matcher storage.
//!
//! Matchers are placeholders written in place of literal arguments, e.g.
//! "any integer" or "not equal to 3". They are evaluated *before* the call
//! they belong to, so they are parked here until the stubbing or
//! verification machinery pulls them. Anything still parked when the
//! progress state machine validates is a misuse.

pub mod error;
pub mod matcher;
pub mod storage;

pub use error::MatcherError;
pub use matcher::{matcher_fn, And, AnyArgument, ArgumentMatcher, FnMatcher, Not, Or, SharedMatcher};
pub use storage::{ArgumentMatcherStorage, LocalizedMatcher, MatcherStorage};
