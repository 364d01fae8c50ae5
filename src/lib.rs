//! Mockguard: the progress guard of a mocking library
//!
//! Mock-object libraries let a test interleave "start stubbing a call",
//! "start verifying a call" and "interact with a mock" in any order. Most
//! orders are mistakes: opening a second stub before finishing the first,
//! leaving a `verify(..)` without the call it verifies, or writing an
//! argument matcher outside of any stubbed or verified call. Mockguard is the
//! small piece of state that notices.
//!
//! # Core Concepts
//!
//! - **Progress**: [`MockingProgress`] owns the pending stub, the pending
//!   verification mode and the stubbing handoff, and runs the validation gate
//! - **Matchers**: [`ArgumentMatcherStorage`] parks matchers until the real
//!   call consumes them
//! - **Listeners**: [`SessionListener`] observes mock creation without being
//!   owned by the progress
//! - **Sessions**: [`MockingSession`] binds one progress to one test
//!
//! Every misuse is reported once: the offending state is cleared before the
//! error is returned.
//!
//! # Example
//!
//! ```rust
//! use mockguard::{MockingProgress, OngoingStubbing, ProgressError, VerificationMode};
//!
//! let mut progress = MockingProgress::new();
//!
//! // when(list.get(0)).thenReturn(..)
//! progress.stubbing_started().unwrap();
//! progress.report_ongoing_stubbing(OngoingStubbing::new("List::get(0)"));
//! let handoff = progress.pull_ongoing_stubbing().unwrap();
//! assert_eq!(handoff.invocation(), "List::get(0)");
//! progress.stubbing_completed();
//!
//! // verify(list) without the call that should follow it
//! progress.verification_started(VerificationMode::times(1)).unwrap();
//! let misuse = progress.verification_started(VerificationMode::never());
//! assert!(matches!(misuse, Err(ProgressError::UnfinishedVerification { .. })));
//! ```

pub mod config;
pub mod core;
pub mod listener;
pub mod matchers;
pub mod progress;
pub mod session;
pub mod stubbing;

// Re-export commonly used types
pub use config::{ConfigurationError, ConfigurationValidator, GlobalConfiguration};
pub use self::core::{Localized, Location, MockedType, VerificationMode};
pub use listener::SessionListener;
pub use matchers::{ArgumentMatcherStorage, MatcherError, MatcherStorage};
pub use progress::{MockingProgress, ProgressError, ProgressSnapshot};
pub use session::{MockingSession, SessionReport};
pub use stubbing::{AnswerError, AnswerResult, OngoingStubbing};
