//! Mocking-progress state machine.
//!
//! [`MockingProgress`] owns the three pieces of in-flight state a mocking
//! library juggles: an open stub configuration, a verification mode waiting
//! for its call, and the stubbing handoff between interception and
//! `when(..)`. Its validation gate runs before almost every mock interaction
//! and rejects sequences that leave one of them half-finished.
//!
//! # Example
//!
//! ```rust
//! use mockguard::core::VerificationMode;
//! use mockguard::progress::MockingProgress;
//! use mockguard::stubbing::OngoingStubbing;
//!
//! let mut progress = MockingProgress::new();
//!
//! progress.stubbing_started().unwrap();
//! progress.report_ongoing_stubbing(OngoingStubbing::new("List::get(0)"));
//! progress.stubbing_completed();
//! assert!(progress.pull_ongoing_stubbing().is_some());
//!
//! progress.verification_started(VerificationMode::times(1)).unwrap();
//! assert_eq!(progress.pull_verification_mode(), Some(VerificationMode::Times(1)));
//!
//! assert!(progress.validate_state().is_ok());
//! ```

pub mod error;
pub mod snapshot;
mod state;

pub use error::{ProgressError, SnapshotError};
pub use snapshot::ProgressSnapshot;
pub use state::MockingProgress;
