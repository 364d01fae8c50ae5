//! Per-test mocking session.
//!
//! A [`MockingSession`] is the explicit execution context for one test: it
//! owns a [`MockingProgress`], records every mock created through it, and on
//! [`finish`](MockingSession::finish) runs the validation gate one last time
//! before clearing everything for the next test.

use crate::config::ConfigurationValidator;
use crate::core::MockedType;
use crate::listener::SessionListener;
use crate::progress::{MockingProgress, ProgressError};
use chrono::{DateTime, Utc};
use std::any::Any;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Default)]
struct CreatedMocks {
    mocks: Mutex<Vec<MockedType>>,
}

impl CreatedMocks {
    fn snapshot(&self) -> Vec<MockedType> {
        self.mocks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SessionListener for CreatedMocks {
    fn mock_created(&self, _mock: &dyn Any, mocked_type: &MockedType) {
        self.mocks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*mocked_type);
    }
}

/// Summary returned by a cleanly finished session.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub mocks_created: Vec<MockedType>,
}

impl SessionReport {
    /// Wall-clock time between start and finish.
    pub fn duration(&self) -> Duration {
        self.finished_at
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}

/// Explicit mocking context for one test.
///
/// # Example
///
/// ```rust
/// use mockguard::core::MockedType;
/// use mockguard::session::MockingSession;
///
/// struct Mailer;
///
/// let mut session = MockingSession::start();
/// session.progress().mock_created(&Mailer, &MockedType::of::<Mailer>()).unwrap();
///
/// let report = session.finish().unwrap();
/// assert_eq!(report.mocks_created.len(), 1);
/// ```
pub struct MockingSession {
    progress: MockingProgress,
    created: Arc<CreatedMocks>,
    started_at: DateTime<Utc>,
}

impl MockingSession {
    /// Start a session with the default configuration.
    pub fn start() -> Self {
        Self::with_progress(MockingProgress::new())
    }

    /// Start a session whose progress validates against `configuration`.
    pub fn with_configuration(configuration: Arc<dyn ConfigurationValidator>) -> Self {
        Self::with_progress(MockingProgress::new().with_configuration(configuration))
    }

    fn with_progress(mut progress: MockingProgress) -> Self {
        let created = Arc::new(CreatedMocks::default());
        let listener: Arc<dyn SessionListener> = created.clone();
        progress.set_listener(&listener);
        let started_at = Utc::now();
        debug!(started_at = %started_at, "Mocking session started");
        Self {
            progress,
            created,
            started_at,
        }
    }

    /// The progress state machine every mock interaction goes through.
    ///
    /// The session records created mocks through the progress listener slot.
    /// Calling [`set_listener`](MockingProgress::set_listener) or
    /// [`clear_listener`](MockingProgress::clear_listener) on the returned
    /// progress detaches that recorder: mocks created afterwards are missing
    /// from [`created_mocks`](Self::created_mocks) and the final
    /// [`SessionReport`].
    pub fn progress(&mut self) -> &mut MockingProgress {
        &mut self.progress
    }

    /// Mock types created so far, in creation order.
    pub fn created_mocks(&self) -> Vec<MockedType> {
        self.created.snapshot()
    }

    /// End the session.
    ///
    /// Runs the full validation gate, then clears all pending state and any
    /// unpulled stubbing handoff regardless of the outcome.
    pub fn finish(mut self) -> Result<SessionReport, ProgressError> {
        let result = self.progress.validate_state();
        self.progress.reset();
        self.progress.reset_ongoing_stubbing();
        self.progress.clear_listener();

        match result {
            Ok(()) => {
                let report = SessionReport {
                    started_at: self.started_at,
                    finished_at: Utc::now(),
                    mocks_created: self.created.snapshot(),
                };
                debug!(mocks = report.mocks_created.len(), "Mocking session finished");
                Ok(report)
            }
            Err(error) => {
                warn!(error = %error, "Mocking session finished with misuse");
                Err(error)
            }
        }
    }
}
