//! The mocking-progress state machine.

use super::error::ProgressError;
use super::snapshot::ProgressSnapshot;
use crate::config::{ConfigurationValidator, GlobalConfiguration};
use crate::core::{Localized, Location, MockedType, VerificationMode};
use crate::listener::SessionListener;
use crate::matchers::{ArgumentMatcherStorage, MatcherStorage};
use crate::stubbing::OngoingStubbing;
use chrono::Utc;
use std::any::Any;
use std::fmt;
use std::sync::{Arc, Weak};
use tracing::{debug, warn};

/// Tracks which mock operation is half-finished and rejects misuse.
///
/// One instance belongs to one execution context (typically one test). Every
/// mock-interaction entry point calls into it before doing its own work:
///
/// - stubbing: [`stubbing_started`](Self::stubbing_started), then
///   [`report_ongoing_stubbing`](Self::report_ongoing_stubbing) from the
///   interception layer, [`pull_ongoing_stubbing`](Self::pull_ongoing_stubbing)
///   from `when(..)`, and finally [`stubbing_completed`](Self::stubbing_completed)
/// - verification: [`verification_started`](Self::verification_started), then
///   [`pull_verification_mode`](Self::pull_verification_mode) on the next call
/// - mock creation: [`mock_created`](Self::mock_created)
///
/// Methods take `&mut self`; sharing one instance across threads requires the
/// caller to wrap it, which is outside the supported model.
///
/// # Example
///
/// ```rust
/// use mockguard::progress::{MockingProgress, ProgressError};
///
/// let mut progress = MockingProgress::new();
///
/// progress.stubbing_started().unwrap();
/// let result = progress.stubbing_started();
/// assert!(matches!(result, Err(ProgressError::UnfinishedStubbing { .. })));
///
/// // The failure cleared the open stub.
/// assert!(progress.validate_state().is_ok());
/// ```
pub struct MockingProgress<M: MatcherStorage = ArgumentMatcherStorage> {
    ongoing_stubbing: Option<OngoingStubbing>,
    verification_mode: Option<Localized<VerificationMode>>,
    stubbing_in_progress: Option<Location>,
    matcher_storage: M,
    listener: Option<Weak<dyn SessionListener>>,
    configuration: Arc<dyn ConfigurationValidator>,
}

impl MockingProgress {
    /// Create a progress tracker with empty matcher storage and the default
    /// configuration.
    pub fn new() -> Self {
        Self::with_storage(ArgumentMatcherStorage::new())
    }
}

impl Default for MockingProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MatcherStorage> MockingProgress<M> {
    /// Create a progress tracker around a custom matcher storage.
    pub fn with_storage(matcher_storage: M) -> Self {
        Self {
            ongoing_stubbing: None,
            verification_mode: None,
            stubbing_in_progress: None,
            matcher_storage,
            listener: None,
            configuration: Arc::new(GlobalConfiguration::default()),
        }
    }

    /// Replace the global-configuration hook.
    pub fn with_configuration(mut self, configuration: Arc<dyn ConfigurationValidator>) -> Self {
        self.configuration = configuration;
        self
    }

    /// Store the stubbing handoff, overwriting any unpulled one.
    pub fn report_ongoing_stubbing(&mut self, ongoing_stubbing: OngoingStubbing) {
        if let Some(previous) = &self.ongoing_stubbing {
            debug!(previous = %previous, "Unpulled stubbing handoff overwritten");
        }
        self.ongoing_stubbing = Some(ongoing_stubbing);
    }

    /// Take the stubbing handoff. A second pull returns `None`.
    pub fn pull_ongoing_stubbing(&mut self) -> Option<OngoingStubbing> {
        self.ongoing_stubbing.take()
    }

    /// Discard the stubbing handoff without reading it.
    pub fn reset_ongoing_stubbing(&mut self) {
        self.ongoing_stubbing = None;
    }

    /// Begin a verification.
    ///
    /// Runs the full validation gate, discards any unpulled stubbing handoff
    /// and stores `mode` with the caller's location.
    #[track_caller]
    pub fn verification_started(&mut self, mode: VerificationMode) -> Result<(), ProgressError> {
        self.validate_state()?;
        self.reset_ongoing_stubbing();
        let localized = Localized::new(mode);
        debug!(mode = %mode, location = %localized.location(), "Verification started");
        self.verification_mode = Some(localized);
        Ok(())
    }

    /// Take the pending verification mode. A second pull returns `None`.
    pub fn pull_verification_mode(&mut self) -> Option<VerificationMode> {
        self.verification_mode
            .take()
            .map(|localized| localized.into_parts().0)
    }

    /// Open a stub configuration after running the full validation gate.
    #[track_caller]
    pub fn stubbing_started(&mut self) -> Result<(), ProgressError> {
        self.validate_state()?;
        let location = Location::capture();
        debug!(location = %location, "Stubbing started");
        self.stubbing_in_progress = Some(location);
        Ok(())
    }

    /// Close the open stub configuration. Calling it with none open is a no-op.
    pub fn stubbing_completed(&mut self) {
        if self.stubbing_in_progress.take().is_some() {
            debug!("Stubbing completed");
        }
    }

    /// Assert that no operation is left half-finished.
    ///
    /// Whatever check fires clears its own pending state before the error is
    /// returned, so the same misuse is reported once.
    pub fn validate_state(&mut self) -> Result<(), ProgressError> {
        self.validate_most_stuff()?;

        if let Some(location) = self.stubbing_in_progress.take() {
            warn!(location = %location, "Unfinished stubbing cleared");
            return Err(ProgressError::UnfinishedStubbing { location });
        }

        Ok(())
    }

    // Everything except the open-stubbing check.
    fn validate_most_stuff(&mut self) -> Result<(), ProgressError> {
        self.configuration.validate()?;

        if let Some(pending) = self.verification_mode.take() {
            let (mode, location) = pending.into_parts();
            warn!(mode = %mode, location = %location, "Unfinished verification cleared");
            return Err(ProgressError::UnfinishedVerification { location });
        }

        self.matcher_storage.validate_state()?;
        Ok(())
    }

    /// Record that a mock was created.
    ///
    /// Notifies the listener first, then checks for a dangling verification
    /// or leftover matchers. An open stub configuration is allowed.
    pub fn mock_created(
        &mut self,
        mock: &dyn Any,
        mocked_type: &MockedType,
    ) -> Result<(), ProgressError> {
        if let Some(listener) = self.listener.as_ref().and_then(Weak::upgrade) {
            listener.mock_created(mock, mocked_type);
        }
        debug!(mocked_type = %mocked_type, "Mock created");
        self.validate_most_stuff()
    }

    /// Register the listener, replacing any previous one.
    ///
    /// Only a weak reference is kept; the caller owns the listener.
    pub fn set_listener(&mut self, listener: &Arc<dyn SessionListener>) {
        self.listener = Some(Arc::downgrade(listener));
    }

    /// Drop the registered listener, if any.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Clear the open stub, the pending verification and all matchers.
    ///
    /// Never fails. The stubbing handoff is left alone; use
    /// [`reset_ongoing_stubbing`](Self::reset_ongoing_stubbing) for that.
    pub fn reset(&mut self) {
        self.stubbing_in_progress = None;
        self.verification_mode = None;
        self.matcher_storage.reset();
        debug!("Mocking progress reset");
    }

    /// Get the matcher storage (pure)
    pub fn matcher_storage(&self) -> &M {
        &self.matcher_storage
    }

    /// Get the matcher storage for reporting and pulling matchers.
    pub fn matcher_storage_mut(&mut self) -> &mut M {
        &mut self.matcher_storage
    }

    /// Check if a stub configuration is open (pure)
    pub fn is_stubbing_in_progress(&self) -> bool {
        self.stubbing_in_progress.is_some()
    }

    /// Check if a verification mode is waiting to be pulled (pure)
    pub fn has_pending_verification(&self) -> bool {
        self.verification_mode.is_some()
    }

    /// Check if a stubbing handoff is waiting to be pulled (pure)
    pub fn has_ongoing_stubbing(&self) -> bool {
        self.ongoing_stubbing.is_some()
    }

    /// Copy the pending fields for diagnostics.
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            taken_at: Utc::now(),
            ongoing_stubbing: self.ongoing_stubbing.clone(),
            verification_mode: self.verification_mode.clone(),
            stubbing_in_progress: self.stubbing_in_progress.clone(),
        }
    }
}

struct Pending<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for Pending<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("none"),
        }
    }
}

impl<M: MatcherStorage> fmt::Display for MockingProgress<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ongoing_stubbing: {}, verification_mode: {}, stubbing_in_progress: {}",
            Pending(&self.ongoing_stubbing),
            Pending(&self.verification_mode),
            Pending(&self.stubbing_in_progress),
        )
    }
}

impl<M: MatcherStorage> fmt::Debug for MockingProgress<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockingProgress")
            .field("ongoing_stubbing", &self.ongoing_stubbing)
            .field("verification_mode", &self.verification_mode)
            .field("stubbing_in_progress", &self.stubbing_in_progress)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}
