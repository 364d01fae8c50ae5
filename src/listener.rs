//! Listener notified when mocks are created.

use crate::core::MockedType;
use std::any::Any;

/// Observer of mock lifecycle events.
///
/// Every method has a no-op default, so an implementor only overrides the
/// capabilities it cares about. The progress state machine holds listeners
/// through a `Weak` reference and never keeps one alive.
///
/// # Example
///
/// ```rust
/// use mockguard::core::MockedType;
/// use mockguard::listener::SessionListener;
/// use std::any::Any;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// #[derive(Default)]
/// struct CountingListener {
///     created: AtomicUsize,
/// }
///
/// impl SessionListener for CountingListener {
///     fn mock_created(&self, _mock: &dyn Any, _mocked_type: &MockedType) {
///         self.created.fetch_add(1, Ordering::SeqCst);
///     }
/// }
/// ```
pub trait SessionListener: Send + Sync {
    /// Called when a mock of `mocked_type` is first created.
    fn mock_created(&self, _mock: &dyn Any, _mocked_type: &MockedType) {}
}
