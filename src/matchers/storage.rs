//! Storage for matchers reported ahead of the call they describe.

use super::error::MatcherError;
use super::matcher::{And, Not, Or, SharedMatcher};
use crate::core::{Localized, Location};
use std::sync::Arc;
use tracing::{debug, warn};

/// A matcher tagged with the call site that reported it.
pub type LocalizedMatcher = Localized<SharedMatcher>;

/// Contract the progress state machine needs from matcher storage.
pub trait MatcherStorage {
    /// Drop every pending matcher.
    fn reset(&mut self);

    /// Fail if matchers were reported and never consumed.
    ///
    /// The pending matchers are cleared before the error is returned.
    fn validate_state(&mut self) -> Result<(), MatcherError>;
}

/// Stack of matchers reported since the last consumption point.
///
/// Matcher builder calls push onto the stack while the arguments of the
/// real call are being evaluated; the stubbing or verification machinery
/// then pulls the whole stack in one go.
///
/// # Example
///
/// ```rust
/// use mockguard::matchers::{matcher_fn, ArgumentMatcherStorage, MatcherStorage};
///
/// let mut storage = ArgumentMatcherStorage::new();
/// storage.report_matcher(matcher_fn("positive()", |n: &i32| *n > 0));
///
/// let pulled = storage.pull_localized_matchers();
/// assert_eq!(pulled.len(), 1);
/// assert!(storage.validate_state().is_ok());
/// ```
#[derive(Debug, Default)]
pub struct ArgumentMatcherStorage {
    matcher_stack: Vec<LocalizedMatcher>,
}

impl ArgumentMatcherStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a matcher, remembering where it was reported.
    #[track_caller]
    pub fn report_matcher(&mut self, matcher: SharedMatcher) {
        let localized = Localized::new(matcher);
        debug!(
            matcher = %localized.value().describe(),
            location = %localized.location(),
            "Argument matcher reported"
        );
        self.matcher_stack.push(localized);
    }

    /// Take every pending matcher, leaving the stack empty.
    pub fn pull_localized_matchers(&mut self) -> Vec<LocalizedMatcher> {
        std::mem::take(&mut self.matcher_stack)
    }

    /// Replace the last two matchers with their conjunction.
    #[track_caller]
    pub fn report_and(&mut self) -> Result<(), MatcherError> {
        let operands = self.pop_last_matchers("and", 2)?;
        self.report_matcher(Arc::new(And(operands)));
        Ok(())
    }

    /// Replace the last two matchers with their disjunction.
    #[track_caller]
    pub fn report_or(&mut self) -> Result<(), MatcherError> {
        let operands = self.pop_last_matchers("or", 2)?;
        self.report_matcher(Arc::new(Or(operands)));
        Ok(())
    }

    /// Replace the last matcher with its negation.
    #[track_caller]
    pub fn report_not(&mut self) -> Result<(), MatcherError> {
        let mut operands = self.pop_last_matchers("not", 1)?;
        if let Some(operand) = operands.pop() {
            self.report_matcher(Arc::new(Not(operand)));
        }
        Ok(())
    }

    /// Number of pending matchers.
    pub fn len(&self) -> usize {
        self.matcher_stack.len()
    }

    /// Check if no matcher is pending.
    pub fn is_empty(&self) -> bool {
        self.matcher_stack.is_empty()
    }

    /// Locations of the pending matchers, oldest first.
    pub fn pending_locations(&self) -> Vec<Location> {
        self.matcher_stack
            .iter()
            .map(|m| m.location().clone())
            .collect()
    }

    // Misuse clears the stack so the same mistake is reported once.
    fn pop_last_matchers(
        &mut self,
        operator: &'static str,
        count: usize,
    ) -> Result<Vec<SharedMatcher>, MatcherError> {
        let found = self.matcher_stack.len();
        if found < count {
            self.matcher_stack.clear();
            warn!(operator, expected = count, found, "Combinator used without enough matchers");
            return Err(MatcherError::InvalidUseOfMatchers {
                operator,
                expected: count,
                found,
            });
        }

        Ok(self
            .matcher_stack
            .split_off(found - count)
            .into_iter()
            .map(|m| m.into_parts().0)
            .collect())
    }
}

impl MatcherStorage for ArgumentMatcherStorage {
    fn reset(&mut self) {
        self.matcher_stack.clear();
    }

    fn validate_state(&mut self) -> Result<(), MatcherError> {
        if self.matcher_stack.is_empty() {
            return Ok(());
        }

        let locations: Vec<Location> = self
            .pull_localized_matchers()
            .into_iter()
            .map(|m| m.into_parts().1)
            .collect();
        warn!(count = locations.len(), "Unconsumed argument matchers cleared");
        Err(MatcherError::MisplacedMatchers { locations })
    }
}
