//! Argument matcher trait and the built-in matchers.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Predicate standing in for a literal argument.
///
/// Arguments arrive type-erased; a matcher for the wrong type simply does
/// not match.
pub trait ArgumentMatcher: fmt::Debug + Send + Sync {
    /// Check whether `argument` satisfies this matcher (pure).
    fn matches(&self, argument: &dyn Any) -> bool;

    /// Short human-readable form, e.g. `any()` or `not(eq(3))`.
    fn describe(&self) -> String;
}

/// Shared handle to a matcher.
pub type SharedMatcher = Arc<dyn ArgumentMatcher>;

/// Matcher built from a typed closure.
pub struct FnMatcher<T, F> {
    description: String,
    predicate: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T, F> fmt::Debug for FnMatcher<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMatcher")
            .field("description", &self.description)
            .finish()
    }
}

impl<T, F> ArgumentMatcher for FnMatcher<T, F>
where
    T: 'static,
    F: Fn(&T) -> bool + Send + Sync,
{
    fn matches(&self, argument: &dyn Any) -> bool {
        argument
            .downcast_ref::<T>()
            .is_some_and(|value| (self.predicate)(value))
    }

    fn describe(&self) -> String {
        self.description.clone()
    }
}

/// Build a matcher from a description and a typed predicate.
///
/// # Example
///
/// ```rust
/// use mockguard::matchers::{matcher_fn, ArgumentMatcher};
///
/// let positive = matcher_fn("positive()", |n: &i32| *n > 0);
/// assert!(positive.matches(&5_i32));
/// assert!(!positive.matches(&-1_i32));
/// assert!(!positive.matches(&"five"));
/// ```
pub fn matcher_fn<T, F>(description: impl Into<String>, predicate: F) -> SharedMatcher
where
    T: 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Arc::new(FnMatcher {
        description: description.into(),
        predicate,
        _phantom: PhantomData,
    })
}

/// Matches every argument.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyArgument;

impl ArgumentMatcher for AnyArgument {
    fn matches(&self, _argument: &dyn Any) -> bool {
        true
    }

    fn describe(&self) -> String {
        "any()".to_string()
    }
}

/// Matches when every sub-matcher matches.
#[derive(Debug, Clone)]
pub struct And(pub Vec<SharedMatcher>);

impl ArgumentMatcher for And {
    fn matches(&self, argument: &dyn Any) -> bool {
        self.0.iter().all(|m| m.matches(argument))
    }

    fn describe(&self) -> String {
        format!("and({})", join_descriptions(&self.0))
    }
}

/// Matches when any sub-matcher matches.
#[derive(Debug, Clone)]
pub struct Or(pub Vec<SharedMatcher>);

impl ArgumentMatcher for Or {
    fn matches(&self, argument: &dyn Any) -> bool {
        self.0.iter().any(|m| m.matches(argument))
    }

    fn describe(&self) -> String {
        format!("or({})", join_descriptions(&self.0))
    }
}

/// Inverts a matcher.
#[derive(Debug, Clone)]
pub struct Not(pub SharedMatcher);

impl ArgumentMatcher for Not {
    fn matches(&self, argument: &dyn Any) -> bool {
        !self.0.matches(argument)
    }

    fn describe(&self) -> String {
        format!("not({})", self.0.describe())
    }
}

fn join_descriptions(matchers: &[SharedMatcher]) -> String {
    matchers
        .iter()
        .map(|m| m.describe())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fn_matcher_rejects_other_types() {
        let even = matcher_fn("even()", |n: &u64| n % 2 == 0);
        assert!(even.matches(&4_u64));
        assert!(!even.matches(&3_u64));
        assert!(!even.matches(&4_i32));
    }

    #[test]
    fn any_argument_matches_everything() {
        assert!(AnyArgument.matches(&1_u8));
        assert!(AnyArgument.matches(&"text"));
        assert_eq!(AnyArgument.describe(), "any()");
    }

    #[test]
    fn combinators_compose() {
        let positive = matcher_fn("positive()", |n: &i32| *n > 0);
        let small = matcher_fn("small()", |n: &i32| *n < 10);

        let both = And(vec![positive.clone(), small.clone()]);
        assert!(both.matches(&5_i32));
        assert!(!both.matches(&50_i32));

        let either = Or(vec![positive.clone(), small]);
        assert!(either.matches(&-5_i32));

        let negated = Not(positive);
        assert!(negated.matches(&-1_i32));
        assert!(!negated.matches(&1_i32));
    }

    #[test]
    fn descriptions_nest() {
        let positive = matcher_fn("positive()", |n: &i32| *n > 0);
        let composite = Not(Arc::new(And(vec![positive, Arc::new(AnyArgument)])));
        assert_eq!(composite.describe(), "not(and(positive(), any()))");
    }
}
