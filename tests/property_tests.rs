//! Property-based tests for the mocking-progress state machine.
//!
//! Random operation sequences are run against both the real state machine
//! and a small reference model; every observable result must agree.

use mockguard::config::{ConfigurationError, ConfigurationValidator};
use mockguard::core::VerificationMode;
use mockguard::matchers::matcher_fn;
use mockguard::progress::{MockingProgress, ProgressError};
use mockguard::stubbing::OngoingStubbing;
use proptest::prelude::*;
use std::sync::Arc;

struct RejectingConfiguration;

impl ConfigurationValidator for RejectingConfiguration {
    fn validate(&self) -> Result<(), ConfigurationError> {
        Err(ConfigurationError::Parse("unreadable".to_string()))
    }
}

fn progress_with(configuration_broken: bool) -> MockingProgress {
    if configuration_broken {
        MockingProgress::new().with_configuration(Arc::new(RejectingConfiguration))
    } else {
        MockingProgress::new()
    }
}

#[derive(Clone, Debug)]
enum Op {
    ReportStubbing(u8),
    PullStubbing,
    StubbingStarted,
    StubbingCompleted,
    VerificationStarted(VerificationMode),
    PullVerificationMode,
    ReportMatcher,
    MockCreated,
    ValidateState,
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Failure {
    UnfinishedStubbing,
    UnfinishedVerification,
    InvalidMatcherUsage,
    Configuration,
}

fn classify(result: Result<(), ProgressError>) -> Result<(), Failure> {
    result.map_err(|e| match e {
        ProgressError::UnfinishedStubbing { .. } => Failure::UnfinishedStubbing,
        ProgressError::UnfinishedVerification { .. } => Failure::UnfinishedVerification,
        ProgressError::InvalidMatcherUsage(_) => Failure::InvalidMatcherUsage,
        ProgressError::Configuration(_) => Failure::Configuration,
    })
}

#[derive(Default)]
struct Model {
    configuration_broken: bool,
    handoff: Option<String>,
    stubbing_open: bool,
    mode: Option<VerificationMode>,
    matchers: usize,
}

impl Model {
    fn validate_most(&mut self) -> Result<(), Failure> {
        if self.configuration_broken {
            return Err(Failure::Configuration);
        }
        if self.mode.take().is_some() {
            return Err(Failure::UnfinishedVerification);
        }
        if self.matchers > 0 {
            self.matchers = 0;
            return Err(Failure::InvalidMatcherUsage);
        }
        Ok(())
    }

    fn validate(&mut self) -> Result<(), Failure> {
        self.validate_most()?;
        if self.stubbing_open {
            self.stubbing_open = false;
            return Err(Failure::UnfinishedStubbing);
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
enum Observed {
    Unit,
    Outcome(Result<(), Failure>),
    Stubbing(Option<String>),
    Mode(Option<VerificationMode>),
}

struct Mock;

fn apply(progress: &mut MockingProgress, op: &Op) -> Observed {
    match op {
        Op::ReportStubbing(n) => {
            progress.report_ongoing_stubbing(OngoingStubbing::new(format!("call({n})")));
            Observed::Unit
        }
        Op::PullStubbing => Observed::Stubbing(
            progress
                .pull_ongoing_stubbing()
                .map(|s| s.invocation().to_string()),
        ),
        Op::StubbingStarted => Observed::Outcome(classify(progress.stubbing_started())),
        Op::StubbingCompleted => {
            progress.stubbing_completed();
            Observed::Unit
        }
        Op::VerificationStarted(mode) => {
            Observed::Outcome(classify(progress.verification_started(*mode)))
        }
        Op::PullVerificationMode => Observed::Mode(progress.pull_verification_mode()),
        Op::ReportMatcher => {
            progress
                .matcher_storage_mut()
                .report_matcher(matcher_fn("any_i32()", |_: &i32| true));
            Observed::Unit
        }
        Op::MockCreated => Observed::Outcome(classify(
            progress.mock_created(&Mock, &mockguard::MockedType::of::<Mock>()),
        )),
        Op::ValidateState => Observed::Outcome(classify(progress.validate_state())),
        Op::Reset => {
            progress.reset();
            Observed::Unit
        }
    }
}

fn expect(model: &mut Model, op: &Op) -> Observed {
    match op {
        Op::ReportStubbing(n) => {
            model.handoff = Some(format!("call({n})"));
            Observed::Unit
        }
        Op::PullStubbing => Observed::Stubbing(model.handoff.take()),
        Op::StubbingStarted => Observed::Outcome(model.validate().map(|_| {
            model.stubbing_open = true;
        })),
        Op::StubbingCompleted => {
            model.stubbing_open = false;
            Observed::Unit
        }
        Op::VerificationStarted(mode) => Observed::Outcome(model.validate().map(|_| {
            model.handoff = None;
            model.mode = Some(*mode);
        })),
        Op::PullVerificationMode => Observed::Mode(model.mode.take()),
        Op::ReportMatcher => {
            model.matchers += 1;
            Observed::Unit
        }
        Op::MockCreated => Observed::Outcome(model.validate_most()),
        Op::ValidateState => Observed::Outcome(model.validate()),
        Op::Reset => {
            model.stubbing_open = false;
            model.mode = None;
            model.matchers = 0;
            Observed::Unit
        }
    }
}

fn arbitrary_mode() -> impl Strategy<Value = VerificationMode> {
    prop_oneof![
        (0..4usize).prop_map(VerificationMode::Times),
        (0..4usize).prop_map(VerificationMode::AtLeast),
        (0..4usize).prop_map(VerificationMode::AtMost),
        Just(VerificationMode::Only),
    ]
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::ReportStubbing),
        Just(Op::PullStubbing),
        Just(Op::StubbingStarted),
        Just(Op::StubbingCompleted),
        arbitrary_mode().prop_map(Op::VerificationStarted),
        Just(Op::PullVerificationMode),
        Just(Op::ReportMatcher),
        Just(Op::MockCreated),
        Just(Op::ValidateState),
        Just(Op::Reset),
    ]
}

proptest! {
    #[test]
    fn progress_agrees_with_model(
        configuration_broken in prop::bool::weighted(0.2),
        ops in prop::collection::vec(arbitrary_op(), 0..40)
    ) {
        let mut progress = progress_with(configuration_broken);
        let mut model = Model {
            configuration_broken,
            ..Model::default()
        };

        for op in &ops {
            let actual = apply(&mut progress, op);
            let expected = expect(&mut model, op);
            prop_assert_eq!(actual, expected, "diverged on {:?}", op);
        }
    }

    #[test]
    fn second_pull_after_push_is_empty(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        n in any::<u8>()
    ) {
        let mut progress = MockingProgress::new();
        for op in &ops {
            apply(&mut progress, op);
        }

        progress.report_ongoing_stubbing(OngoingStubbing::new(format!("call({n})")));
        let first = progress.pull_ongoing_stubbing().map(|s| s.invocation().to_string());
        prop_assert_eq!(first, Some(format!("call({})", n)));
        prop_assert!(progress.pull_ongoing_stubbing().is_none());
    }

    #[test]
    fn reset_always_leads_to_valid_state(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut progress = MockingProgress::new();
        for op in &ops {
            apply(&mut progress, op);
        }

        progress.reset();
        progress.reset();

        prop_assert!(progress.validate_state().is_ok());
    }

    #[test]
    fn any_failure_leaves_a_clean_gate(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut progress = MockingProgress::new();
        for op in &ops {
            apply(&mut progress, op);
        }

        // Each check clears what it reports, so at most three failures can
        // occur before the gate passes.
        let mut failures = 0;
        while progress.validate_state().is_err() {
            failures += 1;
            prop_assert!(failures <= 3);
        }
    }

    #[test]
    fn broken_configuration_fails_every_gate_without_touching_state(
        ops in prop::collection::vec(arbitrary_op(), 0..40)
    ) {
        let mut progress = progress_with(true);
        for op in &ops {
            apply(&mut progress, op);
        }
        let before = progress.snapshot();

        prop_assert_eq!(classify(progress.validate_state()), Err(Failure::Configuration));
        prop_assert_eq!(
            classify(progress.mock_created(&Mock, &mockguard::MockedType::of::<Mock>())),
            Err(Failure::Configuration)
        );

        let after = progress.snapshot();
        prop_assert_eq!(before.ongoing_stubbing, after.ongoing_stubbing);
        prop_assert_eq!(before.verification_mode, after.verification_mode);
        prop_assert_eq!(before.stubbing_in_progress, after.stubbing_in_progress);
    }

    #[test]
    fn start_after_start_never_chains(first in arbitrary_mode(), second in arbitrary_mode()) {
        let mut progress = MockingProgress::new();
        progress.verification_started(first).unwrap();

        let result = progress.verification_started(second);

        prop_assert!(
            matches!(result, Err(ProgressError::UnfinishedVerification { .. })),
            "second start should fail"
        );
        prop_assert_eq!(progress.pull_verification_mode(), None);
    }
}
