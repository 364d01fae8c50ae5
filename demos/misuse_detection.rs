//! Misuse Detection
//!
//! This example walks through the misuse sequences the progress guard catches.
//!
//! Key concepts:
//! - Stubbing must be completed before anything else happens
//! - A verification mode must be consumed by the call that follows it
//! - Argument matchers only belong inside a stubbed or verified call
//! - Every misuse is reported once and leaves a clean state behind
//!
//! Run with: cargo run --example misuse_detection

use mockguard::matchers::matcher_fn;
use mockguard::{MockedType, MockingSession, OngoingStubbing, VerificationMode};

struct PaymentGateway;

fn main() {
    println!("=== Misuse Detection Example ===\n");

    let mut session = MockingSession::start();
    session
        .progress()
        .mock_created(&PaymentGateway, &MockedType::of::<PaymentGateway>())
        .expect("fresh session accepts a new mock");

    // Example 1: correct stubbing
    println!("Example 1: when(gateway.charge(100)).thenReturn(Ok)");
    let progress = session.progress();
    progress.stubbing_started().expect("nothing pending yet");
    progress.report_ongoing_stubbing(OngoingStubbing::new("PaymentGateway::charge(100)"));
    if let Some(handoff) = progress.pull_ongoing_stubbing() {
        println!("  configured answer for {}", handoff.invocation());
    }
    progress.stubbing_completed();
    println!("  state: {progress}\n");

    // Example 2: stubbing left open
    println!("Example 2: when(..) without thenReturn(..)");
    progress.stubbing_started().expect("previous stubbing completed");
    match progress.stubbing_started() {
        Ok(()) => println!("  unexpected success"),
        Err(e) => println!("  rejected: {e}"),
    }
    println!("  state after failure: {progress}\n");

    // Example 3: verification without a call
    println!("Example 3: verify(gateway) followed by another verify(..)");
    progress
        .verification_started(VerificationMode::times(1))
        .expect("nothing pending");
    match progress.verification_started(VerificationMode::never()) {
        Ok(()) => println!("  unexpected success"),
        Err(e) => println!("  rejected: {e}"),
    }
    println!();

    // Example 4: matcher outside of a call
    println!("Example 4: any() written outside of a stubbed call");
    progress
        .matcher_storage_mut()
        .report_matcher(matcher_fn("any_amount()", |_: &u64| true));
    match progress.validate_state() {
        Ok(()) => println!("  unexpected success"),
        Err(e) => println!("  rejected: {e}"),
    }
    println!();

    match session.finish() {
        Ok(report) => println!(
            "Session finished cleanly: {} mock(s) in {:?}",
            report.mocks_created.len(),
            report.duration()
        ),
        Err(e) => println!("Session finished with misuse: {e}"),
    }
}
