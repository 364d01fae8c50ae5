//! Stubbing handoff and answer callbacks.
//!
//! These are the values that flow through the progress state machine's
//! pending-stubbing slot; how answers are dispatched to intercepted calls
//! lives outside this crate.

pub mod answer;
pub mod ongoing;

pub use answer::{
    Answer0, Answer1, Answer2, Answer3, Answer4, Answer5, AnswerError, AnswerResult, VoidAnswer0,
    VoidAnswer1, VoidAnswer2, VoidAnswer3, VoidAnswer4, VoidAnswer5,
};
pub use ongoing::OngoingStubbing;
