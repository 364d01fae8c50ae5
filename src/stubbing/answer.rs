//! Answer callbacks attached to stubbed calls.
//!
//! An answer receives the captured call arguments and either produces the
//! value the mocked call returns, returns nothing, or fails. A failure is
//! handed back verbatim to whoever called the mocked operation.
//!
//! The family is generated for zero to five arguments. Every trait has a
//! blanket implementation for plain closures with the matching signature.
//!
//! # Example
//!
//! ```rust
//! use mockguard::stubbing::{Answer2, AnswerResult, VoidAnswer2};
//!
//! let format = |template: &str, count: i32| -> AnswerResult<String> {
//!     Ok(template.replace("{}", &count.to_string()))
//! };
//! assert_eq!(Answer2::answer(&format, "boom {}", 3).unwrap(), "boom 3");
//!
//! let explode = |template: &str, count: i32| -> AnswerResult<()> {
//!     Err(template.replace("{}", &count.to_string()).into())
//! };
//! let error = VoidAnswer2::answer(&explode, "boom {}", 3).unwrap_err();
//! assert_eq!(error.to_string(), "boom 3");
//! ```

/// Error produced by an answer, rethrown unchanged to the caller.
pub type AnswerError = Box<dyn std::error::Error + Send + Sync>;

/// Outcome of running an answer.
pub type AnswerResult<R> = Result<R, AnswerError>;

macro_rules! answer_traits {
    (
        $(
            $count:literal: $answer:ident, $void:ident => ( $( $arg:ident : $ty:ident ),* )
        );* $(;)?
    ) => {
        $(
            #[doc = concat!("Answer for a call with ", $count, " argument(s) that returns a value.")]
            pub trait $answer<$( $ty, )* R> {
                fn answer(&self, $( $arg: $ty ),*) -> AnswerResult<R>;
            }

            impl<F, $( $ty, )* R> $answer<$( $ty, )* R> for F
            where
                F: Fn($( $ty ),*) -> AnswerResult<R>,
            {
                fn answer(&self, $( $arg: $ty ),*) -> AnswerResult<R> {
                    self($( $arg ),*)
                }
            }

            #[doc = concat!("Answer for a call with ", $count, " argument(s) that returns nothing.")]
            pub trait $void<$( $ty ),*> {
                fn answer(&self, $( $arg: $ty ),*) -> AnswerResult<()>;
            }

            impl<F, $( $ty ),*> $void<$( $ty ),*> for F
            where
                F: Fn($( $ty ),*) -> AnswerResult<()>,
            {
                fn answer(&self, $( $arg: $ty ),*) -> AnswerResult<()> {
                    self($( $arg ),*)
                }
            }
        )*
    };
}

answer_traits! {
    "0": Answer0, VoidAnswer0 => ();
    "1": Answer1, VoidAnswer1 => (argument0: A0);
    "2": Answer2, VoidAnswer2 => (argument0: A0, argument1: A1);
    "3": Answer3, VoidAnswer3 => (argument0: A0, argument1: A1, argument2: A2);
    "4": Answer4, VoidAnswer4 => (argument0: A0, argument1: A1, argument2: A2, argument3: A3);
    "5": Answer5, VoidAnswer5 => (
        argument0: A0,
        argument1: A1,
        argument2: A2,
        argument3: A3,
        argument4: A4
    );
}
