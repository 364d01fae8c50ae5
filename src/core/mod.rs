//! Core value types shared by the progress state machine.
//!
//! This module contains the plain data the state machine moves around:
//! - Call-site capture via [`Location`]
//! - Values tagged with their call site via [`Localized`]
//! - Verification modes
//! - Descriptors of mocked types
//!
//! Nothing in here holds mutable state.

mod localized;
mod location;
mod mocked_type;
mod verification;

pub use localized::Localized;
pub use location::Location;
pub use mocked_type::MockedType;
pub use verification::VerificationMode;
