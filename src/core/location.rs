//! Call-site capture for diagnostics.
//!
//! A [`Location`] remembers where in test code an operation began, so that an
//! error raised much later (for example an unfinished stubbing detected by the
//! next mock interaction) can point back at the line that opened it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source position captured when an operation starts.
///
/// Capture goes through `#[track_caller]`, so the recorded position is the
/// first caller in the chain that is not itself annotated. Public entry
/// points of this crate carry the attribute, which makes the location land
/// in the test author's code rather than inside the library.
///
/// # Example
///
/// ```rust
/// use mockguard::core::Location;
///
/// let here = Location::capture();
/// assert!(here.file().ends_with(".rs"));
/// assert!(here.line() > 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    file: String,
    line: u32,
    column: u32,
    captured_at: DateTime<Utc>,
}

impl Location {
    /// Capture the caller's source position.
    #[track_caller]
    pub fn capture() -> Self {
        let caller = std::panic::Location::caller();
        Self {
            file: caller.file().to_string(),
            line: caller.line(),
            column: caller.column(),
            captured_at: Utc::now(),
        }
    }

    /// Source file of the call site.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Line of the call site, starting at 1.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the call site, starting at 1.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// When the position was captured.
    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn capture_through_wrapper() -> Location {
        Location::capture()
    }

    #[test]
    fn capture_records_this_file() {
        let location = Location::capture();
        assert!(location.file().ends_with("location.rs"));
        assert!(location.line() > 0);
        assert!(location.column() > 0);
    }

    #[test]
    fn capture_follows_track_caller_chain() {
        let expected_line = line!() + 1;
        let location = capture_through_wrapper();
        assert_eq!(location.line(), expected_line);
    }

    #[test]
    fn distinct_call_sites_differ() {
        let first = Location::capture();
        let second = Location::capture();
        assert_ne!(first.line(), second.line());
    }

    #[test]
    fn display_renders_file_line_column() {
        let location = Location::capture();
        let rendered = location.to_string();
        assert_eq!(
            rendered,
            format!("{}:{}:{}", location.file(), location.line(), location.column())
        );
    }

    #[test]
    fn location_serializes_correctly() {
        let location = Location::capture();
        let json = serde_json::to_string(&location).unwrap();
        let deserialized: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(location, deserialized);
    }
}
