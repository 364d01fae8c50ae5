//! Global mocking configuration and its validation hook.
//!
//! The progress state machine calls [`ConfigurationValidator::validate`] at
//! the start of every validation pass and propagates failures unchanged.
//! [`GlobalConfiguration`] is the bundled validator: it loads a
//! [`MockingConfiguration`] from JSON and, rather than failing at load time,
//! reports a broken configuration the first time a mock interaction asks.
//!
//! Rule checks use Stillwater's `Validation` so that every problem is
//! reported in one pass.
//!
//! # Example
//!
//! ```rust
//! use mockguard::config::{ConfigurationValidator, GlobalConfiguration};
//!
//! let config = GlobalConfiguration::from_json(r#"{ "strictness": "warn" }"#);
//! assert!(config.validate().is_ok());
//!
//! let broken = GlobalConfiguration::from_json("{ not json");
//! assert!(broken.validate().is_err());
//! ```

pub mod error;

pub use error::ConfigurationError;

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Upper bound for `verification_timeout_ms` (one hour).
pub const MAX_VERIFICATION_TIMEOUT_MS: u64 = 60 * 60 * 1000;

/// Validation hook invoked before every progress validation pass.
pub trait ConfigurationValidator: Send + Sync {
    fn validate(&self) -> Result<(), ConfigurationError>;
}

/// Answer used for calls on a mock that were never stubbed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultAnswer {
    /// Return the type's default value
    #[default]
    ReturnsDefaults,

    /// Return values that fail loudly when used
    ReturnsSmartNulls,

    /// Delegate to the real implementation
    CallsRealMethods,
}

/// How strictly unused or mismatched stubbings are treated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    #[default]
    Lenient,
    Warn,
    StrictStubs,
}

/// Settings shared by every mock in a process.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MockingConfiguration {
    pub default_answer: DefaultAnswer,
    pub strictness: Strictness,
    pub verification_timeout_ms: Option<u64>,
}

type RuleCheck = Validation<(), NonEmptyVec<String>>;

impl MockingConfiguration {
    /// Check every rule, accumulating ALL problems.
    pub fn check(&self) -> Result<(), ConfigurationError> {
        let checks: Vec<RuleCheck> = vec![
            self.check_timeout_positive(),
            self.check_timeout_bounded(),
            self.check_strictness_compatible(),
        ];

        match Validation::all_vec(checks).map(|_| ()) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(problems) => Err(ConfigurationError::Invalid {
                problems: problems.iter().cloned().collect(),
            }),
        }
    }

    fn check_timeout_positive(&self) -> RuleCheck {
        match self.verification_timeout_ms {
            Some(0) => Validation::fail("verification_timeout_ms must be greater than zero".to_string()),
            _ => Validation::success(()),
        }
    }

    fn check_timeout_bounded(&self) -> RuleCheck {
        match self.verification_timeout_ms {
            Some(ms) if ms > MAX_VERIFICATION_TIMEOUT_MS => Validation::fail(format!(
                "verification_timeout_ms must not exceed {MAX_VERIFICATION_TIMEOUT_MS} (got {ms})"
            )),
            _ => Validation::success(()),
        }
    }

    fn check_strictness_compatible(&self) -> RuleCheck {
        if self.strictness == Strictness::StrictStubs
            && self.default_answer == DefaultAnswer::CallsRealMethods
        {
            Validation::fail(
                "strict_stubs cannot be combined with the calls_real_methods default answer"
                    .to_string(),
            )
        } else {
            Validation::success(())
        }
    }
}

/// Process-wide configuration as loaded from its source.
#[derive(Clone, Debug, PartialEq)]
pub struct GlobalConfiguration {
    loaded: Result<MockingConfiguration, ConfigurationError>,
}

impl GlobalConfiguration {
    pub fn new(configuration: MockingConfiguration) -> Self {
        Self {
            loaded: Ok(configuration),
        }
    }

    /// Load from JSON. Parse failures are kept and surface from `validate`.
    pub fn from_json(json: &str) -> Self {
        let loaded = serde_json::from_str::<MockingConfiguration>(json)
            .map_err(|e| ConfigurationError::Parse(e.to_string()));
        debug!(ok = loaded.is_ok(), "Mocking configuration loaded");
        Self { loaded }
    }

    /// The loaded configuration, if it parsed.
    pub fn configuration(&self) -> Option<&MockingConfiguration> {
        self.loaded.as_ref().ok()
    }
}

impl Default for GlobalConfiguration {
    fn default() -> Self {
        Self::new(MockingConfiguration::default())
    }
}

impl ConfigurationValidator for GlobalConfiguration {
    fn validate(&self) -> Result<(), ConfigurationError> {
        match &self.loaded {
            Ok(configuration) => configuration.check(),
            Err(error) => Err(error.clone()),
        }
    }
}
