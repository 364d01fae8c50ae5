//! Serializable view of the pending progress fields, for debugging.

use super::error::SnapshotError;
use crate::core::{Localized, Location, VerificationMode};
use crate::stubbing::OngoingStubbing;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time copy of what a progress state machine has pending.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Stubbing handoff not yet pulled
    pub ongoing_stubbing: Option<OngoingStubbing>,

    /// Verification mode not yet pulled, with where it was set
    pub verification_mode: Option<Localized<VerificationMode>>,

    /// Where the open stub configuration started
    pub stubbing_in_progress: Option<Location>,
}

impl ProgressSnapshot {
    /// True when nothing is pending.
    pub fn is_clean(&self) -> bool {
        self.ongoing_stubbing.is_none()
            && self.verification_mode.is_none()
            && self.stubbing_in_progress.is_none()
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    /// Serialize to bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }
}
