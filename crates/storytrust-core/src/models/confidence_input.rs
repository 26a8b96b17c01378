use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::SINGLE_SOURCE_MAX;
use crate::errors::{StoryTrustError, StoryTrustResult};

/// Aggregate signals the confidence engine consumes, derived fresh from a
/// story's source ledger on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConfidenceInput {
    /// Total observations (expected ≥ 1).
    pub source_count: u32,
    /// Observations from verified outlets (expected ≤ `source_count`).
    pub verified_source_count: u32,
    /// Any observation is primary reporting.
    #[serde(default)]
    pub has_primary_reporting: bool,
    /// Any two observations have been flagged as materially conflicting.
    #[serde(default)]
    pub has_contradictions: bool,
    /// Minutes since the first observation. `None` means unknown or not
    /// time-sensitive and behaves like an infinite age.
    #[serde(default)]
    pub age_minutes: Option<f64>,
    /// Headline/summary has not changed materially across recent updates.
    #[serde(default = "default_stable_narrative")]
    pub is_stable_narrative: bool,
}

fn default_stable_narrative() -> bool {
    true
}

impl ConfidenceInput {
    /// Input with the given counts and every other signal at its default.
    pub fn new(source_count: u32, verified_source_count: u32) -> Self {
        Self {
            source_count,
            verified_source_count,
            has_primary_reporting: false,
            has_contradictions: false,
            age_minutes: None,
            is_stable_narrative: true,
        }
    }

    pub fn with_primary_reporting(mut self, value: bool) -> Self {
        self.has_primary_reporting = value;
        self
    }

    pub fn with_contradictions(mut self, value: bool) -> Self {
        self.has_contradictions = value;
        self
    }

    pub fn with_age_minutes(mut self, minutes: f64) -> Self {
        self.age_minutes = Some(minutes);
        self
    }

    pub fn with_stable_narrative(mut self, value: bool) -> Self {
        self.is_stable_narrative = value;
        self
    }

    /// `source_count <= 1`. Zero counts as single-source.
    pub fn is_single_source(&self) -> bool {
        self.source_count <= SINGLE_SOURCE_MAX
    }

    /// True only for a known age strictly below `window_minutes`.
    /// Unknown and NaN ages are never fresh.
    pub fn is_younger_than(&self, window_minutes: f64) -> bool {
        self.age_minutes.is_some_and(|age| age < window_minutes)
    }

    /// Check the data-model invariants. The engine does not call this;
    /// the aggregation layer does before handing input over.
    pub fn validate(&self) -> StoryTrustResult<()> {
        if self.source_count == 0 {
            return Err(invalid("source_count must be at least 1".to_string()));
        }
        if self.verified_source_count > self.source_count {
            return Err(invalid(format!(
                "verified_source_count ({}) exceeds source_count ({})",
                self.verified_source_count, self.source_count
            )));
        }
        if let Some(age) = self.age_minutes {
            if age.is_nan() || age < 0.0 {
                return Err(invalid(format!("age_minutes must be non-negative, got {age}")));
            }
        }
        Ok(())
    }
}

fn invalid(reason: String) -> StoryTrustError {
    StoryTrustError::InvalidInput { reason }
}
