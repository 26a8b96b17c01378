use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Reporting-reliability grade. Measures corroboration, not truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
        }
    }

    /// Capitalized form used by the public read API ("Low", "Medium", "High").
    pub fn capitalized(self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "Low",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::High => "High",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editorial lifecycle stage of a story. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum StoryState {
    SingleSource,
    Developing,
    Confirmed,
    Contradicted,
    /// Set only by an out-of-band editorial action, never by the engine.
    Resolved,
}

impl StoryState {
    pub fn as_str(self) -> &'static str {
        match self {
            StoryState::SingleSource => "single-source",
            StoryState::Developing => "developing",
            StoryState::Confirmed => "confirmed",
            StoryState::Contradicted => "contradicted",
            StoryState::Resolved => "resolved",
        }
    }
}

impl fmt::Display for StoryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The engine's output, fully determined by a `ConfidenceInput`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConfidenceResult {
    pub level: ConfidenceLevel,
    /// One sentence justifying `level`.
    pub explanation: String,
    pub story_state: StoryState,
    /// `source_count <= 1`.
    pub is_single_source: bool,
    /// Name of the rule that decided `level`.
    pub level_rule: String,
    /// Name of the rule that decided `story_state`.
    pub state_rule: String,
}
