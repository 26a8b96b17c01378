use serde::{Deserialize, Serialize};
use storytrust_core::models::{ConfidenceLevel, StoryState};
use ts_rs::TS;

/// Confidence as the read API spells it: "Low", "Medium", "High".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ApiConfidence {
    Low,
    Medium,
    High,
}

impl From<ConfidenceLevel> for ApiConfidence {
    fn from(level: ConfidenceLevel) -> Self {
        match level {
            ConfidenceLevel::Low => ApiConfidence::Low,
            ConfidenceLevel::Medium => ApiConfidence::Medium,
            ConfidenceLevel::High => ApiConfidence::High,
        }
    }
}

/// One story as served by the "get story" / "list stories" endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoryView {
    pub story_id: String,
    pub confidence: ApiConfidence,
    pub confidence_explanation: String,
    /// Kebab-case state; `resolved` when an editor has closed the story.
    pub story_state: StoryState,
    pub is_single_source: bool,
    pub sources_count: u32,
    pub verified_sources_count: u32,
    /// `"<timestamp>: <source> - <description>"`, oldest first.
    pub timeline: Vec<String>,
}
