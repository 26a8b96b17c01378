//! Structured log events for key story lifecycle operations.
//!
//! Each function emits a `tracing` event with structured fields.

use storytrust_core::models::{ConfidenceLevel, StoryState};

/// Log an engine evaluation.
pub fn story_evaluated(
    source_count: u32,
    verified_source_count: u32,
    level: ConfidenceLevel,
    state: StoryState,
    level_rule: &str,
) {
    tracing::debug!(
        event = "story_evaluated",
        source_count = source_count,
        verified_source_count = verified_source_count,
        level = %level,
        state = %state,
        level_rule = %level_rule,
        "story evaluated"
    );
}

/// Log a new source observation on a story.
pub fn observation_recorded(story_id: &str, source_name: &str, verified: bool) {
    tracing::info!(
        event = "observation_recorded",
        story_id = %story_id,
        source_name = %source_name,
        verified = verified,
        "observation recorded"
    );
}

/// Log a contradiction flag raised against a story.
pub fn contradiction_flagged(story_id: &str, first_source: &str, second_source: &str) {
    tracing::warn!(
        event = "contradiction_flagged",
        story_id = %story_id,
        first_source = %first_source,
        second_source = %second_source,
        "contradiction flagged"
    );
}

/// Log a story crossing the verified-source alert threshold.
pub fn verified_threshold_crossed(story_id: &str, verified_source_count: u32, threshold: u32) {
    tracing::info!(
        event = "verified_threshold_crossed",
        story_id = %story_id,
        verified_source_count = verified_source_count,
        threshold = threshold,
        "verified source threshold crossed"
    );
}

/// Log an editorial resolution.
pub fn story_resolved(story_id: &str) {
    tracing::info!(
        event = "story_resolved",
        story_id = %story_id,
        "story resolved"
    );
}
