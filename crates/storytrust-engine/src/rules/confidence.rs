//! Confidence grade rules.
//!
//! Every LOW condition sits above HIGH, which is what keeps single-source
//! and contradicted stories from ever grading higher than low. The LOW
//! conditions are split into separate rules so the explanation follows
//! the priority single-source > contradiction > generic.

use storytrust_core::config::ThresholdConfig;
use storytrust_core::models::{ConfidenceInput, ConfidenceLevel};

use super::{Rule, RuleSet};

pub const LOW_SINGLE_SOURCE: &str = "low_single_source";
pub const LOW_CONTRADICTED: &str = "low_contradicted";
pub const LOW_INCONSISTENT_COUNTS: &str = "low_inconsistent_counts";
pub const LOW_NO_PRIMARY_FEW_SOURCES: &str = "low_no_primary_few_sources";
pub const LOW_FRESH_THIN_COVERAGE: &str = "low_fresh_thin_coverage";
pub const HIGH_CORROBORATED: &str = "high_corroborated";
pub const MEDIUM: &str = "medium_default";

pub const SINGLE_SOURCE_EXPLANATION: &str =
    "Only one source is reporting this story so far; treat it as unconfirmed.";
pub const CONTRADICTION_EXPLANATION: &str =
    "Sources disagree on key details of this story; reporting is contradictory.";
pub const LIMITED_CONFIRMATION_EXPLANATION: &str =
    "Limited independent confirmation from other outlets.";
pub const HIGH_EXPLANATION: &str =
    "Multiple independent outlets, including verified sources, consistently confirm this story.";
pub const MEDIUM_EXPLANATION: &str =
    "Several outlets are reporting this story, but verification is still partial.";

/// A grade and the sentence that justifies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfidenceVerdict {
    pub level: ConfidenceLevel,
    pub explanation: &'static str,
}

impl ConfidenceVerdict {
    const fn new(level: ConfidenceLevel, explanation: &'static str) -> Self {
        Self { level, explanation }
    }
}

/// Confidence precedence: any LOW condition, then HIGH, else MEDIUM.
pub fn confidence_rules(thresholds: &ThresholdConfig) -> RuleSet<ConfidenceVerdict> {
    let low_min_sources = thresholds.low_min_sources_without_primary;
    let window = thresholds.recency_window_minutes;
    let recency_min_sources = thresholds.recency_min_sources;
    let high_min_sources = thresholds.confirmed_min_sources;
    let high_min_verified = thresholds.confirmed_min_verified;
    let high_min_verified_without_primary = thresholds.high_min_verified_without_primary;

    let limited = ConfidenceVerdict::new(ConfidenceLevel::Low, LIMITED_CONFIRMATION_EXPLANATION);

    RuleSet::new(
        vec![
            Rule::new(
                LOW_SINGLE_SOURCE,
                |i: &ConfidenceInput| i.is_single_source(),
                ConfidenceVerdict::new(ConfidenceLevel::Low, SINGLE_SOURCE_EXPLANATION),
            ),
            Rule::new(
                LOW_CONTRADICTED,
                |i: &ConfidenceInput| i.has_contradictions,
                ConfidenceVerdict::new(ConfidenceLevel::Low, CONTRADICTION_EXPLANATION),
            ),
            Rule::new(
                LOW_INCONSISTENT_COUNTS,
                |i: &ConfidenceInput| i.verified_source_count > i.source_count,
                limited,
            ),
            Rule::new(
                LOW_NO_PRIMARY_FEW_SOURCES,
                move |i: &ConfidenceInput| {
                    !i.has_primary_reporting && i.source_count < low_min_sources
                },
                limited,
            ),
            Rule::new(
                LOW_FRESH_THIN_COVERAGE,
                move |i: &ConfidenceInput| {
                    i.is_younger_than(window) && i.source_count < recency_min_sources
                },
                limited,
            ),
            Rule::new(
                HIGH_CORROBORATED,
                move |i: &ConfidenceInput| {
                    i.source_count >= high_min_sources
                        && i.verified_source_count >= high_min_verified
                        && !i.has_contradictions
                        && i.is_stable_narrative
                        && (i.has_primary_reporting
                            || i.verified_source_count >= high_min_verified_without_primary)
                },
                ConfidenceVerdict::new(ConfidenceLevel::High, HIGH_EXPLANATION),
            ),
        ],
        MEDIUM,
        ConfidenceVerdict::new(ConfidenceLevel::Medium, MEDIUM_EXPLANATION),
    )
}
