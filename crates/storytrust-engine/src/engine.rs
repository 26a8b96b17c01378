//! ConfidenceEngine: the single entry point that runs the state and
//! confidence rule lists over one story's signals.

use rayon::prelude::*;
use storytrust_core::config::{StoryTrustConfig, ThresholdConfig};
use storytrust_core::models::{ConfidenceInput, ConfidenceLevel, ConfidenceResult, StoryState};
use storytrust_core::traits::IConfidenceEngine;
use storytrust_observability::{evaluation_span, events};

use crate::rules::{confidence_rules, state_rules, ConfidenceVerdict, RuleSet};

/// Pure story classifier.
///
/// Holds only immutable rule lists, so one instance can be shared across
/// threads and requests without synchronization.
#[derive(Debug)]
pub struct ConfidenceEngine {
    thresholds: ThresholdConfig,
    state_rules: RuleSet<StoryState>,
    confidence_rules: RuleSet<ConfidenceVerdict>,
}

impl ConfidenceEngine {
    pub fn new(thresholds: ThresholdConfig) -> Self {
        Self {
            state_rules: state_rules(&thresholds),
            confidence_rules: confidence_rules(&thresholds),
            thresholds,
        }
    }

    pub fn from_config(config: &StoryTrustConfig) -> Self {
        Self::new(config.thresholds.clone())
    }

    pub fn thresholds(&self) -> &ThresholdConfig {
        &self.thresholds
    }

    pub fn state_rules(&self) -> &RuleSet<StoryState> {
        &self.state_rules
    }

    pub fn confidence_rules(&self) -> &RuleSet<ConfidenceVerdict> {
        &self.confidence_rules
    }

    /// Lifecycle state only.
    pub fn classify_state(&self, input: &ConfidenceInput) -> StoryState {
        *self.state_rules.evaluate(input).1
    }

    /// Confidence grade and its explanation only.
    pub fn classify_confidence(&self, input: &ConfidenceInput) -> (ConfidenceLevel, &'static str) {
        let (_, verdict) = self.confidence_rules.evaluate(input);
        (verdict.level, verdict.explanation)
    }

    /// Classify one story.
    pub fn evaluate(&self, input: &ConfidenceInput) -> ConfidenceResult {
        let (state_rule, state) = self.state_rules.evaluate(input);
        let (level_rule, verdict) = self.confidence_rules.evaluate(input);

        events::story_evaluated(
            input.source_count,
            input.verified_source_count,
            verdict.level,
            *state,
            level_rule,
        );

        ConfidenceResult {
            level: verdict.level,
            explanation: verdict.explanation.to_string(),
            story_state: *state,
            is_single_source: input.is_single_source(),
            level_rule: level_rule.to_string(),
            state_rule: state_rule.to_string(),
        }
    }

    /// Classify many stories in parallel. Output order matches input order.
    ///
    /// The batch span is entered on each worker thread, so every
    /// `story_evaluated` event nests under it.
    pub fn evaluate_batch(&self, inputs: &[ConfidenceInput]) -> Vec<ConfidenceResult> {
        let span = evaluation_span!(inputs.len());
        inputs
            .par_iter()
            .map(|input| {
                let _guard = span.enter();
                self.evaluate(input)
            })
            .collect()
    }
}

impl Default for ConfidenceEngine {
    fn default() -> Self {
        Self::new(ThresholdConfig::default())
    }
}

impl IConfidenceEngine for ConfidenceEngine {
    fn evaluate(&self, input: &ConfidenceInput) -> ConfidenceResult {
        ConfidenceEngine::evaluate(self, input)
    }
}
