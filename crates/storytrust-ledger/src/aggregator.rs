//! Ledger aggregation: `SourceLedger` → `ConfidenceInput`.
//!
//! This is the validation boundary. The engine trusts what it is given, so
//! empty ledgers and out-of-range counts are rejected here.

use chrono::{DateTime, Utc};
use storytrust_core::config::StoryTrustConfig;
use storytrust_core::errors::{LedgerError, StoryTrustResult};
use storytrust_core::models::ConfidenceInput;
use storytrust_observability::aggregation_span;

use crate::classifier::VerifiedSourceClassifier;
use crate::ledger::SourceLedger;
use crate::signals::{FlaggedSignals, NarrativeSignals};
use crate::timing;

/// Builds engine input from a ledger with an injected `now`.
pub struct LedgerAggregator {
    classifier: VerifiedSourceClassifier,
    signals: Box<dyn NarrativeSignals>,
}

impl LedgerAggregator {
    pub fn new(classifier: VerifiedSourceClassifier, signals: Box<dyn NarrativeSignals>) -> Self {
        Self {
            classifier,
            signals,
        }
    }

    pub fn from_config(config: &StoryTrustConfig) -> Self {
        Self::new(
            VerifiedSourceClassifier::from_config(&config.verification),
            Box::new(FlaggedSignals::from_config(&config.ledger)),
        )
    }

    pub fn classifier(&self) -> &VerifiedSourceClassifier {
        &self.classifier
    }

    /// Number of observations from verified outlets.
    pub fn verified_count(&self, ledger: &SourceLedger) -> u32 {
        count(
            ledger
                .observations()
                .iter()
                .filter(|o| self.classifier.is_verified(&o.source_name))
                .count(),
        )
    }

    /// Aggregate the ledger as of `now`.
    pub fn aggregate(
        &self,
        ledger: &SourceLedger,
        now: DateTime<Utc>,
    ) -> StoryTrustResult<ConfidenceInput> {
        let span = aggregation_span!(ledger.story_id(), ledger.len());
        let _guard = span.enter();

        if ledger.is_empty() {
            return Err(LedgerError::EmptyLedger {
                story_id: ledger.story_id().to_string(),
            }
            .into());
        }

        let observations = ledger.observations();
        let skewed = timing::future_dated(observations, now);
        if skewed > 0 {
            tracing::debug!(
                story_id = %ledger.story_id(),
                skewed,
                "observations dated after aggregation time"
            );
        }

        let input = ConfidenceInput {
            source_count: count(observations.len()),
            verified_source_count: self.verified_count(ledger),
            has_primary_reporting: observations.iter().any(|o| o.is_primary_reporting),
            has_contradictions: self.signals.has_contradictions(ledger),
            age_minutes: timing::age_minutes(observations, now),
            is_stable_narrative: self.signals.is_stable_narrative(ledger, now),
        };
        input.validate()?;
        Ok(input)
    }
}

impl Default for LedgerAggregator {
    fn default() -> Self {
        Self::from_config(&StoryTrustConfig::default())
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
