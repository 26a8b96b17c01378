//! StoryProjector: ledger in, read-API view out.

use chrono::{DateTime, Utc};
use storytrust_core::config::StoryTrustConfig;
use storytrust_core::errors::StoryTrustResult;
use storytrust_core::models::{EditorialStatus, StoryId, StoryState};
use storytrust_engine::ConfidenceEngine;
use storytrust_ledger::{LedgerAggregator, LedgerStore, SourceLedger};

use crate::timeline;
use crate::view::StoryView;

pub struct StoryProjector {
    aggregator: LedgerAggregator,
    engine: ConfidenceEngine,
}

impl StoryProjector {
    pub fn new(aggregator: LedgerAggregator, engine: ConfidenceEngine) -> Self {
        Self { aggregator, engine }
    }

    pub fn from_config(config: &StoryTrustConfig) -> Self {
        Self::new(
            LedgerAggregator::from_config(config),
            ConfidenceEngine::from_config(config),
        )
    }

    pub fn engine(&self) -> &ConfidenceEngine {
        &self.engine
    }

    /// Aggregate, evaluate, and render one story as of `now`.
    ///
    /// An editorially resolved story renders as `resolved`; its confidence
    /// grade is still the computed one.
    pub fn project(&self, ledger: &SourceLedger, now: DateTime<Utc>) -> StoryTrustResult<StoryView> {
        let input = self.aggregator.aggregate(ledger, now)?;
        let result = self.engine.evaluate(&input);

        let story_state = match ledger.editorial_status() {
            EditorialStatus::Resolved => {
                tracing::debug!(
                    story_id = %ledger.story_id(),
                    computed_state = %result.story_state,
                    "editorial resolution overrides computed state"
                );
                StoryState::Resolved
            }
            EditorialStatus::Open => result.story_state,
        };

        Ok(StoryView {
            story_id: ledger.story_id().to_string(),
            confidence: result.level.into(),
            confidence_explanation: result.explanation,
            story_state,
            is_single_source: result.is_single_source,
            sources_count: input.source_count,
            verified_sources_count: input.verified_source_count,
            timeline: timeline::build(ledger.observations()),
        })
    }

    /// Every story in the store, sorted by story id.
    ///
    /// Each story carries its own result, so one story that fails to
    /// aggregate does not hide the rest from a listing.
    pub fn project_store(
        &self,
        store: &LedgerStore,
        now: DateTime<Utc>,
    ) -> Vec<(StoryId, StoryTrustResult<StoryView>)> {
        store
            .story_ids()
            .into_iter()
            .filter_map(|id| store.ledger(&id).map(|ledger| (id, ledger)))
            .map(|(id, ledger)| {
                let view = self.project(&ledger, now);
                if let Err(err) = &view {
                    tracing::warn!(story_id = %id, error = %err, "story could not be projected");
                }
                (id, view)
            })
            .collect()
    }
}

impl Default for StoryProjector {
    fn default() -> Self {
        Self::from_config(&StoryTrustConfig::default())
    }
}
