//! Concurrent in-memory ledger store.
//!
//! Writes to one story are serialized by the map's shard lock, so a new
//! source racing a contradiction flag on the same story cannot interleave.
//! Different stories proceed in parallel. Nothing is persisted.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rayon::prelude::*;
use storytrust_core::errors::{LedgerError, StoryTrustResult};
use storytrust_core::models::{
    ConfidenceInput, ContradictionFlag, NarrativeRevision, SourceObservation, StoryId,
};
use storytrust_observability::events;

use crate::aggregator::LedgerAggregator;
use crate::ledger::SourceLedger;

pub struct LedgerStore {
    ledgers: DashMap<StoryId, SourceLedger>,
    aggregator: LedgerAggregator,
}

impl LedgerStore {
    pub fn new(aggregator: LedgerAggregator) -> Self {
        Self {
            ledgers: DashMap::new(),
            aggregator,
        }
    }

    pub fn aggregator(&self) -> &LedgerAggregator {
        &self.aggregator
    }

    /// Record an observation, creating the story's ledger on first sight.
    /// Returns `true` if the outlet is new to the story.
    pub fn record_observation(&self, story_id: &StoryId, observation: SourceObservation) -> bool {
        let verified = self
            .aggregator
            .classifier()
            .is_verified(&observation.source_name);
        let source_name = observation.source_name.clone();

        let mut ledger = self
            .ledgers
            .entry(story_id.clone())
            .or_insert_with(|| SourceLedger::new(story_id.clone()));
        let added = ledger.record_observation(observation);

        if added {
            events::observation_recorded(story_id.as_str(), &source_name, verified);
        }
        added
    }

    pub fn flag_contradiction(
        &self,
        story_id: &StoryId,
        flag: ContradictionFlag,
    ) -> StoryTrustResult<()> {
        let mut ledger = self.get_mut(story_id)?;
        let (first, second) = (flag.first_source.clone(), flag.second_source.clone());
        ledger.flag_contradiction(flag)?;
        events::contradiction_flagged(story_id.as_str(), &first, &second);
        Ok(())
    }

    pub fn record_revision(
        &self,
        story_id: &StoryId,
        revision: NarrativeRevision,
    ) -> StoryTrustResult<()> {
        self.get_mut(story_id)?.record_revision(revision);
        Ok(())
    }

    /// Editorially close a story.
    pub fn resolve(&self, story_id: &StoryId) -> StoryTrustResult<()> {
        self.get_mut(story_id)?.resolve();
        events::story_resolved(story_id.as_str());
        Ok(())
    }

    /// Aggregate one story's ledger as of `now`, under the shard read lock.
    pub fn snapshot_input(
        &self,
        story_id: &StoryId,
        now: DateTime<Utc>,
    ) -> StoryTrustResult<ConfidenceInput> {
        let ledger = self.ledgers.get(story_id).ok_or_else(|| not_found(story_id))?;
        self.aggregator.aggregate(&ledger, now)
    }

    /// Aggregate every story in parallel, sorted by story id.
    pub fn snapshot_all(
        &self,
        now: DateTime<Utc>,
    ) -> Vec<(StoryId, StoryTrustResult<ConfidenceInput>)> {
        let ledgers: Vec<SourceLedger> = self.ledgers.iter().map(|e| e.value().clone()).collect();
        let mut snapshots: Vec<_> = ledgers
            .par_iter()
            .map(|l| (l.story_id().clone(), self.aggregator.aggregate(l, now)))
            .collect();
        snapshots.sort_by(|a, b| a.0.cmp(&b.0));
        snapshots
    }

    /// A copy of the story's ledger.
    pub fn ledger(&self, story_id: &StoryId) -> Option<SourceLedger> {
        self.ledgers.get(story_id).map(|l| l.value().clone())
    }

    pub fn remove(&self, story_id: &StoryId) -> Option<SourceLedger> {
        self.ledgers.remove(story_id).map(|(_, l)| l)
    }

    pub fn story_ids(&self) -> Vec<StoryId> {
        let mut ids: Vec<StoryId> = self.ledgers.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.ledgers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledgers.is_empty()
    }

    fn get_mut(
        &self,
        story_id: &StoryId,
    ) -> StoryTrustResult<dashmap::mapref::one::RefMut<'_, StoryId, SourceLedger>> {
        self.ledgers
            .get_mut(story_id)
            .ok_or_else(|| not_found(story_id).into())
    }
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new(LedgerAggregator::default())
    }
}

fn not_found(story_id: &StoryId) -> LedgerError {
    LedgerError::StoryNotFound {
        story_id: story_id.to_string(),
    }
}
