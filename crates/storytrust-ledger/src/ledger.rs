use chrono::{DateTime, Utc};
use storytrust_core::errors::{LedgerError, StoryTrustResult};
use storytrust_core::models::{
    ContradictionFlag, EditorialStatus, NarrativeRevision, SourceObservation, StoryId,
};

/// Every observation, contradiction flag, and headline revision attached to one story.
///
/// Ingestion writes here; the engine only ever sees the aggregate.
#[derive(Debug, Clone)]
pub struct SourceLedger {
    story_id: StoryId,
    observations: Vec<SourceObservation>,
    contradictions: Vec<ContradictionFlag>,
    revisions: Vec<NarrativeRevision>,
    editorial_status: EditorialStatus,
}

impl SourceLedger {
    pub fn new(story_id: StoryId) -> Self {
        Self {
            story_id,
            observations: Vec::new(),
            contradictions: Vec::new(),
            revisions: Vec::new(),
            editorial_status: EditorialStatus::Open,
        }
    }

    /// Record an outlet's report.
    ///
    /// One outlet counts once: a repeat report from the same outlet (names
    /// compared case-insensitively) updates the existing entry, keeping the
    /// earliest publish time. Returns `true` if the outlet is new to the story.
    pub fn record_observation(&mut self, observation: SourceObservation) -> bool {
        let key = outlet_key(&observation.source_name);
        match self
            .observations
            .iter_mut()
            .find(|o| outlet_key(&o.source_name) == key)
        {
            Some(existing) => {
                existing.published_at = existing.published_at.min(observation.published_at);
                existing.is_primary_reporting |= observation.is_primary_reporting;
                if !observation.description.is_empty() {
                    existing.description = observation.description;
                }
                if observation.url.is_some() {
                    existing.url = observation.url;
                }
                false
            }
            None => {
                self.observations.push(observation);
                true
            }
        }
    }

    /// Record a contradiction between two outlets already in the ledger.
    pub fn flag_contradiction(&mut self, flag: ContradictionFlag) -> StoryTrustResult<()> {
        for name in [&flag.first_source, &flag.second_source] {
            if !self.has_source(name) {
                return Err(LedgerError::UnknownSource {
                    story_id: self.story_id.to_string(),
                    source_name: name.clone(),
                }
                .into());
            }
        }
        self.contradictions.push(flag);
        Ok(())
    }

    pub fn record_revision(&mut self, revision: NarrativeRevision) {
        self.revisions.push(revision);
    }

    /// Mark the story closed. Only an editor does this; the engine never does.
    pub fn resolve(&mut self) {
        self.editorial_status = EditorialStatus::Resolved;
    }

    pub fn has_source(&self, source_name: &str) -> bool {
        let key = outlet_key(source_name);
        self.observations
            .iter()
            .any(|o| outlet_key(&o.source_name) == key)
    }

    pub fn story_id(&self) -> &StoryId {
        &self.story_id
    }

    pub fn observations(&self) -> &[SourceObservation] {
        &self.observations
    }

    pub fn contradictions(&self) -> &[ContradictionFlag] {
        &self.contradictions
    }

    pub fn revisions(&self) -> &[NarrativeRevision] {
        &self.revisions
    }

    pub fn editorial_status(&self) -> EditorialStatus {
        self.editorial_status
    }

    /// Revisions made at or after `since`.
    pub fn revisions_since(&self, since: DateTime<Utc>) -> impl Iterator<Item = &NarrativeRevision> {
        self.revisions.iter().filter(move |r| r.revised_at >= since)
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

fn outlet_key(name: &str) -> String {
    name.trim().to_lowercase()
}
