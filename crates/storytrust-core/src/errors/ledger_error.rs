/// Source ledger errors raised while recording or aggregating observations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("story {story_id} has no source observations")]
    EmptyLedger { story_id: String },

    #[error("story not found: {story_id}")]
    StoryNotFound { story_id: String },

    #[error("source {source_name} has not reported story {story_id}")]
    UnknownSource {
        story_id: String,
        source_name: String,
    },
}
