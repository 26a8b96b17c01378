use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Identifier of a story (a cluster of reports about one real-world event).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoryId(String);

impl StoryId {
    /// Mint a fresh UUID v4 story id.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StoryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for StoryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One outlet's report of a story.
///
/// Verification is never stored here; it is derived from `source_name`
/// by the verified-source classifier at aggregation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SourceObservation {
    /// Display name of the outlet, e.g. "Reuters via Yahoo News".
    pub source_name: String,
    /// When the outlet published its report.
    pub published_at: DateTime<Utc>,
    /// True if this outlet originated the story rather than relaying it.
    #[serde(default)]
    pub is_primary_reporting: bool,
    /// Short description rendered in the story timeline.
    #[serde(default)]
    pub description: String,
    /// Link to the outlet's article.
    #[serde(default)]
    pub url: Option<String>,
}

impl SourceObservation {
    pub fn new(source_name: impl Into<String>, published_at: DateTime<Utc>) -> Self {
        Self {
            source_name: source_name.into(),
            published_at,
            is_primary_reporting: false,
            description: String::new(),
            url: None,
        }
    }

    pub fn primary(mut self) -> Self {
        self.is_primary_reporting = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// A flag raised by the external review process: two outlets' accounts
/// of the story materially conflict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContradictionFlag {
    pub first_source: String,
    pub second_source: String,
    pub reason: String,
    pub flagged_at: DateTime<Utc>,
}

/// A headline/summary revision reported by the external clustering process.
///
/// `material` is decided upstream; the ledger only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NarrativeRevision {
    pub revised_at: DateTime<Utc>,
    pub headline: String,
    pub material: bool,
}

/// Out-of-band editorial status of a story.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EditorialStatus {
    #[default]
    Open,
    /// Closed by an editor after its news cycle ended.
    Resolved,
}
