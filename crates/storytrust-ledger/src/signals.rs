//! Contradiction and narrative-stability signals.
//!
//! Deciding whether two accounts conflict, or whether a headline change is
//! material, belongs to the external review/clustering process. The trait
//! keeps that decision pluggable; the default implementation only reads
//! what that process has already written into the ledger.

use chrono::{DateTime, Duration, Utc};
use storytrust_core::config::LedgerConfig;

use crate::ledger::SourceLedger;

/// Derives the two opaque boolean signals of a story.
pub trait NarrativeSignals: Send + Sync {
    fn has_contradictions(&self, ledger: &SourceLedger) -> bool;

    fn is_stable_narrative(&self, ledger: &SourceLedger, now: DateTime<Utc>) -> bool;
}

/// Reads externally raised contradiction flags and revision materiality.
///
/// - Contradicted: at least one flag exists.
/// - Stable: no material revision within the narrative window.
#[derive(Debug, Clone)]
pub struct FlaggedSignals {
    window: Duration,
}

impl FlaggedSignals {
    pub fn new(window: Duration) -> Self {
        Self { window }
    }

    /// Windows too large for a `Duration` saturate to the maximum span.
    pub fn from_config(config: &LedgerConfig) -> Self {
        Self::new(Duration::try_minutes(config.narrative_window_minutes).unwrap_or(Duration::MAX))
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

impl Default for FlaggedSignals {
    fn default() -> Self {
        Self::from_config(&LedgerConfig::default())
    }
}

impl NarrativeSignals for FlaggedSignals {
    fn has_contradictions(&self, ledger: &SourceLedger) -> bool {
        !ledger.contradictions().is_empty()
    }

    /// A window reaching past the earliest representable time covers every revision.
    fn is_stable_narrative(&self, ledger: &SourceLedger, now: DateTime<Utc>) -> bool {
        match now.checked_sub_signed(self.window) {
            Some(since) => !ledger.revisions_since(since).any(|r| r.material),
            None => !ledger.revisions().iter().any(|r| r.material),
        }
    }
}
