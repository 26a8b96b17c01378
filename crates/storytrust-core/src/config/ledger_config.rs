use serde::{Deserialize, Serialize};

use super::defaults;

/// Source ledger aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// How far back a material headline revision still counts as recent.
    pub narrative_window_minutes: i64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            narrative_window_minutes: defaults::DEFAULT_NARRATIVE_WINDOW_MINUTES,
        }
    }
}
