use serde::{Deserialize, Serialize};

use super::defaults;

/// Verified-outlet allow-list configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// Canonical outlet names. Extending this list never touches the scoring rules.
    pub outlets: Vec<String>,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            outlets: defaults::DEFAULT_VERIFIED_OUTLETS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
