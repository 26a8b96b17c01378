use serde::{Deserialize, Serialize};

use super::defaults;

/// Alert trigger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertingConfig {
    /// Fire once when the verified source count reaches this value.
    pub verified_source_threshold: u32,
}

impl Default for AlertingConfig {
    fn default() -> Self {
        Self {
            verified_source_threshold: defaults::DEFAULT_VERIFIED_ALERT_THRESHOLD,
        }
    }
}
