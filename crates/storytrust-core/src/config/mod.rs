pub mod alerting_config;
pub mod defaults;
pub mod ledger_config;
pub mod observability_config;
pub mod threshold_config;
pub mod verification_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use alerting_config::AlertingConfig;
pub use ledger_config::LedgerConfig;
pub use observability_config::ObservabilityConfig;
pub use threshold_config::ThresholdConfig;
pub use verification_config::VerificationConfig;

use crate::errors::{ConfigError, StoryTrustResult};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Top-level StoryTrust configuration.
///
/// Every section defaults independently, so an empty TOML document is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryTrustConfig {
    pub verification: VerificationConfig,
    pub thresholds: ThresholdConfig,
    pub ledger: LedgerConfig,
    pub alerting: AlertingConfig,
    pub observability: ObservabilityConfig,
}

impl StoryTrustConfig {
    /// Parse and validate a config from a TOML string.
    pub fn from_toml(input: &str) -> StoryTrustResult<Self> {
        let config: Self = toml::from_str(input).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> StoryTrustResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Reject values that would make the rules incoherent.
    pub fn validate(&self) -> StoryTrustResult<()> {
        let t = &self.thresholds;

        if t.confirmed_min_sources <= crate::constants::SINGLE_SOURCE_MAX {
            return Err(invalid(
                "thresholds.confirmed_min_sources",
                format!(
                    "must exceed the single-source limit ({}), got {}",
                    crate::constants::SINGLE_SOURCE_MAX,
                    t.confirmed_min_sources
                ),
            ));
        }
        if t.confirmed_min_verified > t.confirmed_min_sources {
            return Err(invalid(
                "thresholds.confirmed_min_verified",
                format!(
                    "{} exceeds confirmed_min_sources ({})",
                    t.confirmed_min_verified, t.confirmed_min_sources
                ),
            ));
        }
        if !t.recency_window_minutes.is_finite() || t.recency_window_minutes < 0.0 {
            return Err(invalid(
                "thresholds.recency_window_minutes",
                format!("must be a finite, non-negative number, got {}", t.recency_window_minutes),
            ));
        }
        let window = self.ledger.narrative_window_minutes;
        if !(0..=defaults::MAX_NARRATIVE_WINDOW_MINUTES).contains(&window) {
            return Err(invalid(
                "ledger.narrative_window_minutes",
                format!(
                    "must be between 0 and {}, got {window}",
                    defaults::MAX_NARRATIVE_WINDOW_MINUTES
                ),
            ));
        }
        if self.alerting.verified_source_threshold == 0 {
            return Err(invalid(
                "alerting.verified_source_threshold",
                "must be at least 1".to_string(),
            ));
        }
        if !LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(invalid(
                "observability.log_level",
                format!("unknown level {:?}", self.observability.log_level),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: String) -> crate::errors::StoryTrustError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason,
    }
    .into()
}
