//! Verified-source alert trigger.
//!
//! Decides when a story has just crossed the verified-outlet threshold.
//! Delivering the notification is the alerting service's job.

use storytrust_core::config::AlertingConfig;
use storytrust_observability::events;

/// Outcome of comparing two successive verified counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertDecision {
    /// The count just reached the threshold.
    Fire { verified_source_count: u32 },
    Hold,
}

#[derive(Debug, Clone)]
pub struct VerifiedSourceAlert {
    threshold: u32,
}

impl VerifiedSourceAlert {
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    pub fn from_config(config: &AlertingConfig) -> Self {
        Self::new(config.verified_source_threshold)
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Fires exactly once per upward crossing: `previous` below the
    /// threshold (or unknown) and `current` at or above it.
    pub fn check(&self, story_id: &str, previous: Option<u32>, current: u32) -> AlertDecision {
        let was_below = previous.map_or(true, |p| p < self.threshold);
        if was_below && current >= self.threshold {
            events::verified_threshold_crossed(story_id, current, self.threshold);
            AlertDecision::Fire {
                verified_source_count: current,
            }
        } else {
            AlertDecision::Hold
        }
    }
}

impl Default for VerifiedSourceAlert {
    fn default() -> Self {
        Self::from_config(&AlertingConfig::default())
    }
}
