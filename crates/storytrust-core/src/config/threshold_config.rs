//! Thresholds used by the state and confidence rules.
//!
//! # Examples
//!
//! ```
//! use storytrust_core::config::ThresholdConfig;
//!
//! let thresholds = ThresholdConfig::default();
//! assert_eq!(thresholds.confirmed_min_sources, 4);
//! assert_eq!(thresholds.confirmed_min_verified, 2);
//! ```

use serde::{Deserialize, Serialize};

use super::defaults;

/// Numeric thresholds for the confirmed/high/low rules.
///
/// The single-source check (`source_count <= 1`) is not configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Minimum sources for `confirmed` state and `high` confidence. Default: 4.
    pub confirmed_min_sources: u32,
    /// Minimum verified sources for `confirmed` state and `high` confidence. Default: 2.
    pub confirmed_min_verified: u32,
    /// Without primary reporting, fewer sources than this grade `low`. Default: 3.
    pub low_min_sources_without_primary: u32,
    /// Stories younger than this many minutes are "fresh". Default: 30.
    pub recency_window_minutes: f64,
    /// Fresh stories with fewer sources than this grade `low`. Default: 2.
    pub recency_min_sources: u32,
    /// Without primary reporting, `high` needs this many verified sources. Default: 3.
    pub high_min_verified_without_primary: u32,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            confirmed_min_sources: defaults::DEFAULT_CONFIRMED_MIN_SOURCES,
            confirmed_min_verified: defaults::DEFAULT_CONFIRMED_MIN_VERIFIED,
            low_min_sources_without_primary: defaults::DEFAULT_LOW_MIN_SOURCES_WITHOUT_PRIMARY,
            recency_window_minutes: defaults::DEFAULT_RECENCY_WINDOW_MINUTES,
            recency_min_sources: defaults::DEFAULT_RECENCY_MIN_SOURCES,
            high_min_verified_without_primary: defaults::DEFAULT_HIGH_MIN_VERIFIED_WITHOUT_PRIMARY,
        }
    }
}
