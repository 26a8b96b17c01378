//! Publish-timestamp helpers.
//!
//! `now` is always passed in; nothing here reads a clock.

use chrono::{DateTime, Utc};
use storytrust_core::models::SourceObservation;

const SECONDS_PER_MINUTE: f64 = 60.0;

/// Earliest publish time across all observations.
pub fn first_published_at(observations: &[SourceObservation]) -> Option<DateTime<Utc>> {
    observations.iter().map(|o| o.published_at).min()
}

/// Minutes between the first observation and `now`.
///
/// Returns `None` for an empty ledger. Observations dated in the future
/// (publisher clock skew) clamp to an age of zero rather than going negative.
pub fn age_minutes(observations: &[SourceObservation], now: DateTime<Utc>) -> Option<f64> {
    let first = first_published_at(observations)?;
    let seconds = (now - first).num_seconds().max(0);
    Some(seconds as f64 / SECONDS_PER_MINUTE)
}

/// Observations ordered oldest first; ties are broken by source name so the
/// order is stable across runs.
pub fn chronological(observations: &[SourceObservation]) -> Vec<&SourceObservation> {
    let mut ordered: Vec<&SourceObservation> = observations.iter().collect();
    ordered.sort_by(|a, b| {
        a.published_at
            .cmp(&b.published_at)
            .then_with(|| a.source_name.cmp(&b.source_name))
    });
    ordered
}

/// Observations published after `now`.
pub fn future_dated(observations: &[SourceObservation], now: DateTime<Utc>) -> usize {
    observations.iter().filter(|o| o.published_at > now).count()
}
