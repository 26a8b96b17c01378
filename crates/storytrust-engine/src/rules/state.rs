//! Story lifecycle state rules.
//!
//! `resolved` is never produced here; it is an editorial action applied
//! outside the engine.

use storytrust_core::config::ThresholdConfig;
use storytrust_core::models::{ConfidenceInput, StoryState};

use super::{Rule, RuleSet};

pub const CONTRADICTED: &str = "contradicted";
pub const SINGLE_SOURCE: &str = "single_source";
pub const INCONSISTENT_COUNTS: &str = "inconsistent_counts";
pub const CONFIRMED: &str = "confirmed";
pub const DEVELOPING: &str = "developing_default";

/// State precedence: contradicted, single-source, confirmed, else developing.
///
/// Malformed counts (`verified > sources`) can never be confirmed.
pub fn state_rules(thresholds: &ThresholdConfig) -> RuleSet<StoryState> {
    let min_sources = thresholds.confirmed_min_sources;
    let min_verified = thresholds.confirmed_min_verified;

    RuleSet::new(
        vec![
            Rule::new(
                CONTRADICTED,
                |i: &ConfidenceInput| i.has_contradictions,
                StoryState::Contradicted,
            ),
            Rule::new(
                SINGLE_SOURCE,
                |i: &ConfidenceInput| i.is_single_source(),
                StoryState::SingleSource,
            ),
            Rule::new(
                INCONSISTENT_COUNTS,
                |i: &ConfidenceInput| i.verified_source_count > i.source_count,
                StoryState::Developing,
            ),
            Rule::new(
                CONFIRMED,
                move |i: &ConfidenceInput| {
                    i.source_count >= min_sources
                        && i.verified_source_count >= min_verified
                        && i.is_stable_narrative
                },
                StoryState::Confirmed,
            ),
        ],
        DEVELOPING,
        StoryState::Developing,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(input: &ConfidenceInput) -> (&'static str, StoryState) {
        let rules = state_rules(&ThresholdConfig::default());
        let (name, state) = rules.evaluate(input);
        (name, *state)
    }

    #[test]
    fn contradiction_beats_everything() {
        let input = ConfidenceInput::new(10, 10).with_contradictions(true);
        assert_eq!(state(&input), (CONTRADICTED, StoryState::Contradicted));
        let lone = ConfidenceInput::new(1, 0).with_contradictions(true);
        assert_eq!(state(&lone).1, StoryState::Contradicted);
    }

    #[test]
    fn single_source_before_confirmed() {
        assert_eq!(state(&ConfidenceInput::new(1, 1)), (SINGLE_SOURCE, StoryState::SingleSource));
        assert_eq!(state(&ConfidenceInput::new(0, 0)).1, StoryState::SingleSource);
    }

    #[test]
    fn confirmed_needs_sources_verification_and_stability() {
        assert_eq!(state(&ConfidenceInput::new(4, 2)), (CONFIRMED, StoryState::Confirmed));
        assert_eq!(state(&ConfidenceInput::new(3, 3)).1, StoryState::Developing);
        assert_eq!(state(&ConfidenceInput::new(4, 1)).1, StoryState::Developing);
        let shifting = ConfidenceInput::new(6, 4).with_stable_narrative(false);
        assert_eq!(state(&shifting), (DEVELOPING, StoryState::Developing));
    }

    #[test]
    fn malformed_counts_never_confirm() {
        assert_eq!(
            state(&ConfidenceInput::new(4, 9)),
            (INCONSISTENT_COUNTS, StoryState::Developing)
        );
    }

    #[test]
    fn precedence_order_is_fixed() {
        let rules = state_rules(&ThresholdConfig::default());
        assert_eq!(
            rules.names(),
            vec![CONTRADICTED, SINGLE_SOURCE, INCONSISTENT_COUNTS, CONFIRMED, DEVELOPING]
        );
    }
}
