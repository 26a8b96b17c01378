use proptest::prelude::*;
use storytrust_core::models::{ConfidenceInput, ConfidenceLevel, StoryState};
use storytrust_engine::ConfidenceEngine;

fn arb_age() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![Just(None), (0.0f64..10_000.0).prop_map(Some)]
}

/// Any well-formed input: 1+ sources, verified within bounds.
fn arb_input() -> impl Strategy<Value = ConfidenceInput> {
    (1u32..50)
        .prop_flat_map(|sources| (Just(sources), 0..=sources))
        .prop_flat_map(|(sources, verified)| {
            (
                Just(sources),
                Just(verified),
                any::<bool>(),
                any::<bool>(),
                arb_age(),
                any::<bool>(),
            )
        })
        .prop_map(|(sources, verified, primary, contradicted, age, stable)| ConfidenceInput {
            source_count: sources,
            verified_source_count: verified,
            has_primary_reporting: primary,
            has_contradictions: contradicted,
            age_minutes: age,
            is_stable_narrative: stable,
        })
}

/// Anything at all, including contract violations.
fn arb_any_input() -> impl Strategy<Value = ConfidenceInput> {
    (
        any::<u32>(),
        any::<u32>(),
        any::<bool>(),
        any::<bool>(),
        prop_oneof![Just(None), any::<f64>().prop_map(Some)],
        any::<bool>(),
    )
        .prop_map(|(sources, verified, primary, contradicted, age, stable)| ConfidenceInput {
            source_count: sources,
            verified_source_count: verified,
            has_primary_reporting: primary,
            has_contradictions: contradicted,
            age_minutes: age,
            is_stable_narrative: stable,
        })
}

// ── Single-source ceiling ────────────────────────────────────────────────

proptest! {
    #[test]
    fn single_source_never_high(mut input in arb_input(), sources in 0u32..=1) {
        input.source_count = sources;
        input.verified_source_count = input.verified_source_count.min(sources);
        let result = ConfidenceEngine::default().evaluate(&input);
        prop_assert_ne!(result.level, ConfidenceLevel::High);
        prop_assert!(result.is_single_source);
        let expected = if input.has_contradictions {
            StoryState::Contradicted
        } else {
            StoryState::SingleSource
        };
        prop_assert_eq!(result.story_state, expected);
    }
}

// ── Contradiction dominance ──────────────────────────────────────────────

proptest! {
    #[test]
    fn contradiction_always_low_and_contradicted(mut input in arb_input()) {
        input.has_contradictions = true;
        let result = ConfidenceEngine::default().evaluate(&input);
        prop_assert_eq!(result.story_state, StoryState::Contradicted);
        prop_assert_eq!(result.level, ConfidenceLevel::Low);
    }
}

// ── Confirmed requires verification ──────────────────────────────────────

proptest! {
    #[test]
    fn confirmed_implies_evidence(input in arb_input()) {
        let result = ConfidenceEngine::default().evaluate(&input);
        if result.story_state == StoryState::Confirmed {
            prop_assert!(input.source_count >= 4);
            prop_assert!(input.verified_source_count >= 2);
            prop_assert!(input.is_stable_narrative);
        }
    }
}

// ── High implies confirmed-grade evidence ────────────────────────────────

proptest! {
    #[test]
    fn high_implies_evidence(input in arb_input()) {
        let result = ConfidenceEngine::default().evaluate(&input);
        if result.level == ConfidenceLevel::High {
            prop_assert!(input.source_count >= 4);
            prop_assert!(input.verified_source_count >= 2);
            prop_assert!(!input.has_contradictions);
        }
    }
}

// ── Determinism ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn evaluation_is_deterministic(input in arb_input()) {
        let engine = ConfidenceEngine::default();
        let first = serde_json::to_string(&engine.evaluate(&input)).unwrap();
        let second = serde_json::to_string(&engine.evaluate(&input.clone())).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ── Degenerate input never panics and never over-grades ──────────────────

proptest! {
    #[test]
    fn malformed_input_stays_conservative(input in arb_any_input()) {
        let result = ConfidenceEngine::default().evaluate(&input);
        prop_assert_ne!(result.story_state, StoryState::Resolved);
        if input.source_count == 0 || input.verified_source_count > input.source_count {
            prop_assert_eq!(result.level, ConfidenceLevel::Low);
            prop_assert_ne!(result.story_state, StoryState::Confirmed);
        }
    }
}
