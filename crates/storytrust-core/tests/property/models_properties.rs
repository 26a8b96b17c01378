use proptest::prelude::*;
use storytrust_core::models::ConfidenceInput;

// ── validate() accepts exactly the data-model invariants ─────────────────

proptest! {
    #[test]
    fn validate_matches_invariants(
        sources in 0u32..20,
        verified in 0u32..20,
        age in prop_oneof![Just(None), (-100.0f64..10_000.0).prop_map(Some)],
    ) {
        let mut input = ConfidenceInput::new(sources, verified);
        input.age_minutes = age;
        let valid = sources >= 1 && verified <= sources && age.map_or(true, |a| a >= 0.0);
        prop_assert_eq!(input.validate().is_ok(), valid);
    }
}

// ── single-source flag is exactly source_count <= 1 ──────────────────────

proptest! {
    #[test]
    fn single_source_flag(sources in any::<u32>()) {
        prop_assert_eq!(ConfidenceInput::new(sources, 0).is_single_source(), sources <= 1);
    }
}

// ── JSON round trip keeps every signal ───────────────────────────────────

proptest! {
    #[test]
    fn json_preserves_signals(
        sources in 1u32..100,
        primary in any::<bool>(),
        contradicted in any::<bool>(),
        stable in any::<bool>(),
    ) {
        let input = ConfidenceInput::new(sources, sources / 2)
            .with_primary_reporting(primary)
            .with_contradictions(contradicted)
            .with_stable_narrative(stable);
        let json = serde_json::to_string(&input).unwrap();
        let back: ConfidenceInput = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, input);
    }
}
