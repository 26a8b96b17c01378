use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use storytrust_core::models::{SourceObservation, StoryId};
use storytrust_ledger::{LedgerAggregator, SourceLedger, VerifiedSourceClassifier};

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
}

fn arb_outlet() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Reuters".to_string()),
        Just("BBC".to_string()),
        Just("Bloomberg".to_string()),
        "[a-z]{3,10} (Gazette|Blog|Times Online)",
    ]
}

// ── Classifier: case never matters ───────────────────────────────────────

proptest! {
    #[test]
    fn classifier_ignores_case_and_surrounding_text(
        prefix in "[a-z ]{0,12}",
        suffix in "[a-z ]{0,12}",
        upper in any::<bool>(),
    ) {
        let classifier = VerifiedSourceClassifier::default();
        let name = format!("{prefix}reuters{suffix}");
        let name = if upper { name.to_uppercase() } else { name };
        prop_assert!(classifier.is_verified(&name));
    }
}

// ── Aggregation: counts stay inside the data-model invariants ────────────

proptest! {
    #[test]
    fn aggregate_counts_respect_invariants(
        outlets in prop::collection::vec((arb_outlet(), 0i64..600, any::<bool>()), 1..30),
        now_offset in 0i64..1200,
    ) {
        let mut ledger = SourceLedger::new(StoryId::from("prop"));
        for (name, minute, primary) in &outlets {
            let mut obs = SourceObservation::new(name.clone(), base() + Duration::minutes(*minute));
            obs.is_primary_reporting = *primary;
            ledger.record_observation(obs);
        }
        let input = LedgerAggregator::default()
            .aggregate(&ledger, base() + Duration::minutes(now_offset))
            .unwrap();

        prop_assert!(input.source_count >= 1);
        prop_assert!(input.verified_source_count <= input.source_count);
        prop_assert_eq!(input.source_count as usize, ledger.len());
        let age = input.age_minutes.unwrap();
        prop_assert!(age >= 0.0);
    }
}
