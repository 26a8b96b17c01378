use storytrust_core::config::*;
use storytrust_core::errors::{ConfigError, StoryTrustError};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = StoryTrustConfig::from_toml("").unwrap();

    // Verification defaults
    assert!(config.verification.outlets.iter().any(|o| o == "Reuters"));
    assert!(config.verification.outlets.iter().any(|o| o == "BBC"));
    assert_eq!(
        config.verification.outlets.len(),
        defaults::DEFAULT_VERIFIED_OUTLETS.len()
    );

    // Threshold defaults
    assert_eq!(config.thresholds.confirmed_min_sources, 4);
    assert_eq!(config.thresholds.confirmed_min_verified, 2);
    assert_eq!(config.thresholds.low_min_sources_without_primary, 3);
    assert_eq!(config.thresholds.recency_window_minutes, 30.0);
    assert_eq!(config.thresholds.recency_min_sources, 2);
    assert_eq!(config.thresholds.high_min_verified_without_primary, 3);

    // Ledger defaults
    assert_eq!(config.ledger.narrative_window_minutes, 360);

    // Alerting defaults
    assert_eq!(config.alerting.verified_source_threshold, 3);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[verification]
outlets = ["Reuters", "Deutsche Welle"]

[thresholds]
confirmed_min_sources = 5
"#;
    let config = StoryTrustConfig::from_toml(toml).unwrap();
    assert_eq!(config.verification.outlets, vec!["Reuters", "Deutsche Welle"]);
    assert_eq!(config.thresholds.confirmed_min_sources, 5);
    // Non-overridden fields keep defaults
    assert_eq!(config.thresholds.confirmed_min_verified, 2);
    assert_eq!(config.alerting.verified_source_threshold, 3);
}

#[test]
fn config_serde_roundtrip() {
    let config = StoryTrustConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = StoryTrustConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.thresholds, config.thresholds);
    assert_eq!(roundtripped.verification.outlets, config.verification.outlets);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = StoryTrustConfig::from_toml("[thresholds\nconfirmed_min_sources = 4").unwrap_err();
    assert!(matches!(
        err,
        StoryTrustError::ConfigError(ConfigError::Parse(_))
    ));
}

#[test]
fn confirmed_threshold_must_exceed_single_source() {
    let err = StoryTrustConfig::from_toml("[thresholds]\nconfirmed_min_sources = 1").unwrap_err();
    assert!(err.to_string().contains("confirmed_min_sources"));
}

#[test]
fn verified_threshold_cannot_exceed_source_threshold() {
    let toml = "[thresholds]\nconfirmed_min_sources = 4\nconfirmed_min_verified = 5";
    let err = StoryTrustConfig::from_toml(toml).unwrap_err();
    assert!(err.to_string().contains("confirmed_min_verified"));
}

#[test]
fn negative_recency_window_is_rejected() {
    let err = StoryTrustConfig::from_toml("[thresholds]\nrecency_window_minutes = -5.0").unwrap_err();
    assert!(err.to_string().contains("recency_window_minutes"));
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = StoryTrustConfig::from_toml("[observability]\nlog_level = \"loud\"").unwrap_err();
    assert!(err.to_string().contains("loud"));
}

#[test]
fn zero_alert_threshold_is_rejected() {
    let err =
        StoryTrustConfig::from_toml("[alerting]\nverified_source_threshold = 0").unwrap_err();
    assert!(err.to_string().contains("verified_source_threshold"));
}

#[test]
fn missing_config_file_is_an_io_error() {
    let err = StoryTrustConfig::from_file("/nonexistent/storytrust.toml").unwrap_err();
    assert!(matches!(err, StoryTrustError::Io(_)));
}

#[test]
fn oversized_narrative_window_is_rejected() {
    for minutes in ["200000000000", "9223372036854775807", "-1"] {
        let toml = format!("[ledger]\nnarrative_window_minutes = {minutes}");
        let err = StoryTrustConfig::from_toml(&toml).unwrap_err();
        assert!(
            err.to_string().contains("narrative_window_minutes"),
            "{minutes} should be rejected"
        );
    }
}

#[test]
fn largest_narrative_window_is_accepted() {
    let toml = format!(
        "[ledger]\nnarrative_window_minutes = {}",
        defaults::MAX_NARRATIVE_WINDOW_MINUTES
    );
    let config = StoryTrustConfig::from_toml(&toml).unwrap();
    assert_eq!(
        config.ledger.narrative_window_minutes,
        defaults::MAX_NARRATIVE_WINDOW_MINUTES
    );
}
