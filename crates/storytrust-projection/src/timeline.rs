//! Story timeline lines: `"<RFC3339 timestamp>: <source name> - <description>"`,
//! oldest first.

use chrono::SecondsFormat;
use storytrust_core::models::SourceObservation;
use storytrust_ledger::timing;

/// Render one timeline line. The ` - <description>` tail is dropped when
/// the description is blank.
pub fn line(observation: &SourceObservation) -> String {
    let stamp = observation
        .published_at
        .to_rfc3339_opts(SecondsFormat::Secs, true);
    let description = observation.description.trim();
    if description.is_empty() {
        format!("{stamp}: {}", observation.source_name)
    } else {
        format!("{stamp}: {} - {description}", observation.source_name)
    }
}

/// Timeline of every observation, oldest first, ties broken by source name.
pub fn build(observations: &[SourceObservation]) -> Vec<String> {
    timing::chronological(observations)
        .into_iter()
        .map(line)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn line_includes_description() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let obs = SourceObservation::new("Reuters", at).with_description("Talks resume");
        assert_eq!(line(&obs), "2024-01-02T03:04:05Z: Reuters - Talks resume");
    }

    #[test]
    fn blank_description_is_omitted() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let obs = SourceObservation::new("City Radio", at).with_description("   ");
        assert_eq!(line(&obs), "2024-01-02T03:04:05Z: City Radio");
    }

    #[test]
    fn build_orders_oldest_first() {
        let early = Utc.with_ymd_and_hms(2024, 1, 2, 3, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 1, 2, 4, 0, 0).unwrap();
        let lines = build(&[
            SourceObservation::new("BBC", late),
            SourceObservation::new("AFP", early),
        ]);
        assert!(lines[0].contains("AFP"));
        assert!(lines[1].contains("BBC"));
    }
}
