//! Digest of the most recent check-in, used to prime the next conversation.

use crate::schema::{CheckInLog, CheckInRecord};

/// Digest returned when no check-in has been recorded yet.
pub const FIRST_CHECK_IN: &str = "This is the user's first check-in.";

/// Describe the latest check-in in `log`.
///
/// Only the last record is read. Empty fields are left out rather than
/// filled with placeholders.
pub fn describe(log: &CheckInLog) -> String {
    match log.latest() {
        Some(latest) => describe_record(latest),
        None => FIRST_CHECK_IN.to_string(),
    }
}

/// Render one record as a digest.
pub fn describe_record(record: &CheckInRecord) -> String {
    let mut lines = Vec::with_capacity(4);

    if has_text(&record.date) {
        lines.push(format!("Previous check-in on {}:", record.date));
    } else {
        lines.push("Previous check-in:".to_string());
    }
    if has_text(&record.mood) {
        lines.push(format!("- Mood: {}", record.mood));
    }
    if has_text(&record.energy) {
        lines.push(format!("- Energy level: {}", record.energy));
    }

    let goals: Vec<&str> = record
        .objectives
        .iter()
        .map(String::as_str)
        .filter(|o| has_text(o))
        .collect();
    if !goals.is_empty() {
        lines.push(format!("- Goals: {}", goals.join(", ")));
    }

    lines.join("\n")
}

fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, mood: &str, energy: &str, objectives: &[&str]) -> CheckInRecord {
        CheckInRecord {
            date: date.to_string(),
            time: "08:00:00".to_string(),
            mood: mood.to_string(),
            energy: energy.to_string(),
            objectives: objectives.iter().map(|o| o.to_string()).collect(),
            summary: String::new(),
        }
    }

    #[test]
    fn test_empty_log() {
        assert_eq!(describe(&CheckInLog::default()), FIRST_CHECK_IN);
    }

    #[test]
    fn test_full_record() {
        let log = CheckInLog {
            check_ins: vec![record("2026-10-18", "tired", "low", &["walk", "rest"])],
        };

        insta::assert_snapshot!(describe(&log), @r"
        Previous check-in on 2026-10-18:
        - Mood: tired
        - Energy level: low
        - Goals: walk, rest
        ");
    }

    #[test]
    fn test_only_latest_is_described() {
        let log = CheckInLog {
            check_ins: vec![
                record("2026-10-17", "anxious", "drained", &["sleep"]),
                record("2026-10-18", "good", "high", &["gym"]),
            ],
        };

        let digest = describe(&log);
        assert!(digest.contains("2026-10-18"));
        assert!(digest.contains("good"));
        assert!(!digest.contains("anxious"));
        assert!(!digest.contains("sleep"));
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let digest = describe_record(&record("2026-10-18", "okay", "", &[]));
        assert_eq!(digest, "Previous check-in on 2026-10-18:\n- Mood: okay");
        assert!(!digest.to_lowercase().contains("energy"));
        assert!(!digest.contains("Goals"));
    }

    #[test]
    fn test_missing_date() {
        let digest = describe_record(&record("", "", "high", &["", "stretch"]));
        assert_eq!(digest, "Previous check-in:\n- Energy level: high\n- Goals: stretch");
    }
}
