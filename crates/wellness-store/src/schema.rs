//! Check-in schema - the on-disk shape of the wellness log.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Format of the `date` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of the `time` field.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Fewest objectives a check-in is expected to carry.
pub const MIN_OBJECTIVES: usize = 1;

/// Most objectives a check-in is expected to carry.
pub const MAX_OBJECTIVES: usize = 3;

/// One completed check-in as persisted in the log.
///
/// Every field defaults to empty on read so that older or hand-edited
/// logs still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInRecord {
    /// Calendar date of the check-in (`YYYY-MM-DD`)
    #[serde(default)]
    pub date: String,

    /// Time of day of the check-in (`HH:MM:SS`)
    #[serde(default)]
    pub time: String,

    /// Self-reported mood label
    #[serde(default)]
    pub mood: String,

    /// Self-reported energy label
    #[serde(default)]
    pub energy: String,

    /// Goals for the day, in display order
    #[serde(default)]
    pub objectives: Vec<String>,

    /// Short recap of the conversation
    #[serde(default)]
    pub summary: String,
}

/// The persisted aggregate: every check-in, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInLog {
    #[serde(default)]
    pub check_ins: Vec<CheckInRecord>,
}

impl CheckInLog {
    /// Number of recorded check-ins.
    pub fn len(&self) -> usize {
        self.check_ins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.check_ins.is_empty()
    }

    /// The most recent check-in, if any.
    pub fn latest(&self) -> Option<&CheckInRecord> {
        self.check_ins.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CheckInRecord> {
        self.check_ins.iter()
    }

    pub(crate) fn push(&mut self, record: CheckInRecord) {
        self.check_ins.push(record);
    }
}

/// The caller-supplied part of a check-in.
///
/// `date` and `time` are not part of it: the store stamps them when the
/// record is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCheckIn {
    pub mood: String,
    pub energy: String,
    pub objectives: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl NewCheckIn {
    /// Create a new check-in without a summary.
    pub fn new<I, S>(mood: impl Into<String>, energy: impl Into<String>, objectives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mood: mood.into(),
            energy: energy.into(),
            objectives: objectives.into_iter().map(Into::into).collect(),
            summary: None,
        }
    }

    /// Set summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Check the entry against the check-in guidance: non-empty labels and
    /// 1-3 non-blank objectives.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.mood.trim().is_empty() {
            return Err(ValidationError::EmptyMood);
        }
        if self.energy.trim().is_empty() {
            return Err(ValidationError::EmptyEnergy);
        }
        let count = self.objectives.len();
        if !(MIN_OBJECTIVES..=MAX_OBJECTIVES).contains(&count) {
            return Err(ValidationError::ObjectiveCount(count));
        }
        if let Some(index) = self.objectives.iter().position(|o| o.trim().is_empty()) {
            return Err(ValidationError::BlankObjective { index });
        }
        Ok(())
    }

    /// The caller's summary, or one synthesized from the other fields when
    /// it is missing or blank.
    pub fn summary_or_default(&self) -> String {
        match self.summary.as_deref() {
            Some(summary) if !summary.trim().is_empty() => summary.to_string(),
            _ => format!(
                "User reported feeling {} with {} energy. Goals: {}",
                self.mood,
                self.energy,
                self.objectives.join(", ")
            ),
        }
    }

    /// Turn the entry into a record stamped with `at`.
    pub fn into_record(self, at: NaiveDateTime) -> CheckInRecord {
        let summary = self.summary_or_default();
        CheckInRecord {
            date: at.format(DATE_FORMAT).to_string(),
            time: at.format(TIME_FORMAT).to_string(),
            mood: self.mood,
            energy: self.energy,
            objectives: self.objectives,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_into_record_stamps_date_and_time() {
        let record = NewCheckIn::new("calm", "medium", ["write report"]).into_record(at(7, 5, 9));
        assert_eq!(record.date, "2026-10-18");
        assert_eq!(record.time, "07:05:09");
        assert_eq!(record.objectives, vec!["write report"]);
    }

    #[test]
    fn test_blank_summary_is_synthesized() {
        let entry = NewCheckIn::new("tired", "low", ["walk", "rest"]).with_summary("  ");
        assert_eq!(
            entry.summary_or_default(),
            "User reported feeling tired with low energy. Goals: walk, rest"
        );
    }

    #[test]
    fn test_supplied_summary_is_kept() {
        let entry = NewCheckIn::new("good", "high", ["gym"]).with_summary("Upbeat morning.");
        assert_eq!(entry.into_record(at(9, 0, 0)).summary, "Upbeat morning.");
    }

    #[test]
    fn test_validate() {
        assert!(NewCheckIn::new("good", "high", ["gym"]).validate().is_ok());
        assert_eq!(
            NewCheckIn::new(" ", "high", ["gym"]).validate(),
            Err(ValidationError::EmptyMood)
        );
        assert_eq!(
            NewCheckIn::new("good", "", ["gym"]).validate(),
            Err(ValidationError::EmptyEnergy)
        );
        assert_eq!(
            NewCheckIn::new("good", "high", Vec::<String>::new()).validate(),
            Err(ValidationError::ObjectiveCount(0))
        );
        assert_eq!(
            NewCheckIn::new("good", "high", ["a", "b", "c", "d"]).validate(),
            Err(ValidationError::ObjectiveCount(4))
        );
        assert_eq!(
            NewCheckIn::new("good", "high", ["a", ""]).validate(),
            Err(ValidationError::BlankObjective { index: 1 })
        );
    }

    #[test]
    fn test_partial_record_deserializes() {
        let record: CheckInRecord = serde_json::from_str(r#"{"date": "2026-10-01", "mood": "ok"}"#).unwrap();
        assert_eq!(record.mood, "ok");
        assert!(record.energy.is_empty());
        assert!(record.objectives.is_empty());
    }

    #[test]
    fn test_log_without_key_is_empty() {
        let log: CheckInLog = serde_json::from_str("{}").unwrap();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
    }
}
