use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DutyStatus {
    OnDuty,
    Driving,
    Off,
}

impl DutyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DutyStatus::OnDuty => "ON_DUTY",
            DutyStatus::Driving => "DRIVING",
            DutyStatus::Off => "OFF",
        }
    }
}

/// One contiguous block of the duty log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    pub status: DutyStatus,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub place: String,
    pub note: String,
}

impl Segment {
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 3_600_000.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use serde_json::json;

    use super::{DutyStatus, Segment};

    #[test]
    fn status_serializes_in_eld_spelling() {
        assert_eq!(serde_json::to_value(DutyStatus::OnDuty).unwrap(), json!("ON_DUTY"));
        assert_eq!(serde_json::to_value(DutyStatus::Driving).unwrap(), json!("DRIVING"));
        assert_eq!(serde_json::to_value(DutyStatus::Off).unwrap(), json!("OFF"));
        assert_eq!(DutyStatus::OnDuty.as_str(), "ON_DUTY");
    }

    #[test]
    fn segment_keeps_offset_in_timestamps() {
        let segment = Segment {
            status: DutyStatus::Off,
            start: DateTime::parse_from_rfc3339("2024-01-01T00:00:00-06:00").unwrap(),
            end: DateTime::parse_from_rfc3339("2024-01-01T00:30:00-06:00").unwrap(),
            place: "Rest stop".to_string(),
            note: "30-minute break".to_string(),
        };

        let value = serde_json::to_value(&segment).unwrap();
        assert_eq!(value["status"], "OFF");
        assert_eq!(value["start"], "2024-01-01T00:00:00-06:00");
        assert_eq!(value["end"], "2024-01-01T00:30:00-06:00");
        assert!((segment.duration_hours() - 0.5).abs() < 1e-9);
    }
}
