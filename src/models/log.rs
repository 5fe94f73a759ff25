use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::models::duty::Segment;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogSummary {
    pub total_hours: f64,
    pub total_miles: f64,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyLog {
    pub segments: Vec<Segment>,
    pub summary: LogSummary,
}
