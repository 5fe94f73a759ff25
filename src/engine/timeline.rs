use chrono::{DateTime, Duration};
use chrono_tz::Tz;

use crate::config::PlannerSettings;
use crate::engine::clock::StartTime;
use crate::error::AppError;
use crate::models::duty::{DutyStatus, Segment};
use crate::models::log::{DailyLog, LogSummary};
use crate::models::trip::TripStops;

#[derive(Debug, Clone, Copy)]
enum Place {
    Current,
    Pickup,
    Dropoff,
    Label(&'static str),
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    status: DutyStatus,
    hours: f64,
    place: Place,
    note: &'static str,
}

const fn slot(status: DutyStatus, hours: f64, place: Place, note: &'static str) -> Slot {
    Slot {
        status,
        hours,
        place,
        note,
    }
}

/// The single-day duty sequence every plan follows. Adds up to 22.5 hours.
const DAILY_SEQUENCE: [Slot; 8] = [
    slot(DutyStatus::OnDuty, 0.5, Place::Current, "Pre-trip inspection"),
    slot(DutyStatus::Driving, 2.0, Place::Label("En route"), "Drive to pickup"),
    slot(DutyStatus::OnDuty, 1.0, Place::Pickup, "Loading freight"),
    slot(DutyStatus::Driving, 4.5, Place::Label("Highway"), "Long haul toward dropoff"),
    slot(DutyStatus::Off, 0.5, Place::Label("Rest stop"), "30-minute break"),
    slot(DutyStatus::Driving, 3.0, Place::Label("Highway"), "Final drive to destination"),
    slot(DutyStatus::OnDuty, 1.0, Place::Dropoff, "Unloading freight"),
    slot(DutyStatus::Off, 10.0, Place::Dropoff, "End of day rest"),
];

/// Appends back-to-back segments from a running clock.
pub struct TimelineBuilder {
    start: DateTime<Tz>,
    clock: DateTime<Tz>,
    segments: Vec<Segment>,
}

impl TimelineBuilder {
    pub fn new(start: DateTime<Tz>) -> Self {
        Self {
            start,
            clock: start,
            segments: Vec::new(),
        }
    }

    pub fn push(
        &mut self,
        status: DutyStatus,
        hours: f64,
        place: impl Into<String>,
        note: impl Into<String>,
    ) -> Result<DateTime<Tz>, AppError> {
        let end = self
            .clock
            .checked_add_signed(hours_to_duration(hours))
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "duty log starting at {} runs past the supported date range",
                    self.start.to_rfc3339()
                ))
            })?;
        self.segments.push(Segment {
            status,
            start: self.clock.fixed_offset(),
            end: end.fixed_offset(),
            place: place.into(),
            note: note.into(),
        });
        self.clock = end;
        Ok(end)
    }

    /// Totals are summed from each stored segment, not taken from the clock.
    pub fn finish(self, total_distance_miles: f64) -> DailyLog {
        let total_hours: f64 = self.segments.iter().map(Segment::duration_hours).sum();

        DailyLog {
            summary: LogSummary {
                total_hours: round_to(total_hours, 2),
                total_miles: round_to(total_distance_miles, 1),
                start: self.start.fixed_offset(),
                end: self.clock.fixed_offset(),
            },
            segments: self.segments,
        }
    }
}

pub fn generate_daily_log(
    stops: &TripStops,
    start: StartTime,
    total_distance_miles: f64,
    settings: &PlannerSettings,
) -> Result<DailyLog, AppError> {
    let mut builder = TimelineBuilder::new(start.localize(settings.timezone));

    for entry in DAILY_SEQUENCE {
        let place = match entry.place {
            Place::Current => stops.current_location.as_str(),
            Place::Pickup => stops.pickup_location.as_str(),
            Place::Dropoff => stops.dropoff_location.as_str(),
            Place::Label(label) => label,
        };
        builder.push(entry.status, entry.hours, place, entry.note)?;
    }

    Ok(builder.finish(total_distance_miles))
}

fn hours_to_duration(hours: f64) -> Duration {
    Duration::milliseconds((hours * 3_600_000.0).round() as i64)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
