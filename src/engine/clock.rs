use chrono::{DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::{OffsetComponents, Tz};

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A trip start as supplied by the client, before it is pinned to the
/// planner's zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartTime {
    /// Wall-clock time with no offset; read as already being in the planner zone.
    Local(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
}

impl StartTime {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let normalized = match raw.strip_suffix('Z').or_else(|| raw.strip_suffix('z')) {
            Some(stem) => format!("{stem}+00:00"),
            None => raw.to_string(),
        };

        if let Ok(parsed) = DateTime::parse_from_rfc3339(&normalized) {
            return Some(StartTime::Offset(parsed));
        }

        for format in OFFSET_FORMATS {
            if let Ok(parsed) = DateTime::parse_from_str(&normalized, format) {
                return Some(StartTime::Offset(parsed));
            }
        }

        for format in NAIVE_FORMATS {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(StartTime::Local(parsed));
            }
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(StartTime::Local)
    }

    pub fn now() -> Self {
        StartTime::Offset(Utc::now().fixed_offset())
    }

    /// Pins the start to `tz`. Ambiguous wall times take the standard-time
    /// reading; wall times inside a spring-forward gap are read with the
    /// standard offset.
    pub fn localize(&self, tz: Tz) -> DateTime<Tz> {
        match self {
            StartTime::Offset(instant) => instant.with_timezone(&tz),
            StartTime::Local(wall) => match tz.from_local_datetime(wall) {
                LocalResult::Single(local) => local,
                LocalResult::Ambiguous(_, standard) => standard,
                LocalResult::None => {
                    let standard_offset = tz.offset_from_utc_datetime(wall).base_utc_offset();
                    let utc = wall.checked_sub_signed(standard_offset).unwrap_or(*wall);
                    tz.from_utc_datetime(&utc)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Offset};
    use chrono_tz::America::Chicago;

    use super::StartTime;

    fn wall(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn utc_suffix_is_converted_into_zone() {
        let start = StartTime::parse("2024-01-01T06:00:00Z").unwrap();
        assert!(matches!(start, StartTime::Offset(_)));

        let local = start.localize(Chicago);
        assert_eq!(local.to_rfc3339(), "2024-01-01T00:00:00-06:00");
    }

    #[test]
    fn explicit_offset_is_converted_into_zone() {
        let start = StartTime::parse("2024-07-01T12:30:00+02:00").unwrap();
        let local = start.localize(Chicago);
        assert_eq!(local.to_rfc3339(), "2024-07-01T05:30:00-05:00");
    }

    #[test]
    fn offset_without_seconds_is_accepted() {
        let start = StartTime::parse("2024-01-01T06:00+00:00").unwrap();
        assert_eq!(start.localize(Chicago).to_rfc3339(), "2024-01-01T00:00:00-06:00");
    }

    #[test]
    fn naive_input_is_read_as_zone_wall_time() {
        let start = StartTime::parse("2024-03-15T08:00:00").unwrap();
        assert_eq!(start, StartTime::Local(wall(2024, 3, 15, 8, 0)));
        assert_eq!(start.localize(Chicago).to_rfc3339(), "2024-03-15T08:00:00-05:00");
    }

    #[test]
    fn naive_variants_parse() {
        assert_eq!(
            StartTime::parse("2024-03-15 08:45"),
            Some(StartTime::Local(wall(2024, 3, 15, 8, 45)))
        );
        assert_eq!(
            StartTime::parse("2024-03-15T08:45"),
            Some(StartTime::Local(wall(2024, 3, 15, 8, 45)))
        );
        assert_eq!(
            StartTime::parse("2024-03-15"),
            Some(StartTime::Local(wall(2024, 3, 15, 0, 0)))
        );
        assert!(StartTime::parse("2024-03-15T08:45:10.250").is_some());
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(StartTime::parse("not-a-date"), None);
        assert_eq!(StartTime::parse(""), None);
        assert_eq!(StartTime::parse("2024-13-45T99:00:00Z"), None);
    }

    #[test]
    fn ambiguous_fall_back_time_takes_standard_reading() {
        let local = StartTime::Local(wall(2024, 11, 3, 1, 30)).localize(Chicago);
        assert_eq!(local.to_rfc3339(), "2024-11-03T01:30:00-06:00");
    }

    #[test]
    fn spring_forward_gap_lands_an_hour_later() {
        let local = StartTime::Local(wall(2024, 3, 10, 2, 30)).localize(Chicago);
        assert_eq!(local.to_rfc3339(), "2024-03-10T03:30:00-05:00");
    }

    #[test]
    fn now_localizes_without_panicking() {
        let local = StartTime::now().localize(Chicago);
        let offset_hours = local.offset().fix().local_minus_utc() / 3600;
        assert!(offset_hours == -6 || offset_hours == -5);
    }
}
