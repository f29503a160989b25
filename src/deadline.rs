use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;

use crate::error::NormalizeError;

/// Default time for a task deadline left blank in the picker ("end of day"
/// as the server expects it on task create/update).
pub static TASK_DEADLINE_DEFAULT: Lazy<NaiveTime> =
    Lazy::new(|| NaiveTime::from_hms_opt(23, 59, 0).expect("Invalid TASK_DEADLINE_DEFAULT"));

/// Default start time for an event without one.
pub static EVENT_START_DEFAULT: Lazy<NaiveTime> =
    Lazy::new(|| NaiveTime::from_hms_opt(0, 0, 0).expect("Invalid EVENT_START_DEFAULT"));

/// Inclusive end of day, used when an event end time is unspecified.
pub static END_OF_DAY: Lazy<NaiveTime> =
    Lazy::new(|| NaiveTime::from_hms_opt(23, 59, 59).expect("Invalid END_OF_DAY"));

/// A fully specified point in time for a task or event boundary.
///
/// Values are naive local time; the server performs no timezone conversion
/// and neither do we.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deadline(NaiveDateTime);

impl Deadline {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self(date.and_time(time))
    }

    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        Self(dt)
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.0.time()
    }

    pub fn as_datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Combined timestamp in the shape the API consumes: YYYY-MM-DDTHH:MM:SS.
    pub fn to_wire(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S").to_string()
    }

    /// Display format matching what the server echoes into read-only fields.
    pub fn format_display(&self) -> String {
        self.0.format("%d.%m.%Y %H:%M").to_string()
    }

    pub fn is_past(&self, now: NaiveDateTime) -> bool {
        self.0 < now
    }
}

/// Parse a time-of-day string from the time picker (HH:MM) or a wire value
/// (HH:MM:SS).
pub fn parse_time(input: &str) -> Result<NaiveTime, NormalizeError> {
    let input = input.trim();
    NaiveTime::parse_from_str(input, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M"))
        .map_err(|_| NormalizeError::InvalidTimeFormat(input.to_string()))
}

/// Combine a date with a possibly absent time-of-day, substituting
/// `default_time` when the picker left it empty.
pub fn compose(date: NaiveDate, time: Option<NaiveTime>, default_time: NaiveTime) -> Deadline {
    Deadline::new(date, time.unwrap_or(default_time))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRange {
    pub start: Deadline,
    pub end: Deadline,
}

/// Compose an event's start and end independently. A missing end date
/// falls back to the start date, so a start-only event becomes a
/// single-day event ending at 23:59:59.
pub fn compose_event_range(
    start_date: NaiveDate,
    start_time: Option<NaiveTime>,
    end_date: Option<NaiveDate>,
    end_time: Option<NaiveTime>,
) -> Result<EventRange, NormalizeError> {
    let start = compose(start_date, start_time, *EVENT_START_DEFAULT);
    let end = compose(end_date.unwrap_or(start_date), end_time, *END_OF_DAY);

    if end.as_datetime() < start.as_datetime() {
        return Err(NormalizeError::EndBeforeStart {
            start: start.to_wire(),
            end: end.to_wire(),
        });
    }

    Ok(EventRange { start, end })
}
