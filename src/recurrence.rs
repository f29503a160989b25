use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::deadline::Deadline;
use crate::error::NormalizeError;
use crate::types::RecurrencePolicy;

/// Compute the next occurrence of a deadline under a recurrence policy,
/// preserving the time-of-day. Monthly advancement keeps the day-of-month
/// and clamps to the last day when the target month is shorter.
pub fn advance(current: Deadline, policy: RecurrencePolicy) -> Result<Deadline, NormalizeError> {
    let dt = current.as_datetime();
    let next = match policy {
        RecurrencePolicy::None => return Err(NormalizeError::NotRecurring),
        RecurrencePolicy::Daily => dt + Duration::days(1),
        RecurrencePolicy::Weekly => dt + Duration::days(7),
        RecurrencePolicy::Monthly => add_months(dt.date(), 1).and_time(dt.time()),
    };
    Ok(Deadline::from_datetime(next))
}

/// Advance until the occurrence lands strictly after `now`. A repeatable
/// task completed weeks late gets a future deadline, not a stack of
/// already-missed ones. Always advances at least once.
pub fn advance_past(
    current: Deadline,
    policy: RecurrencePolicy,
    now: NaiveDateTime,
) -> Result<Deadline, NormalizeError> {
    let mut next = advance(current, policy)?;
    while next.as_datetime() <= now {
        next = advance(next, policy)?;
    }
    Ok(next)
}

fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;

    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }

    let day = date.day().min(days_in_month(year, month as u32));
    // Day is clamped to the target month, so the date always exists
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}
