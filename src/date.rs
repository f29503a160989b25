use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::deadline::{parse_time, Deadline};
use crate::error::NormalizeError;

// Display date format used by the server and read-only fields: 25.12.2024
static DOTTED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2})\.(\d{2})\.(\d{4})$").expect("Invalid DOTTED_RE regex")
});

// Deadline as the server echoes it back: 25.12.2024 18:30
static DOTTED_DATETIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}\.\d{2}\.\d{4}) (\d{2}:\d{2})$").expect("Invalid DOTTED_DATETIME_RE regex")
});

/// Parse a date string from any of the shapes the screens produce.
///
/// # Arguments
/// * `input` - `DD.MM.YYYY` (display format), `YYYY-MM-DD` (native date
///   picker), or a full ISO timestamp whose date part is taken
///
/// # Returns
/// The calendar date, or `InvalidDateFormat` when the input matches no
/// shape or does not name a real date
pub fn parse_date(input: &str) -> Result<NaiveDate, NormalizeError> {
    let input = input.trim();

    if let Some(caps) = DOTTED_RE.captures(input) {
        let iso = format!("{}-{}-{}", &caps[3], &caps[2], &caps[1]);
        return NaiveDate::parse_from_str(&iso, "%Y-%m-%d")
            .map_err(|_| NormalizeError::InvalidDateFormat(input.to_string()));
    }

    // Anything else is assumed already canonical. Pickers hand back plain
    // ISO dates; full timestamps keep only their date part.
    let date_part = input.split('T').next().unwrap_or(input);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| NormalizeError::InvalidDateFormat(input.to_string()))
}

/// Render a date in the display format shown to users: DD.MM.YYYY.
pub fn format_display(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Parse a full deadline, accepting both the server's read-back format
/// (`25.12.2024 18:30`) and combined ISO timestamps. Edit screens receive
/// the former and must re-normalize before resubmitting.
pub fn parse_deadline(input: &str) -> Result<Deadline, NormalizeError> {
    let input = input.trim();

    if let Some(caps) = DOTTED_DATETIME_RE.captures(input) {
        let date = parse_date(&caps[1])?;
        let time = parse_time(&caps[2])?;
        return Ok(Deadline::new(date, time));
    }

    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M"))
        .map(Deadline::from_datetime)
        .map_err(|_| NormalizeError::InvalidDateFormat(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dotted_date() {
        let date = parse_date("25.12.2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
    }

    #[test]
    fn test_parse_iso_date() {
        let date = parse_date("2024-12-25").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
    }

    #[test]
    fn test_parse_iso_timestamp_takes_date_part() {
        let date = parse_date("2024-12-25T10:30:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_date("tomorrow"),
            Err(NormalizeError::InvalidDateFormat("tomorrow".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_impossible_date() {
        assert!(parse_date("31.02.2024").is_err());
        assert!(parse_date("2024-02-31").is_err());
    }

    #[test]
    fn test_dotted_round_trip() {
        for raw in ["01.01.2024", "29.02.2024", "31.12.1999", "05.06.2025"] {
            let date = parse_date(raw).unwrap();
            assert_eq!(format_display(date), raw);
        }
    }

    #[test]
    fn test_parse_idempotent_through_iso() {
        let first = parse_date("25.12.2024").unwrap();
        let again = parse_date(&first.format("%Y-%m-%d").to_string()).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_parse_deadline_read_back_format() {
        let d = parse_deadline("25.12.2024 18:30").unwrap();
        assert_eq!(d.to_wire(), "2024-12-25T18:30:00");
    }

    #[test]
    fn test_parse_deadline_iso() {
        let d = parse_deadline("2024-12-25T18:30:00").unwrap();
        assert_eq!(d.to_wire(), "2024-12-25T18:30:00");

        let no_seconds = parse_deadline("2024-12-25T18:30").unwrap();
        assert_eq!(no_seconds, d);
    }

    #[test]
    fn test_parse_deadline_invalid() {
        assert!(parse_deadline("25.12.2024").is_err());
        assert!(parse_deadline("later").is_err());
    }
}
