use crate::error::{ClientError, Result};
use chrono::{DateTime, Duration, Local, LocalResult, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// Formats accepted from a `datetime-local` input, most common first.
const DATETIME_LOCAL_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Converts a `datetime-local` wall-clock value in the viewer's timezone to a
/// UTC ISO-8601 string with millisecond precision, e.g. `2024-05-01T08:00:00.000Z`.
pub fn convert_datetime_local_to_iso(value: &str) -> Result<String> {
    convert_datetime_in(value, &Local)
}

/// Same as [`convert_datetime_local_to_iso`] for an explicit timezone.
pub fn convert_datetime_in<Tz: TimeZone>(value: &str, tz: &Tz) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ClientError::validation("Datetime value is required"));
    }

    let naive = DATETIME_LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| ClientError::validation("Invalid datetime value"))?;

    let instant = match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        // Skipped by a DST jump: read it as if the clocks had not moved yet
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .ok_or_else(|| ClientError::validation("Invalid datetime value"))?,
    };

    Ok(instant
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Renders a server timestamp in the viewer's local time, e.g. `5/1/2024, 10:00:00 AM`.
/// Unparsable input is returned unchanged.
pub fn format_local_datetime(iso: &str) -> String {
    format_datetime_in(iso, &Local)
}

pub fn format_datetime_in<Tz: TimeZone>(iso: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt
            .with_timezone(tz)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
        Err(_) => iso.to_string(),
    }
}
