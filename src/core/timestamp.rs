//! Rendering of `data-timestamp` values.
//!
//! Accepted inputs, tried in order:
//! - an all-digit epoch value (optionally signed): seconds with up to 11 digits,
//!   milliseconds beyond that;
//! - RFC 3339 with `Z` or an explicit offset (`T` or a space between date and time);
//! - an offset-less date-time, read in the configured zone;
//! - a bare `YYYY-MM-DD` date, read as UTC midnight.

use crate::core::locale::Locale;
use crate::domain::model::TimeZoneSetting;
use crate::utils::error::{FormatError, Result};
use crate::utils::validation::validate_non_empty_string;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Epoch strings longer than this are taken as milliseconds.
const MAX_EPOCH_SECONDS_DIGITS: usize = 11;

const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

pub fn parse_timestamp(raw: &str, zone: &TimeZoneSetting) -> Result<DateTime<Utc>> {
    let trimmed = validate_non_empty_string("timestamp", raw)?;

    if let Some(parsed) = parse_epoch(trimmed) {
        return parsed;
    }

    let normalized = normalize_separator(trimmed);

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, format) {
            return resolve_naive(naive, zone, trimmed);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(FormatError::invalid_argument(
        "timestamp",
        trimmed,
        "expected an ISO-8601 date/time or an epoch value",
    ))
}

/// `None` when `raw` is not an epoch string at all.
fn parse_epoch(raw: &str) -> Option<Result<DateTime<Utc>>> {
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let out_of_range = || {
        FormatError::invalid_argument("timestamp", raw, "epoch value is out of range")
    };
    let value: i64 = match raw.parse() {
        Ok(v) => v,
        Err(_) => return Some(Err(out_of_range())),
    };

    let parsed = if digits.len() > MAX_EPOCH_SECONDS_DIGITS {
        DateTime::from_timestamp_millis(value)
    } else {
        DateTime::from_timestamp(value, 0)
    };
    Some(parsed.ok_or_else(out_of_range))
}

/// `2024-01-02 15:04:05` → `2024-01-02T15:04:05`.
fn normalize_separator(raw: &str) -> String {
    let bytes = raw.as_bytes();
    if bytes.len() > 10 && bytes[10] == b' ' && bytes[4] == b'-' {
        format!("{}T{}", &raw[..10], &raw[11..])
    } else {
        raw.to_string()
    }
}

fn resolve_naive(naive: NaiveDateTime, zone: &TimeZoneSetting, raw: &str) -> Result<DateTime<Utc>> {
    let resolved = match zone {
        TimeZoneSetting::Utc => Some(naive.and_utc()),
        TimeZoneSetting::Fixed(offset) => offset
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc)),
        // DST 重疊時取較早的時間，跳過的時段則無對應
        TimeZoneSetting::Local => Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc)),
    };

    resolved.ok_or_else(|| {
        FormatError::invalid_argument("timestamp", raw, "local time does not exist in this zone")
    })
}

/// Renders an instant with the locale's date-time pattern, in `zone`.
pub fn render_datetime(instant: &DateTime<Utc>, locale: &Locale, zone: &TimeZoneSetting) -> String {
    let pattern = locale.date_time_pattern;
    match zone {
        TimeZoneSetting::Utc => instant.format(pattern).to_string(),
        TimeZoneSetting::Fixed(offset) => instant.with_timezone(offset).format(pattern).to_string(),
        TimeZoneSetting::Local => instant.with_timezone(&Local).format(pattern).to_string(),
    }
}

pub fn format_timestamp(raw: &str, locale: &Locale, zone: &TimeZoneSetting) -> Result<String> {
    let instant = parse_timestamp(raw, zone)?;
    Ok(render_datetime(&instant, locale, zone))
}
