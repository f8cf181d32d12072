use crate::utils::error::{FormatError, Result};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single value to format, as read from batch input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormatRequest {
    Bytes {
        value: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        decimals: Option<i32>,
    },
    Duration {
        value: f64,
    },
    Currency {
        value: f64,
    },
    Number {
        value: f64,
    },
    Timestamp {
        value: String,
    },
}

impl FormatRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            FormatRequest::Bytes { .. } => "bytes",
            FormatRequest::Duration { .. } => "duration",
            FormatRequest::Currency { .. } => "currency",
            FormatRequest::Number { .. } => "number",
            FormatRequest::Timestamp { .. } => "timestamp",
        }
    }
}

/// Result of one batch entry. Exactly one of `output` and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatOutcome {
    pub request: FormatRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FormatOutcome {
    pub fn from_result(request: FormatRequest, result: Result<String>) -> Self {
        match result {
            Ok(output) => Self {
                request,
                output: Some(output),
                error: None,
            },
            Err(e) => Self {
                request,
                output: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Counters returned by `Formatter::render_timestamps`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RenderSummary {
    pub rendered: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Zone used to interpret offset-less timestamps and to render all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeZoneSetting {
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl FromStr for TimeZoneSetting {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(TimeZoneSetting::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed == "Z" {
            return Ok(TimeZoneSetting::Utc);
        }
        parse_offset(trimmed)
            .map(TimeZoneSetting::Fixed)
            .ok_or_else(|| FormatError::InvalidConfigValueError {
                field: "timezone".to_string(),
                value: s.to_string(),
                reason: "Expected `local`, `utc` or an offset like `+02:00`".to_string(),
            })
    }
}

/// `+HH:MM`, `-HHMM` or `+HH`.
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

impl fmt::Display for TimeZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneSetting::Local => f.write_str("local"),
            TimeZoneSetting::Utc => f.write_str("utc"),
            TimeZoneSetting::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

impl TryFrom<String> for TimeZoneSetting {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimeZoneSetting> for String {
    fn from(value: TimeZoneSetting) -> Self {
        value.to_string()
    }
}
