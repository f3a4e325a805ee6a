//! Parsing and display of scan timestamps.
//!
//! Display is `MM/DD/YYYY HH:mm`, 24-hour, with no locale-dependent
//! separators. The offset used for display is fixed per run (UTC unless
//! configured otherwise).

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};

const DISPLAY_PATTERN: &str = "%m/%d/%Y %H:%M";

/// ISO-8601 shapes RFC 3339 does not cover. `%#z` takes `Z`, `+09`,
/// `+0900` and `+09:00`.
const OFFSET_PATTERNS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y%m%dT%H%M%S%#z",
    "%Y%m%dT%H%M%#z",
];

const NAIVE_PATTERNS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y%m%dT%H%M%S",
];

/// Parses an ISO-8601 timestamp.
///
/// Accepted, in order: RFC 3339, other offset-carrying ISO-8601 forms
/// (minute precision, colon-less offsets, basic format), a naive date-time
/// (taken as UTC), and a bare date (midnight UTC). Anything else yields `None`.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for pattern in OFFSET_PATTERNS {
        if let Ok(dt) = DateTime::parse_from_str(value, pattern) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for pattern in NAIVE_PATTERNS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, pattern) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parses a fixed UTC offset such as `+09:00`, `-0530` or `Z`.
pub fn parse_utc_offset(value: &str) -> Result<FixedOffset, String> {
    let invalid = || {
        format!(
            "Invalid UTC offset: {}. Please specify it as +HH:MM or -HH:MM (e.g. +09:00)",
            value
        )
    };

    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let (sign, rest) = match trimmed.chars().next() {
        Some('+') => (1, &trimmed[1..]),
        Some('-') => (-1, &trimmed[1..]),
        _ => return Err(invalid()),
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: i32 = digits[..2].parse().map_err(|_| invalid())?;
    let minutes: i32 = digits[2..].parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// Renders instants for the `updates` column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampFormat {
    offset: FixedOffset,
}

impl TimestampFormat {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self::default()
    }

    pub fn format(&self, instant: &DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.offset)
            .format(DISPLAY_PATTERN)
            .to_string()
    }
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }
}
