//! Date formatting helpers
//!
//! Inputs are ISO-8601 strings as sent by the service (`2024-03-01`,
//! `2024-03-01T10:30:00`, `2024-03-01T10:30:00Z`, `...+03:30`). Values with
//! an offset are normalized to UTC. Missing or unparsable input renders as
//! `-`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::fmt::Write;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";
pub const DISPLAY_DATETIME_FORMAT: &str = "%b %d, %Y %H:%M";

/// Placeholder for absent or invalid dates
pub const EMPTY: &str = "-";

const SECS_PER_DAY: i64 = 86_400;

/// Parse an ISO-8601 date or date-time
pub fn parse_iso(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Format with a chrono pattern; invalid patterns render as `-`
pub fn format_date(value: Option<&str>, pattern: &str) -> String {
    let Some(dt) = value.and_then(parse_iso) else {
        return EMPTY.to_string();
    };
    let mut out = String::new();
    match write!(out, "{}", dt.format(pattern)) {
        Ok(()) => out,
        Err(_) => EMPTY.to_string(),
    }
}

/// `Mar 01, 2024`
pub fn format_display_date(value: Option<&str>) -> String {
    format_date(value, DISPLAY_DATE_FORMAT)
}

/// `Mar 01, 2024 10:30`
pub fn format_date_time(value: Option<&str>) -> String {
    format_date(value, DISPLAY_DATETIME_FORMAT)
}

/// Distance from `now` in words, e.g. `3 days ago` or `in about 2 hours`
pub fn format_relative_time(value: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(dt) = value.and_then(parse_iso) else {
        return EMPTY.to_string();
    };
    let delta = dt.and_utc().signed_duration_since(now).num_seconds();
    let words = distance_in_words(delta.unsigned_abs());
    if delta < 0 {
        format!("{words} ago")
    } else {
        format!("in {words}")
    }
}

/// [`format_relative_time`] against the current clock
pub fn format_relative_time_now(value: Option<&str>) -> String {
    format_relative_time(value, Utc::now())
}

fn distance_in_words(seconds: u64) -> String {
    let minutes = (seconds as f64 / 60.0).round() as u64;
    match minutes {
        0 if seconds < 30 => "less than a minute".to_string(),
        0 | 1 => "1 minute".to_string(),
        2..45 => format!("{minutes} minutes"),
        45..90 => "about 1 hour".to_string(),
        90..1440 => format!("about {} hours", (minutes as f64 / 60.0).round() as u64),
        1440..2520 => "1 day".to_string(),
        2520..43200 => format!("{} days", (minutes as f64 / 1440.0).round() as u64),
        43200..86400 => "about 1 month".to_string(),
        86400..525600 => format!("{} months", (minutes as f64 / 43200.0).round() as u64),
        _ => {
            let years = minutes / 525_600;
            if years <= 1 {
                "about 1 year".to_string()
            } else {
                format!("about {years} years")
            }
        }
    }
}

/// Whole days between two dates, rounded up. Invalid input yields 0.
pub fn days_between(start: &str, end: &str) -> i64 {
    match (parse_iso(start), parse_iso(end)) {
        (Some(start), Some(end)) => whole_days(start, end),
        _ => 0,
    }
}

/// Days from `start` until `now`, rounded up. Invalid input yields 0.
pub fn days_since_at(start: &str, now: DateTime<Utc>) -> i64 {
    parse_iso(start).map_or(0, |start| whole_days(start, now.naive_utc()))
}

/// [`days_since_at`] against the current clock
pub fn days_since(start: &str) -> i64 {
    days_since_at(start, Utc::now())
}

fn whole_days(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let secs = (end - start).num_seconds().abs();
    (secs + SECS_PER_DAY - 1) / SECS_PER_DAY
}
