// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Formats a duration in seconds into a human-readable `MM:SS` string.
///
/// This is used for scan durations in the scan history.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_time(65), "01:05");
/// assert_eq!(format_time(3600), "60:00");
/// ```
pub(crate) fn format_time(total_seconds: u64) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Formats a count with thousands separators, e.g. `1,234,567`.
pub(crate) fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parses a backend timestamp.
///
/// Accepts RFC 3339, or a naive ISO 8601 date-time (or bare date) which is
/// taken to be in the local time zone.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Describes how long ago `timestamp` was, relative to `now`.
///
/// | elapsed        | label                 |
/// |----------------|-----------------------|
/// | absent         | `Never`               |
/// | under a minute | `Just now`            |
/// | under an hour  | `{n} minute(s) ago`   |
/// | under a day    | `{n} hour(s) ago`     |
/// | under a week   | `{n} day(s) ago`      |
/// | otherwise      | local date `M/D/YYYY` |
///
/// Quantities are whole units rounded down, and the unit is singular only
/// for exactly 1. A timestamp that cannot be parsed is returned verbatim.
pub(crate) fn format_relative(timestamp: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(raw) = timestamp.filter(|t| !t.trim().is_empty()) else {
        return "Never".to_string();
    };

    let Some(then) = parse_timestamp(raw) else {
        return raw.to_string();
    };

    let elapsed = now.signed_duration_since(then);
    let mins = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if mins < 1 {
        "Just now".to_string()
    } else if mins < 60 {
        format!("{} ago", plural(mins, "minute"))
    } else if hours < 24 {
        format!("{} ago", plural(hours, "hour"))
    } else if days < 7 {
        format!("{} ago", plural(days, "day"))
    } else {
        format_date(then)
    }
}

/// Formats the calendar date of a timestamp in the local time zone.
pub(crate) fn format_date(when: DateTime<Utc>) -> String {
    when.with_timezone(&Local).format("%-m/%-d/%Y").to_string()
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}
