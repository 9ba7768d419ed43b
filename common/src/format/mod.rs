//! Timestamp formatting for the jobs table.
//!
//! Timestamps arrive as RFC 3339 strings and are shown in the viewer's time
//! zone. Zoneless ISO timestamps (`2020-01-01T00:00:00`) are read as wall
//! time in that same zone. A timestamp that is missing (the job has not reached that stage) or
//! unreadable is shown as [`INVALID_DATE`].

use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone};

pub const INVALID_DATE: &str = "Invalid date";

const ZONELESS_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses an API timestamp and moves it into `tz`.
pub fn parse_timestamp<Tz: TimeZone>(raw: Option<&str>, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(tz));
    }
    ZONELESS_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
}

/// Day label such as `Wed 1st Jan`.
pub fn format_day<Tz: TimeZone>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match parse_timestamp(raw, tz) {
        Some(ts) => format!(
            "{} {}{} {}",
            ts.format("%a"),
            ts.day(),
            ordinal_suffix(ts.day()),
            ts.format("%b")
        ),
        None => INVALID_DATE.to_string(),
    }
}

/// Wall-clock time such as `14:05:09`.
pub fn format_time<Tz: TimeZone>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match parse_timestamp(raw, tz) {
        Some(ts) => ts.format("%H:%M:%S").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn day_and_time_in_utc() {
        let raw = Some("2020-01-01T00:00:00Z");
        assert_eq!(format_day(raw, &Utc), "Wed 1st Jan");
        assert_eq!(format_time(raw, &Utc), "00:00:00");
    }

    #[test]
    fn viewer_offset_is_applied() {
        let east = FixedOffset::east_opt(2 * 3600).unwrap();
        let raw = Some("2020-03-22T23:30:15Z");
        assert_eq!(format_day(raw, &east), "Mon 23rd Mar");
        assert_eq!(format_time(raw, &east), "01:30:15");
    }

    #[test]
    fn zoneless_timestamps_are_local_wall_time() {
        let east = FixedOffset::east_opt(2 * 3600).unwrap();
        for raw in [
            Some("2020-01-01T00:00:00"),
            Some("2020-01-01T00:00:00.250"),
            Some("2020-01-01 00:00:00"),
        ] {
            assert_eq!(format_day(raw, &east), "Wed 1st Jan");
            assert_eq!(format_time(raw, &east), "00:00:00");
        }
    }

    #[test]
    fn missing_or_garbled_timestamps_are_invalid() {
        for raw in [None, Some(""), Some("   "), Some("yesterday"), Some("2020-13-01T00:00:00")] {
            assert_eq!(format_time(raw, &Utc), INVALID_DATE);
            assert_eq!(format_day(raw, &Utc), INVALID_DATE);
        }
    }

    #[test]
    fn ordinals() {
        let suffixes: Vec<_> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 31]
            .into_iter()
            .map(ordinal_suffix)
            .collect();
        assert_eq!(
            suffixes,
            vec!["st", "nd", "rd", "th", "th", "th", "th", "st", "nd", "rd", "st"]
        );
    }
}
