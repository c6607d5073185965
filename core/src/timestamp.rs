use std::ops::Range;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::error::TimestampError;

/// chrono format string equivalent of the source pattern `yyyy-MM-dd HH:mm:ss`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TIMESTAMP_LEN: usize = 19;

/// Parse the wall-clock part of a timestamp without attaching a time zone.
///
/// The shape is checked byte by byte before any number is read, so inputs
/// chrono would accept leniently (single digit months, signed years,
/// trailing text) are rejected here.
pub fn parse_naive(raw: &str) -> Result<NaiveDateTime, TimestampError> {
    let b = raw.as_bytes();
    if b.len() != TIMESTAMP_LEN {
        return Err(TimestampError::Pattern(raw.to_string()));
    }
    for (i, c) in b.iter().enumerate() {
        let ok = match i {
            4 | 7 => *c == b'-',
            10 => *c == b' ',
            13 | 16 => *c == b':',
            _ => c.is_ascii_digit(),
        };
        if !ok {
            return Err(TimestampError::Pattern(raw.to_string()));
        }
    }

    let num = |r: Range<usize>| -> u32 {
        b[r].iter().fold(0u32, |acc, d| acc * 10 + u32::from(d - b'0'))
    };

    let date = NaiveDate::from_ymd_opt(num(0..4) as i32, num(5..7), num(8..10))
        .ok_or_else(|| TimestampError::InvalidDate(raw.to_string()))?;
    let time = NaiveTime::from_hms_opt(num(11..13), num(14..16), num(17..19))
        .ok_or_else(|| TimestampError::InvalidTime(raw.to_string()))?;

    Ok(date.and_time(time))
}

/// Attach `tz` to a wall-clock time.
///
/// Ambiguous times (clock turned back) take the earliest instant. Times in a
/// spring-forward gap are moved one hour later, which lands after the gap for
/// every real-world DST rule.
pub fn resolve_local<Tz: TimeZone>(naive: &NaiveDateTime, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Some(dt) = tz.from_local_datetime(naive).earliest() {
        return Some(dt);
    }
    let shifted = naive.checked_add_signed(Duration::hours(1))?;
    tz.from_local_datetime(&shifted).earliest()
}

/// Parse a `yyyy-MM-dd HH:mm:ss` timestamp as local time in `tz`.
pub fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Result<DateTime<Tz>, TimestampError> {
    let naive = parse_naive(raw)?;
    resolve_local(&naive, tz).ok_or_else(|| TimestampError::NonexistentLocalTime(raw.to_string()))
}

pub fn format_timestamp<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant.naive_local().format(TIMESTAMP_FORMAT).to_string()
}
