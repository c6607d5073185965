// core/tests/test_timestamp.rs
use chrono::{FixedOffset, TimeZone, Timelike, Utc};
use chrono_tz::America::New_York;
use chrono_tz::Europe::Moscow;

use workout_calendar_core::timestamp::{format_timestamp, parse_timestamp};
use workout_calendar_core::{day_key, CalendarDate, TimestampError};

#[test]
fn same_day_timestamps_share_a_day_key() {
    let tz = Moscow;
    let morning = parse_timestamp("2025-11-25 09:30:00", &tz).expect("morning parses");
    let late = parse_timestamp("2025-11-25 23:59:59", &tz).expect("late parses");

    assert_eq!(day_key(&morning), day_key(&late));
    assert_eq!(day_key(&morning), CalendarDate::from_ymd(2025, 11, 25).unwrap());
}

#[test]
fn invalid_strings_fail() {
    let tz = Utc;
    assert!(matches!(
        parse_timestamp("invalid-date", &tz),
        Err(TimestampError::Pattern(_))
    ));
    assert!(matches!(
        parse_timestamp("2025-13-01 10:00:00", &tz),
        Err(TimestampError::InvalidDate(_))
    ));
    assert!(matches!(
        parse_timestamp("2025-11-31 10:00:00", &tz),
        Err(TimestampError::InvalidDate(_))
    ));
    assert!(matches!(
        parse_timestamp("2025-11-25 10:61:00", &tz),
        Err(TimestampError::InvalidTime(_))
    ));
}

#[test]
fn wall_clock_is_interpreted_in_the_given_zone() {
    // 01:30 local in UTC+3 is 22:30 UTC the previous day
    let plus3 = FixedOffset::east_opt(3 * 3600).unwrap();
    let local = parse_timestamp("2025-12-01 01:30:00", &plus3).unwrap();

    assert_eq!(day_key(&local), CalendarDate::from_ymd(2025, 12, 1).unwrap());
    let as_utc = local.with_timezone(&Utc);
    assert_eq!(day_key(&as_utc), CalendarDate::from_ymd(2025, 11, 30).unwrap());
    assert_eq!(as_utc, Utc.with_ymd_and_hms(2025, 11, 30, 22, 30, 0).unwrap());
}

#[test]
fn dst_gap_moves_forward_and_overlap_takes_earliest() {
    // 2025-03-09 02:30 does not exist in New York
    let gap = parse_timestamp("2025-03-09 02:30:00", &New_York).expect("gap resolves");
    assert_eq!(gap.hour(), 3);
    assert_eq!(gap.minute(), 30);
    assert_eq!(day_key(&gap), CalendarDate::from_ymd(2025, 3, 9).unwrap());

    // 2025-11-02 01:30 happens twice; earliest is still on EDT (UTC-4)
    let overlap = parse_timestamp("2025-11-02 01:30:00", &New_York).unwrap();
    assert_eq!(
        overlap.with_timezone(&Utc),
        Utc.with_ymd_and_hms(2025, 11, 2, 5, 30, 0).unwrap()
    );
}

#[test]
fn format_round_trips_the_wall_clock() {
    let tz = FixedOffset::west_opt(5 * 3600).unwrap();
    let raw = "2024-02-29 07:05:09";
    let parsed = parse_timestamp(raw, &tz).unwrap();
    assert_eq!(format_timestamp(&parsed), raw);
}

#[test]
fn parsing_ignores_process_locale_and_zone() {
    // the result depends only on the explicit zone
    let a = parse_timestamp("2025-11-25 09:30:00", &Utc).unwrap();
    let b = parse_timestamp("2025-11-25 09:30:00", &Utc).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.timestamp(), 1_764_063_000);
}
