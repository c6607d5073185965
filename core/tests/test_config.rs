// core/tests/test_config.rs
use chrono::{Utc, Weekday};
use workout_calendar_core::{group_by_day, load_config, save_config, ViewerConfig, WorkoutRecord};

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = load_config(dir.path().join("viewer.json")).expect("defaults");

    assert_eq!(cfg, ViewerConfig::default());
    assert_eq!(cfg.first_weekday, Weekday::Mon);
    assert_eq!(cfg.utc_offset_minutes, 0);
}

#[test]
fn save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("viewer.json");

    let cfg = ViewerConfig {
        first_weekday: Weekday::Sun,
        utc_offset_minutes: 180,
        default_activity_filter: Some("Yoga".to_string()),
    };
    save_config(&cfg, &path).expect("save_config");
    let loaded = load_config(&path).expect("load_config");

    assert_eq!(loaded, cfg);
    assert_eq!(loaded.time_zone().local_minus_utc(), 180 * 60);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("viewer.json");
    std::fs::write(&path, r#"{ "first_weekday": "Sun" }"#).unwrap();

    let cfg = load_config(&path).unwrap();
    assert_eq!(cfg.first_weekday, Weekday::Sun);
    assert_eq!(cfg.utc_offset_minutes, 0);
    assert!(cfg.default_activity_filter.is_none());
}

#[test]
fn broken_json_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("viewer.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(load_config(&path).is_err());
}

#[test]
fn out_of_range_offset_falls_back_to_utc() {
    let cfg = ViewerConfig {
        utc_offset_minutes: 48 * 60,
        ..ViewerConfig::default()
    };
    assert_eq!(cfg.time_zone().local_minus_utc(), 0);
}

#[test]
fn offset_drives_bucketing_through_the_config() {
    let cfg = ViewerConfig {
        utc_offset_minutes: -300,
        ..ViewerConfig::default()
    };
    let workouts = vec![WorkoutRecord::new("1", "Yoga", "2025-11-25 23:30:00")];
    let index = group_by_day(&workouts, &cfg.time_zone());
    assert_eq!(index.days().next().map(|d| d.day()), Some(25));
    // stored wall-clock is local, so UTC agrees
    assert_eq!(group_by_day(&workouts, &Utc).days().next(), index.days().next());
}

#[test]
fn activity_filter() {
    let mut cfg = ViewerConfig::default();
    assert!(cfg.accepts_activity("Cycling"));
    cfg.default_activity_filter = Some("Yoga".into());
    assert!(cfg.accepts_activity("Yoga"));
    assert!(!cfg.accepts_activity("Cycling"));
}
