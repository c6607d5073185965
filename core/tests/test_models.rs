// core/tests/test_models.rs
use std::collections::HashSet;

use chrono::Utc;
use workout_calendar_core::{ActivityKind, CalendarDate, WorkoutMetadata, WorkoutRecord};

fn metadata(distance: &str, duration: &str) -> WorkoutMetadata {
    WorkoutMetadata {
        workout_id: "w1".into(),
        activity_type: "Cycling".into(),
        start_timestamp: "2025-11-24 14:00:00".into(),
        distance: distance.into(),
        duration: duration.into(),
        max_layer: 0,
        max_sub_layer: 0,
        avg_humidity: "55.5".into(),
        avg_temp: "n/a".into(),
        comment: None,
        photo_before: None,
        photo_after: None,
        heart_rate_graph: None,
        activity_graph: None,
        map: None,
    }
}

#[test]
fn workout_equality_is_by_id_only() {
    let a = WorkoutRecord::new("42", "Yoga", "2025-11-25 09:30:00");
    let b = WorkoutRecord::new("42", "Cycling", "invalid-date");
    let c = WorkoutRecord::new("43", "Yoga", "2025-11-25 09:30:00");

    assert_eq!(a, b);
    assert_ne!(a, c);

    let set: HashSet<WorkoutRecord> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn workout_json_uses_source_keys() {
    let raw = r#"{"workoutKey":"k1","workoutActivityType":"Water","workoutStartDate":"2025-11-25 09:30:00"}"#;
    let w: WorkoutRecord = serde_json::from_str(raw).unwrap();

    assert_eq!(w.id, "k1");
    assert_eq!(w.activity_kind(), ActivityKind::Water);
    assert_eq!(w.day_key(&Utc), CalendarDate::from_ymd(2025, 11, 25));
}

#[test]
fn activity_kinds() {
    assert_eq!(ActivityKind::from("Walking/Running"), ActivityKind::WalkingRunning);
    assert_eq!(ActivityKind::from("Strength"), ActivityKind::Strength);
    assert_eq!(ActivityKind::from("Skiing"), ActivityKind::Other);
    assert_eq!(ActivityKind::Cycling.icon_name(), "bicycle");
    assert_eq!(ActivityKind::Other.icon_name(), "figure.fitness");
}

#[test]
fn metadata_distance_and_duration() {
    let m = metadata("5230.50", "3900");
    assert!((m.distance_km() - 5.2305).abs() < 1e-9);
    assert_eq!(m.duration_minutes(), 65);
    assert_eq!(m.duration_parts(), (1, 5));
    assert_eq!(m.formatted_duration(), "1h 5m");

    let short = metadata("0", "2699");
    assert_eq!(short.duration_minutes(), 44);
    assert_eq!(short.formatted_duration(), "44m");
}

#[test]
fn metadata_unparseable_numbers_degrade() {
    let m = metadata("far", "long");
    assert_eq!(m.distance_km(), 0.0);
    assert_eq!(m.duration_minutes(), 0);
    assert_eq!(m.formatted_duration(), "0m");
    assert_eq!(m.avg_temp_celsius(), None);
    assert_eq!(m.avg_humidity_percent(), Some(55.5));
}

#[test]
fn metadata_start_uses_the_same_parser() {
    let m = metadata("0", "0");
    assert!(m.start_instant(&Utc).is_ok());
    assert_eq!(m.activity_kind(), ActivityKind::Cycling);
}
