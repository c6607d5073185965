use std::hash::{Hash, Hasher};

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::day::{day_key, CalendarDate};
use crate::error::TimestampError;
use crate::timestamp::parse_timestamp;

/// One entry of the workout list.
///
/// Identity is the `id` alone: two records with the same id are the same
/// workout even if the other fields differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRecord {
    #[serde(rename = "workoutKey")]
    pub id: String,
    #[serde(rename = "workoutActivityType")]
    pub activity_type: String,
    /// `yyyy-MM-dd HH:mm:ss`, local time
    #[serde(rename = "workoutStartDate")]
    pub start_timestamp: String,
}

impl WorkoutRecord {
    pub fn new(
        id: impl Into<String>,
        activity_type: impl Into<String>,
        start_timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            activity_type: activity_type.into(),
            start_timestamp: start_timestamp.into(),
        }
    }

    pub fn start_instant<Tz: TimeZone>(&self, tz: &Tz) -> Result<DateTime<Tz>, TimestampError> {
        parse_timestamp(&self.start_timestamp, tz)
    }

    /// Day bucket of this workout, `None` when the timestamp does not parse.
    pub fn day_key<Tz: TimeZone>(&self, tz: &Tz) -> Option<CalendarDate> {
        self.start_instant(tz).ok().map(|dt| day_key(&dt))
    }

    pub fn activity_kind(&self) -> ActivityKind {
        ActivityKind::from(self.activity_type.as_str())
    }
}

impl PartialEq for WorkoutRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for WorkoutRecord {}

impl Hash for WorkoutRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Activity categories known to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    WalkingRunning,
    Cycling,
    Yoga,
    Water,
    Strength,
    Other,
}

impl ActivityKind {
    /// Symbol name a presentation layer can map to an icon.
    pub fn icon_name(self) -> &'static str {
        match self {
            ActivityKind::WalkingRunning => "figure.run",
            ActivityKind::Cycling => "bicycle",
            ActivityKind::Yoga => "figure.yoga",
            ActivityKind::Water => "drop.fill",
            ActivityKind::Strength => "dumbbell.fill",
            ActivityKind::Other => "figure.fitness",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::WalkingRunning => "Walking/Running",
            ActivityKind::Cycling => "Cycling",
            ActivityKind::Yoga => "Yoga",
            ActivityKind::Water => "Water",
            ActivityKind::Strength => "Strength",
            ActivityKind::Other => "Other",
        }
    }
}

impl From<&str> for ActivityKind {
    fn from(raw: &str) -> Self {
        match raw {
            "Walking/Running" => ActivityKind::WalkingRunning,
            "Cycling" => ActivityKind::Cycling,
            "Yoga" => ActivityKind::Yoga,
            "Water" => ActivityKind::Water,
            "Strength" => ActivityKind::Strength,
            _ => ActivityKind::Other,
        }
    }
}

/// One recorded sample of a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    #[serde(rename = "time_numeric")]
    pub time_offset_seconds: f64, // seconds from start
    #[serde(rename = "heartRate")]
    pub heart_rate_bpm: i32,
    #[serde(rename = "speed_kmh")]
    pub speed_kmh: f64,
    #[serde(rename = "distanceMeters", default)]
    pub distance_meters: f64,
    #[serde(default)]
    pub steps: i64,
    #[serde(default)]
    pub elevation: f64, // metres
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "temperatureCelsius", default)]
    pub temperature_celsius: f64,
    #[serde(rename = "currentLayer", default)]
    pub current_layer: i32,
    #[serde(rename = "currentSubLayer", default)]
    pub current_sub_layer: i32,
    #[serde(rename = "currentTimestamp", default)]
    pub current_timestamp: String,
}

impl SamplePoint {
    /// Sample with only the fields the aggregations read; the rest zeroed.
    pub fn basic(
        time_offset_seconds: f64,
        heart_rate_bpm: i32,
        speed_kmh: f64,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            time_offset_seconds,
            heart_rate_bpm,
            speed_kmh,
            distance_meters: 0.0,
            steps: 0,
            elevation: 0.0,
            latitude,
            longitude,
            temperature_celsius: 0.0,
            current_layer: 0,
            current_sub_layer: 0,
            current_timestamp: String::new(),
        }
    }
}

/// Per-workout summary metadata as stored in the metadata document.
///
/// Numeric quantities arrive as strings; the accessors degrade to zero or
/// `None` when a string is not a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutMetadata {
    #[serde(rename = "workoutKey")]
    pub workout_id: String,
    #[serde(rename = "workoutActivityType")]
    pub activity_type: String,
    #[serde(rename = "workoutStartDate")]
    pub start_timestamp: String,
    pub distance: String, // metres
    pub duration: String, // seconds
    #[serde(rename = "maxLayer", default)]
    pub max_layer: i32,
    #[serde(rename = "maxSubLayer", default)]
    pub max_sub_layer: i32,
    #[serde(rename = "avg_humidity", default)]
    pub avg_humidity: String,
    #[serde(rename = "avg_temp", default)]
    pub avg_temp: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(rename = "photoBefore", default)]
    pub photo_before: Option<String>,
    #[serde(rename = "photoAfter", default)]
    pub photo_after: Option<String>,
    #[serde(rename = "heartRateGraph", default)]
    pub heart_rate_graph: Option<String>,
    #[serde(rename = "activityGraph", default)]
    pub activity_graph: Option<String>,
    #[serde(default)]
    pub map: Option<String>,
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl WorkoutMetadata {
    pub fn distance_km(&self) -> f64 {
        parse_number(&self.distance).map_or(0.0, |m| m / 1000.0)
    }

    pub fn duration_minutes(&self) -> i64 {
        parse_number(&self.duration).map_or(0, |s| (s / 60.0) as i64)
    }

    pub fn duration_parts(&self) -> (i64, i64) {
        let minutes = self.duration_minutes();
        (minutes / 60, minutes % 60)
    }

    /// `"1h 5m"`, or `"45m"` under an hour.
    pub fn formatted_duration(&self) -> String {
        match self.duration_parts() {
            (0, _) => format!("{}m", self.duration_minutes()),
            (h, m) => format!("{h}h {m}m"),
        }
    }

    pub fn avg_temp_celsius(&self) -> Option<f64> {
        parse_number(&self.avg_temp)
    }

    pub fn avg_humidity_percent(&self) -> Option<f64> {
        parse_number(&self.avg_humidity)
    }

    pub fn start_instant<Tz: TimeZone>(&self, tz: &Tz) -> Result<DateTime<Tz>, TimestampError> {
        parse_timestamp(&self.start_timestamp, tz)
    }

    pub fn activity_kind(&self) -> ActivityKind {
        ActivityKind::from(self.activity_type.as_str())
    }
}
