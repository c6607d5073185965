use serde::Serialize;

use crate::aggregate::{SampleSeries, Summary};
use crate::models::{ActivityKind, SamplePoint, WorkoutMetadata, WorkoutRecord};
use crate::region::{region_for, route_markers, GeoCoordinate, GeoRegion, RouteMarker};

/// Everything the detail screen shows for one workout, derived in one pass.
///
/// Missing metadata stays `None`; missing samples give zero summaries, empty
/// series and the default map region.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutDetail {
    pub workout_id: String,
    pub activity_type: String,
    #[serde(skip)]
    pub activity_kind: ActivityKind,
    pub start_timestamp: String,
    pub metadata: Option<WorkoutMetadata>,
    pub heart_rate: Summary<i32>,
    pub speed: Summary<f64>,
    pub heart_rate_series: Vec<(f64, i32)>,
    pub speed_series: Vec<(f64, f64)>,
    pub route: Vec<GeoCoordinate>,
    pub region: GeoRegion,
    pub markers: Vec<RouteMarker>,
    pub duration_seconds: f64,
}

impl WorkoutDetail {
    pub fn derive(
        record: &WorkoutRecord,
        metadata: Option<&WorkoutMetadata>,
        samples: &[SamplePoint],
    ) -> Self {
        let series = SampleSeries::new(samples);
        let route = series.route_coordinates();
        let region = region_for(&route);
        let markers = route_markers(&route);

        Self {
            workout_id: record.id.clone(),
            activity_type: record.activity_type.clone(),
            activity_kind: record.activity_kind(),
            start_timestamp: record.start_timestamp.clone(),
            metadata: metadata.cloned(),
            heart_rate: series.heart_rate_summary(),
            speed: series.speed_summary(),
            heart_rate_series: series.heart_rate_series(),
            speed_series: series.speed_series(),
            route,
            region,
            markers,
            duration_seconds: series.duration_seconds(),
        }
    }

    pub fn has_samples(&self) -> bool {
        !self.heart_rate_series.is_empty()
    }
}
