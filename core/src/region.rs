use ordered_float::OrderedFloat;
use serde::Serialize;

/// Shown when a workout has no route.
pub const DEFAULT_CENTER: GeoCoordinate = GeoCoordinate {
    latitude: 55.7558,
    longitude: 37.6173,
};
pub const DEFAULT_SPAN_DEG: f64 = 0.1;
/// Padding factor applied to the route extent.
pub const SPAN_PADDING: f64 = 1.3;
/// Floor so that single-point routes still get a usable viewport.
pub const MIN_SPAN_DEG: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Map viewport: center plus latitude/longitude span in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoRegion {
    pub center_lat: f64,
    pub center_lon: f64,
    pub lat_span: f64,
    pub lon_span: f64,
}

impl GeoRegion {
    pub fn default_region() -> Self {
        Self {
            center_lat: DEFAULT_CENTER.latitude,
            center_lon: DEFAULT_CENTER.longitude,
            lat_span: DEFAULT_SPAN_DEG,
            lon_span: DEFAULT_SPAN_DEG,
        }
    }

    pub fn center(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.center_lat, self.center_lon)
    }
}

impl Default for GeoRegion {
    fn default() -> Self {
        Self::default_region()
    }
}

fn min_max<I: Iterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    values.map(OrderedFloat).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
    .map(|(lo, hi)| (lo.into_inner(), hi.into_inner()))
}

fn padded_span(lo: f64, hi: f64) -> f64 {
    ((hi - lo) * SPAN_PADDING).max(MIN_SPAN_DEG)
}

/// Viewport covering every coordinate, padded by [`SPAN_PADDING`] and never
/// narrower than [`MIN_SPAN_DEG`]. Empty input gives [`GeoRegion::default_region`].
pub fn region_for(coords: &[GeoCoordinate]) -> GeoRegion {
    let lat = min_max(coords.iter().map(|c| c.latitude));
    let lon = min_max(coords.iter().map(|c| c.longitude));

    match (lat, lon) {
        (Some((min_lat, max_lat)), Some((min_lon, max_lon))) => GeoRegion {
            center_lat: (min_lat + max_lat) / 2.0,
            center_lon: (min_lon + max_lon) / 2.0,
            lat_span: padded_span(min_lat, max_lat),
            lon_span: padded_span(min_lon, max_lon),
        },
        _ => GeoRegion::default_region(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Start,
    Finish,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteMarker {
    pub kind: MarkerKind,
    pub coordinate: GeoCoordinate,
}

/// Start marker on the first point; finish marker on the last point only
/// when the route has more than one distinct point.
pub fn route_markers(coords: &[GeoCoordinate]) -> Vec<RouteMarker> {
    let Some(first) = coords.first() else {
        return Vec::new();
    };
    let mut markers = vec![RouteMarker {
        kind: MarkerKind::Start,
        coordinate: *first,
    }];

    // loops back to start still count as moved
    let moved = coords.iter().any(|c| c != first);
    if let (true, Some(last)) = (moved, coords.last()) {
        markers.push(RouteMarker {
            kind: MarkerKind::Finish,
            coordinate: *last,
        });
    }
    markers
}
