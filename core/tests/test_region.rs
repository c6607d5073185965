// core/tests/test_region.rs
use workout_calendar_core::region::{DEFAULT_SPAN_DEG, MIN_SPAN_DEG, SPAN_PADDING};
use workout_calendar_core::{region_for, route_markers, GeoCoordinate, GeoRegion, MarkerKind};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn empty_route_gives_default_region() {
    let region = region_for(&[]);
    assert_eq!(region, GeoRegion::default_region());
    assert!(close(region.center_lat, 55.7558));
    assert!(close(region.center_lon, 37.6173));
    assert!(close(region.lat_span, DEFAULT_SPAN_DEG));
    assert!(close(region.lon_span, 0.1));
    assert!(route_markers(&[]).is_empty());
}

#[test]
fn single_point_uses_the_floor_span() {
    let p = GeoCoordinate::new(55.7558, 37.6173);
    let region = region_for(&[p]);

    assert!(close(region.center_lat, 55.7558));
    assert!(close(region.center_lon, 37.6173));
    assert!(close(region.lat_span, MIN_SPAN_DEG));
    assert!(close(region.lon_span, 0.01));

    let markers = route_markers(&[p]);
    assert_eq!(markers.len(), 1, "single point gets only a start marker");
    assert_eq!(markers[0].kind, MarkerKind::Start);
}

#[test]
fn wide_route_is_padded() {
    let coords = [
        GeoCoordinate::new(55.70, 37.50),
        GeoCoordinate::new(55.80, 37.70),
        GeoCoordinate::new(55.75, 37.60),
    ];
    let region = region_for(&coords);

    assert!(close(region.center_lat, 55.75));
    assert!(close(region.center_lon, 37.60));
    assert!(close(region.lat_span, (55.80 - 55.70) * SPAN_PADDING));
    assert!(close(region.lon_span, (37.70 - 37.50) * 1.3));
}

#[test]
fn narrow_axis_falls_back_to_floor_independently() {
    // east-west line: latitude extent is zero
    let coords = [GeoCoordinate::new(10.0, 20.0), GeoCoordinate::new(10.0, 21.0)];
    let region = region_for(&coords);

    assert!(close(region.lat_span, MIN_SPAN_DEG));
    assert!(close(region.lon_span, 1.3));
}

#[test]
fn two_distinct_points_get_start_and_finish() {
    let start = GeoCoordinate::new(55.7558, 37.6173);
    let end = GeoCoordinate::new(55.7562, 37.6177);
    let markers = route_markers(&[start, end]);

    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].kind, MarkerKind::Start);
    assert_eq!(markers[0].coordinate, start);
    assert_eq!(markers[1].kind, MarkerKind::Finish);
    assert_eq!(markers[1].coordinate, end);
}

#[test]
fn repeated_single_location_has_no_finish() {
    let p = GeoCoordinate::new(1.0, 2.0);
    let markers = route_markers(&[p, p, p]);
    assert_eq!(markers.len(), 1);
}

#[test]
fn loop_route_still_gets_a_finish() {
    let home = GeoCoordinate::new(1.0, 2.0);
    let away = GeoCoordinate::new(1.1, 2.1);
    let markers = route_markers(&[home, away, home]);

    assert_eq!(markers.len(), 2);
    assert_eq!(markers[1].kind, MarkerKind::Finish);
    assert_eq!(markers[1].coordinate, home);
}
