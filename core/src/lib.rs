//! Calendar grid and workout aggregation core.
//!
//! Pure functions over an already-loaded snapshot: workouts are bucketed by
//! local calendar day, laid out on a 42-cell month grid, and a selected
//! workout's samples are reduced to heart-rate/speed summaries and a map
//! region. Clock and time zone are always passed in.

pub mod aggregate;
pub mod bucket;
pub mod config;
pub mod day;
pub mod detail;
pub mod error;
pub mod grid;
pub mod models;
pub mod region;
pub mod source;
pub mod timestamp;

pub use aggregate::{Projection, SampleSeries, Summary, SummaryValue};
pub use bucket::{group_by_day, WorkoutsByDay};
pub use config::{load_config, save_config, ViewerConfig};
pub use day::{day_key, CalendarDate, YearMonth};
pub use detail::WorkoutDetail;
pub use error::{CalendarParseError, ConfigError, LoadError, TimestampError};
pub use grid::{build_grid, CalendarCell, CalendarState, MonthGrid, GRID_CELLS};
pub use models::{ActivityKind, SamplePoint, WorkoutMetadata, WorkoutRecord};
pub use region::{region_for, route_markers, GeoCoordinate, GeoRegion, MarkerKind, RouteMarker};
pub use source::WorkoutSnapshot;
pub use timestamp::parse_timestamp;
