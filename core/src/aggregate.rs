use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::models::SamplePoint;
use crate::region::GeoCoordinate;

/// Min / max / mean of one quantity over a sample series.
///
/// An empty series summarizes to all zeros.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary<T> {
    pub min: T,
    pub max: T,
    pub mean: T,
}

/// Quantities that can be summarized.
///
/// Integer quantities (heart rate) use a truncating integer mean, floating
/// quantities (speed) a floating mean.
pub trait SummaryValue: Copy + Sized {
    fn summarize<I: Iterator<Item = Self>>(values: I) -> Summary<Self>;
}

impl SummaryValue for i32 {
    fn summarize<I: Iterator<Item = Self>>(values: I) -> Summary<Self> {
        let mut acc: Option<(i32, i32, i64, i64)> = None;
        for v in values {
            acc = Some(match acc {
                None => (v, v, i64::from(v), 1),
                Some((lo, hi, sum, n)) => (lo.min(v), hi.max(v), sum + i64::from(v), n + 1),
            });
        }
        match acc {
            Some((min, max, sum, n)) => Summary {
                min,
                max,
                // truncates toward zero
                mean: (sum / n) as i32,
            },
            None => Summary { min: 0, max: 0, mean: 0 },
        }
    }
}

impl SummaryValue for f64 {
    fn summarize<I: Iterator<Item = Self>>(values: I) -> Summary<Self> {
        let mut acc: Option<(OrderedFloat<f64>, OrderedFloat<f64>, f64, usize)> = None;
        for v in values {
            let o = OrderedFloat(v);
            acc = Some(match acc {
                None => (o, o, v, 1), // NB: NaN sorts above everything
                Some((lo, hi, sum, n)) => (lo.min(o), hi.max(o), sum + v, n + 1),
            });
        }
        match acc {
            Some((min, max, sum, n)) => Summary {
                min: min.into_inner(),
                max: max.into_inner(),
                mean: sum / n as f64,
            },
            None => Summary { min: 0.0, max: 0.0, mean: 0.0 },
        }
    }
}

/// Lazy `(time, value)` view over a series. Iterating it again starts over.
#[derive(Clone)]
pub struct Projection<'a, F> {
    samples: &'a [SamplePoint],
    extract: F,
}

impl<'a, T, F> Projection<'a, F>
where
    F: Fn(&SamplePoint) -> (f64, T),
{
    pub fn iter(&self) -> impl Iterator<Item = (f64, T)> + '_ {
        self.samples.iter().map(&self.extract)
    }

    pub fn to_vec(&self) -> Vec<(f64, T)> {
        self.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Read-only view over one workout's samples, ordered by time offset.
#[derive(Debug, Clone, Copy)]
pub struct SampleSeries<'a> {
    samples: &'a [SamplePoint],
}

impl<'a> SampleSeries<'a> {
    pub fn new(samples: &'a [SamplePoint]) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &'a [SamplePoint] {
        self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn series<T, F>(&self, extract: F) -> Projection<'a, F>
    where
        F: Fn(&SamplePoint) -> (f64, T),
    {
        Projection {
            samples: self.samples,
            extract,
        }
    }

    pub fn summary<T, F>(&self, extract: F) -> Summary<T>
    where
        T: SummaryValue,
        F: Fn(&SamplePoint) -> T,
    {
        T::summarize(self.samples.iter().map(extract))
    }

    pub fn heart_rate_series(&self) -> Vec<(f64, i32)> {
        self.series(|p| (p.time_offset_seconds, p.heart_rate_bpm)).to_vec()
    }

    pub fn speed_series(&self) -> Vec<(f64, f64)> {
        self.series(|p| (p.time_offset_seconds, p.speed_kmh)).to_vec()
    }

    pub fn heart_rate_summary(&self) -> Summary<i32> {
        self.summary(|p| p.heart_rate_bpm)
    }

    pub fn speed_summary(&self) -> Summary<f64> {
        self.summary(|p| p.speed_kmh)
    }

    pub fn route_coordinates(&self) -> Vec<GeoCoordinate> {
        self.samples
            .iter()
            .map(|p| GeoCoordinate::new(p.latitude, p.longitude))
            .collect()
    }

    /// Span between first and last sample offsets; 0 for fewer than two samples.
    pub fn duration_seconds(&self) -> f64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => (last.time_offset_seconds - first.time_offset_seconds).max(0.0),
            _ => 0.0,
        }
    }
}
