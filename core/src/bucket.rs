use std::collections::{BTreeMap, HashSet};

use chrono::TimeZone;

use crate::day::{day_key, CalendarDate};
use crate::models::WorkoutRecord;

/// Workouts grouped by the local calendar day they started on.
///
/// Each bucket keeps the order of the source list. Records whose timestamp
/// does not parse are in no bucket; their ids are kept in `unparsed_ids`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutsByDay {
    buckets: BTreeMap<CalendarDate, Vec<WorkoutRecord>>,
    unparsed: Vec<String>,
}

/// Group `records` by day key in `tz`.
///
/// A repeated id is only bucketed once (first occurrence wins), since
/// records with the same id are the same workout.
pub fn group_by_day<Tz: TimeZone>(records: &[WorkoutRecord], tz: &Tz) -> WorkoutsByDay {
    let mut out = WorkoutsByDay::default();
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());

    for record in records {
        if !seen.insert(record.id.as_str()) {
            log::warn!("duplicate workout id {:?} ignored", record.id);
            continue;
        }
        match record.start_instant(tz) {
            Ok(start) => out
                .buckets
                .entry(day_key(&start))
                .or_default()
                .push(record.clone()),
            Err(err) => {
                log::warn!("workout {:?} left off the calendar: {}", record.id, err);
                out.unparsed.push(record.id.clone());
            }
        }
    }

    log::debug!(
        "bucketed {} workouts into {} days ({} unparsed)",
        out.total_workouts(),
        out.buckets.len(),
        out.unparsed.len()
    );
    out
}

impl WorkoutsByDay {
    pub fn has_workouts(&self, day: CalendarDate) -> bool {
        self.buckets.get(&day).is_some_and(|b| !b.is_empty())
    }

    /// Workouts that started on `day`, in source order. Empty when none.
    pub fn workouts_on(&self, day: CalendarDate) -> &[WorkoutRecord] {
        self.buckets.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Days that have at least one workout, ascending.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.buckets.keys().copied()
    }

    // non-empty days, not workouts
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn total_workouts(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn unparsed_ids(&self) -> &[String] {
        &self.unparsed
    }
}
