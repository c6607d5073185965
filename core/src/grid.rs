use chrono::{DateTime, TimeZone, Weekday};

use crate::bucket::WorkoutsByDay;
use crate::day::{day_key, CalendarDate, YearMonth};
use crate::models::WorkoutRecord;

/// Six weeks, enough for any month at any weekday offset (max 6 + 31).
pub const GRID_CELLS: usize = 42;
pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: CalendarDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub has_workouts: bool,
    pub is_selected: bool,
}

/// A rendered month: always [`GRID_CELLS`] cells, week rows starting on the
/// configured first weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub first_weekday: Weekday,
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn current_month_cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.cells.iter().filter(|c| c.is_current_month)
    }

    pub fn cell(&self, date: CalendarDate) -> Option<&CalendarCell> {
        self.cells.iter().find(|c| c.date == date)
    }

    /// English title, e.g. "November 2025".
    pub fn title(&self) -> String {
        self.month.first_day().naive().format("%B %Y").to_string()
    }

    pub fn weekday_headers(&self) -> [Weekday; DAYS_PER_WEEK] {
        weekday_headers(self.first_weekday)
    }
}

/// Column order of a week row.
pub fn weekday_headers(first_weekday: Weekday) -> [Weekday; DAYS_PER_WEEK] {
    let mut next = first_weekday;
    std::array::from_fn(|_| {
        let current = next;
        next = next.succ();
        current
    })
}

/// Cells of the previous month shown before day 1.
pub fn leading_offset(month: YearMonth, first_weekday: Weekday) -> u32 {
    let first = month.first_day().weekday().num_days_from_monday();
    (first + 7 - first_weekday.num_days_from_monday()) % 7
}

/// Build the 42-cell grid for `month`.
///
/// `has_workouts` comes from `index` and `is_selected`/`is_today` from exact
/// day equality, for padding cells as well as the month's own days, so the
/// grid can never disagree with `index.workouts_on` for a visible day.
pub fn build_grid(
    month: YearMonth,
    index: &WorkoutsByDay,
    selected: Option<CalendarDate>,
    today: CalendarDate,
    first_weekday: Weekday,
) -> MonthGrid {
    let cell = |date: CalendarDate, is_current_month: bool| CalendarCell {
        date,
        is_current_month,
        is_today: date == today,
        has_workouts: index.has_workouts(date),
        is_selected: selected == Some(date),
    };

    let offset = leading_offset(month, first_weekday) as usize;
    let previous = month.previous();
    let trailing_skip = (previous.days_in_month() as usize).saturating_sub(offset);

    let mut cells = Vec::with_capacity(GRID_CELLS);
    // tail of prev month
    cells.extend(previous.days().skip(trailing_skip).map(|d| cell(d, false)));
    cells.extend(month.days().map(|d| cell(d, true)));
    // pad to 42 (Feb on a week boundary needs 14)
    let remaining = GRID_CELLS.saturating_sub(cells.len());
    cells.extend(month.next().days().take(remaining).map(|d| cell(d, false)));

    MonthGrid {
        month,
        first_weekday,
        cells,
    }
}

/// Reference month plus selection. Every transition returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    pub reference_month: YearMonth,
    pub selected: Option<CalendarDate>,
}

impl CalendarState {
    pub fn new(reference_month: YearMonth) -> Self {
        Self {
            reference_month,
            selected: None,
        }
    }

    pub fn starting_at(today: CalendarDate) -> Self {
        Self::new(today.year_month())
    }

    /// Selection is kept; it shows up again whenever its day is on screen.
    pub fn previous_month(self) -> Self {
        Self {
            reference_month: self.reference_month.previous(),
            ..self
        }
    }

    pub fn next_month(self) -> Self {
        Self {
            reference_month: self.reference_month.next(),
            ..self
        }
    }

    /// Select `date`, moving to its month first when it is not the current one.
    pub fn select(self, date: CalendarDate) -> Self {
        let reference_month = if self.reference_month.contains(date) {
            self.reference_month
        } else {
            date.year_month()
        };
        Self {
            reference_month,
            selected: Some(date),
        }
    }

    pub fn select_instant<Tz: TimeZone>(self, instant: &DateTime<Tz>) -> Self {
        self.select(day_key(instant))
    }

    pub fn clear_selection(self) -> Self {
        Self {
            selected: None,
            ..self
        }
    }

    pub fn go_to_today(self, today: CalendarDate) -> Self {
        Self {
            reference_month: today.year_month(),
            selected: Some(today),
        }
    }

    pub fn grid(&self, index: &WorkoutsByDay, today: CalendarDate, first_weekday: Weekday) -> MonthGrid {
        build_grid(self.reference_month, index, self.selected, today, first_weekday)
    }

    pub fn selected_workouts<'a>(&self, index: &'a WorkoutsByDay) -> &'a [WorkoutRecord] {
        match self.selected {
            Some(day) => index.workouts_on(day),
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_follows_first_weekday() {
        // 2025-11-01 is a Saturday
        let nov = YearMonth::new(2025, 11).unwrap();
        assert_eq!(leading_offset(nov, Weekday::Mon), 5);
        assert_eq!(leading_offset(nov, Weekday::Sun), 6);
        assert_eq!(leading_offset(nov, Weekday::Sat), 0);
    }

    #[test]
    fn headers_rotate() {
        assert_eq!(
            weekday_headers(Weekday::Sun),
            [
                Weekday::Sun,
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat
            ]
        );
    }
}
