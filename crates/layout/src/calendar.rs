//! Calendar window generation.
//!
//! A window is the run of consecutive days shown on the timeline. It is
//! derived from an anchor date, the number of days shown before the anchor
//! and the total number of days; nothing else is kept.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::trace;

use crate::error::{LayoutError, LayoutResult};

/// Days shown before the anchor by default.
pub const DEFAULT_DAYS_BEFORE: u32 = 15;

/// Total days in a default window.
pub const DEFAULT_WINDOW_DAYS: u32 = 45;

/// An ordered, non-empty run of consecutive calendar days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarWindow {
    days: Vec<NaiveDate>,
}

/// Days of one calendar month within a window, used for header grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSpan {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// First window day that falls in this month.
    pub first_day: NaiveDate,
    /// Number of window days in this month.
    pub days: usize,
    /// Share of the window taken by this month, in percent.
    pub basis: f64,
}

/// Generate a window of `total_days` consecutive days starting
/// `days_before` days ahead of `anchor`.
///
/// # Errors
///
/// Returns `LayoutError::InvalidArgument` if `total_days` is zero.
/// Returns `LayoutError::DateOutOfRange` if the window would leave the
/// range of dates chrono can represent.
pub fn generate_window(
    anchor: NaiveDate,
    days_before: u32,
    total_days: u32,
) -> LayoutResult<CalendarWindow> {
    if total_days == 0 {
        return Err(LayoutError::invalid(
            "total_days must be greater than zero",
        ));
    }

    let first = anchor
        .checked_sub_days(Days::new(u64::from(days_before)))
        .ok_or(LayoutError::DateOutOfRange {
            anchor,
            days: -i64::from(days_before),
        })?;

    // Last day must be representable; checked before allocating.
    first
        .checked_add_days(Days::new(u64::from(total_days) - 1))
        .ok_or(LayoutError::DateOutOfRange {
            anchor,
            days: i64::from(total_days) - i64::from(days_before),
        })?;

    let days: Vec<NaiveDate> = (0..total_days)
        .map(|offset| first + Days::new(u64::from(offset)))
        .collect();

    trace!(
        "Generated window of {} days from {} (anchor {})",
        total_days, first, anchor
    );

    Ok(CalendarWindow { days })
}

/// Whether the date falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

impl CalendarWindow {
    /// Window with the default shape around `anchor`.
    pub fn around(anchor: NaiveDate) -> LayoutResult<Self> {
        generate_window(anchor, DEFAULT_DAYS_BEFORE, DEFAULT_WINDOW_DAYS)
    }

    /// The days of the window, in order.
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// Iterate over the days of the window.
    pub fn iter(&self) -> std::slice::Iter<'_, NaiveDate> {
        self.days.iter()
    }

    /// First day of the window.
    pub fn first(&self) -> NaiveDate {
        self.days[0]
    }

    /// Last day of the window.
    pub fn last(&self) -> NaiveDate {
        self.days[self.days.len() - 1]
    }

    /// Number of days in the window.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always false; a window holds at least one day.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Days between the first and last day (zero for a one-day window).
    pub fn span_days(&self) -> i64 {
        (self.last() - self.first()).num_days()
    }

    /// Position of `date` in the window, if it is shown.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let offset = (date - self.first()).num_days();
        if offset < 0 || offset >= self.days.len() as i64 {
            return None;
        }
        Some(offset as usize)
    }

    /// Whether `date` is shown in the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.index_of(date).is_some()
    }

    /// Group the window's days by calendar month, in order.
    pub fn month_spans(&self) -> Vec<MonthSpan> {
        let total = self.days.len() as f64;
        let mut spans: Vec<MonthSpan> = Vec::new();

        for &day in &self.days {
            match spans.last_mut() {
                Some(span) if span.year == day.year() && span.month == day.month() => {
                    span.days += 1;
                }
                _ => spans.push(MonthSpan {
                    year: day.year(),
                    month: day.month(),
                    first_day: day,
                    days: 1,
                    basis: 0.0,
                }),
            }
        }

        for span in &mut spans {
            span.basis = span.days as f64 / total * 100.0;
        }

        spans
    }
}

impl AsRef<[NaiveDate]> for CalendarWindow {
    fn as_ref(&self) -> &[NaiveDate] {
        &self.days
    }
}

impl<'a> IntoIterator for &'a CalendarWindow {
    type Item = &'a NaiveDate;
    type IntoIter = std::slice::Iter<'a, NaiveDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
