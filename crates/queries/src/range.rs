//! Calendar date ranges.
//!
//! Dates are [`NaiveDate`]s, so comparisons never involve a time of day or
//! a timezone. Each bound is explicitly inclusive, exclusive or open.

use std::ops::{Bound, RangeBounds};

use chrono::{Datelike, NaiveDate};

use crate::error::{QueryError, Result};

/// A range of calendar dates with explicit bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: Bound<NaiveDate>,
    end: Bound<NaiveDate>,
}

impl DateRange {
    /// Creates a range from arbitrary bounds.
    pub fn new(start: Bound<NaiveDate>, end: Bound<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Dates strictly after `start` and strictly before `end`.
    pub fn exclusive(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Bound::Excluded(start), Bound::Excluded(end))
    }

    /// Dates from `start` through `end`, both included.
    pub fn inclusive(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Bound::Included(start), Bound::Included(end))
    }

    /// Exactly one date.
    pub fn on(date: NaiveDate) -> Self {
        Self::inclusive(date, date)
    }

    /// Every day of a calendar month.
    pub fn month(year: i32, month: u32) -> Result<Self> {
        let invalid = || QueryError::InvalidMonth { year, month };
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(invalid)?;
        Ok(Self::new(Bound::Included(first), Bound::Excluded(next)))
    }

    /// Returns true if `date` falls inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        RangeBounds::contains(self, &date)
    }
}

impl RangeBounds<NaiveDate> for DateRange {
    fn start_bound(&self) -> Bound<&NaiveDate> {
        self.start.as_ref()
    }

    fn end_bound(&self) -> Bound<&NaiveDate> {
        self.end.as_ref()
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.start {
            Bound::Included(date) => write!(f, "[{date}")?,
            Bound::Excluded(date) => write!(f, "({date}")?,
            Bound::Unbounded => write!(f, "(..")?,
        }
        write!(f, ", ")?;
        match self.end {
            Bound::Included(date) => write!(f, "{date}]"),
            Bound::Excluded(date) => write!(f, "{date})"),
            Bound::Unbounded => write!(f, "..)"),
        }
    }
}

/// Keeps the items whose date falls inside `range`.
pub fn within<'a, T, I, F>(items: I, date_of: F, range: &DateRange) -> Vec<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> NaiveDate,
{
    items
        .into_iter()
        .filter(|item| range.contains(date_of(*item)))
        .collect()
}

/// Returns the month a date falls in, as a range.
pub fn month_of(date: NaiveDate) -> Result<DateRange> {
    DateRange::month(date.year(), date.month())
}
