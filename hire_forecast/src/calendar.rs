//! First-of-month calendar arithmetic
//!
//! Every date that leaves this module is the first day of its month, so a
//! month is identified by a single `NaiveDate`.

use chrono::{Datelike, Months, NaiveDate};

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month
    date.with_day(1).unwrap_or(date)
}

/// First day of the month after the one containing `date`
///
/// Returns `None` past the end of chrono's supported range.
pub fn next_month(date: NaiveDate) -> Option<NaiveDate> {
    first_of_month(date).checked_add_months(Months::new(1))
}

/// First day of the month `months` months before the one containing `date`
pub fn months_back(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    first_of_month(date).checked_sub_months(Months::new(months))
}

/// January 1st of `year`
pub fn start_of_year(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
}

/// December 31st of `year`
pub fn end_of_year(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 12, 31)
}

/// Lazy sequence of first-of-month dates
///
/// The sequence is finite and cheap to clone; a clone restarts from the
/// position it was taken at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSequence {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl MonthSequence {
    fn empty() -> Self {
        Self {
            next: None,
            last: NaiveDate::MIN,
        }
    }
}

impl Iterator for MonthSequence {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        if current > self.last {
            self.next = None;
            return None;
        }
        self.next = next_month(current);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(current) if current <= self.last => {
                let months = month_index(self.last) - month_index(current) + 1;
                let months = months as usize;
                (months, Some(months))
            }
            _ => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for MonthSequence {}

impl std::iter::FusedIterator for MonthSequence {}

/// Months covering `[start, end]`, both bounds inclusive
///
/// Yields the first of every month from the month of `start` through the
/// month of `end`. When `start` is after `end` the sequence is empty, even if
/// both fall in the same month.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hire_forecast::calendar::months_between;
///
/// let start = NaiveDate::from_ymd_opt(2023, 11, 20).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// let months: Vec<String> = months_between(start, end).map(|d| d.to_string()).collect();
/// assert_eq!(months, ["2023-11-01", "2023-12-01", "2024-01-01"]);
/// ```
pub fn months_between(start: NaiveDate, end: NaiveDate) -> MonthSequence {
    if start > end {
        return MonthSequence::empty();
    }

    MonthSequence {
        next: Some(first_of_month(start)),
        last: first_of_month(end),
    }
}

/// Months strictly after the month of `anchor`, through the month of `end`
pub fn months_after(anchor: NaiveDate, end: NaiveDate) -> MonthSequence {
    match next_month(anchor) {
        Some(start) => months_between(start, end),
        None => MonthSequence::empty(),
    }
}

fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}
