use chrono::{Datelike, NaiveDate};

use super::{day_month::DayMonth, error::DateFormatError};

/// An inclusive `[start, end]` interval of concrete dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Resolves two day-month strings against `year`.
    ///
    /// Both ends are anchored to `year`. When `to` falls before `from` the
    /// range crosses new year and `end` moves to `year + 1`, `start` stays.
    pub fn resolve(from: &str, to: &str, year: i32) -> Result<DateRange, DateFormatError> {
        let from = from.parse::<DayMonth>()?;
        let to = to.parse::<DayMonth>()?;
        DateRange::anchored(from, to, year)
    }

    fn anchored(from: DayMonth, to: DayMonth, year: i32) -> Result<DateRange, DateFormatError> {
        let start = from.in_year(year)?;
        let mut end = to.in_year(year)?;
        if end < start {
            end = to.in_year(year + 1)?;
        }
        Ok(DateRange { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    pub fn crosses_new_year(&self) -> bool {
        self.end.year() > self.start.year()
    }
}
