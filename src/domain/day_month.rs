use std::{fmt, str::FromStr, sync::LazyLock};

use chrono::NaiveDate;
use regex::Regex;

use super::error::DateFormatError;

/// `D-M`, `DD-MM` or any mix of one and two digits.
static DAY_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<day>[0-9]{1,2})-(?P<month>[0-9]{1,2})$").expect("day-month regex is valid")
});

/// Non-leap year used to check that a day-month exists in every year.
const CALENDAR_CHECK_YEAR: i32 = 2001;

/// A date without a year, e.g. `15-12`.
///
/// Parsing with [FromStr] only checks the syntax, so `31-2` is accepted and
/// fails later in [DayMonth::in_year]. Use [DayMonth::validated] to reject
/// anything that is not a day of a common year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct DayMonth {
    month: u32,
    day: u32,
}

impl DayMonth {
    pub fn validated(value: &str) -> Result<DayMonth, DateFormatError> {
        let day_month = value.parse::<DayMonth>()?;
        day_month
            .in_year(CALENDAR_CHECK_YEAR)
            .map_err(|_| DateFormatError::Calendar(value.to_string()))?;
        Ok(day_month)
    }

    pub fn in_year(&self, year: i32) -> Result<NaiveDate, DateFormatError> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .ok_or_else(|| DateFormatError::Calendar(self.to_string()))
    }
}

impl FromStr for DayMonth {
    type Err = DateFormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let pattern = || DateFormatError::Pattern(value.to_string());
        let captures = DAY_MONTH.captures(value).ok_or_else(pattern)?;
        let day = captures["day"].parse::<u32>().map_err(|_| pattern())?;
        let month = captures["month"].parse::<u32>().map_err(|_| pattern())?;
        Ok(DayMonth { month, day })
    }
}

impl fmt::Display for DayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, self.month)
    }
}
