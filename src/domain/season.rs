use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::{config::SeasonEntry, date_range::DateRange, error::DateFormatError};

/// A named date window of the current year mapped to a wallpaper directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Season {
    name: String,
    range: DateRange,
    /// The occurrence that began last year, only set when `range` crosses new year.
    carried_over: Option<DateRange>,
    directory: PathBuf,
}

impl Season {
    pub fn new(entry: &SeasonEntry, year: i32) -> Result<Season, DateFormatError> {
        let range = DateRange::resolve(entry.from(), entry.to(), year)?;
        let carried_over = if range.crosses_new_year() {
            Some(DateRange::resolve(entry.from(), entry.to(), year - 1)?)
        } else {
            None
        };
        Ok(Season {
            name: entry.name().to_string(),
            range,
            carried_over,
            directory: entry.dir().to_path_buf(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn start_date(&self) -> NaiveDate {
        self.range.start()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.range.end()
    }

    /// A season crossing new year also covers the tail of the window that
    /// started in December of the previous year.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.range.contains(day) || self.carried_over.is_some_and(|range| range.contains(day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn keeps_the_current_year_anchoring() {
        let entry = SeasonEntry::new("winter", "1-12", "1-2", "/c");
        let season = Season::new(&entry, 2026).unwrap();
        assert_eq!(season.name(), "winter");
        assert_eq!(season.directory(), Path::new("/c"));
        assert_eq!(season.start_date(), date(2026, 12, 1));
        assert_eq!(season.end_date(), date(2027, 2, 1));
    }

    #[test]
    fn wrapping_season_covers_both_sides_of_new_year() {
        let entry = SeasonEntry::new("winter", "1-12", "1-2", "/c");
        let season = Season::new(&entry, 2026).unwrap();
        assert!(season.contains(date(2026, 1, 15)));
        assert!(season.contains(date(2026, 2, 1)));
        assert!(season.contains(date(2026, 12, 1)));
        assert!(season.contains(date(2026, 12, 31)));
        assert!(!season.contains(date(2026, 2, 2)));
        assert!(!season.contains(date(2026, 11, 30)));
    }

    #[test]
    fn plain_season_covers_only_its_window() {
        let entry = SeasonEntry::new("summer", "1-6", "31-8", "/b");
        let season = Season::new(&entry, 2026).unwrap();
        assert!(season.contains(date(2026, 7, 15)));
        assert!(!season.contains(date(2026, 1, 10)));
    }

    #[test]
    fn invalid_day_is_a_date_format_error() {
        let entry = SeasonEntry::new("broken", "40-1", "2-1", "/x");
        assert!(matches!(
            Season::new(&entry, 2026),
            Err(DateFormatError::Calendar(_))
        ));
    }
}
