use std::{
    fmt,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

use super::{
    config::{SeasonTable, DEFAULT_THEME},
    error::DateFormatError,
    season::Season,
};

/// The theme to show today: its directory and the name it is configured under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ActiveTheme {
    directory: PathBuf,
    name: String,
}

impl ActiveTheme {
    pub fn new<P>(directory: P, name: &str) -> ActiveTheme
    where
        P: AsRef<Path>,
    {
        ActiveTheme {
            directory: directory.as_ref().to_path_buf(),
            name: name.to_string(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ActiveTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.directory.display(), self.name)
    }
}

impl SeasonTable {
    /// Builds every season for the year of `today`, in configuration order.
    pub fn build_seasons(&self, today: NaiveDate) -> Result<Vec<Season>, DateFormatError> {
        self.seasons()
            .iter()
            .map(|entry| Season::new(entry, today.year()))
            .collect()
    }

    /// Picks the first season containing `today`, or the default theme.
    ///
    /// Overlapping seasons are not an error, the one written first wins.
    /// Fails with a [DateFormatError] when a season can not be built.
    pub fn select(&self, today: NaiveDate) -> Result<ActiveTheme> {
        let seasons = self.build_seasons(today)?;
        self.select_from(&seasons, today)
    }

    /// Same as [SeasonTable::select] over seasons already built for `today`.
    pub fn select_from(&self, seasons: &[Season], today: NaiveDate) -> Result<ActiveTheme> {
        let (directory, name) = match seasons.iter().find(|season| season.contains(today)) {
            Some(season) => {
                log::debug!(
                    "{} matches {} ({} to {})",
                    season.name(),
                    today,
                    season.start_date(),
                    season.end_date()
                );
                (season.directory(), season.name())
            }
            None => {
                log::debug!("no season matches {}, falling back to default", today);
                (self.default_dir(), DEFAULT_THEME)
            }
        };

        let directory = std::path::absolute(directory).with_context(|| {
            format!("Failed to resolve theme directory: {}", directory.display())
        })?;
        Ok(ActiveTheme::new(directory, name))
    }
}
