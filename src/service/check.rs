use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;

use crate::{
    domain::{ConfigDir, Season, SeasonTable, DEFAULT_THEME},
    LogSink,
};

use super::{format::FormatService, Outcome};

/// Validates the configuration and lists this year's seasons, the link is
/// never touched.
pub(super) struct CheckService<'s, Sink>
where
    Sink: LogSink,
{
    config_dir: Option<PathBuf>,
    today: NaiveDate,
    sink: &'s Sink,
}

impl<'s, Sink> CheckService<'s, Sink>
where
    Sink: LogSink,
{
    pub fn new(config_dir: Option<PathBuf>, today: NaiveDate, sink: &'s Sink) -> Self {
        Self {
            config_dir,
            today,
            sink,
        }
    }

    pub fn run(&self) -> Result<Outcome> {
        let config_dir = match ConfigDir::locate(self.config_dir.clone()) {
            Ok(it) => it,
            Err(missing) => {
                self.sink.record(&missing.to_string());
                return Ok(Outcome::Done);
            }
        };
        config_dir.enter()?;

        let text = config_dir.read_config()?;
        let Ok(table) = SeasonTable::load(&text, self.sink) else {
            return Ok(Outcome::Done);
        };
        let seasons = match table.build_seasons(self.today) {
            Ok(seasons) => seasons,
            Err(err) => {
                self.sink.record(&err.to_string());
                return Ok(Outcome::Done);
            }
        };

        FormatService::success(&format!(
            "configuration file [{}] is valid",
            config_dir.config_file().display()
        ));
        let active = table.select_from(&seasons, self.today)?;
        let rows = Self::rows(&seasons, &table);
        let active_row = seasons
            .iter()
            .position(|season| season.name() == active.name())
            .unwrap_or(seasons.len());
        FormatService::active_item_table(rows, |i| i == active_row);
        Ok(Outcome::Done)
    }

    /// One row per season in configuration order, the default last.
    fn rows(seasons: &[Season], table: &SeasonTable) -> Vec<String> {
        let spans: Vec<String> = seasons
            .iter()
            .map(|season| format!("{} to {}", season.start_date(), season.end_date()))
            .collect();
        let width = seasons
            .iter()
            .map(|season| season.name().len())
            .chain([DEFAULT_THEME.len()])
            .max()
            .unwrap_or_default();
        let span_width = spans.iter().map(String::len).max().unwrap_or_default();
        seasons
            .iter()
            .zip(&spans)
            .map(|(season, span)| {
                format!(
                    "{:<width$}  {:<span_width$}  {}",
                    season.name(),
                    span,
                    season.directory().display()
                )
            })
            .chain([format!(
                "{:<width$}  {:<span_width$}  {}",
                DEFAULT_THEME,
                "",
                table.default_dir().display()
            )])
            .collect()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::cell::RefCell;

    use tempfile::TempDir;

    use super::*;
    use crate::testing::WorkingDir;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn check(root: PathBuf) -> (Result<Outcome>, Vec<String>) {
        let messages = RefCell::new(Vec::new());
        let sink = |message: &str| messages.borrow_mut().push(message.to_string());
        let result = CheckService::new(Some(root), date(2026, 7, 15), &sink).run();
        (result, messages.into_inner())
    }

    #[test]
    fn missing_environment_is_only_reported() {
        let root = TempDir::new().unwrap();
        let (result, messages) = check(root.path().join("nope"));
        assert_eq!(result.unwrap(), Outcome::Done);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("missing configuration directory"));
    }

    #[test]
    fn reports_the_first_violation() {
        let _cwd = WorkingDir::lock();
        let root = TempDir::new().unwrap();
        std::fs::write(
            root.path().join("config.yml"),
            "default:\n  dir: .\nsummer:\n  from: 1-6\n  to: 31-8\n  dir: nowhere\n",
        )
        .unwrap();

        let (result, messages) = check(root.path().to_path_buf());
        assert_eq!(result.unwrap(), Outcome::Done);
        assert_eq!(messages, ["theme 'summer': nowhere is not a directory"]);
    }

    #[test]
    fn valid_configuration_leaves_the_link_alone() {
        let _cwd = WorkingDir::lock();
        let root = TempDir::new().unwrap();
        std::fs::create_dir(root.path().join("summer")).unwrap();
        std::fs::write(
            root.path().join("config.yml"),
            "default:\n  dir: .\nsummer:\n  from: 1-6\n  to: 31-8\n  dir: summer\n",
        )
        .unwrap();

        let (result, messages) = check(root.path().to_path_buf());
        assert_eq!(result.unwrap(), Outcome::Done);
        assert!(messages.is_empty());
        assert!(!root.path().join("current").is_symlink());
    }

    #[test]
    fn rows_list_every_season_then_the_default() {
        let table = SeasonTable::from_entries(
            "/themes/default",
            vec![crate::domain::SeasonEntry::new(
                "winter",
                "1-12",
                "1-2",
                "/themes/winter",
            )],
        );
        let seasons = table.build_seasons(date(2026, 7, 15)).unwrap();
        let rows = CheckService::<fn(&str)>::rows(&seasons, &table);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "winter   2026-12-01 to 2027-02-01  /themes/winter");
        assert_eq!(rows[1], format!("default  {:24}  /themes/default", ""));
    }

    #[test]
    fn default_row_lines_up_with_the_season_rows() {
        let table = SeasonTable::from_entries("/d", Vec::new());
        let rows = CheckService::<fn(&str)>::rows(&[], &table);
        assert_eq!(rows, ["default    /d"]);

        let table = SeasonTable::from_entries(
            "/d",
            vec![
                crate::domain::SeasonEntry::new("spring", "1-3", "31-5", "/s"),
                crate::domain::SeasonEntry::new("winter", "1-12", "1-2", "/w"),
            ],
        );
        let seasons = table.build_seasons(date(2026, 7, 15)).unwrap();
        let rows = CheckService::<fn(&str)>::rows(&seasons, &table);
        let column = |row: &String| row.rfind("  /").unwrap();
        assert!(rows.iter().all(|row| column(row) == column(&rows[0])));
    }
}
