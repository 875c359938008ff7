use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::{
    domain::{ActiveTheme, ConfigDir, SeasonTable, ThemeLink},
    LogSink,
};

use super::{format::FormatService, Outcome};

/// Selects today's theme and, unless `dry`, points the `current` link at it.
pub(super) struct SwitchService<'s, Sink>
where
    Sink: LogSink,
{
    config_dir: Option<PathBuf>,
    today: NaiveDate,
    sink: &'s Sink,
}

impl<'s, Sink> SwitchService<'s, Sink>
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

    pub fn run(&self, dry: bool) -> Result<Outcome> {
        let config_dir = match ConfigDir::locate(self.config_dir.clone()) {
            Ok(it) => it,
            Err(missing) => {
                self.sink.record(&missing.to_string());
                return Ok(Outcome::MissingEnvironment);
            }
        };
        config_dir.enter()?;

        let Some(theme) = self.select(&config_dir)? else {
            return Ok(Outcome::Done);
        };

        if dry {
            FormatService::theme(&theme);
            return Ok(Outcome::Done);
        }

        let change = ThemeLink::in_working_dir().sync(&theme, self.sink)?;
        log::debug!("{:?}: {}", change, theme);
        Ok(Outcome::Done)
    }

    /// `None` when the configuration is broken, the reason is already logged.
    fn select(&self, config_dir: &ConfigDir) -> Result<Option<ActiveTheme>> {
        let text = config_dir.read_config()?;
        let table = match SeasonTable::load(&text, self.sink) {
            Ok(table) => table,
            Err(_) => {
                self.sink.record(&format!(
                    "theme-changer configuration file [{}] contains errors",
                    config_dir.config_file().display()
                ));
                return Ok(None);
            }
        };
        let theme = table
            .select(self.today)
            .with_context(|| format!("Failed to select the theme for {}", self.today))?;
        Ok(Some(theme))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::{cell::RefCell, path::Path};

    use tempfile::TempDir;

    use super::*;
    use crate::testing::WorkingDir;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn environment(config: &str) -> TempDir {
        let root = TempDir::new().unwrap();
        for name in ["autumn", "summer", "winter"] {
            std::fs::create_dir(root.path().join(name)).unwrap();
        }
        std::fs::write(root.path().join("config.yml"), config).unwrap();
        root
    }

    const CONFIG: &str = "\
default:
  dir: autumn
summer:
  from: 1-6
  to: 31-8
  dir: summer
winter:
  from: 1-12
  to: 1-2
  dir: winter
";

    fn run(root: &Path, today: NaiveDate, dry: bool) -> (Result<Outcome>, Vec<String>) {
        let messages = RefCell::new(Vec::new());
        let sink = |message: &str| messages.borrow_mut().push(message.to_string());
        let result = SwitchService::new(Some(root.to_path_buf()), today, &sink).run(dry);
        (result, messages.into_inner())
    }

    fn link_target(root: &Path) -> Option<PathBuf> {
        std::fs::read_link(root.join("current")).ok()
    }

    #[test]
    fn links_the_season_of_today() {
        let _cwd = WorkingDir::lock();
        let root = environment(CONFIG);

        let (result, messages) = run(root.path(), date(2026, 7, 15), false);
        assert_eq!(result.unwrap(), Outcome::Done);
        assert_eq!(messages, ["Create current"]);
        let target = link_target(root.path()).unwrap();
        assert!(target.is_absolute());
        assert!(target.ends_with("summer"));

        let (_, messages) = run(root.path(), date(2026, 8, 1), false);
        assert!(messages.is_empty());

        let (_, messages) = run(root.path(), date(2027, 1, 15), false);
        assert_eq!(messages, ["Change theme to winter"]);
        assert!(link_target(root.path()).unwrap().ends_with("winter"));

        let (_, messages) = run(root.path(), date(2027, 3, 1), false);
        assert_eq!(messages, ["Change theme to default"]);
        assert!(link_target(root.path()).unwrap().ends_with("autumn"));
    }

    #[test]
    fn dry_run_leaves_the_link_alone() {
        let _cwd = WorkingDir::lock();
        let root = environment(CONFIG);

        let (result, messages) = run(root.path(), date(2026, 7, 15), true);
        assert_eq!(result.unwrap(), Outcome::Done);
        assert!(messages.is_empty());
        assert!(link_target(root.path()).is_none());
    }

    #[test]
    fn missing_environment_exits_with_two() {
        let root = TempDir::new().unwrap();

        let (result, messages) = run(&root.path().join("nope"), date(2026, 7, 15), false);
        assert_eq!(result.unwrap(), Outcome::MissingEnvironment);
        assert!(messages[0].starts_with("missing configuration directory"));

        let (result, messages) = run(root.path(), date(2026, 7, 15), false);
        assert_eq!(result.unwrap(), Outcome::MissingEnvironment);
        assert!(messages[0].starts_with("missing configuration file"));
    }

    #[test]
    fn broken_configuration_is_logged_and_skipped() {
        let _cwd = WorkingDir::lock();
        let root = environment("summer:\n  from: 1-6\n  to: 31-8\n  dir: summer\n");

        let (result, messages) = run(root.path(), date(2026, 7, 15), false);
        assert_eq!(result.unwrap(), Outcome::Done);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], "config.yml must have a \"default\" section");
        assert!(messages[1].ends_with("contains errors"));
        assert!(link_target(root.path()).is_none());
    }

    #[test]
    fn leap_day_is_rejected_before_it_can_break_the_run() {
        let _cwd = WorkingDir::lock();
        let root = environment(
            "default:\n  dir: autumn\nleap:\n  from: 29-2\n  to: 1-3\n  dir: summer\n",
        );

        let (result, messages) = run(root.path(), date(2025, 3, 1), false);
        assert_eq!(result.unwrap(), Outcome::Done);
        assert!(messages[0].contains("29-2"));
        assert!(link_target(root.path()).is_none());
    }
}
