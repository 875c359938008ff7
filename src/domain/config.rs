use std::path::{Path, PathBuf};

use either::Either;
use serde_yaml::{Mapping, Value};

use crate::LogSink;

use super::error::Violation;

/// Reserved name of the fallback theme.
pub(crate) const DEFAULT_THEME: &str = "default";

/// The configuration file exactly as written, in file order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawConfig(Mapping);

/// A configuration that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SeasonTable {
    default_dir: PathBuf,
    seasons: Vec<SeasonEntry>,
}

/// One seasonal entry: `name: {from: D-M, to: D-M, dir: path}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SeasonEntry {
    name: String,
    from: String,
    to: String,
    dir: PathBuf,
}

#[derive(Debug, serde::Deserialize)]
struct DefaultDO {
    dir: PathBuf,
}

#[derive(Debug, serde::Deserialize)]
struct SeasonDO {
    from: String,
    to: String,
    dir: PathBuf,
}

impl RawConfig {
    /// An empty document counts as an empty table.
    pub fn parse(text: &str) -> Result<RawConfig, Violation> {
        let value = serde_yaml::from_str::<Value>(text)
            .map_err(|err| Violation::Syntax(err.to_string()))?;
        match value {
            Value::Mapping(mapping) => Ok(RawConfig(mapping)),
            Value::Null => Ok(RawConfig(Mapping::new())),
            _ => Err(Violation::NotATable),
        }
    }

    /// Checks the table and stops at the first broken entry. The reason is
    /// recorded to `sink` once and returned.
    pub fn validate<S>(&self, sink: &S) -> Result<SeasonTable, Violation>
    where
        S: LogSink + ?Sized,
    {
        validate::table(&self.0).inspect_err(|violation| sink.record(&violation.to_string()))
    }
}

impl SeasonTable {
    /// Parses and validates a configuration document.
    pub fn load<S>(text: &str, sink: &S) -> Result<SeasonTable, Violation>
    where
        S: LogSink + ?Sized,
    {
        RawConfig::parse(text)
            .inspect_err(|violation| sink.record(&violation.to_string()))?
            .validate(sink)
    }

    #[cfg(test)]
    pub fn from_entries<P>(default_dir: P, seasons: Vec<SeasonEntry>) -> SeasonTable
    where
        P: AsRef<Path>,
    {
        SeasonTable {
            default_dir: default_dir.as_ref().to_path_buf(),
            seasons,
        }
    }

    pub fn default_dir(&self) -> &Path {
        &self.default_dir
    }

    pub fn seasons(&self) -> &[SeasonEntry] {
        &self.seasons
    }
}

impl SeasonEntry {
    pub fn new<P>(name: &str, from: &str, to: &str, dir: P) -> SeasonEntry
    where
        P: AsRef<Path>,
    {
        SeasonEntry {
            name: name.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

mod validate {
    use crate::domain::day_month::DayMonth;

    use super::*;

    const SEASON_KEYS: [&str; 3] = ["from", "to", "dir"];

    pub(super) fn table(mapping: &Mapping) -> Result<SeasonTable, Violation> {
        if !mapping.contains_key(DEFAULT_THEME) {
            return Err(Violation::MissingDefault);
        }

        let mut default_dir = None;
        let mut seasons = Vec::with_capacity(mapping.len().saturating_sub(1));
        for (key, value) in mapping {
            let name = key
                .as_str()
                .ok_or_else(|| Violation::InvalidName(render(key)))?;
            match entry(name, value)? {
                Either::Left(dir) => default_dir = Some(dir),
                Either::Right(season) => seasons.push(season),
            }
        }

        let default_dir = default_dir.ok_or(Violation::MissingDefault)?;
        Ok(SeasonTable {
            default_dir,
            seasons,
        })
    }

    fn entry(name: &str, value: &Value) -> Result<Either<PathBuf, SeasonEntry>, Violation> {
        if name == DEFAULT_THEME {
            return default(value).map(Either::Left);
        }
        season(name, value).map(Either::Right)
    }

    fn default(value: &Value) -> Result<PathBuf, Violation> {
        let fields = value.as_mapping().ok_or(Violation::MalformedDefault)?;
        if fields.len() != 1 || !fields.contains_key("dir") {
            return Err(Violation::MalformedDefault);
        }
        let default = serde_yaml::from_value::<DefaultDO>(value.clone()).map_err(|err| {
            Violation::InvalidValue {
                season: DEFAULT_THEME.to_string(),
                message: err.to_string(),
            }
        })?;
        Ok(default.dir)
    }

    fn season(name: &str, value: &Value) -> Result<SeasonEntry, Violation> {
        let fields = value.as_mapping().ok_or_else(|| Violation::NotAnEntry {
            season: name.to_string(),
        })?;
        if fields.len() != SEASON_KEYS.len() {
            return Err(Violation::WrongKeys {
                season: name.to_string(),
            });
        }
        // keys are unique, so three known keys are exactly from, to and dir
        for key in fields.keys() {
            if !key.as_str().is_some_and(|key| SEASON_KEYS.contains(&key)) {
                return Err(Violation::UnknownKey {
                    season: name.to_string(),
                    key: render(key),
                });
            }
        }

        let season = serde_yaml::from_value::<SeasonDO>(value.clone()).map_err(|err| {
            Violation::InvalidValue {
                season: name.to_string(),
                message: err.to_string(),
            }
        })?;

        if !season.dir.is_dir() {
            return Err(Violation::NotADirectory {
                season: name.to_string(),
                path: season.dir,
            });
        }
        for date in [&season.from, &season.to] {
            DayMonth::validated(date).map_err(|source| Violation::InvalidDate {
                season: name.to_string(),
                source,
            })?;
        }

        Ok(SeasonEntry::new(name, &season.from, &season.to, season.dir))
    }

    fn render(value: &Value) -> String {
        match value {
            Value::String(it) => it.clone(),
            other => serde_yaml::to_string(other)
                .map(|it| it.trim_end().to_string())
                .unwrap_or_else(|_| format!("{:?}", other)),
        }
    }
}
