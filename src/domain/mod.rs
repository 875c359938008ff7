mod config;
mod date_range;
mod day_month;
mod error;
mod paths;
mod season;
mod theme;

pub(crate) use config::SeasonTable;
pub(crate) use config::DEFAULT_THEME;
#[cfg(test)]
pub(crate) use config::SeasonEntry;

pub(crate) use season::Season;
pub(crate) use theme::ActiveTheme;

pub(crate) use paths::ConfigDir;
pub(crate) use paths::ThemeLink;
