use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(name = "theme-changer")]
#[command(about = "Automatically change your wallpaper folder with the seasons")]
pub struct Cli {
    /// Check the configuration file without running the theme changer
    #[arg(short, long, conflicts_with = "dry")]
    pub check: bool,

    /// Print the selected theme without changing the link
    #[arg(short, long)]
    pub dry: bool,

    /// Configuration directory [default: ~/.wallpaper]
    #[arg(long, env = "THEME_CHANGER_DIR", value_name = "PATH")]
    pub config_dir: Option<PathBuf>,

    /// Pick the theme for this day instead of today (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Log more details (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Validate, select and update the link, logging to syslog.
    Switch,
    Check,
    Dry,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        match (self.check, self.dry) {
            (true, _) => Mode::Check,
            (_, true) => Mode::Dry,
            _ => Mode::Switch,
        }
    }
}
