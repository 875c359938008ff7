use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::{
    cli::{Cli, Mode},
    logging::SyslogSink,
};

use super::{check::CheckService, format::ConsoleSink, switch::SwitchService, Outcome};

pub struct Service {
    mode: Mode,
    config_dir: Option<PathBuf>,
    today: NaiveDate,
}

impl Service {
    pub fn new(args: Cli) -> Service {
        let mode = args.mode();
        let today = args.date.unwrap_or_else(|| Local::now().date_naive());
        Service {
            mode,
            config_dir: args.config_dir,
            today,
        }
    }

    pub fn run(&self) -> Result<Outcome> {
        log::debug!("running {:?} for {}", self.mode, self.today);
        let config_dir = self.config_dir.clone();
        match self.mode {
            Mode::Check => CheckService::new(config_dir, self.today, &ConsoleSink).run(),
            Mode::Dry => SwitchService::new(config_dir, self.today, &ConsoleSink).run(true),
            Mode::Switch => SwitchService::new(config_dir, self.today, &SyslogSink).run(false),
        }
    }
}
