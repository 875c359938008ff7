use log::LevelFilter;
use syslog::Facility;

use crate::{cli::Mode, LogSink};

const PROCESS_NAME: &str = "theme-changer";

/// Installs the `log` backend for this run.
///
/// The default mode writes to syslog and falls back to stderr when the
/// system log can not be reached. `--check` and `--dry` always use stderr.
///
/// Mapping:
/// - 0 (none) -> info for syslog, warn on the terminal
/// - 1 (-v)   -> info
/// - 2+ (-vv) -> debug
///
/// `RUST_LOG` overrides the terminal level.
pub fn init(mode: Mode, verbosity: u8) {
    let level = match (mode, verbosity) {
        (Mode::Switch, 0) | (_, 1) => LevelFilter::Info,
        (_, 0) => LevelFilter::Warn,
        _ => LevelFilter::Debug,
    };

    if mode == Mode::Switch {
        match syslog::init(Facility::LOG_USER, level, Some(PROCESS_NAME)) {
            Ok(()) => return,
            Err(err) => eprintln!("{PROCESS_NAME}: system log unavailable ({err}), using stderr"),
        }
    }

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Sends every record through the `log` facade, which is syslog in the
/// default mode.
pub(crate) struct SyslogSink;

impl LogSink for SyslogSink {
    fn record(&self, message: &str) {
        log::info!("{}", message);
    }
}
