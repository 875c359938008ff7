mod check;
mod format;
mod service;
mod switch;

use std::process::ExitCode;

pub(crate) use service::Service;

/// Exit status when `~/.wallpaper` or its `config.yml` is missing.
const MISSING_ENVIRONMENT: u8 = 2;

/// How a run ended. Broken configurations are logged and still count as done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Done,
    MissingEnvironment,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Done => ExitCode::SUCCESS,
            Outcome::MissingEnvironment => ExitCode::from(MISSING_ENVIRONMENT),
        }
    }
}
