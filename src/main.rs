use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Mode};
use service::Service;

mod cli;
mod domain;
mod logging;
mod provider;
mod service;
#[cfg(test)]
mod testing;

pub(crate) use provider::LogSink;

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    let mode = args.mode();
    logging::init(mode, args.verbose);

    let outcome = Service::new(args).run().inspect_err(|err| {
        if mode == Mode::Switch {
            log::error!("{:#}", err);
        }
    })?;
    Ok(outcome.into())
}
