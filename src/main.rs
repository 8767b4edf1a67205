#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! ssmock-manage — storage service management commands for the storage service mock.

mod cli;
mod client;
mod commands;
mod config;
mod errors;
mod logging;
mod types;

use clap::Parser;
use tracing::debug;

use cli::{Cli, write_error};
use client::HttpReplicator;
use config::Config;
use errors::ManageError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    if let Err(err) = run(&cli) {
        write_error(&err);
        std::process::exit(err.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), ManageError> {
    let config = Config::from_env(cli.timeout)?;
    let replicator = HttpReplicator::new(&config)?;
    debug!(
        endpoint = replicator.url(),
        timeout_secs = config.timeout.as_secs(),
        "loaded configuration"
    );

    commands::dispatch(&cli.command, &replicator)
}
