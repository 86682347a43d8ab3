mod cli;
mod commands;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;
use easteralmanac::AlmanacConfig;
use tracing::debug;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => AlmanacConfig::load(path)?,
        None => AlmanacConfig::default(),
    };
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Compute(args) => commands::compute(&config, args),
        Command::Table(args) => commands::table(&config, args),
        Command::Feasts(args) => commands::feasts(&config, args),
        Command::Query(args) => commands::query(&config, args),
    }
}
