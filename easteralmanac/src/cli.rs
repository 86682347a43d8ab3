use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Easter Sunday by the Gauss/Lichtenberg formula.
#[derive(Parser)]
#[command(
    name = "easteralmanac",
    version,
    about = "Easter Sunday and the moveable feasts, as an almanac"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print Easter Sunday of one year.
    Compute(ComputeArgs),
    /// Print Easter Sunday for a range of years.
    Table(TableArgs),
    /// Print every moveable feast of one year.
    Feasts(FeastsArgs),
    /// Answer an almanac attribute through the provider registry.
    Query(QueryArgs),
}

/// Arguments for the `compute` subcommand.
#[derive(clap::Args)]
pub struct ComputeArgs {
    /// Calendar year.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    /// Use the Julian calendar instead of the configured one.
    #[arg(long)]
    pub julian: bool,
}

/// Arguments for the `table` subcommand.
#[derive(clap::Args)]
pub struct TableArgs {
    /// First year (inclusive).
    #[arg(allow_negative_numbers = true)]
    pub from: i32,

    /// Last year (inclusive).
    #[arg(allow_negative_numbers = true)]
    pub to: i32,

    /// Use the Julian calendar instead of the configured one.
    #[arg(long)]
    pub julian: bool,
}

/// Arguments for the `feasts` subcommand.
#[derive(clap::Args)]
pub struct FeastsArgs {
    /// Calendar year.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    /// Use the Julian calendar instead of the configured one.
    #[arg(long)]
    pub julian: bool,
}

/// Arguments for the `query` subcommand.
#[derive(clap::Args)]
pub struct QueryArgs {
    /// Attribute, e.g. `easter`, `orthodox_easter`, `good_friday`.
    pub attr: String,

    /// Reference time in seconds since the Unix epoch (default: now).
    #[arg(long, allow_negative_numbers = true)]
    pub time: Option<i64>,

    /// strftime-style format (default: the configured `ephem_year` format).
    #[arg(short, long)]
    pub format: Option<String>,
}
