//! demo-deploy - publish a built demo directory once per source revision.

mod cli;
mod config;
mod deploy;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::DeployConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = DeployConfig::load(&cli)?;

    match &cli.command {
        Commands::Publish { .. } => cli::deploy::publish(&config).map(|_| ()),
        Commands::Status { .. } => cli::deploy::status(&config).map(|_| ()),
    }
}
