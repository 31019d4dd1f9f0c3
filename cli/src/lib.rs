//! Terminal front end over the `lectern` library.

use clap::Parser;

pub mod command;

/// Top-level argument parser for the `lectern` binary.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub commands: command::Commands,
}
