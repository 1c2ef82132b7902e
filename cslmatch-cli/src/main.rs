//! cslmatch CLI - Command-line interface
//!
//! Loads CSL libraries and shows which model an aircraft would be drawn with.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod error;
mod runner;

use commands::config::ConfigCommands;
use commands::dump::DumpArgs;
use commands::resolve::MatchArgs;
use commands::scan::ScanArgs;
use error::CliError;
use runner::CliRunner;

#[derive(Parser)]
#[command(name = "cslmatch")]
#[command(version, about = "Inspect CSL aircraft libraries and test model matching", long_about = None)]
struct Cli {
    /// Configuration file (default: ~/.cslmatch/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a CSL library and report packages, models and problems
    Scan(ScanArgs),

    /// Find the model used for an ICAO type, airline and livery
    Match(MatchArgs),

    /// Print every package, model and match index entry
    Dump(DumpArgs),

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Config { command } => commands::config::run(command, config_path),
        Commands::Scan(args) => commands::scan::run(&CliRunner::new(config_path)?, args),
        Commands::Match(args) => commands::resolve::run(&CliRunner::new(config_path)?, args),
        Commands::Dump(args) => commands::dump::run(&CliRunner::new(config_path)?, args),
    }
}
