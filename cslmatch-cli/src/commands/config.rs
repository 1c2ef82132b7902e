//! Configuration management CLI commands.
//!
//! Provides `config path`, `config show` and `config init` for locating,
//! viewing and creating the configuration file.

use std::path::Path;

use clap::Subcommand;
use cslmatch::config::ConfigFile;

use crate::error::CliError;
use crate::runner::config_location;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Show the effective configuration
    Show,

    /// Write a default configuration file if none exists
    Init,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands, config_path: Option<&Path>) -> Result<(), CliError> {
    let path = config_location(config_path);
    match command {
        ConfigCommands::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigCommands::Show => run_show(&path),
        ConfigCommands::Init => run_init(&path),
    }
}

/// Show the effective configuration.
fn run_show(path: &Path) -> Result<(), CliError> {
    let config = ConfigFile::load_from(path)?;

    if !path.exists() {
        println!("; {} does not exist, showing defaults", path.display());
    }
    print!("{}", config.to_ini_string());

    if let Some(paths) = config.csl.paths() {
        println!();
        println!("; Effective reference files:");
        println!(";   related.txt: {}", paths.related_file.display());
        println!(";   Doc8643.txt: {}", paths.doc8643_file.display());
    }
    Ok(())
}

/// Create the configuration file with defaults.
fn run_init(path: &Path) -> Result<(), CliError> {
    if ConfigFile::ensure_exists_at(path)? {
        println!("Created {}", path.display());
        println!("Set [csl] directory to your CSL folder to get started.");
    } else {
        println!("{} already exists, leaving it unchanged", path.display());
    }
    Ok(())
}
