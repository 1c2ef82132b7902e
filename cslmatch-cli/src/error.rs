//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::path::PathBuf;
use std::process;

use cslmatch::config::ConfigFileError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file could not be read or written
    ConfigFile(ConfigFileError),
    /// No CSL directory given on the command line or in the config
    MissingCslDirectory,
    /// The CSL library could not be read at all
    Load(String),
    /// No model matched the query
    NoMatch { icao: String },
    /// Failed to produce JSON output
    Json(serde_json::Error),
    /// Failed to write output file
    FileWrite { path: PathBuf, error: std::io::Error },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::MissingCslDirectory => {
                eprintln!();
                eprintln!("Either:");
                eprintln!("  1. Pass the library location: cslmatch scan --dir <CSL directory>");
                eprintln!("  2. Or set [csl] directory in the config file (cslmatch config init)");
            }
            CliError::NoMatch { .. } => {
                eprintln!();
                eprintln!("Check that related.txt and Doc8643.txt were found (cslmatch scan).");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::ConfigFile(e) => write!(f, "{}", e),
            CliError::MissingCslDirectory => write!(f, "No CSL directory configured"),
            CliError::Load(msg) => write!(f, "Failed to load CSL library: {}", msg),
            CliError::NoMatch { icao } => write!(f, "No model found for {}", icao),
            CliError::Json(e) => write!(f, "Failed to encode JSON: {}", e),
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path.display(), error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigFile(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::FileWrite { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::ConfigFile(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}
