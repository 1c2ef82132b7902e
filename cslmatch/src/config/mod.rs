//! User configuration.
//!
//! Settings are read from `~/.cslmatch/config.ini`:
//!
//! ```ini
//! [csl]
//! directory = ~/X-Plane 12/Resources/plugins/xsb/CSL
//! default_icao = A320
//!
//! [host]
//! sim_version = 12000
//!
//! [logging]
//! model_matching = false
//! ```
//!
//! # Example
//!
//! ```
//! use cslmatch::config::ConfigFile;
//!
//! let config = ConfigFile::default();
//! assert_eq!(config.csl.default_icao, "A320");
//! assert!(config.csl.paths().is_none());
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    config_directory, config_file_path, default_log_dir, expand_tilde, DEFAULT_ICAO,
    DEFAULT_SIM_VERSION, DOC8643_FILE_NAME, LOG_FILE_NAME, RELATED_FILE_NAME,
};
pub use file::ConfigFileError;
pub use settings::{ConfigFile, CslSettings, HostSettings, LoggingSettings};
