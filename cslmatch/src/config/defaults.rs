//! Default values and well-known locations.

use std::path::PathBuf;

pub use crate::host::DEFAULT_SIM_VERSION;
pub use crate::matching::DEFAULT_ICAO;

/// Relations file name used when none is configured.
pub const RELATED_FILE_NAME: &str = "related.txt";

/// Doc 8643 file name used when none is configured.
pub const DOC8643_FILE_NAME: &str = "Doc8643.txt";

/// Log file name inside the log directory.
pub const LOG_FILE_NAME: &str = "cslmatch.log";

/// Get the path to the config directory (~/.cslmatch).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cslmatch")
}

/// Get the path to the config file (~/.cslmatch/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

/// Get the default log directory (~/.cslmatch/logs).
pub fn default_log_dir() -> PathBuf {
    config_directory().join("logs")
}

/// Expand ~ to home directory in paths.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_tilde("relative"), PathBuf::from("relative"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/CSL"), home.join("CSL"));
        }
    }

    #[test]
    fn test_config_paths() {
        assert!(config_file_path().ends_with(".cslmatch/config.ini"));
        assert!(default_log_dir().ends_with(".cslmatch/logs"));
    }
}
