//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::{Path, PathBuf};

use super::defaults::*;
use crate::session::CslPaths;

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    /// CSL library settings
    pub csl: CslSettings,
    /// Simulator settings
    pub host: HostSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// CSL library configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CslSettings {
    /// Directory holding the CSL package folders
    pub directory: Option<PathBuf>,
    /// Relations file; defaults to `related.txt` next to the CSL directory
    pub related_file: Option<PathBuf>,
    /// ICAO Doc 8643 export; defaults to `Doc8643.txt` next to the CSL directory
    pub doc8643_file: Option<PathBuf>,
    /// Type resolved when nothing else matches
    pub default_icao: String,
}

/// Simulator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSettings {
    /// Version compared against `AIRCRAFT` line ranges
    pub sim_version: i32,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Directory for the log file
    pub directory: PathBuf,
    /// Trace every matching step at debug level
    pub model_matching: bool,
}

impl Default for CslSettings {
    fn default() -> Self {
        Self {
            directory: None,
            related_file: None,
            doc8643_file: None,
            default_icao: DEFAULT_ICAO.to_string(),
        }
    }
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            sim_version: DEFAULT_SIM_VERSION,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: default_log_dir(),
            model_matching: false,
        }
    }
}

impl CslSettings {
    /// Relations file, explicit or next to the CSL directory.
    pub fn related_path(&self) -> Option<PathBuf> {
        self.related_file
            .clone()
            .or_else(|| sibling_of(self.directory.as_deref()?, RELATED_FILE_NAME))
    }

    /// Doc 8643 file, explicit or next to the CSL directory.
    pub fn doc8643_path(&self) -> Option<PathBuf> {
        self.doc8643_file
            .clone()
            .or_else(|| sibling_of(self.directory.as_deref()?, DOC8643_FILE_NAME))
    }

    /// All three library paths, if a CSL directory is configured.
    pub fn paths(&self) -> Option<CslPaths> {
        Some(CslPaths::new(
            self.directory.clone()?,
            self.related_path()?,
            self.doc8643_path()?,
        ))
    }
}

fn sibling_of(directory: &Path, file_name: &str) -> Option<PathBuf> {
    Some(directory.parent()?.join(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_files_default_next_to_csl_directory() {
        let csl = CslSettings {
            directory: Some(PathBuf::from("/xp/Resources/plugins/xsb/CSL")),
            ..CslSettings::default()
        };
        assert_eq!(
            csl.related_path(),
            Some(PathBuf::from("/xp/Resources/plugins/xsb/related.txt"))
        );
        assert_eq!(
            csl.doc8643_path(),
            Some(PathBuf::from("/xp/Resources/plugins/xsb/Doc8643.txt"))
        );
    }

    #[test]
    fn test_explicit_reference_files_win() {
        let csl = CslSettings {
            directory: Some(PathBuf::from("/xp/CSL")),
            related_file: Some(PathBuf::from("/data/related.txt")),
            ..CslSettings::default()
        };
        let paths = csl.paths().unwrap();
        assert_eq!(paths.related_file, PathBuf::from("/data/related.txt"));
        assert_eq!(paths.doc8643_file, PathBuf::from("/xp/Doc8643.txt"));
    }

    #[test]
    fn test_no_directory_no_paths() {
        assert!(CslSettings::default().paths().is_none());
    }
}
