//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! Produces the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let directory = optional_path(config.csl.directory.as_deref());
    let related_file = optional_path(config.csl.related_file.as_deref());
    let doc8643_file = optional_path(config.csl.doc8643_file.as_deref());
    let model_matching = if config.logging.model_matching {
        "true"
    } else {
        "false"
    };

    format!(
        r#"[csl]
; Directory containing the CSL package folders (one xsb_aircraft.txt per folder)
; Example: directory = ~/X-Plane 12/Resources/plugins/xsb/CSL
directory = {}
; Relations file grouping similar ICAO types
; If empty, defaults to related.txt next to the CSL directory
related_file = {}
; ICAO Doc 8643 aircraft type export (tab separated)
; If empty, defaults to Doc8643.txt next to the CSL directory
doc8643_file = {}
; ICAO type used when no model matches (default: A320)
default_icao = {}

[host]
; Simulator version compared against AIRCRAFT <min> <max> lines (default: 12000)
sim_version = {}

[logging]
; Directory for cslmatch.log (cleared on each run)
directory = {}
; Log every model matching step at debug level (default: false)
model_matching = {}
"#,
        directory,
        related_file,
        doc8643_file,
        config.csl.default_icao,
        config.host.sim_version,
        path_to_string(&config.logging.directory),
        model_matching,
    )
}

fn optional_path(path: Option<&Path>) -> String {
    path.map(path_to_string).unwrap_or_default()
}

/// Convert path to string, collapsing home dir to ~.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_written_config_parses_back() {
        let mut config = ConfigFile::default();
        config.csl.directory = Some(PathBuf::from("/xp/CSL"));
        config.csl.default_icao = "B738".to_string();
        config.host.sim_version = 11000;
        config.logging.directory = PathBuf::from("/var/log/cslmatch");
        config.logging.model_matching = true;

        let content = to_config_string(&config);
        let ini = ini::Ini::load_from_str(&content).unwrap();
        let parsed = super::super::parser::parse_ini(&ini).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_unset_paths_written_empty() {
        let content = to_config_string(&ConfigFile::default());
        assert!(content.contains("directory = \n"));
        assert!(content.contains("default_icao = A320"));
    }
}
