//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;

use super::defaults::expand_tilde;
use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [csl] section
    if let Some(section) = ini.section(Some("csl")) {
        if let Some(v) = non_empty(section.get("directory")) {
            config.csl.directory = Some(expand_tilde(v));
        }
        if let Some(v) = non_empty(section.get("related_file")) {
            config.csl.related_file = Some(expand_tilde(v));
        }
        if let Some(v) = non_empty(section.get("doc8643_file")) {
            config.csl.doc8643_file = Some(expand_tilde(v));
        }
        if let Some(v) = section.get("default_icao") {
            let v = v.trim();
            if v.is_empty() || v.contains(char::is_whitespace) {
                return Err(ConfigFileError::InvalidValue {
                    section: "csl".to_string(),
                    key: "default_icao".to_string(),
                    value: v.to_string(),
                    reason: "must be a single ICAO type designator such as A320".to_string(),
                });
            }
            config.csl.default_icao = v.to_string();
        }
    }

    // [host] section
    if let Some(section) = ini.section(Some("host")) {
        if let Some(v) = section.get("sim_version") {
            config.host.sim_version =
                v.trim().parse().map_err(|_| ConfigFileError::InvalidValue {
                    section: "host".to_string(),
                    key: "sim_version".to_string(),
                    value: v.to_string(),
                    reason: "must be an integer such as 12000".to_string(),
                })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = non_empty(section.get("directory")) {
            config.logging.directory = expand_tilde(v);
        }
        if let Some(v) = section.get("model_matching") {
            config.logging.model_matching =
                parse_bool(v).ok_or_else(|| ConfigFileError::InvalidValue {
                    section: "logging".to_string(),
                    key: "model_matching".to_string(),
                    value: v.to_string(),
                    reason: "must be true or false".to_string(),
                })?;
        }
    }

    Ok(config)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
