//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and library loading
//! to reduce duplication across command handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use cslmatch::config::{config_file_path, ConfigFile};
use cslmatch::diagnostics::TeeSink;
use cslmatch::logging::{init_logging, LoggingGuard};
use cslmatch::{CollectingSink, CslPaths, LoadReport, Session, StaticHost, TracingSink};

use crate::commands::common::CslArgs;
use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

/// A loaded library plus everything reported while loading it.
pub struct LoadedLibrary {
    pub session: Session,
    pub paths: CslPaths,
    pub report: LoadReport,
    pub diagnostics: CollectingSink,
}

impl CliRunner {
    /// Load config from `config_path` (or the default location) and start logging.
    pub fn new(config_path: Option<&Path>) -> Result<Self, CliError> {
        let path = config_location(config_path);
        let config = ConfigFile::load_from(&path)?;

        let logging_guard =
            init_logging(&config.logging.directory, config.logging.model_matching)
                .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        tracing::debug!(config = %path.display(), "Configuration loaded");

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Library locations from command line overrides and the config file.
    pub fn csl_paths(&self, args: &CslArgs) -> Result<CslPaths, CliError> {
        let mut csl = self.config.csl.clone();
        if let Some(dir) = &args.dir {
            csl.directory = Some(dir.clone());
        }
        if let Some(related) = &args.related {
            csl.related_file = Some(related.clone());
        }
        if let Some(doc) = &args.doc8643 {
            csl.doc8643_file = Some(doc.clone());
        }
        csl.paths().ok_or(CliError::MissingCslDirectory)
    }

    /// Create a session for the configured simulator and load the library.
    pub fn load(&self, args: &CslArgs) -> Result<LoadedLibrary, CliError> {
        let paths = self.csl_paths(args)?;
        if !paths.root.is_dir() {
            return Err(CliError::Load(format!(
                "'{}' is not a directory",
                paths.root.display()
            )));
        }

        let sim_version = args.sim_version.unwrap_or(self.config.host.sim_version);
        let host = StaticHost::new(sim_version);
        let session = Session::new(Arc::new(host))
            .with_default_icao(self.config.csl.default_icao.clone());

        tracing::info!(root = %paths.root.display(), sim_version, "Loading CSL library");

        let diagnostics = CollectingSink::new();
        let report = {
            let tracing_sink = TracingSink;
            let sink = TeeSink::new(&tracing_sink, &diagnostics);
            session.load(&paths, &sink)
        };

        Ok(LoadedLibrary {
            session,
            paths,
            report,
            diagnostics,
        })
    }
}

/// Config file location for `--config`, or the default.
pub fn config_location(config_path: Option<&Path>) -> PathBuf {
    config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(config_file_path)
}
