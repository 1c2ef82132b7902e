//! Shared matching session.
//!
//! A [`Session`] owns the registry, the host boundary and the default type.
//! Loading takes the write lock and resolution takes a read lock, so lookups
//! from several threads never observe a half-loaded package.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::diagnostics::DiagnosticSink;
use crate::host::HostEnvironment;
use crate::matching::{MatchQuality, Matcher, ModelHandle, DEFAULT_ICAO};
use crate::package::Model;
use crate::registry::{LoadReport, Registry};

/// Locations of a CSL library and its reference tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CslPaths {
    pub root: PathBuf,
    pub related_file: PathBuf,
    pub doc8643_file: PathBuf,
}

impl CslPaths {
    pub fn new(
        root: impl Into<PathBuf>,
        related_file: impl Into<PathBuf>,
        doc8643_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            root: root.into(),
            related_file: related_file.into(),
            doc8643_file: doc8643_file.into(),
        }
    }
}

/// Owned result of [`Session::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub handle: ModelHandle,
    pub package_name: String,
    pub model: Model,
    pub quality: MatchQuality,
}

/// Registry plus host, safe to share between threads.
pub struct Session {
    registry: RwLock<Registry>,
    host: Arc<dyn HostEnvironment>,
    default_icao: String,
}

impl Session {
    pub fn new(host: Arc<dyn HostEnvironment>) -> Self {
        Self {
            registry: RwLock::new(Registry::new()),
            host,
            default_icao: DEFAULT_ICAO.to_string(),
        }
    }

    /// Use `icao` as the type of last resort.
    pub fn with_default_icao(mut self, icao: impl Into<String>) -> Self {
        self.default_icao = icao.into();
        self
    }

    pub fn default_icao(&self) -> &str {
        &self.default_icao
    }

    pub fn host(&self) -> &dyn HostEnvironment {
        self.host.as_ref()
    }

    /// Load new packages from `paths`.
    pub fn load(&self, paths: &CslPaths, sink: &dyn DiagnosticSink) -> LoadReport {
        self.registry.write().load(
            &paths.root,
            &paths.related_file,
            &paths.doc8643_file,
            self.host.as_ref(),
            sink,
        )
    }

    /// Resolve an aircraft identification. See [`Matcher::resolve`].
    pub fn resolve(
        &self,
        icao: &str,
        airline: &str,
        livery: &str,
        allow_default: bool,
    ) -> Option<Resolution> {
        let registry = self.registry.read();
        let matcher = Matcher::new(&registry, self.host.as_ref(), &self.default_icao);
        matcher
            .resolve(icao, airline, livery, allow_default)
            .map(|found| Resolution {
                handle: found.handle,
                package_name: found.package.name.clone(),
                model: found.model.clone(),
                quality: found.quality,
            })
    }

    /// Copy of the model behind `handle`.
    pub fn model(&self, handle: ModelHandle) -> Option<Model> {
        self.registry
            .read()
            .package(handle.package)
            .and_then(|p| p.model(handle.model))
            .cloned()
    }

    /// Run `f` with read access to the registry.
    pub fn with_registry<R>(&self, f: impl FnOnce(&Registry) -> R) -> R {
        f(&*self.registry.read())
    }

    /// Whether a package exporting `name` is loaded.
    pub fn has_package(&self, name: &str) -> bool {
        self.registry.read().find_package(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;
    use crate::host::StaticHost;
    use crate::package::MANIFEST_FILE_NAME;
    use std::fs;
    use tempfile::TempDir;

    fn library(temp: &TempDir) -> CslPaths {
        let root = temp.path().join("CSL");
        let pkg = root.join("Bluebell");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(
            pkg.join(MANIFEST_FILE_NAME),
            "EXPORT_NAME __Bluebell\nOBJ8_AIRCRAFT a320\nICAO A320\nOBJ8_AIRCRAFT b738\nAIRLINE B738 SWA\n",
        )
        .unwrap();
        let related = temp.path().join("related.txt");
        let doc = temp.path().join("Doc8643.txt");
        fs::write(&related, "").unwrap();
        fs::write(&doc, "").unwrap();
        CslPaths::new(root, related, doc)
    }

    #[test]
    fn test_load_and_resolve() {
        let temp = TempDir::new().unwrap();
        let paths = library(&temp);
        let session = Session::new(Arc::new(StaticHost::default()));

        let report = session.load(&paths, &CollectingSink::new());
        assert!(report.ok);
        assert!(session.has_package("__Bluebell"));

        let found = session.resolve("B738", "SWA", "", true).unwrap();
        assert_eq!(found.quality, MatchQuality::Tier(1));
        assert_eq!(found.package_name, "__Bluebell");
        assert_eq!(session.model(found.handle).unwrap(), found.model);
    }

    #[test]
    fn test_default_icao() {
        let temp = TempDir::new().unwrap();
        let paths = library(&temp);
        let session = Session::new(Arc::new(StaticHost::default()));
        session.load(&paths, &CollectingSink::new());

        let found = session.resolve("ZZZZ", "", "", true).unwrap();
        assert_eq!(found.quality, MatchQuality::Default);
        assert_eq!(found.model.icao, "A320");

        let session = Session::new(Arc::new(StaticHost::default())).with_default_icao("C172");
        session.load(&paths, &CollectingSink::new());
        assert!(session.resolve("ZZZZ", "", "", true).is_none());
    }

    #[test]
    fn test_reload_is_additive() {
        let temp = TempDir::new().unwrap();
        let paths = library(&temp);
        let session = Session::new(Arc::new(StaticHost::default()));

        let first = session.load(&paths, &CollectingSink::new());
        let second = session.load(&paths, &CollectingSink::new());
        assert_eq!(first.packages_added, 1);
        assert_eq!(second.packages_added, 0);
        assert_eq!(second.packages_skipped, 1);
        assert_eq!(session.with_registry(|r| r.len()), 1);
    }

    #[test]
    fn test_concurrent_resolve() {
        let temp = TempDir::new().unwrap();
        let paths = library(&temp);
        let session = Arc::new(Session::new(Arc::new(StaticHost::default())));
        session.load(&paths, &CollectingSink::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let session = Arc::clone(&session);
                std::thread::spawn(move || session.resolve("A320", "", "", false))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().is_some());
        }
    }
}
