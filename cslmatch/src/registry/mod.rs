//! Registry of loaded CSL packages.
//!
//! # Loading
//!
//! [`Registry::load`] runs the whole pipeline for one CSL root:
//!
//! ```text
//! Doc8643.txt + related.txt ──► reference tables
//! CSL root ──► PackageDiscovery ──► header pass (EXPORT_NAME)
//!                                        │
//!                                        ▼
//!                          append new packages in folder order
//!                                        │
//!                                        ▼
//!                          full pass over the new packages
//! ```
//!
//! Loading is additive. Calling `load` again only picks up package folders
//! whose path is not registered yet; nothing is ever unloaded.

mod discovery;

use std::path::Path;

use serde::Serialize;

pub use discovery::{PackageDiscovery, PackageFolder};

use crate::diagnostics::{Diagnostic, DiagnosticSink, Severity};
use crate::host::HostEnvironment;
use crate::manifest::{parse_header, parse_package, ParseContext};
use crate::matching::tier::TIER_COUNT;
use crate::package::{Model, Package, PackageRoots};
use crate::tables::{AircraftCodeTable, GroupingTable};

/// Outcome of a [`Registry::load`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// False when a reference file or the CSL root could not be read.
    pub ok: bool,
    /// Packages appended to the registry.
    pub packages_added: usize,
    /// Folders ignored: already loaded, unreadable or without a valid header.
    pub packages_skipped: usize,
    /// Models kept in the new packages.
    pub models_loaded: usize,
    /// Models discarded because of manifest errors.
    pub models_dropped: usize,
}

/// A manifest that passed the header pass.
struct Candidate {
    package: Package,
    manifest: std::path::PathBuf,
    content: String,
}

/// Ordered, append-only collection of packages plus the reference tables.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    packages: Vec<Package>,
    groupings: GroupingTable,
    codes: AircraftCodeTable,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load reference tables and every new package under `root`.
    ///
    /// Missing reference files are reported and loading continues without
    /// them. Problems inside manifests never fail the load.
    pub fn load(
        &mut self,
        root: &Path,
        related_file: &Path,
        doc8643_file: &Path,
        host: &dyn HostEnvironment,
        sink: &dyn DiagnosticSink,
    ) -> LoadReport {
        let mut report = LoadReport {
            ok: true,
            ..LoadReport::default()
        };

        match AircraftCodeTable::load(doc8643_file) {
            Ok(codes) => {
                tracing::debug!(entries = codes.len(), "Loaded aircraft codes");
                self.codes.extend(codes);
            }
            Err(e) => {
                report.ok = false;
                sink.report(
                    Diagnostic::new(
                        Severity::Warning,
                        format!("could not open ICAO document 8643: {}", e),
                    )
                    .with_path(doc8643_file),
                );
            }
        }

        match GroupingTable::load(related_file) {
            Ok(groupings) => {
                tracing::debug!(entries = groupings.len(), "Loaded related types");
                self.groupings.extend(groupings);
            }
            Err(e) => {
                report.ok = false;
                sink.report(
                    Diagnostic::new(Severity::Warning, format!("could not open related.txt: {}", e))
                        .with_path(related_file),
                );
            }
        }

        let folders = match PackageDiscovery::new(root).find_packages() {
            Ok(folders) => folders,
            Err(e) => {
                report.ok = false;
                sink.report(
                    Diagnostic::new(
                        Severity::Error,
                        format!("could not read CSL directory: {}", e),
                    )
                    .with_path(root),
                );
                return report;
            }
        };

        let candidates = self.read_headers(folders, sink, &mut report);
        let first_new = self.packages.len();
        let mut pending = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            tracing::debug!(package = %candidate.package.name, "Registering package");
            self.packages.push(candidate.package);
            pending.push((candidate.manifest, candidate.content));
        }
        report.packages_added = pending.len();

        let roots = self.roots();
        for (offset, (manifest, content)) in pending.iter().enumerate() {
            let ctx = ParseContext {
                manifest_path: manifest,
                roots: &roots,
                groupings: &self.groupings,
                host,
                sink,
            };
            let package = &mut self.packages[first_new + offset];
            let summary = parse_package(package, content, &ctx);
            report.models_loaded += summary.models;
            report.models_dropped += summary.dropped;
            tracing::info!(
                package = %package.name,
                models = summary.models,
                dropped = summary.dropped,
                "Loaded package"
            );
        }

        tracing::info!(
            added = report.packages_added,
            skipped = report.packages_skipped,
            models = report.models_loaded,
            "CSL load complete"
        );
        report
    }

    /// Header pass over the folders not loaded yet.
    fn read_headers(
        &self,
        folders: Vec<PackageFolder>,
        sink: &dyn DiagnosticSink,
        report: &mut LoadReport,
    ) -> Vec<Candidate> {
        let mut known = self.roots();
        let mut candidates = Vec::new();

        for folder in folders {
            if self.contains_path(&folder.path) {
                tracing::debug!(path = %folder.path.display(), "Package already loaded");
                report.packages_skipped += 1;
                continue;
            }

            let content = match std::fs::read(&folder.manifest) {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(e) => {
                    sink.report(
                        Diagnostic::new(Severity::Warning, format!("could not read manifest: {}", e))
                            .with_path(&folder.manifest),
                    );
                    report.packages_skipped += 1;
                    continue;
                }
            };

            match parse_header(&content, &folder.path, &folder.manifest, &known, sink) {
                Some(package) => {
                    known.push(package.root());
                    candidates.push(Candidate {
                        package,
                        manifest: folder.manifest,
                        content,
                    });
                }
                None => {
                    sink.report(
                        Diagnostic::new(
                            Severity::Warning,
                            "package has no usable EXPORT_NAME and is ignored",
                        )
                        .with_path(&folder.manifest),
                    );
                    report.packages_skipped += 1;
                }
            }
        }

        candidates
    }

    /// Packages in registry order.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn package(&self, index: usize) -> Option<&Package> {
        self.packages.get(index)
    }

    /// Find a package by its exported name.
    pub fn find_package(&self, name: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.name == name)
    }

    /// Whether a package installed at `path` is registered.
    pub fn contains_path(&self, path: &Path) -> bool {
        self.packages.iter().any(|p| p.path == path)
    }

    /// Name and install path of every package, for path substitution.
    pub fn roots(&self) -> PackageRoots {
        self.packages.iter().map(Package::root).collect()
    }

    pub fn groupings(&self) -> &GroupingTable {
        &self.groupings
    }

    pub fn codes(&self) -> &AircraftCodeTable {
        &self.codes
    }

    /// Every model with its package, in registry order.
    pub fn models(&self) -> impl Iterator<Item = (&Package, &Model)> {
        self.packages
            .iter()
            .flat_map(|p| p.models().iter().map(move |m| (p, m)))
    }

    pub fn model_count(&self) -> usize {
        self.packages.iter().map(|p| p.models().len()).sum()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Text listing of every package, model and index entry.
    pub fn dump_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (n, package) in self.packages.iter().enumerate() {
            lines.push(format!(
                "Package {} name = {} path = {}",
                n,
                package.name,
                package.path.display()
            ));
            for (p, model) in package.models().iter().enumerate() {
                lines.push(format!("    Model {} = {} ({})", p, model.file_path(), model));
            }
            for tier in 0..TIER_COUNT {
                let index = package.index(tier);
                if index.is_empty() {
                    continue;
                }
                lines.push(format!("      Tier {}", tier));
                for (key, position) in index.iter() {
                    lines.push(format!("        {} -> {}", key, position));
                }
            }
        }
        lines
    }

    /// Log [`Registry::dump_lines`] at info level.
    pub fn dump(&self) {
        for line in self.dump_lines() {
            tracing::info!("CSL: {}", line);
        }
    }

    #[cfg(test)]
    pub(crate) fn set_groupings(&mut self, groupings: GroupingTable) {
        self.groupings = groupings;
    }

    #[cfg(test)]
    pub(crate) fn set_codes(&mut self, codes: AircraftCodeTable) {
        self.codes = codes;
    }

    #[cfg(test)]
    pub(crate) fn push_package(&mut self, package: Package) {
        self.packages.push(package);
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

    fn write_package(root: &Path, folder: &str, manifest: &str) {
        let dir = root.join(folder);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(MANIFEST_FILE_NAME), manifest).unwrap();
    }

    fn tables(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
        let related = dir.join("related.txt");
        let doc = dir.join("Doc8643.txt");
        fs::write(&related, "B736 B737 B738\n").unwrap();
        fs::write(&doc, "BOEING\t737-800\tB738\tL2J\tM\n").unwrap();
        (related, doc)
    }

    #[test]
    fn test_load_registers_packages_in_folder_order() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("CSL");
        write_package(&root, "B_pkg", "EXPORT_NAME second\nOBJ8_AIRCRAFT b\nICAO B738\n");
        write_package(&root, "A_pkg", "EXPORT_NAME first\nOBJ8_AIRCRAFT a\nICAO A320\n");
        let (related, doc) = tables(temp.path());

        let mut registry = Registry::new();
        let sink = CollectingSink::new();
        let report = registry.load(&root, &related, &doc, &StaticHost::default(), &sink);

        assert!(report.ok);
        assert_eq!(report.packages_added, 2);
        assert_eq!(report.models_loaded, 2);
        assert_eq!(registry.packages()[0].name, "first");
        assert_eq!(registry.packages()[1].name, "second");
        assert_eq!(registry.groupings().group_of("B737"), "B736 B737 B738");
        assert_eq!(registry.codes().get("B738").unwrap().equipment, "L2J");
        assert!(registry.find_package("second").is_some());
        assert_eq!(registry.model_count(), 2);
    }

    #[test]
    fn test_missing_reference_files() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("CSL");
        write_package(&root, "pkg", "EXPORT_NAME pkg\n");

        let mut registry = Registry::new();
        let sink = CollectingSink::new();
        let report = registry.load(
            &root,
            &temp.path().join("missing_related.txt"),
            &temp.path().join("missing_doc.txt"),
            &StaticHost::default(),
            &sink,
        );

        assert!(!report.ok);
        assert_eq!(report.packages_added, 1);
        assert_eq!(sink.count_at_least(Severity::Warning), 2);
    }

    #[test]
    fn test_missing_root() {
        let temp = TempDir::new().unwrap();
        let (related, doc) = tables(temp.path());
        let mut registry = Registry::new();
        let sink = CollectingSink::new();
        let report = registry.load(
            &temp.path().join("nope"),
            &related,
            &doc,
            &StaticHost::default(),
            &sink,
        );
        assert!(!report.ok);
        assert!(registry.is_empty());
        assert_eq!(sink.count_at_least(Severity::Error), 1);
    }

    #[test]
    fn test_duplicate_names_keep_first() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("CSL");
        write_package(&root, "one", "EXPORT_NAME same\n");
        write_package(&root, "two", "EXPORT_NAME same\n");
        let (related, doc) = tables(temp.path());

        let mut registry = Registry::new();
        let sink = CollectingSink::new();
        let report = registry.load(&root, &related, &doc, &StaticHost::default(), &sink);

        assert_eq!(report.packages_added, 1);
        assert_eq!(report.packages_skipped, 1);
        assert!(registry.packages()[0].path.ends_with("one"));
    }

    #[test]
    fn test_dump_lines() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("CSL");
        write_package(&root, "pkg", "EXPORT_NAME pkg\nOBJ8_AIRCRAFT a\nICAO B738\n");
        let (related, doc) = tables(temp.path());

        let mut registry = Registry::new();
        registry.load(&root, &related, &doc, &StaticHost::default(), &CollectingSink::new());

        let lines = registry.dump_lines();
        assert!(lines[0].starts_with("Package 0 name = pkg"));
        assert!(lines.iter().any(|l| l.trim() == "B738 -> 0"));
        assert!(lines.iter().any(|l| l.trim() == "B736 B737 B738 -> 0"));

        // Logging the dump leaves the registry untouched
        registry.dump();
        assert_eq!(registry.dump_lines(), lines);
    }
}
