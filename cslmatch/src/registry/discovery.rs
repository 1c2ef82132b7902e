//! CSL package folder discovery.
//!
//! Every immediate subdirectory of the CSL root that contains an
//! `xsb_aircraft.txt` manifest is a package candidate.

use std::path::{Path, PathBuf};

use crate::package::MANIFEST_FILE_NAME;

/// A package folder found under the CSL root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFolder {
    /// Folder name.
    pub name: String,

    /// Full path to the package folder.
    pub path: PathBuf,

    /// Full path to the manifest.
    pub manifest: PathBuf,
}

/// Finds package folders in a CSL root directory.
#[derive(Debug, Clone)]
pub struct PackageDiscovery {
    root: PathBuf,
}

impl PackageDiscovery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find all package folders.
    ///
    /// Returns folders sorted by name. Hidden folders and folders without a
    /// manifest are left out.
    pub fn find_packages(&self) -> Result<Vec<PackageFolder>, std::io::Error> {
        let mut folders = Vec::new();

        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();

            // Skip non-directories
            if !path.is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();

            // Skip hidden folders
            if name.starts_with('.') {
                continue;
            }

            let manifest = path.join(MANIFEST_FILE_NAME);
            if !manifest.is_file() {
                tracing::debug!(path = %path.display(), "No manifest, skipping folder");
                continue;
            }

            folders.push(PackageFolder {
                name,
                path,
                manifest,
            });
        }

        folders.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(folders)
    }
}
