//! CSL package type.
//!
//! The [`Package`] struct holds the models declared by one package manifest
//! and the eight match indices used by the resolver.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use super::model::Model;
use super::paths::{install_path_string, PackageRoot};
use crate::matching::tier::TIER_COUNT;

/// Map from a composite match key to the position of the first model that
/// registered it.
///
/// Keys are kept in sorted order so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchIndex {
    entries: BTreeMap<String, usize>,
}

impl MatchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key` unless it is already present.
    ///
    /// Returns `true` if the key was written. An existing entry is never
    /// overwritten.
    pub fn insert_first(&mut self, key: impl Into<String>, position: usize) -> bool {
        match self.entries.entry(key.into()) {
            Entry::Vacant(slot) => {
                slot.insert(position);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.entries.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A loaded CSL package.
///
/// Model order is significant: it breaks ties between models registering the
/// same key and is the order the package is searched in.
#[derive(Debug, Clone)]
pub struct Package {
    /// Name from `EXPORT_NAME`, used for path substitution and `DEPENDENCY`.
    pub name: String,

    /// Install directory of the package.
    pub path: PathBuf,

    models: Vec<Model>,
    indices: [MatchIndex; TIER_COUNT],
}

impl Package {
    /// Create an empty package, as produced by the header pass.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            models: Vec::new(),
            indices: Default::default(),
        }
    }

    /// A header is valid once both name and path are known.
    pub fn has_valid_header(&self) -> bool {
        !self.name.is_empty() && !self.path.as_os_str().is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name of the install directory.
    pub fn folder_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// This package as seen by path substitution.
    pub fn root(&self) -> PackageRoot {
        PackageRoot::new(self.name.clone(), install_path_string(&self.path))
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn model(&self, position: usize) -> Option<&Model> {
        self.models.get(position)
    }

    /// Match index for `tier` (0 = best, 7 = worst).
    ///
    /// # Panics
    ///
    /// Panics if `tier >= TIER_COUNT`.
    pub fn index(&self, tier: usize) -> &MatchIndex {
        &self.indices[tier]
    }

    /// All eight indices, best tier first.
    pub fn indices(&self) -> &[MatchIndex; TIER_COUNT] {
        &self.indices
    }

    /// Look up `key` in the index of `tier`.
    pub fn lookup(&self, tier: usize, key: &str) -> Option<(usize, &Model)> {
        let position = self.indices.get(tier)?.get(key)?;
        self.models.get(position).map(|m| (position, m))
    }

    /// Replace the contents produced by the full pass.
    pub(crate) fn set_contents(&mut self, models: Vec<Model>, indices: [MatchIndex; TIER_COUNT]) {
        self.models = models;
        self.indices = indices;
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} models)",
            self.name,
            self.path.display(),
            self.models.len()
        )
    }
}
