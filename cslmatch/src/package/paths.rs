//! Manifest path handling.
//!
//! Manifests refer to their files relative to a package *name*: a line such
//! as `OBJECT __Bluebell/B738/b738.obj` is resolved by replacing the
//! `__Bluebell` prefix with the install directory of the package exporting
//! that name. Separators are normalized first so that manifests written on
//! any platform resolve the same way.

use std::path::Path;

use thiserror::Error;

/// Errors resolving a manifest path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// No registered package name is a prefix of the path.
    #[error("package not found for path '{0}'")]
    PackageNotFound(String),
}

/// Map every `/`, `\` and `:` to `/`.
///
/// # Examples
///
/// ```
/// use cslmatch::package::normalize_separators;
///
/// assert_eq!(normalize_separators(r"pkg\B738:b738.obj"), "pkg/B738/b738.obj");
/// ```
pub fn normalize_separators(path: &str) -> String {
    path.chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '/',
            other => other,
        })
        .collect()
}

/// Render an install directory as a `/`-separated string.
pub fn install_path_string(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// A registered package as seen by path substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRoot {
    /// Exported package name.
    pub name: String,
    /// Install directory with `/` separators.
    pub path: String,
}

impl PackageRoot {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// A path after package substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath<'a> {
    /// Absolute path with the package name replaced.
    pub path: String,
    /// Package whose name matched.
    pub root: &'a PackageRoot,
}

/// Snapshot of all registered packages, in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageRoots {
    roots: Vec<PackageRoot>,
}

impl PackageRoots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, root: PackageRoot) {
        self.roots.push(root);
    }

    /// Whether a package exporting `name` is registered.
    pub fn contains_name(&self, name: &str) -> bool {
        self.roots.iter().any(|r| r.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PackageRoot> {
        self.roots.iter()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Replace the leading package name of `path` with its install directory.
    ///
    /// Packages are tried in registry order and the first whose name is a
    /// string prefix of `path` wins.
    pub fn substitute(&self, path: &str) -> Result<ResolvedPath<'_>, PathError> {
        substitute_package_root(path, self)
    }
}

impl FromIterator<PackageRoot> for PackageRoots {
    fn from_iter<T: IntoIterator<Item = PackageRoot>>(iter: T) -> Self {
        Self {
            roots: iter.into_iter().collect(),
        }
    }
}

/// Replace the leading package name of `path` with its install directory.
///
/// # Examples
///
/// ```
/// use cslmatch::package::{substitute_package_root, PackageRoot, PackageRoots};
///
/// let roots: PackageRoots = vec![PackageRoot::new("__Bluebell", "/csl/Bluebell")]
///     .into_iter()
///     .collect();
/// let resolved = substitute_package_root("__Bluebell/B738/b738.obj", &roots).unwrap();
/// assert_eq!(resolved.path, "/csl/Bluebell/B738/b738.obj");
/// ```
pub fn substitute_package_root<'a>(
    path: &str,
    roots: &'a PackageRoots,
) -> Result<ResolvedPath<'a>, PathError> {
    roots
        .iter()
        .find(|root| !root.name.is_empty() && path.starts_with(root.name.as_str()))
        .map(|root| ResolvedPath {
            path: format!("{}{}", root.path, &path[root.name.len()..]),
            root,
        })
        .ok_or_else(|| PathError::PackageNotFound(path.to_string()))
}
