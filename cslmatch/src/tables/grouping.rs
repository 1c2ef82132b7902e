//! ICAO synonym groups from `related.txt`.
//!
//! Each non-comment line lists ICAO types that can stand in for each other:
//!
//! ```text
//! ; Boeing 737 family
//! B731 B732 B733 B734 B735 B736 B737 B738 B739
//! ```
//!
//! Every type on a line maps to the same group string, the line's types joined
//! by single spaces.

use std::collections::HashMap;
use std::path::Path;

use super::{read_table_file, TableError};
use crate::manifest::{manifest_lines, tokenize, MANIFEST_SEPARATORS};

/// Lines starting with this character are comments.
const COMMENT_PREFIX: char = ';';

/// ICAO type → synonym group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupingTable {
    groups: HashMap<String, String>,
}

impl GroupingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse relations file content.
    pub fn parse(content: &str) -> Self {
        let mut table = Self::new();
        table.merge_str(content);
        table
    }

    /// Load a relations file.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        Ok(Self::parse(&read_table_file(path)?))
    }

    /// Add the groups of `content`, overwriting earlier groups of the same types.
    pub fn merge_str(&mut self, content: &str) {
        for line in manifest_lines(content) {
            if line.starts_with(COMMENT_PREFIX) {
                continue;
            }
            let types = tokenize(line, MANIFEST_SEPARATORS, 0);
            if types.is_empty() {
                continue;
            }
            let group = types.join(" ");
            for icao in types {
                self.groups.insert(icao.to_string(), group.clone());
            }
        }
    }

    /// Merge another table into this one.
    pub fn extend(&mut self, other: GroupingTable) {
        self.groups.extend(other.groups);
    }

    /// Group of `icao`, or an empty string when it has none.
    pub fn group_of(&self, icao: &str) -> &str {
        self.groups.get(icao).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
