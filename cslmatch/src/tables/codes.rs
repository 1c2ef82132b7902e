//! Aircraft type designators from ICAO Doc 8643.
//!
//! The reference file is tab separated. Sample row:
//!
//! ```text
//! AEROSPATIALE	SA-342 Gazelle	GAZL	H1T	L
//! ```
//!
//! Column 3 is the ICAO type, column 4 the equipment code (aircraft type,
//! engine count, engine type) and the first character of column 5 the wake
//! turbulence category. Empty cells are collapsed before counting columns.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use super::{read_table_file, TableError};
use crate::manifest::{manifest_lines, tokenize};

/// Separators of the Doc 8643 file.
const CODE_SEPARATORS: &str = "\t\r\n";

/// Equipment and category of one ICAO type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AircraftCode {
    pub icao: String,
    /// Equipment code such as `L2J`.
    pub equipment: String,
    /// Wake category: `L`, `M`, `H`, `J`, or `V` for rotorcraft.
    pub category: char,
}

impl AircraftCode {
    pub fn new(icao: impl Into<String>, equipment: impl Into<String>, category: char) -> Self {
        Self {
            icao: icao.into(),
            equipment: equipment.into(),
            category,
        }
    }

    /// Whether the equipment code has the full `type/count/engine` form.
    pub fn has_full_equipment(&self) -> bool {
        self.equipment.chars().count() == 3
    }

    /// Engine count character (`2` in `L2J`).
    pub fn engine_count(&self) -> Option<char> {
        self.equipment.chars().nth(1)
    }

    /// Engine type character (`J` in `L2J`).
    pub fn engine_type(&self) -> Option<char> {
        self.equipment.chars().nth(2)
    }
}

/// ICAO type → aircraft code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AircraftCodeTable {
    codes: HashMap<String, AircraftCode>,
}

impl AircraftCodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse Doc 8643 content. Rows with fewer than five columns are ignored.
    pub fn parse(content: &str) -> Self {
        let mut table = Self::new();
        for line in manifest_lines(content) {
            let columns = tokenize(line, CODE_SEPARATORS, 0);
            if columns.len() < 5 {
                continue;
            }
            let Some(category) = columns[4].chars().next() else {
                continue;
            };
            table.insert(AircraftCode::new(columns[2], columns[3], category));
        }
        table
    }

    /// Load a Doc 8643 file.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        Ok(Self::parse(&read_table_file(path)?))
    }

    /// Insert or replace the entry for `code.icao`.
    pub fn insert(&mut self, code: AircraftCode) {
        self.codes.insert(code.icao.clone(), code);
    }

    /// Merge another table into this one.
    pub fn extend(&mut self, other: AircraftCodeTable) {
        self.codes.extend(other.codes);
    }

    pub fn get(&self, icao: &str) -> Option<&AircraftCode> {
        self.codes.get(icao)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
