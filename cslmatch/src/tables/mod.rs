//! Reference tables consulted by the matcher.
//!
//! - [`GroupingTable`] - ICAO synonym groups from `related.txt`
//! - [`AircraftCodeTable`] - equipment codes from ICAO Doc 8643

mod codes;
mod grouping;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use codes::{AircraftCode, AircraftCodeTable};
pub use grouping::GroupingTable;

/// Errors loading a reference table.
#[derive(Debug, Error)]
pub enum TableError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read a reference file as text, replacing invalid UTF-8.
pub(crate) fn read_table_file(path: &Path) -> Result<String, TableError> {
    let bytes = std::fs::read(path).map_err(|source| TableError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
