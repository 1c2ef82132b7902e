//! Equipment based fallback.
//!
//! When no tier key matches, the query type is looked up in the Doc 8643
//! table and compared against the types of installed models, loosening the
//! comparison pass by pass:
//!
//! | pass | category | engine type | engine count | full code |
//! |------|----------|-------------|--------------|-----------|
//! | 1    | yes      | yes         | yes          | yes       |
//! | 2    | yes      | yes         | yes          |           |
//! | 3    | yes      |             | yes          |           |
//! | 4    | yes      | yes         |              |           |
//! | 5    | yes      |             |              |           |

use super::tier;
use crate::package::{Model, Package};
use crate::tables::{AircraftCode, AircraftCodeTable};

/// Comparison rules of one fallback pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquipmentPass {
    /// Pass number, 1 = strictest.
    pub number: u8,
    pub description: &'static str,
    pub engine_type: bool,
    pub engine_count: bool,
    pub full_equipment: bool,
}

impl EquipmentPass {
    const fn new(
        number: u8,
        description: &'static str,
        engine_type: bool,
        engine_count: bool,
        full_equipment: bool,
    ) -> Self {
        Self {
            number,
            description,
            engine_type,
            engine_count,
            full_equipment,
        }
    }

    /// Whether any equipment character is compared.
    ///
    /// Such passes only consider codes of the full three character form.
    pub fn compares_equipment(&self) -> bool {
        self.engine_type || self.engine_count || self.full_equipment
    }

    /// Whether `candidate` is close enough to `wanted` for this pass.
    pub fn accepts(&self, wanted: &AircraftCode, candidate: &AircraftCode) -> bool {
        if candidate.category != wanted.category {
            return false;
        }
        if !self.compares_equipment() {
            return true;
        }
        if !wanted.has_full_equipment() || !candidate.has_full_equipment() {
            return false;
        }
        if self.engine_type && candidate.engine_type() != wanted.engine_type() {
            return false;
        }
        if self.engine_count && candidate.engine_count() != wanted.engine_count() {
            return false;
        }
        !self.full_equipment || candidate.equipment == wanted.equipment
    }
}

/// Fallback passes, strictest first.
pub const EQUIPMENT_PASSES: [EquipmentPass; 5] = [
    EquipmentPass::new(1, "category and configuration", true, true, true),
    EquipmentPass::new(2, "category, engine count and engine type", true, true, false),
    EquipmentPass::new(3, "category and engine count", false, true, false),
    EquipmentPass::new(4, "category and engine type", true, false, false),
    EquipmentPass::new(5, "category", false, false, false),
];

/// A model found by the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EquipmentHit {
    pub package: usize,
    pub model: usize,
    pub pass: u8,
}

/// Search the plain ICAO index of every package for a model of a similar type.
///
/// Packages are scanned in order and each index in key order. `is_usable`
/// rejects candidates the host cannot draw.
pub(crate) fn find_similar(
    packages: &[Package],
    codes: &AircraftCodeTable,
    wanted: &AircraftCode,
    is_usable: impl Fn(&Model) -> bool,
) -> Option<EquipmentHit> {
    for pass in &EQUIPMENT_PASSES {
        tracing::debug!(pass = pass.number, "Equipment fallback: matching {}", pass.description);
        for (package_index, package) in packages.iter().enumerate() {
            for (icao, position) in package.index(tier::ICAO).iter() {
                let Some(model) = package.model(position) else {
                    continue;
                };
                if !is_usable(model) {
                    continue;
                }
                let Some(candidate) = codes.get(icao) else {
                    continue;
                };
                if pass.accepts(wanted, candidate) {
                    tracing::debug!(icao, pass = pass.number, "Equipment fallback found");
                    return Some(EquipmentHit {
                        package: package_index,
                        model: position,
                        pass: pass.number,
                    });
                }
            }
        }
    }
    None
}
