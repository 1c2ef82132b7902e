//! Model matching.
//!
//! [`Matcher::resolve`] picks the installed model that best fits an aircraft
//! identification. The search runs in three stages:
//!
//! 1. **Tiers**: exact lookups in the eight package indices, best tier first
//!    (see [`tier`]).
//! 2. **Equipment**: a model of a type with the same wake category and,
//!    preferably, the same engine layout (see [`fallback`]).
//! 3. **Default**: the same search for the configured default type.
//!
//! Models the host cannot draw right now (a legacy aircraft not loaded into a
//! multiplayer slot, an OBJ file the renderer has not resolved) are skipped
//! and the search continues.

pub mod fallback;
pub mod tier;

use std::fmt;

use serde::Serialize;

use crate::host::HostEnvironment;
use crate::package::{Model, Package, Representation};
use crate::registry::Registry;
use tier::{KeyParts, TIERS};

/// Type used when a configuration does not name a default.
pub const DEFAULT_ICAO: &str = "A320";

/// How a model was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchQuality {
    /// Found through the index of this tier, 0 = best.
    Tier(usize),
    /// Found by the equipment fallback in the given pass.
    Equipment(u8),
    /// Found while resolving the default type.
    Default,
}

impl MatchQuality {
    /// Numeric quality: the tier, or -1 for anything found by a fallback.
    pub fn as_i32(&self) -> i32 {
        match self {
            MatchQuality::Tier(tier) => *tier as i32,
            MatchQuality::Equipment(_) | MatchQuality::Default => -1,
        }
    }
}

impl fmt::Display for MatchQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchQuality::Tier(tier) => write!(f, "tier {}", tier),
            MatchQuality::Equipment(pass) => write!(f, "equipment pass {}", pass),
            MatchQuality::Default => write!(f, "default model"),
        }
    }
}

/// Stable reference to a model inside a registry.
///
/// Packages are never removed and their models never change after loading,
/// so a handle stays valid for the lifetime of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ModelHandle {
    pub package: usize,
    pub model: usize,
}

/// Result of a successful resolution.
#[derive(Debug, Clone, Copy)]
pub struct ModelMatch<'a> {
    pub handle: ModelHandle,
    pub package: &'a Package,
    pub model: &'a Model,
    pub quality: MatchQuality,
}

/// Resolves aircraft identifications against a loaded registry.
pub struct Matcher<'a> {
    registry: &'a Registry,
    host: &'a dyn HostEnvironment,
    default_icao: &'a str,
}

impl<'a> Matcher<'a> {
    pub fn new(registry: &'a Registry, host: &'a dyn HostEnvironment, default_icao: &'a str) -> Self {
        Self {
            registry,
            host,
            default_icao,
        }
    }

    /// Find the best model for `icao`, `airline` and `livery`.
    ///
    /// Empty `airline` or `livery` mean unknown. With `allow_default`, an
    /// unmatched type falls back to the default type, unless it already is
    /// the default type.
    pub fn resolve(
        &self,
        icao: &str,
        airline: &str,
        livery: &str,
        allow_default: bool,
    ) -> Option<ModelMatch<'a>> {
        if let Some(found) = self.match_tiers(icao, airline, livery) {
            return Some(found);
        }
        if let Some(found) = self.match_equipment(icao) {
            return Some(found);
        }

        if !allow_default || icao == self.default_icao {
            tracing::debug!(icao, "No model found");
            return None;
        }

        tracing::debug!(icao, default = self.default_icao, "Trying default model");
        self.resolve(self.default_icao, "", "", false)
            .map(|found| ModelMatch {
                quality: MatchQuality::Default,
                ..found
            })
    }

    /// Whether the host can draw `model` right now.
    pub fn is_usable(&self, model: &Model) -> bool {
        match &model.representation {
            Representation::Legacy { path } => self
                .host
                .legacy_slot(path)
                .is_some_and(|slot| slot < self.host.loaded_aircraft_count()),
            Representation::Object { path, .. } => self.host.object_index(path).is_some(),
            Representation::Obj8 { .. } => true,
        }
    }

    fn match_tiers(&self, icao: &str, airline: &str, livery: &str) -> Option<ModelMatch<'a>> {
        let group = self.registry.groupings().group_of(icao);
        let parts = KeyParts {
            icao,
            group,
            airline,
            livery,
        };
        tracing::debug!(icao, airline, livery, group, "Matching");

        for (tier, descriptor) in TIERS.iter().enumerate() {
            let key = match descriptor.key(&parts) {
                Ok(key) => key,
                Err(reason) => {
                    tracing::debug!(tier, "Skipping tier: {}", reason);
                    continue;
                }
            };
            tracing::debug!(tier, key = %key, "Probing");

            for (package_index, package) in self.registry.packages().iter().enumerate() {
                let Some((position, model)) = package.lookup(tier, &key) else {
                    continue;
                };
                if !self.is_usable(model) {
                    tracing::debug!(tier, path = model.file_path(), "Candidate not loaded by host");
                    continue;
                }
                tracing::debug!(
                    tier,
                    icao = %model.icao,
                    path = model.file_path(),
                    "Found"
                );
                return Some(ModelMatch {
                    handle: ModelHandle {
                        package: package_index,
                        model: position,
                    },
                    package,
                    model,
                    quality: MatchQuality::Tier(tier),
                });
            }
        }
        None
    }

    fn match_equipment(&self, icao: &str) -> Option<ModelMatch<'a>> {
        let codes = self.registry.codes();
        let Some(wanted) = codes.get(icao) else {
            tracing::debug!(icao, "No aircraft code for type");
            return None;
        };
        tracing::debug!(
            icao,
            category = %wanted.category,
            equipment = %wanted.equipment,
            "Looking for similar aircraft"
        );

        let packages = self.registry.packages();
        let hit = fallback::find_similar(packages, codes, wanted, |m| self.is_usable(m))?;
        let package = &packages[hit.package];
        let model = package.model(hit.model)?;
        Some(ModelMatch {
            handle: ModelHandle {
                package: hit.package,
                model: hit.model,
            },
            package,
            model,
            quality: MatchQuality::Equipment(hit.pass),
        })
    }
}
