//! Boundary to the simulator host.
//!
//! The matching core never talks to X-Plane directly. Everything it needs
//! from the running simulator (its version, which legacy aircraft are loaded
//! into multiplayer slots, which OBJ models the renderer has resolved) comes
//! through [`HostEnvironment`].

use std::collections::{HashMap, HashSet};

/// Simulator state consulted while loading and matching.
pub trait HostEnvironment: Send + Sync {
    /// Running simulator version, compared against `AIRCRAFT <min> <max>`.
    fn sim_version(&self) -> i32;

    /// Number of aircraft slots currently loaded by the simulator.
    fn loaded_aircraft_count(&self) -> usize;

    /// Slot a legacy `.acf` model is loaded into, if any.
    fn legacy_slot(&self, path: &str) -> Option<usize>;

    /// Runtime object index of an OBJ model, if the renderer resolved it.
    fn object_index(&self, path: &str) -> Option<usize>;
}

/// Default X-Plane version used when nothing is configured.
pub const DEFAULT_SIM_VERSION: i32 = 12000;

/// A host described by plain values.
///
/// Used by the CLI and by tests. By default every OBJ model counts as
/// resolved and no legacy aircraft is loaded.
#[derive(Debug, Clone)]
pub struct StaticHost {
    sim_version: i32,
    loaded_aircraft: usize,
    legacy_slots: HashMap<String, usize>,
    unresolved_objects: HashSet<String>,
    resolve_objects: bool,
}

impl StaticHost {
    pub fn new(sim_version: i32) -> Self {
        Self {
            sim_version,
            loaded_aircraft: 0,
            legacy_slots: HashMap::new(),
            unresolved_objects: HashSet::new(),
            resolve_objects: true,
        }
    }

    /// Set the number of loaded aircraft slots.
    pub fn with_loaded_aircraft(mut self, count: usize) -> Self {
        self.loaded_aircraft = count;
        self
    }

    /// Mark a legacy aircraft as loaded into `slot`.
    pub fn with_legacy_slot(mut self, path: impl Into<String>, slot: usize) -> Self {
        self.legacy_slots.insert(path.into(), slot);
        self
    }

    /// Mark one OBJ model as not resolved by the renderer.
    pub fn with_unresolved_object(mut self, path: impl Into<String>) -> Self {
        self.unresolved_objects.insert(path.into());
        self
    }

    /// Treat every OBJ model as unresolved.
    pub fn without_objects(mut self) -> Self {
        self.resolve_objects = false;
        self
    }
}

impl Default for StaticHost {
    fn default() -> Self {
        Self::new(DEFAULT_SIM_VERSION)
    }
}

impl HostEnvironment for StaticHost {
    fn sim_version(&self) -> i32 {
        self.sim_version
    }

    fn loaded_aircraft_count(&self) -> usize {
        self.loaded_aircraft
    }

    fn legacy_slot(&self, path: &str) -> Option<usize> {
        self.legacy_slots.get(path).copied()
    }

    fn object_index(&self, path: &str) -> Option<usize> {
        if !self.resolve_objects || self.unresolved_objects.contains(path) {
            return None;
        }
        Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_host_defaults() {
        let host = StaticHost::default();
        assert_eq!(host.sim_version(), DEFAULT_SIM_VERSION);
        assert_eq!(host.loaded_aircraft_count(), 0);
        assert_eq!(host.legacy_slot("/csl/a.acf"), None);
        assert!(host.object_index("/csl/a.obj").is_some());
    }

    #[test]
    fn test_static_host_builders() {
        let host = StaticHost::new(11550)
            .with_loaded_aircraft(4)
            .with_legacy_slot("/csl/a.acf", 2)
            .with_unresolved_object("/csl/b.obj");

        assert_eq!(host.sim_version(), 11550);
        assert_eq!(host.loaded_aircraft_count(), 4);
        assert_eq!(host.legacy_slot("/csl/a.acf"), Some(2));
        assert_eq!(host.object_index("/csl/b.obj"), None);
        assert!(host.object_index("/csl/c.obj").is_some());
    }

    #[test]
    fn test_static_host_without_objects() {
        let host = StaticHost::default().without_objects();
        assert_eq!(host.object_index("/csl/c.obj"), None);
    }
}
