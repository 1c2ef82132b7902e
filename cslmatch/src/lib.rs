//! cslmatch - CSL aircraft model matching for X-Plane multiplayer
//!
//! This library loads libraries of CSL (Common Shape Library) packages and
//! picks the best installed model for an aircraft identified by its ICAO
//! type, airline and livery.
//!
//! # Overview
//!
//! ```text
//! Registry::load ──► manifest::parse_header ──► manifest::parse_package
//!        │                  (EXPORT_NAME)         (OBJECT, ICAO, LIVERY…)
//!        ▼
//!   Registry ──────────► Matcher::resolve(icao, airline, livery)
//!   ├── packages               ├── 8 key tiers (icao/group × airline × livery)
//!   ├── GroupingTable          ├── Doc 8643 equipment fallback (5 passes)
//!   └── AircraftCodeTable      └── default model
//! ```
//!
//! Rendering, model loading and the live aircraft instances belong to the
//! host. The host is reached through [`host::HostEnvironment`].

pub mod config;
pub mod diagnostics;
pub mod host;
pub mod logging;
pub mod manifest;
pub mod matching;
pub mod package;
pub mod registry;
pub mod session;
pub mod tables;

pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, Severity, TracingSink};
pub use host::{HostEnvironment, StaticHost};
pub use matching::{MatchQuality, Matcher, ModelHandle, ModelMatch};
pub use package::{Model, ModelKind, Package, Representation};
pub use registry::{LoadReport, Registry};
pub use session::{CslPaths, Resolution, Session};
