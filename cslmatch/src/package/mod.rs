//! CSL package and model types.
//!
//! # Overview
//!
//! A CSL library is a directory of packages. Each package directory holds an
//! `xsb_aircraft.txt` manifest declaring one or more models:
//!
//! - **Package**: exported name, install path, ordered models, match indices
//! - **Model**: one aircraft representation with its ICAO/airline/livery tags
//! - **Representation**: legacy `.acf`, OBJ7 mesh or OBJ8 attachment set
//!
//! # Type Hierarchy
//!
//! ```text
//! Package                            Model
//! ├── name: String                   ├── dir_names / object_name / texture_name
//! ├── path: PathBuf                  ├── icao / airline / livery
//! ├── models: Vec<Model>  ──────────►├── has_gear / vert_offset
//! └── indices: [MatchIndex; 8]       └── representation: Representation
//!                                         ├── Legacy { path }
//!                                         ├── Object { path, texture, lit_texture }
//!                                         └── Obj8 { label, attachments }
//! ```

mod core;
mod model;
mod naming;
mod paths;

pub use core::{MatchIndex, Package};
pub use model::{Attachment, DrawLayer, Model, ModelKind, Representation};
pub use naming::{
    file_name, file_stem, lit_texture_path, model_name, mtl_code, strip_extension,
    LIT_TEXTURE_SUFFIX, MANIFEST_FILE_NAME,
};
pub use paths::{
    install_path_string, normalize_separators, substitute_package_root, PackageRoot,
    PackageRoots, PathError, ResolvedPath,
};
