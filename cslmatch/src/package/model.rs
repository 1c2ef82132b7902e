//! CSL model type.
//!
//! A [`Model`] is one aircraft representation declared in a package manifest.
//! The representation-specific data lives in the [`Representation`] tagged
//! union so that fields are only present for the kind that uses them.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::naming;

/// Draw kinds a model can take part in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ModelKind {
    /// Legacy `.acf` aircraft drawn by the simulator.
    LegacyHandle,
    /// OBJ7 mesh.
    StaticMesh,
    /// Light pass of an OBJ7 mesh.
    StaticMeshWithLights,
    /// OBJ8 attachments.
    DynamicMesh,
    /// Transparent (glass) pass of OBJ8 attachments.
    DynamicMeshTransparent,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelKind::LegacyHandle => "acf",
            ModelKind::StaticMesh => "obj",
            ModelKind::StaticMeshWithLights => "obj-lights",
            ModelKind::DynamicMesh => "obj8",
            ModelKind::DynamicMeshTransparent => "obj8-transparent",
        };
        write!(f, "{}", name)
    }
}

/// Draw layer of an OBJ8 attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DrawLayer {
    Solid,
    Glass,
    Lights,
    LowLod,
}

impl DrawLayer {
    /// Keyword used in `OBJ8` manifest lines.
    pub fn keyword(&self) -> &'static str {
        match self {
            DrawLayer::Solid => "SOLID",
            DrawLayer::Glass => "GLASS",
            DrawLayer::Lights => "LIGHTS",
            DrawLayer::LowLod => "LOW_LOD",
        }
    }
}

impl FromStr for DrawLayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SOLID" => Ok(DrawLayer::Solid),
            "GLASS" => Ok(DrawLayer::Glass),
            "LIGHTS" => Ok(DrawLayer::Lights),
            "LOW_LOD" => Ok(DrawLayer::LowLod),
            other => Err(format!(
                "unknown draw layer '{}', expected SOLID, GLASS, LIGHTS or LOW_LOD",
                other
            )),
        }
    }
}

/// One OBJ8 file making up part of a model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    pub layer: DrawLayer,
    /// Whether the object reads animation datarefs.
    pub needs_animation: bool,
    /// Absolute path of the `.obj` file.
    pub source_file: String,
    pub texture_file: Option<String>,
    pub lit_texture_file: Option<String>,
}

/// Representation-specific model data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Representation {
    /// `AIRCRAFT` - a legacy `.acf` file.
    Legacy { path: String },
    /// `OBJECT` - a single OBJ7 file with optional texture override.
    Object {
        path: String,
        texture: Option<String>,
        lit_texture: Option<String>,
    },
    /// `OBJ8_AIRCRAFT` - a set of OBJ8 attachments.
    Obj8 {
        label: String,
        attachments: Vec<Attachment>,
    },
}

impl Representation {
    /// Primary draw kind.
    pub fn kind(&self) -> ModelKind {
        match self {
            Representation::Legacy { .. } => ModelKind::LegacyHandle,
            Representation::Object { .. } => ModelKind::StaticMesh,
            Representation::Obj8 { .. } => ModelKind::DynamicMesh,
        }
    }

    /// Render passes this representation is drawn in, in draw order.
    pub fn render_passes(&self) -> &'static [ModelKind] {
        match self {
            Representation::Legacy { .. } => &[ModelKind::LegacyHandle],
            Representation::Object { .. } => {
                &[ModelKind::StaticMesh, ModelKind::StaticMeshWithLights]
            }
            Representation::Obj8 { .. } => {
                &[ModelKind::DynamicMesh, ModelKind::DynamicMeshTransparent]
            }
        }
    }
}

/// One aircraft model declared by a package.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Model {
    /// Directories from the package root down to the object file.
    pub dir_names: Vec<String>,
    /// Object file name without extension.
    pub object_name: String,
    /// Texture file name without extension.
    pub texture_name: String,
    pub icao: String,
    pub airline: Option<String>,
    pub livery: Option<String>,
    /// Whether the landing gear retracts.
    pub has_gear: bool,
    /// Explicit vertical offset in meters from `VERT_OFFSET`.
    pub vert_offset: Option<f64>,
    pub representation: Representation,
}

impl Model {
    pub fn new(representation: Representation) -> Self {
        Self {
            dir_names: Vec::new(),
            object_name: String::new(),
            texture_name: String::new(),
            icao: String::new(),
            airline: None,
            livery: None,
            has_gear: true,
            vert_offset: None,
            representation,
        }
    }

    pub fn kind(&self) -> ModelKind {
        self.representation.kind()
    }

    /// Main file of the model: the `.acf`/`.obj` path, or the OBJ8 label.
    pub fn file_path(&self) -> &str {
        match &self.representation {
            Representation::Legacy { path } | Representation::Object { path, .. } => path,
            Representation::Obj8 { label, .. } => label,
        }
    }

    /// Texture override of an OBJ7 model.
    pub fn texture_path(&self) -> Option<&str> {
        match &self.representation {
            Representation::Object { texture, .. } => texture.as_deref(),
            _ => None,
        }
    }

    /// Lit texture override of an OBJ7 model.
    pub fn lit_texture_path(&self) -> Option<&str> {
        match &self.representation {
            Representation::Object { lit_texture, .. } => lit_texture.as_deref(),
            _ => None,
        }
    }

    /// OBJ8 attachments, empty for other representations.
    pub fn attachments(&self) -> &[Attachment] {
        match &self.representation {
            Representation::Obj8 { attachments, .. } => attachments,
            _ => &[],
        }
    }

    /// Human readable name: directories, object and texture separated by spaces.
    pub fn model_name(&self) -> String {
        naming::model_name(&self.dir_names, &self.object_name, &self.texture_name)
    }

    /// ICAO, airline and livery run together, e.g. `B738SWASHAMU`.
    pub fn mtl_code(&self) -> String {
        naming::mtl_code(
            &self.icao,
            self.airline.as_deref().unwrap_or(""),
            self.livery.as_deref().unwrap_or(""),
        )
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.model_name(), self.kind())?;
        if !self.icao.is_empty() {
            write!(f, " {}", self.icao)?;
            if let Some(airline) = &self.airline {
                write!(f, "/{}", airline)?;
            }
            if let Some(livery) = &self.livery {
                write!(f, "/{}", livery)?;
            }
        }
        Ok(())
    }
}
