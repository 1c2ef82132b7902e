//! Centralized CSL naming conventions.
//!
//! This module is the single source of truth for names derived from manifest
//! paths:
//! - Base file names (e.g., `plane` from `pkg/B738/plane.png`)
//! - Lit texture paths (e.g., `plane_LIT.png` next to `plane.png`)
//! - Model display names and material codes
//!
//! All paths handled here use `/` separators (see [`super::paths`]).

/// Manifest file name inside every package directory.
pub const MANIFEST_FILE_NAME: &str = "xsb_aircraft.txt";

/// Suffix inserted before the extension of a texture to find its lit variant.
pub const LIT_TEXTURE_SUFFIX: &str = "_LIT";

/// Last path component.
///
/// # Examples
///
/// ```
/// use cslmatch::package::file_name;
///
/// assert_eq!(file_name("pkg/B738/plane.obj"), "plane.obj");
/// assert_eq!(file_name("plane.obj"), "plane.obj");
/// ```
pub fn file_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

/// Last path component without its extension.
///
/// # Examples
///
/// ```
/// use cslmatch::package::file_stem;
///
/// assert_eq!(file_stem("pkg/B738/plane.png"), "plane");
/// assert_eq!(file_stem("pkg/B738/plane"), "plane");
/// assert_eq!(file_stem("pkg/B738/plane.v2.png"), "plane.v2");
/// ```
pub fn file_stem(path: &str) -> &str {
    strip_extension(file_name(path))
}

/// Remove the extension of a file name, if it has one.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) => &name[..pos],
        None => name,
    }
}

/// Derive the lit texture path from a texture path.
///
/// `_LIT` is inserted before the extension, or appended when the file name
/// has none.
///
/// # Examples
///
/// ```
/// use cslmatch::package::lit_texture_path;
///
/// assert_eq!(lit_texture_path("/csl/B738/SWA.png"), "/csl/B738/SWA_LIT.png");
/// assert_eq!(lit_texture_path("/csl/B738/SWA"), "/csl/B738/SWA_LIT");
/// ```
pub fn lit_texture_path(texture: &str) -> String {
    let name_start = texture.rfind('/').map(|p| p + 1).unwrap_or(0);
    match texture[name_start..].rfind('.') {
        Some(dot) => {
            let dot = name_start + dot;
            format!("{}{}{}", &texture[..dot], LIT_TEXTURE_SUFFIX, &texture[dot..])
        }
        None => format!("{}{}", texture, LIT_TEXTURE_SUFFIX),
    }
}

/// Display name of a model: directories, object and texture joined by spaces.
pub fn model_name(dir_names: &[String], object_name: &str, texture_name: &str) -> String {
    let mut name = String::new();
    for dir in dir_names {
        name.push_str(dir);
        name.push(' ');
    }
    name.push_str(object_name);
    if !texture_name.is_empty() {
        name.push(' ');
        name.push_str(texture_name);
    }
    name
}

/// Material code: ICAO, airline and livery concatenated.
pub fn mtl_code(icao: &str, airline: &str, livery: &str) -> String {
    format!("{}{}{}", icao, airline, livery)
}
