//! Ground surface entries and theme assignment.

use serde::{Deserialize, Serialize};

/// Filename prefix that marks an image as a ground surface.
pub const SURFACE_PREFIX: &str = "ground";

/// Theme given to surfaces whose name matches none of the known themes.
pub const FALLBACK_THEME: &str = "ground";

/// Known surface themes, tested in order against the filename stem.
pub const SURFACE_THEMES: &[&str] = &[
    "groundBeige",
    "groundGrass",
    "groundGravel",
    "groundIce",
    "groundTarmac",
    "groundTransparent",
];

/// A tileable ground texture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceEntry {
    /// Filename without extension.
    pub name: String,
    /// Theme tag used by the renderer to group surfaces.
    pub theme: String,
    /// Bare filename of the image.
    pub file: String,
    pub width: u32,
    pub height: u32,
}

/// Pick the theme for a surface stem.
///
/// Built-in themes are tried first, then `extra` in the order given.
/// The first prefix the stem starts with wins; no match yields
/// [`FALLBACK_THEME`].
pub fn theme_for(stem: &str, extra: &[String]) -> String {
    SURFACE_THEMES
        .iter()
        .copied()
        .chain(extra.iter().map(String::as_str))
        .find(|prefix| stem.starts_with(prefix))
        .unwrap_or(FALLBACK_THEME)
        .to_string()
}
