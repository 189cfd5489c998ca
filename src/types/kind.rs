//! Asset categories.

use std::fmt;

/// The manifest section an asset lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Surface,
    Spritesheet,
    Image,
}

impl AssetKind {
    /// All kinds, in the order the manifest builder collects them.
    pub const ALL: [AssetKind; 3] = [AssetKind::Surface, AssetKind::Spritesheet, AssetKind::Image];

    /// Get the short name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            AssetKind::Surface => "surface",
            AssetKind::Spritesheet => "spritesheet",
            AssetKind::Image => "image",
        }
    }

    /// Get the manifest section key for this kind.
    pub fn section(&self) -> &'static str {
        match self {
            AssetKind::Surface => "surfaces",
            AssetKind::Spritesheet => "spritesheets",
            AssetKind::Image => "images",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
