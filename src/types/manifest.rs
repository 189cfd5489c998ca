//! The manifest document.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{AssetKind, ImageEntry, SpritesheetEntry, SurfaceEntry};

/// Every visual asset found in one directory.
///
/// Sections are always present in the serialized form, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub surfaces: Vec<SurfaceEntry>,
    pub spritesheets: Vec<SpritesheetEntry>,
    pub images: Vec<ImageEntry>,
}

impl Manifest {
    /// Number of entries in one section.
    pub fn count(&self, kind: AssetKind) -> usize {
        match kind {
            AssetKind::Surface => self.surfaces.len(),
            AssetKind::Spritesheet => self.spritesheets.len(),
            AssetKind::Image => self.images.len(),
        }
    }

    /// Entry names of one section, in manifest order.
    pub fn names(&self, kind: AssetKind) -> Vec<&str> {
        match kind {
            AssetKind::Surface => self.surfaces.iter().map(|s| s.name.as_str()).collect(),
            AssetKind::Spritesheet => self.spritesheets.iter().map(|s| s.name.as_str()).collect(),
            AssetKind::Image => self.images.iter().map(|s| s.name.as_str()).collect(),
        }
    }

    /// Check if all three sections are empty.
    pub fn is_empty(&self) -> bool {
        AssetKind::ALL.iter().all(|&kind| self.count(kind) == 0)
    }

    /// Filenames referenced by surfaces and sprite sheets.
    pub fn claimed_files(&self) -> BTreeSet<&str> {
        self.surfaces
            .iter()
            .map(|s| s.file.as_str())
            .chain(self.spritesheets.iter().map(|s| s.file.as_str()))
            .collect()
    }
}
