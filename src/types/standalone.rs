//! Standalone image entries.

use serde::{Deserialize, Serialize};

/// An image not claimed as a surface or as a sprite sheet's image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub name: String,
    pub file: String,
    pub width: u32,
    pub height: u32,
}
