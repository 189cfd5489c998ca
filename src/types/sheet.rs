//! Sprite sheet entries.

use serde::{Deserialize, Serialize};

/// A named sub-rectangle within a sprite sheet.
///
/// Coordinates are copied from the descriptor as-is; they are not checked
/// against the sheet's bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRect {
    pub name: Option<String>,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl FrameRect {
    /// A frame at the origin with zero size.
    pub fn empty(name: Option<String>) -> Self {
        Self {
            name,
            x: 0,
            y: 0,
            width: 0,
            height: 0,
        }
    }
}

/// Pixel size of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A sprite sheet: one image plus the frame layout from its descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpritesheetEntry {
    /// Descriptor filename without extension.
    pub name: String,
    /// Bare filename of the resolved sheet image.
    pub file: String,
    /// Bare filename of the descriptor.
    pub source_descriptor: String,
    pub dimensions: Dimensions,
    /// Frames in descriptor order; names may repeat.
    pub frames: Vec<FrameRect>,
}
