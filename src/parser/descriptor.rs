//! Sprite sheet descriptor parsing.
//!
//! A descriptor is an XML document whose root element may carry an
//! `imagePath` attribute and whose `SubTexture` children list the frames:
//!
//! ```xml
//! <TextureAtlas imagePath="hero_atlas.png">
//!     <SubTexture name="idle" x="0" y="0" width="32" height="32"/>
//!     <SubTexture name="walk" x="32" y="0" width="32" height="32"/>
//! </TextureAtlas>
//! ```

use roxmltree::{Document, Node, ParsingOptions};

use crate::types::FrameRect;

/// Root attribute naming the sheet image relative to the descriptor.
pub const IMAGE_PATH_ATTR: &str = "imagePath";

/// Tag of the root's frame children.
pub const FRAME_TAG: &str = "SubTexture";

/// The parts of a descriptor the loader needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    /// `imagePath` on the root element; empty values are treated as absent.
    pub image_path: Option<String>,
    /// Frames in document order.
    pub frames: Vec<FrameRect>,
}

/// Parse descriptor source text.
///
/// Only direct children of the root are considered frames. Numeric
/// attributes that are missing or unparsable read as zero.
pub fn parse_descriptor(source: &str) -> Result<Descriptor, roxmltree::Error> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(source, options)?;
    let root = doc.root_element();

    let image_path = root
        .attribute(IMAGE_PATH_ATTR)
        .filter(|p| !p.is_empty())
        .map(str::to_string);

    let frames = root
        .children()
        .filter(|node| node.has_tag_name(FRAME_TAG))
        .map(parse_frame)
        .collect();

    Ok(Descriptor { image_path, frames })
}

fn parse_frame(node: Node<'_, '_>) -> FrameRect {
    FrameRect {
        name: node.attribute("name").map(str::to_string),
        x: parse_coordinate(node.attribute("x")),
        y: parse_coordinate(node.attribute("y")),
        width: parse_coordinate(node.attribute("width")),
        height: parse_coordinate(node.attribute("height")),
    }
}

/// Read an integer attribute, defaulting to zero when absent or malformed.
///
/// Hand-edited descriptors regularly carry blanks or stray text here.
pub fn parse_coordinate(value: Option<&str>) -> i64 {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}
