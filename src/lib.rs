//! sheetscan - Sprite asset manifest generator
//!
//! Scans a directory of images and sprite sheet descriptors and produces a
//! single manifest of surfaces, sprite sheets and standalone images for a
//! renderer to load.

pub mod cli;
pub mod collect;
pub mod discovery;
pub mod emit;
pub mod error;
pub mod output;
pub mod parser;
pub mod types;

pub use collect::{build_from_discovery, build_manifest, read_dimensions};
pub use discovery::{discover, discover_with, Config, DiscoveryResult, ScanResult};
pub use emit::{to_json, write_manifest, write_manifest_to};
pub use error::{Result, ScanError};
pub use parser::{parse_descriptor, Descriptor};
pub use types::{
    AssetKind, Dimensions, FrameRect, ImageEntry, Manifest, SpritesheetEntry, SurfaceEntry,
};
