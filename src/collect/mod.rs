//! Manifest building.
//!
//! Runs the three collection stages over a discovered directory in a fixed
//! order: surfaces, then sprite sheets, then residual images. The residual
//! stage needs the filenames claimed by the first two, so the order never
//! changes. Any error aborts the whole build.

mod residual;
mod spritesheet;
mod surface;

use std::path::Path;

use image::ImageReader;
use tracing::info;

use crate::discovery::{discover, DiscoveryResult};
use crate::error::{Result, ScanError};
use crate::types::{Dimensions, Manifest};

pub use residual::collect_images;
pub use spritesheet::{collect_spritesheets, load_spritesheet, resolve_sheet_image};
pub use surface::{collect_surfaces, is_surface};

/// Discover a directory and build its manifest.
pub fn build_manifest(root: impl AsRef<Path>) -> Result<Manifest> {
    let discovery = discover(root)?;
    build_from_discovery(&discovery)
}

/// Build a manifest from an already discovered directory.
pub fn build_from_discovery(discovery: &DiscoveryResult) -> Result<Manifest> {
    let scan = &discovery.scan;
    let config = &discovery.config;

    let surfaces = collect_surfaces(scan, config)?;
    info!("loaded {} surfaces", surfaces.len());

    let spritesheets = collect_spritesheets(scan, config)?;
    info!("loaded {} spritesheets", spritesheets.len());

    let mut manifest = Manifest {
        surfaces,
        spritesheets,
        images: Vec::new(),
    };

    let images = collect_images(scan, &manifest.claimed_files())?;
    manifest.images = images;
    info!("loaded {} standalone images", manifest.images.len());

    Ok(manifest)
}

/// Read an image's pixel size from its header, whatever its extension says.
///
/// The file handle is dropped before returning, on success or failure.
pub fn read_dimensions(path: &Path) -> Result<Dimensions> {
    let read_error = |message: String| ScanError::AssetRead {
        path: path.to_path_buf(),
        message,
    };

    // The format comes from the file's content; the extension is only a
    // fallback when the content is not recognised.
    let (width, height) = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| read_error(e.to_string()))?
        .into_dimensions()
        .map_err(|e| read_error(e.to_string()))?;
    Ok(Dimensions::new(width, height))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::fs;
    use std::path::Path;

    /// Write a blank PNG of the given size.
    pub fn write_png(path: &Path, width: u32, height: u32) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        image::RgbaImage::new(width, height).save(path).unwrap();
    }
}
