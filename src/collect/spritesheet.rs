//! Sprite sheet loading.
//!
//! Each descriptor is paired with an image: a same-stem sibling if one
//! exists, otherwise the file named by the root's `imagePath` attribute,
//! resolved against the descriptor's directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::discovery::{file_name, file_stem, Config, ScanResult};
use crate::error::{Result, ScanError};
use crate::parser::{parse_descriptor, Descriptor};
use crate::types::SpritesheetEntry;

use super::read_dimensions;

/// Load every descriptor in the scan, in filename order.
pub fn collect_spritesheets(scan: &ScanResult, config: &Config) -> Result<Vec<SpritesheetEntry>> {
    scan.descriptors
        .iter()
        .map(|path| load_spritesheet(path, config))
        .collect()
}

/// Load one descriptor and its paired image.
pub fn load_spritesheet(path: &Path, config: &Config) -> Result<SpritesheetEntry> {
    let bytes = fs::read(path).map_err(|e| ScanError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read descriptor: {}", e),
    })?;
    let source = String::from_utf8(bytes).map_err(|e| ScanError::DescriptorParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let descriptor = parse_descriptor(&source).map_err(|e| ScanError::DescriptorParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let image_path = resolve_sheet_image(path, &descriptor, config)?;
    let dimensions = read_dimensions(&image_path)?;
    debug!(
        "spritesheet {} -> {} ({}x{}, {} frames)",
        path.display(),
        image_path.display(),
        dimensions.width,
        dimensions.height,
        descriptor.frames.len()
    );

    Ok(SpritesheetEntry {
        name: file_stem(path),
        file: file_name(&image_path),
        source_descriptor: file_name(path),
        dimensions,
        frames: descriptor.frames,
    })
}

/// Find the image a descriptor describes.
///
/// Tries `<stem>.<ext>` next to the descriptor for each supported
/// extension, then the descriptor's `imagePath`. Candidates matching the
/// config's `excludes` are passed over. Fails with
/// [`ScanError::ImageNotFound`] naming the descriptor if neither exists.
pub fn resolve_sheet_image(
    path: &Path,
    descriptor: &Descriptor,
    config: &Config,
) -> Result<PathBuf> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let stem = file_stem(path);

    let sibling = config
        .extensions
        .iter()
        .map(|ext| format!("{}.{}", stem, ext))
        .filter(|name| !config.is_excluded(Path::new(name)))
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file());
    if let Some(sibling) = sibling {
        return Ok(sibling);
    }

    if let Some(relative) = &descriptor.image_path {
        let candidate = dir.join(relative);
        if config.is_excluded(Path::new(relative)) {
            debug!("imagePath {} is excluded", candidate.display());
        } else if candidate.is_file() {
            return Ok(candidate);
        } else {
            debug!("imagePath {} does not exist", candidate.display());
        }
    }

    Err(ScanError::ImageNotFound {
        descriptor: file_name(path),
    })
}
