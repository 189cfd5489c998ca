//! Ground surface collection.

use std::path::Path;

use tracing::debug;

use crate::discovery::{file_name, file_stem, Config, ScanResult};
use crate::error::Result;
use crate::types::{theme_for, SurfaceEntry, SURFACE_PREFIX};

use super::read_dimensions;

/// Check if an image path names a ground surface.
pub fn is_surface(path: &Path) -> bool {
    file_name(path).starts_with(SURFACE_PREFIX)
}

/// Collect every `ground*` image as a surface, in filename order.
pub fn collect_surfaces(scan: &ScanResult, config: &Config) -> Result<Vec<SurfaceEntry>> {
    scan.images
        .iter()
        .filter(|path| is_surface(path))
        .map(|path| {
            let dims = read_dimensions(path)?;
            let name = file_stem(path);
            let theme = theme_for(&name, &config.themes);
            debug!("surface {} ({}x{}, {})", name, dims.width, dims.height, theme);

            Ok(SurfaceEntry {
                name,
                theme,
                file: file_name(path),
                width: dims.width,
                height: dims.height,
            })
        })
        .collect()
}
