//! Residual (standalone) image collection.

use std::collections::BTreeSet;

use tracing::debug;

use crate::discovery::{file_name, file_stem, ScanResult};
use crate::error::Result;
use crate::types::ImageEntry;

use super::read_dimensions;

/// Collect every image whose filename is not in `claimed`, in filename order.
pub fn collect_images(scan: &ScanResult, claimed: &BTreeSet<&str>) -> Result<Vec<ImageEntry>> {
    let mut images = Vec::new();

    for path in &scan.images {
        let file = file_name(path);
        if claimed.contains(file.as_str()) {
            continue;
        }

        let dims = read_dimensions(path)?;
        debug!("image {} ({}x{})", file, dims.width, dims.height);

        images.push(ImageEntry {
            name: file_stem(path),
            file,
            width: dims.width,
            height: dims.height,
        });
    }

    Ok(images)
}
