//! Manifest serialization.
//!
//! The manifest is written as pretty-printed JSON (2-space indentation)
//! with sections and fields in declaration order, so an unchanged
//! directory always produces byte-identical output.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Result, ScanError};
use crate::types::Manifest;

/// Serialize a manifest to its JSON document text.
pub fn to_json(manifest: &Manifest) -> Result<String> {
    serde_json::to_string_pretty(manifest).map_err(|e| ScanError::Serialize {
        message: e.to_string(),
    })
}

/// Write a manifest to a file, creating its parent directory if needed.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<()> {
    let json = to_json(manifest)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| ScanError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    fs::write(path, json).map_err(|e| ScanError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write manifest: {}", e),
    })
}

/// Write a manifest to an arbitrary writer, followed by a newline.
pub fn write_manifest_to(manifest: &Manifest, mut writer: impl Write) -> Result<()> {
    let json = to_json(manifest)?;
    writeln!(writer, "{}", json).map_err(|e| ScanError::Io {
        path: "<stdout>".into(),
        message: e.to_string(),
    })
}
