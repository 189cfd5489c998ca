//! List command implementation.
//!
//! Builds the manifest in memory and prints an inventory instead of
//! writing it.

use std::path::PathBuf;

use clap::Args;

use crate::collect::build_from_discovery;
use crate::discovery::discover;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::types::{AssetKind, Manifest};

use super::build::summary;

/// Scan an asset directory and print what would be written
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory containing image and descriptor files
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    printer.status("Scanning", &display_path(&args.dir));

    let discovery = discover(&args.dir)?;
    if let Some(config_path) = discovery.config_path() {
        printer.info("Config", &display_path(&config_path));
    }
    let manifest = build_from_discovery(&discovery)?;
    for (label, names) in inventory(&manifest) {
        printer.info(label, &names);
    }
    printer.info("Found", &summary(&manifest));

    Ok(())
}

/// Section labels with their comma-joined entry names; empty sections are skipped.
fn inventory(manifest: &Manifest) -> Vec<(&'static str, String)> {
    AssetKind::ALL
        .iter()
        .filter(|&&kind| manifest.count(kind) > 0)
        .map(|&kind| {
            let label = match kind {
                AssetKind::Surface => "Surfaces",
                AssetKind::Spritesheet => "Spritesheets",
                AssetKind::Image => "Images",
            };
            (label, manifest.names(kind).join(", "))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::build_manifest;
    use crate::collect::fixtures::write_png;
    use tempfile::tempdir;

    #[test]
    fn test_inventory_skips_empty_sections() {
        let dir = tempdir().unwrap();
        write_png(&dir.path().join("b.png"), 2, 2);
        write_png(&dir.path().join("a.png"), 2, 2);

        let manifest = build_manifest(dir.path()).unwrap();

        assert_eq!(inventory(&manifest), vec![("Images", "a, b".to_string())]);
    }

    #[test]
    fn test_list_does_not_write() {
        let dir = tempdir().unwrap();
        write_png(&dir.path().join("logo.png"), 2, 2);

        run(
            ListArgs {
                dir: dir.path().to_path_buf(),
            },
            &Printer::plain(),
        )
        .unwrap();

        assert!(!dir.path().join("asset_manifest.json").exists());
    }
}
