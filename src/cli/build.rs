//! Build command implementation.
//!
//! Scans an asset directory and writes the manifest.

use std::io;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::collect::build_from_discovery;
use crate::discovery::{discover, Config, DEFAULT_OUTPUT};
use crate::emit::{write_manifest, write_manifest_to};
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::types::{AssetKind, Manifest};

/// Scan an asset directory and write its manifest
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Directory containing image and descriptor files
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Manifest output path, or `-` for stdout [default: asset_manifest.json]
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Where the manifest goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Pick the output: the CLI flag, then the config's `output`, then
    /// `asset_manifest.json` in the working directory.
    pub fn resolve(flag: Option<&Path>, config: &Config, root: &Path) -> Self {
        match flag {
            Some(p) if p == Path::new("-") => OutputTarget::Stdout,
            Some(p) => OutputTarget::File(p.to_path_buf()),
            None => OutputTarget::File(
                config
                    .output_in(root)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            ),
        }
    }

    fn describe(&self) -> String {
        match self {
            OutputTarget::Stdout => "<stdout>".to_string(),
            OutputTarget::File(path) => display_path(path),
        }
    }
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    printer.status("Scanning", &display_path(&args.dir));

    let discovery = discover(&args.dir)?;
    if let Some(config_path) = discovery.config_path() {
        printer.info("Config", &display_path(&config_path));
    }
    let manifest = build_from_discovery(&discovery)?;

    let target = OutputTarget::resolve(args.output.as_deref(), &discovery.config, &discovery.root);
    match &target {
        OutputTarget::Stdout => write_manifest_to(&manifest, io::stdout().lock())?,
        OutputTarget::File(path) => write_manifest(&manifest, path)?,
    }

    printer.status(
        "Wrote",
        &format!("{} {} {}", summary(&manifest), printer.dim("->"), target.describe()),
    );

    Ok(())
}

/// "manifest with 1 surfaces, 2 spritesheets, 0 standalone images"
///
/// Counts are not pluralised, so the line reads the same for any input.
pub fn summary(manifest: &Manifest) -> String {
    format!(
        "manifest with {} surfaces, {} spritesheets, {} standalone images",
        manifest.count(AssetKind::Surface),
        manifest.count(AssetKind::Spritesheet),
        manifest.count(AssetKind::Image),
    )
}
