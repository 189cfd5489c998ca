//! File discovery for asset directories.
//!
//! Loads the optional `sheetscan.yaml` config from the asset directory,
//! then lists and classifies the files directly inside it.
//!
//! # Example
//!
//! ```ignore
//! use sheetscan::discovery::discover;
//!
//! let result = discover("./assets")?;
//! println!("Found {} images", result.scan.images.len());
//! ```

mod config;
mod scanner;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

pub use config::{Config, DEFAULT_OUTPUT};
pub use scanner::{detect_file_kind, file_name, file_stem, scan_directory, FileKind, ScanResult};

/// The name of the optional config file.
pub const CONFIG_FILENAME: &str = "sheetscan.yaml";

/// Result of discovering assets in a directory.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The scanned directory.
    pub root: PathBuf,

    /// The loaded config (default if no sheetscan.yaml was found).
    pub config: Config,

    /// Whether a sheetscan.yaml config was found.
    pub has_config: bool,

    /// Classified files, each list sorted by filename.
    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Path of the sheetscan.yaml that was loaded, if any.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.has_config.then(|| self.root.join(CONFIG_FILENAME))
    }
}

/// Discover assets in a directory, honouring its `sheetscan.yaml` if present.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let config_path = root.join(CONFIG_FILENAME);
    let (config, has_config) = if config_path.is_file() {
        debug!("loading config from {}", config_path.display());
        (Config::load(&config_path)?, true)
    } else {
        (Config::default(), false)
    };

    let scan = scan_directory(&root, &config)?;

    Ok(DiscoveryResult {
        root,
        config,
        has_config,
        scan,
    })
}

/// Discover assets with an explicit config, ignoring any sheetscan.yaml.
pub fn discover_with(root: impl AsRef<Path>, config: Config) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();
    let scan = scan_directory(&root, &config)?;

    Ok(DiscoveryResult {
        root,
        config,
        has_config: false,
        scan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_empty_directory() {
        let dir = tempdir().unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(!result.has_config);
        assert_eq!(result.config_path(), None);
        assert!(result.scan.is_empty());
    }

    #[test]
    fn test_discover_with_config() {
        let dir = tempdir().unwrap();

        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "extensions: [png, webp]\nexcludes:\n  - \"*_old.png\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("a.webp"), b"").unwrap();
        fs::write(dir.path().join("b.png"), b"").unwrap();
        fs::write(dir.path().join("b_old.png"), b"").unwrap();

        let result = discover(dir.path()).unwrap();

        assert_eq!(result.config_path(), Some(dir.path().join(CONFIG_FILENAME)));
        let names: Vec<String> = result.scan.images.iter().map(|p| file_name(p)).collect();
        assert_eq!(names, vec!["a.webp", "b.png"]);
    }

    #[test]
    fn test_discover_bad_config() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "extensions: {nope").unwrap();

        assert!(discover(dir.path()).is_err());
    }

    #[test]
    fn test_discover_with_ignores_config_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "extensions: [webp]").unwrap();
        fs::write(dir.path().join("a.png"), b"").unwrap();

        let result = discover_with(dir.path(), Config::default()).unwrap();

        assert_eq!(result.config_path(), None);
        assert_eq!(result.scan.images.len(), 1);
    }
}
