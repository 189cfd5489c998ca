//! Directory scanner for asset files.
//!
//! Lists the files directly inside a directory (no recursion), sorted by
//! filename, and sorts them into images and sprite sheet descriptors.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, ScanError};

use super::config::Config;

/// Extension of sprite sheet descriptor files.
pub const DESCRIPTOR_EXTENSION: &str = "xml";

/// What a listed file is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Descriptor,
}

/// Result of scanning a directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Image files, sorted by filename.
    pub images: Vec<PathBuf>,
    /// Descriptor files, sorted by filename.
    pub descriptors: Vec<PathBuf>,
}

impl ScanResult {
    /// Create a new empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of classified files.
    pub fn total(&self) -> usize {
        self.images.len() + self.descriptors.len()
    }

    /// Check if no files were classified.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Scan a directory for images and descriptors.
///
/// Fails if `root` is not a readable directory.
pub fn scan_directory(root: &Path, config: &Config) -> Result<ScanResult> {
    if !root.is_dir() {
        return Err(ScanError::Io {
            path: root.to_path_buf(),
            message: "Not a directory".to_string(),
        });
    }

    let mut result = ScanResult::new();

    // Links are not followed by the walk itself: only entries whose
    // extension marks them as assets are ever stat'ed through a link.
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => match e.path() {
                Some(path) if detect_file_kind(path, config).is_none() => {
                    debug!("skipping unreadable {}: {}", path.display(), e);
                    continue;
                }
                path => {
                    return Err(ScanError::Io {
                        path: path.unwrap_or(root).to_path_buf(),
                        message: format!("Failed to list directory: {}", e),
                    })
                }
            },
        };

        let path = entry.path();
        let Some(kind) = detect_file_kind(path, config) else {
            debug!("ignoring {}", path.display());
            continue;
        };

        if config.is_excluded(Path::new(&file_name(path))) {
            debug!("excluded {}", path.display());
            continue;
        }

        if !is_regular_file(&entry)? {
            continue;
        }

        match kind {
            FileKind::Image => result.images.push(path.to_path_buf()),
            FileKind::Descriptor => result.descriptors.push(path.to_path_buf()),
        }
    }

    Ok(result)
}

/// Check if an entry is, or links to, a regular file.
///
/// A dangling link is an error here, since only asset-named entries get
/// this far.
fn is_regular_file(entry: &DirEntry) -> Result<bool> {
    if !entry.path_is_symlink() {
        return Ok(entry.file_type().is_file());
    }

    let meta = fs::metadata(entry.path()).map_err(|e| ScanError::Io {
        path: entry.path().to_path_buf(),
        message: format!("Failed to follow link: {}", e),
    })?;
    Ok(meta.is_file())
}

/// Detect whether a path is an image or a descriptor by its extension.
pub fn detect_file_kind(path: &Path, config: &Config) -> Option<FileKind> {
    let ext = path.extension()?.to_str()?;

    if ext == DESCRIPTOR_EXTENSION {
        Some(FileKind::Descriptor)
    } else if config.is_image_extension(ext) {
        Some(FileKind::Image)
    } else {
        None
    }
}

/// Bare filename of a path, lossily converted to UTF-8.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Filename without its final extension, lossily converted to UTF-8.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_detect_file_kind() {
        let config = Config::default();

        assert_eq!(detect_file_kind(Path::new("hero.png"), &config), Some(FileKind::Image));
        assert_eq!(
            detect_file_kind(Path::new("hero.xml"), &config),
            Some(FileKind::Descriptor)
        );
        assert_eq!(detect_file_kind(Path::new("notes.txt"), &config), None);
        assert_eq!(detect_file_kind(Path::new("HERO.PNG"), &config), None);
        assert_eq!(detect_file_kind(Path::new("png"), &config), None);
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();

        let result = scan_directory(dir.path(), &Config::default()).unwrap();

        assert!(result.is_empty());
        assert_eq!(result.total(), 0);
    }

    #[test]
    fn test_scan_sorted_and_classified() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("zeta.png"), b"").unwrap();
        fs::write(dir.path().join("alpha.png"), b"").unwrap();
        fs::write(dir.path().join("sheet.xml"), b"").unwrap();
        fs::write(dir.path().join("readme.md"), b"").unwrap();

        let result = scan_directory(dir.path(), &Config::default()).unwrap();

        let images: Vec<String> = result.images.iter().map(|p| file_name(p)).collect();
        assert_eq!(images, vec!["alpha.png", "zeta.png"]);
        assert_eq!(result.descriptors.len(), 1);
        assert_eq!(result.total(), 3);
    }

    #[test]
    fn test_scan_is_not_recursive() {
        let dir = tempdir().unwrap();

        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/deep.png"), b"").unwrap();
        fs::create_dir_all(dir.path().join("folder.png")).unwrap();
        fs::write(dir.path().join("top.png"), b"").unwrap();

        let result = scan_directory(dir.path(), &Config::default()).unwrap();

        assert_eq!(result.images.len(), 1);
        assert_eq!(file_name(&result.images[0]), "top.png");
    }

    #[test]
    fn test_scan_with_excludes() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("hero.png"), b"").unwrap();
        fs::write(dir.path().join("hero.bak.png"), b"").unwrap();

        let config = Config {
            excludes: vec!["*.bak.png".to_string()],
            ..Default::default()
        };
        let result = scan_directory(dir.path(), &config).unwrap();

        assert_eq!(result.images.len(), 1);
        assert_eq!(file_name(&result.images[0]), "hero.png");
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_skips_dangling_non_asset_link() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        fs::write(dir.path().join("logo.png"), b"").unwrap();
        symlink(dir.path().join("gone.txt"), dir.path().join("stale.txt")).unwrap();

        let result = scan_directory(dir.path(), &Config::default()).unwrap();

        assert_eq!(result.images.len(), 1);
        assert_eq!(file_name(&result.images[0]), "logo.png");
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_follows_asset_links() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("shared")).unwrap();
        fs::write(dir.path().join("shared/hero.png"), b"").unwrap();
        symlink(dir.path().join("shared/hero.png"), dir.path().join("hero.png")).unwrap();
        symlink(dir.path().join("shared"), dir.path().join("folder.png")).unwrap();

        let result = scan_directory(dir.path(), &Config::default()).unwrap();

        let images: Vec<String> = result.images.iter().map(|p| file_name(p)).collect();
        assert_eq!(images, vec!["hero.png"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_dangling_asset_link_is_an_error() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        symlink(dir.path().join("gone.png"), dir.path().join("hero.png")).unwrap();

        let result = scan_directory(dir.path(), &Config::default());

        assert!(matches!(result, Err(ScanError::Io { .. })));
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        let result = scan_directory(Path::new("/nonexistent/path"), &Config::default());

        assert!(matches!(result, Err(ScanError::Io { .. })));
    }

    #[test]
    fn test_file_name_and_stem() {
        let path = Path::new("assets/groundGrass_01.png");
        assert_eq!(file_name(path), "groundGrass_01.png");
        assert_eq!(file_stem(path), "groundGrass_01");
    }
}
