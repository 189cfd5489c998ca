//! Directory config (sheetscan.yaml) parsing.
//!
//! The config tunes which files count as images, which files are skipped,
//! and which surface themes are recognised beyond the built-in list.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};

/// Default manifest path when neither the CLI nor the config names one.
pub const DEFAULT_OUTPUT: &str = "asset_manifest.json";

/// Scan settings loaded from sheetscan.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Manifest path, relative to the scanned directory.
    pub output: Option<PathBuf>,

    /// Image file extensions, without the leading dot.
    pub extensions: Vec<String>,

    /// Patterns naming files to skip, matched against paths relative to
    /// the scanned directory. See [`Config::is_excluded`].
    pub excludes: Vec<String>,

    /// Extra surface-theme prefixes, tried after the built-in ones.
    pub themes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: None,
            extensions: vec!["png".to_string()],
            excludes: vec![],
            themes: vec![],
        }
    }
}

impl Config {
    /// Load config from a sheetscan.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ScanError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content).map_err(|message| ScanError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let mut config: Config = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        for ext in &mut config.extensions {
            *ext = ext.trim_start_matches('.').to_string();
        }
        if config.extensions.is_empty() {
            return Err("extensions must name at least one image type".to_string());
        }
        Ok(config)
    }

    /// Check if a file extension names a supported image type.
    pub fn is_image_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }

    /// Check if a path, relative to the scanned directory, matches one of
    /// the exclude patterns.
    ///
    /// Supported forms:
    /// - `**/dir/*` skips anything below a `dir` component at any depth
    /// - `dir/*` skips anything below `dir`
    /// - a pattern containing `*` is a wildcard over the filename or the
    ///   whole relative path (`*.bak.png`, `draft*`)
    /// - anything else matches as a substring of the relative path
    pub fn is_excluded(&self, path: &Path) -> bool {
        let key = relative_key(path);
        self.excludes
            .iter()
            .any(|pattern| matches_exclude(pattern, &key))
    }

    /// Resolve the configured output path against the scanned directory.
    pub fn output_in(&self, root: &Path) -> Option<PathBuf> {
        self.output.as_ref().map(|p| root.join(p))
    }
}

/// Join the meaningful components of a relative path with `/`.
fn relative_key(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn matches_exclude(pattern: &str, key: &str) -> bool {
    if let Some(rest) = pattern.strip_prefix("**/") {
        if let Some(dir) = rest.strip_suffix("/*") {
            let mut parts: Vec<&str> = key.split('/').collect();
            parts.pop();
            return parts.contains(&dir);
        }
        // Try the rest against every suffix that starts at a component.
        return std::iter::once(key)
            .chain(key.match_indices('/').map(|(idx, _)| &key[idx + 1..]))
            .any(|suffix| matches_exclude(rest, suffix));
    }

    if let Some(dir) = pattern.strip_suffix("/*") {
        return key.starts_with(&format!("{dir}/")) || key.contains(&format!("/{dir}/"));
    }

    if pattern.contains('*') {
        let name = key.rsplit('/').next().unwrap_or(key);
        return wildcard_match(pattern, name) || wildcard_match(pattern, key);
    }

    key.contains(pattern)
}

/// Match `text` against `pattern`, where `*` matches any (possibly empty)
/// run of characters and everything else matches literally.
fn wildcard_match(pattern: &str, text: &str) -> bool {
    let mut parts = pattern.split('*');
    let first = parts.next().unwrap_or("");
    let Some(mut rest) = text.strip_prefix(first) else {
        return false;
    };

    let middle: Vec<&str> = parts.collect();
    let Some((last, middle)) = middle.split_last() else {
        // No `*` at all: exact match.
        return rest.is_empty();
    };

    for part in middle {
        match rest.find(part) {
            Some(idx) => rest = &rest[idx + part.len()..],
            None => return false,
        }
    }

    rest.ends_with(last)
}
