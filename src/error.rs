use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for sheetscan operations.
///
/// Every variant is fatal: a build that hits one of these never writes
/// a manifest.
#[derive(Error, Diagnostic, Debug)]
pub enum ScanError {
    #[error("Failed to read image {path}: {message}")]
    #[diagnostic(
        code(sheetscan::asset_read),
        help("The file exists but its header could not be decoded; re-export it or remove it")
    )]
    AssetRead { path: PathBuf, message: String },

    #[error("Failed to parse descriptor {path}: {message}")]
    #[diagnostic(code(sheetscan::descriptor_parse))]
    DescriptorParse { path: PathBuf, message: String },

    #[error("Could not locate image for {descriptor}")]
    #[diagnostic(
        code(sheetscan::image_not_found),
        help("Place a same-named image next to the descriptor or set an imagePath attribute on its root element")
    )]
    ImageNotFound { descriptor: String },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(sheetscan::io))]
    Io { path: PathBuf, message: String },

    #[error("Invalid config {path}: {message}")]
    #[diagnostic(code(sheetscan::config), help("Check sheetscan.yaml syntax"))]
    Config { path: PathBuf, message: String },

    #[error("Failed to serialize manifest: {message}")]
    #[diagnostic(code(sheetscan::serialize))]
    Serialize { message: String },
}

pub type Result<T> = std::result::Result<T, ScanError>;
