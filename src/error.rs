/// Error types for the gallery
///
/// The state stores themselves cannot fail; only the edges that touch the
/// filesystem (config, catalog, thumbnails) have error paths.
use std::path::PathBuf;
use thiserror::Error;

/// Problems reading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Problems building the initial item list
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Photos directory {0} does not exist")]
    MissingDir(PathBuf),
    #[error("Failed to scan {path}: {source}")]
    Scan {
        path: PathBuf,
        source: walkdir::Error,
    },
    #[error("Malformed photo list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Problems decoding a tile thumbnail
///
/// Carried inside UI messages, so it holds plain strings and is `Clone`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThumbnailError {
    #[error("Image not found: {0}")]
    NotFound(String),
    #[error("Failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },
    #[error("Background task failed: {0}")]
    Task(String),
}
