/// Error types for catalog loading and configuration

use std::path::PathBuf;
use thiserror::Error;

use crate::state::data::PhotoId;

/// Errors raised while loading a photo catalog from a source
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate photo id {0} in catalog")]
    DuplicateId(PhotoId),

    #[error("catalog folder is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to walk catalog folder: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Errors raised while reading or writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
