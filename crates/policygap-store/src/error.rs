use std::path::PathBuf;

use policygap_core::{ConfigError, InputError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("unsupported policy format '{extension}' for {path}: only .txt is read directly")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("invalid analysis config: {0}")]
    Config(#[from] ConfigError),
}
