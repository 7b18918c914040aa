//! File-backed collaborators: policy text, clause catalogues, and analysis config.
//!
//! Everything that touches the filesystem lives here so the engine crates
//! stay pure.

mod catalogue;
mod config;
mod error;
mod policy;

pub use catalogue::load_catalogue;
pub use config::load_config;
pub use error::StoreError;
pub use policy::{SUPPORTED_EXTENSIONS, load_policy_text};

use std::path::Path;

/// Read a whole file as UTF-8, mapping a missing file to [`StoreError::NotFound`].
fn read_file(path: &Path) -> Result<String, StoreError> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a JSON file.
fn read_json(path: &Path) -> Result<serde_json::Value, StoreError> {
    let text = read_file(path)?;
    serde_json::from_str(&text).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}
