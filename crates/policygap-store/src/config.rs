//! Analysis config file loading.

use std::path::Path;

use policygap_core::AnalysisConfig;
use tracing::debug;

use crate::{StoreError, read_json};

/// Read and validate an [`AnalysisConfig`] JSON file.
///
/// Omitted fields keep their defaults.
pub fn load_config(path: &Path) -> Result<AnalysisConfig, StoreError> {
    let value = read_json(path)?;
    let config: AnalysisConfig =
        serde_json::from_value(value).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()?;
    debug!(path = %path.display(), ?config, "loaded analysis config");
    Ok(config)
}
