//! Policy document loading.
//!
//! Only plain text is read directly. PDF and other binary formats must be
//! converted to text before analysis.

use std::path::Path;

use tracing::info;

use crate::{StoreError, read_file};

/// Extensions accepted by [`load_policy_text`], compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt"];

/// Read a `.txt` policy document as UTF-8.
pub fn load_policy_text(path: &Path) -> Result<String, StoreError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(StoreError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: if extension.is_empty() {
                "(none)".to_string()
            } else {
                extension
            },
        });
    }

    let text = read_file(path)?;
    info!(path = %path.display(), chars = text.chars().count(), "loaded policy text");
    Ok(text)
}
