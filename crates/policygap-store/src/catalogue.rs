//! Clause catalogue loading.

use std::path::Path;

use policygap_core::InputError;
use policygap_core::error::json_kind;
use serde_json::Value;
use tracing::info;

use crate::{StoreError, read_json};

/// Read a JSON clause catalogue into raw records, ready for `prepare`.
///
/// The document must be an array. Individual records are not inspected here.
pub fn load_catalogue(path: &Path) -> Result<Vec<Value>, StoreError> {
    match read_json(path)? {
        Value::Array(records) => {
            info!(path = %path.display(), count = records.len(), "loaded clause catalogue");
            Ok(records)
        }
        other => Err(InputError::CatalogueNotSequence {
            found: json_kind(&other),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(name: &str, contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_array_of_records() {
        let (_dir, path) = write(
            "clauses.json",
            r#"[{"clause_id": "A.5.1", "keywords": ["policy"]}, {"id": 7}]"#,
        );
        let records = load_catalogue(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["id"], 7);
    }

    #[test]
    fn empty_array_is_fine() {
        let (_dir, path) = write("clauses.json", "[]");
        assert!(load_catalogue(&path).unwrap().is_empty());
    }

    #[test]
    fn rejects_non_array() {
        let (_dir, path) = write("clauses.json", r#"{"clauses": []}"#);
        assert!(matches!(
            load_catalogue(&path),
            Err(StoreError::Input(InputError::CatalogueNotSequence { found: "object" }))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let (_dir, path) = write("clauses.json", "[{");
        assert!(matches!(load_catalogue(&path), Err(StoreError::Json { .. })));
    }

    #[test]
    fn missing_file_errors() {
        let result = load_catalogue(Path::new("/nonexistent/clauses.json"));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }
}
