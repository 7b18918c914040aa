//! Clause catalogue preparation.
//!
//! Raw clause records arrive as already-deserialized JSON mappings whose
//! field names vary between catalogues (`clause_id` or `id`, `title` or
//! `control`, and so on). Preparation resolves each logical field through
//! an ordered alias list, normalises the requirement text and keywords once,
//! and keeps the original record for downstream consumers.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{InputError, json_kind};
use crate::normalize::normalize;

/// A raw clause record as read from a catalogue.
pub type RawClause = Map<String, Value>;

/// Aliases for the clause identifier, in priority order.
pub const CLAUSE_ID_FIELDS: &[&str] = &["clause_id", "id"];

/// Aliases for the human-readable title, in priority order.
pub const TITLE_FIELDS: &[&str] = &["title", "control"];

/// Aliases for the requirement text, in priority order.
pub const REQUIREMENT_FIELDS: &[&str] = &["requirement_text", "control", "description"];

/// Field holding the keyword list.
pub const KEYWORDS_FIELD: &str = "keywords";

/// Stable clause identifier, numeric or textual depending on the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClauseId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ClauseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Render an optional clause id, `-` when absent.
pub fn display_id(id: Option<&ClauseId>) -> String {
    id.map_or_else(|| "-".to_string(), ToString::to_string)
}

/// One required control, prepared for matching.
///
/// The normalised fields are derived once by [`Clause::from_record`] and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub clause_id: Option<ClauseId>,
    pub title: Option<String>,
    pub requirement_text: String,
    pub keywords: Vec<String>,
    pub normalized_requirement: String,
    pub normalized_keywords: Vec<String>,
    /// The record as supplied, including fields the engine does not read.
    pub fields: RawClause,
}

impl Clause {
    /// Prepare a single record. Missing or unusable fields become empty values.
    pub fn from_record(record: &RawClause) -> Self {
        let clause_id = resolve_first(record, CLAUSE_ID_FIELDS).and_then(|v| match v {
            Value::Number(n) => Some(n.as_i64().map_or_else(
                || {
                    warn!(id = %n, "clause id does not fit an integer; keeping it as text");
                    ClauseId::Text(n.to_string())
                },
                ClauseId::Number,
            )),
            Value::String(s) => Some(ClauseId::Text(s.clone())),
            other => {
                warn!(found = json_kind(other), "clause id is not a number or string; ignoring");
                None
            }
        });
        let title = resolve_text(record, TITLE_FIELDS);
        let requirement_text = resolve_text(record, REQUIREMENT_FIELDS).unwrap_or_default();
        let keywords = read_keywords(record);

        let normalized_requirement = normalize(&requirement_text);
        let normalized_keywords = keywords.iter().map(|k| normalize(k)).collect();

        Self {
            clause_id,
            title,
            requirement_text,
            keywords,
            normalized_requirement,
            normalized_keywords,
            fields: record.clone(),
        }
    }

    /// Identifier for display, or `-` when the record carries none.
    pub fn display_id(&self) -> String {
        display_id(self.clause_id.as_ref())
    }
}

/// Prepare every record of a catalogue, preserving order.
///
/// Fails only when a record is not a mapping.
pub fn prepare(clauses: &[Value]) -> Result<Vec<Clause>, InputError> {
    let prepared = clauses
        .iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Object(record) => Ok(Clause::from_record(record)),
            other => Err(InputError::ClauseNotMapping {
                index,
                found: json_kind(other),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = prepared.len(), "prepared clauses");
    Ok(prepared)
}

/// Prepare a whole deserialized catalogue, which must be a sequence.
pub fn prepare_catalogue(catalogue: &Value) -> Result<Vec<Clause>, InputError> {
    match catalogue {
        Value::Array(records) => prepare(records),
        other => Err(InputError::CatalogueNotSequence {
            found: json_kind(other),
        }),
    }
}

/// Return the first field in `keys` that is present and non-empty.
pub fn resolve_first<'a>(record: &'a RawClause, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| is_present(value))
}

/// Like [`resolve_first`], restricted to values that read as text.
///
/// Numbers are rendered in their JSON form; other kinds are skipped.
pub fn resolve_text(record: &RawClause, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .filter(|value| is_present(value))
        .find_map(|value| match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(_) => true,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn read_keywords(record: &RawClause) -> Vec<String> {
    match record.get(KEYWORDS_FIELD) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => {
            let keywords: Vec<String> = items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect();
            if keywords.len() < items.len() {
                warn!(
                    skipped = items.len() - keywords.len(),
                    "ignoring non-string keyword entries"
                );
            }
            keywords
        }
        Some(other) => {
            warn!(found = json_kind(other), "keywords is not a sequence; treating as empty");
            Vec::new()
        }
    }
}
