use thiserror::Error;

/// Input that violates the basic shape contract of the engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("clause catalogue must be a sequence of records, found {found}")]
    CatalogueNotSequence { found: &'static str },

    #[error("clause record {index} must be a mapping, found {found}")]
    ClauseNotMapping { index: usize, found: &'static str },
}

/// An analysis tunable outside its valid range.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be within [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f64 },

    #[error("partial threshold ({partial}) must not exceed covered threshold ({covered})")]
    ThresholdOrder { partial: f64, covered: f64 },

    #[error("fusion weights must sum to 1, got {keyword} + {similarity}")]
    WeightSum { keyword: f64, similarity: f64 },

    #[error("min_segment_length must be at least 1")]
    ZeroSegmentLength,
}

/// Name of a JSON value's kind, for error messages.
pub fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
