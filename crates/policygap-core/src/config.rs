//! Analysis tunables shared by the engine and the binary.
//!
//! Every field is optional when deserialising, so a config file only needs
//! the overrides.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::segment::MIN_SEGMENT_LENGTH;

/// How requirement/segment similarity vectors are built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VectorizerMode {
    /// Fit a fresh TF-IDF model on each (requirement, segment) pair.
    #[default]
    Pairwise,
    /// Fit one TF-IDF model over every segment and requirement of the run.
    ///
    /// Absolute similarities differ from `Pairwise`; relative ranking is
    /// what this mode aims to keep.
    Corpus,
}

impl VectorizerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pairwise => "pairwise",
            Self::Corpus => "corpus",
        }
    }
}

impl fmt::Display for VectorizerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VectorizerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pairwise" => Ok(Self::Pairwise),
            "corpus" => Ok(Self::Corpus),
            other => Err(format!("unknown vectorizer mode: {other}")),
        }
    }
}

/// Lower bounds of the coverage bands. Each band is closed below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageThresholds {
    pub covered: f64,
    pub partial: f64,
}

impl Default for CoverageThresholds {
    fn default() -> Self {
        Self {
            covered: 0.6,
            partial: 0.25,
        }
    }
}

/// Keyword/similarity fusion policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionPolicy {
    /// Keyword score at or above which similarity is skipped.
    pub keyword_shortcut: f64,
    /// Fused score returned when the shortcut fires.
    pub shortcut_score: f64,
    pub keyword_weight: f64,
    pub similarity_weight: f64,
}

impl Default for FusionPolicy {
    fn default() -> Self {
        Self {
            keyword_shortcut: 0.5,
            shortcut_score: 0.8,
            keyword_weight: 0.5,
            similarity_weight: 0.5,
        }
    }
}

/// Full set of analysis tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub min_segment_length: usize,
    pub thresholds: CoverageThresholds,
    pub fusion: FusionPolicy,
    pub vectorizer: VectorizerMode,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_segment_length: MIN_SEGMENT_LENGTH,
            thresholds: CoverageThresholds::default(),
            fusion: FusionPolicy::default(),
            vectorizer: VectorizerMode::default(),
        }
    }
}

impl AnalysisConfig {
    /// Check every tunable against its valid range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_segment_length == 0 {
            return Err(ConfigError::ZeroSegmentLength);
        }

        let unit_fields = [
            ("thresholds.covered", self.thresholds.covered),
            ("thresholds.partial", self.thresholds.partial),
            ("fusion.keyword_shortcut", self.fusion.keyword_shortcut),
            ("fusion.shortcut_score", self.fusion.shortcut_score),
            ("fusion.keyword_weight", self.fusion.keyword_weight),
            ("fusion.similarity_weight", self.fusion.similarity_weight),
        ];
        for (name, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfUnitRange { name, value });
            }
        }

        if self.thresholds.partial > self.thresholds.covered {
            return Err(ConfigError::ThresholdOrder {
                partial: self.thresholds.partial,
                covered: self.thresholds.covered,
            });
        }

        let sum = self.fusion.keyword_weight + self.fusion.similarity_weight;
        if (sum - 1.0).abs() > 1e-9 {
            return Err(ConfigError::WeightSum {
                keyword: self.fusion.keyword_weight,
                similarity: self.fusion.similarity_weight,
            });
        }

        Ok(())
    }
}
