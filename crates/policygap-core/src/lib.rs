pub mod clause;
pub mod config;
pub mod error;
pub mod normalize;
pub mod report;
pub mod segment;

pub use clause::{Clause, ClauseId, RawClause, prepare, prepare_catalogue};
pub use config::{AnalysisConfig, CoverageThresholds, FusionPolicy, VectorizerMode};
pub use error::{ConfigError, InputError};
pub use normalize::normalize;
pub use report::{Coverage, GapReportEntry, round_score};
pub use segment::{MIN_SEGMENT_LENGTH, Segment, segment, segment_with_min_length};
