//! Error types for the scoring pipeline.

use crate::core::domain::Factor;

/// Result type for pipeline stages.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Failures that abort a scoring run.
///
/// Cell-level problems (unparsable dates, zero divisors, unmatched joins)
/// never reach this type; they are recovered locally as missing values. A
/// run fails only when its inputs are structurally unusable or a global
/// statistic the score depends on is mathematically undefined.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("invalid input snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("factor {0} has no defined values; median imputation is impossible")]
    ImputationUnavailable(Factor),

    #[error("factor {0} is constant across all flights; min-max range is degenerate")]
    DegenerateFactorRange(Factor),

    #[error("correlation with average delay is undefined for factor {0} (zero variance)")]
    UndefinedCorrelation(Factor),

    #[error("all factor correlations are zero; weights are undefined")]
    ZeroWeightSum,

    #[error("failed to serialize pipeline output: {0}")]
    Serialization(#[from] serde_json::Error),
}
