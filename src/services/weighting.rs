//! Correlation weighting engine.
//!
//! Each normalized factor is weighted by the absolute value of its Pearson
//! correlation with the raw (unnormalized) average delay, the one directly
//! observed difficulty signal in the data. The five magnitudes are scaled
//! to sum to one, so the composite score stays a convex combination.
//!
//! A zero-variance column makes the correlation, and therefore the whole
//! weight table, undefined. That is a hard failure naming the offending
//! factor, never a silent NaN.

use crate::algorithms::stats;
use crate::core::domain::{FactorWeight, FlightFactors, NormalizedFactors, FACTORS};
use crate::pipeline::error::{PipelineError, PipelineResult};

/// Derive the factor weight table from normalized columns and raw delays.
///
/// Weights come back in canonical factor order and sum to one.
pub fn derive_weights(
    rows: &[FlightFactors],
    normalized: &[NormalizedFactors],
) -> PipelineResult<Vec<FactorWeight>> {
    debug_assert_eq!(rows.len(), normalized.len());

    let delays: Vec<f64> = rows.iter().map(|r| r.avg_delay).collect();

    let mut correlations = Vec::with_capacity(FACTORS.len());
    for factor in FACTORS {
        let column: Vec<f64> = normalized.iter().map(|n| n.get(factor)).collect();
        let r = stats::pearson(&column, &delays)
            .ok_or(PipelineError::UndefinedCorrelation(factor))?;
        correlations.push((factor, r.abs()));
    }

    let total: f64 = correlations.iter().map(|(_, c)| c).sum();
    if total == 0.0 {
        return Err(PipelineError::ZeroWeightSum);
    }

    let weights: Vec<FactorWeight> = correlations
        .into_iter()
        .map(|(factor, correlation)| FactorWeight {
            factor,
            correlation,
            weight: correlation / total,
        })
        .collect();

    for w in &weights {
        log::debug!(
            "factor {} |r|={:.4} weight={:.4}",
            w.factor,
            w.correlation,
            w.weight
        );
    }

    Ok(weights)
}
