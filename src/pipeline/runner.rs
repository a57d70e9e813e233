//! Pipeline orchestration.
//!
//! Drives a full scoring run over one immutable snapshot: validate, merge,
//! derive, aggregate, compute baggage ratios, assemble and impute,
//! normalize, weight, score, rank. Every stage consumes the previous
//! stage's output and produces a new table; nothing is mutated in place
//! and nothing is kept between runs, so re-running over the same snapshot
//! is idempotent down to the output fingerprint.

use serde::Serialize;

use crate::core::domain::{FactorWeight, FlightSummaryRecord};
use crate::io::loaders::DataSnapshot;
use crate::pipeline::checksum;
use crate::pipeline::error::{PipelineError, PipelineResult};
use crate::pipeline::validator::SnapshotValidator;
use crate::services;
use crate::transformations;

/// Result of one scoring run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    pub summaries: Vec<FlightSummaryRecord>,
    pub weights: Vec<FactorWeight>,
    /// SHA-256 over the serialized summaries and weights.
    pub fingerprint: String,
}

impl PipelineOutput {
    /// Number of distinct operating days in the output.
    pub fn date_count(&self) -> usize {
        let mut dates: Vec<_> = self
            .summaries
            .iter()
            .map(|s| s.scheduled_departure_date)
            .collect();
        dates.sort();
        dates.dedup();
        dates.len()
    }
}

/// The flight difficulty scoring pipeline.
///
/// Stateless; construct once and run against any number of snapshots.
#[derive(Debug, Clone, Default)]
pub struct DifficultyPipeline;

impl DifficultyPipeline {
    pub fn new() -> Self {
        Self
    }

    /// Score every flight in the snapshot.
    ///
    /// The snapshot must already be filtered to a single carrier (the
    /// loader does this). Fails on structurally unusable input or when a
    /// global statistic the score depends on is undefined; see
    /// [`PipelineError`] for the full taxonomy.
    pub fn run(&self, snapshot: &DataSnapshot) -> PipelineResult<PipelineOutput> {
        let report = SnapshotValidator::validate(snapshot);
        for warning in &report.warnings {
            log::warn!("snapshot: {}", warning);
        }
        if !report.is_valid() {
            return Err(PipelineError::InvalidSnapshot(report.errors.join("; ")));
        }

        let merged = transformations::merge_passenger_records(
            &snapshot.passenger_flights,
            &snapshot.remarks,
            &snapshot.flights,
        );
        let merged = transformations::derive_features(merged);

        let aggregates = services::aggregate_flights(&merged);
        let ratios = services::bag_ratios(&snapshot.bags);
        let factors = services::assemble_summaries(&aggregates, &ratios)?;

        let normalized = services::normalize(&factors)?;
        let weights = services::derive_weights(&factors, &normalized)?;
        let summaries = services::score_and_rank(&factors, &normalized, &weights);

        let serialized = serde_json::to_string(&(&summaries, &weights))?;
        let fingerprint = checksum::fingerprint(&serialized);

        let output = PipelineOutput {
            summaries,
            weights,
            fingerprint,
        };
        log::info!(
            "scored {} flights across {} dates (fingerprint {})",
            output.summaries.len(),
            output.date_count(),
            // Hex SHA-256 is always 64 chars; the short prefix is plenty.
            &output.fingerprint[..12]
        );

        Ok(output)
    }
}
