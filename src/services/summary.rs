//! Summary assembler: joins flight aggregates with baggage ratios and
//! resolves missing factor values.
//!
//! The baggage join is on flight number alone (bag records carry no date).
//! Imputation is column-wise: each undefined factor value is replaced by
//! the median of that column over the whole run, computed on the post-join
//! table. The result therefore depends on the full batch, not on any
//! single flight.

use std::collections::HashMap;

use crate::algorithms::stats;
use crate::core::domain::{BagRatio, Factor, FlightAggregate, FlightFactors};
use crate::pipeline::error::{PipelineError, PipelineResult};

struct PendingRow<'a> {
    aggregate: &'a FlightAggregate,
    transfer_to_checked_ratio: Option<f64>,
}

fn imputed_column(
    values: &[Option<f64>],
    factor: Factor,
) -> PipelineResult<Vec<f64>> {
    let defined: Vec<f64> = values.iter().flatten().copied().collect();
    let median =
        stats::median(&defined).ok_or(PipelineError::ImputationUnavailable(factor))?;

    let missing = values.len() - defined.len();
    if missing > 0 {
        log::debug!(
            "imputed {} missing {} values with median {:.4}",
            missing,
            factor,
            median
        );
    }

    Ok(values.iter().map(|v| v.unwrap_or(median)).collect())
}

/// Left-join aggregates with baggage ratios and impute missing factors.
///
/// Fails only when a factor column has no defined values at all, leaving
/// nothing to impute from.
pub fn assemble_summaries(
    aggregates: &[FlightAggregate],
    ratios: &[BagRatio],
) -> PipelineResult<Vec<FlightFactors>> {
    let ratio_index: HashMap<&str, &BagRatio> = ratios
        .iter()
        .map(|r| (r.flight_number.as_str(), r))
        .collect();

    let rows: Vec<PendingRow<'_>> = aggregates
        .iter()
        .map(|aggregate| PendingRow {
            aggregate,
            transfer_to_checked_ratio: ratio_index
                .get(aggregate.flight_number.as_str())
                .and_then(|r| r.transfer_to_checked_ratio),
        })
        .collect();

    let load = imputed_column(
        &rows
            .iter()
            .map(|r| r.aggregate.avg_load_factor)
            .collect::<Vec<_>>(),
        Factor::LoadFactor,
    )?;
    let ssr = imputed_column(
        &rows
            .iter()
            .map(|r| Some(f64::from(r.aggregate.ssr_count)))
            .collect::<Vec<_>>(),
        Factor::SsrCount,
    )?;
    let delay = imputed_column(
        &rows
            .iter()
            .map(|r| r.aggregate.avg_delay)
            .collect::<Vec<_>>(),
        Factor::DepartureDelay,
    )?;
    let ground = imputed_column(
        &rows
            .iter()
            .map(|r| r.aggregate.ground_buffer)
            .collect::<Vec<_>>(),
        Factor::GroundBuffer,
    )?;
    let bag = imputed_column(
        &rows
            .iter()
            .map(|r| r.transfer_to_checked_ratio)
            .collect::<Vec<_>>(),
        Factor::TransferRatio,
    )?;

    Ok(rows
        .iter()
        .enumerate()
        .map(|(i, row)| FlightFactors {
            flight_number: row.aggregate.flight_number.clone(),
            scheduled_departure_date: row.aggregate.scheduled_departure_date,
            total_passengers: row.aggregate.total_passengers,
            total_seats: row.aggregate.total_seats,
            ssr_count: ssr[i],
            avg_load_factor: load[i],
            avg_delay: delay[i],
            ground_buffer: ground[i],
            transfer_to_checked_ratio: bag[i],
        })
        .collect())
}
