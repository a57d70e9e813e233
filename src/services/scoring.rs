//! Composite scorer and rank & categorizer.
//!
//! The difficulty score is the weighted sum of the five normalized factor
//! columns, a pure function of the row and the weight table. Ranking and
//! tier assignment then run within each date partition: descending
//! tie-averaged ranks (1 is the hardest flight of the day) cut into
//! terciles Difficult / Medium / Easy.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::algorithms::ranking;
use crate::core::domain::{
    FactorWeight, FlightFactors, FlightSummaryRecord, NormalizedFactors,
};

/// Weighted sum of one row's normalized factors.
pub fn composite_score(normalized: &NormalizedFactors, weights: &[FactorWeight]) -> f64 {
    weights
        .iter()
        .map(|w| w.weight * normalized.get(w.factor))
        .sum()
}

/// Score every row, rank within each date partition, assign tiers, and
/// assemble the final summary table.
///
/// Output is sorted by (date, rank, flight number) so repeated runs over
/// the same snapshot serialize identically.
pub fn score_and_rank(
    rows: &[FlightFactors],
    normalized: &[NormalizedFactors],
    weights: &[FactorWeight],
) -> Vec<FlightSummaryRecord> {
    debug_assert_eq!(rows.len(), normalized.len());

    let scores: Vec<f64> = normalized
        .iter()
        .map(|n| composite_score(n, weights))
        .collect();

    let mut partitions: BTreeMap<Option<NaiveDate>, Vec<usize>> = BTreeMap::new();
    for (i, row) in rows.iter().enumerate() {
        partitions
            .entry(row.scheduled_departure_date)
            .or_default()
            .push(i);
    }

    let mut summaries = Vec::with_capacity(rows.len());
    for (_, indices) in partitions {
        let day_scores: Vec<f64> = indices.iter().map(|&i| scores[i]).collect();
        let ranks = ranking::average_ranks_desc(&day_scores);
        let n = indices.len();

        for (slot, &i) in indices.iter().enumerate() {
            let row = &rows[i];
            let norm = &normalized[i];
            let rank = ranks[slot];
            summaries.push(FlightSummaryRecord {
                flight_number: row.flight_number.clone(),
                scheduled_departure_date: row.scheduled_departure_date,
                total_passengers: row.total_passengers,
                total_seats: row.total_seats,
                ssr_count: row.ssr_count,
                avg_load_factor: row.avg_load_factor,
                avg_delay: row.avg_delay,
                ground_buffer: row.ground_buffer,
                transfer_to_checked_ratio: row.transfer_to_checked_ratio,
                load_norm: norm.load_norm,
                ssr_norm: norm.ssr_norm,
                delay_norm: norm.delay_norm,
                ground_norm: norm.ground_norm,
                bag_norm: norm.bag_norm,
                difficulty_score: scores[i],
                difficulty_rank: rank,
                difficulty_category: ranking::tercile_bucket(rank, n),
            });
        }
    }

    summaries.sort_by(|a, b| {
        a.scheduled_departure_date
            .cmp(&b.scheduled_departure_date)
            .then(
                a.difficulty_rank
                    .partial_cmp(&b.difficulty_rank)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
            .then_with(|| a.flight_number.cmp(&b.flight_number))
    });

    summaries
}
