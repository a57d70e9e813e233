//! Normalizer: min-max scaling of the five scoring factors.
//!
//! Normalization runs in two phases: a first pass over all rows collects
//! the per-factor ranges ([`FactorRanges`]), a second pass applies them.
//! The global dependency is explicit so tests can exercise the phases
//! separately.
//!
//! The ground-buffer column is inverted after scaling: a small buffer means
//! a tight turnaround, which contributes difficulty. A factor whose range
//! is degenerate (every flight identical) cannot be scaled and fails the
//! run with an error naming the factor.

use crate::algorithms::stats;
use crate::core::domain::{Factor, FlightFactors, NormalizedFactors, FACTORS};
use crate::pipeline::error::{PipelineError, PipelineResult};

/// Per-factor minimum and maximum over the run, in canonical factor order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorRanges {
    ranges: [(f64, f64); FACTORS.len()],
}

/// Canonical array slot for a factor; matches the order of [`FACTORS`].
fn slot(factor: Factor) -> usize {
    match factor {
        Factor::LoadFactor => 0,
        Factor::SsrCount => 1,
        Factor::DepartureDelay => 2,
        Factor::GroundBuffer => 3,
        Factor::TransferRatio => 4,
    }
}

impl FactorRanges {
    /// Scan all rows and record each factor's min and max.
    pub fn scan(rows: &[FlightFactors]) -> PipelineResult<Self> {
        let mut ranges = [(0.0, 0.0); FACTORS.len()];
        for factor in FACTORS {
            let values: Vec<f64> = rows.iter().map(|r| r.factor_value(factor)).collect();
            let (min, max) = stats::min_max(&values).ok_or_else(|| {
                PipelineError::InvalidSnapshot("no flight rows to normalize".to_string())
            })?;
            if min == max {
                return Err(PipelineError::DegenerateFactorRange(factor));
            }
            ranges[slot(factor)] = (min, max);
        }

        Ok(Self { ranges })
    }

    fn scale(&self, factor: Factor, value: f64) -> f64 {
        let (min, max) = self.ranges[slot(factor)];
        (value - min) / (max - min)
    }
}

/// Apply min-max scaling to every row, inverting the ground-buffer factor.
pub fn normalize(rows: &[FlightFactors]) -> PipelineResult<Vec<NormalizedFactors>> {
    let ranges = FactorRanges::scan(rows)?;
    Ok(apply_ranges(rows, &ranges))
}

/// Second phase: scale rows against previously collected ranges.
pub fn apply_ranges(rows: &[FlightFactors], ranges: &FactorRanges) -> Vec<NormalizedFactors> {
    rows.iter()
        .map(|row| NormalizedFactors {
            load_norm: ranges.scale(Factor::LoadFactor, row.avg_load_factor),
            ssr_norm: ranges.scale(Factor::SsrCount, row.ssr_count),
            delay_norm: ranges.scale(Factor::DepartureDelay, row.avg_delay),
            ground_norm: 1.0 - ranges.scale(Factor::GroundBuffer, row.ground_buffer),
            bag_norm: ranges.scale(Factor::TransferRatio, row.transfer_to_checked_ratio),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(load: f64, ssr: f64, delay: f64, ground: f64, bag: f64) -> FlightFactors {
        FlightFactors {
            flight_number: "100".to_string(),
            scheduled_departure_date: None,
            total_passengers: 0,
            total_seats: None,
            ssr_count: ssr,
            avg_load_factor: load,
            avg_delay: delay,
            ground_buffer: ground,
            transfer_to_checked_ratio: bag,
        }
    }

    #[test]
    fn scales_each_factor_into_unit_interval() {
        let rows = vec![
            row(0.2, 0.0, 0.0, 10.0, 0.5),
            row(0.5, 2.0, 15.0, 20.0, 1.0),
            row(0.8, 4.0, 30.0, 30.0, 1.5),
        ];

        let normalized = normalize(&rows).unwrap();

        assert_eq!(normalized[0].load_norm, 0.0);
        assert_eq!(normalized[2].load_norm, 1.0);
        assert!((normalized[1].load_norm - 0.5).abs() < 1e-12);

        for n in &normalized {
            for factor in FACTORS {
                let v = n.get(factor);
                assert!((0.0..=1.0).contains(&v), "{factor} = {v}");
            }
        }
    }

    #[test]
    fn ground_buffer_is_inverted() {
        let rows = vec![
            row(0.2, 0.0, 0.0, 10.0, 0.5),
            row(0.8, 2.0, 30.0, 40.0, 1.5),
        ];

        let normalized = normalize(&rows).unwrap();
        // Smallest buffer scores highest.
        assert_eq!(normalized[0].ground_norm, 1.0);
        assert_eq!(normalized[1].ground_norm, 0.0);
    }

    #[test]
    fn constant_factor_fails_the_run() {
        let rows = vec![
            row(0.5, 0.0, 0.0, 10.0, 0.5),
            row(0.5, 2.0, 30.0, 40.0, 1.5),
        ];

        let err = normalize(&rows).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::DegenerateFactorRange(Factor::LoadFactor)
        ));
    }

    #[test]
    fn empty_input_is_invalid() {
        assert!(matches!(
            normalize(&[]).unwrap_err(),
            PipelineError::InvalidSnapshot(_)
        ));
    }

    #[test]
    fn two_phase_matches_single_call() {
        let rows = vec![
            row(0.2, 0.0, 5.0, 10.0, 0.5),
            row(0.6, 1.0, 10.0, 25.0, 0.9),
            row(0.9, 3.0, 40.0, 35.0, 2.0),
        ];

        let ranges = FactorRanges::scan(&rows).unwrap();
        assert_eq!(apply_ranges(&rows, &ranges), normalize(&rows).unwrap());
    }
}
