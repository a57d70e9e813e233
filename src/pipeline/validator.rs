//! Snapshot validation.
//!
//! Runs ahead of the pipeline proper and separates what must stop the run
//! (no flights, no passenger records) from what the pipeline recovers from
//! on its own (unparsable dates, odd seat counts, unknown bag labels). The
//! recoverable findings surface as warnings so an analyst can judge input
//! quality without digging through the raw files.

use std::collections::HashSet;

use crate::core::domain::BagType;
use crate::io::loaders::DataSnapshot;

/// Outcome of validating one input snapshot.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validates a snapshot before scoring.
pub struct SnapshotValidator;

impl SnapshotValidator {
    pub fn validate(snapshot: &DataSnapshot) -> ValidationReport {
        let mut report = ValidationReport::default();

        if snapshot.flights.is_empty() {
            report.errors.push("flight record set is empty".to_string());
        }
        if snapshot.passenger_flights.is_empty() {
            report
                .errors
                .push("passenger flight record set is empty".to_string());
        }

        let mut seen = HashSet::new();
        let mut duplicate_flights = 0usize;
        let mut missing_capacity = 0usize;
        for flight in &snapshot.flights {
            if let Some(date) = flight.scheduled_departure_date {
                if !seen.insert((flight.flight_number.as_str(), date)) {
                    duplicate_flights += 1;
                }
            }
            if flight.total_seats.map_or(true, |seats| seats == 0) {
                missing_capacity += 1;
            }
        }
        if duplicate_flights > 0 {
            report.warnings.push(format!(
                "{} duplicate (flight, date) rows in flight data; first row wins in joins",
                duplicate_flights
            ));
        }
        if missing_capacity > 0 {
            report.warnings.push(format!(
                "{} flight rows with missing or zero seat capacity",
                missing_capacity
            ));
        }

        let undated_passengers = snapshot
            .passenger_flights
            .iter()
            .filter(|p| p.scheduled_departure_date.is_none())
            .count();
        if undated_passengers > 0 {
            report.warnings.push(format!(
                "{} passenger records without a parsable departure date",
                undated_passengers
            ));
        }

        let unknown_bags = snapshot
            .bags
            .iter()
            .filter(|b| b.category() == BagType::Other)
            .count();
        if unknown_bags > 0 {
            report.warnings.push(format!(
                "{} bag records with unrecognized bag types (ignored in ratios)",
                unknown_bags
            ));
        }

        report
    }
}
