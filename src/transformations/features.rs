//! Feature deriver: per-record derived fields on the merged table.
//!
//! Consumes the merger's output and emits a new table with the three
//! derived fields filled in:
//!
//! - `departure_delay_minutes`: actual minus scheduled departure, clamped
//!   to zero (an early departure is not negative delay);
//! - `load_factor`: party size over seat capacity, undefined when capacity
//!   is missing or zero;
//! - `special_service_request`: true only for a non-empty, non-zero marker;
//!   a missing marker means no request, not unknown.

use crate::core::domain::MergedPassengerRecord;

/// Fill the derived feature fields on every merged record.
pub fn derive_features(records: Vec<MergedPassengerRecord>) -> Vec<MergedPassengerRecord> {
    records
        .into_iter()
        .map(|mut record| {
            record.departure_delay_minutes = match (
                record.actual_departure,
                record.scheduled_departure,
            ) {
                (Some(actual), Some(scheduled)) => {
                    let minutes = (actual - scheduled).num_seconds() as f64 / 60.0;
                    Some(minutes.max(0.0))
                }
                _ => None,
            };

            record.load_factor = match record.total_seats {
                Some(seats) if seats > 0 => {
                    Some(f64::from(record.total_pax) / f64::from(seats))
                }
                _ => None,
            };

            record.special_service_request = record
                .service_request_marker
                .as_deref()
                .map(|marker| {
                    let trimmed = marker.trim();
                    !trimmed.is_empty() && trimmed != "0"
                })
                .unwrap_or(false);

            record
        })
        .collect()
}
