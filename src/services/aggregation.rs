//! Flight aggregator: collapses the merged passenger table to one row per
//! flight per day.
//!
//! Group key is `(flight_number, scheduled_departure_date)`; records whose
//! departure date failed to parse group under the `None` date. Flight
//! attributes are constant within a group by construction (they joined on
//! the group key), so first-seen values are taken; means skip undefined
//! inputs.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::algorithms::stats;
use crate::core::domain::{FlightAggregate, MergedPassengerRecord};

struct GroupAccumulator<'a> {
    first: &'a MergedPassengerRecord,
    ssr_count: u32,
    total_passengers: u32,
    load_factors: Vec<f64>,
    delays: Vec<f64>,
}

impl<'a> GroupAccumulator<'a> {
    fn new(first: &'a MergedPassengerRecord) -> Self {
        Self {
            first,
            ssr_count: 0,
            total_passengers: 0,
            load_factors: Vec::new(),
            delays: Vec::new(),
        }
    }

    fn absorb(&mut self, record: &MergedPassengerRecord) {
        if record.special_service_request {
            self.ssr_count += 1;
        }
        self.total_passengers += record.total_pax;
        if let Some(lf) = record.load_factor {
            self.load_factors.push(lf);
        }
        if let Some(delay) = record.departure_delay_minutes {
            self.delays.push(delay);
        }
    }
}

/// One output row per distinct `(flight_number, date)` in the input,
/// ordered by key.
pub fn aggregate_flights(records: &[MergedPassengerRecord]) -> Vec<FlightAggregate> {
    let mut groups: BTreeMap<(String, Option<NaiveDate>), GroupAccumulator<'_>> = BTreeMap::new();

    for record in records {
        let key = (record.flight_number.clone(), record.scheduled_departure_date);
        groups
            .entry(key)
            .or_insert_with(|| GroupAccumulator::new(record))
            .absorb(record);
    }

    let aggregates: Vec<FlightAggregate> = groups
        .into_iter()
        .map(|((flight_number, scheduled_departure_date), acc)| {
            let ground_time = acc.first.scheduled_ground_time_minutes;
            let min_turn = acc.first.minimum_turn_minutes;
            let ground_buffer = match (ground_time, min_turn) {
                (Some(ground), Some(turn)) => Some(ground - turn),
                _ => None,
            };

            FlightAggregate {
                flight_number,
                scheduled_departure_date,
                ssr_count: acc.ssr_count,
                total_passengers: acc.total_passengers,
                total_seats: acc.first.total_seats,
                avg_load_factor: stats::mean(&acc.load_factors),
                avg_delay: stats::mean(&acc.delays),
                ground_time,
                min_turn,
                ground_buffer,
            }
        })
        .collect();

    log::debug!(
        "aggregated {} passenger records into {} flight rows",
        records.len(),
        aggregates.len()
    );

    aggregates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 5, d)
    }

    fn record(flight: &str, day: Option<NaiveDate>, pax: u32) -> MergedPassengerRecord {
        MergedPassengerRecord {
            record_locator: "L".to_string(),
            pnr_creation_date: None,
            flight_number: flight.to_string(),
            scheduled_departure_date: day,
            total_pax: pax,
            service_request_marker: None,
            scheduled_departure: None,
            actual_departure: None,
            total_seats: Some(100),
            scheduled_ground_time_minutes: Some(60.0),
            minimum_turn_minutes: Some(45.0),
            departure_delay_minutes: Some(10.0),
            load_factor: Some(0.5),
            special_service_request: false,
        }
    }

    #[test]
    fn one_row_per_flight_date_pair() {
        let records = vec![
            record("100", date(1), 2),
            record("100", date(1), 3),
            record("100", date(2), 1),
            record("200", date(1), 4),
        ];

        let aggregates = aggregate_flights(&records);
        assert_eq!(aggregates.len(), 3);

        let first = &aggregates[0];
        assert_eq!(first.flight_number, "100");
        assert_eq!(first.scheduled_departure_date, date(1));
        assert_eq!(first.total_passengers, 5);
    }

    #[test]
    fn ssr_counts_only_flagged_records() {
        let mut flagged = record("100", date(1), 2);
        flagged.special_service_request = true;
        let records = vec![flagged, record("100", date(1), 3)];

        let aggregates = aggregate_flights(&records);
        assert_eq!(aggregates[0].ssr_count, 1);
    }

    #[test]
    fn means_skip_undefined_values() {
        let mut a = record("100", date(1), 2);
        a.load_factor = Some(0.4);
        a.departure_delay_minutes = Some(20.0);
        let mut b = record("100", date(1), 2);
        b.load_factor = None;
        b.departure_delay_minutes = None;

        let aggregates = aggregate_flights(&[a, b]);
        assert_eq!(aggregates[0].avg_load_factor, Some(0.4));
        assert_eq!(aggregates[0].avg_delay, Some(20.0));
    }

    #[test]
    fn all_undefined_means_stay_undefined() {
        let mut a = record("100", date(1), 2);
        a.load_factor = None;
        a.departure_delay_minutes = None;

        let aggregates = aggregate_flights(&[a]);
        assert_eq!(aggregates[0].avg_load_factor, None);
        assert_eq!(aggregates[0].avg_delay, None);
    }

    #[test]
    fn ground_buffer_needs_both_components() {
        let mut a = record("100", date(1), 2);
        a.scheduled_ground_time_minutes = Some(70.0);
        a.minimum_turn_minutes = Some(45.0);
        let mut b = record("200", date(1), 2);
        b.minimum_turn_minutes = None;

        let aggregates = aggregate_flights(&[a, b]);
        assert_eq!(aggregates[0].ground_buffer, Some(25.0));
        assert_eq!(aggregates[1].ground_buffer, None);
    }

    #[test]
    fn missing_date_forms_its_own_group() {
        let records = vec![record("100", None, 2), record("100", date(1), 3)];
        let aggregates = aggregate_flights(&records);
        assert_eq!(aggregates.len(), 2);
        assert_eq!(aggregates[0].scheduled_departure_date, None);
    }
}
