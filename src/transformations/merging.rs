//! Record merger: builds the denormalized per-passenger-record table.
//!
//! Two left joins over hash indexes:
//!
//! 1. passenger records ⋈ remarks on (record locator, creation date,
//!    flight number);
//! 2. the result ⋈ flights on (flight number, scheduled departure date).
//!
//! A join key containing a missing date never matches; the row is kept
//! with null joined attributes, which propagate as missing derived
//! features downstream. No row is ever dropped here.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::core::domain::{
    FlightRecord, MergedPassengerRecord, PassengerFlightRecord, RemarkRecord,
};

type RemarkKey<'a> = (&'a str, NaiveDate, &'a str);
type FlightKey<'a> = (&'a str, NaiveDate);

/// Left-join passenger records with remarks and flight attributes.
///
/// The remark set is one row per reservation; should an input violate that,
/// the first remark per key wins.
pub fn merge_passenger_records(
    passengers: &[PassengerFlightRecord],
    remarks: &[RemarkRecord],
    flights: &[FlightRecord],
) -> Vec<MergedPassengerRecord> {
    let mut remark_index: HashMap<RemarkKey<'_>, &RemarkRecord> = HashMap::new();
    for remark in remarks {
        if let Some(creation) = remark.pnr_creation_date {
            remark_index
                .entry((
                    remark.record_locator.as_str(),
                    creation,
                    remark.flight_number.as_str(),
                ))
                .or_insert(remark);
        }
    }

    let mut flight_index: HashMap<FlightKey<'_>, &FlightRecord> = HashMap::new();
    for flight in flights {
        if let Some(date) = flight.scheduled_departure_date {
            flight_index
                .entry((flight.flight_number.as_str(), date))
                .or_insert(flight);
        }
    }

    let merged: Vec<MergedPassengerRecord> = passengers
        .iter()
        .map(|pax| {
            let remark = pax.pnr_creation_date.and_then(|creation| {
                remark_index
                    .get(&(
                        pax.record_locator.as_str(),
                        creation,
                        pax.flight_number.as_str(),
                    ))
                    .copied()
            });

            let flight = pax.scheduled_departure_date.and_then(|date| {
                flight_index
                    .get(&(pax.flight_number.as_str(), date))
                    .copied()
            });

            MergedPassengerRecord {
                record_locator: pax.record_locator.clone(),
                pnr_creation_date: pax.pnr_creation_date,
                flight_number: pax.flight_number.clone(),
                scheduled_departure_date: pax.scheduled_departure_date,
                total_pax: pax.total_pax,
                service_request_marker: remark
                    .and_then(|r| r.special_service_request.clone()),
                scheduled_departure: flight.and_then(|f| f.scheduled_departure),
                actual_departure: flight.and_then(|f| f.actual_departure),
                total_seats: flight.and_then(|f| f.total_seats),
                scheduled_ground_time_minutes: flight
                    .and_then(|f| f.scheduled_ground_time_minutes),
                minimum_turn_minutes: flight.and_then(|f| f.minimum_turn_minutes),
                departure_delay_minutes: None,
                load_factor: None,
                special_service_request: false,
            }
        })
        .collect();

    let joined = merged.iter().filter(|m| m.flight_joined()).count();
    log::debug!(
        "merged {} passenger records ({} with flight attributes)",
        merged.len(),
        joined
    );

    merged
}
