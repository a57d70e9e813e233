//! CSV parsers for the four raw record sets.
//!
//! Parsing is structurally strict but value-lenient: a missing required
//! column is a hard error surfaced to the caller, while an unparsable date
//! or number in a cell coerces to a missing value and the row is kept.
//! This matches how the rest of the pipeline treats bad data: recover
//! locally, never abort on a single cell.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::core::domain::{BagRecord, FlightRecord, PassengerFlightRecord, RemarkRecord};
use crate::parsing::dates;

fn de_lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(dates::coerce_date(&raw))
}

fn de_lenient_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(dates::coerce_datetime(&raw))
}

fn de_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
}

/// Counts sometimes arrive float-formatted ("179.0"); parse through f64 and
/// keep only non-negative finite values.
fn de_lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.round() as u32))
}

fn de_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct PassengerFlightRow {
    record_locator: String,
    #[serde(deserialize_with = "de_lenient_date")]
    pnr_creation_date: Option<NaiveDate>,
    flight_number: String,
    #[serde(rename = "scheduled_departure_date_local", deserialize_with = "de_lenient_date")]
    scheduled_departure_date: Option<NaiveDate>,
    #[serde(deserialize_with = "de_lenient_count")]
    total_pax: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RemarkRow {
    record_locator: String,
    #[serde(deserialize_with = "de_lenient_date")]
    pnr_creation_date: Option<NaiveDate>,
    flight_number: String,
    #[serde(deserialize_with = "de_opt_string")]
    special_service_request: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FlightRow {
    company_id: String,
    flight_number: String,
    #[serde(
        rename = "scheduled_departure_datetime_local",
        deserialize_with = "de_lenient_datetime"
    )]
    scheduled_departure: Option<NaiveDateTime>,
    #[serde(
        rename = "actual_departure_datetime_local",
        deserialize_with = "de_lenient_datetime"
    )]
    actual_departure: Option<NaiveDateTime>,
    #[serde(deserialize_with = "de_lenient_count")]
    total_seats: Option<u32>,
    #[serde(deserialize_with = "de_lenient_f64")]
    scheduled_ground_time_minutes: Option<f64>,
    #[serde(deserialize_with = "de_lenient_f64")]
    minimum_turn_minutes: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct BagRow {
    company_id: String,
    flight_number: String,
    bag_type: String,
}

fn reader_for<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input)
}

/// Parse passenger flight-level records from any reader.
pub fn parse_passenger_flights<R: Read>(input: R) -> Result<Vec<PassengerFlightRecord>> {
    let mut records = Vec::new();
    for row in reader_for(input).deserialize::<PassengerFlightRow>() {
        let row = row.context("malformed passenger flight row")?;
        records.push(PassengerFlightRecord {
            record_locator: row.record_locator,
            pnr_creation_date: row.pnr_creation_date,
            flight_number: row.flight_number,
            scheduled_departure_date: row.scheduled_departure_date,
            total_pax: row.total_pax.unwrap_or(0),
        });
    }
    Ok(records)
}

/// Parse passenger flight-level records from a CSV file.
pub fn parse_passenger_flights_csv(path: &Path) -> Result<Vec<PassengerFlightRecord>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open passenger flight data at {}", path.display()))?;
    parse_passenger_flights(file)
        .with_context(|| format!("failed to parse passenger flight data at {}", path.display()))
}

/// Parse reservation remark records from any reader.
pub fn parse_remarks<R: Read>(input: R) -> Result<Vec<RemarkRecord>> {
    let mut records = Vec::new();
    for row in reader_for(input).deserialize::<RemarkRow>() {
        let row = row.context("malformed remark row")?;
        records.push(RemarkRecord {
            record_locator: row.record_locator,
            pnr_creation_date: row.pnr_creation_date,
            flight_number: row.flight_number,
            special_service_request: row.special_service_request,
        });
    }
    Ok(records)
}

/// Parse reservation remark records from a CSV file.
pub fn parse_remarks_csv(path: &Path) -> Result<Vec<RemarkRecord>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open remark data at {}", path.display()))?;
    parse_remarks(file).with_context(|| format!("failed to parse remark data at {}", path.display()))
}

/// Parse flight-level records from any reader.
///
/// The calendar date half of the flight join key is derived here from the
/// scheduled departure timestamp.
pub fn parse_flights<R: Read>(input: R) -> Result<Vec<FlightRecord>> {
    let mut records = Vec::new();
    for row in reader_for(input).deserialize::<FlightRow>() {
        let row = row.context("malformed flight row")?;
        let scheduled_departure_date = row.scheduled_departure.map(|dt| dt.date());
        records.push(FlightRecord {
            company_id: row.company_id,
            flight_number: row.flight_number,
            scheduled_departure: row.scheduled_departure,
            actual_departure: row.actual_departure,
            scheduled_departure_date,
            total_seats: row.total_seats,
            scheduled_ground_time_minutes: row.scheduled_ground_time_minutes,
            minimum_turn_minutes: row.minimum_turn_minutes,
        });
    }
    Ok(records)
}

/// Parse flight-level records from a CSV file.
pub fn parse_flights_csv(path: &Path) -> Result<Vec<FlightRecord>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open flight data at {}", path.display()))?;
    parse_flights(file).with_context(|| format!("failed to parse flight data at {}", path.display()))
}

/// Parse bag-level records from any reader.
pub fn parse_bags<R: Read>(input: R) -> Result<Vec<BagRecord>> {
    let mut records = Vec::new();
    for row in reader_for(input).deserialize::<BagRow>() {
        let row = row.context("malformed bag row")?;
        records.push(BagRecord {
            company_id: row.company_id,
            flight_number: row.flight_number,
            bag_type: row.bag_type,
        });
    }
    Ok(records)
}

/// Parse bag-level records from a CSV file.
pub fn parse_bags_csv(path: &Path) -> Result<Vec<BagRecord>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open bag data at {}", path.display()))?;
    parse_bags(file).with_context(|| format!("failed to parse bag data at {}", path.display()))
}
