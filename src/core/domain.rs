//! Domain models for flight difficulty analysis.
//!
//! This module provides the data structures that flow through the scoring
//! pipeline: the four raw record sets delivered by the data loader, the
//! denormalized per-passenger view produced by the record merger, the
//! per-flight aggregates, and the final scored summary rows.
//!
//! Every value that can be absent in the raw data (unparsable dates, missing
//! seat capacity, undefined ratios) is modeled as an explicit `Option`; the
//! pipeline never encodes "missing" as NaN or a sentinel number.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One reservation segment: a booking (record locator) travelling on a
/// particular flight, with the number of passengers in the party.
///
/// The `(record_locator, pnr_creation_date, flight_number)` triple keys the
/// join against [`RemarkRecord`]; `(flight_number,
/// scheduled_departure_date)` keys the join against [`FlightRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerFlightRecord {
    pub record_locator: String,
    pub pnr_creation_date: Option<NaiveDate>,
    pub flight_number: String,
    pub scheduled_departure_date: Option<NaiveDate>,
    pub total_pax: u32,
}

/// One reservation-level remark, carrying an optional special-service-request
/// marker (wheelchair assistance, unaccompanied minor, and similar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemarkRecord {
    pub record_locator: String,
    pub pnr_creation_date: Option<NaiveDate>,
    pub flight_number: String,
    pub special_service_request: Option<String>,
}

/// One scheduled flight leg on a particular day.
///
/// `scheduled_departure_date` is derived from the scheduled departure
/// timestamp at parse time and is the date half of the flight join key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub company_id: String,
    pub flight_number: String,
    pub scheduled_departure: Option<NaiveDateTime>,
    pub actual_departure: Option<NaiveDateTime>,
    pub scheduled_departure_date: Option<NaiveDate>,
    pub total_seats: Option<u32>,
    pub scheduled_ground_time_minutes: Option<f64>,
    pub minimum_turn_minutes: Option<f64>,
}

/// Category of a checked bag, after trim + lowercase normalization of the
/// raw label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BagType {
    /// Bag checked at the origin station.
    Origin,
    /// Bag connecting from an inbound flight.
    Transfer,
    /// Transfer bag on a tight connection.
    HotTransfer,
    /// Any label the classification does not recognize.
    Other,
}

impl BagType {
    /// Classify a raw bag-type label. Matching is case- and
    /// whitespace-insensitive.
    ///
    /// ```
    /// use fdd_rust::core::domain::BagType;
    ///
    /// assert_eq!(BagType::parse(" Hot Transfer "), BagType::HotTransfer);
    /// assert_eq!(BagType::parse("ORIGIN"), BagType::Origin);
    /// assert_eq!(BagType::parse("gate-checked"), BagType::Other);
    /// ```
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "origin" => BagType::Origin,
            "transfer" => BagType::Transfer,
            "hot transfer" => BagType::HotTransfer,
            _ => BagType::Other,
        }
    }
}

/// One bag handled for a flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BagRecord {
    pub company_id: String,
    pub flight_number: String,
    pub bag_type: String,
}

impl BagRecord {
    /// Normalized category of this bag.
    pub fn category(&self) -> BagType {
        BagType::parse(&self.bag_type)
    }
}

/// Denormalized per-passenger-record view: a [`PassengerFlightRecord`]
/// left-joined with its remark and its flight, plus the derived features.
///
/// Rows whose flight join missed keep `None` flight attributes, which
/// propagate as `None` derived features. The derived fields are filled by
/// the feature deriver, not the merger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedPassengerRecord {
    pub record_locator: String,
    pub pnr_creation_date: Option<NaiveDate>,
    pub flight_number: String,
    pub scheduled_departure_date: Option<NaiveDate>,
    pub total_pax: u32,
    /// Raw remark marker from the remark join; `None` when unmatched.
    pub service_request_marker: Option<String>,
    pub scheduled_departure: Option<NaiveDateTime>,
    pub actual_departure: Option<NaiveDateTime>,
    pub total_seats: Option<u32>,
    pub scheduled_ground_time_minutes: Option<f64>,
    pub minimum_turn_minutes: Option<f64>,
    /// Minutes of departure delay, clamped to zero for early departures.
    pub departure_delay_minutes: Option<f64>,
    /// Passengers over seats; undefined when seat capacity is missing or zero.
    pub load_factor: Option<f64>,
    /// Whether the reservation carries a non-empty, non-zero service request
    /// marker. Missing markers count as no request.
    pub special_service_request: bool,
}

impl MergedPassengerRecord {
    /// Whether the flight-level join found a matching flight row.
    pub fn flight_joined(&self) -> bool {
        self.scheduled_departure.is_some()
            || self.actual_departure.is_some()
            || self.total_seats.is_some()
    }
}

/// One row per `(flight_number, scheduled_departure_date)` group of merged
/// passenger records.
///
/// Means skip undefined inputs; `ground_buffer` is defined only when both
/// ground time and minimum turn are present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightAggregate {
    pub flight_number: String,
    pub scheduled_departure_date: Option<NaiveDate>,
    pub ssr_count: u32,
    pub total_passengers: u32,
    pub total_seats: Option<u32>,
    pub avg_load_factor: Option<f64>,
    pub avg_delay: Option<f64>,
    pub ground_time: Option<f64>,
    pub min_turn: Option<f64>,
    pub ground_buffer: Option<f64>,
}

/// Per-flight baggage mix. The ratio is undefined when no origin bags were
/// checked; absent buckets count zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BagRatio {
    pub flight_number: String,
    pub checked: u32,
    pub total_transfer: u32,
    pub transfer_to_checked_ratio: Option<f64>,
}

/// Assembler output: one row per flight per date with all five scoring
/// factors resolved to concrete values (undefined inputs replaced by the
/// column median across the run).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightFactors {
    pub flight_number: String,
    pub scheduled_departure_date: Option<NaiveDate>,
    pub total_passengers: u32,
    pub total_seats: Option<u32>,
    pub ssr_count: f64,
    pub avg_load_factor: f64,
    pub avg_delay: f64,
    pub ground_buffer: f64,
    pub transfer_to_checked_ratio: f64,
}

impl FlightFactors {
    /// Raw (pre-normalization) value of the given scoring factor.
    pub fn factor_value(&self, factor: Factor) -> f64 {
        match factor {
            Factor::LoadFactor => self.avg_load_factor,
            Factor::SsrCount => self.ssr_count,
            Factor::DepartureDelay => self.avg_delay,
            Factor::GroundBuffer => self.ground_buffer,
            Factor::TransferRatio => self.transfer_to_checked_ratio,
        }
    }
}

/// The five min-max scaled factor columns for one flight, each in [0, 1].
/// The ground-buffer column is inverted: a tight turnaround scores high.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedFactors {
    pub load_norm: f64,
    pub ssr_norm: f64,
    pub delay_norm: f64,
    pub ground_norm: f64,
    pub bag_norm: f64,
}

impl NormalizedFactors {
    /// Normalized value of the given scoring factor.
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::LoadFactor => self.load_norm,
            Factor::SsrCount => self.ssr_norm,
            Factor::DepartureDelay => self.delay_norm,
            Factor::GroundBuffer => self.ground_norm,
            Factor::TransferRatio => self.bag_norm,
        }
    }
}

/// The scoring factors, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Factor {
    #[serde(rename = "load_norm")]
    LoadFactor,
    #[serde(rename = "ssr_norm")]
    SsrCount,
    #[serde(rename = "delay_norm")]
    DepartureDelay,
    #[serde(rename = "ground_norm")]
    GroundBuffer,
    #[serde(rename = "bag_norm")]
    TransferRatio,
}

/// Canonical factor order used for weight tables and output columns.
pub const FACTORS: [Factor; 5] = [
    Factor::LoadFactor,
    Factor::SsrCount,
    Factor::DepartureDelay,
    Factor::GroundBuffer,
    Factor::TransferRatio,
];

impl Factor {
    /// Column name of the normalized factor in the summary table.
    pub fn column_name(&self) -> &'static str {
        match self {
            Factor::LoadFactor => "load_norm",
            Factor::SsrCount => "ssr_norm",
            Factor::DepartureDelay => "delay_norm",
            Factor::GroundBuffer => "ground_norm",
            Factor::TransferRatio => "bag_norm",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

/// Difficulty tier of a flight within its operating day.
///
/// Ordering follows increasing difficulty:
///
/// ```
/// use fdd_rust::core::domain::DifficultyCategory;
///
/// assert!(DifficultyCategory::Easy < DifficultyCategory::Difficult);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DifficultyCategory {
    Easy,
    Medium,
    Difficult,
}

impl fmt::Display for DifficultyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyCategory::Easy => write!(f, "Easy"),
            DifficultyCategory::Medium => write!(f, "Medium"),
            DifficultyCategory::Difficult => write!(f, "Difficult"),
        }
    }
}

/// Final pipeline row: one flight on one date with raw aggregates, imputed
/// factors, normalized columns, composite score, rank, and tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightSummaryRecord {
    pub flight_number: String,
    pub scheduled_departure_date: Option<NaiveDate>,
    pub total_passengers: u32,
    pub total_seats: Option<u32>,
    pub ssr_count: f64,
    pub avg_load_factor: f64,
    pub avg_delay: f64,
    pub ground_buffer: f64,
    pub transfer_to_checked_ratio: f64,
    pub load_norm: f64,
    pub ssr_norm: f64,
    pub delay_norm: f64,
    pub ground_norm: f64,
    pub bag_norm: f64,
    pub difficulty_score: f64,
    /// Tie-averaged rank within the date partition; 1.0 is most difficult.
    pub difficulty_rank: f64,
    pub difficulty_category: DifficultyCategory,
}

/// One row of the factor-weight table: the absolute correlation of a
/// normalized factor with average delay, and its share of the total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorWeight {
    pub factor: Factor,
    pub correlation: f64,
    pub weight: f64,
}
