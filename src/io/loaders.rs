//! Snapshot loading.
//!
//! Reads the four raw CSV exports from a data directory into one immutable
//! [`DataSnapshot`] and applies the single-carrier filter the pipeline
//! expects. File names follow the original export names but are
//! configurable through [`SnapshotFiles`].

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::domain::{BagRecord, FlightRecord, PassengerFlightRecord, RemarkRecord};
use crate::parsing::csv_parser;
use crate::transformations::filtering::filter_by_carrier;

/// The four input record sets for one pipeline run. Immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct DataSnapshot {
    pub passenger_flights: Vec<PassengerFlightRecord>,
    pub remarks: Vec<RemarkRecord>,
    pub flights: Vec<FlightRecord>,
    pub bags: Vec<BagRecord>,
}

/// Input file names inside the data directory.
#[derive(Debug, Clone)]
pub struct SnapshotFiles {
    pub passenger_flights: String,
    pub remarks: String,
    pub flights: String,
    pub bags: String,
}

impl Default for SnapshotFiles {
    fn default() -> Self {
        Self {
            passenger_flights: "PNR Flight Level Data.csv".to_string(),
            remarks: "PNR Remark Level Data.csv".to_string(),
            flights: "Flight Level Data.csv".to_string(),
            bags: "Bag+Level+Data.csv".to_string(),
        }
    }
}

/// Loads a [`DataSnapshot`] from a directory of CSV exports.
#[derive(Debug, Clone, Default)]
pub struct SnapshotLoader {
    carrier: Option<String>,
    files: SnapshotFiles,
}

impl SnapshotLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict flight and bag records to one operating carrier.
    pub fn with_carrier(mut self, carrier: impl Into<String>) -> Self {
        self.carrier = Some(carrier.into());
        self
    }

    /// Override the default input file names.
    pub fn with_files(mut self, files: SnapshotFiles) -> Self {
        self.files = files;
        self
    }

    /// Read all four record sets from `dir`, applying the carrier filter.
    ///
    /// A missing or structurally malformed file (absent required column) is
    /// a hard error; bad cell values inside the files coerce to missing.
    pub fn load_from_dir(&self, dir: &Path) -> Result<DataSnapshot> {
        let passenger_flights =
            csv_parser::parse_passenger_flights_csv(&dir.join(&self.files.passenger_flights))?;
        let remarks = csv_parser::parse_remarks_csv(&dir.join(&self.files.remarks))?;
        let mut flights = csv_parser::parse_flights_csv(&dir.join(&self.files.flights))?;
        let mut bags = csv_parser::parse_bags_csv(&dir.join(&self.files.bags))?;

        if let Some(carrier) = &self.carrier {
            let flights_before = flights.len();
            let bags_before = bags.len();
            flights = filter_by_carrier(flights, carrier);
            bags = filter_by_carrier(bags, carrier);
            log::info!(
                "carrier filter {}: {} of {} flight rows, {} of {} bag rows",
                carrier,
                flights.len(),
                flights_before,
                bags.len(),
                bags_before
            );
        }

        log::info!(
            "loaded snapshot from {}: {} passenger rows, {} remarks, {} flights, {} bags",
            dir.display(),
            passenger_flights.len(),
            remarks.len(),
            flights.len(),
            bags.len()
        );

        Ok(DataSnapshot {
            passenger_flights,
            remarks,
            flights,
            bags,
        })
    }
}

/// Convenience wrapper for the common load-and-filter case.
pub fn load_snapshot(dir: &Path, carrier: &str) -> Result<DataSnapshot> {
    SnapshotLoader::new()
        .with_carrier(carrier)
        .load_from_dir(dir)
        .with_context(|| format!("failed to load data snapshot from {}", dir.display()))
}
