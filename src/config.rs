//! Run configuration file support.
//!
//! A scoring run is described by a small TOML file (`difficulty.toml`)
//! naming the data directory, the operating carrier, the input file names,
//! and where to write the result artifacts. Every field has a default so a
//! bare invocation works against the conventional layout.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::io::loaders::SnapshotFiles;

/// Full run configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub files: FileSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

/// Where the raw exports live and which carrier to score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_carrier")]
    pub carrier: String,
}

/// Input file names inside the data directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSettings {
    #[serde(default = "default_passenger_flights_file")]
    pub passenger_flights: String,
    #[serde(default = "default_remarks_file")]
    pub remarks: String,
    #[serde(default = "default_flights_file")]
    pub flights: String,
    #[serde(default = "default_bags_file")]
    pub bags: String,
}

/// Where to write the result artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_summary_file")]
    pub summary_file: String,
    #[serde(default = "default_weights_file")]
    pub weights_file: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("casestudy_data")
}

fn default_carrier() -> String {
    "UA".to_string()
}

fn default_passenger_flights_file() -> String {
    "PNR Flight Level Data.csv".to_string()
}

fn default_remarks_file() -> String {
    "PNR Remark Level Data.csv".to_string()
}

fn default_flights_file() -> String {
    "Flight Level Data.csv".to_string()
}

fn default_bags_file() -> String {
    "Bag+Level+Data.csv".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_summary_file() -> String {
    "flight_summary.json".to_string()
}

fn default_weights_file() -> String {
    "factor_weights.json".to_string()
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            carrier: default_carrier(),
        }
    }
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            passenger_flights: default_passenger_flights_file(),
            remarks: default_remarks_file(),
            flights: default_flights_file(),
            bags: default_bags_file(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            summary_file: default_summary_file(),
            weights_file: default_weights_file(),
        }
    }
}

impl RunConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("failed to read config at {}", path.as_ref().display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config at {}", path.as_ref().display()))
    }

    /// Load configuration from the first of the standard locations that
    /// exists, falling back to the full default configuration.
    pub fn from_default_location() -> Result<Self> {
        let search_paths = [
            PathBuf::from("difficulty.toml"),
            PathBuf::from("config/difficulty.toml"),
            PathBuf::from("../difficulty.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("using config at {}", path.display());
                return Self::from_file(&path);
            }
        }

        log::info!("no difficulty.toml found; using defaults");
        Ok(Self::default())
    }

    /// The input file names as the loader expects them.
    pub fn snapshot_files(&self) -> SnapshotFiles {
        SnapshotFiles {
            passenger_flights: self.files.passenger_flights.clone(),
            remarks: self.files.remarks.clone(),
            flights: self.files.flights.clone(),
            bags: self.files.bags.clone(),
        }
    }
}
