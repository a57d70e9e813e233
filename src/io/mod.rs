//! High-level data loading utilities.
//!
//! Combines the CSV parsers with carrier filtering into a single loader
//! that produces the immutable [`loaders::DataSnapshot`] a pipeline run
//! consumes.
//!
//! # Example
//!
//! ```no_run
//! use fdd_rust::io::loaders::load_snapshot;
//! use std::path::Path;
//!
//! let snapshot = load_snapshot(Path::new("casestudy_data"), "UA")
//!     .expect("failed to load snapshot");
//! println!("{} flights", snapshot.flights.len());
//! ```

pub mod loaders;


pub use loaders::{load_snapshot, DataSnapshot, SnapshotFiles, SnapshotLoader};
