//! Parsers for the raw operational data exports.
//!
//! # Modules
//!
//! - [`dates`]: lenient calendar-date and timestamp coercion
//! - [`csv_parser`]: CSV parsers for the four record sets
//!
//! # Example
//!
//! ```no_run
//! use fdd_rust::parsing::csv_parser::parse_flights_csv;
//! use std::path::Path;
//!
//! let flights = parse_flights_csv(Path::new("Flight Level Data.csv"))
//!     .expect("failed to parse flight data");
//! ```

pub mod csv_parser;
pub mod dates;

#[cfg(test)]
mod csv_parser_tests;
