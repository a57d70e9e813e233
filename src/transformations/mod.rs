//! Record-level transformations feeding the per-flight aggregation.
//!
//! # Modules
//!
//! - [`filtering`]: restrict flight and bag records to one carrier
//! - [`merging`]: left-join passengers with remarks and flight attributes
//! - [`features`]: per-record derived fields (delay, load factor, SSR flag)

pub mod features;
pub mod filtering;
pub mod merging;

pub use features::derive_features;
pub use filtering::filter_by_carrier;
pub use merging::merge_passenger_records;
