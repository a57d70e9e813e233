//! Carrier filtering for the raw record sets.
//!
//! The scoring pipeline operates on a single carrier's flights; flight and
//! bag records are restricted to that carrier before the record merger runs.

use crate::core::domain::{BagRecord, FlightRecord};

/// Anything tagged with an operating carrier code.
pub trait HasCarrier {
    fn company_id(&self) -> &str;
}

impl HasCarrier for FlightRecord {
    fn company_id(&self) -> &str {
        &self.company_id
    }
}

impl HasCarrier for BagRecord {
    fn company_id(&self) -> &str {
        &self.company_id
    }
}

/// Retain only records operated by the given carrier (exact match on the
/// company code).
pub fn filter_by_carrier<T: HasCarrier>(records: Vec<T>, carrier: &str) -> Vec<T> {
    records
        .into_iter()
        .filter(|r| r.company_id() == carrier)
        .collect()
}
