//! Lenient calendar-date and timestamp coercion.
//!
//! Raw exports carry dates in a handful of formats and use empty cells or
//! placeholder strings for missing values. Coercion never fails: anything
//! unparsable becomes `None` and flows through the pipeline as a missing
//! value, failing date-keyed joins for that row instead of aborting the run.

use chrono::{NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y%m%d"];

const DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Placeholder strings that mean "no value" in the raw exports.
fn is_missing_sentinel(trimmed: &str) -> bool {
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("nat")
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("none")
}

/// Coerce a raw string to a calendar date.
///
/// Accepts plain dates in the known formats, or a timestamp whose date part
/// is taken. Unparsable input coerces to `None`.
pub fn coerce_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if is_missing_sentinel(trimmed) {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }

    coerce_datetime(trimmed).map(|dt| dt.date())
}

/// Coerce a raw string to a timestamp.
///
/// Accepts timestamps in the known formats, or a plain date which coerces to
/// midnight. Unparsable input coerces to `None`.
pub fn coerce_datetime(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if is_missing_sentinel(trimmed) {
        return None;
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt);
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}
