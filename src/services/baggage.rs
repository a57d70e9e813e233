//! Baggage ratio calculator.
//!
//! Buckets bags per flight by normalized type and derives the
//! transfer-to-checked ratio: connecting bags (transfer + hot transfer)
//! over origin-checked bags. The ratio is undefined for a flight with no
//! origin bags; a flight missing a bucket entirely counts zero for it.
//!
//! Bag records carry no date, so the ratio is keyed by flight number only;
//! a flight number operating on several days shares one ratio across them.

use std::collections::BTreeMap;

use crate::core::domain::{BagRatio, BagRecord, BagType};

#[derive(Default)]
struct BagCounts {
    origin: u32,
    transfer: u32,
    hot_transfer: u32,
}

/// One [`BagRatio`] per distinct flight number, ordered by flight number.
pub fn bag_ratios(bags: &[BagRecord]) -> Vec<BagRatio> {
    let mut counts: BTreeMap<&str, BagCounts> = BTreeMap::new();

    for bag in bags {
        let entry = counts.entry(bag.flight_number.as_str()).or_default();
        match bag.category() {
            BagType::Origin => entry.origin += 1,
            BagType::Transfer => entry.transfer += 1,
            BagType::HotTransfer => entry.hot_transfer += 1,
            BagType::Other => {}
        }
    }

    counts
        .into_iter()
        .map(|(flight_number, c)| {
            let checked = c.origin;
            let total_transfer = c.transfer + c.hot_transfer;
            let transfer_to_checked_ratio = if checked > 0 {
                Some(f64::from(total_transfer) / f64::from(checked))
            } else {
                None
            };
            BagRatio {
                flight_number: flight_number.to_string(),
                checked,
                total_transfer,
                transfer_to_checked_ratio,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(flight: &str, bag_type: &str) -> BagRecord {
        BagRecord {
            company_id: "UA".to_string(),
            flight_number: flight.to_string(),
            bag_type: bag_type.to_string(),
        }
    }

    #[test]
    fn counts_and_ratio_per_flight() {
        let bags = vec![
            bag("100", "Origin"),
            bag("100", "origin"),
            bag("100", "Transfer"),
            bag("100", "Hot Transfer"),
            bag("200", "Origin"),
        ];

        let ratios = bag_ratios(&bags);
        assert_eq!(ratios.len(), 2);

        assert_eq!(ratios[0].flight_number, "100");
        assert_eq!(ratios[0].checked, 2);
        assert_eq!(ratios[0].total_transfer, 2);
        assert_eq!(ratios[0].transfer_to_checked_ratio, Some(1.0));

        assert_eq!(ratios[1].checked, 1);
        assert_eq!(ratios[1].total_transfer, 0);
        assert_eq!(ratios[1].transfer_to_checked_ratio, Some(0.0));
    }

    #[test]
    fn ratio_undefined_without_origin_bags() {
        let bags = vec![
            bag("300", "transfer"),
            bag("300", "transfer"),
            bag("300", "hot transfer"),
        ];

        let ratios = bag_ratios(&bags);
        assert_eq!(ratios[0].checked, 0);
        assert_eq!(ratios[0].total_transfer, 3);
        assert_eq!(ratios[0].transfer_to_checked_ratio, None);
    }

    #[test]
    fn unrecognized_types_are_ignored() {
        let bags = vec![bag("400", "gate-checked"), bag("400", "origin")];
        let ratios = bag_ratios(&bags);
        assert_eq!(ratios[0].checked, 1);
        assert_eq!(ratios[0].total_transfer, 0);
    }

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(bag_ratios(&[]).is_empty());
    }
}
