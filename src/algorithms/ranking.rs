//! Tie-averaged ranking and tercile bucketing.
//!
//! Ranking follows the statistical convention: descending by score, rank 1
//! for the largest value, ties sharing the average of the positions they
//! occupy. Bucketing is an explicit cut over rank values so that every
//! implementation of the tiers agrees on boundary ranks.

use crate::core::domain::DifficultyCategory;

/// Descending, tie-averaged ranks for a slice of scores.
///
/// The largest score receives rank 1.0; equal scores share the average of
/// the positions they span.
///
/// ```
/// use fdd_rust::algorithms::ranking::average_ranks_desc;
///
/// assert_eq!(average_ranks_desc(&[0.9, 0.5, 0.1]), vec![1.0, 2.0, 3.0]);
/// assert_eq!(average_ranks_desc(&[0.7, 0.7, 0.1]), vec![1.5, 1.5, 3.0]);
/// ```
pub fn average_ranks_desc(scores: &[f64]) -> Vec<f64> {
    let n = scores.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut ranks = vec![0.0; n];
    let mut position = 0;
    while position < n {
        let mut run_end = position + 1;
        while run_end < n && scores[order[run_end]] == scores[order[position]] {
            run_end += 1;
        }
        // Positions are 1-based; a run of ties spans [position+1, run_end].
        let averaged = (position + 1 + run_end) as f64 / 2.0;
        for &idx in &order[position..run_end] {
            ranks[idx] = averaged;
        }
        position = run_end;
    }

    ranks
}

/// Tier for a rank within a partition of `n` flights.
///
/// Cut-points are ceilings of the terciles: ranks up to ⌈n/3⌉ are
/// Difficult, ranks up to ⌈2n/3⌉ are Medium, the rest Easy. For distinct
/// scores this yields per-partition tier sizes differing by at most one.
pub fn tercile_bucket(rank: f64, n: usize) -> DifficultyCategory {
    let difficult_cut = (n as f64 / 3.0).ceil();
    let medium_cut = (2.0 * n as f64 / 3.0).ceil();
    if rank <= difficult_cut {
        DifficultyCategory::Difficult
    } else if rank <= medium_cut {
        DifficultyCategory::Medium
    } else {
        DifficultyCategory::Easy
    }
}
