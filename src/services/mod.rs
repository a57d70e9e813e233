//! Per-flight analytics: aggregation, baggage ratios, assembly, and the
//! scoring stages.
//!
//! # Modules
//!
//! - [`aggregation`]: merged passenger records → one row per flight per day
//! - [`baggage`]: bag records → transfer-to-checked ratio per flight
//! - [`summary`]: aggregate ⋈ ratio join with median imputation
//! - [`normalization`]: two-phase min-max scaling of the five factors
//! - [`weighting`]: correlation-derived factor weights
//! - [`scoring`]: composite score, per-day ranks and difficulty tiers

pub mod aggregation;
pub mod baggage;
pub mod normalization;
pub mod scoring;
pub mod summary;
pub mod weighting;


pub use aggregation::aggregate_flights;
pub use baggage::bag_ratios;
pub use normalization::{apply_ranges, normalize, FactorRanges};
pub use scoring::{composite_score, score_and_rank};
pub use summary::assemble_summaries;
pub use weighting::derive_weights;
