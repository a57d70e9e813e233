//! Core domain types shared by every pipeline stage.

pub mod domain;

pub use domain::*;
