//! Command implementations

pub mod check;
pub mod identify;

pub use check::{collect_checks, run_check};
pub use identify::{collect_identifications, read_sample, run_identify};
