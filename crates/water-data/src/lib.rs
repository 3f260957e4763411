//! Data layer for the water dashboard.
//!
//! Responsible for reading faucet usage CSV files, grouping readings by
//! faucet and by hour, and deriving the summary facts and chart descriptors
//! shown on the analysis screen.

pub mod aggregator;
pub mod analysis;
pub mod reader;
pub mod report;

pub use water_core as core;
