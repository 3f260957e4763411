//! Runtime layer for the water dashboard.
//!
//! Owns everything between the data pipeline and the UI: the text-generation
//! seam, advice prompts, screen navigation and the analysis session.

pub mod advisor;
pub mod generator;
pub mod navigation;
pub mod prompts;
pub mod session;

pub use water_core as core;
pub use water_data as data;
