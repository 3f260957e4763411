//! Core types shared by the water dashboard crates.
//!
//! Holds the usage data model, the error taxonomy, CLI settings, number
//! formatting, timestamp parsing, the usage calculator and the fixed
//! questionnaire option sets.

pub mod calculator;
pub mod error;
pub mod formatting;
pub mod models;
pub mod questionnaire;
pub mod settings;
pub mod time_utils;

pub use error::{DashboardError, Result};
