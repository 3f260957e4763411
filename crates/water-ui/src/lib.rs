//! Terminal UI layer for the water dashboard.
//!
//! Provides themes, the header, chart and form components, one view per
//! screen, and the main application event loop built on top of [`ratatui`].

pub mod analyze_view;
pub mod app;
pub mod calculator_view;
pub mod components;
pub mod farmer_view;
pub mod home_view;
pub mod residential_view;
pub mod themes;

pub use water_core as core;
