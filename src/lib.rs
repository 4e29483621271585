//! Plant phenology viewer
//!
//! Loads a field-survey CSV of leaf, flower and fruit scores and draws one
//! chart per panel for the selected plant and year.

pub mod app;
pub mod chart;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod loader;
pub mod perf;
pub mod state;
pub mod ui;

pub use app::PhenoPlot;
pub use config::ViewerConfig;
pub use error::{Result, ViewerError};
