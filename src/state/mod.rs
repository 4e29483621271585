//! Application state management
//!
//! Panel lifecycle lives in the controller; display options and transient UI
//! state are kept apart so the controller stays free of egui types.

mod controller;
mod panel;
mod ui;
mod view;

pub use controller::{ChartPanelController, PanelEvent};
pub use panel::{Panel, PanelId, PanelPhase};
pub use ui::{LoadStatus, UiState};
pub use view::ViewState;

use std::sync::Arc;

use crate::chart::ChartSurface;
use crate::config::ViewerConfig;
use crate::data::Dataset;
use crate::error::Result;

/// Main application state container
#[derive(Debug, Default)]
pub struct AppState {
    /// Chart panels and the shared dataset
    pub panels: ChartPanelController,

    /// View and visualization state
    pub view: ViewState,

    /// UI interaction state
    pub ui: UiState,
}

impl AppState {
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            panels: ChartPanelController::new(),
            view: ViewState::from_config(config),
            ui: UiState::new(),
        }
    }

    /// Record the outcome of the startup load.
    ///
    /// A failed load is logged and reported once; panels stay uninitialized.
    pub fn on_load_finished(&mut self, result: Result<Arc<Dataset>>, surface: &mut dyn ChartSurface) {
        match result {
            Ok(dataset) => {
                let records = dataset.len();
                match self.panels.attach_dataset(dataset, surface) {
                    Ok(()) => self.ui.load_status = LoadStatus::Loaded { records },
                    Err(e) => {
                        tracing::warn!("{}", e);
                        self.ui.set_error(&e);
                    }
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load dataset");
                self.ui.load_status = LoadStatus::Failed;
                self.ui.set_error(&e);
            }
        }
    }

    /// Dispatch a UI event, surfacing failures in the status bar.
    ///
    /// A handled event clears the previous event error. Load failures stay
    /// visible for the whole session.
    pub fn handle_event(&mut self, event: PanelEvent, surface: &mut dyn ChartSurface) {
        match self.panels.dispatch(event, surface) {
            Ok(()) => {
                if self.ui.load_status != LoadStatus::Failed {
                    self.ui.clear_error();
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "panel event rejected");
                self.ui.set_error(&e);
            }
        }
    }

    /// Check if data is loaded
    pub fn has_data(&self) -> bool {
        self.panels.has_dataset()
    }
}
