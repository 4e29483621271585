//! UI interaction state

use crate::error::ViewerError;

/// Where the startup load stands, shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded { records: usize },
    Failed,
}

/// Transient UI state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Startup dataset progress
    pub load_status: LoadStatus,

    /// Error message to display in the status bar
    pub error_message: Option<String>,
}

impl UiState {
    /// Create a new UiState with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an error in the status bar as "title: message"
    pub fn set_error(&mut self, error: &ViewerError) {
        self.error_message = Some(format!("{}: {}", error.title(), error.user_message()));
    }

    /// Clear the current error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn is_loading(&self) -> bool {
        self.load_status == LoadStatus::Loading
    }
}
