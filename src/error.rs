//! Error types for pheno-plot
//!
//! Only dataset loading and programming mistakes (unknown panel ids) are
//! errors. Data-quality problems inside the CSV degrade to absent values.

use thiserror::Error;

use crate::state::PanelId;

/// Main error type for pheno-plot operations
#[derive(Error, Debug)]
pub enum ViewerError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// The dataset has no header line
    #[error("Dataset is empty or has no header row")]
    EmptyDataset,

    /// The background loader went away before reporting a result
    #[error("Dataset loader stopped before finishing")]
    LoaderDisconnected,

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Event addressed to a panel that was never created
    #[error("No chart panel with id {id}")]
    UnknownPanel { id: PanelId },

    /// A dataset was attached a second time
    #[error("Dataset has already been loaded")]
    DatasetAlreadyLoaded,
}

/// Result type alias for pheno-plot operations
pub type Result<T> = std::result::Result<T, ViewerError>;

/// UI-friendly error message formatting
impl ViewerError {
    /// Get a user-friendly error message suitable for the status bar
    pub fn user_message(&self) -> String {
        match self {
            ViewerError::FileIo(e) => format!("Could not read dataset: {}", e),
            ViewerError::EmptyDataset => "Dataset is empty".to_string(),
            ViewerError::LoaderDisconnected => "Dataset loading was interrupted".to_string(),
            ViewerError::Config(e) => format!("Config error: {}", e),
            ViewerError::UnknownPanel { id } => format!("Chart {} does not exist", id),
            ViewerError::DatasetAlreadyLoaded => "Dataset already loaded".to_string(),
        }
    }

    /// Get a short title for the error
    pub fn title(&self) -> &'static str {
        match self {
            ViewerError::FileIo(_) => "File Error",
            ViewerError::EmptyDataset => "Empty Dataset",
            ViewerError::LoaderDisconnected => "Load Interrupted",
            ViewerError::Config(_) => "Configuration Error",
            ViewerError::UnknownPanel { .. } => "Unknown Chart",
            ViewerError::DatasetAlreadyLoaded => "Already Loaded",
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ViewerError::UnknownPanel { id: PanelId(7) };
        assert_eq!(err.user_message(), "Chart 7 does not exist");
        assert_eq!(err.title(), "Unknown Chart");

        let err = ViewerError::EmptyDataset;
        assert_eq!(err.user_message(), "Dataset is empty");
        assert_eq!(err.title(), "Empty Dataset");
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ViewerError = io_err.into();
        assert!(matches!(err, ViewerError::FileIo(_)));
    }
}
