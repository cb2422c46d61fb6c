//! Error types and handling.

use thiserror::Error;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration or reference data is unusable
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Excel export error
    #[error("Export error: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Window or graphics backend failed
    #[error("GUI error: {0}")]
    Gui(#[from] eframe::Error),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;
