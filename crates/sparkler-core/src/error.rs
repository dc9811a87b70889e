//! Error types for Sparkler

use thiserror::Error;

/// The main error type for Sparkler operations
#[derive(Debug, Error)]
pub enum SparklerError {
    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Capture error: {0}")]
    CaptureError(String),

    #[error("Runtime error: {0}")]
    RuntimeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for Sparkler operations
pub type Result<T> = std::result::Result<T, SparklerError>;
