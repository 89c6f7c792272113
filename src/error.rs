//! Editor error types

use thiserror::Error;

/// Errors surfaced by the editor and its host
///
/// None of these are fatal to drawing: the host logs them and keeps running.
#[derive(Error, Debug)]
pub enum EditorError {
    /// Vertex store already holds its maximum number of points
    #[error("vertex store is full ({capacity} points)")]
    CapacityExceeded { capacity: usize },

    /// Failed to read a configuration file
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON for `Config`
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    /// Resolution argument not in `WxH` form
    #[error("invalid resolution '{0}', expected WxH (e.g. 800x600)")]
    InvalidResolution(String),

    /// Window or renderer failure reported by the display backend
    #[error("display error: {0}")]
    Display(String),
}

/// Result type for editor operations
pub type Result<T> = std::result::Result<T, EditorError>;
