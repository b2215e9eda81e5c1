//! Error types for drag setup operations
//!
//! The drag path itself never fails: misses degrade to no-ops. Errors only
//! come from configuration loading and surface registration.

use crate::session::SurfaceId;
use thiserror::Error;

/// Errors that can occur while configuring drag and drop
#[derive(Error, Debug)]
pub enum DragError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration value out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Surface cannot take part in drag and drop
    #[error("Invalid surface: {0}")]
    InvalidSurface(String),

    /// No surface registered under this id
    #[error("Unknown surface {0:?}")]
    UnknownSurface(SurfaceId),

    /// Operation not allowed while a drag is in flight
    #[error("A drag session is active")]
    SessionActive,
}

/// Result type alias for drag setup operations
pub type DragResult<T> = Result<T, DragError>;
