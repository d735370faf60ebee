//! Error types for text gizmo drawing

use crate::config::ConfigError;

/// Errors that can occur while placing or drawing text gizmos
#[derive(thiserror::Error, Debug)]
pub enum TextGizmoError {
    /// A draw was issued with no viewport bound to the gizmo context
    #[error("No active viewport: text gizmos can only be drawn while a camera is bound")]
    NoActiveViewport,

    /// A point could not be projected to or from screen space
    #[error("Degenerate projection: {0}")]
    DegenerateProjection(String),

    /// Configuration could not be loaded or saved
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias for text gizmo operations
pub type Result<T> = std::result::Result<T, TextGizmoError>;
