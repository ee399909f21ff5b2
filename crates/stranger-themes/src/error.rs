//! Error types for display surfaces.

use stranger_themes_core::CoreError;

use crate::cell::IndexPath;

/// Errors raised by surfaces, cells and content providers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// The content table has no entry at this position.
    #[error("No content configured at {path}")]
    PositionOutOfRange { path: IndexPath },

    /// A cell lacks a child widget its view-model needs.
    #[error("Cell has no {widget} to display this content")]
    MissingWidget { widget: &'static str },

    /// The surface is not subscribed to theme changes.
    #[error("Surface '{title}' is not active")]
    Inactive { title: &'static str },

    /// Error from the theme channel.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl SurfaceError {
    /// Create an out-of-range error.
    pub fn out_of_range(path: IndexPath) -> Self {
        Self::PositionOutOfRange { path }
    }
}

/// A specialized Result type for surface operations.
pub type Result<T> = std::result::Result<T, SurfaceError>;
