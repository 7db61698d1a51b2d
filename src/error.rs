// src/error.rs
//! Error types for map generation and for the rendering boundary.

use thiserror::Error;

/// Errors returned by [`crate::generator::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapGenError {
    /// Rejected before any work is done.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Growth left an open cell with no open neighbours on a multi-cell map.
    #[error("open cell ({x}, {y}) has no open neighbours on a map with {open_cells} open cells")]
    ClassificationError {
        x: usize,
        y: usize,
        open_cells: usize,
    },
}

impl MapGenError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        MapGenError::InvalidConfig {
            reason: reason.into(),
        }
    }
}

/// Errors raised while preparing a finished map for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("tile set has {found} visuals, {required} are needed")]
    MissingTiles { required: usize, found: usize },

    #[error("tile visual '{name}' has no horizontal extent to derive a scale from")]
    EmptyFootprint { name: String },
}
