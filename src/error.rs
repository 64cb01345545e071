//! Error types for the clipper.
//!
//! Geometry, layout and gesture handling never fail; everything there is
//! clamped. Errors come from configuration and from establishing the size
//! of the drawing surface.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipperError {
    /// IO error while reading a config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for [`crate::config::ClipperConfig`]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid color {0:?}, expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The drawing surface must be finite and large enough to hold a frame
    /// of at least the minimum spacing
    #[error("Invalid bounds: {width}x{height}")]
    InvalidBounds { width: f32, height: f32 },
}

/// Result type alias for clipper operations
pub type ClipperResult<T> = Result<T, ClipperError>;
