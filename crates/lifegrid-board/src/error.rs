//! Error types for the `lifegrid-board` crate.
//!
//! Board operations never fail under normal use. [`BoardError`] exists for
//! construction-time validation, the explicit bounds-checked setter, and to
//! carry a [`RenderError`] raised by an observer back to the caller
//! unmodified.

use lifegrid_types::Coord;

/// Failure reported by a render callback.
///
/// The board does not inspect, retry, or suppress it; it is returned from
/// whichever mutation triggered the notification.
#[derive(Debug, thiserror::Error)]
#[error("render callback failed: {message}")]
pub struct RenderError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl RenderError {
    /// Create a render error with a message and no underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create a render error wrapping an underlying cause.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The human-readable failure description.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors that can occur during board operations.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// A dense grid was requested with a zero or oversized dimension, or
    /// with more cells than a board may allocate.
    #[error(
        "invalid grid dimensions {width}x{height}: each side must be in 1..={max} \
         and the grid at most {max_cells} cells"
    )]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// Largest accepted side length.
        max: u32,
        /// Largest accepted cell count.
        max_cells: usize,
    },

    /// A random seed density outside `[0, 1]` (or NaN) was requested.
    #[error("seed density {density} is outside [0, 1]")]
    InvalidDensity {
        /// The rejected density.
        density: f64,
    },

    /// A bounds-checked write targeted a cell outside a dense grid.
    #[error("cell {coord} is outside the {width}x{height} grid")]
    OutOfBounds {
        /// The rejected coordinate.
        coord: Coord,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },

    /// The render callback failed.
    #[error("render error: {source}")]
    Render {
        /// The observer's error, unmodified.
        #[from]
        source: RenderError,
    },
}
