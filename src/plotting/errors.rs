use thiserror::Error;

use crate::interpolation::errors::InterpolationError;

/// Plotting errors.
///
/// ┌ Invalid sampling domain or sample count
/// ├ Invalid text canvas
/// ├ A plotted function failed at a sample point
/// └ Output failures (I/O, JSON encoding)
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid domain [{min_x}, {max_x}]: bounds must be finite and min_x < max_x")]
    InvalidDomain { min_x: f64, max_x: f64 },

    #[error("too few samples: got {got}, need at least 2")]
    TooFewSamples { got: usize },

    #[error("invalid canvas {width}x{height}: need at least 2x2")]
    InvalidCanvas { width: usize, height: usize },

    #[error("sampling `{name}` failed: {source}")]
    Sample { name: String, source: InterpolationError },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
