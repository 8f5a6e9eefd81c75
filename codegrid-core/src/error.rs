use std::path::PathBuf;
use thiserror::Error;

/// Fatal configuration errors raised before any layout work starts.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("line char limit {limit} is below the minimum of {minimum}")]
    LineCharLimitTooSmall { limit: usize, minimum: usize },

    #[error("cell metrics must be positive, got {width}x{height}")]
    NonPositiveCellMetric { width: f32, height: f32 },

    #[error("target aspect ratio must be a positive finite number, got {0}")]
    InvalidAspectRatio(f64),

    #[error("font size must be a positive finite number, got {0}")]
    InvalidFontSize(f32),
}

/// Failures while assembling the text corpus from a repository.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("not a directory: {}", .0.display())]
    InvalidRoot(PathBuf),

    #[error("listing files in {} failed: {reason}", .root.display())]
    ListingFailed { root: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
