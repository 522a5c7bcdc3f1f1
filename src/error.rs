//! Error types for the filter engine and its I/O boundary.

use thiserror::Error;

/// Main error type for polybot_imgproc operations.
///
/// Filter failures (`Dimension`, `InvalidArgument`, `EmptyInput`,
/// `Precondition`) are raised before anything is committed, so the matrix an
/// engine owns is left untouched when one of them is returned.
#[derive(Error, Debug)]
pub enum Error {
    #[error("dimension error: {0}")]
    Dimension(String),

    #[error("invalid argument: {name} = {value} ({reason})")]
    InvalidArgument {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    #[error("precondition failed: {0}")]
    Precondition(String),

    #[error("unsupported filter: {0:?}")]
    UnsupportedDirective(String),

    #[error("no filter caption provided")]
    MissingDirective,

    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for polybot_imgproc operations
pub type Result<T> = std::result::Result<T, Error>;
