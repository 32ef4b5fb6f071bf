//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image codec and preset (JSON) errors, and provides
//! semantic variants for argument validation and processing failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported input format: {format}. Only PNG and JPEG are accepted")]
    UnsupportedFormat { format: String },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Image dimensions must be greater than 0, got: {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Preset error: {0}")]
    Preset(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),
}

impl Error {
    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}
