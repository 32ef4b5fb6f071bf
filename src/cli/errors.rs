use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Input is not a PNG or JPEG file: {path}")]
    UnsupportedInput { path: String },

    #[error(transparent)]
    Processing(#[from] pixelart::Error),
}
