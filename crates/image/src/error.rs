//! Error types for the image crate.

use thiserror::Error;

/// Result type alias for image operations.
pub type Result<T> = std::result::Result<T, ImageError>;

/// Errors that can occur during image operations.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Input bytes do not match any format this crate understands
    #[error("Unknown image format")]
    UnknownFormat,

    /// Input was empty or structurally invalid
    #[error("Invalid image data: {0}")]
    InvalidData(String),

    /// Encoding or decoding failed inside the codec
    #[error("Image codec error: {0}")]
    Codec(#[from] image::ImageError),
}
