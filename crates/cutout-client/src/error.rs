//! Error types for the cutout client

use thiserror::Error;

/// Result type alias for cutout operations
pub type CutoutResult<T> = Result<T, CutoutError>;

/// Cutout client errors
#[derive(Error, Debug)]
pub enum CutoutError {
    /// Source image could not be serialized to PNG; no request was sent
    #[error("Image could not be encoded to PNG: {0}")]
    Encoding(#[source] wardrobe_image::ImageError),

    /// Network, TLS, timeout, or non-2xx status failure
    ///
    /// Non-2xx responses are folded in here deliberately: the service
    /// contract this client targets is a bare transport-error/no-error
    /// split, with no inspection of status codes or error payloads.
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request completed but no usable cutout came back
    /// (empty body, or bytes the image codec rejects)
    #[error("Service returned no usable cutout image")]
    NoCutoutReturned,

    /// Configuration error, surfaced at client construction
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing environment variable, surfaced at client construction
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

impl CutoutError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a missing env var error
    pub fn missing_env(var: impl Into<String>) -> Self {
        Self::MissingEnvVar(var.into())
    }

    /// Check if this error is worth retrying with the same input
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            // A fresh attempt may succeed after a transient network fault
            Self::Transport(_) => true,
            // Same image, same result
            Self::Encoding(_) => false,
            // Ambiguous by design: could be rate limiting, could be a
            // permanent rejection. The caller decides.
            Self::NoCutoutReturned => false,
            Self::Config(_) | Self::MissingEnvVar(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_not_retryable() {
        let err = CutoutError::Encoding(wardrobe_image::ImageError::InvalidData(
            "empty image data".into(),
        ));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_no_cutout_not_retryable() {
        assert!(!CutoutError::NoCutoutReturned.is_retryable());
    }

    #[test]
    fn test_config_errors_not_retryable() {
        assert!(!CutoutError::config("bad endpoint").is_retryable());
        assert!(!CutoutError::missing_env("REMOVE_BG_API_KEY").is_retryable());
    }
}
