//! Main cutout client implementation

use crate::config::ClientConfig;
use crate::error::{CutoutError, CutoutResult};
use crate::multipart::MultipartBody;
use image::DynamicImage;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// API key header the cutout service authenticates with
const API_KEY_HEADER: &str = "X-Api-Key";

/// Client for the remove.bg background-removal service
///
/// Wraps `reqwest` with the service's wire contract:
/// - single `image_file` multipart field, PNG-encoded
/// - `X-Api-Key` authentication header
/// - raw PNG bytes back on success
///
/// The client is cheap to clone and safe to use from concurrent tasks;
/// requests share nothing but the connection pool.
#[derive(Clone)]
pub struct CutoutClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl CutoutClient {
    /// Create a new client with configuration from the environment
    ///
    /// Fails fast when `REMOVE_BG_API_KEY` is unset: a missing key is a
    /// startup precondition, not a per-request error.
    pub fn new() -> CutoutResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> CutoutResult<Self> {
        config.validate()?;

        let inner = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(CutoutError::Transport)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Remove the background from an image
    ///
    /// Encodes the image to PNG, submits it to the cutout service, and
    /// decodes the returned cutout. The future resolves exactly once with
    /// either the cutout or a classified error; dropping it abandons the
    /// in-flight request.
    #[instrument(skip(self, image))]
    pub async fn remove_background(&self, image: &DynamicImage) -> CutoutResult<DynamicImage> {
        let png = wardrobe_image::encode_png(image).map_err(CutoutError::Encoding)?;
        self.remove_background_from_png(&png).await
    }

    /// Remove the background from already PNG-encoded bytes
    ///
    /// Skips the encoding step for callers that hold PNG bytes directly.
    #[instrument(skip(self, png_bytes), fields(payload_len = png_bytes.len()))]
    pub async fn remove_background_from_png(&self, png_bytes: &[u8]) -> CutoutResult<DynamicImage> {
        let body = MultipartBody::new(png_bytes);
        debug!(
            boundary = %body.boundary(),
            body_len = body.as_bytes().len(),
            "Submitting cutout request"
        );

        let response = self
            .inner
            .post(&self.config.endpoint)
            .header(CONTENT_TYPE, body.content_type())
            .header(API_KEY_HEADER, &self.config.api_key)
            .body(body.into_bytes())
            .send()
            .await?
            .error_for_status()?;

        let bytes = response.bytes().await?;
        decode_cutout(&bytes).map_err(|e| {
            warn!(body_len = bytes.len(), "Cutout response was not a usable image");
            e
        })
    }
}

/// Classify a transport-successful response body
///
/// Pure function of the body bytes: an empty or undecodable body is
/// `NoCutoutReturned`, anything the image codec accepts is a success.
/// Transport failures never reach this point; they are surfaced as
/// `Transport` by the caller.
pub fn decode_cutout(body: &[u8]) -> CutoutResult<DynamicImage> {
    if body.is_empty() {
        return Err(CutoutError::NoCutoutReturned);
    }
    wardrobe_image::decode_image(body).map_err(|_| CutoutError::NoCutoutReturned)
}
