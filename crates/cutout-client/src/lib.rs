//! HTTP client for the remove.bg background-removal service
//!
//! This crate packages an image into a `multipart/form-data` request,
//! submits it to the cutout endpoint, and decodes the response back into
//! an image. Each call is independent: a fresh multipart boundary is
//! generated per request and no state is shared between calls, so the
//! client can be cloned and used concurrently without synchronization.
//!
//! # Example
//!
//! ```rust,no_run
//! use wardrobe_cutout_client::{ClientConfig, CutoutClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // API key comes from REMOVE_BG_API_KEY; absence fails here,
//!     // before any request is made.
//!     let client = CutoutClient::new()?;
//!
//!     let garment = image::open("jacket.jpg")?;
//!     let cutout = client.remove_background(&garment).await?;
//!     cutout.save("jacket-cutout.png")?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod multipart;

pub use client::CutoutClient;
pub use config::ClientConfig;
pub use error::{CutoutError, CutoutResult};
pub use multipart::{Boundary, MultipartBody};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::CutoutClient;
    pub use crate::config::ClientConfig;
    pub use crate::error::{CutoutError, CutoutResult};
    pub use crate::multipart::{Boundary, MultipartBody};
}
