//! Image codec and probing helpers for wardrobe tools.
//!
//! This crate provides:
//! - PNG encoding and permissive decoding on top of the `image` crate
//! - Format sniffing from magic bytes
//! - PNG dimension extraction without a full decode

#![warn(missing_docs)]

mod codec;
mod error;
mod probe;

pub use codec::{decode_image, encode_png};
pub use error::{ImageError, Result};
pub use probe::{png_dimensions, sniff_format, SniffedFormat};
