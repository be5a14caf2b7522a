//! PNG encoding and permissive decoding.

use crate::{ImageError, Result};
use image::{DynamicImage, ImageOutputFormat};
use std::io::Cursor;

/// Encode an in-memory image to PNG bytes.
///
/// Fails if the codec rejects the pixel buffer (for example a
/// zero-dimension image).
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    image.write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)?;
    Ok(buf)
}

/// Decode arbitrary bytes into an in-memory image.
///
/// Format is guessed from the content, so this accepts any format the
/// `image` crate was built with. Empty input is rejected up front.
pub fn decode_image(data: &[u8]) -> Result<DynamicImage> {
    if data.is_empty() {
        return Err(ImageError::InvalidData("empty image data".into()));
    }
    Ok(image::load_from_memory(data)?)
}
