//! Format sniffing and cheap dimension extraction.

use crate::{ImageError, Result};

/// Formats a wardrobe camera roll realistically produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SniffedFormat {
    /// PNG image
    Png,
    /// JPEG image
    Jpeg,
    /// WebP image
    WebP,
    /// HEIC/HEIF image (common iPhone capture format)
    Heic,
}

impl SniffedFormat {
    /// MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            SniffedFormat::Png => "image/png",
            SniffedFormat::Jpeg => "image/jpeg",
            SniffedFormat::WebP => "image/webp",
            SniffedFormat::Heic => "image/heic",
        }
    }
}

/// Sniff an image format from magic bytes.
pub fn sniff_format(data: &[u8]) -> Result<SniffedFormat> {
    if data.len() < 4 {
        return Err(ImageError::InvalidData(
            "not enough data for format sniffing".into(),
        ));
    }

    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Ok(SniffedFormat::Png);
    }

    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Ok(SniffedFormat::Jpeg);
    }

    if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        return Ok(SniffedFormat::WebP);
    }

    if data.len() >= 12 && &data[4..8] == b"ftyp" {
        let brand = &data[8..12];
        if brand == b"heic" || brand == b"heix" || brand == b"mif1" {
            return Ok(SniffedFormat::Heic);
        }
    }

    Err(ImageError::UnknownFormat)
}

/// Read PNG pixel dimensions from the IHDR chunk without decoding.
///
/// Returns `None` when the input is not a well-formed PNG header.
pub fn png_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    // 8-byte signature, then IHDR: 4 length + 4 type + 4 width + 4 height
    if data.len() < 24 || !data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        return None;
    }
    if &data[12..16] != b"IHDR" {
        return None;
    }

    let width = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
    let height = u32::from_be_bytes([data[20], data[21], data[22], data[23]]);
    Some((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode_png;
    use image::DynamicImage;

    #[test]
    fn test_sniff_png() {
        let data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];
        assert_eq!(sniff_format(&data).unwrap(), SniffedFormat::Png);
    }

    #[test]
    fn test_sniff_jpeg() {
        let data = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
        assert_eq!(sniff_format(&data).unwrap(), SniffedFormat::Jpeg);
    }

    #[test]
    fn test_sniff_webp() {
        let data = b"RIFF\x00\x00\x00\x00WEBP";
        assert_eq!(sniff_format(data).unwrap(), SniffedFormat::WebP);
    }

    #[test]
    fn test_sniff_heic() {
        let data = b"\x00\x00\x00\x18ftypheic\x00\x00\x00\x00";
        assert_eq!(sniff_format(data).unwrap(), SniffedFormat::Heic);
    }

    #[test]
    fn test_sniff_unknown() {
        assert!(matches!(
            sniff_format(&[0x00, 0x00, 0x00, 0x00]),
            Err(ImageError::UnknownFormat)
        ));
    }

    #[test]
    fn test_png_dimensions_match_encoder_output() {
        let bytes = encode_png(&DynamicImage::new_rgba8(100, 100)).unwrap();
        assert_eq!(png_dimensions(&bytes), Some((100, 100)));
    }

    #[test]
    fn test_png_dimensions_rejects_non_png() {
        assert_eq!(png_dimensions(b"RIFF\x00\x00\x00\x00WEBPxxxxxxxxxxxx"), None);
    }
}
