//! Multipart request construction
//!
//! The cutout service expects a `multipart/form-data` body with a single
//! `image_file` part carrying PNG bytes. The envelope is assembled by hand
//! because its layout is part of the wire contract, byte for byte:
//!
//! ```text
//! --{boundary}\r\n
//! Content-Disposition: form-data; name="image_file"; filename="image.png"\r\n
//! Content-Type: image/png\r\n
//! \r\n
//! <png bytes>
//! \r\n--{boundary}--\r\n
//! ```

use uuid::Uuid;

/// Form field name the service expects for the uploaded image
const FIELD_NAME: &str = "image_file";

/// Filename reported for the uploaded part
const FILE_NAME: &str = "image.png";

/// A per-request multipart boundary token.
///
/// Generated fresh for every request from UUID-v4 entropy. A fixed
/// boundary would be a correctness bug if the image content ever
/// contained that exact byte sequence; a random token makes a collision
/// statistically negligible. The body is not scanned for collisions —
/// that residual risk is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary(String);

impl Boundary {
    /// Generate a fresh boundary token.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("wardrobe-{}", Uuid::new_v4().simple()))
    }

    /// The token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fully assembled multipart body and its boundary.
///
/// Built fresh per call and consumed by the transport; never reused or
/// mutated after construction.
#[derive(Debug, Clone)]
pub struct MultipartBody {
    boundary: Boundary,
    bytes: Vec<u8>,
}

impl MultipartBody {
    /// Wrap PNG bytes in a single-field multipart envelope under a fresh
    /// boundary.
    ///
    /// Pure transformation: no I/O, no side effects.
    #[must_use]
    pub fn new(png_bytes: &[u8]) -> Self {
        Self::with_boundary(png_bytes, Boundary::generate())
    }

    /// Assemble the envelope under a caller-supplied boundary.
    #[must_use]
    pub fn with_boundary(png_bytes: &[u8], boundary: Boundary) -> Self {
        let header = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"{FIELD_NAME}\"; filename=\"{FILE_NAME}\"\r\n\
             Content-Type: image/png\r\n\r\n"
        );
        let trailer = format!("\r\n--{boundary}--\r\n");

        let mut bytes = Vec::with_capacity(header.len() + png_bytes.len() + trailer.len());
        bytes.extend_from_slice(header.as_bytes());
        bytes.extend_from_slice(png_bytes);
        bytes.extend_from_slice(trailer.as_bytes());

        Self { boundary, bytes }
    }

    /// The `Content-Type` header value matching this body.
    #[must_use]
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// The boundary this body was assembled under.
    #[must_use]
    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    /// The assembled body bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the body, yielding the assembled bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subslice_position(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack
            .windows(needle.len())
            .position(|window| window == needle)
    }

    #[test]
    fn test_envelope_prefix_and_suffix() {
        let body = MultipartBody::new(b"fake png bytes");
        let boundary = body.boundary().as_str().to_string();

        let prefix = format!("--{boundary}\r\n");
        let suffix = format!("\r\n--{boundary}--\r\n");

        assert!(body.as_bytes().starts_with(prefix.as_bytes()));
        assert!(body.as_bytes().ends_with(suffix.as_bytes()));
    }

    #[test]
    fn test_envelope_header_lines() {
        let body = MultipartBody::new(b"fake png bytes");

        let expected =
            b"Content-Disposition: form-data; name=\"image_file\"; filename=\"image.png\"\r\n\
              Content-Type: image/png\r\n\r\n";
        assert!(subslice_position(body.as_bytes(), expected).is_some());
    }

    #[test]
    fn test_payload_round_trip() {
        // Payload with bytes that look like envelope syntax
        let payload: Vec<u8> = (0u8..=255).chain(*b"\r\n--tricky--\r\n").collect();
        let body = MultipartBody::new(&payload);
        let boundary = body.boundary().as_str().to_string();

        let headers_end =
            subslice_position(body.as_bytes(), b"\r\n\r\n").expect("headers terminator") + 4;
        let trailer = format!("\r\n--{boundary}--\r\n");
        let payload_end = body.as_bytes().len() - trailer.len();

        assert_eq!(&body.as_bytes()[headers_end..payload_end], &payload[..]);
    }

    #[test]
    fn test_boundary_fresh_per_body() {
        let a = MultipartBody::new(b"same bytes");
        let b = MultipartBody::new(b"same bytes");
        assert_ne!(a.boundary(), b.boundary());
    }

    #[test]
    fn test_content_type_carries_boundary() {
        let body = MultipartBody::new(b"png");
        let expected = format!("multipart/form-data; boundary={}", body.boundary());
        assert_eq!(body.content_type(), expected);
    }

    #[test]
    fn test_empty_payload_still_well_formed() {
        let body = MultipartBody::new(b"");
        let boundary = body.boundary().as_str().to_string();
        assert!(body
            .as_bytes()
            .ends_with(format!("\r\n--{boundary}--\r\n").as_bytes()));
    }
}
