//! Validated texture payloads.
//!
//! Every texture, whether read from disk or generated remotely, passes
//! through [`TextureImage::from_bytes`] before it can reach a design, so a
//! pattern fill never holds bytes a renderer cannot decode.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::GenericImageView;

use crate::error::{TextureError, TextureResult};

/// Image container formats accepted for pattern fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    /// PNG with alpha support.
    Png,
    /// JPEG (no alpha).
    Jpeg,
    /// `WebP` (alpha support).
    WebP,
}

impl TextureFormat {
    /// Detect format from magic bytes.
    #[must_use]
    pub fn from_magic_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < 4 {
            return None;
        }

        // PNG: 89 50 4E 47
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Some(Self::Png);
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }

        // WebP: RIFF....WEBP
        if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
            return Some(Self::WebP);
        }

        None
    }

    /// MIME type used when embedding into a data URI.
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::WebP => "image/webp",
        }
    }
}

/// An encoded image that decoded successfully, ready to become a pattern.
///
/// Holds the original encoded bytes rather than decoded pixels; the data URI
/// embeds them unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureImage {
    bytes: Vec<u8>,
    format: TextureFormat,
    width: u32,
    height: u32,
}

impl TextureImage {
    /// Validate raw bytes as a texture.
    ///
    /// # Errors
    ///
    /// Returns [`TextureError::Decode`] when the payload is not PNG, JPEG,
    /// or `WebP`, or when the pixel data fails to decode.
    pub fn from_bytes(bytes: Vec<u8>) -> TextureResult<Self> {
        let format = TextureFormat::from_magic_bytes(&bytes)
            .ok_or_else(|| TextureError::Decode("unrecognized container format".to_string()))?;

        let decoded = image::load_from_memory(&bytes)
            .map_err(|e| TextureError::Decode(format!("failed to decode image: {e}")))?;
        let (width, height) = decoded.dimensions();

        Ok(Self {
            bytes,
            format,
            width,
            height,
        })
    }

    /// Parse a base64 `data:` URI back into a texture.
    ///
    /// Both providers emit base64 URIs, so percent-encoded payloads are
    /// rejected rather than decoded.
    ///
    /// # Errors
    ///
    /// Returns [`TextureError::Decode`] when the URI is malformed, is not
    /// base64 encoded, or does not hold a supported image.
    pub fn from_data_uri(uri: &str) -> TextureResult<Self> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| TextureError::Decode("not a data URI".to_string()))?;

        let (metadata, encoded) = rest
            .split_once(',')
            .ok_or_else(|| TextureError::Decode("data URI missing comma".to_string()))?;

        if !metadata.contains(";base64") {
            return Err(TextureError::Decode(
                "data URI is not base64 encoded".to_string(),
            ));
        }

        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| TextureError::Decode(format!("failed to decode base64: {e}")))?;

        Self::from_bytes(bytes)
    }

    /// Raw encoded bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Container format sniffed from the magic bytes.
    #[must_use]
    pub fn format(&self) -> TextureFormat {
        self.format
    }

    /// Pixel dimensions as `(width, height)`.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Encode as a base64 `data:` URI, the payload a pattern fill stores.
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.format.mime_type(),
            STANDARD.encode(&self.bytes)
        )
    }
}
