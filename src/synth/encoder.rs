//! JPEG encoder adapter.
//!
//! Serializes generated pixel buffers to JPEG at a fixed quality.
//!
//! # Design Decisions
//!
//! - **Maximum quality**: Every image is encoded at quality 100. Generated
//!   images are cheap to produce and clients expect exact colors.
//!
//! - **Alpha is dropped**: JPEG has no alpha channel and generated pixels are
//!   always opaque, so buffers are converted to RGB before encoding.
//!
//! - **Explicit size checks**: Empty buffers and buffers beyond the JPEG frame
//!   limit are rejected up front with a typed error instead of relying on the
//!   encoder's behavior for those cases.

use bytes::Bytes;
use image::buffer::ConvertBuffer;
use image::codecs::jpeg::JpegEncoder;
use image::{RgbImage, RgbaImage};

use crate::error::EncodeError;

/// JPEG quality used for every encoded image.
pub const JPEG_QUALITY: u8 = 100;

/// Largest width or height a baseline JPEG frame can describe.
pub const MAX_JPEG_DIMENSION: u32 = u16::MAX as u32;

/// MIME type of encoded images.
pub const JPEG_CONTENT_TYPE: &str = "image/jpeg";

// =============================================================================
// JPEG Encoder
// =============================================================================

/// Reject sizes a JPEG frame cannot hold.
///
/// # Errors
///
/// - [`EncodeError::EmptyImage`] if either dimension is zero
/// - [`EncodeError::TooLarge`] if either dimension exceeds 65535
pub fn check_dimensions(width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::EmptyImage { width, height });
    }

    if width > MAX_JPEG_DIMENSION || height > MAX_JPEG_DIMENSION {
        return Err(EncodeError::TooLarge {
            width,
            height,
            max: MAX_JPEG_DIMENSION,
        });
    }

    Ok(())
}

/// Encodes RGBA pixel buffers to JPEG.
#[derive(Debug, Clone, Copy)]
pub struct JpegImageEncoder {
    quality: u8,
}

impl Default for JpegImageEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JpegImageEncoder {
    /// Create an encoder at [`JPEG_QUALITY`].
    pub fn new() -> Self {
        Self {
            quality: JPEG_QUALITY,
        }
    }

    /// Quality this encoder writes at.
    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Encode `image` to JPEG.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::EmptyImage`] if either dimension is zero
    /// - [`EncodeError::TooLarge`] if either dimension exceeds 65535
    /// - [`EncodeError::Encoder`] if the underlying encoder fails
    pub fn encode(&self, image: &RgbaImage) -> Result<Bytes, EncodeError> {
        let (width, height) = image.dimensions();
        check_dimensions(width, height)?;

        let rgb: RgbImage = image.convert();

        let mut output = Vec::new();
        let mut encoder = JpegEncoder::new_with_quality(&mut output, self.quality);

        encoder
            .encode_image(&rgb)
            .map_err(|e| EncodeError::Encoder {
                message: e.to_string(),
            })?;

        Ok(Bytes::from(output))
    }
}

// =============================================================================
// Tests
// =============================================================================
