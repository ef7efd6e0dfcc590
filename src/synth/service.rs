//! Image service - orchestrates image synthesis.
//!
//! The image service ties together parameter parsing, pixel generation, and
//! JPEG encoding. One call handles one request:
//!
//! 1. Read the parameters the endpoint requires
//! 2. Enforce the configured pixel budget and the JPEG frame size
//! 3. Render the pixel buffer with the endpoint's fill strategy
//! 4. Encode the buffer to JPEG
//!
//! Every failure ends the request; nothing is retried.

use bytes::Bytes;
use tracing::{debug, warn};

use crate::error::ImageError;

use super::encoder::{check_dimensions, JpegImageEncoder};
use super::generator::FillStrategy;
use super::params::{
    read_dimension_params, read_rgb_params, ChannelPolicy, Dimensions, RequestParams,
};

/// Default maximum number of pixels per image (64 megapixels).
pub const DEFAULT_MAX_PIXELS: u64 = 64 * 1024 * 1024;

// =============================================================================
// Request and Response Types
// =============================================================================

/// Which endpoint a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// Per-pixel random colors, needs `width` and `height`
    Random,

    /// Solid color, needs `width`, `height`, `red`, `green` and `blue`
    Rgb,
}

/// A successfully generated image.
#[derive(Debug, Clone)]
pub struct ImageResponse {
    /// Encoded JPEG data
    pub data: Bytes,

    /// Size of the image in pixels
    pub dimensions: Dimensions,

    /// Strategy that produced the pixels
    pub strategy: FillStrategy,
}

// =============================================================================
// Image Service
// =============================================================================

/// Service for synthesizing JPEG images from request parameters.
///
/// The service holds no per-request state and can be shared freely.
#[derive(Debug, Clone)]
pub struct ImageService {
    encoder: JpegImageEncoder,
    channel_policy: ChannelPolicy,
    max_pixels: u64,
}

impl Default for ImageService {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageService {
    /// Create a service with default limits and channel truncation.
    pub fn new() -> Self {
        Self {
            encoder: JpegImageEncoder::new(),
            channel_policy: ChannelPolicy::default(),
            max_pixels: DEFAULT_MAX_PIXELS,
        }
    }

    /// Set how out-of-range color channels are handled.
    pub fn with_channel_policy(mut self, policy: ChannelPolicy) -> Self {
        self.channel_policy = policy;
        self
    }

    /// Set the maximum number of pixels per image.
    pub fn with_max_pixels(mut self, max_pixels: u64) -> Self {
        self.max_pixels = max_pixels;
        self
    }

    pub fn channel_policy(&self) -> ChannelPolicy {
        self.channel_policy
    }

    pub fn max_pixels(&self) -> u64 {
        self.max_pixels
    }

    /// Read the parameters for `kind` and decide how to fill the image.
    ///
    /// Every size check happens here, before any pixel buffer is allocated.
    pub fn plan(
        &self,
        kind: ImageKind,
        params: &RequestParams,
    ) -> Result<(Dimensions, FillStrategy), ImageError> {
        let (dimensions, strategy) = match kind {
            ImageKind::Random => (read_dimension_params(params)?, FillStrategy::Random),
            ImageKind::Rgb => {
                let (dimensions, color) = read_rgb_params(params, self.channel_policy)?;
                (dimensions, FillStrategy::Uniform(color))
            }
        };

        dimensions.check_limit(self.max_pixels)?;
        check_dimensions(dimensions.width, dimensions.height)?;

        Ok((dimensions, strategy))
    }

    /// Generate and encode an image for a request.
    pub fn create(
        &self,
        kind: ImageKind,
        params: &RequestParams,
    ) -> Result<ImageResponse, ImageError> {
        let (dimensions, strategy) = self.plan(kind, params).map_err(|e| {
            warn!(error = %e, "Could not create image");
            e
        })?;

        let pixels = strategy.render(dimensions);

        let data = self.encoder.encode(&pixels).map_err(|e| {
            warn!(error = %e, "Unable to encode image");
            e
        })?;

        debug!(
            strategy = strategy.name(),
            width = dimensions.width,
            height = dimensions.height,
            bytes = data.len(),
            "Image created"
        );

        Ok(ImageResponse {
            data,
            dimensions,
            strategy,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
