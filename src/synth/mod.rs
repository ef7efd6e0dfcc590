//! Image synthesis layer.
//!
//! This module turns request parameters into encoded JPEG images.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              HTTP Handlers              │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │              Image Service              │
//! │  ┌──────────────┐  ┌─────────────────┐  │
//! │  │  Parameter   │  │  Fill strategy  │  │
//! │  │  parsing     │  │  (random or     │  │
//! │  │              │  │   uniform)      │  │
//! │  └──────────────┘  └─────────────────┘  │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │        JPEG Encoder (quality 100)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`ImageService`]: Entry point for image requests, runs the full pipeline
//! - [`RequestParams`]: Raw query parameters of one request
//! - [`FillStrategy`]: Random or uniform pixel generation
//! - [`JpegImageEncoder`]: Encodes RGBA buffers to JPEG
//!
//! # Example
//!
//! ```
//! use rgb_jpeg_server::synth::{ImageKind, ImageService, RequestParams};
//!
//! let service = ImageService::new();
//! let params: RequestParams = [
//!     ("width", "4"),
//!     ("height", "4"),
//!     ("red", "255"),
//!     ("green", "0"),
//!     ("blue", "0"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let image = service.create(ImageKind::Rgb, &params).unwrap();
//! assert_eq!(&image.data[..2], &[0xFF, 0xD8]);
//! ```

mod encoder;
mod generator;
mod params;
mod service;

pub use encoder::{
    check_dimensions, JpegImageEncoder, JPEG_CONTENT_TYPE, JPEG_QUALITY, MAX_JPEG_DIMENSION,
};
pub use generator::{fill_random, fill_uniform, FillStrategy, OPAQUE};
pub use params::{
    parse_param, read_dimension_params, read_rgb_params, ChannelPolicy, Color, Dimensions,
    RequestParams,
};
pub use service::{ImageKind, ImageResponse, ImageService, DEFAULT_MAX_PIXELS};
