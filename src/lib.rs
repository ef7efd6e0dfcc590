//! # RGB JPEG Server
//!
//! An HTTP service that synthesizes raster images on demand and returns them
//! as JPEG. Clients ask for either a solid-color rectangle or a rectangle of
//! per-pixel random noise.
//!
//! ## Features
//!
//! - **Two generators**: uniform color fill and independent random noise
//! - **Maximum quality**: every image is encoded at JPEG quality 100
//! - **Explicit failures**: bad parameters and encoder errors map to 4xx/5xx
//!   statuses with a JSON error body, never a partial image
//! - **Stateless**: nothing is cached or persisted between requests
//!
//! ## Architecture
//!
//! - [`synth`] - Parameter parsing, pixel generation and JPEG encoding
//! - [`server`] - Axum-based HTTP server and routes
//! - [`config`] - CLI and configuration types
//! - [`error`] - Error types shared across layers
//!
//! ## Example
//!
//! ```rust,no_run
//! use rgb_jpeg_server::{create_router, ImageService, RouterConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let router = create_router(ImageService::new(), RouterConfig::new());
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod server;
pub mod synth;

// Re-export commonly used types
pub use config::Config;
pub use error::{EncodeError, ImageError, ParamError, WriteError};
pub use server::{
    create_default_router, create_router, health_handler, random_image_handler,
    rgb_image_handler, AppState, ErrorResponse, HealthResponse, JpegBody, RouterConfig,
};
pub use synth::{
    fill_random, fill_uniform, ChannelPolicy, Color, Dimensions, FillStrategy, ImageKind,
    ImageResponse, ImageService, JpegImageEncoder, RequestParams, JPEG_QUALITY,
};
