//! HTTP server layer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │        GET /create/rgb/rnd           GET /create/rgb            │
//! │                                                                 │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────────┐  │
//! │  │  handlers   │  │    body     │  │        routes           │  │
//! │  │ (requests)  │  │ (JPEG data) │  │  (router config)        │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod body;
pub mod handlers;
pub mod routes;

pub use body::JpegBody;
pub use handlers::{
    error_status, health_handler, random_image_handler, rgb_image_handler, AppState,
    ErrorResponse, HealthResponse,
};
pub use routes::{create_default_router, create_router, RouterConfig};
