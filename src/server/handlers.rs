//! HTTP request handlers for the image API.
//!
//! This module contains the Axum handlers for generating images and health
//! checks.
//!
//! # Endpoints
//!
//! - `GET /create/rgb/rnd?width=..&height=..` - Random-noise image
//! - `GET /create/rgb?width=..&height=..&red=..&green=..&blue=..` - Solid-color image
//! - `GET /health` - Health check endpoint

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::error::{EncodeError, ImageError, ParamError};
use crate::synth::{ImageKind, ImageService, RequestParams, JPEG_CONTENT_TYPE};

use super::body::JpegBody;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state containing the image service.
///
/// This is passed to all handlers via Axum's State extractor.
#[derive(Clone)]
pub struct AppState {
    /// The image service for processing image requests
    pub image_service: Arc<ImageService>,
}

impl AppState {
    /// Create a new application state with the given image service.
    pub fn new(image_service: ImageService) -> Self {
        Self {
            image_service: Arc::new(image_service),
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// JSON error response returned for all error conditions.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type identifier (e.g., "invalid_parameter", "encode_error")
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Offending query parameter, when the error concerns a single one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,

    /// HTTP status code (included for convenience)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            parameter: None,
            status: None,
        }
    }

    /// Create a new error response with status code.
    pub fn with_status(
        error: impl Into<String>,
        message: impl Into<String>,
        status: StatusCode,
    ) -> Self {
        Self {
            status: Some(status.as_u16()),
            ..Self::new(error, message)
        }
    }

    /// Attach the name of the parameter that failed.
    pub fn with_parameter(mut self, parameter: Option<&str>) -> Self {
        self.parameter = parameter.map(str::to_string);
        self
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Map an image error to its HTTP status and error type identifier.
pub fn error_status(err: &ImageError) -> (StatusCode, &'static str) {
    match err {
        ImageError::Param(ParamError::Invalid { .. }) => {
            (StatusCode::BAD_REQUEST, "invalid_parameter")
        }
        ImageError::Param(ParamError::ChannelOutOfRange { .. }) => {
            (StatusCode::BAD_REQUEST, "channel_out_of_range")
        }
        ImageError::Param(ParamError::TooLarge { .. })
        | ImageError::Encode(EncodeError::TooLarge { .. }) => {
            (StatusCode::BAD_REQUEST, "image_too_large")
        }
        ImageError::Encode(EncodeError::EmptyImage { .. }) => {
            (StatusCode::BAD_REQUEST, "empty_image")
        }
        ImageError::Encode(EncodeError::Encoder { .. }) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "encode_error")
        }
        ImageError::Task { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
    }
}

/// Convert ImageError to HTTP response.
///
/// No image bytes are ever written for a failed request.
/// - 4xx errors are logged at WARN level (client errors)
/// - 5xx errors are logged at ERROR level (server errors)
impl IntoResponse for ImageError {
    fn into_response(self) -> Response {
        let (status, error_type) = error_status(&self);
        let message = self.to_string();
        let parameter = match &self {
            ImageError::Param(err) => err.parameter(),
            ImageError::Encode(_) | ImageError::Task { .. } => None,
        };

        if status.is_server_error() {
            error!(
                error_type = error_type,
                status = status.as_u16(),
                "Server error: {}",
                message
            );
        } else {
            warn!(
                error_type = error_type,
                status = status.as_u16(),
                "Client error: {}",
                message
            );
        }

        let error_response =
            ErrorResponse::with_status(error_type, message, status).with_parameter(parameter);

        (status, Json(error_response)).into_response()
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Run the image pipeline for `kind` and frame the result as a JPEG response.
///
/// Rendering and encoding are CPU-bound and run on the blocking pool.
/// HEAD requests get the same headers with an empty body.
async fn image_response(
    state: AppState,
    method: Method,
    kind: ImageKind,
    params: HashMap<String, String>,
) -> Result<Response, ImageError> {
    let params = RequestParams::from(params);
    let service = Arc::clone(&state.image_service);

    let image = tokio::task::spawn_blocking(move || service.create(kind, &params))
        .await
        .map_err(|e| ImageError::Task {
            message: e.to_string(),
        })??;

    let length = image.data.len();
    debug!(
        width = image.dimensions.width,
        height = image.dimensions.height,
        bytes = length,
        "Sending image"
    );

    let body = if method == Method::HEAD {
        Body::empty()
    } else {
        Body::new(JpegBody::new(image.data))
    };

    let response = (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, JPEG_CONTENT_TYPE.to_string()),
            (header::CONTENT_LENGTH, length.to_string()),
        ],
        body,
    )
        .into_response();

    Ok(response)
}

/// Handle random-noise image requests.
///
/// # Endpoint
///
/// `GET /create/rgb/rnd`
///
/// # Query Parameters
///
/// - `width`: Image width in pixels
/// - `height`: Image height in pixels
///
/// # Response
///
/// - `200 OK`: JPEG image with `Content-Type: image/jpeg` and `Content-Length`
/// - `400 Bad Request`: Missing or invalid parameter, empty or oversized image
/// - `500 Internal Server Error`: Encoding failed or the image task died
pub async fn random_image_handler(
    State(state): State<AppState>,
    method: Method,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ImageError> {
    image_response(state, method, ImageKind::Random, params).await
}

/// Handle solid-color image requests.
///
/// # Endpoint
///
/// `GET /create/rgb`
///
/// # Query Parameters
///
/// - `width`, `height`: Image size in pixels
/// - `red`, `green`, `blue`: Color channels (truncated to 8 bits unless the
///   strict channel policy is configured)
///
/// # Response
///
/// Same as [`random_image_handler`].
pub async fn rgb_image_handler(
    State(state): State<AppState>,
    method: Method,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ImageError> {
    image_response(state, method, ImageKind::Rgb, params).await
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================
