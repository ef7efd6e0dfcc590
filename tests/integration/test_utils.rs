//! Test utilities for integration tests.
//!
//! Helpers for sending requests through the router and inspecting the
//! resulting JPEG and JSON bodies.

use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use image::RgbImage;
use tower::ServiceExt;

use rgb_jpeg_server::{create_router, ImageService, RouterConfig};

/// Per-channel tolerance when comparing decoded JPEG pixels.
pub const COLOR_TOLERANCE: u8 = 3;

/// Status, headers and collected body of a response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("body should be JSON")
    }
}

/// Router with default settings and tracing disabled.
pub fn test_router() -> Router {
    router_with(ImageService::new())
}

/// Router around a custom image service.
pub fn router_with(service: ImageService) -> Router {
    create_router(service, RouterConfig::new().with_tracing(false))
}

/// Send a GET request to `uri` and collect the response.
pub async fn get(router: Router, uri: &str) -> TestResponse {
    send(router, "GET", uri).await
}

/// Send a request with an arbitrary method and collect the response.
pub async fn send(router: Router, method: &str, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body,
    }
}

/// Check if data is a valid JPEG.
pub fn is_valid_jpeg(data: &[u8]) -> bool {
    if data.len() < 4 {
        return false;
    }

    // Check SOI marker
    if data[0] != 0xFF || data[1] != 0xD8 {
        return false;
    }

    // Check EOI marker at end
    if data[data.len() - 2] != 0xFF || data[data.len() - 1] != 0xD9 {
        return false;
    }

    image::load_from_memory_with_format(data, image::ImageFormat::Jpeg).is_ok()
}

/// Decode JPEG data to RGB pixels.
pub fn decode_jpeg(data: &[u8]) -> RgbImage {
    image::load_from_memory_with_format(data, image::ImageFormat::Jpeg)
        .expect("body should decode as JPEG")
        .to_rgb8()
}

/// Assert every pixel of `image` is within tolerance of `expected`.
pub fn assert_uniform(image: &RgbImage, expected: [u8; 3]) {
    for (x, y, pixel) in image.enumerate_pixels() {
        for channel in 0..3 {
            let diff = pixel.0[channel].abs_diff(expected[channel]);
            assert!(
                diff <= COLOR_TOLERANCE,
                "pixel ({}, {}) = {:?}, expected about {:?}",
                x,
                y,
                pixel.0,
                expected
            );
        }
    }
}
