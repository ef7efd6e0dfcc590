//! Image content tests.
//!
//! Decode the JPEG bodies returned by the server and check the pixels.

use axum::http::StatusCode;

use super::test_utils::{assert_uniform, decode_jpeg, get, test_router};

#[tokio::test]
async fn test_rgb_red_square() {
    let response = get(
        test_router(),
        "/create/rgb?width=4&height=4&red=255&green=0&blue=0",
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);

    let image = decode_jpeg(&response.body);
    assert_eq!(image.dimensions(), (4, 4));
    assert_uniform(&image, [255, 0, 0]);
}

#[tokio::test]
async fn test_rgb_arbitrary_color() {
    let response = get(
        test_router(),
        "/create/rgb?width=50&height=30&red=12&green=200&blue=99",
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);

    let image = decode_jpeg(&response.body);
    assert_eq!(image.dimensions(), (50, 30));
    assert_uniform(&image, [12, 200, 99]);
}

#[tokio::test]
async fn test_rgb_channels_truncate_by_default() {
    // 256 -> 0, 511 -> 255, 300 -> 44
    let response = get(
        test_router(),
        "/create/rgb?width=8&height=8&red=256&green=511&blue=300",
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);

    assert_uniform(&decode_jpeg(&response.body), [0, 255, 44]);
}

#[tokio::test]
async fn test_random_image_dimensions() {
    let response = get(test_router(), "/create/rgb/rnd?width=123&height=45").await;
    assert_eq!(response.status, StatusCode::OK);

    assert_eq!(decode_jpeg(&response.body).dimensions(), (123, 45));
}

#[tokio::test]
async fn test_random_image_is_noisy() {
    let response = get(test_router(), "/create/rgb/rnd?width=64&height=64").await;
    let image = decode_jpeg(&response.body);

    let first = image.get_pixel(0, 0).0;
    let differing = image.pixels().filter(|p| p.0 != first).count();
    assert!(differing > 64 * 64 / 2, "noise image looks uniform");
}

#[tokio::test]
async fn test_random_images_differ_between_requests() {
    let first = get(test_router(), "/create/rgb/rnd?width=16&height=16").await;
    let second = get(test_router(), "/create/rgb/rnd?width=16&height=16").await;

    assert_ne!(first.body, second.body);
}

#[tokio::test]
async fn test_rgb_is_deterministic() {
    let uri = "/create/rgb?width=20&height=20&red=1&green=2&blue=3";
    let first = get(test_router(), uri).await;
    let second = get(test_router(), uri).await;

    assert_eq!(first.body, second.body);
}
