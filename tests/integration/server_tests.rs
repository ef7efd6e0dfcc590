//! Tests that serve the router over a real TCP socket.
//!
//! The in-process `oneshot` tests always poll bodies to the end. A real
//! connection stops polling once `Content-Length` bytes are written, so
//! transfer bookkeeping is only observable here.

use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::Level;

use super::test_utils::{is_valid_jpeg, test_router};

/// Log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Status line, headers and body of a raw HTTP/1.1 response.
struct RawResponse {
    head: String,
    body: Vec<u8>,
}

impl RawResponse {
    fn parse(raw: &[u8]) -> Self {
        let split = raw
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .expect("response should have a header terminator");

        Self {
            head: String::from_utf8_lossy(&raw[..split]).into_owned(),
            body: raw[split + 4..].to_vec(),
        }
    }

    fn content_length(&self) -> Option<usize> {
        self.head.lines().find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
    }
}

/// Serve the default router on an ephemeral port.
async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move { axum::serve(listener, test_router()).await });

    addr.to_string()
}

/// Send one request with `Connection: close` and read until EOF.
async fn request(addr: &str, method: &str, target: &str) -> RawResponse {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!(
        "{} {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        method, target
    );
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    RawResponse::parse(&raw)
}

/// Install a subscriber for this thread that records every event.
fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    (logs, tracing::subscriber::set_default(subscriber))
}

// The default `#[tokio::test]` runtime is single-threaded, so the server's
// connection tasks log through the subscriber installed for this thread.

#[tokio::test]
async fn test_completed_transfer_logs_no_write_error() {
    let (logs, _guard) = capture_logs();
    let addr = spawn_server().await;

    let response = request(
        &addr,
        "GET",
        "/create/rgb?width=4&height=4&red=255&green=0&blue=0",
    )
    .await;

    assert!(response.head.starts_with("HTTP/1.1 200"), "{}", response.head);
    assert_eq!(response.content_length(), Some(response.body.len()));
    assert!(is_valid_jpeg(&response.body));

    // let the connection task finish dropping the body
    tokio::time::sleep(Duration::from_millis(50)).await;

    let logs = logs.contents();
    assert!(logs.contains("Sending image"), "no logs captured: {}", logs);
    assert!(!logs.contains("Unable to write image"), "{}", logs);
}

#[tokio::test]
async fn test_several_transfers_log_no_write_error() {
    let (logs, _guard) = capture_logs();
    let addr = spawn_server().await;

    for target in [
        "/create/rgb/rnd?width=1&height=1",
        "/create/rgb/rnd?width=300&height=200",
        "/create/rgb?width=64&height=64&red=1&green=2&blue=3",
    ] {
        let response = request(&addr, "GET", target).await;
        assert!(response.head.starts_with("HTTP/1.1 200"), "{}", target);
        assert_eq!(response.content_length(), Some(response.body.len()), "{}", target);
    }

    let response = request(&addr, "HEAD", "/create/rgb/rnd?width=8&height=8").await;
    assert!(response.head.starts_with("HTTP/1.1 200"));
    assert!(response.body.is_empty());

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!logs.contents().contains("Unable to write image"));
}
