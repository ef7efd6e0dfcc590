//! Response body for encoded images.
//!
//! The body hands the whole JPEG to the connection as a single frame and
//! reports a [`WriteError`] if the connection drops it before that frame was
//! taken. That is the only point where a failed write is observable from
//! inside the service.

use std::convert::Infallible;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use http_body::{Body, Frame, SizeHint};
use tracing::error;

use crate::error::WriteError;

/// A single-frame body that logs incomplete transfers.
///
/// The transfer counts as done once the frame has been handed to the
/// connection. Hyper drops a body as soon as the declared `Content-Length`
/// has been written, without polling it to the end.
#[derive(Debug)]
pub struct JpegBody {
    data: Option<Bytes>,
    total: usize,
}

impl JpegBody {
    pub fn new(data: Bytes) -> Self {
        Self {
            total: data.len(),
            data: Some(data),
        }
    }

    /// Total body length in bytes.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Whether the data has been handed to the connection.
    pub fn is_complete(&self) -> bool {
        self.data.is_none()
    }

    fn remaining(&self) -> usize {
        self.data.as_ref().map_or(0, Bytes::len)
    }

    /// The write error this body would report if dropped now.
    pub fn write_error(&self) -> Option<WriteError> {
        if self.is_complete() {
            return None;
        }
        Some(WriteError {
            written: self.total - self.remaining(),
            total: self.total,
        })
    }
}

impl Body for JpegBody {
    type Data = Bytes;
    type Error = Infallible;

    fn poll_frame(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        Poll::Ready(self.data.take().map(|data| Ok(Frame::data(data))))
    }

    fn is_end_stream(&self) -> bool {
        self.is_complete()
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::with_exact(self.remaining() as u64)
    }
}

impl Drop for JpegBody {
    fn drop(&mut self) {
        if let Some(err) = self.write_error() {
            error!(error = %err, "Unable to write image");
        }
    }
}
