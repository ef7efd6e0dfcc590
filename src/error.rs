use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while reading and validating request parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// Parameter is missing, empty, non-numeric, or outside the `u32` range
    #[error("Invalid value for parameter '{name}': {value:?} ({source})")]
    Invalid {
        name: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Color channel above 255 while the strict channel policy is active
    #[error("Channel '{name}' out of range: {value} (must be 0-255)")]
    ChannelOutOfRange { name: &'static str, value: u32 },

    /// Requested image exceeds the configured pixel budget
    #[error("Image too large: {width}x{height} exceeds the limit of {max_pixels} pixels")]
    TooLarge {
        width: u32,
        height: u32,
        max_pixels: u64,
    },
}

impl ParamError {
    /// Name of the offending parameter, if the error is tied to a single one.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            ParamError::Invalid { name, .. } | ParamError::ChannelOutOfRange { name, .. } => {
                Some(*name)
            }
            ParamError::TooLarge { .. } => None,
        }
    }
}

/// Errors raised by the JPEG encoder adapter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Zero-area images cannot be represented as JPEG
    #[error("Cannot encode empty image: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// JPEG frames are limited to 65535 pixels per side
    #[error("Image dimensions {width}x{height} exceed the JPEG limit of {max} pixels per side")]
    TooLarge { width: u32, height: u32, max: u32 },

    /// Underlying encoder rejected the buffer
    #[error("Encoder error: {message}")]
    Encoder { message: String },
}

/// The response body could not be fully delivered to the client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Connection closed after {written} of {total} bytes were sent")]
pub struct WriteError {
    pub written: usize,
    pub total: usize,
}

/// Errors that can occur while producing an image for a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    /// Request parameters could not be read
    #[error("Could not create image: {0}")]
    Param(#[from] ParamError),

    /// Rendered buffer could not be encoded
    #[error("Unable to encode image: {0}")]
    Encode(#[from] EncodeError),

    /// The blocking task that builds the image panicked or was cancelled
    #[error("Image task failed: {message}")]
    Task { message: String },
}
