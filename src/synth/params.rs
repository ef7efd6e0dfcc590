//! Request parameter parsing.
//!
//! Parameters arrive as raw query strings. Each one is logged before it is
//! validated so that failed requests can be diagnosed from server logs.
//!
//! # Parsing Rules
//!
//! - Values are base-10 unsigned 32-bit integers
//! - A missing parameter reads as the empty string and fails to parse
//! - Composite readers stop at the first failing parameter

use std::collections::HashMap;

use clap::ValueEnum;
use tracing::info;

use crate::error::ParamError;

// =============================================================================
// Request Parameters
// =============================================================================

/// Raw query parameters of a single request.
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    values: HashMap<String, String>,
}

impl RequestParams {
    /// Wrap a decoded query map.
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Raw value of `name`, or `""` when absent.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Builder-style insert, mostly useful in tests.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl From<HashMap<String, String>> for RequestParams {
    fn from(values: HashMap<String, String>) -> Self {
        Self::new(values)
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

// =============================================================================
// Parsed Values
// =============================================================================

/// Requested image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Reject sizes whose pixel count exceeds `max_pixels`.
    pub fn check_limit(&self, max_pixels: u64) -> Result<(), ParamError> {
        if self.pixel_count() > max_pixels {
            return Err(ParamError::TooLarge {
                width: self.width,
                height: self.height,
                max_pixels,
            });
        }
        Ok(())
    }
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// How color channel values above 255 are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ChannelPolicy {
    /// Keep the low 8 bits of the parsed value (`256` becomes `0`)
    #[default]
    Truncate,

    /// Reject values above 255
    Strict,
}

impl ChannelPolicy {
    /// Convert a parsed channel value to 8 bits.
    pub fn apply(self, name: &'static str, value: u32) -> Result<u8, ParamError> {
        match self {
            ChannelPolicy::Truncate => Ok(value as u8),
            ChannelPolicy::Strict => {
                u8::try_from(value).map_err(|_| ParamError::ChannelOutOfRange { name, value })
            }
        }
    }
}

// =============================================================================
// Parsers
// =============================================================================

/// Parse a single named parameter as a base-10 `u32`.
///
/// The raw value is logged before validation, whatever the outcome.
pub fn parse_param(params: &RequestParams, name: &'static str) -> Result<u32, ParamError> {
    let raw = params.get(name);
    info!(parameter = name, value = raw, "Request parameter");

    raw.parse::<u32>().map_err(|source| ParamError::Invalid {
        name,
        value: raw.to_string(),
        source,
    })
}

/// Read `width` then `height`.
pub fn read_dimension_params(params: &RequestParams) -> Result<Dimensions, ParamError> {
    let width = parse_param(params, "width")?;
    let height = parse_param(params, "height")?;
    Ok(Dimensions::new(width, height))
}

/// Read the dimensions followed by `red`, `green` and `blue`.
pub fn read_rgb_params(
    params: &RequestParams,
    policy: ChannelPolicy,
) -> Result<(Dimensions, Color), ParamError> {
    let dimensions = read_dimension_params(params)?;

    let red = policy.apply("red", parse_param(params, "red")?)?;
    let green = policy.apply("green", parse_param(params, "green")?)?;
    let blue = policy.apply("blue", parse_param(params, "blue")?)?;

    Ok((dimensions, Color::new(red, green, blue)))
}

// =============================================================================
// Tests
// =============================================================================
