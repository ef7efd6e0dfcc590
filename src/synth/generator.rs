//! Pixel buffer generators.
//!
//! Both generators return an RGBA buffer of exactly `width` x `height`
//! pixels with alpha fixed at 255. Zero-sized dimensions produce an empty
//! buffer rather than an error; rejecting those is left to the encoder.

use image::{Rgba, RgbaImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::params::{Color, Dimensions};

/// Alpha value for every generated pixel.
pub const OPAQUE: u8 = 255;

/// Fill every pixel with `color`.
pub fn fill_uniform(width: u32, height: u32, color: Color) -> RgbaImage {
    RgbaImage::from_pixel(
        width,
        height,
        Rgba([color.red, color.green, color.blue, OPAQUE]),
    )
}

/// Fill every pixel with an independently sampled random color.
pub fn fill_random<R: Rng>(width: u32, height: u32, rng: &mut R) -> RgbaImage {
    RgbaImage::from_fn(width, height, |_, _| {
        Rgba([rng.gen::<u8>(), rng.gen::<u8>(), rng.gen::<u8>(), OPAQUE])
    })
}

// =============================================================================
// Fill Strategy
// =============================================================================

/// How the pixels of a requested image are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillStrategy {
    /// Independent random color per pixel
    Random,

    /// A single color everywhere
    Uniform(Color),
}

impl FillStrategy {
    /// Render a buffer of the given size.
    ///
    /// Random fills draw from a generator seeded for this call only, so
    /// concurrent requests never share random state.
    pub fn render(&self, dimensions: Dimensions) -> RgbaImage {
        match *self {
            FillStrategy::Random => {
                let mut rng = StdRng::from_entropy();
                fill_random(dimensions.width, dimensions.height, &mut rng)
            }
            FillStrategy::Uniform(color) => {
                fill_uniform(dimensions.width, dimensions.height, color)
            }
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            FillStrategy::Random => "random",
            FillStrategy::Uniform(_) => "uniform",
        }
    }
}
