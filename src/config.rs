//! Configuration management for the image server.
//!
//! Settings come from command-line arguments via clap, with environment
//! variable fallbacks using the `RGB_` prefix:
//!
//! - `RGB_HOST` - Server bind address (default: 0.0.0.0)
//! - `RGB_PORT` - Server port (default: 8000)
//! - `RGB_MAX_PIXELS` - Maximum width x height per image (default: 64 megapixels)
//! - `RGB_CHANNEL_POLICY` - `truncate` or `strict` (default: truncate)
//! - `RGB_CORS_ORIGINS` - Allowed CORS origins, comma-separated (default: any)

use clap::Parser;

use crate::synth::{ChannelPolicy, DEFAULT_MAX_PIXELS};

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 8000;

// =============================================================================
// CLI Arguments
// =============================================================================

/// RGB JPEG Server - synthesizes solid-color and random-noise JPEG images.
#[derive(Parser, Debug, Clone)]
#[command(name = "rgb-jpeg-server")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "RGB_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "RGB_PORT")]
    pub port: u16,

    // =========================================================================
    // Image Configuration
    // =========================================================================
    /// Maximum number of pixels (width x height) per generated image.
    #[arg(long, default_value_t = DEFAULT_MAX_PIXELS, env = "RGB_MAX_PIXELS")]
    pub max_pixels: u64,

    /// How red/green/blue values above 255 are handled.
    ///
    /// `truncate` keeps the low 8 bits, `strict` rejects the request.
    #[arg(long, value_enum, default_value_t = ChannelPolicy::Truncate, env = "RGB_CHANNEL_POLICY")]
    pub channel_policy: ChannelPolicy,

    // =========================================================================
    // CORS Configuration
    // =========================================================================
    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "RGB_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("port must be greater than 0".to_string());
        }

        if self.max_pixels == 0 {
            return Err("max_pixels must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Tests
// =============================================================================
