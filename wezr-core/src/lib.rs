//! Core library for the `wezr` weather CLI.
//!
//! This crate defines:
//! - Config file loading
//! - The forecast.io client and the response data model
//! - Lenient decoding with diagnostics for malformed responses
//! - Placeholder-based rendering of current conditions

pub mod config;
pub mod decode;
pub mod format;
pub mod model;
pub mod provider;
pub mod units;

pub use config::Config;
pub use decode::{DecodeError, decode, decode_lenient};
pub use format::{DEFAULT_TEMPLATE, render, render_snapshot};
pub use model::{Alert, DataBlock, DataPoint, Flags, WeatherRequest, WeatherSnapshot};
pub use provider::{ForecastIoProvider, WeatherProvider};
pub use units::{UnknownUnits, Units};

/// Version string printed by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
