#![allow(clippy::must_use_candidate)]

pub mod catalog;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use catalog::{CatalogConfig, PlanetEntry};
pub use health::HealthConfig;
pub use server::{CorsConfig, ServerConfig};
pub use telemetry::TelemetryConfig;

/// Top-level explorer configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Exoplanet catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
