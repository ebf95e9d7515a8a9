//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use explorer_config::{CatalogConfig, Config, HealthConfig, PlanetEntry, ServerConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    cors: None,
                },
                catalog: CatalogConfig::default(),
                telemetry: explorer_config::TelemetryConfig::default(),
            },
        }
    }

    /// Add a planet to the catalog
    ///
    /// The first call switches the server off the built-in sample set
    pub fn with_planet(mut self, name: &str, distance_ly: i64, habitability: f64) -> Self {
        self.config.catalog.planets.push(PlanetEntry {
            name: name.to_owned(),
            distance_ly,
            habitability,
        });
        self
    }

    /// Serve the health endpoint at a custom path
    pub fn with_health_path(mut self, path: &str) -> Self {
        self.config.server.health.path = path.to_owned();
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
