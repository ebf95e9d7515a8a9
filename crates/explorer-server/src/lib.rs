#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod catalog;
mod cors;
mod error;
mod health;
mod query;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use explorer_config::Config;
use tower_http::trace::TraceLayer;

pub use catalog::Catalog;
pub use error::QueryError;
pub use types::{Exoplanet, ExoplanetQueryRequest, ExoplanetQueryResponse};

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the health path is not routable
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8888)));

        let catalog = Arc::new(Catalog::from_config(&config.catalog));
        tracing::debug!(planets = catalog.len(), "catalog initialized");

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            let path = &config.server.health.path;
            // axum panics on paths without a leading slash
            anyhow::ensure!(
                path.starts_with('/'),
                "health path must start with '/', got '{path}'"
            );
            app = app.route(path, axum::routing::get(health::health_handler));
        }

        // Query routes
        app = app.merge(query::endpoint_router().with_state(catalog));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        // CORS
        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
