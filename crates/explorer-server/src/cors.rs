use std::time::Duration;

use explorer_config::CorsConfig;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build a Tower CORS layer from configuration
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new()
        .allow_methods(tower_http::cors::AllowMethods::any())
        .allow_headers(tower_http::cors::AllowHeaders::any());

    layer = if config.allows_any_origin() {
        layer.allow_origin(AllowOrigin::any())
    } else {
        let origins: Vec<_> = config.origins.iter().filter_map(|o| o.parse().ok()).collect();
        layer.allow_origin(origins)
    };

    if let Some(seconds) = config.max_age {
        layer = layer.max_age(Duration::from_secs(seconds));
    }

    layer
}
