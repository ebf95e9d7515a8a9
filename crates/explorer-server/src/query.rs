use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};

use crate::catalog::Catalog;
use crate::error::{QueryError, Result};
use crate::types::{ExoplanetQueryRequest, ExoplanetQueryResponse};

/// Bounds from the public API contract
const MAX_DISTANCE_RANGE: std::ops::RangeInclusive<i64> = 1..=100_000;
const HABITABILITY_RANGE: std::ops::RangeInclusive<f64> = 0.0..=1.0;

/// Create the endpoint router for exoplanet queries
pub fn endpoint_router() -> Router<Arc<Catalog>> {
    Router::new().route("/exoplanets/query", post(query_exoplanets))
}

/// Handle exoplanet query requests
async fn query_exoplanets(
    State(catalog): State<Arc<Catalog>>,
    Json(request): Json<ExoplanetQueryRequest>,
) -> Result<Json<ExoplanetQueryResponse>> {
    validate(&request)?;

    let exoplanets = catalog.query(request.max_distance_ly, request.min_habitability);

    tracing::debug!(
        max_distance_ly = request.max_distance_ly,
        min_habitability = request.min_habitability,
        matches = exoplanets.len(),
        "exoplanet query"
    );

    Ok(Json(ExoplanetQueryResponse { exoplanets }))
}

fn validate(request: &ExoplanetQueryRequest) -> Result<()> {
    if !MAX_DISTANCE_RANGE.contains(&request.max_distance_ly) {
        return Err(QueryError::InvalidRequest(format!(
            "max_distance_ly must be between {} and {}",
            MAX_DISTANCE_RANGE.start(),
            MAX_DISTANCE_RANGE.end()
        )));
    }

    if !HABITABILITY_RANGE.contains(&request.min_habitability) {
        return Err(QueryError::InvalidRequest(format!(
            "min_habitability must be between {} and {}",
            HABITABILITY_RANGE.start(),
            HABITABILITY_RANGE.end()
        )));
    }

    Ok(())
}
