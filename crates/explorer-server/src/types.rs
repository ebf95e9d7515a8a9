use serde::{Deserialize, Serialize};

/// Query parameters for an exoplanet search
#[derive(Debug, Clone, Deserialize)]
pub struct ExoplanetQueryRequest {
    /// Maximum distance from Earth in light-years (1 to 100,000)
    pub max_distance_ly: i64,
    /// Minimum habitability score (0 to 1)
    pub min_habitability: f64,
}

/// A single exoplanet in the catalog and in query results
#[derive(Debug, Clone, Serialize)]
pub struct Exoplanet {
    /// Planet designation
    pub name: String,
    /// Distance from Earth in light-years
    pub distance_ly: i64,
    /// Habitability score (0 to 1)
    pub habitability: f64,
}

/// Result set returned by the query endpoint
#[derive(Debug, Serialize)]
pub struct ExoplanetQueryResponse {
    /// Planets matching the query, always an array
    pub exoplanets: Vec<Exoplanet>,
}
