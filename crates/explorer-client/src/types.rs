use serde::{Deserialize, Serialize};

/// Query parameters for an exoplanet search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExoplanetQueryRequest {
    /// Maximum distance from Earth in light-years (1 to 100,000)
    pub max_distance_ly: i64,
    /// Minimum habitability score (0 to 1)
    pub min_habitability: f64,
}

/// A single exoplanet in a query result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exoplanet {
    /// Planet designation
    pub name: String,
    /// Distance from Earth in light-years
    pub distance_ly: i64,
    /// Habitability score (0 to 1)
    pub habitability: f64,
}

/// Result set returned by the query endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExoplanetQueryResponse {
    /// Planets matching the query, possibly empty
    pub exoplanets: Vec<Exoplanet>,
}
