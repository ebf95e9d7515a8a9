use serde::Deserialize;

/// Exoplanet catalog configuration
///
/// When no planets are listed the server falls back to its built-in
/// sample catalog.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Planets served by the query endpoint
    #[serde(default)]
    pub planets: Vec<PlanetEntry>,
}

/// A configured exoplanet
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanetEntry {
    /// Planet designation
    pub name: String,
    /// Distance from Earth in light-years
    pub distance_ly: i64,
    /// Habitability score (0 to 1)
    pub habitability: f64,
}
