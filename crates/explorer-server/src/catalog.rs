use explorer_config::CatalogConfig;

use crate::types::Exoplanet;

/// In-memory exoplanet catalog
///
/// Immutable after construction; shared across request handlers.
pub struct Catalog {
    planets: Vec<Exoplanet>,
}

impl Catalog {
    /// Build the catalog from configuration
    ///
    /// Falls back to the built-in sample set when no planets are configured.
    pub fn from_config(config: &CatalogConfig) -> Self {
        if config.planets.is_empty() {
            return Self::sample();
        }

        let planets = config
            .planets
            .iter()
            .map(|entry| Exoplanet {
                name: entry.name.clone(),
                distance_ly: entry.distance_ly,
                habitability: entry.habitability,
            })
            .collect();

        Self { planets }
    }

    /// Built-in sample catalog
    pub fn sample() -> Self {
        Self {
            planets: vec![
                Exoplanet {
                    name: "Kepler-442b".to_owned(),
                    distance_ly: 1200,
                    habitability: 0.84,
                },
                Exoplanet {
                    name: "Proxima Centauri b".to_owned(),
                    distance_ly: 4,
                    habitability: 0.65,
                },
                Exoplanet {
                    name: "TRAPPIST-1e".to_owned(),
                    distance_ly: 40,
                    habitability: 0.77,
                },
            ],
        }
    }

    /// Number of planets in the catalog
    pub fn len(&self) -> usize {
        self.planets.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Planets within `max_distance_ly` and at or above `min_habitability`
    pub fn query(&self, max_distance_ly: i64, min_habitability: f64) -> Vec<Exoplanet> {
        self.planets
            .iter()
            .filter(|p| p.distance_ly <= max_distance_ly && p.habitability >= min_habitability)
            .cloned()
            .collect()
    }
}
