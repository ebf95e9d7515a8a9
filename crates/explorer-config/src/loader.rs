use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded = crate::env::expand_env(&raw)
            .map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self =
            toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the health path is not routable, or a catalog
    /// entry is out of range or duplicated
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_server()?;
        self.validate_catalog()
    }

    fn validate_server(&self) -> anyhow::Result<()> {
        let path = &self.server.health.path;
        if self.server.health.enabled && !path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/', got '{path}'");
        }
        Ok(())
    }

    fn validate_catalog(&self) -> anyhow::Result<()> {
        let mut seen = std::collections::HashSet::new();

        for planet in &self.catalog.planets {
            if planet.name.trim().is_empty() {
                anyhow::bail!("catalog planet name must not be empty");
            }
            if !seen.insert(planet.name.as_str()) {
                anyhow::bail!("duplicate catalog planet '{}'", planet.name);
            }
            if planet.distance_ly < 1 {
                anyhow::bail!(
                    "catalog planet '{}': distance_ly must be at least 1",
                    planet.name
                );
            }
            if !(0.0..=1.0).contains(&planet.habitability) {
                anyhow::bail!(
                    "catalog planet '{}': habitability must be between 0 and 1",
                    planet.name
                );
            }
        }

        Ok(())
    }
}
