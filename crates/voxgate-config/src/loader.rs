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

        Self::from_toml(&raw)
    }

    /// Parse configuration from raw TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream base URL is malformed
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(ref base_url) = self.upstream.base_url
            && !(base_url.starts_with("http://") || base_url.starts_with("https://"))
        {
            anyhow::bail!("upstream.base_url must be an http(s) URL, got `{base_url}`");
        }

        Ok(())
    }
}
