use std::env;

/// Application configuration loaded from environment variables.
///
/// The AI credential is optional by design: without it the generators
/// degrade to their documented fallback output instead of crashing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key. `None` degrades AI calls to fallback text / no image.
    pub gemini_api_key: Option<String>,

    /// Override for the Gemini API base URL (tests, proxies).
    pub gemini_base_url: Option<String>,

    /// Override for the map-data base URL (tests, mirrors).
    pub geodata_base_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            gemini_base_url: env::var("GEMINI_BASE_URL").ok(),
            geodata_base_url: env::var("GEODATA_BASE_URL").ok(),
        }
    }

    /// Log the loaded config with the credential redacted.
    pub fn log_redacted(&self) {
        tracing::info!(
            gemini_key_present = self.gemini_api_key.is_some(),
            gemini_base_url = self.gemini_base_url.as_deref().unwrap_or("default"),
            geodata_base_url = self.geodata_base_url.as_deref().unwrap_or("default"),
            "Config loaded"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_none_not_panic() {
        // from_env must tolerate an unset credential.
        std::env::remove_var("GEMINI_API_KEY");
        let config = Config::from_env();
        assert!(config.gemini_api_key.is_none());
    }
}
