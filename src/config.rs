//! Parsing-engine connection settings.
//!
//! Defaults are baked in, environment variables override them, and command-line flags
//! override both (applied by the binary).

use std::time::Duration;

use derivative::Derivative;
use log::{debug, warn};

pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Generous, since large games take the model a while to walk through.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_API_KEY_FALLBACK: &str = "API_KEY";
pub const ENV_MODEL: &str = "FLASHCARDS_MODEL";
pub const ENV_ENDPOINT: &str = "FLASHCARDS_ENDPOINT";
pub const ENV_TIMEOUT_SECS: &str = "FLASHCARDS_TIMEOUT_SECS";

#[derive(Clone, Derivative, PartialEq, Eq)]
#[derivative(Debug, Default)]
pub struct ExtractorConfig {
    #[derivative(Default(value = "DEFAULT_MODEL.to_string()"))]
    pub model: String,
    #[derivative(Default(value = "DEFAULT_ENDPOINT.to_string()"))]
    pub endpoint: String,
    #[derivative(Debug = "ignore")]
    pub api_key: Option<String>,
    #[derivative(Default(value = "DEFAULT_TIMEOUT"))]
    pub timeout: Duration,
}

impl ExtractorConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::default().with_lookup(|name| std::env::var(name).ok())
    }

    /// Apply overrides from any variable source (the environment, or a map in tests).
    pub fn with_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = var(ENV_API_KEY).or_else(|| var(ENV_API_KEY_FALLBACK)) {
            self.api_key = Some(key);
        }
        if let Some(model) = var(ENV_MODEL) {
            self.model = model;
        }
        if let Some(endpoint) = var(ENV_ENDPOINT) {
            self.endpoint = endpoint.trim_end_matches('/').to_string();
        }
        if let Some(secs) = var(ENV_TIMEOUT_SECS) {
            match secs.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.timeout = Duration::from_secs(secs),
                _ => warn!("Ignoring invalid {}: {:?}", ENV_TIMEOUT_SECS, secs),
            }
        }

        debug!("Extractor config: {:?}", self);
        self
    }

    /// Full `generateContent` URL for the configured model.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let config = ExtractorConfig::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.api_key.is_none());
        assert_eq!(
            config.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-pro-preview:generateContent"
        );
    }

    #[test]
    fn env_overrides() {
        let config = ExtractorConfig::default().with_lookup(lookup(&[
            (ENV_API_KEY, "secret"),
            (ENV_MODEL, "gemini-2.5-flash"),
            (ENV_ENDPOINT, "http://localhost:9000/v1/"),
            (ENV_TIMEOUT_SECS, "30"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(
            config.generate_url(),
            "http://localhost:9000/v1/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn fallback_key_and_bad_timeout() {
        let config = ExtractorConfig::default().with_lookup(lookup(&[
            (ENV_API_KEY, " "),
            (ENV_API_KEY_FALLBACK, "legacy"),
            (ENV_TIMEOUT_SECS, "soon"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("legacy"));
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn debug_hides_api_key() {
        let config = ExtractorConfig {
            api_key: Some("top-secret".to_string()),
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("top-secret"));
    }
}
