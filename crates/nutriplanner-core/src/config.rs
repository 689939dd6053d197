//! Generation service settings.
//!
//! Values are resolved from explicit overrides first, then from the process
//! environment (which the binary populates from a `.env` file at startup),
//! then from defaults. Only the API key has no default.

use std::{env, fmt, time::Duration};

use crate::{
    error::{PlannerError, Result},
    generation::{GenerationConfig, SafetySetting},
};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";
/// Environment variable overriding the model name.
pub const MODEL_ENV: &str = "NUTRIPLANNER_MODEL";
/// Environment variable overriding the service endpoint.
pub const ENDPOINT_ENV: &str = "NUTRIPLANNER_ENDPOINT";
/// Environment variable setting a request timeout in seconds.
pub const TIMEOUT_ENV: &str = "NUTRIPLANNER_TIMEOUT_SECS";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
/// Service endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Everything the generation client needs to talk to the service.
#[derive(Clone)]
pub struct Settings {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    /// `None` keeps the HTTP client's default behavior.
    pub timeout: Option<Duration>,
    pub generation: GenerationConfig,
    pub safety: Vec<SafetySetting>,
}

impl Settings {
    /// Creates settings with the given key and defaults for everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
            generation: GenerationConfig::default(),
            safety: SafetySetting::default_policy(),
        }
    }

    /// Resolves settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` when the API key is missing or
    /// the timeout is not a number.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolves settings through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` when the API key is missing or
    /// the timeout is not a number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = var(API_KEY_ENV).ok_or_else(|| {
            PlannerError::configuration(format!(
                "Google API key not found. Set {API_KEY_ENV} in the environment or in a .env file"
            ))
        })?;

        let mut settings = Self::new(api_key.trim());
        if let Some(model) = var(MODEL_ENV) {
            settings.model = model.trim().to_string();
        }
        if let Some(endpoint) = var(ENDPOINT_ENV) {
            settings.endpoint = endpoint.trim().to_string();
        }
        if let Some(raw) = var(TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                PlannerError::configuration(format!(
                    "{TIMEOUT_ENV} must be a whole number of seconds, got '{raw}'"
                ))
            })?;
            settings.timeout = Some(Duration::from_secs(secs));
        }
        Ok(settings)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("generation", &self.generation)
            .field("safety", &self.safety)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::ErrorKind;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_missing_key_is_configuration_error() {
        let err = Settings::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn test_blank_key_is_missing() {
        let err = Settings::from_lookup(lookup_from(&[(API_KEY_ENV, "   ")])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[(API_KEY_ENV, "secret")])).unwrap();
        assert_eq!(settings.api_key, "secret");
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.timeout, None);
        assert_eq!(settings.generation, GenerationConfig::default());
        assert_eq!(settings.safety.len(), 4);
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            (API_KEY_ENV, "secret"),
            (MODEL_ENV, "gemini-1.5-pro"),
            (ENDPOINT_ENV, "http://localhost:9000"),
            (TIMEOUT_ENV, "30"),
        ]))
        .unwrap();
        assert_eq!(settings.model, "gemini-1.5-pro");
        assert_eq!(settings.endpoint, "http://localhost:9000");
        assert_eq!(settings.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = Settings::from_lookup(lookup_from(&[
            (API_KEY_ENV, "secret"),
            (TIMEOUT_ENV, "soon"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains(TIMEOUT_ENV));
    }

    #[test]
    fn test_debug_redacts_key() {
        let output = format!("{:?}", Settings::new("super-secret"));
        assert!(!output.contains("super-secret"));
        assert!(output.contains("<redacted>"));
    }
}
