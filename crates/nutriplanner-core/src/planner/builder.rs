//! Builder for creating and configuring MealPlanner instances.

use std::time::Duration;

use super::MealPlanner;
use crate::{
    config::Settings,
    error::Result,
    generation::{GeminiClient, TextGenerator},
};

/// Builder for creating and configuring MealPlanner instances.
///
/// Explicit values take precedence over the environment. When a generator is
/// injected with [`MealPlannerBuilder::with_generator`], no settings are
/// resolved at all.
#[derive(Default)]
pub struct MealPlannerBuilder {
    api_key: Option<String>,
    model: Option<String>,
    endpoint: Option<String>,
    timeout: Option<Duration>,
    generator: Option<Box<dyn TextGenerator>>,
}

impl MealPlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key instead of reading `GOOGLE_API_KEY`.
    pub fn with_api_key<S: Into<String>>(mut self, api_key: Option<S>) -> Self {
        if let Some(api_key) = api_key {
            self.api_key = Some(api_key.into());
        }
        self
    }

    /// Sets the model name.
    pub fn with_model<S: Into<String>>(mut self, model: Option<S>) -> Self {
        if let Some(model) = model {
            self.model = Some(model.into());
        }
        self
    }

    /// Sets the service endpoint.
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: Option<S>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.into());
        }
        self
    }

    /// Sets a request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        if timeout.is_some() {
            self.timeout = timeout;
        }
        self
    }

    /// Uses the given generator instead of building a Gemini client.
    pub fn with_generator<G: TextGenerator + 'static>(mut self, generator: G) -> Self {
        self.generator = Some(Box::new(generator));
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` if no API key can be found or the
    /// generation client fails to initialize.
    pub fn build(self) -> Result<MealPlanner> {
        if let Some(generator) = self.generator {
            return Ok(MealPlanner::new(generator));
        }

        let api_key = self.api_key;
        let mut settings = Settings::from_lookup(|name| {
            if name == crate::config::API_KEY_ENV && api_key.is_some() {
                api_key.clone()
            } else {
                std::env::var(name).ok()
            }
        })?;

        if let Some(model) = self.model {
            settings.model = model;
        }
        if let Some(endpoint) = self.endpoint {
            settings.endpoint = endpoint;
        }
        if self.timeout.is_some() {
            settings.timeout = self.timeout;
        }

        Ok(MealPlanner::new(Box::new(GeminiClient::new(settings)?)))
    }
}
