//! Boundary to the external text-generation service.
//!
//! The rest of the crate only sees [`TextGenerator`]: an opaque call that
//! turns a prompt into raw reply text or fails with a
//! [`PlannerError::Generation`](crate::PlannerError::Generation).
//! [`GeminiClient`] is the production implementation.

pub mod gemini;
pub mod safety;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use gemini::GeminiClient;
pub use safety::{HarmBlockThreshold, HarmCategory, SafetySetting};

use crate::error::Result;

/// A service that produces text for a prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Identifier of the backing model, used in logs.
    fn model_name(&self) -> &str;

    /// Sends `prompt` and waits for the complete reply.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    /// `None` leaves top-k sampling unconstrained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            top_k: None,
        }
    }
}
