//! High-level meal planner API.
//!
//! [`MealPlanner`] ties the pure pieces of the crate to the generation
//! service:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  build_prompt   │    │  TextGenerator  │    │ split_response  │
//! │  (PlanRequest)  │───▶│   (service)     │───▶│ (PlanResponse)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Instances are created with [`MealPlannerBuilder`], either from settings
//! (explicit or read from the environment) or around an injected generator.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nutriplanner_core::{MealPlannerBuilder, params::PlanForm};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = MealPlannerBuilder::new()
//!     .with_api_key(Some("my-key"))
//!     .build()?;
//!
//! let request = PlanForm::default().to_request()?;
//! let response = planner.generate_plan(&request).await?;
//! println!("{}", response.menu_text);
//! # Ok(())
//! # }
//! ```

pub mod builder;

use log::{debug, info};

pub use builder::MealPlannerBuilder;

use crate::{
    error::Result,
    generation::TextGenerator,
    models::{PlanRequest, PlanResponse},
    partition::split_response,
    prompt::build_prompt,
};

/// Main planner interface: one prompt, one service call, one partition.
pub struct MealPlanner {
    generator: Box<dyn TextGenerator>,
}

impl MealPlanner {
    pub(crate) fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Model used for generation.
    pub fn model_name(&self) -> &str {
        self.generator.model_name()
    }

    /// Builds the prompt for `request`, sends it and partitions the reply.
    ///
    /// The request is assumed valid; use [`crate::handlers::handle_submit`]
    /// to validate form input and record the result.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Generation` (or `Serialization`) if the service
    /// call fails. No retry is attempted.
    pub async fn generate_plan(&self, request: &PlanRequest) -> Result<PlanResponse> {
        let prompt = build_prompt(request);
        info!(
            "Requesting a {}-day plan from {}",
            request.day_count,
            self.generator.model_name()
        );
        let raw = self.generator.generate(&prompt).await?;
        let response = split_response(&raw);
        debug!(
            "Received {} bytes, alert present: {}",
            raw.len(),
            response.has_alert()
        );
        Ok(response)
    }
}
