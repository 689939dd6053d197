//! Core library for the NutriPlanner meal planning assistant.
//!
//! This crate turns a user's dietary preferences into a prompt for a
//! text-generation model, sends it, splits the reply into a menu and an
//! optional health alert, and keeps a per-session history of the results.
//!
//! # Architecture
//!
//! ```text
//! Interface → handlers → MealPlanner → TextGenerator (Gemini)
//!                │             │
//!                │             ├── prompt::build_prompt
//!                │             └── partition::split_response
//!                └── SessionState (history)
//! ```
//!
//! - [`params`]: raw form state and its validation
//! - [`prompt`] and [`partition`]: pure text transformations
//! - [`generation`]: the service boundary and the Gemini REST client
//! - [`display`]: markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use nutriplanner_core::{
//!     display::SessionHistory, handle_submit, params::PlanForm, MealPlannerBuilder,
//!     SessionState,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads GOOGLE_API_KEY from the environment
//! let planner = MealPlannerBuilder::new().build()?;
//! let mut session = SessionState::new();
//!
//! let form = PlanForm {
//!     likes: "frango, abacate".to_string(),
//!     ..PlanForm::default()
//! };
//! let entry = handle_submit(&planner, &mut session, &form).await?;
//! println!("{}", entry.response);
//!
//! println!("{}", SessionHistory(session.history()));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod generation;
pub mod handlers;
pub mod models;
pub mod params;
pub mod partition;
pub mod planner;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use config::Settings;
pub use display::{GeneratedPlan, LocalDateTime, OperationStatus, SessionHistory, DISCLAIMER};
pub use error::{ErrorKind, PlannerError, Result};
pub use generation::{GeminiClient, GenerationConfig, TextGenerator};
pub use handlers::handle_submit;
pub use models::{
    Goal, HistoryEntry, PlanRequest, PlanResponse, PlanningMode, PlanningPeriod, MEAL_OPTIONS,
};
pub use params::PlanForm;
pub use partition::{split_response, ALERT_MARKER};
pub use planner::{MealPlanner, MealPlannerBuilder};
pub use prompt::build_prompt;
pub use session::SessionState;
