//! Data models for meal plan requests, replies and history.
//!
//! Display implementations for these models live in
//! [`crate::display`] to keep data structures separate from presentation.
//!
//! # Lifecycle
//!
//! A [`PlanRequest`] is built from the form on every submission. A successful
//! generation produces a [`PlanResponse`], and the pair is recorded as a
//! [`HistoryEntry`]. None of them is mutated after creation.
//!
//! # Examples
//!
//! ```rust
//! use nutriplanner_core::models::{Goal, PlanRequest, PlanningPeriod};
//!
//! let period = PlanningPeriod::Weeks(1);
//! let request = PlanRequest {
//!     period_label: period.label(),
//!     day_count: period.day_count(),
//!     meals: vec!["Almoço".to_string(), "Jantar".to_string()],
//!     goal: Goal::LowCarb,
//!     likes: String::new(),
//!     dislikes: "amendoim".to_string(),
//!     pantry_items: String::new(),
//! };
//! assert!(request.validate().is_ok());
//! assert_eq!(request.day_count, 7);
//! ```

pub mod goal;
pub mod history;
pub mod meal;
pub mod planning;
pub mod request;
pub mod response;


pub use goal::Goal;
pub use history::HistoryEntry;
pub use meal::{canonical_meal, default_meals, DEFAULT_MEALS, MEAL_OPTIONS};
pub use planning::{FormField, PlanningMode, PlanningPeriod};
pub use request::PlanRequest;
pub use response::PlanResponse;
