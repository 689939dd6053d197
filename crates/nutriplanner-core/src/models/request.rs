//! Plan request model.

use serde::{Deserialize, Serialize};

use super::Goal;
use crate::error::{PlannerError, Result};

/// Validated set of preferences for one submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanRequest {
    /// Human-readable planning horizon, e.g. "3 dias"
    pub period_label: String,

    /// Total days to plan
    pub day_count: u32,

    /// Selected meal slots, in the order chosen by the user
    pub meals: Vec<String>,

    /// Dietary goal
    pub goal: Goal,

    /// Foods the user likes (may be empty)
    pub likes: String,

    /// Restrictions, allergies and dislikes (may be empty)
    pub dislikes: String,

    /// Ingredients already at home (may be empty)
    pub pantry_items: String,
}

impl PlanRequest {
    /// Longest horizon a request may describe.
    pub const MAX_DAYS: u32 = 366;

    /// Checks the invariants every request must hold before it can be sent.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when `day_count` is outside
    /// `1..=366` or no meal was selected.
    pub fn validate(&self) -> Result<()> {
        if !(1..=Self::MAX_DAYS).contains(&self.day_count) {
            return Err(PlannerError::invalid_input("day_count").with_reason(format!(
                "must be between 1 and {}, got {}",
                Self::MAX_DAYS,
                self.day_count
            )));
        }
        if self.meals.iter().all(|meal| meal.trim().is_empty()) {
            return Err(PlannerError::invalid_input("meals")
                .with_reason("at least one meal must be selected"));
        }
        Ok(())
    }
}
