//! Parameter structures for meal planner operations
//!
//! [`PlanForm`] holds the raw state of the preference form, independent of
//! any interface framework. The command-line flags and the interactive form
//! both produce a `PlanForm`; only [`PlanForm::to_request`] turns it into a
//! [`PlanRequest`] that may be sent to the generation service.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ CLI flags /     │    │    PlanForm     │    │   PlanRequest   │
//! │ interactive form│───▶│  (raw inputs)   │───▶│   (validated)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    error::{PlannerError, Result},
    models::{canonical_meal, default_meals, Goal, PlanRequest, PlanningMode, PlanningPeriod},
};

/// Raw form inputs for one submission.
///
/// Both numeric inputs are kept regardless of the mode; the mode decides
/// which one is read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanForm {
    /// How the planning horizon is expressed
    pub mode: PlanningMode,
    /// Day count, read when planning by days
    pub days: u32,
    /// Week count, read when planning by weeks
    pub weeks: u32,
    /// Selected meal slots
    pub meals: Vec<String>,
    /// Dietary goal
    pub goal: Goal,
    /// Foods the user likes
    pub likes: String,
    /// Restrictions, allergies and dislikes
    pub dislikes: String,
    /// Ingredients already at home
    pub pantry_items: String,
}

impl Default for PlanForm {
    fn default() -> Self {
        Self {
            mode: PlanningMode::ByDays,
            days: 3,
            weeks: 1,
            meals: default_meals(),
            goal: Goal::GeneralHealth,
            likes: String::new(),
            dislikes: String::new(),
            pantry_items: String::new(),
        }
    }
}

impl PlanForm {
    /// Resolves the planning period selected by the current mode.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when the active count is outside
    /// the range the mode allows.
    pub fn period(&self) -> Result<PlanningPeriod> {
        match self.mode {
            PlanningMode::ByDays => {
                check_range("days", self.days, PlanningMode::DAY_RANGE.into_inner())?;
                Ok(PlanningPeriod::Days(self.days))
            }
            PlanningMode::ByWeeks => {
                check_range("weeks", self.weeks, PlanningMode::WEEK_RANGE.into_inner())?;
                Ok(PlanningPeriod::Weeks(self.weeks))
            }
        }
    }

    /// Validates the form and builds the request to submit.
    ///
    /// Meal names are trimmed, blank entries dropped and known options
    /// normalized to their canonical spelling. Order is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nutriplanner_core::{params::PlanForm, models::PlanningMode};
    ///
    /// let form = PlanForm {
    ///     mode: PlanningMode::ByWeeks,
    ///     weeks: 2,
    ///     ..PlanForm::default()
    /// };
    /// let request = form.to_request()?;
    /// assert_eq!(request.day_count, 14);
    /// assert_eq!(request.period_label, "2 semana(s)");
    /// # Ok::<(), nutriplanner_core::PlannerError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when the period is out of range or
    /// no meal is selected.
    pub fn to_request(&self) -> Result<PlanRequest> {
        let period = self.period()?;
        let meals: Vec<String> = self
            .meals
            .iter()
            .filter(|meal| !meal.trim().is_empty())
            .map(|meal| canonical_meal(meal))
            .collect();

        let request = PlanRequest {
            period_label: period.label(),
            day_count: period.day_count(),
            meals,
            goal: self.goal,
            likes: self.likes.trim().to_string(),
            dislikes: self.dislikes.trim().to_string(),
            pantry_items: self.pantry_items.trim().to_string(),
        };
        request.validate()?;
        Ok(request)
    }
}

fn check_range(field: &str, value: u32, (min, max): (u32, u32)) -> Result<()> {
    if value < min || value > max {
        return Err(PlannerError::invalid_input(field)
            .with_reason(format!("must be between {min} and {max}, got {value}")));
    }
    Ok(())
}
