//! Submission handling shared by every interface.
//!
//! A submission runs one fixed pipeline:
//!
//! ```text
//! PlanForm → validate → build_prompt → generate → split_response → history
//! ```
//!
//! Validation failures never reach the generation service, and a failed
//! generation leaves the session history untouched.

use log::{info, warn};

use crate::{
    error::Result,
    models::HistoryEntry,
    params::PlanForm,
    planner::MealPlanner,
    session::SessionState,
};

/// Handle one form submission.
///
/// Validates `form`, asks `planner` for a plan and appends the result to
/// `session`. Returns the newly recorded entry.
///
/// # Errors
///
/// * `PlannerError::InvalidInput` when the form fails validation; the
///   service is not called.
/// * `PlannerError::Generation` when the service call fails; history is not
///   modified.
///
/// # Examples
///
/// ```rust,no_run
/// # use nutriplanner_core::{handlers::handle_submit, params::PlanForm, MealPlannerBuilder, SessionState};
/// # async {
/// let planner = MealPlannerBuilder::new().build()?;
/// let mut session = SessionState::new();
/// let entry = handle_submit(&planner, &mut session, &PlanForm::default()).await?;
/// println!("{}", entry.response);
/// # Result::<(), nutriplanner_core::PlannerError>::Ok(())
/// # };
/// ```
pub async fn handle_submit<'a>(
    planner: &MealPlanner,
    session: &'a mut SessionState,
    form: &PlanForm,
) -> Result<&'a HistoryEntry> {
    let request = match form.to_request() {
        Ok(request) => request,
        Err(e) => {
            warn!("Submission rejected: {e}");
            return Err(e);
        }
    };
    info!(
        "Submission accepted: {} ({} meals, goal {})",
        request.period_label,
        request.meals.len(),
        request.goal.slug()
    );

    let response = match planner.generate_plan(&request).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Generation failed: {e}");
            return Err(e);
        }
    };

    let entry = session.record(request, response);
    info!("Recorded menu #{} in session history", entry.number);
    Ok(entry)
}
