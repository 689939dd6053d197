//! Command handlers and the clap side of the form parameters.
//!
//! ```text
//! User Input → FormArgs (clap) / FormPrompter → PlanForm → handle_submit
//! ```

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Args, ValueEnum};
use log::info;
use nutriplanner_core::{
    build_prompt,
    display::{GeneratedPlan, OperationStatus, SessionHistory, DISCLAIMER, RETRY_HINT, THINKING_MESSAGE},
    handle_submit,
    models::{default_meals, Goal, PlanningMode, MEAL_OPTIONS},
    ErrorKind, MealPlanner, PlanForm, SessionState,
};

use crate::{form::FormPrompter, renderer::TerminalRenderer};

const TITLE: &str = "# 🥗 NutriPlanner AI: Seu Planejador de Cardápio Inteligente";
const SUBTITLE: &str = "Preencha os campos abaixo para gerar um cardápio semanal personalizado!";
const FAREWELL: &str = "Até a próxima! Bom apetite.";

/// Form inputs as command-line flags.
#[derive(Args, Debug)]
pub struct FormArgs {
    /// How the planning horizon is given
    #[arg(long, value_enum, default_value_t = ModeArg::Days)]
    pub mode: ModeArg,

    /// Number of days (1-30), used with --mode days
    #[arg(short, long, default_value_t = 3)]
    pub days: u32,

    /// Number of weeks (1-12), used with --mode weeks
    #[arg(short, long, default_value_t = 1)]
    pub weeks: u32,

    /// Meal to include; repeat for several. Defaults to breakfast, lunch and dinner
    #[arg(short, long = "meal", value_name = "MEAL")]
    pub meals: Vec<String>,

    /// Main dietary goal
    #[arg(short, long, value_enum, default_value_t = GoalArg::GeneralHealth)]
    pub goal: GoalArg,

    /// Foods you like
    #[arg(long, default_value = "")]
    pub likes: String,

    /// Restrictions, allergies or foods to avoid
    #[arg(long, default_value = "")]
    pub dislikes: String,

    /// Ingredients you already have at home
    #[arg(long, default_value = "")]
    pub pantry: String,
}

impl From<FormArgs> for PlanForm {
    fn from(val: FormArgs) -> Self {
        PlanForm {
            mode: val.mode.into(),
            days: val.days,
            weeks: val.weeks,
            meals: if val.meals.is_empty() {
                default_meals()
            } else {
                val.meals
            },
            goal: val.goal.into(),
            likes: val.likes,
            dislikes: val.dislikes,
            pantry_items: val.pantry,
        }
    }
}

/// Command-line representation of the planning mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Plan a number of days
    Days,
    /// Plan a number of weeks
    Weeks,
}

impl From<ModeArg> for PlanningMode {
    fn from(val: ModeArg) -> Self {
        match val {
            ModeArg::Days => PlanningMode::ByDays,
            ModeArg::Weeks => PlanningMode::ByWeeks,
        }
    }
}

/// Command-line representation of the dietary goal. Value names match
/// [`Goal::slug`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum GoalArg {
    GeneralHealth,
    WeightLoss,
    MuscleGain,
    Convenience,
    Budget,
    Vegetarian,
    LowCarb,
    Diabetes,
    Hypertension,
}

impl From<GoalArg> for Goal {
    fn from(val: GoalArg) -> Self {
        match val {
            GoalArg::GeneralHealth => Goal::GeneralHealth,
            GoalArg::WeightLoss => Goal::WeightLoss,
            GoalArg::MuscleGain => Goal::MuscleGain,
            GoalArg::Convenience => Goal::Convenience,
            GoalArg::Budget => Goal::Budget,
            GoalArg::Vegetarian => Goal::Vegetarian,
            GoalArg::LowCarb => Goal::LowCarb,
            GoalArg::Diabetes => Goal::DiabetesControl,
            GoalArg::Hypertension => Goal::HypertensionControl,
        }
    }
}

/// Commands that talk to the generation service.
pub struct Cli {
    planner: MealPlanner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: MealPlanner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Generates a single menu from `form`.
    pub async fn generate_once(&self, form: PlanForm) -> Result<()> {
        let mut session = SessionState::new();
        self.submit(&mut session, &form).await
    }

    /// Runs the form loop on stdin/stdout until the user stops or input ends.
    pub async fn run_interactive(&self) -> Result<()> {
        let stdin = io::stdin();
        self.run_form_loop(FormPrompter::new(stdin.lock(), io::stdout()))
            .await
    }

    async fn run_form_loop<R: BufRead, W: Write>(
        &self,
        mut prompter: FormPrompter<R, W>,
    ) -> Result<()> {
        let mut session = SessionState::new();
        self.renderer.render(&format!("{TITLE}\n\n{SUBTITLE}\n"))?;

        loop {
            let Some(form) = prompter.fill(session.mode())? else {
                break;
            };
            session.set_mode(form.mode);

            self.submit(&mut session, &form).await?;
            self.renderer
                .render(&SessionHistory(session.history()).to_string())?;

            if !prompter.confirm("Gerar outro cardápio?")? {
                break;
            }
        }

        info!("Session ended with {} menu(s)", session.len());
        self.renderer.render(&format!("\n{FAREWELL}\n"))?;
        Ok(())
    }

    /// Submits one form and renders the outcome. Validation and service
    /// failures are reported, not returned.
    async fn submit(&self, session: &mut SessionState, form: &PlanForm) -> Result<()> {
        if let Err(e) = form.to_request() {
            self.renderer
                .render(&OperationStatus::from_error(&e).to_string())?;
            return Ok(());
        }

        self.renderer.render(&format!("\n_{DISCLAIMER}_\n\n"))?;

        let spinner = self.renderer.spinner(THINKING_MESSAGE);
        let result = handle_submit(&self.planner, session, form).await;
        spinner.finish_and_clear();

        match result {
            Ok(entry) => {
                self.renderer
                    .render(&GeneratedPlan(&entry.response).to_string())?;
                if let Some(alert) = &entry.response.alert_text {
                    self.renderer.render_alert(alert)?;
                }
            }
            Err(e) => {
                self.renderer
                    .render(&OperationStatus::from_error(&e).to_string())?;
                if e.kind() == ErrorKind::Generation {
                    self.renderer.render(&format!("{RETRY_HINT}\n"))?;
                }
            }
        }
        Ok(())
    }
}

/// Prints the prompt `form` would produce. Invalid input is reported as a
/// warning.
pub fn show_prompt(renderer: &TerminalRenderer, form: &PlanForm) -> Result<()> {
    match form.to_request() {
        Ok(request) => {
            println!("{}", build_prompt(&request));
            Ok(())
        }
        Err(e) => renderer.render(&OperationStatus::from_error(&e).to_string()),
    }
}

/// Lists goals, meal options and planning ranges.
pub fn list_options(renderer: &TerminalRenderer) -> Result<()> {
    renderer.render(&options_markdown())
}

fn options_markdown() -> String {
    let mut output = String::from("## Objetivos (--goal)\n\n");
    for goal in Goal::ALL {
        output.push_str(&format!("- `{}`: {}\n", goal.slug(), goal.label()));
    }

    output.push_str("\n## Refeições (--meal)\n\n");
    for meal in MEAL_OPTIONS {
        output.push_str(&format!("- {meal}\n"));
    }

    let days = PlanningMode::DAY_RANGE;
    let weeks = PlanningMode::WEEK_RANGE;
    output.push_str("\n## Período (--mode)\n\n");
    output.push_str(&format!(
        "- `days`: {} a {} dias (--days)\n",
        days.start(),
        days.end()
    ));
    output.push_str(&format!(
        "- `weeks`: {} a {} semanas (--weeks)\n",
        weeks.start(),
        weeks.end()
    ));
    output
}
