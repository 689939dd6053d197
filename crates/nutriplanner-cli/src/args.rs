use clap::{Parser, Subcommand};

use crate::cli::FormArgs;

/// NutriPlanner AI: personalized meal plans from a generative model
///
/// Collects dietary preferences, asks the model for a day-by-day menu with a
/// shopping list, and flags preferences that conflict with the chosen health
/// goal. The API key is read from --api-key, GOOGLE_API_KEY or a .env file.
#[derive(Parser)]
#[command(version, about, name = "nutriplanner")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Google API key (overrides GOOGLE_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Model name (overrides NUTRIPLANNER_MODEL)
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Service endpoint (overrides NUTRIPLANNER_ENDPOINT)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, the interactive form starts.
#[derive(Subcommand)]
pub enum Commands {
    /// Fill in the form interactively and generate menus until you stop
    #[command(alias = "i")]
    Interactive,
    /// Generate one menu from command-line flags
    #[command(alias = "g")]
    Generate(FormArgs),
    /// Print the prompt that would be sent, without contacting the service
    Prompt(FormArgs),
    /// List goals, meal options and planning ranges
    Options,
}
