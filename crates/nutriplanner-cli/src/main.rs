//! NutriPlanner CLI Application
//!
//! Command-line interface for the NutriPlanner AI meal planner.

mod args;
mod cli;
mod form;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use nutriplanner_core::MealPlannerBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let Args {
        no_color,
        api_key,
        model,
        endpoint,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    info!("NutriPlanner started");

    let connect = |renderer: TerminalRenderer| -> Result<Cli> {
        let planner = MealPlannerBuilder::new()
            .with_api_key(api_key)
            .with_model(model)
            .with_endpoint(endpoint)
            .build()
            .context("Failed to initialize planner")?;
        info!("Using model {}", planner.model_name());
        Ok(Cli::new(planner, renderer))
    };

    match command {
        Some(Options) => cli::list_options(&renderer),
        Some(Prompt(form)) => cli::show_prompt(&renderer, &form.into()),
        Some(Generate(form)) => connect(renderer)?.generate_once(form.into()).await,
        Some(Interactive) | None => connect(renderer)?.run_interactive().await,
    }
}
