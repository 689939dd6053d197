//! Display implementations for domain models.
//!
//! All output is markdown. The alert section of a reply is rendered as a
//! block quote so terminals can set it apart from the menu.

use std::fmt;

use serde::Serialize;

use super::datetime::LocalDateTime;
use crate::models::{Goal, HistoryEntry, PlanResponse, PlanningMode};

/// Heading shown above a freshly generated menu.
pub const MENU_HEADING: &str = "📅 Seu Cardápio Personalizado by NutriPlanner AI:";

/// Heading shown above the alert section.
pub const ALERT_HEADING: &str = "⚠️ Atenção";

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for PlanningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlanResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.menu_text)?;
        if let Some(alert) = &self.alert_text {
            writeln!(f)?;
            writeln!(f, "---")?;
            writeln!(f)?;
            writeln!(f, "**{ALERT_HEADING}**")?;
            writeln!(f)?;
            for line in alert.lines() {
                if line.is_empty() {
                    writeln!(f, ">")?;
                } else {
                    writeln!(f, "> {line}")?;
                }
            }
        }
        Ok(())
    }
}

/// The menu of a fresh reply under its heading, as shown right after
/// generation. The alert is left out so the caller can present it as a
/// separate block.
pub struct GeneratedPlan<'a>(pub &'a PlanResponse);

impl fmt::Display for GeneratedPlan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {MENU_HEADING}")?;
        writeln!(f)?;
        writeln!(f, "{}", self.0.menu_text)
    }
}

/// Free-text inputs echoed back in the history view.
#[derive(Serialize)]
struct InformedPreferences<'a> {
    preferencias: &'a str,
    restricoes: &'a str,
    ingredientes_casa: &'a str,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### Cardápio {} (Objetivo: {} para {})",
            self.number, self.request.goal, self.request.period_label
        )?;
        writeln!(f)?;
        writeln!(f, "_Gerado em {}_", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        let preferences = InformedPreferences {
            preferencias: &self.request.likes,
            restricoes: &self.request.dislikes,
            ingredientes_casa: &self.request.pantry_items,
        };
        let json = serde_json::to_string_pretty(&preferences).map_err(|_| fmt::Error)?;
        writeln!(f, "**Preferências e Restrições Informadas:**")?;
        writeln!(f)?;
        writeln!(f, "```json")?;
        writeln!(f, "{json}")?;
        writeln!(f, "```")?;
        writeln!(f)?;

        writeln!(f, "**Cardápio Gerado:**")?;
        writeln!(f)?;
        write!(f, "{}", self.response)
    }
}
