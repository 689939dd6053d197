//! Dietary goal enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the dietary goals a plan can target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    /// General healthy eating
    #[default]
    GeneralHealth,

    /// Weight loss through a light caloric deficit
    WeightLoss,

    /// Muscle gain through a light caloric surplus
    MuscleGain,

    /// Quick and practical preparation
    Convenience,

    /// Affordable ingredients
    Budget,

    /// Vegetarian or vegan
    Vegetarian,

    /// Low carbohydrate
    LowCarb,

    /// Diabetes control (low/moderate glycemic index)
    DiabetesControl,

    /// Hypertension control (low sodium)
    HypertensionControl,
}

const DIABETES_CLAUSE: &str = "Foco em alimentos de baixo a moderado índice glicêmico, ricos em fibras. Evitar açúcares simples e carboidratos refinados em excesso.";

const HYPERTENSION_CLAUSE: &str = "Priorizar alimentos com baixo teor de sódio. Evitar alimentos processados, embutidos e enlatados com alto sódio. Incentivar o uso de temperos naturais.";

impl Goal {
    /// Every goal, in the order they are offered to the user.
    pub const ALL: [Goal; 9] = [
        Goal::GeneralHealth,
        Goal::WeightLoss,
        Goal::MuscleGain,
        Goal::Convenience,
        Goal::Budget,
        Goal::Vegetarian,
        Goal::LowCarb,
        Goal::DiabetesControl,
        Goal::HypertensionControl,
    ];

    /// The label shown to the user and written verbatim into the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Goal::GeneralHealth => "Alimentação Saudável Geral",
            Goal::WeightLoss => "Perda de Peso (Déficit Calórico Leve)",
            Goal::MuscleGain => "Ganho de Massa Muscular (Superávit Calórico Leve)",
            Goal::Convenience => "Praticidade e Rapidez no Preparo",
            Goal::Budget => "Economia (Ingredientes Acessíveis)",
            Goal::Vegetarian => "Vegetariano/Vegano",
            Goal::LowCarb => "Baixo Carboidrato (Low Carb)",
            Goal::DiabetesControl => "Controle da Diabetes (Índice Glicêmico Baixo/Moderado)",
            Goal::HypertensionControl => "Controle da Hipertensão (Baixo Sódio)",
        }
    }

    /// Short command-line identifier.
    pub fn slug(&self) -> &'static str {
        match self {
            Goal::GeneralHealth => "general-health",
            Goal::WeightLoss => "weight-loss",
            Goal::MuscleGain => "muscle-gain",
            Goal::Convenience => "convenience",
            Goal::Budget => "budget",
            Goal::Vegetarian => "vegetarian",
            Goal::LowCarb => "low-carb",
            Goal::DiabetesControl => "diabetes",
            Goal::HypertensionControl => "hypertension",
        }
    }

    /// Extra instruction appended to the prompt for health-condition goals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nutriplanner_core::models::Goal;
    ///
    /// assert!(Goal::DiabetesControl.health_clause().is_some());
    /// assert!(Goal::Budget.health_clause().is_none());
    /// ```
    pub fn health_clause(&self) -> Option<&'static str> {
        match self {
            Goal::DiabetesControl => Some(DIABETES_CLAUSE),
            Goal::HypertensionControl => Some(HYPERTENSION_CLAUSE),
            _ => None,
        }
    }
}

impl FromStr for Goal {
    type Err = String;

    /// Accepts either the slug or the full label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Goal::ALL
            .into_iter()
            .find(|goal| goal.slug() == needle || goal.label().to_lowercase() == needle)
            .ok_or_else(|| format!("Invalid goal: {s}"))
    }
}
