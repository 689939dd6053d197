//! Planning horizon: how the user chose to express the plan length.

use std::{ops::RangeInclusive, str::FromStr};

use serde::{Deserialize, Serialize};

/// Selectable ways of expressing the planning horizon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanningMode {
    /// A direct number of days
    #[default]
    ByDays,

    /// A number of weeks, converted to days
    ByWeeks,
}

/// Numeric form inputs whose relevance depends on the planning mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Days,
    Weeks,
}

impl PlanningMode {
    /// Days accepted when planning by days.
    pub const DAY_RANGE: RangeInclusive<u32> = 1..=30;

    /// Weeks accepted when planning by weeks.
    pub const WEEK_RANGE: RangeInclusive<u32> = 1..=12;

    /// The numeric inputs the presentation layer should enable for this mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nutriplanner_core::models::{FormField, PlanningMode};
    ///
    /// assert_eq!(PlanningMode::ByDays.active_fields(), &[FormField::Days]);
    /// assert_eq!(PlanningMode::ByWeeks.active_fields(), &[FormField::Weeks]);
    /// ```
    pub fn active_fields(&self) -> &'static [FormField] {
        match self {
            PlanningMode::ByDays => &[FormField::Days],
            PlanningMode::ByWeeks => &[FormField::Weeks],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanningMode::ByDays => "days",
            PlanningMode::ByWeeks => "weeks",
        }
    }
}

impl FromStr for PlanningMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "days" | "dias" | "d" => Ok(PlanningMode::ByDays),
            "weeks" | "semanas" | "w" => Ok(PlanningMode::ByWeeks),
            _ => Err(format!("Invalid planning mode: {s}")),
        }
    }
}

/// A resolved planning horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanningPeriod {
    Days(u32),
    Weeks(u32),
}

impl PlanningPeriod {
    /// Total number of days to plan.
    pub fn day_count(&self) -> u32 {
        match *self {
            PlanningPeriod::Days(days) => days,
            PlanningPeriod::Weeks(weeks) => weeks * 7,
        }
    }

    /// Human-readable description of the horizon.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nutriplanner_core::models::PlanningPeriod;
    ///
    /// assert_eq!(PlanningPeriod::Days(3).label(), "3 dias");
    /// assert_eq!(PlanningPeriod::Weeks(2).label(), "2 semana(s)");
    /// assert_eq!(
    ///     PlanningPeriod::Weeks(4).label(),
    ///     "aproximadamente 1 mês(es) (4 semanas)"
    /// );
    /// ```
    pub fn label(&self) -> String {
        match *self {
            PlanningPeriod::Days(days) => format!("{days} dias"),
            PlanningPeriod::Weeks(weeks) if weeks >= 4 => format!(
                "aproximadamente {} mês(es) ({weeks} semanas)",
                approximate_months(weeks)
            ),
            PlanningPeriod::Weeks(weeks) => format!("{weeks} semana(s)"),
        }
    }
}

/// `weeks / 4` rounded to the nearest integer, ties to even.
fn approximate_months(weeks: u32) -> u32 {
    let (months, rest) = (weeks / 4, weeks % 4);
    if rest > 2 || (rest == 2 && months % 2 == 1) {
        months + 1
    } else {
        months
    }
}
