//! Interactive form on any line-based reader and writer.
//!
//! The prompter asks for the planning mode first and then only the fields
//! that mode makes active. Range checks are left to the core so the user
//! sees the same validation messages as with command-line flags.

use std::{
    io::{self, BufRead, Write},
    ops::RangeInclusive,
};

use nutriplanner_core::{
    models::{canonical_meal, default_meals, FormField, Goal, PlanningMode, MEAL_OPTIONS},
    PlanForm,
};

const LIKES_QUESTION: &str = "Alimentos que você gosta (ex: frango, abacate, chocolate amargo): ";
const DISLIKES_QUESTION: &str = "Restrições, alergias ou alimentos a evitar (ex: glúten, amendoim): ";
const PANTRY_QUESTION: &str = "Ingredientes que você já tem em casa (ex: arroz, ovos, tomate): ";

/// Line-oriented form prompter.
pub struct FormPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> FormPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Collects one complete form. Returns `None` when input ends.
    pub fn fill(&mut self, current_mode: PlanningMode) -> io::Result<Option<PlanForm>> {
        let mut form = PlanForm::default();

        let Some(mode) = self.ask_mode(current_mode)? else {
            return Ok(None);
        };
        form.mode = mode;

        for field in mode.active_fields() {
            let answer = match field {
                FormField::Days => {
                    self.ask_number("Para quantos dias?", PlanningMode::DAY_RANGE, form.days)?
                }
                FormField::Weeks => {
                    self.ask_number("Para quantas semanas?", PlanningMode::WEEK_RANGE, form.weeks)?
                }
            };
            let Some(value) = answer else {
                return Ok(None);
            };
            match field {
                FormField::Days => form.days = value,
                FormField::Weeks => form.weeks = value,
            }
        }

        let Some(meals) = self.ask_meals()? else {
            return Ok(None);
        };
        form.meals = meals;

        let Some(goal) = self.ask_goal()? else {
            return Ok(None);
        };
        form.goal = goal;

        let Some(likes) = self.ask(LIKES_QUESTION)? else {
            return Ok(None);
        };
        let Some(dislikes) = self.ask(DISLIKES_QUESTION)? else {
            return Ok(None);
        };
        let Some(pantry_items) = self.ask(PANTRY_QUESTION)? else {
            return Ok(None);
        };
        form.likes = likes;
        form.dislikes = dislikes;
        form.pantry_items = pantry_items;

        Ok(Some(form))
    }

    /// Asks a yes/no question; anything but an explicit yes is a no.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.ask(&format!("\n{question} [s/N]: "))?;
        Ok(answer.is_some_and(|answer| is_yes(&answer)))
    }

    fn ask_mode(&mut self, current: PlanningMode) -> io::Result<Option<PlanningMode>> {
        let default = match current {
            PlanningMode::ByDays => "1",
            PlanningMode::ByWeeks => "2",
        };
        let question =
            format!("\nComo deseja planejar? [1] Por dias  [2] Por semanas [{default}]: ");
        loop {
            let Some(answer) = self.ask(&question)? else {
                return Ok(None);
            };
            match parse_mode(&answer, current) {
                Some(mode) => return Ok(Some(mode)),
                None => writeln!(self.output, "Opção inválida. Digite 1 ou 2.")?,
            }
        }
    }

    fn ask_number(
        &mut self,
        question: &str,
        range: RangeInclusive<u32>,
        default: u32,
    ) -> io::Result<Option<u32>> {
        let question = format!(
            "{question} ({}-{}) [{default}]: ",
            range.start(),
            range.end()
        );
        loop {
            let Some(answer) = self.ask(&question)? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some(default));
            }
            match answer.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Digite um número inteiro.")?,
            }
        }
    }

    fn ask_meals(&mut self) -> io::Result<Option<Vec<String>>> {
        writeln!(self.output, "\nRefeições:")?;
        for (i, meal) in MEAL_OPTIONS.iter().enumerate() {
            writeln!(self.output, "  [{}] {meal}", i + 1)?;
        }
        let answer =
            self.ask("Escolha números ou nomes separados por vírgula [1,3,5]: ")?;
        Ok(answer.map(|answer| parse_meals(&answer)))
    }

    fn ask_goal(&mut self) -> io::Result<Option<Goal>> {
        writeln!(self.output, "\nObjetivo principal:")?;
        for (i, goal) in Goal::ALL.iter().enumerate() {
            writeln!(self.output, "  [{}] {}", i + 1, goal.label())?;
        }
        loop {
            let Some(answer) = self.ask("Escolha um objetivo [1]: ")? else {
                return Ok(None);
            };
            match parse_goal(&answer) {
                Some(goal) => return Ok(Some(goal)),
                None => writeln!(self.output, "Objetivo inválido.")?,
            }
        }
    }

    /// Writes `question` and reads one trimmed line; `None` at end of input.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// `1`/`2`, a mode name, or blank for the current mode.
fn parse_mode(answer: &str, current: PlanningMode) -> Option<PlanningMode> {
    match answer.trim() {
        "" => Some(current),
        "1" => Some(PlanningMode::ByDays),
        "2" => Some(PlanningMode::ByWeeks),
        other => other.parse().ok(),
    }
}

/// Comma-separated option numbers or meal names; blank selects the defaults.
fn parse_meals(answer: &str) -> Vec<String> {
    if answer.trim().is_empty() {
        return default_meals();
    }
    answer
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| match token.parse::<usize>() {
            Ok(n) if (1..=MEAL_OPTIONS.len()).contains(&n) => MEAL_OPTIONS[n - 1].to_string(),
            _ => canonical_meal(token),
        })
        .collect()
}

/// An option number, slug or label; blank selects the default goal.
fn parse_goal(answer: &str) -> Option<Goal> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Some(Goal::default());
    }
    match answer.parse::<usize>() {
        Ok(n) => Goal::ALL.get(n.checked_sub(1)?).copied(),
        Err(_) => answer.parse().ok(),
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    )
}
