//! Meal slot options.

/// Meal slots offered by the form, in display order.
pub const MEAL_OPTIONS: [&str; 6] = [
    "Café da Manhã",
    "Lanche da Manhã",
    "Almoço",
    "Lanche da Tarde",
    "Jantar",
    "Ceia",
];

/// Meal slots selected when the user does not pick any.
pub const DEFAULT_MEALS: [&str; 3] = ["Café da Manhã", "Almoço", "Jantar"];

/// Returns the canonical spelling of a known meal option, matching
/// case-insensitively. Unknown names are returned trimmed and unchanged.
pub fn canonical_meal(name: &str) -> String {
    let trimmed = name.trim();
    MEAL_OPTIONS
        .iter()
        .find(|option| option.to_lowercase() == trimmed.to_lowercase())
        .map_or_else(|| trimmed.to_string(), |option| (*option).to_string())
}

/// The default meal selection as owned strings.
pub fn default_meals() -> Vec<String> {
    DEFAULT_MEALS.iter().map(|meal| (*meal).to_string()).collect()
}
