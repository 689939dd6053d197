//! Plan response model.

use serde::{Deserialize, Serialize};

/// The model's reply, split into the menu and an optional alert section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanResponse {
    /// Menu section, always present (may be empty)
    pub menu_text: String,

    /// Alert section, starting with the marker, when the reply contains one
    pub alert_text: Option<String>,
}

impl PlanResponse {
    /// Whether the reply carried an alert section.
    pub fn has_alert(&self) -> bool {
        self.alert_text.is_some()
    }
}
