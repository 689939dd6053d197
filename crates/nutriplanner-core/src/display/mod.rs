//! Display formatting for replies, history and status messages.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! while wrapper types give context-specific output. Everything renders to
//! markdown, which the CLI's terminal renderer turns into styled text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display Wrappers│    │    Markdown     │
//! │ (PlanResponse,  │───▶│ (SessionHistory,│───▶│     Output      │
//! │  HistoryEntry)  │    │ OperationStatus)│    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use nutriplanner_core::display::{OperationStatus, SessionHistory};
//!
//! let empty = SessionHistory(&[]);
//! assert!(format!("{empty}").contains("Nenhum cardápio gerado nesta sessão ainda."));
//!
//! let warning = OperationStatus::warning("Escolha pelo menos uma refeição.");
//! assert!(format!("{warning}").starts_with("Warning:"));
//! ```

pub mod datetime;
pub mod history;
pub mod models;
pub mod status;

pub use datetime::LocalDateTime;
pub use history::{SessionHistory, EMPTY_HISTORY, HISTORY_HEADING};
pub use models::{GeneratedPlan, ALERT_HEADING, MENU_HEADING};
pub use status::{OperationStatus, StatusLevel};

/// Shown before every generation request.
pub const DISCLAIMER: &str = "Lembre-se: O NutriPlanner AI oferece sugestões e não substitui o aconselhamento de um nutricionista ou médico. Consulte um profissional para orientações personalizadas.";

/// Shown while a generation request is outstanding.
pub const THINKING_MESSAGE: &str =
    "O NutriPlanner AI está pensando no seu cardápio... Aguarde um instante! 🧑‍🍳";

/// Follow-up line after a generation failure.
pub const RETRY_HINT: &str =
    "Por favor, tente refinar seus inputs ou tente novamente mais tarde.";
